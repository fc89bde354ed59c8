use clap::Parser;
use crossbeam_channel::{Receiver, select, tick, unbounded};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use focusmate::app::App;
use focusmate::config::QuizConfig;
use focusmate::csv::DEFAULT_DECK_DIR;
use focusmate::error::AppError;
use focusmate::logger::{self, DEFAULT_LOG_FILE};
use focusmate::session::handle_key;
use focusmate::ui;

#[derive(Debug, Parser)]
#[command(name = "focusmate", version, about = "Timed multiple-choice quizzes from flashcard decks")]
struct Args {
    /// Directory scanned for .csv and .json decks
    #[arg(long, default_value = DEFAULT_DECK_DIR)]
    deck_dir: PathBuf,

    /// JSON file with quiz settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of questions per quiz
    #[arg(long)]
    questions: Option<usize>,

    /// Seconds allowed per question
    #[arg(long)]
    time_limit: Option<u32>,

    /// Append a debug log to this file
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_LOG_FILE)]
    log: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<QuizConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => QuizConfig::load(path)?,
        None => QuizConfig::default(),
    };
    if let Some(questions) = args.questions {
        config.question_count = questions;
    }
    if let Some(secs) = args.time_limit {
        config.countdown_secs = secs;
    }
    config.validate()?;
    Ok(config)
}

fn spawn_input_reader() -> io::Result<Receiver<Event>> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name("focusmate::input".to_string())
        .spawn(move || {
            loop {
                match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        logger::log(&format!("Input reader stopped: {}", e));
                        break;
                    }
                }
            }
        })?;
    Ok(rx)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    let input = spawn_input_reader()?;
    let ticker = tick(Duration::from_secs(1));

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        select! {
            recv(input) -> msg => match msg {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => handle_key(app, key),
                Ok(_) => {}
                Err(_) => {
                    logger::log("Input channel closed");
                    break;
                }
            },
            recv(ticker) -> _ => app.on_tick(),
        }
    }

    Ok(())
}

/// Runs `body` and then `restore`, whatever `body` returned. The first error wins.
fn with_restore<T>(
    body: impl FnOnce() -> Result<T, AppError>,
    restore: impl FnOnce() -> Result<(), AppError>,
) -> Result<T, AppError> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn run_in_terminal(app: &mut App) -> Result<(), AppError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    run(&mut terminal, app)
}

fn restore_terminal() -> Result<(), AppError> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw?;
    screen?;
    Ok(())
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if let Some(path) = &args.log
        && let Err(e) = logger::init(path)
    {
        eprintln!("Could not open log file {}: {}", path.display(), e);
    }
    logger::log("FocusMate starting");

    let config = load_config(&args)?;
    logger::log(&format!("Quiz settings: {:?}", config));
    let mut app = App::new(config, &args.deck_dir);

    enable_raw_mode()?;
    let result = with_restore(|| run_in_terminal(&mut app), restore_terminal);

    logger::log("FocusMate exiting");
    result
}

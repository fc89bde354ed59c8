use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use super::key_span;
use crate::app::App;
use crate::models::AnswerEvent;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{option_label, truncate_string, wrap_text};

/// Seconds at which the countdown turns red.
const LOW_TIME_SECS: u32 = 5;
const OPTION_INDENT: &str = "   ";

pub fn draw_quiz(f: &mut Frame, app: &App) {
    let engine = &app.engine;
    let layout = calculate_quiz_chunks(f.area());

    let Some(question) = engine.current_question() else {
        return;
    };
    let total = engine.questions().len();

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(layout.header_area);

    let header = Paragraph::new(format!(
        "Question {} / {} - Score: {} - {}",
        engine.current_index() + 1,
        total,
        engine.score(),
        question.topic
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, header_chunks[0]);

    let (timer_text, timer_color) = match engine.remaining_secs() {
        Some(secs) if secs <= LOW_TIME_SECS => (format!("{}s", secs), Color::Red),
        Some(secs) => (format!("{}s", secs), Color::Green),
        None => ("--".to_string(), Color::DarkGray),
    };
    let timer = Paragraph::new(timer_text)
        .style(Style::default().fg(timer_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Time"));
    f.render_widget(timer, header_chunks[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .label(format!("{} / {} done", engine.current_index(), total))
        .ratio(engine.progress().clamp(0.0, 1.0));
    f.render_widget(gauge, layout.progress_area);

    let prompt = Paragraph::new(question.prompt.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt, layout.question_area);

    let feedback = engine.feedback().filter(|_| engine.is_feedback_pending());
    let rows = option_rows(
        &question.options,
        layout.options_area.width.saturating_sub(2) as usize,
        layout.options_area.height.saturating_sub(2) as usize,
    );
    let mut options = Text::default();
    for (option, lines) in question.options.iter().zip(rows) {
        let style = match feedback {
            Some(_) if *option == question.correct_answer => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Some(answer) if answer.selected.as_deref() == Some(option.as_str()) => {
                Style::default().fg(Color::Red)
            }
            Some(_) => Style::default().fg(Color::DarkGray),
            None => Style::default(),
        };
        for line in lines {
            options.push_line(Line::from(Span::styled(line, style)));
        }
    }
    let options = Paragraph::new(options)
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let feedback_line = match feedback {
        Some(answer) => feedback_message(answer),
        None => Line::from(""),
    };
    let feedback_widget = Paragraph::new(feedback_line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback_widget, layout.feedback_area);

    let last_key = option_label(question.options.len().saturating_sub(1));
    let help_text = vec![Line::from(vec![
        key_span(format!("A-{}", last_key)),
        Span::from(" Answer  "),
        key_span("Esc"),
        Span::from(" Quit to Deck  "),
        key_span("Ctrl+C"),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

/// Display lines per option, labelled "A) ", "B) ", ... with a hanging indent.
/// When the wrapped options need more than `height` rows, every option is cut
/// to a single line so that all of them stay on screen.
fn option_rows(options: &[String], width: usize, height: usize) -> Vec<Vec<String>> {
    let text_width = width.saturating_sub(OPTION_INDENT.len()).max(1);
    let wrapped: Vec<Vec<String>> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            wrap_text(option, text_width)
                .into_iter()
                .enumerate()
                .map(|(n, line)| {
                    if n == 0 {
                        format!("{}) {}", option_label(i), line)
                    } else {
                        format!("{}{}", OPTION_INDENT, line)
                    }
                })
                .collect()
        })
        .collect();

    if wrapped.iter().map(Vec::len).sum::<usize>() <= height {
        return wrapped;
    }

    options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            vec![truncate_string(
                &format!("{}) {}", option_label(i), option),
                width,
            )]
        })
        .collect()
}

fn feedback_message(answer: &AnswerEvent) -> Line<'static> {
    if answer.correct {
        Line::from(Span::styled(
            "Correct! Well done!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else if answer.timed_out() {
        Line::from(Span::styled(
            format!("Time's up! The correct answer is: {}", answer.correct_answer),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            format!("Incorrect. The correct answer is: {}", answer.correct_answer),
            Style::default().fg(Color::Red),
        ))
    }
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Leave Quiz")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Abandon this quiz? Progress will be lost.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Back to Deck)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        key_span("Ctrl+C"),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use crate::utils::display_width;

    fn answer(selected: Option<&str>, correct: bool) -> AnswerEvent {
        AnswerEvent {
            question_id: 1,
            question_index: 0,
            topic: "Space".to_string(),
            difficulty: Difficulty::Medium,
            selected: selected.map(str::to_string),
            correct_answer: "Our home galaxy.".to_string(),
            correct,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn options() -> Vec<String> {
        vec![
            "The brain of your computer. It processes all instructions and calculations.".to_string(),
            "Short one.".to_string(),
            "Your computer's short-term memory for data the CPU needs quickly.".to_string(),
            "The language of the web.".to_string(),
        ]
    }

    #[test]
    fn test_option_rows_wrap_with_hanging_indent_when_room() {
        let rows = option_rows(&options(), 40, 20);
        assert_eq!(rows.len(), 4);
        assert!(rows[0][0].starts_with("A) The brain"));
        assert!(rows[0].len() > 1);
        assert!(rows[0][1].starts_with(OPTION_INDENT));
        assert_eq!(rows[1], vec!["B) Short one."]);
        assert!(rows.iter().flatten().all(|l| display_width(l) <= 40));
    }

    #[test]
    fn test_option_rows_truncate_when_crowded() {
        let rows = option_rows(&options(), 40, 5);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|lines| lines.len() == 1));
        assert!(rows[0][0].starts_with("A) "));
        assert!(rows[0][0].ends_with("..."));
        assert_eq!(rows[3][0], "D) The language of the web.");
        assert!(rows.iter().flatten().all(|l| display_width(l) <= 40));
    }

    #[test]
    fn test_feedback_messages() {
        let correct = feedback_message(&answer(Some("Our home galaxy."), true));
        assert_eq!(line_text(&correct), "Correct! Well done!");

        let wrong = feedback_message(&answer(Some("An icy body."), false));
        assert_eq!(
            line_text(&wrong),
            "Incorrect. The correct answer is: Our home galaxy."
        );

        let timed_out = feedback_message(&answer(None, false));
        assert!(line_text(&timed_out).starts_with("Time's up!"));
    }
}

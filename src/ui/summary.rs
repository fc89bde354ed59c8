use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::key_span;
use crate::app::App;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::{format_accuracy, truncate_string};

const BAR_WIDTH: usize = 20;

fn accuracy_bar(accuracy: f64) -> String {
    let filled = ((accuracy / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn accuracy_color(accuracy: f64) -> Color {
    if accuracy >= 80.0 {
        Color::Green
    } else if accuracy >= 50.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn draw_summary(f: &mut Frame, app: &App) {
    let engine = &app.engine;
    let layout = calculate_summary_chunks(f.area());
    let summary = engine.summary();
    let stats = engine.stats();

    let title = Paragraph::new(format!("Quiz Complete - {}", app.deck.name))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut score_text = Text::default();
    score_text.push_line(Line::from(vec![
        Span::from("Score: "),
        Span::styled(
            format!("{} / {}", engine.score(), engine.questions().len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from("   Accuracy: "),
        Span::styled(
            format_accuracy(summary.overall_accuracy),
            Style::default()
                .fg(accuracy_color(summary.overall_accuracy))
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    let weakest = match summary.weakest_topic() {
        Some((topic, accuracy)) if stats.total_answered > 0 => {
            format!("Focus next on: {} ({})", topic, format_accuracy(accuracy))
        }
        _ => "No questions were answered.".to_string(),
    };
    score_text.push_line(Line::from(Span::styled(
        weakest,
        Style::default().fg(Color::Yellow),
    )));
    let score = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Result"));
    f.render_widget(score, layout.score_area);

    let mut topic_text = Text::default();
    for (topic, tally) in &stats.by_topic {
        let accuracy = tally.accuracy();
        topic_text.push_line(Line::from(format!(
            "{} ({}/{})",
            truncate_string(topic, 24),
            tally.correct,
            tally.total
        )));
        topic_text.push_line(Line::from(Span::styled(
            format!("{} {}", accuracy_bar(accuracy), format_accuracy(accuracy)),
            Style::default().fg(accuracy_color(accuracy)),
        )));
    }
    for (difficulty, accuracy) in &summary.per_difficulty_accuracy {
        topic_text.push_line(Line::from(format!(
            "Difficulty {}: {}",
            difficulty,
            format_accuracy(*accuracy)
        )));
    }
    let topics = Paragraph::new(topic_text)
        .block(Block::default().borders(Borders::ALL).title("By Topic"));
    f.render_widget(topics, layout.topics_area);

    let mut review_text = Text::default();
    for answer in engine.history() {
        let (mark, color) = if answer.correct {
            ("[✓]", Color::Green)
        } else {
            ("[✗]", Color::Red)
        };
        let prompt = engine
            .questions()
            .get(answer.question_index)
            .map(|q| q.prompt.as_str())
            .unwrap_or_default();
        review_text.push_line(Line::from(vec![
            Span::styled(mark, Style::default().fg(color)),
            Span::from(format!(
                " {}. {}",
                answer.question_index + 1,
                truncate_string(prompt, 60)
            )),
        ]));
        let given = answer.selected.as_deref().unwrap_or("(no answer)");
        review_text.push_line(Line::from(format!(
            "   Your Answer: {}",
            truncate_string(given, 56)
        )));
        if !answer.correct {
            review_text.push_line(Line::from(format!(
                "   Correct: {}",
                truncate_string(&answer.correct_answer, 56)
            )));
        }
    }
    let review = Paragraph::new(review_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Answers"));
    f.render_widget(review, layout.review_area);

    let help_text = vec![Line::from(vec![
        key_span("r"),
        Span::from(" Try Again  "),
        key_span("m"),
        Span::from(" Back to Deck  "),
        key_span("Esc"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}

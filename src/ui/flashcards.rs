use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::key_span;
use crate::app::{App, FormField};

pub fn draw_flashcards(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let visible = app.browser.visible_cards(&app.deck);
    let header_text = if visible.is_empty() {
        format!("{} - {}", app.deck.name, app.browser.filter.label())
    } else {
        format!(
            "{} - {} - Card {} / {}",
            app.deck.name,
            app.browser.filter.label(),
            app.browser.index + 1,
            visible.len()
        )
    };
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let card = match app.browser.current(&app.deck) {
        Some(card) => {
            let (title, body, color) = if app.browser.showing_definition {
                ("Definition", card.definition, Color::Green)
            } else {
                ("Term", card.term, Color::Yellow)
            };
            let mut text = Text::default();
            text.push_line(Line::from(Span::styled(
                card.topic,
                Style::default().fg(Color::DarkGray),
            )));
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                body,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(title))
        }
        None => Paragraph::new("No cards for this topic. Press n to add one.")
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
    };
    f.render_widget(card, chunks[1]);

    let status = Paragraph::new(app.status_message.clone().unwrap_or_default())
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    let help_text = vec![Line::from(vec![
        key_span("Space"),
        Span::from(" Flip  "),
        key_span("←/→"),
        Span::from(" Prev/Next  "),
        key_span("t"),
        Span::from(" Topic  "),
        key_span("n"),
        Span::from(" New Card  "),
        key_span("s"),
        Span::from(" Start Quiz  "),
        key_span("Esc"),
        Span::from(" Menu"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

pub fn draw_card_form(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Add Flashcard - {}", app.deck.name))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let fields = [FormField::Topic, FormField::Term, FormField::Definition];
    for (field, area) in fields.into_iter().zip(chunks[1..4].iter()) {
        let focused = app.form.focused == field;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(app.form.field(field))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(field.label()),
            );
        f.render_widget(input, *area);
    }

    let error = Paragraph::new(app.form.error.clone().unwrap_or_default())
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(error, chunks[4]);

    let help_text = vec![Line::from(vec![
        key_span("Tab"),
        Span::from(" Next Field  "),
        key_span("Enter"),
        Span::from(" Save  "),
        key_span("Esc"),
        Span::from(" Cancel"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[5]);
}

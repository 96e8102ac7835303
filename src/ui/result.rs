use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::Outcome;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.session().summary().unwrap_or_default();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], score.correct, score.wrong);
    render_question_breakdown(frame, chunks[2], app.session().history());
    render_controls(frame, chunks[3]);
}

fn render_score_summary(frame: &mut Frame, area: Rect, correct: usize, wrong: usize) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ BEENDET",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Richtig beantwortet: ", Style::default().fg(Color::Gray)),
            Span::styled(correct.to_string(), Style::default().fg(Color::Green).bold()),
        ]),
        Line::from(vec![
            Span::styled("Falsch beantwortet: ", Style::default().fg(Color::Gray)),
            Span::styled(wrong.to_string(), Style::default().fg(Color::Red).bold()),
        ]),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, history: &[Outcome]) {
    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .map(|(index, outcome)| {
            let (symbol, color) = if outcome.correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            let preview = if outcome.prompt.is_empty() {
                format!("({})", outcome.kind)
            } else {
                truncate_question(&outcome.prompt)
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(preview, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        Block, Borders, Padding, Paragraph, Wrap,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use crate::app::App;
use crate::engine::{BlankSurface, ChoiceSurface, MatchingSurface, Side, SortingSurface, Surface};
use crate::engine::{TokenPlace, TrueFalseSurface};
use crate::models::TruthValue;
use crate::session::Phase;

/// Rows per matching entry: the entry itself plus one spacer row.
const MATCHING_ROW_STRIDE: usize = 2;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let (Some(question), Some(surface)) = (session.current_question(), session.surface()) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], question.prompt());

    match surface {
        Surface::MultipleChoice(s) => render_choices(frame, chunks[2], s, app.cursor()),
        Surface::TrueFalse(s) => render_true_false(frame, chunks[2], s, app.cursor()),
        Surface::FillInBlank(s) => render_blanks(frame, chunks[2], s, app),
        Surface::Sorting(s) => render_sorting(frame, chunks[2], s, app),
        Surface::Matching(s) => render_matching(frame, chunks[2], s, app),
    }

    render_verdict(frame, chunks[3], session.phase());
    render_controls(frame, chunks[4], surface, session.phase());
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let score = session.score();
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let tally = Line::from(vec![
        Span::styled(format!("✔ {}", score.correct), Style::default().fg(Color::Green)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("✘ {}", score.wrong), Style::default().fg(Color::Red)),
    ]);
    frame.render_widget(Paragraph::new(tally), halves[0]);

    let progress = format!("{}/{}", session.index() + 1, session.total());
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, halves[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn cursor_style(is_cursor: bool) -> Style {
    if is_cursor {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn marker(is_cursor: bool) -> &'static str {
    if is_cursor { " > " } else { "   " }
}

fn render_choices(frame: &mut Frame, area: Rect, surface: &ChoiceSurface, cursor: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(surface.options().len() * 2);

    for (index, option) in surface.options().iter().enumerate() {
        let style = cursor_style(index == cursor);
        let checkbox = if surface.is_checked(index) { "[x] " } else { "[ ] " };

        lines.push(Line::from(vec![
            Span::styled(marker(index == cursor), style),
            Span::styled(checkbox, style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_true_false(frame: &mut Frame, area: Rect, surface: &TrueFalseSurface, cursor: usize) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    for (index, choice) in TruthValue::ALL.iter().enumerate() {
        let style = cursor_style(index == cursor);
        let radio = if surface.selected() == Some(*choice) { "(•) " } else { "( ) " };

        let widget = Paragraph::new(Line::from(vec![
            Span::styled(radio, style),
            Span::styled(choice.label(), style),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style),
        );
        frame.render_widget(widget, halves[index]);
    }
}

fn render_blanks(frame: &mut Frame, area: Rect, surface: &BlankSurface, app: &App) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).split(area);

    let mut spans = Vec::new();
    for (index, segment) in surface.segments().iter().enumerate() {
        spans.push(Span::styled(segment.as_str(), Style::default().fg(Color::White)));
        if index + 1 == surface.segments().len() {
            break;
        }

        let content = surface
            .occupant(index)
            .and_then(|token| surface.tokens().get(token))
            .map_or("______", String::as_str);
        let style = if surface.focused() == Some(index) {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Yellow).underlined()
        };
        spans.push(Span::styled(format!("[{}: {}]", index + 1, content), style));
    }

    let sentence = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false });
    frame.render_widget(sentence, chunks[0]);

    let lines: Vec<Line> = surface
        .tokens()
        .iter()
        .enumerate()
        .map(|(token, value)| {
            let is_cursor = token == app.cursor();
            let mut style = cursor_style(is_cursor);
            if app.grabbed() == Some(token) {
                style = style.fg(Color::Yellow);
            }
            let place = match surface.place_of(token) {
                Some(TokenPlace::Blank(blank)) => format!("  → {}", blank + 1),
                _ => String::new(),
            };
            Line::from(vec![
                Span::styled(marker(is_cursor), style),
                Span::styled(value.as_str(), style),
                Span::styled(place, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let pool = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .title(" Tokens ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(pool, chunks[1]);
}

fn render_sorting(frame: &mut Frame, area: Rect, surface: &SortingSurface, app: &App) {
    let lines: Vec<Line> = surface
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let is_cursor = index == app.cursor();
            let mut style = cursor_style(is_cursor);
            if app.grabbed() == Some(index) {
                style = style.fg(Color::Yellow);
            }
            Line::from(vec![
                Span::styled(marker(is_cursor), style),
                Span::styled(format!("{:2}. ", index + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(item.as_str(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_matching(frame: &mut Frame, area: Rect, surface: &MatchingSurface, app: &App) {
    let columns = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(area);

    let entry_style = |side: Side, index: usize, linked: bool| {
        let is_cursor = app.column() == side && app.cursor() == index;
        let mut style = cursor_style(is_cursor);
        if side == Side::Left && surface.pending() == Some(index) {
            style = style.bg(Color::Yellow).fg(Color::Black);
        } else if linked {
            style = style.fg(Color::Green);
        }
        (is_cursor, style)
    };

    let left_lines: Vec<Line> = surface
        .lefts()
        .iter()
        .enumerate()
        .flat_map(|(index, value)| {
            let linked = surface.partner_of_left(index).is_some();
            let (is_cursor, style) = entry_style(Side::Left, index, linked);
            [
                Line::from(vec![
                    Span::styled(marker(is_cursor), style),
                    Span::styled(value.as_str(), style),
                ]),
                Line::from(""),
            ]
        })
        .collect();

    let right_lines: Vec<Line> = surface
        .rights()
        .iter()
        .enumerate()
        .flat_map(|(index, value)| {
            let linked = surface.partner_of_right(index).is_some();
            let (is_cursor, style) = entry_style(Side::Right, index, linked);
            [
                Line::from(vec![
                    Span::styled(marker(is_cursor), style),
                    Span::styled(value.as_str(), style),
                ]),
                Line::from(""),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(left_lines), columns[0]);
    frame.render_widget(Paragraph::new(right_lines), columns[2]);

    let width = f64::from(columns[1].width);
    let height = f64::from(columns[1].height);
    let segments = link_segments(surface.links(), width, height);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for &(x1, y1, x2, y2) in &segments {
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, Color::Blue));
            }
        });
    frame.render_widget(canvas, columns[1]);
}

/// Straight lines between the vertical midpoints of linked rows, in canvas
/// coordinates (origin bottom-left).
fn link_segments(
    links: impl Iterator<Item = (usize, usize)>,
    width: f64,
    height: f64,
) -> Vec<(f64, f64, f64, f64)> {
    let midpoint = |row: usize| height - (row * MATCHING_ROW_STRIDE) as f64 - 0.5;
    links
        .map(|(left, right)| (0.0, midpoint(left), width, midpoint(right)))
        .collect()
}

fn render_verdict(frame: &mut Frame, area: Rect, phase: Phase) {
    let Phase::Answered { correct } = phase else {
        return;
    };
    let (text, color) = if correct {
        ("Richtig!", Color::Green)
    } else {
        ("Falsch!", Color::Red)
    };

    let widget = Paragraph::new(Span::styled(text, Style::default().fg(color).bold()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, surface: &Surface, phase: Phase) {
    let text = if phase != Phase::Unanswered {
        "n next  ·  q quit"
    } else {
        match surface {
            Surface::MultipleChoice(_) => "j/k navigate  ·  space toggle  ·  enter check  ·  q quit",
            Surface::TrueFalse(_) => "j/k navigate  ·  space choose  ·  enter check  ·  q quit",
            Surface::FillInBlank(_) => {
                "j/k token  ·  1-9 focus blank  ·  space place  ·  g drag, 1-9 drop  ·  enter check"
            }
            Surface::Sorting(_) => "j/k navigate  ·  space grab/drop  ·  esc release  ·  enter check",
            Surface::Matching(_) => "h/l column  ·  j/k navigate  ·  space select  ·  enter check",
        }
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

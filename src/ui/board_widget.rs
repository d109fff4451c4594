use crate::game::{Board, Color, TRACK_LEN};
use ratatui::{
    layout::Rect,
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Terminal color used to draw a camel.
pub fn camel_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Green => TermColor::Green,
        Color::Blue => TermColor::Blue,
        Color::Yellow => TermColor::Yellow,
        Color::Purple => TermColor::Magenta,
    }
}

pub fn camel_span(color: Color) -> Span<'static> {
    Span::styled(
        color.initial().to_string(),
        Style::default()
            .fg(camel_color(color))
            .add_modifier(Modifier::BOLD),
    )
}

/// The track as text: stacks grow upward from the cell numbers, with the
/// finish flag past the last cell.
pub fn track_lines(board: &Board) -> Vec<Line<'static>> {
    let height = board.cells().iter().map(Vec::len).max().unwrap_or(0).max(1);
    let mut lines = Vec::with_capacity(height + 2);

    for level in (0..height).rev() {
        let mut spans = Vec::with_capacity(TRACK_LEN * 3);
        for cell in 0..TRACK_LEN {
            match board.stack(cell).get(level) {
                Some(&color) => {
                    spans.push(Span::raw(" "));
                    spans.push(camel_span(color));
                    spans.push(Span::raw(" "));
                }
                None => spans.push(Span::raw("   ")),
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("{}+", "---".repeat(TRACK_LEN))));
    let numbers: String = (1..=TRACK_LEN).map(|n| format!("{n:^3}")).collect();
    lines.push(Line::from(vec![
        Span::raw(numbers),
        Span::styled("|> FINISH", Style::default().fg(TermColor::White).add_modifier(Modifier::BOLD)),
    ]));
    lines
}

/// Render the track into the given area.
pub fn render_track(frame: &mut Frame, board: &Board, area: Rect) {
    let widget = Paragraph::new(track_lines(board));
    frame.render_widget(widget, area);
}

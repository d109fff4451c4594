use super::app::MENU_ITEMS;
use super::board_widget::{camel_color, camel_span, render_track};
use crate::ai::EvReport;
use crate::game::{Color, GameOutcome, GameSession, LegSummary, Seat};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_menu(frame: &mut Frame, selected: usize) {
    let mut lines = vec![
        Line::from(Span::styled(
            "C A M E L   U P",
            Style::default().fg(TermColor::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let style = if i == selected {
            Style::default().fg(TermColor::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(*item, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("↑/↓: Select  |  Enter: Confirm"));

    let area = centered(frame.area(), 40, 9);
    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Main Menu"));
    frame.render_widget(menu, area);
}

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    hint: Option<&EvReport>,
    message: &Option<String>,
    choosing_bet: bool,
) {
    let track_height = session
        .board()
        .cells()
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(1) as u16
        + 4;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(4),            // Tents
            Constraint::Length(track_height), // Track
            Constraint::Min(6),               // Players and hint
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_tents(frame, session, chunks[1]);

    let track_block = Block::default().borders(Borders::ALL).title("Track");
    let track_area = track_block.inner(chunks[2]);
    frame.render_widget(track_block, chunks[2]);
    render_track(frame, session.board(), track_area);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[3]);
    render_players(frame, session, lower[0]);
    render_hint(frame, hint, lower[1]);

    render_message(frame, message, chunks[4]);
    render_controls(frame, choosing_bet, chunks[5]);
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let status = if session.is_terminal() {
        "Race over".to_string()
    } else {
        format!(
            "Current Player: {}  |  Leg {}",
            session.current_player().name,
            session.legs_completed() + 1
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(TermColor::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Camel Up"));

    frame.render_widget(header, area);
}

/// Top ticket per color, and the dice rolled so far this leg.
fn render_tents(frame: &mut Frame, session: &GameSession, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let tickets = tent_line(|color| match session.ledger().cards().top(color) {
        Some(value) => value.to_string(),
        None => "X".to_string(),
    });
    let dice = tent_line(|color| match session.dice().get(color) {
        Some(roll) => roll.value().to_string(),
        None => "_".to_string(),
    });

    frame.render_widget(
        Paragraph::new(tickets)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Ticket Tents")),
        halves[0],
    );
    frame.render_widget(
        Paragraph::new(dice)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Dice Tents")),
        halves[1],
    );
}

fn tent_line(value: impl Fn(Color) -> String) -> Line<'static> {
    let mut spans = Vec::new();
    for color in Color::ALL {
        spans.push(camel_span(color));
        spans.push(Span::raw(format!(":{}  ", value(color))));
    }
    Line::from(spans)
}

fn render_players(frame: &mut Frame, session: &GameSession, area: Rect) {
    let mut lines = Vec::new();
    for seat in Seat::ALL {
        let player = session.player(seat);
        let marker = if seat == session.current_seat() && !session.is_terminal() {
            "▶ "
        } else {
            "  "
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}: {} coins", marker, player.name, player.coins),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        let bets = session.ledger().bets(seat);
        let mut spans = vec![Span::raw("    bets: ")];
        if bets.is_empty() {
            spans.push(Span::styled("none", Style::default().fg(TermColor::DarkGray)));
        }
        for (color, cards) in bets.iter() {
            for value in cards {
                spans.push(Span::styled(
                    format!("{}{} ", color.initial(), value),
                    Style::default().fg(camel_color(color)),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(widget, area);
}

fn render_hint(frame: &mut Frame, hint: Option<&EvReport>, area: Rect) {
    let lines: Vec<Line> = match hint {
        Some(report) => report
            .to_string()
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect(),
        None => vec![Line::from(Span::styled(
            "Press H to buy a hint.",
            Style::default().fg(TermColor::DarkGray),
        ))],
    };
    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Hint"));
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(TermColor::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, choosing_bet: bool, area: Rect) {
    let line = if choosing_bet {
        Line::from("R/G/B/Y/P: Pick camel  |  Esc: Cancel")
    } else {
        Line::from("R: Roll  |  B: Bet  |  H: Hint  |  Esc: Menu  |  Q: Quit")
    };

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn place_line(label: &str, color: Option<Color>) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{label}: "))];
    match color {
        Some(color) => spans.push(Span::styled(
            color.name().to_string(),
            Style::default().fg(camel_color(color)).add_modifier(Modifier::BOLD),
        )),
        None => spans.push(Span::raw("nobody")),
    }
    Line::from(spans)
}

pub fn render_leg_results(frame: &mut Frame, session: &GameSession, summary: &LegSummary) {
    let title = if summary.final_leg {
        "Final Leg Results"
    } else {
        "Leg Results"
    };
    let mut lines = vec![
        place_line("1st place", Some(summary.standing.winner)),
        place_line("2nd place", summary.standing.second),
        Line::from(""),
    ];
    for seat in Seat::ALL {
        let player = session.player(seat);
        lines.push(Line::from(format!(
            "{}: {:+} coins (now {})",
            player.name,
            summary.deltas[seat.index()],
            player.coins
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Press any key to continue"));

    let area = centered(frame.area(), 44, lines.len() as u16 + 2);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

pub fn render_game_over(frame: &mut Frame, session: &GameSession) {
    let mut lines = Vec::new();
    if let Some(result) = session.race_result() {
        lines.push(place_line("Race winner", Some(result.winner)));
        lines.push(place_line("Runner-up", result.second));
        lines.push(Line::from(""));
    }
    for seat in Seat::ALL {
        let player = session.player(seat);
        lines.push(Line::from(format!("{}: {} coins", player.name, player.coins)));
    }
    let verdict = match session.outcome() {
        Some(GameOutcome::Winner(seat)) => format!("{} wins!", session.player(seat).name),
        Some(GameOutcome::Draw) | None => "It's a draw!".to_string(),
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        verdict,
        Style::default().fg(TermColor::Yellow).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from("Enter: New game  |  M: Menu  |  Q: Quit"));

    let area = centered(frame.area(), 46, lines.len() as u16 + 2);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Game Over")),
        area,
    );
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

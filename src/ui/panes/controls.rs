//! Controls legend: algorithms on the left, playback in the middle, order on the right

use crate::buffer::Order;
use crate::snapshot::Snapshot;
use crate::sorting::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height the controls pane needs, borders included
pub const CONTROLS_HEIGHT: u16 = Algorithm::ALL.len() as u16 + 2;

fn entry(key: &str, label: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", key),
            Style::default().fg(DEFAULT_THEME.comment).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", label), style),
    ])
}

pub fn render_controls_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(inner);

    let normal = Style::default().fg(DEFAULT_THEME.fg);

    let algorithms: Vec<Line> = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let style = if algorithm == snapshot.algorithm {
                Style::default()
                    .fg(DEFAULT_THEME.selected)
                    .add_modifier(Modifier::BOLD)
            } else {
                normal
            };
            entry(
                &algorithm.key().to_ascii_uppercase().to_string(),
                algorithm.name().to_string(),
                style,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(algorithms), columns[0]);

    let play_pause = if snapshot.is_playing() { "Pause" } else { "Play" };
    let playback = vec![
        entry("←/→", format!("{} Bars", snapshot.bars), normal),
        entry("↑/↓", format!("{} Tick", snapshot.tick_rate), normal),
        entry("⎵", play_pause.to_string(), normal),
        entry("R", "Reset".to_string(), normal),
        entry("Esc", "Quit".to_string(), normal),
    ];
    frame.render_widget(Paragraph::new(playback), columns[1]);

    let orders: Vec<Line> = [(Order::Ascending, "A"), (Order::Descending, "D")]
        .into_iter()
        .map(|(order, key)| {
            let style = if order == snapshot.order {
                Style::default()
                    .fg(DEFAULT_THEME.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                normal
            };
            entry(key, order.name().to_string(), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(orders), columns[2]);
}

//! Dashboard summary tiles
//!
//! Renders the four headline metric tiles

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the four summary tiles in a single row.
pub fn render_summary_tiles(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let snapshot = &state.snapshot;
    render_tile(
        f,
        chunks[0],
        "Total Outages",
        "\u{26a1}",
        Color::Yellow,
        snapshot.total_outages.to_string(),
        Some(("\u{2191} 15% from last period", Color::Red)),
    );
    render_tile(
        f,
        chunks[1],
        "Extended Outages",
        "\u{26a0}",
        Color::Red,
        snapshot.extended_outages.to_string(),
        Some(("\u{2193} 5% from last period", Color::Green)),
    );
    render_tile(
        f,
        chunks[2],
        "Branches Affected",
        "\u{25c6}",
        Color::Blue,
        snapshot.branches_affected.to_string(),
        None,
    );
    render_tile(
        f,
        chunks[3],
        "Avg. Outage Duration",
        "\u{25f7}",
        Color::Magenta,
        format!("{} min", snapshot.avg_outage_duration_mins),
        None,
    );
}

/// Render one metric tile: icon, headline value, optional delta caption.
fn render_tile(
    f: &mut Frame,
    area: Rect,
    title: &str,
    icon: &str,
    icon_color: Color,
    value: String,
    caption: Option<(&str, Color)>,
) {
    let mut lines = vec![Line::from(vec![
        Span::styled(icon, Style::default().fg(icon_color)),
        Span::raw(" "),
        Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some((text, color)) = caption {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(color),
        )));
    }

    let tile = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(tile, area);
}

//! Dashboard header component
//!
//! Renders the title and the current filter summary

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with title and a one-line filter summary.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("BRANCH OUTAGE DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let summary = Line::from(vec![
        Span::styled("Period: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!(
                "{} ({} - {})",
                state.filter.granularity, state.filter.start_date, state.filter.end_date
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled("  Refreshes: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}", state.refresh_count()),
            Style::default().fg(Color::LightBlue),
        ),
        Span::styled("  Uptime: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}s", state.start_time.elapsed().as_secs()),
            Style::default().fg(Color::LightBlue),
        ),
    ]);

    let summary_line = Paragraph::new(summary)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(summary_line, header_chunks[1]);
}

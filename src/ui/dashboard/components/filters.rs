//! Dashboard filter controls
//!
//! Renders the granularity toggle, the reporting-period inputs, and the
//! query row (disabled region selector plus branch search)

use super::super::state::{DashboardState, FocusField};
use crate::data::types::Granularity;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the three granularity toggle buttons. Exactly one is active.
pub fn render_granularity_row(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Fill(1),
        ])
        .split(area);

    let focused = state.focus == FocusField::Granularity;
    for (i, granularity) in Granularity::ALL.iter().enumerate() {
        let active = state.filter.granularity == *granularity;
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let button = Paragraph::new(granularity.to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color(focused))),
            );
        f.render_widget(button, chunks[i]);
    }
}

/// Render the start and end date inputs.
pub fn render_period_row(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Length(24),
            Constraint::Fill(1),
        ])
        .split(area);

    render_text_input(
        f,
        chunks[0],
        "Start Date",
        &state.filter.start_date,
        state.focus == FocusField::StartDate,
    );
    render_text_input(
        f,
        chunks[1],
        "End Date",
        &state.filter.end_date,
        state.focus == FocusField::EndDate,
    );
}

/// Render the disabled region selector and the branch search box.
pub fn render_query_row(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Fill(1)])
        .split(area);

    // Region selection is not wired up yet; the control is shown dimmed and
    // consumes no input.
    let region_text = match &state.filter.selected_region {
        Some(region) => format!("{} (disabled)", region),
        None => "All Regions (disabled)".to_string(),
    };
    let region_select = Paragraph::new(Line::from(Span::styled(
        region_text,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    )))
    .block(
        Block::default()
            .title("Region")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(region_select, chunks[0]);

    render_text_input(
        f,
        chunks[1],
        "Search branches",
        &state.filter.branch_search,
        state.focus == FocusField::BranchSearch,
    );
}

/// Render a bordered single-line text input with a block cursor when focused.
fn render_text_input(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let display = if focused {
        format!("{}\u{2588}", value)
    } else {
        value.to_string()
    };
    let input = Paragraph::new(display)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color(focused))),
        );
    f.render_widget(input, area);
}

fn border_color(focused: bool) -> Color {
    if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

//! Dashboard main renderer

use super::components::{chart, filters, footer, header, tiles};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Length(3),  // Granularity toggle
            Constraint::Length(3),  // Reporting period
            Constraint::Length(3),  // Region select + branch search
            Constraint::Length(5),  // Summary tiles
            Constraint::Fill(1),    // Duration chart
            Constraint::Length(2),  // Footer
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    filters::render_granularity_row(f, main_chunks[1], state);
    filters::render_period_row(f, main_chunks[2], state);
    filters::render_query_row(f, main_chunks[3], state);
    tiles::render_summary_tiles(f, main_chunks[4], state);
    chart::render_duration_chart(f, main_chunks[5], state);
    footer::render_footer(f, main_chunks[6], state);
}

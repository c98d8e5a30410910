//! Region duration bar chart
//!
//! Renders one vertical bar per configured region

use super::super::state::DashboardState;
use super::super::utils::truncate_label;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders};

/// Render the per-region average outage duration chart.
pub fn render_duration_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("Avg. Outage Duration by Region (minutes)")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if state.series.is_empty() {
        f.render_widget(block, area);
        return;
    }

    let bar_width = bar_width_for(area, state.series.len());
    let bars: Vec<Bar> = state
        .series
        .iter()
        .map(|entry| {
            Bar::default()
                .value(u64::from(entry.duration_mins))
                .label(Line::from(truncate_label(&entry.region, bar_width)))
                .style(Style::default().fg(Color::LightMagenta))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::LightMagenta)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    f.render_widget(chart, area);
}

/// Split the available inner width evenly across the bars.
fn bar_width_for(area: Rect, bars: usize) -> u16 {
    let inner_width = area.width.saturating_sub(2);
    let bars = bars.max(1) as u16;
    let gaps = bars.saturating_sub(1);
    ((inner_width.saturating_sub(gaps)) / bars).clamp(3, 13)
}

//! Dashboard footer component
//!
//! Renders key hints and any pending data-source error

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer.
pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let (footer_text, footer_color) = match &state.last_error {
        Some(error) => (error.clone(), Color::Red),
        None => (
            "[Tab] Next Field | [D/W/M] Granularity | [Esc] Quit".to_string(),
            Color::Cyan,
        ),
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(footer_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}

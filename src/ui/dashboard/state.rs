//! Dashboard state management
//!
//! Contains the dashboard state struct, the filter setters, and the
//! keyboard-focus model

use crate::data::types::{FilterState, Granularity, MetricsSnapshot, RegionDuration};
use crate::ui::app::UIConfig;

use crossterm::event::KeyCode;
use std::time::Instant;

/// Which filter control currently receives keyboard input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FocusField {
    Granularity,
    StartDate,
    EndDate,
    /// Present in the layout but disabled; accepts no input.
    RegionSelect,
    BranchSearch,
}

impl FocusField {
    pub fn next(self) -> Self {
        match self {
            Self::Granularity => Self::StartDate,
            Self::StartDate => Self::EndDate,
            Self::EndDate => Self::RegionSelect,
            Self::RegionSelect => Self::BranchSearch,
            Self::BranchSearch => Self::Granularity,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Granularity => Self::BranchSearch,
            Self::StartDate => Self::Granularity,
            Self::EndDate => Self::StartDate,
            Self::RegionSelect => Self::EndDate,
            Self::BranchSearch => Self::RegionSelect,
        }
    }

    /// Whether this control is a free-text input.
    pub fn is_text_input(self) -> bool {
        matches!(self, Self::StartDate | Self::EndDate | Self::BranchSearch)
    }
}

/// All state owned by the dashboard screen.
#[derive(Debug)]
pub struct DashboardState {
    /// Current filter selections; the request parameters for a refresh.
    pub filter: FilterState,
    /// The four headline numbers shown in the summary tiles.
    pub snapshot: MetricsSnapshot,
    /// Per-region duration series backing the bar chart.
    pub series: Vec<RegionDuration>,
    /// The control that currently receives keyboard input.
    pub focus: FocusField,
    /// Render tick counter.
    pub tick: usize,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors.
    pub with_background_color: bool,
    /// Most recent data-source error, shown in the footer.
    pub last_error: Option<String>,

    /// Set when a filter change requires a metrics refresh. Starts set so
    /// the refresh fires once on mount.
    dirty: bool,
    /// Number of completed metrics refreshes.
    refresh_count: u64,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state with the default
    /// filters and the placeholder snapshot.
    pub fn new(start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            filter: FilterState::default(),
            snapshot: MetricsSnapshot::default(),
            series: Vec::new(),
            focus: FocusField::Granularity,
            tick: 0,
            start_time,
            with_background_color: ui_config.with_background_color,
            last_error: None,
            dirty: true,
            refresh_count: 0,
        }
    }

    // Getter methods for private fields
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    // Setter methods used by updaters
    pub(super) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub(super) fn record_refresh(&mut self) {
        self.refresh_count += 1;
    }

    /// Set the aggregation window. Unconditional assignment; schedules a
    /// metrics refresh.
    pub fn set_granularity(&mut self, granularity: Granularity) {
        self.filter.granularity = granularity;
        self.dirty = true;
    }

    /// Set the period start. The string is stored as entered, with no format
    /// validation; schedules a metrics refresh.
    pub fn set_start_date(&mut self, value: String) {
        self.filter.start_date = value;
        self.dirty = true;
    }

    /// Set the period end. May precede the start date; schedules a metrics
    /// refresh.
    pub fn set_end_date(&mut self, value: String) {
        self.filter.end_date = value;
        self.dirty = true;
    }

    /// Set the region selection. Unreachable from the keyboard while the
    /// selector is disabled, but participates in the refresh logic so the
    /// control can be enabled without touching the state machine.
    pub fn set_selected_region(&mut self, region: Option<String>) {
        self.filter.selected_region = region;
        self.dirty = true;
    }

    /// Set the branch search text. Stored and echoed in the input, but does
    /// not schedule a refresh and filters nothing downstream.
    pub fn set_branch_search(&mut self, value: String) {
        self.filter.branch_search = value;
    }

    /// Whether keystrokes are currently being consumed by a text input.
    pub fn is_text_input_focused(&self) -> bool {
        self.focus.is_text_input()
    }

    /// Route a key press to the focused control.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            _ => match self.focus {
                FocusField::Granularity => self.handle_granularity_key(code),
                FocusField::StartDate => {
                    if let Some(value) = Self::edit(&self.filter.start_date, code) {
                        self.set_start_date(value);
                    }
                }
                FocusField::EndDate => {
                    if let Some(value) = Self::edit(&self.filter.end_date, code) {
                        self.set_end_date(value);
                    }
                }
                // Disabled control: swallow all input
                FocusField::RegionSelect => {}
                FocusField::BranchSearch => {
                    if let Some(value) = Self::edit(&self.filter.branch_search, code) {
                        self.set_branch_search(value);
                    }
                }
            },
        }
    }

    fn handle_granularity_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.set_granularity(self.filter.granularity.prev()),
            KeyCode::Right => self.set_granularity(self.filter.granularity.next()),
            KeyCode::Char('d') | KeyCode::Char('D') => self.set_granularity(Granularity::Day),
            KeyCode::Char('w') | KeyCode::Char('W') => self.set_granularity(Granularity::Week),
            KeyCode::Char('m') | KeyCode::Char('M') => self.set_granularity(Granularity::Month),
            _ => {}
        }
    }

    /// Apply a single edit key to a text value. Returns the new value, or
    /// `None` when the key does not edit text.
    fn edit(current: &str, code: KeyCode) -> Option<String> {
        match code {
            KeyCode::Char(c) => {
                let mut value = current.to_string();
                value.push(c);
                Some(value)
            }
            KeyCode::Backspace => {
                let mut value = current.to_string();
                value.pop();
                Some(value)
            }
            _ => None,
        }
    }
}

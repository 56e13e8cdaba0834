use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{prelude::Rect, Frame};

use crate::ui::state::{LogLevel, ScanStore};

/// View contract for every workflow step screen
pub trait View {
    /// Render the view against the current store contents
    fn render(&mut self, f: &mut Frame, area: Rect, store: &dyn ScanStore);

    /// Get the view title
    fn get_title(&self) -> String;

    /// Get the view status text
    fn get_status(&self) -> String;

    /// Severity of the current status text
    fn get_status_level(&self) -> LogLevel {
        LogLevel::Info
    }

    /// Handle view-specific key events
    fn handle_key(&mut self, _key: KeyCode, _store: &mut dyn ScanStore) -> Result<bool> {
        Ok(false) // Default: not handled
    }
}

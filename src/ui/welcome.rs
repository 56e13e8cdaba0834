use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::ScanStep;
use crate::ui::{state::ScanStore, View};

/// Landing step shown after a reset
#[derive(Debug, Default)]
pub struct WelcomeView;

impl View for WelcomeView {
    fn render(&mut self, f: &mut Frame, area: Rect, store: &dyn ScanStore) {
        let captured = store.measurements().len();
        let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                "Body Scan",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("{} measurements in the current scan", captured)),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("Enter", key),
                Span::raw(" to view results"),
            ]),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Welcome"));

        f.render_widget(paragraph, area);
    }

    fn get_title(&self) -> String {
        "Welcome".to_string()
    }

    fn get_status(&self) -> String {
        "Ready for a new scan".to_string()
    }

    fn handle_key(&mut self, key: KeyCode, store: &mut dyn ScanStore) -> Result<bool> {
        match key {
            KeyCode::Enter => {
                store.set_step(ScanStep::Results);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::{info, warn};

use crate::actions::{
    ActionError, MeasurementExporter, MeasurementSharer, UnavailableExporter, UnavailableSharer,
};
use crate::models::{demo::demo_measurements, overall_confidence, ScanStep};
use crate::ui::{
    components::{format_scale_factor, render_model_preview, styled_confidence_span, MeasurementCard},
    layout::ResultsLayout,
    state::{LogLevel, ScanStore, StatusMessage},
    View,
};

/// Values shown in the results header, derived from the store
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsSummary {
    pub count: usize,
    pub overall_confidence: f64,
    pub scale_text: String,
}

impl ResultsSummary {
    pub fn from_store(store: &dyn ScanStore) -> Self {
        let measurements = store.measurements();
        Self {
            count: measurements.len(),
            overall_confidence: overall_confidence(measurements),
            scale_text: format_scale_factor(store.calibration()),
        }
    }

    pub fn count_text(&self) -> String {
        format!("{} measurements captured", self.count)
    }

    pub fn scale_line(&self) -> String {
        format!("Scale: {}", self.scale_text)
    }
}

/// Results screen: header, measurement cards, model preview and actions.
///
/// Owns only the confidence toggle, list scroll position and last status;
/// everything else is read from the store on each render.
pub struct ResultsScreen {
    show_confidences: bool,
    list_state: ListState,
    exporter: Box<dyn MeasurementExporter>,
    sharer: Box<dyn MeasurementSharer>,
    status: Option<StatusMessage>,
}

impl ResultsScreen {
    /// Construct the screen, seeding the store with demo data if it is empty
    pub fn mount(store: &mut dyn ScanStore) -> Self {
        Self::mount_with(store, Box::new(UnavailableExporter), Box::new(UnavailableSharer))
    }

    /// Construct the screen with explicit export and share capabilities
    pub fn mount_with(
        store: &mut dyn ScanStore,
        exporter: Box<dyn MeasurementExporter>,
        sharer: Box<dyn MeasurementSharer>,
    ) -> Self {
        if store.ensure_seeded(&demo_measurements()) {
            info!("No captured measurements, showing {} demo measurements", store.measurements().len());
        }

        let mut list_state = ListState::default();
        if !store.measurements().is_empty() {
            list_state.select(Some(0));
        }

        Self {
            show_confidences: false,
            list_state,
            exporter,
            sharer,
            status: None,
        }
    }

    pub fn show_confidences(&self) -> bool {
        self.show_confidences
    }

    pub fn set_show_confidences(&mut self, show: bool) {
        self.show_confidences = show;
    }

    pub fn toggle_confidences(&mut self) {
        self.show_confidences = !self.show_confidences;
        let text = if self.show_confidences {
            "Showing confidence scores"
        } else {
            "Hiding confidence scores"
        };
        self.status = Some(StatusMessage::new(LogLevel::Info, text));
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn export(&mut self, store: &dyn ScanStore) -> Result<(), ActionError> {
        let result = self.exporter.export(store.measurements());
        self.record_action("Export", &result);
        result
    }

    pub fn share(&mut self, store: &dyn ScanStore) -> Result<(), ActionError> {
        let result = self.sharer.share(store.measurements());
        self.record_action("Share", &result);
        result
    }

    /// Clear the scan and return to the welcome step
    pub fn new_scan(&mut self, store: &mut dyn ScanStore) {
        store.reset();
        store.set_step(ScanStep::Welcome);
        self.list_state.select(None);
        self.status = Some(StatusMessage::new(LogLevel::Success, "Starting a new scan"));
    }

    fn record_action(&mut self, action: &str, result: &Result<(), ActionError>) {
        self.status = Some(match result {
            Ok(()) => StatusMessage::new(LogLevel::Success, &format!("{} complete", action)),
            Err(e) => {
                warn!("{} failed: {}", action, e);
                StatusMessage::new(LogLevel::Warning, &e.to_string())
            }
        });
    }

    fn next_item(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i.min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn previous_item(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let previous = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(previous));
    }

    fn render_header(&self, f: &mut Frame, area: Rect, summary: &ResultsSummary) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let (left, right) = ResultsLayout::header_columns(inner);

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "Your Measurements",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(summary.count_text(), Style::default().fg(Color::Gray))),
        ]);
        f.render_widget(title, left);

        let totals = Paragraph::new(vec![
            Line::from(styled_confidence_span(summary.overall_confidence)),
            Line::from(Span::styled(summary.scale_line(), Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Right);
        f.render_widget(totals, right);
    }

    fn render_measurements(&mut self, f: &mut Frame, area: Rect, store: &dyn ScanStore) {
        // borders plus highlight symbol
        let width = area.width.saturating_sub(4);
        let items: Vec<ListItem> = store
            .measurements()
            .iter()
            .map(|m| MeasurementCard::new(m, self.show_confidences).to_list_item(width))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Measurements"))
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let checkbox = if self.show_confidences { "[x]" } else { "[ ]" };
        let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

        let footer = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{} Show confidence scores ", checkbox), Style::default().fg(Color::Gray)),
                Span::styled("(c)", key),
            ]),
            Line::from(vec![
                Span::raw("[ Export "),
                Span::styled("(e)", key),
                Span::raw(" ]   [ Share "),
                Span::styled("(s)", key),
                Span::raw(" ]"),
            ]),
            Line::from(vec![
                Span::styled("[ New Scan ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::styled("(n)", key),
                Span::styled(" ]", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL).title("Actions"));

        f.render_widget(footer, area);
    }
}

impl View for ResultsScreen {
    fn render(&mut self, f: &mut Frame, area: Rect, store: &dyn ScanStore) {
        let layout = ResultsLayout::new(area);
        let summary = ResultsSummary::from_store(store);

        self.render_header(f, layout.header, &summary);
        self.render_measurements(f, layout.measurements, store);
        render_model_preview(f, layout.preview);
        self.render_footer(f, layout.footer);
    }

    fn get_title(&self) -> String {
        "Results".to_string()
    }

    fn get_status(&self) -> String {
        self.status
            .as_ref()
            .map(|s| s.display_text())
            .unwrap_or_else(|| "Ready".to_string())
    }

    fn get_status_level(&self) -> LogLevel {
        self.status.as_ref().map(|s| s.level).unwrap_or(LogLevel::Info)
    }

    fn handle_key(&mut self, key: KeyCode, store: &mut dyn ScanStore) -> Result<bool> {
        let len = store.measurements().len();
        match key {
            KeyCode::Char('c') | KeyCode::Char('C') => self.toggle_confidences(),
            KeyCode::Char('e') | KeyCode::Char('E') => {
                // Failure is surfaced in the status line
                let _ = self.export(store);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let _ = self.share(store);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => self.new_scan(store),
            KeyCode::Down => self.next_item(len),
            KeyCode::Up => self.previous_item(len),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

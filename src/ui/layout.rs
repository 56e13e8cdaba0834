use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top level split shared by every step
pub struct AppLayout {
    pub content: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        Self {
            content: chunks[0],
            status_bar: chunks[1],
        }
    }
}

/// Areas of the results screen
pub struct ResultsLayout {
    pub header: Rect,
    pub measurements: Rect,
    pub preview: Rect,
    pub footer: Rect,
}

impl ResultsLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(0),    // Measurements and preview
                Constraint::Length(5), // Footer actions
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60),
                Constraint::Percentage(40),
            ])
            .split(chunks[1]);

        Self {
            header: chunks[0],
            measurements: body[0],
            preview: body[1],
            footer: chunks[2],
        }
    }

    /// Split the inner header area into title (left) and summary (right) halves
    pub fn header_columns(inner: Rect) -> (Rect, Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(50),
            ])
            .split(inner);
        (columns[0], columns[1])
    }
}

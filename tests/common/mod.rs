//! Common test utilities and helpers

use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

use body_scan_results::ui::ScanResultsApp;

/// Test data utilities
pub mod test_data {
    use body_scan_results::models::{Grade, Measurement};

    /// Create a measurement with the given confidence
    pub fn create_test_measurement(name: &str, confidence: f64) -> Measurement {
        Measurement::new(name, 50.0, "cm", confidence, Grade::P0)
    }
}

/// Logging utilities for tests
pub mod logging {
    use std::sync::Once;
    use tracing::info;

    static INIT: Once = Once::new();

    /// Initialize test logging
    pub fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing::subscriber::set_global_default(
                tracing_subscriber::fmt()
                    .with_env_filter("body_scan_results=debug,test=debug")
                    .with_test_writer()
                    .finish(),
            );
        });
    }

    /// Log test step
    pub fn log_test_step(step: &str) {
        info!("🧪 Test Step: {}", step);
    }
}

/// Render the app into an in-memory terminal and return its rows as text
pub fn render_app(app: &mut ScanResultsApp, width: u16, height: u16) -> Vec<String> {
    buffer_lines(&render_app_buffer(app, width, height))
}

/// Render the app into an in-memory terminal and keep the styled buffer
pub fn render_app_buffer(app: &mut ScanResultsApp, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| app.draw(f)).expect("draw frame");
    terminal.backend().buffer().clone()
}

/// Convert a buffer into one string per row
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

/// True when any rendered row contains `needle`
pub fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

/// Foreground colour of the first cell of `needle`, if it was rendered
pub fn text_color(buffer: &Buffer, needle: &str) -> Option<Color> {
    let width = buffer.area.width as usize;
    buffer_lines(buffer).iter().enumerate().find_map(|(row, line)| {
        let byte_offset = line.find(needle)?;
        let column = line[..byte_offset].chars().count();
        buffer.content.get(row * width + column).map(|cell| cell.fg)
    })
}

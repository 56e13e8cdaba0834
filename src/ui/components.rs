/// UI components and formatting helpers for the measurement results screen
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};

use crate::models::{Calibration, Measurement};

/// Confidence band used to colour the indicator dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// Lower bounds are inclusive: 0.90 is high, 0.75 is medium
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.90 {
            ConfidenceTier::High
        } else if confidence >= 0.75 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ConfidenceTier::High => Color::Green,
            ConfidenceTier::Medium => Color::Yellow,
            ConfidenceTier::Low => Color::Red,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

/// Format a 0-1 fraction as a rounded integer percentage
pub fn format_percentage(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Scale factor to four decimals, or "N/A" without calibration
pub fn format_scale_factor(calibration: Option<&Calibration>) -> String {
    match calibration {
        Some(calibration) => format_fixed(calibration.scale_factor, 4),
        None => "N/A".to_string(),
    }
}

/// Value to one decimal followed by its unit
pub fn format_value(value: f64, unit: &str) -> String {
    format!("{} {}", format_fixed(value, 1), unit)
}

/// Fixed-point text with exact halves rounded away from zero.
/// `{:.N}` alone rounds halves to even, so 58.25 would print as 58.2.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !is_exact_half(value, decimals) {
        return format!("{:.*}", decimals, value);
    }

    // A quarter step clears the tie without reaching the next one
    let nudged = value.abs() + 0.25 / 10f64.powi(decimals as i32);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.*}", sign, decimals, nudged)
}

/// True when `value` lies exactly halfway between two `decimals`-place numbers,
/// i.e. `value * 2 * 10^decimals` is an odd integer.
fn is_exact_half(value: f64, decimals: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }

    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };

    // value = odd * 2^(exponent + twos), and 10^d = 5^d * 2^d
    let twos = mantissa.trailing_zeros() as i64;
    twos + exponent + 1 + decimals as i64 == 0
}

/// Create a confidence span coloured by tier
pub fn styled_confidence_span(confidence: f64) -> Span<'static> {
    let tier = ConfidenceTier::from_confidence(confidence);
    Span::styled(
        format!("{} confidence", format_percentage(confidence)),
        Style::default().fg(tier.color()).add_modifier(Modifier::BOLD),
    )
}

/// One measurement row of the results list
pub struct MeasurementCard<'a> {
    measurement: &'a Measurement,
    show_confidence: bool,
}

impl<'a> MeasurementCard<'a> {
    pub fn new(measurement: &'a Measurement, show_confidence: bool) -> Self {
        Self {
            measurement,
            show_confidence,
        }
    }

    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.measurement.confidence)
    }

    pub fn value_text(&self) -> String {
        format_value(self.measurement.value, &self.measurement.unit)
    }

    /// Confidence and grade line, only when confidences are shown
    pub fn detail_text(&self) -> Option<String> {
        if !self.show_confidence {
            return None;
        }
        Some(format!(
            "Confidence: {} • {}",
            format_percentage(self.measurement.confidence),
            self.measurement.grade
        ))
    }

    /// Lines of the card laid out for the given inner width
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let name = self.measurement.name.clone();
        let value = self.value_text();
        let used = 2 + name.chars().count() + value.chars().count();
        let padding = (width as usize).saturating_sub(used).max(1);

        let mut lines = vec![Line::from(vec![
            Span::styled("● ", Style::default().fg(self.tier().color())),
            Span::styled(name, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(padding)),
            Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ])];

        if let Some(detail) = self.detail_text() {
            lines.push(Line::from(Span::styled(
                format!("  {}", detail),
                Style::default().fg(Color::Gray),
            )));
        }

        lines
    }

    pub fn to_list_item(&self, width: u16) -> ListItem<'static> {
        ListItem::new(self.lines(width))
    }
}

/// Render the placeholder panel for the future 3D body model viewer
pub fn render_model_preview(f: &mut Frame, area: Rect) {
    let preview = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("┌╌╌╌╌╌╌╌╌┐", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled("╎ ruler  ╎", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled("└╌╌╌╌╌╌╌╌┘", Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled("3D viewer coming soon", Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("3D Body Model"));

    f.render_widget(preview, area);
}

//! Screening result view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::domain::{RiskBand, Screening, DIABETIC_THRESHOLD, PREDIABETIC_THRESHOLD};
use crate::tui::styles::ClinicTheme;

/// Glyhb display range for the result gauge (percent units).
const GAUGE_MIN: f64 = 4.0;
const GAUGE_MAX: f64 = 10.0;

/// Result screen state
#[derive(Debug, Clone, Default)]
pub enum ResultState {
    /// No screening has run yet
    #[default]
    Idle,
    /// Completed with a screening
    Complete { screening: Screening },
    /// Error occurred
    Error { message: String },
}

/// Render the screening result view
pub fn render_result(f: &mut Frame, area: Rect, state: &ResultState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_result_header(f, chunks[0]);
    render_result_content(f, chunks[1], state);
    render_result_footer(f, chunks[2], state);
}

fn render_result_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Screening Result", ClinicTheme::title()),
        Span::styled(" │ Estimated Glyhb", ClinicTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_result_content(f: &mut Frame, area: Rect, state: &ResultState) {
    match state {
        ResultState::Idle => render_idle(f, area),
        ResultState::Complete { screening } => render_screening(f, area, screening),
        ResultState::Error { message } => render_error(f, area, message),
    }
}

fn render_idle(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No screening has run yet",
            ClinicTheme::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter patient measurements to begin",
            ClinicTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_screening(f: &mut Frame, area: Rect, screening: &Screening) {
    let block = Block::default()
        .title(Span::styled(" Glyhb Estimate ", ClinicTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Risk band
            Constraint::Length(4), // Glyhb gauge
            Constraint::Length(3), // Derived features
            Constraint::Min(0),    // Padding
        ])
        .margin(1)
        .split(inner);

    let band_style = ClinicTheme::risk_band(screening.risk_band);
    let band_icon = match screening.risk_band {
        RiskBand::Normal => "OK",
        RiskBand::PreDiabetic | RiskBand::DiabeticRisk => "!",
    };

    let band_display = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} {}", band_icon, screening.risk_band),
            band_style.add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(
            screening.risk_band.description(),
            ClinicTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(band_display, chunks[0]);

    // Gauge position within the displayed glyhb range; display-only, the
    // stored prediction stays unrounded.
    let fraction = ((screening.glyhb - GAUGE_MIN) / (GAUGE_MAX - GAUGE_MIN)).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(
                    format!(
                        " Glyhb %  (pre-diabetic ≥ {PREDIABETIC_THRESHOLD}, diabetic risk ≥ {DIABETIC_THRESHOLD}) "
                    ),
                    ClinicTheme::text_secondary(),
                ))
                .borders(Borders::ALL)
                .border_style(ClinicTheme::border()),
        )
        .gauge_style(band_style)
        .percent((fraction * 100.0) as u16)
        .label(format!("{:.2}%", screening.glyhb));
    f.render_widget(gauge, chunks[1]);

    let derived = Paragraph::new(Line::from(vec![
        Span::styled("Glucose/HDL ratio: ", ClinicTheme::text_secondary()),
        Span::styled(format!("{:.2}", screening.record.ratio), ClinicTheme::text()),
        Span::styled("   BMI: ", ClinicTheme::text_secondary()),
        Span::styled(format!("{:.2}", screening.record.bmi), ClinicTheme::text()),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(derived, chunks[2]);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("! Error", ClinicTheme::danger())),
        Line::from(""),
        Line::from(Span::styled(message, ClinicTheme::text())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicTheme::danger()),
    );

    f.render_widget(content, area);
}

fn render_result_footer(f: &mut Frame, area: Rect, state: &ResultState) {
    let content = match state {
        ResultState::Error { .. } => Line::from(vec![
            Span::styled("[Enter] ", ClinicTheme::key_hint()),
            Span::styled("Back to Form ", ClinicTheme::key_desc()),
            Span::styled("[Ctrl+Q] ", ClinicTheme::key_hint()),
            Span::styled("Quit", ClinicTheme::key_desc()),
        ]),
        _ => Line::from(vec![
            Span::styled("[N] ", ClinicTheme::key_hint()),
            Span::styled("New Screening ", ClinicTheme::key_desc()),
            Span::styled("[Esc] ", ClinicTheme::key_hint()),
            Span::styled("Edit Measurements ", ClinicTheme::key_desc()),
            Span::styled("[Ctrl+Q] ", ClinicTheme::key_hint()),
            Span::styled("Quit", ClinicTheme::key_desc()),
        ]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(footer, area);
}

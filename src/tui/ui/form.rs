//! Measurement input form.
//!
//! Fields are entered in canonical units by default; fields with an
//! alternate user-facing unit (lbs, inches, mmol/L) can be toggled, in
//! which case the value is converted before validation. Domain bounds
//! always apply to the canonical value.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::units::{self, Conversion};
use crate::domain::PatientMeasurements;
use crate::tui::styles::ClinicTheme;

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    /// Canonical unit shown in the hint
    pub unit: &'static str,
    pub value: String,
    /// Domain bounds in canonical units
    pub min: f64,
    pub max: f64,
    /// Alternate-unit conversion, if the field supports one
    pub alt: Option<Conversion>,
    /// Whether input is currently entered in the alternate unit
    pub use_alt: bool,
}

impl FormField {
    /// Unit label for the currently active entry mode.
    #[must_use]
    pub fn active_unit(&self) -> &'static str {
        match (self.use_alt, self.alt) {
            (true, Some(conversion)) => conversion.source_unit(),
            _ => self.unit,
        }
    }
}

/// Measurement form state
pub struct MeasurementFormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for MeasurementFormState {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField {
                    label: "Cholesterol",
                    unit: "mg/dL",
                    value: String::new(),
                    min: 100.0,
                    max: 500.0,
                    alt: Some(Conversion::CholesterolMmolToMgdl),
                    use_alt: false,
                },
                FormField {
                    label: "Stabilized Glucose",
                    unit: "mg/dL",
                    value: String::new(),
                    min: 40.0,
                    max: 400.0,
                    alt: Some(Conversion::GlucoseMmolToMgdl),
                    use_alt: false,
                },
                FormField {
                    label: "HDL Cholesterol",
                    unit: "mg/dL",
                    value: String::new(),
                    min: 10.0,
                    max: 120.0,
                    alt: Some(Conversion::CholesterolMmolToMgdl),
                    use_alt: false,
                },
                FormField {
                    label: "Age",
                    unit: "years",
                    value: String::new(),
                    min: 18.0,
                    max: 100.0,
                    alt: None,
                    use_alt: false,
                },
                FormField {
                    label: "Waist",
                    unit: "cm",
                    value: String::new(),
                    min: 20.0,
                    max: 150.0,
                    alt: Some(Conversion::InchesToCentimeters),
                    use_alt: false,
                },
                FormField {
                    label: "Hip",
                    unit: "cm",
                    value: String::new(),
                    min: 20.0,
                    max: 150.0,
                    alt: Some(Conversion::InchesToCentimeters),
                    use_alt: false,
                },
                FormField {
                    label: "Weight",
                    unit: "kg",
                    value: String::new(),
                    min: 30.0,
                    max: 200.0,
                    alt: Some(Conversion::PoundsToKilograms),
                    use_alt: false,
                },
                FormField {
                    label: "Height",
                    unit: "cm",
                    value: String::new(),
                    min: 100.0,
                    max: 250.0,
                    alt: Some(Conversion::InchesToCentimeters),
                    use_alt: false,
                },
            ],
            selected_field: 0,
            error_message: None,
        }
    }
}

impl MeasurementFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Add a character to the current field
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.fields[self.selected_field].value.push(c);
            self.error_message = None;
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        self.fields[self.selected_field].value.pop();
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        self.fields[self.selected_field].value.clear();
    }

    /// Toggle the current field between canonical and alternate units.
    /// No-op for fields without an alternate unit.
    pub fn toggle_unit(&mut self) {
        let field = &mut self.fields[self.selected_field];
        if field.alt.is_some() {
            field.use_alt = !field.use_alt;
        }
    }

    /// Parse, convert and validate the form into canonical measurements.
    ///
    /// # Errors
    /// Returns the first violation as a user-facing message.
    pub fn to_measurements(&self) -> Result<PatientMeasurements, String> {
        let mut values = Vec::with_capacity(self.fields.len());

        for field in self.fields.iter() {
            let entered: f64 = field
                .value
                .parse()
                .map_err(|_| format!("{}: Invalid number", field.label))?;

            let canonical = match (field.use_alt, field.alt) {
                (true, Some(conversion)) => {
                    units::convert(entered, conversion).map_err(|e| format!("{}: {e}", field.label))?
                }
                _ => entered,
            };

            if canonical < field.min || canonical > field.max {
                return Err(format!(
                    "{}: Value must be between {} and {} {}",
                    field.label, field.min, field.max, field.unit
                ));
            }

            values.push(canonical);
        }

        Ok(PatientMeasurements {
            cholesterol_mgdl: values[0],
            stabilized_glucose_mgdl: values[1],
            hdl_mgdl: values[2],
            age_years: values[3].round() as u32,
            waist_cm: values[4],
            hip_cm: values[5],
            weight_kg: values[6],
            height_cm: values[7],
        })
    }

    /// Load sample data (typical middle-aged patient, canonical units).
    pub fn load_sample_data(&mut self) {
        let sample = [
            "200", // cholesterol (mg/dL)
            "100", // stabilized glucose (mg/dL)
            "50",  // hdl (mg/dL)
            "45",  // age (years)
            "80",  // waist (cm)
            "95",  // hip (cm)
            "70",  // weight (kg)
            "170", // height (cm)
        ];
        for (i, val) in sample.iter().enumerate() {
            self.fields[i].value = (*val).to_string();
            self.fields[i].use_alt = false;
        }
        self.error_message = None;
    }
}

/// Render the measurement input form
pub fn render_form(f: &mut Frame, area: Rect, state: &MeasurementFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Patient Measurements", ClinicTheme::title()),
        Span::styled(" │ Glyhb Screening Inputs", ClinicTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &MeasurementFormState) {
    // Two-column layout
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;

    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected_field);
    render_field_column(
        f,
        columns[1],
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let field_height = 3;
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let border_style = if is_selected {
            ClinicTheme::border_focused()
        } else {
            ClinicTheme::border()
        };

        let title_style = if is_selected {
            ClinicTheme::focused()
        } else {
            ClinicTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ({}) ", field.label, field.active_unit()),
                title_style,
            ))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value_display = if field.value.is_empty() {
            Span::styled(
                format!("{}-{} {}", field.min, field.max, field.unit),
                ClinicTheme::text_muted(),
            )
        } else {
            Span::styled(field.value.clone(), ClinicTheme::text())
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            if is_selected {
                Span::styled("▌", ClinicTheme::focused())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &MeasurementFormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", ClinicTheme::danger()),
            Span::styled(err.clone(), ClinicTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", ClinicTheme::key_hint()),
            Span::styled("Navigate ", ClinicTheme::key_desc()),
            Span::styled("[Enter] ", ClinicTheme::key_hint()),
            Span::styled("Predict ", ClinicTheme::key_desc()),
            Span::styled("[U] ", ClinicTheme::key_hint()),
            Span::styled("Toggle Unit ", ClinicTheme::key_desc()),
            Span::styled("[S] ", ClinicTheme::key_hint()),
            Span::styled("Sample Data ", ClinicTheme::key_desc()),
            Span::styled("[Ctrl+Q] ", ClinicTheme::key_hint()),
            Span::styled("Quit", ClinicTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> MeasurementFormState {
        let mut state = MeasurementFormState::default();
        state.load_sample_data();
        state
    }

    #[test]
    fn test_sample_data_converts_to_measurements() {
        let m = filled_form().to_measurements().expect("should parse");
        assert!((m.cholesterol_mgdl - 200.0).abs() < f64::EPSILON);
        assert_eq!(m.age_years, 45);
        assert!((m.height_cm - 170.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_alternate_unit_entry_is_converted() {
        let mut state = filled_form();
        // Weight entered as 154 lbs instead of kg
        state.fields[6].value = "154".to_string();
        state.fields[6].use_alt = true;

        let m = state.to_measurements().expect("should parse");
        assert!((m.weight_kg - 69.853168).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_apply_to_canonical_value() {
        let mut state = filled_form();
        // 20 lbs ≈ 9 kg, below the 30 kg floor even though "20" looks plausible
        state.fields[6].value = "20".to_string();
        state.fields[6].use_alt = true;

        let err = state.to_measurements().expect_err("must fail");
        assert!(err.starts_with("Weight"));
    }

    #[test]
    fn test_unparseable_field_is_reported() {
        let mut state = filled_form();
        state.fields[0].value = "12.3.4".to_string();
        let err = state.to_measurements().expect_err("must fail");
        assert!(err.contains("Cholesterol"));
    }

    #[test]
    fn test_unit_toggle_skips_age() {
        let mut state = MeasurementFormState::default();
        state.selected_field = 3; // Age has no alternate unit
        state.toggle_unit();
        assert!(!state.fields[3].use_alt);

        state.selected_field = 6;
        state.toggle_unit();
        assert!(state.fields[6].use_alt);
        assert_eq!(state.fields[6].active_unit(), "lbs");
    }
}

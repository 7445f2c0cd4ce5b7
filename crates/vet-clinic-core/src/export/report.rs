//! Patient/appointment report.

use serde::{Deserialize, Serialize};

use crate::models::{AppointmentSummary, Patient, PatientId, Species};

/// One patient line in a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRow {
    /// Patient ID
    pub id: PatientId,
    /// Current pet name
    pub pet_name: String,
    /// Species
    pub species: Species,
    /// Owner name
    pub owner: String,
    /// Scheduled time, or the no-appointment marker
    pub appointment: AppointmentSummary,
}

impl ReportRow {
    pub fn new(patient: &Patient, appointment: AppointmentSummary) -> Self {
        Self {
            id: patient.id,
            pet_name: patient.pet_name.clone(),
            species: patient.species,
            owner: patient.owner.clone(),
            appointment,
        }
    }
}

/// All patients with their appointment status, in registration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicReport {
    /// Generation timestamp (RFC 3339, UTC)
    pub generated_at: String,
    /// Clinic name, when the caller set one
    pub clinic_name: Option<String>,
    /// Report lines
    pub rows: Vec<ReportRow>,
}

impl ClinicReport {
    /// Build a report from rows, stamped with the current time.
    pub fn new(rows: Vec<ReportRow>) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            clinic_name: None,
            rows,
        }
    }

    /// Set the clinic name shown in exports.
    pub fn with_clinic_name(mut self, name: impl Into<String>) -> Self {
        self.clinic_name = Some(name.into());
        self
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there were no patients to report on.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        csv.push_str("id,pet_name,species,owner,appointment\n");

        for row in &self.rows {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                row.id,
                escape_csv(&row.pet_name),
                row.species,
                escape_csv(&row.owner),
                escape_csv(&row.appointment.to_string()),
            ));
        }

        csv
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_report() -> ClinicReport {
        let rex = Patient::new(1, "Rex".into(), Species::Dog, "Alice".into());
        let tom = Patient::new(2, "Tom".into(), Species::Cat, "Smith, Bob".into());
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        ClinicReport::new(vec![
            ReportRow::new(&rex, AppointmentSummary::Scheduled(at)),
            ReportRow::new(&tom, AppointmentSummary::NoAppointment),
        ])
    }

    #[test]
    fn test_report_csv() {
        let csv = make_report().to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3); // Header + 2 rows
        assert_eq!(lines[0], "id,pet_name,species,owner,appointment");
        assert_eq!(lines[1], "1,Rex,dog,Alice,2024-05-01 10:00 AM");
        assert_eq!(lines[2], "2,Tom,cat,\"Smith, Bob\",No appointment");
    }

    #[test]
    fn test_report_json() {
        let report = make_report().with_clinic_name("Happy Paws");
        let json = report.to_json().unwrap();

        assert!(json.contains("Happy Paws"));
        assert!(json.contains("\"pet_name\": \"Rex\""));
        assert!(json.contains("no_appointment"));

        let parsed: ClinicReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.rows, report.rows);
    }

    #[test]
    fn test_empty_report() {
        let report = ClinicReport::new(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.to_csv().lines().count(), 1);
    }

    #[test]
    fn test_csv_escaping() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}

//! Grid table rendering for console listings.

use vet_clinic_core::{Appointment, ClinicReport, Patient};

/// A bordered text table with a header row.
///
/// ```text
/// +----+----------+
/// | ID | Pet Name |
/// +====+==========+
/// | 1  | Rex      |
/// +----+----------+
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row. Missing cells render blank, extra cells are dropped.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn cell<'a>(row: &'a [String], col: usize) -> &'a str {
        row.get(col).map(String::as_str).unwrap_or("")
    }

    fn widths(&self) -> Vec<usize> {
        (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| Self::cell(row, col).chars().count())
                    .chain(std::iter::once(self.headers[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn border(widths: &[usize], fill: char) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.extend(std::iter::repeat(fill).take(width + 2));
            line.push('+');
        }
        line
    }

    fn line(widths: &[usize], row: &[String]) -> String {
        let mut line = String::from("|");
        for (col, width) in widths.iter().enumerate() {
            let cell = Self::cell(row, col);
            let pad = width - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.extend(std::iter::repeat(' ').take(pad + 1));
            line.push('|');
        }
        line
    }

    /// Render the table, one line per border or row, newline-terminated.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let rule = Self::border(&widths, '-');

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&Self::line(&widths, &self.headers));
        out.push('\n');
        out.push_str(&Self::border(&widths, '='));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&Self::line(&widths, row));
            out.push('\n');
            out.push_str(&rule);
            out.push('\n');
        }

        out
    }
}

pub fn patients_table(patients: &[Patient]) -> Table {
    let mut table = Table::new(&["ID", "Pet Name", "Species", "Owner"]);
    for p in patients {
        table.push_row(vec![
            p.id.to_string(),
            p.pet_name.clone(),
            p.species.to_string(),
            p.owner.clone(),
        ]);
    }
    table
}

pub fn appointments_table(appointments: &[(&str, &Appointment)]) -> Table {
    let mut table = Table::new(&["Pet Name", "Species", "Owner", "Appointment"]);
    for (pet_name, appt) in appointments {
        table.push_row(vec![
            pet_name.to_string(),
            appt.species.to_string(),
            appt.owner.clone(),
            appt.scheduled_display(),
        ]);
    }
    table
}

pub fn report_table(report: &ClinicReport) -> Table {
    let mut table = Table::new(&["ID", "Pet Name", "Species", "Owner", "Appointment"]);
    for row in report.rows() {
        table.push_row(vec![
            row.id.to_string(),
            row.pet_name.clone(),
            row.species.to_string(),
            row.owner.clone(),
            row.appointment.to_string(),
        ]);
    }
    table
}

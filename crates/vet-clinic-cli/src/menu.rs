//! Main menu options.

/// A numbered main-menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPatient,
    ListPatients,
    BookAppointment,
    ViewAppointments,
    UpdatePatient,
    CancelAppointment,
    GenerateReport,
    Exit,
}

impl MenuChoice {
    /// All options in menu order; option `n` is at index `n - 1`.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddPatient,
        MenuChoice::ListPatients,
        MenuChoice::BookAppointment,
        MenuChoice::ViewAppointments,
        MenuChoice::UpdatePatient,
        MenuChoice::CancelAppointment,
        MenuChoice::GenerateReport,
        MenuChoice::Exit,
    ];

    pub fn from_number(n: i64) -> Option<Self> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).map_or(0, |i| i + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddPatient => "Add Patient Record",
            MenuChoice::ListPatients => "List Patients",
            MenuChoice::BookAppointment => "Book Appointment",
            MenuChoice::ViewAppointments => "View Appointments",
            MenuChoice::UpdatePatient => "Update Patient Info",
            MenuChoice::CancelAppointment => "Cancel Appointment",
            MenuChoice::GenerateReport => "Generate Report",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// The menu block printed before each selection prompt.
pub fn render_menu(clinic_name: &str) -> String {
    let mut out = format!("\nWelcome to {} Management System\n\n", clinic_name);
    for choice in MenuChoice::ALL {
        out.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
    }
    out
}

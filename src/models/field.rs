use serde::{Deserialize, Serialize};

/// A form field of [`BookingDraft`](super::BookingDraft), named the way the
/// page and the JSON API name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    PatientName,
    Email,
    Phone,
    Treatment,
    Urgency,
    PreferredDate,
    PreferredTime,
    MedicalHistory,
    Notes,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::PatientName => "patientName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Treatment => "treatment",
            Field::Urgency => "urgency",
            Field::PreferredDate => "preferredDate",
            Field::PreferredTime => "preferredTime",
            Field::MedicalHistory => "medicalHistory",
            Field::Notes => "notes",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

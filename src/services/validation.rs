use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::i18n::LocalizationBundle;
use crate::models::{BookingDraft, Field};

// `local@domain.tld` shape check, not RFC 5322. ASCII classes only, no
// case folding.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_]{2,}$")
        .expect("email pattern is valid")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,16}$").expect("phone pattern is valid"));

/// Whitespace as browsers treat it in form input: Unicode `White_Space`
/// plus the byte-order mark, which pasted text often carries.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn trimmed(value: &str) -> &str {
    value.trim_matches(is_blank)
}

/// Field name to localized message. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.fields().map(|field| field.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}

/// Check a draft against the form rules, collecting every failing field in
/// one pass. Messages come from `bundle`, so the same draft validated under
/// another language yields the same fields with translated messages.
pub fn validate(draft: &BookingDraft, bundle: &LocalizationBundle) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if trimmed(&draft.patient_name).is_empty() {
        errors.insert(Field::PatientName, bundle.required);
    }

    let email = trimmed(&draft.email);
    if email.is_empty() {
        errors.insert(Field::Email, bundle.required);
    } else if !EMAIL_RE.is_match(email) {
        errors.insert(Field::Email, bundle.email_invalid);
    }

    if trimmed(&draft.phone).is_empty() {
        errors.insert(Field::Phone, bundle.required);
    } else {
        let compact: String = draft.phone.chars().filter(|c| !is_blank(*c)).collect();
        if !PHONE_RE.is_match(&compact) {
            errors.insert(Field::Phone, bundle.phone_invalid);
        }
    }

    let presence = [
        (Field::Treatment, &draft.treatment),
        (Field::Urgency, &draft.urgency),
        (Field::PreferredDate, &draft.preferred_date),
        (Field::PreferredTime, &draft.preferred_time),
    ];
    for (field, value) in presence {
        if value.is_empty() {
            errors.insert(field, bundle.required);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            patient_name: "Ana Ruiz".to_string(),
            email: "ana@test.com".to_string(),
            phone: "+34123456789".to_string(),
            treatment: "limpieza".to_string(),
            urgency: "baja".to_string(),
            preferred_date: "2025-01-10".to_string(),
            preferred_time: "09:00".to_string(),
            medical_history: String::new(),
            notes: String::new(),
        }
    }

    fn es() -> &'static LocalizationBundle {
        Lang::Es.bundle()
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert!(validate(&valid_draft(), es()).is_empty());
    }

    #[test]
    fn test_empty_draft_flags_every_required_field() {
        let errors = validate(&BookingDraft::default(), es());
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            [
                Field::PatientName,
                Field::Email,
                Field::Phone,
                Field::Treatment,
                Field::Urgency,
                Field::PreferredDate,
                Field::PreferredTime,
            ]
        );
        assert!(fields.iter().all(|f| errors.get(*f) == Some("Obligatorio")));
        assert!(!errors.contains(Field::MedicalHistory));
        assert!(!errors.contains(Field::Notes));
    }

    #[test]
    fn test_each_required_field_reported_alone() {
        let clears: [(Field, fn(&mut BookingDraft)); 7] = [
            (Field::PatientName, |d: &mut BookingDraft| d.patient_name.clear()),
            (Field::Email, |d: &mut BookingDraft| d.email.clear()),
            (Field::Phone, |d: &mut BookingDraft| d.phone.clear()),
            (Field::Treatment, |d: &mut BookingDraft| d.treatment.clear()),
            (Field::Urgency, |d: &mut BookingDraft| d.urgency.clear()),
            (Field::PreferredDate, |d: &mut BookingDraft| d.preferred_date.clear()),
            (Field::PreferredTime, |d: &mut BookingDraft| d.preferred_time.clear()),
        ];
        for (field, clear) in clears {
            let mut draft = valid_draft();
            clear(&mut draft);
            let errors = validate(&draft, es());
            assert_eq!(errors.len(), 1, "unexpected errors for {field}: {errors}");
            assert_eq!(errors.get(field), Some(es().required));
        }
    }

    #[test]
    fn test_whitespace_only_name_is_required() {
        let mut draft = valid_draft();
        draft.patient_name = "   \t".to_string();
        assert_eq!(validate(&draft, es()).get(Field::PatientName), Some("Obligatorio"));
    }

    #[test]
    fn test_whitespace_selection_counts_as_present() {
        let mut draft = valid_draft();
        draft.treatment = " ".to_string();
        assert!(validate(&draft, es()).is_empty());
    }

    #[test]
    fn test_empty_email_is_required_not_invalid() {
        let mut draft = valid_draft();
        draft.email = "  ".to_string();
        assert_eq!(validate(&draft, es()).get(Field::Email), Some(es().required));
    }

    #[test]
    fn test_malformed_email_is_invalid() {
        for email in [
            "not-an-email",
            "ana@",
            "@test.com",
            "ana@test",
            "ana@test.c",
            "ana @test.com",
            "\u{212A}en@test.com",
            "ana@te\u{017F}t.com",
            "ana@test.co\u{212A}",
            "jos\u{E9}@test.com",
        ] {
            let mut draft = valid_draft();
            draft.email = email.to_string();
            assert_eq!(
                validate(&draft, es()).get(Field::Email),
                Some(es().email_invalid),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepted_email_shapes() {
        for email in [
            "ana@test.com",
            "ANA.RUIZ+citas@Clinica-Dental.co.uk",
            "a_b-c@sub.domain.io",
            "  ana@test.com  ",
        ] {
            let mut draft = valid_draft();
            draft.email = email.to_string();
            assert!(validate(&draft, es()).is_empty(), "{email} should be accepted");
        }
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        let mut draft = valid_draft();
        draft.phone = "\u{FEFF}1234567".to_string();
        draft.email = "\u{FEFF}ana@test.com".to_string();
        assert!(validate(&draft, es()).is_empty());

        draft.patient_name = "\u{FEFF} ".to_string();
        draft.phone = "\u{FEFF}".to_string();
        let errors = validate(&draft, es());
        assert_eq!(errors.get(Field::PatientName), Some(es().required));
        assert_eq!(errors.get(Field::Phone), Some(es().required));
    }

    #[test]
    fn test_phone_whitespace_is_ignored() {
        let mut draft = valid_draft();
        draft.phone = "+34 612 345 678".to_string();
        assert!(validate(&draft, es()).is_empty());
    }

    #[test]
    fn test_phone_digit_bounds() {
        let cases = [
            ("123456", false),
            ("1234567", true),
            ("1234567890123456", true),
            ("12345678901234567", false),
            ("+1234567", true),
            ("++1234567", false),
            ("123-456-7890", false),
            ("(555) 1234567", false),
        ];
        for (phone, ok) in cases {
            let mut draft = valid_draft();
            draft.phone = phone.to_string();
            let errors = validate(&draft, es());
            if ok {
                assert!(errors.is_empty(), "{phone} should be accepted");
            } else {
                assert_eq!(errors.get(Field::Phone), Some(es().phone_invalid), "{phone}");
            }
        }
    }

    #[test]
    fn test_messages_follow_the_bundle() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        draft.patient_name.clear();

        let es_errors = validate(&draft, Lang::Es.bundle());
        let en_errors = validate(&draft, Lang::En.bundle());
        assert_eq!(es_errors.get(Field::Email), Some("Correo no válido"));
        assert_eq!(en_errors.get(Field::Email), Some("Invalid email"));
        assert_eq!(en_errors.get(Field::PatientName), Some("Required"));
        assert_eq!(
            es_errors.fields().collect::<Vec<_>>(),
            en_errors.fields().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_errors_serialize_by_field_name() {
        let mut draft = valid_draft();
        draft.preferred_time.clear();
        let json = serde_json::to_value(validate(&draft, Lang::En.bundle())).unwrap();
        assert_eq!(json, serde_json::json!({ "preferredTime": "Required" }));
    }
}

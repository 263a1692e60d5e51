//! Localization table for the booking page.
//!
//! One [`LocalizationBundle`] per supported [`Lang`], embedded as static
//! data. Stored records only ever carry stable keys (`limpieza`, `alta`,
//! `confirmada`, ...); a bundle turns those keys into display strings.
//!
//! | Code | Language |
//! |------|----------|
//! | ES   | Español  |
//! | EN   | English  |
//! | FR   | Français |
//! | DE   | Deutsch  |
//! | IT   | Italiano |

mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::errors::AppError;
use crate::models::{BookingStatus, StableKey, Treatment, Urgency};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    Es,
    En,
    Fr,
    De,
    It,
}

impl Lang {
    /// Language switcher order.
    pub const ALL: [Lang; 5] = [Lang::Es, Lang::En, Lang::Fr, Lang::De, Lang::It];

    pub fn code(&self) -> &'static str {
        match self {
            Lang::Es => "ES",
            Lang::En => "EN",
            Lang::Fr => "FR",
            Lang::De => "DE",
            Lang::It => "IT",
        }
    }

    /// Case-insensitive, so `es` and `ES` both select Spanish.
    pub fn from_code(code: &str) -> Option<Lang> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn bundle(&self) -> &'static LocalizationBundle {
        match self {
            Lang::Es => &catalog::ES,
            Lang::En => &catalog::EN,
            Lang::Fr => &catalog::FR,
            Lang::De => &catalog::DE,
            Lang::It => &catalog::IT,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| AppError::UnsupportedLanguage(s.to_string()))
    }
}

/// Display strings for a fixed set of stable keys, kept in declaration order.
#[derive(Debug)]
pub struct Labels<K: StableKey, const N: usize> {
    entries: [(K, &'static str); N],
}

impl<K: StableKey, const N: usize> Labels<K, N> {
    pub const fn new(entries: [(K, &'static str); N]) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, label)| (k.key(), *label))
    }
}

#[cfg(test)]
impl<K: StableKey, const N: usize> Labels<K, N> {
    fn get(&self, key: &str) -> Option<&'static str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, label)| label)
    }

    fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(|(k, _)| k)
    }
}

impl<K: StableKey, const N: usize> Serialize for Labels<K, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(N))?;
        for (key, label) in self.iter() {
            map.serialize_entry(key, label)?;
        }
        map.end()
    }
}

/// Every display string the page needs for one language.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationBundle {
    pub flag: &'static str,
    pub title: &'static str,
    pub patient_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub treatment: &'static str,
    pub urgency: &'static str,
    pub preferred_date: &'static str,
    pub preferred_time: &'static str,
    pub medical_history: &'static str,
    pub notes: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub required: &'static str,
    pub email_invalid: &'static str,
    pub phone_invalid: &'static str,
    pub treatments: Labels<Treatment, 4>,
    pub urgency_levels: Labels<Urgency, 4>,
    pub dashboard: &'static str,
    pub search: &'static str,
    pub all: &'static str,
    pub pending: &'static str,
    pub confirmed: &'static str,
    pub completed: &'static str,
    pub cancelled: &'static str,
    pub status: Labels<BookingStatus, 4>,
    pub toast_success: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_keys(value: &serde_json::Value) -> Vec<String> {
        value.as_object().unwrap().keys().cloned().collect()
    }

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Lang::from_code("ES"), Some(Lang::Es));
        assert_eq!(Lang::from_code("fr"), Some(Lang::Fr));
        assert_eq!(Lang::from_code(" It "), Some(Lang::It));
        assert_eq!(Lang::from_code("PT"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn test_from_str_reports_unsupported_code() {
        let err = "xx".parse::<Lang>().unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLanguage(code) if code == "xx"));
    }

    #[test]
    fn test_all_bundles_expose_identical_keys() {
        let reference = serde_json::to_value(Lang::Es.bundle()).unwrap();
        for lang in Lang::ALL {
            let bundle = serde_json::to_value(lang.bundle()).unwrap();
            let mut expected = object_keys(&reference);
            let mut actual = object_keys(&bundle);
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected, "top-level keys differ for {lang}");

            for nested in ["treatments", "urgencyLevels", "status"] {
                let mut expected = object_keys(&reference[nested]);
                let mut actual = object_keys(&bundle[nested]);
                expected.sort();
                actual.sort();
                assert_eq!(actual, expected, "{nested} keys differ for {lang}");
            }
        }
    }

    #[test]
    fn test_labels_cover_every_stable_key() {
        for lang in Lang::ALL {
            let bundle = lang.bundle();
            for treatment in Treatment::ALL {
                assert!(bundle.treatments.get(treatment.as_str()).is_some());
            }
            for urgency in Urgency::ALL {
                assert!(bundle.urgency_levels.get(urgency.as_str()).is_some());
            }
            for status in BookingStatus::ALL {
                assert!(bundle.status.get(status.as_str()).is_some());
            }
        }
    }

    #[test]
    fn test_labels_keep_declaration_order() {
        let keys: Vec<_> = Lang::En.bundle().treatments.keys().collect();
        assert_eq!(keys, ["limpieza", "caries", "ortodoncia", "blanqueamiento"]);
    }

    #[test]
    fn test_lookups_translate_only_at_display_time() {
        let alta = Urgency::Alta.as_str();
        assert_eq!(Lang::En.bundle().urgency_levels.get(alta), Some("High"));
        assert_eq!(Lang::De.bundle().urgency_levels.get(alta), Some("Hoch"));
        assert_eq!(Lang::Fr.bundle().status.get("confirmada"), Some("Confirmée"));
        assert_eq!(Lang::Fr.bundle().status.get("confirmed"), None);
    }
}

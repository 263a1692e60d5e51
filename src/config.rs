use std::env;
use std::time::Duration;

use crate::i18n::Lang;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub default_lang: Lang,
    pub toast_dismiss: Duration,
    pub event_channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            default_lang: Lang::Es,
            toast_dismiss: Duration::from_millis(3000),
            event_channel_capacity: 64,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            default_lang: lookup("DEFAULT_LANG")
                .map(|code| {
                    Lang::from_code(&code).unwrap_or_else(|| {
                        tracing::warn!(code = %code, "unsupported DEFAULT_LANG, falling back to ES");
                        Lang::Es
                    })
                })
                .unwrap_or(defaults.default_lang),
            toast_dismiss: lookup("TOAST_DISMISS_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.toast_dismiss),
            event_channel_capacity: lookup("EVENT_CHANNEL_CAPACITY")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.event_channel_capacity),
        }
    }
}

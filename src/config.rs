use actix_web::cookie::Key;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";
pub const DEFAULT_TOAST_MS: u64 = 4000;
pub const DEFAULT_TOAST_FADE_MS: u64 = 300;

/// actix-web requires at least 64 bytes of key material.
const MIN_SESSION_KEY_LEN: usize = 64;

/// Runtime settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind: String,
    pub static_dir: String,
    pub session_key: Option<String>,
    pub toast_ms: u64,
    pub toast_fade_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            session_key: None,
            toast_ms: DEFAULT_TOAST_MS,
            toast_fade_ms: DEFAULT_TOAST_FADE_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind: lookup("SITE_BIND").unwrap_or(defaults.bind),
            static_dir: lookup("SITE_STATIC_DIR").unwrap_or(defaults.static_dir),
            session_key: lookup("SESSION_KEY"),
            toast_ms: parse_ms(&lookup, "SITE_TOAST_MS", defaults.toast_ms),
            toast_fade_ms: parse_ms(&lookup, "SITE_TOAST_FADE_MS", defaults.toast_fade_ms),
        }
    }

    /// Cookie signing key. Falls back to a random key, which drops sessions on restart.
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}

fn parse_ms(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> u64 {
    match lookup(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{name}={raw:?} is not a number of milliseconds, using {default}");
            default
        }),
        None => default,
    }
}

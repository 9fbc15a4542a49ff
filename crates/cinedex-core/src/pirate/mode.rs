//! Pirate mode detection.
//!
//! Two independent checks, always in this order:
//!
//! 1. the explicit flag (`"true"` in any case, or `"1"`) turns the theme on
//!    unconditionally;
//! 2. otherwise the probe text (usually the name being searched for) turns it
//!    on if it contains one of [`TRIGGER_WORDS`] anywhere, case-insensitively.

/// Substrings of the probe text that switch the theme on.
pub const TRIGGER_WORDS: [&str; 4] = ["pirate", "arrr", "ahoy", "treasure"];

/// Why the pirate theme is (or is not) active for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PirateMode {
    /// The request asked for it.
    Explicit,
    /// The probe text mentioned a trigger word.
    Keyword,
    Off,
}

impl PirateMode {
    pub fn is_active(self) -> bool {
        !matches!(self, PirateMode::Off)
    }
}

impl std::fmt::Display for PirateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PirateMode::Explicit => write!(f, "explicit"),
            PirateMode::Keyword => write!(f, "keyword"),
            PirateMode::Off => write!(f, "off"),
        }
    }
}

/// Classify a request from its raw flag and probe text.
pub fn detect(flag: Option<&str>, probe: Option<&str>) -> PirateMode {
    if flag.is_some_and(|f| f.eq_ignore_ascii_case("true") || f == "1") {
        return PirateMode::Explicit;
    }

    if let Some(probe) = probe {
        let probe = probe.to_lowercase();
        if TRIGGER_WORDS.iter().any(|word| probe.contains(word)) {
            return PirateMode::Keyword;
        }
    }

    PirateMode::Off
}

/// Shorthand for `detect(flag, probe).is_active()`.
pub fn is_pirate_mode(flag: Option<&str>, probe: Option<&str>) -> bool {
    detect(flag, probe).is_active()
}

//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of the widest severity label ("WARNING") plus one.
const MAX_SEVERITY_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    Info = 0,
    Warning = 1,
    #[default]
    Error = 2,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Error];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Column width reserved for severity labels; every label fits inside it.
    #[inline]
    pub const fn max_width() -> usize {
        MAX_SEVERITY_WIDTH
    }

    #[cfg(feature = "console")]
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Info => Green,
            Severity::Warning => Yellow,
            Severity::Error => Red,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

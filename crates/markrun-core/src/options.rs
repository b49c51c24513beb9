//! Configuration options for compilation

use std::fmt;
use std::str::FromStr;

use crate::runs::DEFAULT_BULLET;
use crate::Error;

/// Named option flags a host can toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionFlag {
    /// Render soft breaks as line breaks
    HardBreaks,
}

impl OptionFlag {
    pub const ALL: &'static [OptionFlag] = &[OptionFlag::HardBreaks];

    pub fn name(self) -> &'static str {
        match self {
            OptionFlag::HardBreaks => "hard-breaks",
        }
    }
}

impl fmt::Display for OptionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionFlag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        OptionFlag::ALL
            .iter()
            .copied()
            .find(|flag| flag.name() == normalized)
            .ok_or_else(|| Error::UnknownOption(s.to_string()))
    }
}

/// Options for compilation
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Soft breaks become line separators instead of spaces
    pub hard_breaks: bool,

    /// Prefix for items visited outside any list, or after the list's
    /// prefix generator is exhausted
    ///
    /// This does not change the bullet of well-formed bullet lists; that
    /// comes from the prefix builder (`StaticPrefixBuilder::with_bullet`).
    /// Hosts wanting one bullet everywhere set both.
    pub fallback_bullet: String,
}

impl Options {
    /// Enable a named flag
    pub fn with_flag(mut self, flag: OptionFlag) -> Self {
        match flag {
            OptionFlag::HardBreaks => self.hard_breaks = true,
        }
        self
    }

    pub fn has_flag(&self, flag: OptionFlag) -> bool {
        match flag {
            OptionFlag::HardBreaks => self.hard_breaks,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hard_breaks: false,
            fallback_bullet: DEFAULT_BULLET.to_string(),
        }
    }
}

//! Display language and text direction, passed explicitly to everything that
//! renders text instead of living in a process-wide global.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Arabic,
    English,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Language::Arabic => Direction::Rtl,
            Language::English => Direction::Ltr,
        }
    }

    /// The only other supported language.
    pub fn other(&self) -> Language {
        match self {
            Language::Arabic => Language::English,
            Language::English => Language::Arabic,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Language::Arabic),
            "en" => Ok(Language::English),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

impl Direction {
    /// Value for an html `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// The presentation settings every view reads from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayContext {
    pub language: Language,
}

impl DisplayContext {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn toggled(self) -> Self {
        Self {
            language: self.language.other(),
        }
    }
}

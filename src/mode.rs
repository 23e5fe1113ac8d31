use std::{collections::HashMap, fmt, str::FromStr};

use serde::Serialize;

/// Editing operation requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Improve,
    Summarize,
    Translate,
    Continue,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Improve, Mode::Summarize, Mode::Translate, Mode::Continue];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Improve => "improve",
            Mode::Summarize => "summarize",
            Mode::Translate => "translate",
            Mode::Continue => "continue",
        }
    }

    /// Label that closes the prompt and that the backend tends to echo back.
    pub fn marker(self) -> &'static str {
        match self {
            Mode::Improve => "Improved text:",
            Mode::Summarize => "Summary:",
            Mode::Translate => "Translation:",
            Mode::Continue => "Continuation:",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Sampling options forwarded to the backend, serialized with the backend's field names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeParameters {
    pub temperature: f64,
    #[serde(rename = "top_p")]
    pub nucleus_probability: f64,
    pub top_k: u32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct ModeParameterTable {
    default: ModeParameters,
    entries: HashMap<Mode, ModeParameters>,
}

impl ModeParameterTable {
    pub fn new(default: ModeParameters) -> Self {
        Self {
            default,
            entries: HashMap::new(),
        }
    }

    pub fn with_entry(mut self, mode: Mode, parameters: ModeParameters) -> Self {
        self.entries.insert(mode, parameters);
        self
    }

    pub fn default_entry(&self) -> ModeParameters {
        self.default
    }

    /// Unrecognized modes, and modes missing from the table, get the default entry.
    pub fn resolve(&self, mode: Option<Mode>) -> ModeParameters {
        mode.and_then(|m| self.entries.get(&m).copied()).unwrap_or(self.default)
    }
}

impl Default for ModeParameterTable {
    fn default() -> Self {
        let base = ModeParameters {
            temperature: 0.7,
            nucleus_probability: 0.9,
            top_k: 40,
            max_tokens: 2000,
        };

        ModeParameterTable::new(base)
            .with_entry(
                Mode::Improve,
                ModeParameters {
                    temperature: 0.6,
                    ..base
                },
            )
            .with_entry(
                Mode::Summarize,
                ModeParameters {
                    max_tokens: 1500,
                    ..base
                },
            )
            .with_entry(
                Mode::Translate,
                ModeParameters {
                    temperature: 0.5,
                    ..base
                },
            )
            .with_entry(
                Mode::Continue,
                ModeParameters {
                    temperature: 0.8,
                    nucleus_probability: 0.95,
                    top_k: 50,
                    max_tokens: 2500,
                },
            )
    }
}

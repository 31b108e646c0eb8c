use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether GST is added on top of the entered amount or backed out of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GstMode {
    /// The entered amount is pre-tax; GST is added to it.
    #[default]
    Add,
    /// The entered amount already includes GST; GST is removed from it.
    Remove,
}

impl GstMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add GST",
            Self::Remove => "Remove GST",
        }
    }

    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            _ => None,
        }
    }

    /// The other state of the toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Add => Self::Remove,
            Self::Remove => Self::Add,
        }
    }
}

impl fmt::Display for GstMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// crates/shared-kernel/src/value_objects/language.rs
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Label used for files the classifier could not recognise.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Detected programming language of a file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Language {
    Named(String),
    #[default]
    Unknown,
}

impl Language {
    /// Interpret a classifier result; empty or missing names are unknown.
    pub fn from_classification(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(name) if !name.is_empty() && name != UNKNOWN_LANGUAGE => Self::Named(name.to_string()),
            _ => Self::Unknown,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::from_classification(Some(&name.into()))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Unknown => UNKNOWN_LANGUAGE,
        }
    }
}

impl From<&str> for Language {
    fn from(name: &str) -> Self {
        Self::from_classification(Some(name))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_classification(Some(&raw)))
    }
}

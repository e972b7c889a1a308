//! Records shared by the directory, the store and the enrichment pipeline.
//!
//! Field names serialize in camelCase so stored blobs and endpoint payloads
//! keep the shape the web client already reads.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A startup in the directory, either seeded or added by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub url: String,
    pub industry: String,
    pub stage: String,
    pub location: String,
}

/// Structured summary of a company website produced by the LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentData {
    pub summary: String,
    pub what_they_do: Vec<String>,
    pub keywords: Vec<String>,
    pub derived_signals: Vec<String>,
    pub sources: Vec<Source>,
}

/// Where and when an enrichment was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Source {
    pub fn now(url: impl Into<String>) -> Self {
        Self { url: url.into(), timestamp: OffsetDateTime::now_utc() }
    }
}

/// A named, ordered collection of company ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompanyList {
    pub name: String,
    pub companies: Vec<String>,
}

/// Snapshot of directory filters saved for later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: String,
    pub query: String,
    pub industry: String,
    pub stage: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Filters handed from a saved search back to the directory, used once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PendingSearch {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub stage: String,
}

impl From<&SavedSearch> for PendingSearch {
    fn from(search: &SavedSearch) -> Self {
        Self { query: search.query.clone(), industry: search.industry.clone(), stage: search.stage.clone() }
    }
}

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(format!("Invalid theme: {}. Valid options: dark, light", s)),
        }
    }
}

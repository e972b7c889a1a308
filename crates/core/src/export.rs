//! CSV and JSON export of a resolved company list.

use std::str::FromStr;
use std::sync::LazyLock;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use regex::Regex;

use crate::model::Company;
use crate::{Result, ScoutError};

const CSV_HEADER: &str = "Name,Industry,Stage,Location,URL";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn render(self, companies: &[Company]) -> Result<String> {
        match self {
            ExportFormat::Csv => to_csv(companies),
            ExportFormat::Json => to_json(companies),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid export format: {}. Valid options: csv, json", s)),
        }
    }
}

/// Renders companies as CSV.
///
/// The header row is bare; every data field is double-quoted with embedded
/// quotes doubled. Rows are joined by `\n` with no trailing newline, so an
/// empty list yields just the header.
pub fn to_csv(companies: &[Company]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for c in companies {
        writer.write_record([&c.name, &c.industry, &c.stage, &c.location, &c.url])?;
    }

    let rows = writer.into_inner().map_err(|e| ScoutError::WriteError(e.into_error()))?;
    let rows = String::from_utf8_lossy(&rows);

    let mut out = String::from(CSV_HEADER);
    if !rows.is_empty() {
        out.push('\n');
        out.push_str(rows.trim_end_matches('\n'));
    }
    Ok(out)
}

/// Renders companies as a pretty-printed JSON array with two-space indent.
pub fn to_json(companies: &[Company]) -> Result<String> {
    Ok(serde_json::to_string_pretty(companies)?)
}

/// `<list name with whitespace runs as "_">_export.<ext>`.
pub fn export_filename(list_name: &str, format: ExportFormat) -> String {
    format!("{}_export.{}", WHITESPACE_RUN.replace_all(list_name, "_"), format.extension())
}

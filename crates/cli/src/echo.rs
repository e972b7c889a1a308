use owo_colors::OwoColorize;
use scout_core::{Company, EnrichmentData};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!("\n{} {} {}", "Scout".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "Startup research from the terminal\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print a section heading on stdout
pub fn print_heading(title: &str) {
    println!("\n{}", title.bold().cyan());
    println!("{}", "═".repeat(60).dimmed());
}

/// Print a label and value on stdout
pub fn print_field(label: &str, value: &str) {
    println!("  {} {}", format!("{}:", label).dimmed(), value.bright_white());
}

/// Print a left-aligned table on stdout.
///
/// Column widths are measured in characters so non-ASCII names line up.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.bold());
    println!("{}", "─".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)).dimmed());

    for row in rows {
        let line = row.iter().zip(&widths).map(|(c, w)| pad(c, *w)).collect::<Vec<_>>().join("  ");
        println!("{}", line.trim_end());
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// One row per company: id, name, industry, stage, location.
pub fn print_companies(companies: &[Company]) {
    let rows: Vec<Vec<String>> = companies
        .iter()
        .map(|c| vec![c.id.clone(), c.name.clone(), c.industry.clone(), c.stage.clone(), c.location.clone()])
        .collect();
    print_table(&["ID", "NAME", "INDUSTRY", "STAGE", "LOCATION"], &rows);
}

/// Print an enrichment result on stdout
pub fn print_enrichment(data: &EnrichmentData) {
    print_heading("Summary");
    println!("  {}", data.summary);

    print_list("What they do", &data.what_they_do);
    print_list("Keywords", &data.keywords);
    print_list("Derived signals", &data.derived_signals);

    print_heading("Sources");
    for source in &data.sources {
        println!("  {} {}", source.url.underline(), format!("({})", source.timestamp.date()).dimmed());
    }
}

fn print_list(title: &str, items: &[String]) {
    print_heading(title);
    if items.is_empty() {
        println!("  {}", "none".dimmed());
    }
    for item in items {
        println!("  • {}", item);
    }
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

//! Format extraction reports and selection listings as text.

use crate::extract::ExtractionReport;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format an extraction report as human-readable text.
pub fn format_report_text(report: &ExtractionReport) -> String {
    let mut out = String::new();
    let title = if report.dry_run {
        "Extraction plan (dry run)"
    } else {
        "Extraction"
    };
    out.push_str(&format!("{}\n\n", format_section_heading(title)));
    out.push_str(&format!("  Destination: {}\n", report.dest_dir.display()));
    out.push_str(&format!("  Extracted: {}\n", report.extracted.len()));
    out.push_str(&format!("  Skipped: {}\n", report.skipped.len()));

    if !report.extracted.is_empty() {
        out.push('\n');
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Directory", "Name", "Output", "Headers"]);
        for entry in &report.extracted {
            let headers = entry
                .headers
                .map(|h| h.to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                entry.directory.clone(),
                entry.clean_name.clone(),
                entry
                    .output
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                headers,
            ]);
        }
        out.push_str(&format!("{}\n", table));
    }
    out
}

/// Format a selection listing: one name per line.
pub fn format_selection_text(names: &[&str]) -> String {
    names.join("\n")
}

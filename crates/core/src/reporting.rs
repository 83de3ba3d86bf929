//! Plain-text report rendering.

use std::path::Path;

use chrono::Local;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::metrics::display_percent;
use crate::pipeline::PipelineOutcome;

/// Renders the outcome of one pipeline run as a plain-text report.
pub fn render_report(outcome: &PipelineOutcome, input_path: &Path) -> String {
    let summary = &outcome.summary;
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== Ledgerfolio Report ===".to_string());
    lines.push(format!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M")));
    lines.push(format!("Input file: {}", input_path.display()));
    lines.push(format!(
        "Rows loaded: {} (discarded: {})",
        outcome.inserted,
        outcome.discards.len()
    ));
    lines.push(format!(
        "Total portfolio value: {}",
        format_money(summary.total)
    ));
    lines.push(String::new());

    lines.push("Asset allocation:".to_string());
    if summary.by_class.is_empty() {
        lines.push("  (none)".to_string());
    } else {
        for group in &summary.by_class {
            lines.push(format!(
                "  - {}: {} ({}%)",
                group.asset_class,
                format_money(group.value),
                display_percent(group.value, summary.total)
            ));
        }
    }
    lines.push(String::new());

    match &summary.largest {
        Some(largest) => lines.push(format!(
            "Largest holding: {} ({} / {}%)",
            largest.ticker,
            format_money(largest.market_value),
            display_percent(largest.market_value, summary.total)
        )),
        None => lines.push("Largest holding: (none)".to_string()),
    }
    lines.push(String::new());

    if outcome.risk_flags.is_empty() {
        lines.push("Risk flags: none".to_string());
    } else {
        lines.push("Risk flags:".to_string());
        for flag in &outcome.risk_flags {
            lines.push(format!("  ! {flag}"));
        }
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Formats a value as US dollars with thousands separators and cents.
/// Rounding here is display-only.
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = DISPLAY_DECIMAL_PRECISION as usize);
    let (whole, cents) = match formatted.split_once('.') {
        Some(parts) => parts,
        None => (formatted.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

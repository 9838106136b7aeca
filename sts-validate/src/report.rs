//! Report rendering: one row per compared test, as an aligned table or JSON.

use serde::Serialize;

/// The outcome of one test comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Ok,
    Mismatch,
    Skipped,
}

/// One comparison row.
#[derive(Debug, Serialize)]
pub struct CheckRow {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CheckRow {
    pub fn compared(name: &'static str, computed: f64, reference: f64, tolerance: f64) -> Self {
        let difference = (computed - reference).abs();
        let in_range = |value: f64| value.is_finite() && (0.0..=1.0).contains(&value);

        let status = if difference <= tolerance && in_range(computed) && in_range(reference) {
            CheckStatus::Ok
        } else {
            CheckStatus::Mismatch
        };

        Self {
            name,
            computed: Some(computed),
            reference: Some(reference),
            difference: Some(difference),
            status,
            reason: None,
        }
    }

    pub fn skipped(name: &'static str, reason: String) -> Self {
        Self {
            name,
            computed: None,
            reference: None,
            difference: None,
            status: CheckStatus::Skipped,
            reason: Some(reason),
        }
    }
}

/// Prints the aligned table report.
pub fn print_table(rows: &[CheckRow]) {
    println!(
        "{:<28} {:<16} {:<16} {:<12} Status",
        "Test", "p-value", "reference", "|diff|"
    );
    println!("{}", "-".repeat(84));

    for row in rows {
        match row.status {
            CheckStatus::Skipped => {
                println!(
                    "{:<28} {:<16} {:<16} {:<12} SKIPPED ({})",
                    row.name,
                    "-",
                    "-",
                    "-",
                    row.reason.as_deref().unwrap_or("")
                );
            }
            status => {
                println!(
                    "{:<28} {:<16.6} {:<16.6} {:<12.3e} {}",
                    row.name,
                    row.computed.unwrap_or(f64::NAN),
                    row.reference.unwrap_or(f64::NAN),
                    row.difference.unwrap_or(f64::NAN),
                    if status == CheckStatus::Ok {
                        "OK"
                    } else {
                        "MISMATCH"
                    }
                );
            }
        }
    }
}

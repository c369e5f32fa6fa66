//! Costing contract and client-side summary
//!
//! The request/response shapes for `POST /costing`, plus the two pieces of
//! client-side arithmetic and rendering that live on top of the costed
//! result: the subtotal/VAT summary and the read-only preview table.

use std::fmt::Write;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::export::{is_action_label, TableData};
use crate::utils::html::escape_text;

lazy_static! {
    static ref CURRENCY_NOISE_RE: Regex = Regex::new(r"[^0-9.\-]").unwrap();
}

/// VAT applied on top of the subtotal
pub const VAT_RATE: f64 = 0.05;

/// Pricing factors set by the user before costing is applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostingFactors {
    pub net_margin: f64,
    pub freight: f64,
    pub customs: f64,
    pub installation: f64,
    pub exchange_rate: f64,
    pub additional: f64,
}

/// Request body of the costing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostingRequest {
    pub file_id: String,
    pub factors: CostingFactors,
    pub table_data: TableData,
}

/// Response body of the costing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostingResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Vec<TableData>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Totals computed client-side from the costed tables
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostingSummary {
    pub subtotal: f64,
    pub vat: f64,
    pub grand_total: f64,
}

/// Costing endpoint path
pub fn costing_url() -> &'static str {
    "/costing"
}

/// Whether this column feeds the subtotal: a total/amount column that is
/// not a preserved `_original` copy
fn is_total_column(key: &str) -> bool {
    let lower = key.to_ascii_lowercase();
    (lower.contains("total") || lower.contains("amount")) && !key.contains("_original")
}

/// Parse a cell value as a positive amount, scrubbing currency noise
fn numeric_value(raw: &str) -> Option<f64> {
    let scrubbed = CURRENCY_NOISE_RE.replace_all(raw, "");
    match scrubbed.parse::<f64>() {
        Ok(value) if value > 0.0 => Some(value),
        _ => None,
    }
}

/// Sum every total/amount column across all costed tables and derive the
/// VAT and grand total
pub fn costing_summary(tables: &[TableData]) -> CostingSummary {
    let mut subtotal = 0.0;
    for table in tables {
        for row in &table.rows {
            for (key, value) in row {
                if is_total_column(key) {
                    if let Some(amount) = numeric_value(value) {
                        subtotal += amount;
                    }
                }
            }
        }
    }
    let vat = subtotal * VAT_RATE;
    CostingSummary {
        subtotal,
        vat,
        grand_total: subtotal + vat,
    }
}

/// Render the read-only costed preview; the synthetic action column never
/// appears in it
pub fn render_costed_preview(tables: &[TableData]) -> String {
    let mut out = String::new();
    for (idx, table) in tables.iter().enumerate() {
        let _ = writeln!(out, "<h3>Table {}</h3>", idx + 1);
        let _ = writeln!(
            out,
            r#"<table style="width:100%;border-collapse:collapse;margin:20px 0;">"#
        );

        let _ = writeln!(out, "<tr>");
        for header in &table.headers {
            if is_action_label(header) {
                continue;
            }
            let _ = writeln!(
                out,
                r#"<th style="border:1px solid #ddd;padding:12px;background:#667eea;color:white;">{}</th>"#,
                escape_text(header)
            );
        }
        let _ = writeln!(out, "</tr>");

        for row in &table.rows {
            let _ = writeln!(out, "<tr>");
            for header in &table.headers {
                if is_action_label(header) {
                    continue;
                }
                let value = row.get(header).map(String::as_str).unwrap_or("");
                let _ = writeln!(
                    out,
                    r#"<td style="border:1px solid #ddd;padding:12px;">{}</td>"#,
                    escape_text(value)
                );
            }
            let _ = writeln!(out, "</tr>");
        }
        let _ = writeln!(out, "</table>");
    }
    out
}

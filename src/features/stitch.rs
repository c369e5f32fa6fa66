//! Stitch contract
//!
//! Types and helpers around `POST /stitch-tables/{fileId}`: the response
//! shape, the endpoint URL, and the mount path that turns a successful
//! response into a live editable widget.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::core::session::Session;
use crate::data::styles::{editable_container_id, stitch_result_id};
use crate::utils::error::{TableError, TableResult};
use crate::utils::html::escape_attr;

/// Response body of the stitch endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StitchResponse {
    pub success: bool,
    #[serde(default)]
    pub stitched_html: String,
    #[serde(default)]
    pub row_count: usize,
    #[serde(default)]
    pub page_count: usize,
    #[serde(default)]
    pub error: Option<String>,
}

/// Endpoint that merges per-page extracted tables into one
pub fn stitch_url(file_id: &str) -> String {
    format!("/stitch-tables/{}", file_id)
}

/// Mount a stitch response into the session: parse the stitched fragment,
/// take the pristine snapshot, and return the decorated widget markup.
///
/// A non-success response surfaces the backend-supplied message; the
/// session keeps its last-good state in that case.
pub fn mount_stitched(session: &mut Session, response: &StitchResponse) -> TableResult<String> {
    if !response.success {
        return Err(TableError::Backend {
            message: response
                .error
                .clone()
                .unwrap_or_else(|| "table stitching failed".to_string()),
        });
    }
    session.mount_fragment(&response.stitched_html)
}

/// Wrap decorated table markup in the editable container the host injects
/// into the stitch result panel
pub fn render_container(file_id: &str, table_html: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<div id="{}" style="background:white;padding:15px;border-radius:4px;overflow-x:auto;">"#,
        escape_attr(&editable_container_id(file_id))
    );
    out.push_str(table_html);
    out.push_str("</div>\n");
    out
}

/// Wrap the editable container in the stitch result panel, with the
/// row/page provenance line shown above the table
pub fn render_result_panel(file_id: &str, table_html: &str, response: &StitchResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<div id="{}">"#,
        escape_attr(&stitch_result_id(file_id))
    );
    let _ = writeln!(
        out,
        "<p>Stitched {} rows from {} pages.</p>",
        response.row_count, response.page_count
    );
    out.push_str(&render_container(file_id, table_html));
    out.push_str("</div>\n");
    out
}

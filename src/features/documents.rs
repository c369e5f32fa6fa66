//! Document generation endpoints
//!
//! URL builders and the shared response shape for the offer, presentation,
//! and MAS generation workflows, plus their PDF download locations.

use serde::{Deserialize, Serialize};

use crate::utils::error::{TableError, TableResult};

/// The three documents the backend can generate from a costed table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Offer,
    Presentation,
    Mas,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Offer => "offer",
            DocumentKind::Presentation => "presentation",
            DocumentKind::Mas => "mas",
        }
    }
}

/// `POST /generate-{kind}/{fileId}`
pub fn generate_url(kind: DocumentKind, file_id: &str) -> String {
    format!("/generate-{}/{}", kind.as_str(), file_id)
}

/// `GET /download/{kind}/{fileId}?format=pdf`
pub fn download_url(kind: DocumentKind, file_id: &str) -> String {
    format!("/download/{}/{}?format=pdf", kind.as_str(), file_id)
}

/// Response body shared by all three generation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Fold the `{success, error}` shape into a result, surfacing the
    /// backend-supplied message on failure
    pub fn into_result(self) -> TableResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(TableError::Backend {
                message: self
                    .error
                    .unwrap_or_else(|| "document generation failed".to_string()),
            })
        }
    }
}

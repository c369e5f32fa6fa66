//! Feature modules - backend workflow contracts
//!
//! This module contains the typed contracts for the external services the
//! editable table talks to. The crate owns no HTTP transport; the host
//! (browser `fetch` through the wasm bindings, or tooling around the CLI)
//! performs the I/O against these shapes:
//! - Stitching (merge per-page extractions, mount the widget)
//! - Costing (pricing factors, costed result, client-side summary)
//! - Document generation (offer, presentation, MAS)
//! - Value engineering (budget-tier alternatives)

pub mod costing;
pub mod documents;
pub mod stitch;
pub mod value_engineering;

// Re-export commonly used types
pub use costing::{
    costing_summary, costing_url, render_costed_preview, CostingFactors, CostingRequest,
    CostingResponse, CostingSummary, VAT_RATE,
};
pub use documents::{download_url, generate_url, DocumentKind, GenerateResponse};
pub use stitch::{mount_stitched, render_container, render_result_panel, stitch_url, StitchResponse};
pub use value_engineering::{value_engineering_url, BudgetOption, ValueEngineeringRequest};

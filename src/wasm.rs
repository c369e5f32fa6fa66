//! WASM bindings for boqgrid
//!
//! This module exposes the editable-table engine to JavaScript. The host
//! owns the DOM and the network; it forwards delegated events (clicks on
//! action buttons, drag events on images) into a `BoqSession` and injects
//! the markup the session hands back.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::Serialize;

#[cfg(feature = "wasm")]
use crate::core::drag::{CellRef, DropOutcome};
#[cfg(feature = "wasm")]
use crate::core::session::Session;
#[cfg(feature = "wasm")]
use crate::features::stitch::{mount_stitched, StitchResponse};
#[cfg(feature = "wasm")]
use crate::utils::error::TableResult;

/// Result of an operation that re-renders the widget
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct RenderResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Fresh widget markup to inject; empty on failure
    pub html: String,
    /// Error message if the operation failed
    pub error: Option<String>,
}

#[cfg(feature = "wasm")]
impl RenderResult {
    fn from(result: TableResult<String>) -> Self {
        match result {
            Ok(html) => RenderResult {
                success: true,
                html,
                error: None,
            },
            Err(e) => RenderResult {
                success: false,
                html: String::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Result of a drop event, telling the host whether to re-query cell state
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct DropResult {
    /// Whether an image actually moved
    pub moved: bool,
    /// Fresh widget markup when an image moved; empty otherwise
    pub html: String,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// One editable-table session, keyed by the upload's file id
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct BoqSession {
    inner: Session,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl BoqSession {
    #[wasm_bindgen(constructor)]
    pub fn new(file_id: &str) -> BoqSession {
        BoqSession {
            inner: Session::new(file_id),
        }
    }

    /// The file id this session is bound to
    #[wasm_bindgen(js_name = "fileId")]
    pub fn file_id(&self) -> String {
        self.inner.file_id().to_string()
    }

    /// Mount a stitch endpoint response: parses the stitched table, takes
    /// the pristine snapshot, and returns `{success, html, error}`
    #[wasm_bindgen(js_name = "mountStitched")]
    pub fn mount_stitched(&mut self, response: JsValue) -> JsValue {
        let result = match serde_wasm_bindgen::from_value::<StitchResponse>(response) {
            Ok(response) => mount_stitched(&mut self.inner, &response),
            Err(e) => Err(crate::utils::error::TableError::ParseError {
                message: format!("invalid stitch response: {}", e),
            }),
        };
        to_js(&RenderResult::from(result))
    }

    /// Mount a raw HTML table fragment directly
    #[wasm_bindgen(js_name = "mountFragment")]
    pub fn mount_fragment(&mut self, fragment: &str) -> JsValue {
        to_js(&RenderResult::from(self.inner.mount_fragment(fragment)))
    }

    /// Insert a blank row below the given data row
    #[wasm_bindgen(js_name = "addRowBelow")]
    pub fn add_row_below(&mut self, row_index: usize) -> JsValue {
        to_js(&RenderResult::from(self.inner.add_row_below(row_index)))
    }

    /// Append a blank row at the bottom of the table
    #[wasm_bindgen(js_name = "appendRow")]
    pub fn append_row(&mut self) -> JsValue {
        to_js(&RenderResult::from(self.inner.append_row()))
    }

    /// Delete the given data row. The host confirms with the user first;
    /// deleting the header or the last data row is refused.
    #[wasm_bindgen(js_name = "deleteRow")]
    pub fn delete_row(&mut self, row_index: usize) -> JsValue {
        to_js(&RenderResult::from(self.inner.delete_row(row_index)))
    }

    /// Drag started on the image at (row, col); true if a grab began
    #[wasm_bindgen(js_name = "dragStart")]
    pub fn drag_start(&mut self, row: usize, col: usize) -> bool {
        self.inner.drag_start(CellRef::new(row, col))
    }

    /// Whether the host should show the drop-target highlight on this cell
    #[wasm_bindgen(js_name = "dragEnter")]
    pub fn drag_enter(&self, row: usize, col: usize) -> bool {
        self.inner.drag_enter(CellRef::new(row, col))
    }

    /// Drop on (row, col); returns `{moved, html}`. Markup is only
    /// re-rendered when an image actually moved.
    #[wasm_bindgen(js_name = "drop")]
    pub fn drop_image(&mut self, row: usize, col: usize) -> JsValue {
        let outcome = self.inner.drop_image(CellRef::new(row, col));
        let result = match outcome {
            DropOutcome::Moved { .. } => DropResult {
                moved: true,
                html: self.inner.decorate().unwrap_or_default(),
            },
            _ => DropResult {
                moved: false,
                html: String::new(),
            },
        };
        to_js(&result)
    }

    /// Drag ended without a drop; clears the grab and visual cues
    #[wasm_bindgen(js_name = "dragEnd")]
    pub fn drag_end(&mut self) {
        self.inner.drag_end();
    }

    /// Whether an image is currently grabbed
    #[wasm_bindgen(js_name = "isDragging")]
    pub fn is_dragging(&self) -> bool {
        self.inner.dragging()
    }

    /// Header-keyed data of the live table, as `{headers, rows}`
    #[wasm_bindgen(js_name = "extractTableData")]
    pub fn extract_table_data(&self) -> JsValue {
        match self.inner.extract() {
            Ok(data) => to_js(&data),
            Err(e) => to_js(&RenderResult::from(Err(e))),
        }
    }

    /// Standalone sanitized export, as `{filename, html}`
    #[wasm_bindgen(js_name = "exportDocument")]
    pub fn export_document(&self) -> JsValue {
        match self.inner.export() {
            Ok(document) => to_js(&document),
            Err(e) => to_js(&RenderResult::from(Err(e))),
        }
    }

    /// Restore the pristine stitched table. Destructive; the host confirms
    /// with the user first.
    #[wasm_bindgen(js_name = "resetTable")]
    pub fn reset_table(&mut self) -> JsValue {
        to_js(&RenderResult::from(self.inner.reset()))
    }

    /// Whether a pristine snapshot exists for reset
    #[wasm_bindgen(js_name = "hasSnapshot")]
    pub fn has_snapshot(&self) -> bool {
        self.inner.has_snapshot()
    }

    /// Drop the live table, snapshot, and any in-flight drag
    #[wasm_bindgen(js_name = "teardown")]
    pub fn teardown(&mut self) {
        self.inner.teardown();
    }
}

/// Class the host toggles on a grabbed image (reduced opacity cue)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "grabbedImageClass")]
pub fn grabbed_image_class() -> String {
    crate::data::styles::GRABBED_IMAGE_CLASS.to_string()
}

/// Class the host toggles on a hovered drop target
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "dropHoverClass")]
pub fn drop_hover_class() -> String {
    crate::data::styles::DROP_HOVER_CLASS.to_string()
}

/// Endpoint URL for stitching this upload's tables
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "stitchUrl")]
pub fn stitch_url_wasm(file_id: &str) -> String {
    crate::features::stitch::stitch_url(file_id)
}

/// Endpoint URL for value engineering
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "valueEngineeringUrl")]
pub fn value_engineering_url_wasm(file_id: &str) -> String {
    crate::features::value_engineering::value_engineering_url(file_id)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(feature = "wasm")]
fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

//! Static styling and attribute vocabulary for the editable widget
//!
//! The decoration layer and the fragment parser share this vocabulary:
//! the parser recognizes the action-column markers so that re-parsing
//! decorated output stays idempotent, and the export path knows which
//! attributes count as interactive and must be stripped.

/// Class marking the synthetic "Actions" header cell
pub const ACTION_HEADER_CLASS: &str = "action-column-header";

/// Class marking the synthetic per-row action cell
pub const ACTION_CELL_CLASS: &str = "action-column-cell";

/// Class on the add/delete buttons inside an action cell
pub const ACTION_BUTTON_CLASS: &str = "row-action-btn";

/// Delegated-listener attributes on action buttons and rows
pub const ATTR_ACTION: &str = "data-action";
pub const ATTR_ROW_INDEX: &str = "data-row-index";
pub const ATTR_FILE_ID: &str = "data-file-id";

/// Marks a data cell as a valid image drop target
pub const ATTR_DROP_TARGET: &str = "data-drop-target";

/// Marks an image as participating in the drag protocol
pub const ATTR_DRAGGABLE_IMAGE: &str = "data-drag";

/// Transient class on a grabbed image (reduced opacity cue)
pub const GRABBED_IMAGE_CLASS: &str = "boq-img-grabbed";

/// Transient class on a hovered drop target
pub const DROP_HOVER_CLASS: &str = "boq-drop-hover";

/// Stripe classes applied by reindex (header carries neither)
pub const STRIPE_ODD_CLASS: &str = "boq-row-odd";
pub const STRIPE_EVEN_CLASS: &str = "boq-row-even";

/// Header label for the synthetic action column
pub const ACTION_COLUMN_LABEL: &str = "Actions";

/// Inline styles carried over from the extraction UI
pub const HEADER_CELL_STYLE: &str =
    "border:1px solid #ddd;padding:8px;background-color:#4caf50;color:white;font-weight:600;text-align:left;";
pub const DATA_CELL_STYLE: &str =
    "border:1px solid #ddd;padding:8px;text-align:left;vertical-align:middle;cursor:text;min-height:40px;";
pub const SHADED_ROW_BG: &str = "#f8f9fa";
pub const ACTION_HEADER_STYLE: &str =
    "width:100px;border:1px solid #ddd;background:#4caf50;color:white;font-weight:600;text-align:center;padding:8px;";
pub const ACTION_CELL_STYLE: &str =
    "width:120px;border:1px solid #ddd;background:#f8f9fa;padding:4px;text-align:center;vertical-align:middle;";
pub const IMAGE_STYLE: &str =
    "max-width:100px;max-height:100px;width:auto;height:auto;display:block;margin:3px auto;border-radius:3px;cursor:move;object-fit:contain;";

/// Title of the standalone exported document
pub const EXPORT_TITLE: &str = "Edited BOQ Table";

/// Heading shown above the exported table
pub const EXPORT_HEADING: &str = "Bill of Quantities (BOQ)";

/// Byline under the exported heading
pub const EXPORT_BYLINE: &str = "Edited and exported from Questemate";

/// Minimal stylesheet embedded in the exported document
pub const EXPORT_STYLESHEET: &str = "\
        body { font-family: Arial, sans-serif; padding: 20px; }\n\
        table { border-collapse: collapse; width: 100%; margin: 20px 0; }\n\
        td, th { border: 1px solid #ddd; padding: 12px; text-align: left; vertical-align: middle; }\n\
        tr:first-child td { background-color: #4caf50; color: white; font-weight: 600; }\n\
        tr:nth-child(even) { background-color: #f8f9fa; }\n\
        img { max-width: 150px; max-height: 150px; display: block; margin: 5px auto; border-radius: 4px; }";

/// DOM id of the decorated table for a session
pub fn table_dom_id(file_id: &str) -> String {
    format!("table-{}", file_id)
}

/// DOM id of the editable container for a session
pub fn editable_container_id(file_id: &str) -> String {
    format!("editable-table-{}", file_id)
}

/// DOM id of the stitch result panel for a session
pub fn stitch_result_id(file_id: &str) -> String {
    format!("stitch-result-{}", file_id)
}

/// Deterministic filename for a local export
pub fn export_filename(file_id: &str) -> String {
    format!("edited_boq_{}.html", file_id)
}

/// Attributes that mark a node as interactive; export strips all of these
pub const INTERACTIVE_ATTRIBUTES: &[&str] = &[
    "contenteditable",
    "draggable",
    ATTR_ACTION,
    ATTR_FILE_ID,
    ATTR_DROP_TARGET,
    ATTR_DRAGGABLE_IMAGE,
    "ondrop",
    "ondragover",
    "ondragstart",
    "ondragend",
    "onfocus",
    "onblur",
];

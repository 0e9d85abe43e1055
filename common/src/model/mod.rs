use serde::{Deserialize, Serialize};

pub mod invoice;
pub mod order;
pub mod order_preview;

/// Generic envelope for endpoints that only report an outcome message,
/// e.g. deletes and status toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Outcome of running the spreadsheet import pipeline over one uploaded
/// file. `details` is all-or-nothing: it holds every well-formed row of the
/// file or nothing at all. A header-valid file whose data rows were all
/// blank yields an empty `details` plus a `warning`; the create endpoints
/// are the gate that rejects submissions with zero details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport<T> {
    pub message: String,
    pub upload_file: String,
    pub details: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

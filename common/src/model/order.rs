use serde::{Deserialize, Serialize};

/// An order as stored and returned by the API (GET).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    /// Order date, "YYYY-MM-DD".
    pub date: String,
    pub description: String,
    /// Name of the spreadsheet the details were imported from.
    pub upload_file: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub is_active: bool,
}

/// One order detail row as returned by the API, with its generated
/// identifiers and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub orderdetail_id: String,
    pub order_id: String,
    pub number: i64,
    pub centre_medical: String,
    pub ref_patient: String,
    pub name_patient: String,
    pub ref_analyze: String,
    pub nomenclature_examen: String,
    pub code: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub is_active: bool,
}

/// One order detail as mapped from a spreadsheet row, before the backend
/// assigns identifiers. This is the `TypedRecord` of the order import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetailPayload {
    pub number: i64,
    pub centre_medical: String,
    pub ref_patient: String,
    pub name_patient: String,
    pub ref_analyze: String,
    pub nomenclature_examen: String,
    pub code: String,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderPayload {
    pub date: String,
    pub description: String,
    pub upload_file: String,
    pub details: Vec<OrderDetailPayload>,
}

/// Response of a successful order creation (201).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub message: String,
    pub order: CreatedOrderRef,
    pub details: Vec<OrderDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedOrderRef {
    pub order_id: String,
}

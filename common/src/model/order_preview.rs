use serde::{Deserialize, Serialize};

/// A weekly order preview. Previews carry the year/month/week they belong
/// to so the list endpoint can filter on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPreview {
    pub order_id: String,
    pub date: String,
    pub description: String,
    pub year_number: i32,
    pub month_number: i32,
    pub week_number: i32,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPreviewDetail {
    pub orderdetail_id: String,
    pub order_id: String,
    pub medical_center: String,
    pub patient_name: String,
    pub nomenclature: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub is_active: bool,
}

/// One preview detail as mapped from the 3-column spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPreviewDetailPayload {
    pub medical_center: String,
    pub patient_name: String,
    pub nomenclature: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderPreviewPayload {
    pub date: String,
    pub description: String,
    pub year: i32,
    pub month: i32,
    pub week: i32,
    // Wire name kept from the existing clients.
    #[serde(rename = "orderDetails")]
    pub order_details: Vec<OrderPreviewDetailPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderPreviewResponse {
    pub message: String,
    pub order: CreatedOrderPreviewRef,
    pub details: Vec<OrderPreviewDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedOrderPreviewRef {
    pub order_id: String,
}

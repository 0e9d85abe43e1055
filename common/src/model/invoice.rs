use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: String,
    pub date: String,
    pub description: String,
    pub is_payed: bool,
    pub upload_file: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDetail {
    pub invoicedetail_id: String,
    pub invoice_id: String,
    pub demande: String,
    pub name_patient: String,
    pub date_prel: String,
    pub ref_patient: String,
    pub montant: f64,
    pub unknow: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub is_active: bool,
}

/// One invoice detail as mapped from a spreadsheet row. `unknow` is the
/// single nullable field of the import: an empty cell stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetailPayload {
    pub demande: String,
    pub name_patient: String,
    /// Sample date normalized to "YYYY-MM-DD"; empty when the cell was blank.
    pub date_prel: String,
    pub ref_patient: String,
    pub montant: f64,
    pub unknow: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoicePayload {
    pub date: String,
    pub description: String,
    pub is_payed: bool,
    pub upload_file: String,
    pub details: Vec<InvoiceDetailPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceResponse {
    pub message: String,
    pub invoice: CreatedInvoiceRef,
    pub details: Vec<InvoiceDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedInvoiceRef {
    pub invoice_id: String,
}

/// Body of `PATCH /api/invoices/{id}/payment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePaidStatus {
    pub is_payed: bool,
}

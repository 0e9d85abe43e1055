//! SQLite bootstrap. Services open their own connection per operation
//! against [`DB_PATH`]; this module only guarantees the tables exist before
//! the server starts accepting requests.

use rusqlite::Connection;

pub const DB_PATH: &str = "labconsole.sqlite";

/// Creates the schema on first start. Idempotent.
pub fn init() -> Result<(), String> {
    let conn = Connection::open(DB_PATH).map_err(|e| e.to_string())?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS orders (
             order_id    TEXT PRIMARY KEY,
             date        TEXT NOT NULL,
             description TEXT NOT NULL,
             upload_file TEXT NOT NULL,
             created_at  TEXT NOT NULL,
             updated_at  TEXT,
             is_active   INTEGER NOT NULL DEFAULT 1
         );
         CREATE TABLE IF NOT EXISTS order_details (
             orderdetail_id      TEXT PRIMARY KEY,
             order_id            TEXT NOT NULL REFERENCES orders(order_id),
             number              INTEGER NOT NULL,
             centre_medical      TEXT NOT NULL,
             ref_patient         TEXT NOT NULL,
             name_patient        TEXT NOT NULL,
             ref_analyze         TEXT NOT NULL,
             nomenclature_examen TEXT NOT NULL,
             code                TEXT NOT NULL,
             created_at          TEXT NOT NULL,
             updated_at          TEXT,
             is_active           INTEGER NOT NULL DEFAULT 1
         );
         CREATE TABLE IF NOT EXISTS invoices (
             invoice_id  TEXT PRIMARY KEY,
             date        TEXT NOT NULL,
             description TEXT NOT NULL,
             is_payed    INTEGER NOT NULL DEFAULT 0,
             upload_file TEXT NOT NULL,
             created_at  TEXT NOT NULL,
             updated_at  TEXT,
             is_active   INTEGER NOT NULL DEFAULT 1
         );
         CREATE TABLE IF NOT EXISTS invoice_details (
             invoicedetail_id TEXT PRIMARY KEY,
             invoice_id       TEXT NOT NULL REFERENCES invoices(invoice_id),
             demande          TEXT NOT NULL,
             name_patient     TEXT NOT NULL,
             date_prel        TEXT NOT NULL,
             ref_patient      TEXT NOT NULL,
             montant          REAL NOT NULL,
             unknow           TEXT,
             created_at       TEXT NOT NULL,
             updated_at       TEXT,
             is_active        INTEGER NOT NULL DEFAULT 1
         );
         CREATE TABLE IF NOT EXISTS order_previews (
             order_id     TEXT PRIMARY KEY,
             date         TEXT NOT NULL,
             description  TEXT NOT NULL,
             year_number  INTEGER NOT NULL,
             month_number INTEGER NOT NULL,
             week_number  INTEGER NOT NULL,
             created_at   TEXT NOT NULL,
             updated_at   TEXT,
             is_active    INTEGER NOT NULL DEFAULT 1
         );
         CREATE TABLE IF NOT EXISTS order_preview_details (
             orderdetail_id TEXT PRIMARY KEY,
             order_id       TEXT NOT NULL REFERENCES order_previews(order_id),
             medical_center TEXT NOT NULL,
             patient_name   TEXT NOT NULL,
             nomenclature   TEXT NOT NULL,
             created_at     TEXT NOT NULL,
             updated_at     TEXT,
             is_active      INTEGER NOT NULL DEFAULT 1
         );",
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}

/// Current timestamp in the ISO form stored in `created_at`/`updated_at`.
pub fn now() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

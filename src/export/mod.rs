// ==========================================
// Sistem Monitoring PST - Lapisan Ekspor
// ==========================================
// Tanggung jawab: menulis hasil rekap ke bentuk berkas untuk
// konsumen hilir; CSV datar dan muatan JSON untuk penulis xlsx
// Batasan: tidak menghitung ulang apa pun; murni serialisasi
// ==========================================

pub mod csv_writer;
pub mod sheet_payload;

use thiserror::Error;

/// Galat modul ekspor
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("gagal menulis berkas: {0}")]
    Io(String),

    #[error("gagal menyusun CSV: {0}")]
    Csv(String),

    #[error("gagal menyusun JSON: {0}")]
    Json(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Json(err.to_string())
    }
}

/// Alias Result modul ekspor
pub type ExportResult<T> = Result<T, ExportError>;

pub use csv_writer::{recap_csv_string, write_recap_csv};
pub use sheet_payload::{write_payload_json, write_workbook_json, SheetPayload};

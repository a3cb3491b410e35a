// ==========================================
// Sistem Monitoring PST - Tipe Galat Modul Impor
// ==========================================
// Perkakas: makro derive thiserror
// ==========================================

use thiserror::Error;

/// Galat modul impor
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Galat berkas =====
    #[error("berkas tidak ditemukan: {0}")]
    FileNotFound(String),

    #[error("format berkas tidak didukung: {0} (hanya .json)")]
    UnsupportedFormat(String),

    #[error("gagal membaca berkas: {0}")]
    FileReadError(String),

    // ===== Galat isi =====
    #[error("JSON tidak sah: {0}")]
    JsonParseError(String),

    #[error("bentuk data tidak dikenali: {0}")]
    UnexpectedShape(String),

    // ===== Galat umum =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::JsonParseError(err.to_string())
    }
}

/// Alias Result modul impor
pub type ImportResult<T> = Result<T, ImportError>;

// ==========================================
// Sistem Monitoring PST - Muatan Lembar untuk Kolaborator
// ==========================================
// Dua bentuk serah terima ke penulis spreadsheet eksternal:
// muatan {title, data} berupa grid string untuk util ekspor
// generik, dan buku kerja utuh (sel + metadata) sebagai JSON
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::export::ExportResult;
use crate::report::sheet::{RecapWorkbook, Sheet};

// ==========================================
// SheetPayload - muatan {title, data}
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetPayload {
    pub title: String,
    pub data: Vec<Vec<String>>,
}

impl SheetPayload {
    /// Ratakan satu lembar menjadi grid string; formula dan angka
    /// tampil lewat nilai mentahnya
    pub fn from_sheet(sheet: &Sheet) -> Self {
        Self {
            title: sheet.name.clone(),
            data: sheet
                .rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.raw_display()).collect())
                .collect(),
        }
    }
}

/// Tulis muatan {title, data} sebagai JSON
pub fn write_payload_json(payload: &SheetPayload, path: &Path) -> ExportResult<()> {
    let content = serde_json::to_string_pretty(payload)?;
    std::fs::write(path, content)?;
    info!(berkas = %path.display(), baris = payload.data.len(), "muatan lembar tertulis");
    Ok(())
}

/// Tulis buku kerja utuh (sel bertipe + metadata tata letak) sebagai JSON
pub fn write_workbook_json(workbook: &RecapWorkbook, path: &Path) -> ExportResult<()> {
    let content = serde_json::to_string_pretty(workbook)?;
    std::fs::write(path, content)?;
    info!(
        berkas = %path.display(),
        lembar = workbook.sheets.len(),
        "buku kerja tertulis"
    );
    Ok(())
}

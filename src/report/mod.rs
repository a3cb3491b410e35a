// ==========================================
// Sistem Monitoring PST - Lapisan Laporan
// ==========================================
// Tanggung jawab: menyusun struktur lembar/buku kerja siap tulis
// dari record rekap; matriks monitoring dan lembar rekap mentah
// Batasan: tidak menulis berkas; penulisan ada di lapisan ekspor
// ==========================================

pub mod monitoring_matrix;
pub mod sheet;
pub mod workbook;

use thiserror::Error;

/// Galat lapisan laporan; hanya pelanggaran kontrak pemanggil.
/// Kondisi per-record yang cacat tidak pernah sampai ke sini
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("tahun laporan {0} di luar rentang 1900..=2100")]
    InvalidYear(i32),
}

/// Alias Result lapisan laporan
pub type ReportResult<T> = Result<T, ReportError>;

pub use monitoring_matrix::{MonitoringMatrix, MonitoringMatrixBuilder, MATRIX_COLUMN_COUNT};
pub use sheet::{
    column_letter, CellValue, ColumnWidth, FreezePane, MergeRange, NumberFormatHint,
    RecapWorkbook, Sheet, SheetCell,
};
pub use workbook::RecapWorkbookBuilder;

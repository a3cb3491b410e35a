// ==========================================
// Sistem Monitoring PST - Buku Kerja Ekspor Penuh
// ==========================================
// Mode ekspor lengkap: lembar matriks monitoring plus lembar
// "Rekap" berisi seluruh record mentah. Matriksnya diambil dari
// satu lintasan bucket yang sama dengan mode matriks-saja
// ==========================================

use crate::domain::recap::RekapRecord;
use crate::report::monitoring_matrix::MonitoringMatrixBuilder;
use crate::report::sheet::{ColumnWidth, FreezePane, RecapWorkbook, Sheet, SheetCell};
use crate::report::ReportResult;

/// Kolom lembar rekap, urut kiri ke kanan
pub const RECAP_HEADERS: [&str; 9] = [
    "No",
    "ID Transaksi",
    "Nama Pengguna",
    "Jenis Layanan",
    "Keterangan",
    "Tanggal Permintaan",
    "Tanggal Selesai",
    "Capaian",
    "Petugas",
];

// ==========================================
// RecapWorkbookBuilder
// ==========================================
pub struct RecapWorkbookBuilder;

impl RecapWorkbookBuilder {
    pub const MATRIX_SHEET_NAME: &'static str = "Monitoring";
    pub const RECAP_SHEET_NAME: &'static str = "Rekap";

    /// Bangun buku kerja dua lembar untuk satu tahun laporan
    pub fn build(records: &[RekapRecord], year: i32) -> ReportResult<RecapWorkbook> {
        let matrix = MonitoringMatrixBuilder::build(records, year)?;

        Ok(RecapWorkbook {
            sheets: vec![
                matrix.to_sheet(Self::MATRIX_SHEET_NAME),
                Self::recap_sheet(records),
            ],
        })
    }

    // ===== Lembar record mentah =====
    fn recap_sheet(records: &[RekapRecord]) -> Sheet {
        let mut sheet = Sheet::new(Self::RECAP_SHEET_NAME);
        sheet.push_row(RECAP_HEADERS.iter().map(|h| SheetCell::text(*h)).collect());

        for record in records {
            sheet.push_row(vec![
                SheetCell::integer(record.no),
                SheetCell::text(record.id_transaksi.clone()),
                SheetCell::text(record.nama_pengguna.clone()),
                SheetCell::text(record.jenis_layanan_label()),
                SheetCell::text(record.keterangan.clone()),
                SheetCell::text(record.tanggal_permintaan.clone()),
                SheetCell::text(record.tanggal_selesai.clone()),
                SheetCell::text(record.capaian.label()),
                SheetCell::text(record.petugas.clone()),
            ]);
        }

        sheet.freeze = Some(FreezePane { rows: 1, cols: 0 });
        sheet.column_widths = vec![
            ColumnWidth { column: 0, width: 5.0 },
            ColumnWidth { column: 1, width: 26.0 },
            ColumnWidth { column: 2, width: 30.0 },
            ColumnWidth { column: 3, width: 24.0 },
            ColumnWidth { column: 4, width: 28.0 },
            ColumnWidth { column: 5, width: 18.0 },
            ColumnWidth { column: 6, width: 18.0 },
            ColumnWidth { column: 7, width: 18.0 },
            ColumnWidth { column: 8, width: 26.0 },
        ];
        sheet
    }
}

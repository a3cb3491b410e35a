// ==========================================
// Sistem Monitoring PST - Matriks Monitoring Tahunan
// ==========================================
// Grid kepatuhan (kategori layanan x bulan) untuk satu tahun:
// judul, baris kepala, lalu tiga baris per kategori (indikator
// berformula persen, pembilang, penyebut) plus baris pemisah.
// Sel formula menghindari pembagian nol lewat IF(...=0,0,...)
// ==========================================

use tracing::debug;

use crate::domain::monitoring::{MatrixRowLabels, MonitoringBuckets, INDICATOR_TARGET};
use crate::domain::recap::RekapRecord;
use crate::domain::types::{Capaian, ServiceCategory};
use crate::engine::date_normalizer::{CanonicalDate, MONTH_NAMES};
use crate::report::sheet::{
    column_letter, ColumnWidth, FreezePane, MergeRange, Sheet, SheetCell,
};
use crate::report::ReportError;

/// Kolom tetap: No, Indikator, Target, lalu 12 bulan
pub const MATRIX_COLUMN_COUNT: usize = 15;
/// Indeks kolom Januari (0-based)
const FIRST_MONTH_COLUMN: usize = 3;
/// Baris kepala sebelum blok kategori pertama
const HEADER_ROW_COUNT: usize = 4;
/// Tiap kategori: indikator + pembilang + penyebut + pemisah
const ROWS_PER_CATEGORY: usize = 4;

/// Rentang tahun laporan yang diterima
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

// ==========================================
// MonitoringMatrix - hasil build
// ==========================================
#[derive(Debug, Clone)]
pub struct MonitoringMatrix {
    pub year: i32,
    pub rows: Vec<Vec<SheetCell>>,
    pub merges: Vec<MergeRange>,
    pub column_widths: Vec<ColumnWidth>,
    pub freeze: FreezePane,
    /// Isi bucket yang melandasi grid; dipakai mode buku kerja penuh
    /// supaya kedua mode keluaran dijamin identik secara numerik
    pub buckets: MonitoringBuckets,
}

impl MonitoringMatrix {
    /// Bungkus grid menjadi lembar bernama untuk buku kerja
    pub fn to_sheet(&self, name: impl Into<String>) -> Sheet {
        Sheet {
            name: name.into(),
            rows: self.rows.clone(),
            merges: self.merges.clone(),
            column_widths: self.column_widths.clone(),
            freeze: Some(self.freeze),
        }
    }
}

// ==========================================
// MonitoringMatrixBuilder
// ==========================================
pub struct MonitoringMatrixBuilder;

impl MonitoringMatrixBuilder {
    /// Bangun matriks monitoring untuk satu tahun laporan.
    ///
    /// Record dengan kategori tak terpetakan atau tanggal permintaan
    /// di luar tahun (termasuk yang gagal diparse) tidak masuk bucket;
    /// keduanya bukan kondisi galat
    pub fn build(records: &[RekapRecord], year: i32) -> Result<MonitoringMatrix, ReportError> {
        if !YEAR_RANGE.contains(&year) {
            return Err(ReportError::InvalidYear(year));
        }

        let buckets = Self::collect_buckets(records, year);
        let rows = Self::layout_rows(&buckets, year);

        debug!(
            tahun = year,
            record = records.len(),
            baris = rows.len(),
            "matriks monitoring terbangun"
        );

        Ok(MonitoringMatrix {
            year,
            rows,
            merges: vec![MergeRange {
                start_row: 0,
                start_col: 0,
                end_row: 0,
                end_col: MATRIX_COLUMN_COUNT - 1,
            }],
            column_widths: Self::column_widths(),
            freeze: FreezePane { rows: 4, cols: 2 },
            buckets,
        })
    }

    // ===== Lintasan bucket =====
    fn collect_buckets(records: &[RekapRecord], year: i32) -> MonitoringBuckets {
        let mut buckets = MonitoringBuckets::new();
        for record in records {
            let category = match record.jenis_layanan {
                Some(c) => c,
                None => continue,
            };
            let date = match CanonicalDate::parse_display(&record.tanggal_permintaan) {
                Some(d) => d,
                None => continue,
            };
            if date.year() != year {
                continue;
            }
            let sesuai = record.capaian == Capaian::SesuaiTarget;
            buckets.bucket_mut(category).record(date.month0(), sesuai);
        }
        buckets
    }

    // ===== Tata letak grid =====
    fn layout_rows(buckets: &MonitoringBuckets, year: i32) -> Vec<Vec<SheetCell>> {
        let mut rows = Vec::with_capacity(HEADER_ROW_COUNT + 5 * ROWS_PER_CATEGORY);

        // Baris judul (digabung selebar grid) dan baris kosong
        let mut title_row = vec![SheetCell::text(format!(
            "MONITORING PELAYANAN STATISTIK TERPADU TAHUN {}",
            year
        ))];
        title_row.resize(MATRIX_COLUMN_COUNT, SheetCell::empty());
        rows.push(title_row);
        rows.push(blank_row());

        // Baris kepala kolom
        let mut header = vec![
            SheetCell::text("No"),
            SheetCell::text("Indikator"),
            SheetCell::text("Target"),
        ];
        header.extend(MONTH_NAMES.iter().map(|m| SheetCell::text(*m)));
        rows.push(header);

        // Sub-kepala bernomor "(1)".."(15)"
        rows.push(
            (1..=MATRIX_COLUMN_COUNT)
                .map(|n| SheetCell::text(format!("({})", n)))
                .collect(),
        );

        for (index, category) in ServiceCategory::ALL.iter().enumerate() {
            let bucket = buckets.bucket(*category);
            let labels = MatrixRowLabels::for_category(*category);
            let base_row = HEADER_ROW_COUNT + index * ROWS_PER_CATEGORY;

            // Baris indikator berformula; rujukannya baris pembilang
            // dan penyebut persis di bawahnya (A1 1-based)
            let numerator_row = base_row + 2;
            let denominator_row = base_row + 3;
            let mut indicator = vec![
                SheetCell::integer((index + 1) as u32),
                SheetCell::text(labels.indicator),
                SheetCell::integer(INDICATOR_TARGET),
            ];
            for month in 0..12 {
                let letter = column_letter(FIRST_MONTH_COLUMN + month);
                let numerator = format!("{}{}", letter, numerator_row);
                let denominator = format!("{}{}", letter, denominator_row);
                indicator.push(SheetCell::percent_formula(format!(
                    "=IF({}=0,0,{}/{})",
                    denominator, numerator, denominator
                )));
            }
            rows.push(indicator);

            let mut numerator_cells = vec![
                SheetCell::empty(),
                SheetCell::text(labels.numerator),
                SheetCell::empty(),
            ];
            numerator_cells.extend(bucket.fulfilled.iter().map(|n| SheetCell::integer(*n)));
            rows.push(numerator_cells);

            let mut denominator_cells = vec![
                SheetCell::empty(),
                SheetCell::text(labels.denominator),
                SheetCell::empty(),
            ];
            denominator_cells.extend(bucket.total.iter().map(|n| SheetCell::integer(*n)));
            rows.push(denominator_cells);

            rows.push(blank_row());
        }

        rows
    }

    fn column_widths() -> Vec<ColumnWidth> {
        let mut widths = vec![
            ColumnWidth { column: 0, width: 5.0 },
            ColumnWidth { column: 1, width: 45.0 },
            ColumnWidth { column: 2, width: 10.0 },
        ];
        for column in FIRST_MONTH_COLUMN..MATRIX_COLUMN_COUNT {
            widths.push(ColumnWidth {
                column,
                width: 12.0,
            });
        }
        widths
    }
}

fn blank_row() -> Vec<SheetCell> {
    vec![SheetCell::empty(); MATRIX_COLUMN_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recap::RekapRecord;

    fn record(
        no: u32,
        category: Option<ServiceCategory>,
        request: &str,
        capaian: Capaian,
    ) -> RekapRecord {
        RekapRecord {
            no,
            id_transaksi: format!("BPS-7200-SILASTIK-{}", 10000 + no),
            nama_pengguna: "Uji".to_string(),
            jenis_layanan: category,
            keterangan: String::new(),
            tanggal_permintaan: request.to_string(),
            tanggal_selesai: request.to_string(),
            capaian,
            petugas: "Andi".to_string(),
        }
    }

    #[test]
    fn test_build_rejects_out_of_range_year() {
        let err = MonitoringMatrixBuilder::build(&[], 1899).unwrap_err();
        assert!(matches!(err, ReportError::InvalidYear(1899)));
        assert!(MonitoringMatrixBuilder::build(&[], 2101).is_err());
        assert!(MonitoringMatrixBuilder::build(&[], 2025).is_ok());
    }

    #[test]
    fn test_bucket_counts_match_manual_tally() {
        let records = vec![
            record(1, Some(ServiceCategory::Perpustakaan), "15/01/2025", Capaian::SesuaiTarget),
            record(2, Some(ServiceCategory::Perpustakaan), "20/01/2025", Capaian::TidakSesuaiTarget),
            record(3, Some(ServiceCategory::Perpustakaan), "05/03/2025", Capaian::SesuaiTarget),
            record(4, Some(ServiceCategory::KonsultasiOnline), "10/01/2025", Capaian::SesuaiTarget),
            // Tahun lain dan kategori kosong tidak ikut dihitung
            record(5, Some(ServiceCategory::Perpustakaan), "15/01/2024", Capaian::SesuaiTarget),
            record(6, None, "15/01/2025", Capaian::BelumDiketahui),
            // Tanggal tak terparse juga dilewati
            record(7, Some(ServiceCategory::Perpustakaan), "teks rusak", Capaian::BelumDiketahui),
        ];

        let matrix = MonitoringMatrixBuilder::build(&records, 2025).unwrap();
        let perpustakaan = matrix.buckets.bucket(ServiceCategory::Perpustakaan);
        assert_eq!(perpustakaan.total[0], 2);
        assert_eq!(perpustakaan.fulfilled[0], 1);
        assert_eq!(perpustakaan.total[2], 1);
        assert_eq!(perpustakaan.fulfilled[2], 1);
        assert_eq!(perpustakaan.year_total(), 3);

        let online = matrix.buckets.bucket(ServiceCategory::KonsultasiOnline);
        assert_eq!(online.total[0], 1);
        assert_eq!(online.fulfilled[0], 1);

        for (_, bucket) in matrix.buckets.iter() {
            for month in 0..12 {
                assert!(bucket.fulfilled[month] <= bucket.total[month]);
            }
        }
    }

    #[test]
    fn test_layout_shape_and_headers() {
        let matrix = MonitoringMatrixBuilder::build(&[], 2025).unwrap();

        assert_eq!(matrix.rows.len(), 24);
        for row in &matrix.rows {
            assert_eq!(row.len(), MATRIX_COLUMN_COUNT);
        }

        assert_eq!(
            matrix.rows[0][0].raw_display(),
            "MONITORING PELAYANAN STATISTIK TERPADU TAHUN 2025"
        );
        assert_eq!(matrix.rows[2][0].raw_display(), "No");
        assert_eq!(matrix.rows[2][1].raw_display(), "Indikator");
        assert_eq!(matrix.rows[2][2].raw_display(), "Target");
        assert_eq!(matrix.rows[2][3].raw_display(), "Januari");
        assert_eq!(matrix.rows[2][14].raw_display(), "Desember");
        assert_eq!(matrix.rows[3][0].raw_display(), "(1)");
        assert_eq!(matrix.rows[3][14].raw_display(), "(15)");

        assert_eq!(matrix.freeze, FreezePane { rows: 4, cols: 2 });
        assert_eq!(
            matrix.merges,
            vec![MergeRange {
                start_row: 0,
                start_col: 0,
                end_row: 0,
                end_col: 14
            }]
        );
    }

    #[test]
    fn test_indicator_formula_references_rows_below() {
        let matrix = MonitoringMatrixBuilder::build(&[], 2025).unwrap();

        // Blok kategori pertama: baris indikator 0-based ke-4,
        // pembilang A1 baris 6, penyebut baris 7
        assert_eq!(matrix.rows[4][3].raw_display(), "=IF(D7=0,0,D6/D7)");
        assert_eq!(matrix.rows[4][14].raw_display(), "=IF(O7=0,0,O6/O7)");
        // Blok kedua bergeser empat baris
        assert_eq!(matrix.rows[8][3].raw_display(), "=IF(D11=0,0,D10/D11)");

        assert_eq!(matrix.rows[4][0].raw_display(), "1");
        assert_eq!(matrix.rows[4][2].raw_display(), "100");
        assert_eq!(matrix.rows[8][0].raw_display(), "2");
    }

    #[test]
    fn test_category_rows_carry_bucket_values() {
        let records = vec![
            record(1, Some(ServiceCategory::Perpustakaan), "15/01/2025", Capaian::SesuaiTarget),
            record(2, Some(ServiceCategory::Perpustakaan), "20/01/2025", Capaian::TidakSesuaiTarget),
        ];
        let matrix = MonitoringMatrixBuilder::build(&records, 2025).unwrap();

        // Perpustakaan adalah blok pertama; Januari di kolom 3
        assert_eq!(matrix.rows[5][3].raw_display(), "1"); // pembilang
        assert_eq!(matrix.rows[6][3].raw_display(), "2"); // penyebut
        assert_eq!(matrix.rows[5][4].raw_display(), "0"); // Februari kosong
    }

    #[test]
    fn test_to_sheet_carries_layout_metadata() {
        let matrix = MonitoringMatrixBuilder::build(&[], 2025).unwrap();
        let sheet = matrix.to_sheet("Monitoring");

        assert_eq!(sheet.name, "Monitoring");
        assert_eq!(sheet.row_count(), 24);
        assert_eq!(sheet.freeze, Some(FreezePane { rows: 4, cols: 2 }));
        assert_eq!(sheet.merges.len(), 1);
        assert_eq!(sheet.column_widths.len(), MATRIX_COLUMN_COUNT);
    }
}

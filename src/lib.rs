// ==========================================
// Sistem Monitoring PST - Pustaka Inti
// ==========================================
// Mesin rekapitulasi & kepatuhan SLA Pelayanan Statistik Terpadu:
// menyatukan record tiga sistem sumber, menilai capaian terhadap
// baku mutu layanan, dan menyusun laporan monitoring tahunan
// ==========================================

// ==========================================
// Deklarasi modul
// ==========================================

// Lapisan domain - entitas dan tipe
pub mod domain;

// Lapisan mesin - aturan bisnis murni
pub mod engine;

// Lapisan impor - pembacaan berkas sumber
pub mod importer;

// Lapisan konfigurasi
pub mod config;

// Lapisan laporan - struktur lembar/buku kerja
pub mod report;

// Lapisan ekspor - penulisan berkas keluaran
pub mod export;

// Sistem log
pub mod logging;

// ==========================================
// Re-ekspor tipe inti
// ==========================================

// Tipe domain
pub use domain::types::{Capaian, CenturyPolicy, IdStrategy, ServiceCategory, SourceKind};

// Entitas domain
pub use domain::{
    LibraryVisit, MonitoringBucket, MonitoringBuckets, RekapRecord, SourceCollections,
    StatisticalRecommendation, StatisticalTransaction,
};

// Mesin
pub use engine::{
    classify, count_business_days, CanonicalDate, DateNormalizer, NormalizedDate, RecapAggregator,
    TransactionIdGenerator,
};

// Impor dan konfigurasi
pub use config::ReportConfig;
pub use importer::{ImportError, SourceLoader};

// Laporan dan ekspor
pub use export::{ExportError, SheetPayload};
pub use report::{
    MonitoringMatrix, MonitoringMatrixBuilder, RecapWorkbook, RecapWorkbookBuilder, ReportError,
    Sheet, SheetCell,
};

// ==========================================
// Konstanta
// ==========================================

// Versi sistem
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nama sistem
pub const APP_NAME: &str = "Sistem Monitoring Pelayanan Statistik Terpadu";

// ==========================================
// Pemeriksaan kompilasi
// ==========================================

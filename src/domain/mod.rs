// ==========================================
// Sistem Monitoring PST - Lapisan Model Domain
// ==========================================
// Tanggung jawab: mendefinisikan bentuk record sumber, record
// rekap terpadu, bucket monitoring, dan tipe/enumerasi bersama
// Batasan: tidak berisi logika agregasi, tanggal, maupun I/O
// ==========================================

pub mod monitoring;
pub mod recap;
pub mod source;
pub mod types;

// Re-ekspor tipe inti
pub use monitoring::{MatrixRowLabels, MonitoringBucket, MonitoringBuckets, INDICATOR_TARGET};
pub use recap::RekapRecord;
pub use source::{
    CustomerDetail, LibraryVisit, OnlineServiceDetail, OnsiteVisitDetail, SourceCollections,
    StatisticalRecommendation, StatisticalTransaction, TransactionDetail,
};
pub use types::{Capaian, CenturyPolicy, IdStrategy, ServiceCategory, SourceKind};

// ==========================================
// Sistem Monitoring PST - Lapisan Mesin
// ==========================================
// Tanggung jawab: logika murni rekapitulasi; normalisasi tanggal,
// kalender hari kerja, klasifikasi SLA, id sintetis, agregasi
// Batasan: tanpa I/O file maupun jaringan; seluruh masukan lewat
// parameter, seluruh keluaran berupa nilai baru
// ==========================================

pub mod business_calendar;
pub mod date_normalizer;
pub mod recap_aggregator;
pub mod sla_classifier;
pub mod transaction_id;

// Re-ekspor antarmuka inti mesin
pub use business_calendar::{calendar_day_difference, count_business_days};
pub use date_normalizer::{CanonicalDate, DateNormalizer, NormalizedDate, MONTH_NAMES};
pub use recap_aggregator::{map_service_category, RecapAggregator};
pub use sla_classifier::{business_day_limit, classify};
pub use transaction_id::{five_digit_hash, TransactionIdGenerator};

// ==========================================
// Sistem Monitoring PST - Lapisan Konfigurasi
// ==========================================
// Tanggung jawab: memuat dan menyediakan konfigurasi laporan
// Batasan: tidak menyimpan state runtime selain nilai konfigurasi
// ==========================================

pub mod report_config;

pub use report_config::{default_config_path, ReportConfig, CONFIG_PATH_ENV};

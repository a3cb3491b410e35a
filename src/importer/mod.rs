// ==========================================
// Sistem Monitoring PST - Lapisan Impor
// ==========================================
// Tanggung jawab: membaca berkas sumber JSON menjadi koleksi
// record bertipe untuk diumpankan ke mesin rekap
// Batasan: tidak menilai isi record; record cacat urusan mesin
// ==========================================

pub mod error;
pub mod source_loader;

pub use error::{ImportError, ImportResult};
pub use source_loader::SourceLoader;

// ==========================================
// Sistem Monitoring PST - Pemuat Berkas Sumber
// ==========================================
// Membaca hasil unduhan scraper (JSON) menjadi koleksi record
// sumber bertipe. Dua bentuk dokumen diterima: larik polos
// [...] atau terbungkus {"data": [...]} ala respons API
// ==========================================

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::domain::source::{
    LibraryVisit, SourceCollections, StatisticalRecommendation, StatisticalTransaction,
};
use crate::importer::error::{ImportError, ImportResult};

// ==========================================
// SourceLoader
// ==========================================
pub struct SourceLoader;

impl SourceLoader {
    pub fn load_transactions(path: &Path) -> ImportResult<Vec<StatisticalTransaction>> {
        let records = Self::load_records(path)?;
        info!(berkas = %path.display(), record = records.len(), "transaksi SILASTIK dimuat");
        Ok(records)
    }

    pub fn load_library_visits(path: &Path) -> ImportResult<Vec<LibraryVisit>> {
        let records = Self::load_records(path)?;
        info!(berkas = %path.display(), record = records.len(), "kunjungan perpustakaan dimuat");
        Ok(records)
    }

    pub fn load_recommendations(path: &Path) -> ImportResult<Vec<StatisticalRecommendation>> {
        let records = Self::load_records(path)?;
        info!(berkas = %path.display(), record = records.len(), "rekomendasi ROMANTIK dimuat");
        Ok(records)
    }

    /// Muat ketiga koleksi sekaligus; jalur None menghasilkan koleksi kosong
    pub fn load_collections(
        transactions: Option<&Path>,
        library_visits: Option<&Path>,
        recommendations: Option<&Path>,
    ) -> ImportResult<SourceCollections> {
        Ok(SourceCollections {
            transactions: match transactions {
                Some(path) => Self::load_transactions(path)?,
                None => Vec::new(),
            },
            library_visits: match library_visits {
                Some(path) => Self::load_library_visits(path)?,
                None => Vec::new(),
            },
            recommendations: match recommendations {
                Some(path) => Self::load_recommendations(path)?,
                None => Vec::new(),
            },
        })
    }

    // ===== Pembacaan dan pembentukan =====
    fn load_records<T: DeserializeOwned>(path: &Path) -> ImportResult<Vec<T>> {
        // Periksa keberadaan berkas
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // Periksa ekstensi
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if extension != "json" {
            return Err(ImportError::UnsupportedFormat(extension.to_string()));
        }

        let raw = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| ImportError::JsonParseError(format!("{}: {}", path.display(), e)))?;

        let items = match value {
            Value::Array(items) => Value::Array(items),
            Value::Object(mut map) => map.remove("data").ok_or_else(|| {
                ImportError::UnexpectedShape(format!(
                    "{}: objek tanpa kunci \"data\"",
                    path.display()
                ))
            })?,
            _ => {
                return Err(ImportError::UnexpectedShape(format!(
                    "{}: bukan larik maupun objek",
                    path.display()
                )))
            }
        };

        Ok(serde_json::from_value(items)?)
    }
}

// ==========================================
// Sistem Monitoring PST - Konfigurasi Laporan
// ==========================================
// Konfigurasi dibaca dari berkas JSON; setiap field punya nilai
// bawaan sehingga berkas parsial maupun tidak ada sama-sama sah
// ==========================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::domain::types::{CenturyPolicy, IdStrategy};

/// Variabel lingkungan untuk menunjuk berkas konfigurasi secara eksplisit
pub const CONFIG_PATH_ENV: &str = "PST_MONITORING_CONFIG";

// ==========================================
// ReportConfig
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Kode kantor pada id transaksi sintetis
    #[serde(default = "default_office_code")]
    pub office_code: String,

    /// Strategi angka 5 digit pada id sintetis
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Perlakuan tahun dua digit saat normalisasi tanggal
    #[serde(default)]
    pub century_policy: CenturyPolicy,

    /// Nama petugas baku untuk seluruh layanan perpustakaan
    #[serde(default = "default_library_officer")]
    pub library_officer: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            office_code: default_office_code(),
            id_strategy: IdStrategy::default(),
            century_policy: CenturyPolicy::default(),
            library_officer: default_library_officer(),
        }
    }
}

impl ReportConfig {
    /// Muat konfigurasi dari berkas JSON
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("gagal membaca konfigurasi: {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("konfigurasi bukan JSON yang sah: {}", path.display()))?;
        Ok(config)
    }

    /// Muat konfigurasi; berkas hilang atau rusak jatuh ke nilai bawaan.
    /// None berarti pakai lokasi bawaan
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(error) => {
                warn!(
                    berkas = %path.display(),
                    galat = %error,
                    "konfigurasi tidak terbaca, memakai nilai bawaan"
                );
                Self::default()
            }
        }
    }
}

fn default_office_code() -> String {
    "BPS-7200".to_string()
}

fn default_library_officer() -> String {
    "Ince Mariyani S.E., M.M.".to_string()
}

/// Lokasi bawaan berkas konfigurasi.
///
/// Urutan: variabel lingkungan PST_MONITORING_CONFIG, lalu direktori
/// konfigurasi pengguna (direktori dev terpisah saat debug), terakhir
/// berkas di direktori kerja
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        #[cfg(debug_assertions)]
        let base = config_dir.join("pst-monitoring-dev");
        #[cfg(not(debug_assertions))]
        let base = config_dir.join("pst-monitoring");

        return base.join("config.json");
    }

    PathBuf::from("./pst_monitoring_config.json")
}

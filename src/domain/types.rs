// ==========================================
// Sistem Monitoring PST - Tipe Domain
// ==========================================
// Kosakata tetap pelayanan statistik terpadu
// Aturan: label harus tampil persis seperti di laporan resmi
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Kategori Layanan (Service Category)
// ==========================================
// Lima kategori tertutup; nilai di luar ini diperlakukan
// sebagai "tidak dikenali" (lihat modul sla_classifier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[serde(rename = "Perpustakaan")]
    Perpustakaan,
    #[serde(rename = "Konsultasi Online")]
    KonsultasiOnline,
    #[serde(rename = "Konsultasi Langsung")]
    KonsultasiLangsung,
    #[serde(rename = "Produk Statistik Berbayar")]
    ProdukStatistikBerbayar,
    #[serde(rename = "Rekomendasi Statistik")]
    RekomendasiStatistik,
}

impl ServiceCategory {
    /// Urutan baku kategori pada laporan monitoring (baris matriks)
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::Perpustakaan,
        ServiceCategory::KonsultasiOnline,
        ServiceCategory::KonsultasiLangsung,
        ServiceCategory::ProdukStatistikBerbayar,
        ServiceCategory::RekomendasiStatistik,
    ];

    /// Label resmi kategori (kolom "Jenis Layanan")
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Perpustakaan => "Perpustakaan",
            ServiceCategory::KonsultasiOnline => "Konsultasi Online",
            ServiceCategory::KonsultasiLangsung => "Konsultasi Langsung",
            ServiceCategory::ProdukStatistikBerbayar => "Produk Statistik Berbayar",
            ServiceCategory::RekomendasiStatistik => "Rekomendasi Statistik",
        }
    }

    /// Parse dari label resmi; label lain → None (bukan error)
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Perpustakaan" => Some(ServiceCategory::Perpustakaan),
            "Konsultasi Online" => Some(ServiceCategory::KonsultasiOnline),
            "Konsultasi Langsung" => Some(ServiceCategory::KonsultasiLangsung),
            "Produk Statistik Berbayar" => Some(ServiceCategory::ProdukStatistikBerbayar),
            "Rekomendasi Statistik" => Some(ServiceCategory::RekomendasiStatistik),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// Capaian (Compliance Verdict)
// ==========================================
// Tiga nilai: sesuai target / tidak sesuai target / belum
// diketahui (string kosong pada laporan)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capaian {
    #[serde(rename = "Sesuai Target")]
    SesuaiTarget,
    #[serde(rename = "Tidak Sesuai Target")]
    TidakSesuaiTarget,
    #[serde(rename = "")]
    BelumDiketahui,
}

impl Capaian {
    /// Label capaian pada kolom laporan ("" untuk belum diketahui)
    pub fn label(&self) -> &'static str {
        match self {
            Capaian::SesuaiTarget => "Sesuai Target",
            Capaian::TidakSesuaiTarget => "Tidak Sesuai Target",
            Capaian::BelumDiketahui => "",
        }
    }

    pub fn is_sesuai(&self) -> bool {
        matches!(self, Capaian::SesuaiTarget)
    }
}

impl fmt::Display for Capaian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// Sumber Data (Source Kind)
// ==========================================
// Tiga sistem sumber yang direkap; tag dipakai pada ID transaksi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceKind {
    Silastik, // transaksi layanan statistik (online / kunjungan)
    Pst,      // kunjungan perpustakaan
    Romantik, // rekomendasi kegiatan statistik
}

impl SourceKind {
    /// Tag sumber pada ID transaksi sintetis
    pub fn tag(&self) -> &'static str {
        match self {
            SourceKind::Silastik => "SILASTIK",
            SourceKind::Pst => "PST",
            SourceKind::Romantik => "ROMANTIK",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// ==========================================
// Strategi ID Transaksi (Id Strategy)
// ==========================================
// CONTENT_HASH: deterministik dari isi record (ekspor ulang idempoten)
// RANDOM: 5 digit acak per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdStrategy {
    #[default]
    ContentHash,
    Random,
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::ContentHash => write!(f, "CONTENT_HASH"),
            IdStrategy::Random => write!(f, "RANDOM"),
        }
    }
}

// ==========================================
// Kebijakan Abad Tahun 2 Digit (Century Policy)
// ==========================================
// ASSUME_TWO_THOUSANDS: "25" → 2025, "99" → 2099
// FIFTY_FIFTY_SPLIT: "25" → 2025, "75" → 1975 (batas di 50)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CenturyPolicy {
    #[default]
    AssumeTwoThousands,
    FiftyFiftySplit,
}

impl CenturyPolicy {
    /// Kembangkan tahun 2 digit menjadi 4 digit sesuai kebijakan
    pub fn expand_year(&self, year: i32) -> i32 {
        if year >= 100 {
            return year;
        }
        match self {
            CenturyPolicy::AssumeTwoThousands => 2000 + year,
            CenturyPolicy::FiftyFiftySplit => {
                if year < 50 {
                    2000 + year
                } else {
                    1900 + year
                }
            }
        }
    }
}

impl fmt::Display for CenturyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CenturyPolicy::AssumeTwoThousands => write!(f, "ASSUME_TWO_THOUSANDS"),
            CenturyPolicy::FiftyFiftySplit => write!(f, "FIFTY_FIFTY_SPLIT"),
        }
    }
}

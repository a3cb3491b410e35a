// ==========================================
// Sistem Monitoring PST - Normalisasi Tanggal
// ==========================================
// Menjinakkan teks tanggal dari tiga scraper yang formatnya
// tidak seragam: "04 Mar 25", "25 Desember 2024", ISO 8601,
// sampai nilai bersufiks " - 14:30:00 WITA"
// ==========================================
// Aturan: fungsi murni tanpa I/O; kegagalan parsing bukan error,
// melainkan hasil NormalizedDate::Invalid yang membawa teks asli
// ==========================================

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::types::CenturyPolicy;

/// Nama bulan Indonesia untuk judul kolom laporan
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

// Tiga huruf pertama nama bulan (huruf kecil); singkatan umum
// scraper ("Mar", "Agu", "Des") jatuh ke tabel yang sama
const MONTH_ABBREVS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "mei", "jun", "jul", "agu", "sep", "okt", "nov", "des",
];

// Template eksplisit, dari yang paling spesifik
const DATETIME_TEMPLATES: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_TEMPLATES: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%Y%m%d"];

// ==========================================
// CanonicalDate - tanggal kanonik
// ==========================================
/// Tanggal yang sudah lolos normalisasi; tampilan selalu DD/MM/YYYY
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Indeks bulan 0..=11 untuk bucket monitoring
    pub fn month0(&self) -> usize {
        (self.0.month() - 1) as usize
    }

    /// Parsing ketat bentuk tampilan DD/MM/YYYY
    pub fn parse_display(text: &str) -> Option<Self> {
        NaiveDate::parse_from_str(text.trim(), "%d/%m/%Y")
            .ok()
            .map(Self)
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d/%m/%Y"))
    }
}

// ==========================================
// NormalizedDate - hasil normalisasi
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedDate {
    /// Input kosong, "-", atau hanya spasi; di hilir menjadi ""
    Empty,
    Valid(CanonicalDate),
    /// Tidak terparse; teks asli disimpan agar bisa ditampilkan apa adanya
    Invalid(String),
}

impl NormalizedDate {
    /// Teks untuk kolom rekap: tanggal kanonik, "" untuk kosong,
    /// atau teks asli bila tidak terparse
    pub fn display(&self) -> String {
        match self {
            NormalizedDate::Empty => String::new(),
            NormalizedDate::Valid(date) => date.to_string(),
            NormalizedDate::Invalid(raw) => raw.clone(),
        }
    }

    pub fn as_date(&self) -> Option<CanonicalDate> {
        match self {
            NormalizedDate::Valid(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NormalizedDate::Empty)
    }
}

// ==========================================
// DateNormalizer - mesin normalisasi
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct DateNormalizer {
    century: CenturyPolicy,
}

impl DateNormalizer {
    pub fn new(century: CenturyPolicy) -> Self {
        Self { century }
    }

    /// Normalisasi satu teks tanggal.
    ///
    /// Urutan prioritas:
    /// 1. kosong / "-" / spasi saja -> Empty
    /// 2. buang sufiks mulai " - " pertama (jejak "HH:mm:ss <zona>")
    /// 3. pindai token "<hari> <nama bulan Indonesia> <tahun 2-4 digit>"
    /// 4. template eksplisit (ISO datetime, RFC 3339, ISO date)
    /// 5. cadangan numerik DD/MM/YYYY, YYYY/MM/DD, YYYYMMDD
    pub fn normalize(&self, raw: &str) -> NormalizedDate {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "-" {
            return NormalizedDate::Empty;
        }

        let cleaned = match trimmed.find(" - ") {
            Some(pos) => trimmed[..pos].trim(),
            None => trimmed,
        };
        if cleaned.is_empty() {
            return NormalizedDate::Empty;
        }

        if let Some(date) = self.scan_day_month_year(cleaned) {
            return NormalizedDate::Valid(CanonicalDate(date));
        }
        if let Some(date) = Self::parse_with_templates(cleaned) {
            return NormalizedDate::Valid(CanonicalDate(date));
        }

        NormalizedDate::Invalid(raw.trim().to_string())
    }

    /// Varian untuk field sumber yang opsional; None diperlakukan kosong
    pub fn normalize_opt(&self, raw: Option<&str>) -> NormalizedDate {
        match raw {
            Some(text) => self.normalize(text),
            None => NormalizedDate::Empty,
        }
    }

    // ===== Pemindaian token hari-bulan-tahun =====
    // Jendela tiga token berurutan: <1-2 digit> <alfabet >=3> <2-4 digit>.
    // Tanda baca tepi token ("2024," atau "(04") diabaikan
    fn scan_day_month_year(&self, text: &str) -> Option<NaiveDate> {
        let tokens: Vec<&str> = text
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
            .collect();

        for window in tokens.windows(3) {
            let day = match parse_digits(window[0], 1, 2) {
                Some(d) => d,
                None => continue,
            };
            let month0 = match month_index(window[1]) {
                Some(m) => m,
                None => continue,
            };
            let raw_year = match parse_digits(window[2], 2, 4) {
                Some(y) => y as i32,
                None => continue,
            };
            let year = self.century.expand_year(raw_year);

            // Tanggal mustahil (31 Feb) tidak digulung ke bulan berikutnya,
            // melainkan dilepas ke jalur template
            if let Some(date) = NaiveDate::from_ymd_opt(year, (month0 + 1) as u32, day) {
                return Some(date);
            }
        }
        None
    }

    // ===== Rantai template eksplisit =====
    fn parse_with_templates(text: &str) -> Option<NaiveDate> {
        for template in DATETIME_TEMPLATES {
            if let Ok(date) = NaiveDate::parse_from_str(text, template) {
                return Some(date);
            }
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
            return Some(datetime.date_naive());
        }
        for template in DATE_TEMPLATES {
            if let Ok(date) = NaiveDate::parse_from_str(text, template) {
                return Some(date);
            }
        }
        None
    }
}

/// Token seluruhnya digit ASCII dengan panjang pada rentang yang diminta
fn parse_digits(token: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if token.len() < min_len || token.len() > max_len {
        return None;
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Indeks bulan dari nama/singkatan Indonesia (tiga huruf pertama)
fn month_index(token: &str) -> Option<usize> {
    if token.len() < 3 || !token.chars().all(|c| c.is_alphabetic()) {
        return None;
    }
    let prefix = token.chars().take(3).collect::<String>().to_lowercase();
    MONTH_ABBREVS.iter().position(|abbrev| *abbrev == prefix)
}

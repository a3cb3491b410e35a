// ==========================================
// Sistem Monitoring PST - Record Rekapitulasi
// ==========================================
// Bentuk baris rekap terpadu, hasil normalisasi tiga sumber
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{Capaian, ServiceCategory};

// ==========================================
// RekapRecord - satu baris rekap
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RekapRecord {
    // ===== Identitas baris =====
    pub no: u32,                                // nomor urut lintas sumber, mulai 1
    pub id_transaksi: String,                   // "BPS-7200-<SUMBER>-<5 digit>"

    // ===== Isi layanan =====
    pub nama_pengguna: String,                  // nama pengguna/penyelenggara; "" bila tak ada
    pub jenis_layanan: Option<ServiceCategory>, // None bila kombinasi layanan tak dikenal
    pub keterangan: String,                     // "Data Mikro"/"Digital"/"Tercetak"/judul kegiatan/""

    // ===== Tanggal (teks tampilan, DD/MM/YYYY bila valid) =====
    pub tanggal_permintaan: String,
    pub tanggal_selesai: String,                // "" bila batal atau belum selesai

    // ===== Penilaian =====
    pub capaian: Capaian,
    pub petugas: String,
}

impl RekapRecord {
    /// Label jenis layanan untuk tampilan; "" bila tak terpetakan
    pub fn jenis_layanan_label(&self) -> &'static str {
        self.jenis_layanan.map(|c| c.label()).unwrap_or("")
    }
}

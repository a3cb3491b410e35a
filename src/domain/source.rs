// ==========================================
// Sistem Monitoring PST - Record Sumber
// ==========================================
// Tiga bentuk record dari sistem sumber (hasil scraper):
// SILASTIK (transaksi layanan), PST (kunjungan perpustakaan),
// ROMANTIK (rekomendasi kegiatan statistik)
// ==========================================
// Aturan: record sumber hanya dibaca, tidak pernah dimutasi.
// Field opsional dinyatakan eksplisit lewat Option (bukan akses
// dinamis); alias serde menampung variasi ejaan keluaran scraper.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// StatisticalTransaction - transaksi SILASTIK
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatisticalTransaction {
    // ===== Identitas =====
    pub transaction_id: Option<String>,   // nomor transaksi sumber
    pub customer_name: Option<String>,    // nama pelanggan

    // ===== Permintaan =====
    pub need_type: Option<String>,        // jenis kebutuhan (teks bebas)
    pub request_date: Option<String>,     // tanggal permintaan (level atas)

    // ===== Status =====
    #[serde(default)]
    pub status: String,                   // teks status, bisa berisi "Batal"/"Selesai: <rating>"
    pub main_operator: Option<String>,    // petugas utama

    // ===== Detail bersarang =====
    #[serde(default)]
    pub detail: TransactionDetail,
}

/// Detail transaksi; semua field bisa kosong tergantung jalur layanan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionDetail {
    pub request_date: Option<String>,            // tanggal permintaan (cadangan level detail)
    pub completion_date: Option<String>,         // tanggal selesai, bisa bersufiks " - HH:mm:ss <zona>"
    pub customer_detail: Option<CustomerDetail>,
    // Scraper lama menulis "online_service_details" (jamak)
    #[serde(alias = "online_service_details")]
    pub online_service_detail: Option<OnlineServiceDetail>,
    pub onsite_visit_detail: Option<OnsiteVisitDetail>,
}

/// Profil pelanggan pada detail transaksi (tidak dipakai agregasi,
/// tetap dibawa karena ikut menentukan hash isi record)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDetail {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_gender: Option<String>,          // format "telepon/jenis kelamin"
    pub age_education: Option<String>,         // format "umur/pendidikan"
    pub unit: Option<String>,
    pub consumer_segmentation: Option<String>,
}

/// Detail jalur layanan online
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnlineServiceDetail {
    pub topic: Option<String>,                 // topik; penentu keterangan "Data Mikro"
    pub consultation_type: Option<String>,
    pub consultation_coverage: Option<String>,
    pub location_status: Option<String>,
    pub request_deadline: Option<String>,
    pub operator: Option<String>,
    pub tag: Option<String>,
}

/// Detail jalur kunjungan langsung
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnsiteVisitDetail {
    pub need_type: Option<String>,             // cadangan jenis kebutuhan
    pub request_date: Option<String>,
    pub operator: Option<String>,
}

// ==========================================
// LibraryVisit - kunjungan perpustakaan (PST)
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryVisit {
    // ===== Identitas pengunjung =====
    pub name: Option<String>,             // nama pengunjung perorangan
    pub lead_group: Option<String>,       // nama ketua untuk kunjungan rombongan
    #[serde(rename = "type")]
    pub visit_type: Option<String>,       // "individu" / "group"

    // ===== Waktu & media =====
    // Scraper lama memakai kunci "visit_date_time"
    #[serde(alias = "visit_date_time")]
    pub visit_datetime: Option<String>,   // waktu kunjungan (layanan dianggap seketika)
    pub service_media: Option<String>,    // "Digilib" / "Tercetak"

    // ===== Profil (ikut hash isi record) =====
    pub gender: Option<String>,
    pub birthyear: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
}

// ==========================================
// StatisticalRecommendation - rekomendasi ROMANTIK
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatisticalRecommendation {
    // ===== Identitas kegiatan =====
    pub transaction_number: Option<String>,
    pub organizer: Option<String>,        // penyelenggara kegiatan
    pub activity_title: Option<String>,   // judul kegiatan (dipotong 50 karakter di rekap)

    // ===== Alur proses =====
    pub submission_date: Option<String>,  // tanggal pengajuan
    pub completion_date: Option<String>,  // tanggal selesai (bisa kosong)
    pub processed_by: Option<String>,     // pemroses; "-" bila kosong di rekap
    pub submitted_by: Option<String>,
    pub commitment_letter: Option<String>,
}

// ==========================================
// SourceCollections - bundel tiga koleksi sumber
// ==========================================
// Koleksi yang tidak tersedia cukup dibiarkan kosong;
// agregator tidak membedakan "tidak ada" dan "kosong"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceCollections {
    #[serde(default)]
    pub transactions: Vec<StatisticalTransaction>,
    #[serde(default)]
    pub library_visits: Vec<LibraryVisit>,
    #[serde(default)]
    pub recommendations: Vec<StatisticalRecommendation>,
}

impl SourceCollections {
    /// Jumlah seluruh record sumber
    pub fn len(&self) -> usize {
        self.transactions.len() + self.library_visits.len() + self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

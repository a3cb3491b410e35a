// ==========================================
// Sistem Monitoring PST - Agregator Rekapitulasi
// ==========================================
// Menyatukan tiga koleksi sumber menjadi daftar record rekap:
// transaksi SILASTIK, kunjungan perpustakaan PST, lalu
// rekomendasi ROMANTIK, dengan satu penomoran berjalan.
// Record cacat tidak menggagalkan agregasi; field-nya
// terdegradasi menjadi string kosong
// ==========================================

use tracing::{debug, info, warn};

use crate::config::report_config::ReportConfig;
use crate::domain::recap::RekapRecord;
use crate::domain::source::{
    LibraryVisit, SourceCollections, StatisticalRecommendation, StatisticalTransaction,
};
use crate::domain::types::{Capaian, ServiceCategory, SourceKind};
use crate::engine::date_normalizer::{DateNormalizer, NormalizedDate};
use crate::engine::sla_classifier::classify;
use crate::engine::transaction_id::TransactionIdGenerator;

/// Panjang maksimum keterangan judul kegiatan sebelum dipotong
const ACTIVITY_TITLE_LIMIT: usize = 50;

// ==========================================
// RecapAggregator
// ==========================================
#[derive(Debug, Clone)]
pub struct RecapAggregator {
    normalizer: DateNormalizer,
    id_generator: TransactionIdGenerator,
    library_officer: String,
}

impl RecapAggregator {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            normalizer: DateNormalizer::new(config.century_policy),
            id_generator: TransactionIdGenerator::new(&config.office_code, config.id_strategy),
            library_officer: config.library_officer.clone(),
        }
    }

    /// Bangun daftar rekap terpadu.
    ///
    /// Urutan keluaran: seluruh transaksi, lalu seluruh kunjungan,
    /// lalu seluruh rekomendasi, masing-masing menurut urutan sumber,
    /// dengan nomor urut 1-based yang dibagi ketiga kelompok
    pub fn aggregate(&self, sources: &SourceCollections) -> Vec<RekapRecord> {
        debug!(
            transaksi = sources.transactions.len(),
            kunjungan = sources.library_visits.len(),
            rekomendasi = sources.recommendations.len(),
            "mulai agregasi rekap"
        );

        let mut records = Vec::with_capacity(sources.len());
        let mut counter = 1u32;

        for transaction in &sources.transactions {
            records.push(self.map_transaction(counter, transaction));
            counter += 1;
        }
        for visit in &sources.library_visits {
            records.push(self.map_library_visit(counter, visit));
            counter += 1;
        }
        for recommendation in &sources.recommendations {
            records.push(self.map_recommendation(counter, recommendation));
            counter += 1;
        }

        info!(total = records.len(), "agregasi rekap selesai");
        records
    }

    // ===== SILASTIK: transaksi layanan statistik =====
    fn map_transaction(&self, no: u32, transaction: &StatisticalTransaction) -> RekapRecord {
        // Field level atas menang; string kosong dianggap tidak ada
        let need_type = non_empty(transaction.need_type.as_deref()).or_else(|| {
            transaction
                .detail
                .onsite_visit_detail
                .as_ref()
                .and_then(|d| non_empty(d.need_type.as_deref()))
        });
        let category = map_service_category(need_type);

        let topic = transaction
            .detail
            .online_service_detail
            .as_ref()
            .and_then(|d| d.topic.as_deref())
            .unwrap_or("");
        let keterangan = if topic.contains("Data Mikro") {
            "Data Mikro".to_string()
        } else {
            String::new()
        };

        let request_raw = non_empty(transaction.request_date.as_deref())
            .or_else(|| non_empty(transaction.detail.request_date.as_deref()));
        let request = self.normalize_logged(no, "tanggal_permintaan", request_raw);
        let completion =
            self.normalize_logged(no, "tanggal_selesai", transaction.detail.completion_date.as_deref());

        let cancelled = transaction.status.to_lowercase().contains("batal");
        let request_display = request.display();
        let completion_display = completion.display();

        // Transaksi batal selalu tidak sesuai target, apa pun tanggalnya
        let (tanggal_selesai, capaian) = if cancelled {
            (String::new(), Capaian::TidakSesuaiTarget)
        } else {
            let capaian = classify(category, &request_display, &completion_display);
            (completion_display, capaian)
        };

        RekapRecord {
            no,
            id_transaksi: self.id_generator.generate(SourceKind::Silastik, transaction),
            nama_pengguna: transaction.customer_name.clone().unwrap_or_default(),
            jenis_layanan: category,
            keterangan,
            tanggal_permintaan: request_display,
            tanggal_selesai,
            capaian,
            petugas: transaction.main_operator.clone().unwrap_or_default(),
        }
    }

    // ===== PST: kunjungan perpustakaan =====
    fn map_library_visit(&self, no: u32, visit: &LibraryVisit) -> RekapRecord {
        // Layanan perpustakaan dianggap seketika: waktu kunjungan
        // menjadi tanggal permintaan sekaligus tanggal selesai
        let visit_date = self.normalize_logged(no, "waktu_kunjungan", visit.visit_datetime.as_deref());
        let display = visit_date.display();

        let digital = visit.service_media.as_deref() == Some("Digilib")
            || visit.visit_type.as_deref() == Some("group");
        let keterangan = if digital { "Digital" } else { "Tercetak" };

        let nama = non_empty(visit.name.as_deref())
            .or_else(|| non_empty(visit.lead_group.as_deref()))
            .unwrap_or("");

        RekapRecord {
            no,
            id_transaksi: self.id_generator.generate(SourceKind::Pst, visit),
            nama_pengguna: nama.to_string(),
            jenis_layanan: Some(ServiceCategory::Perpustakaan),
            keterangan: keterangan.to_string(),
            tanggal_permintaan: display.clone(),
            tanggal_selesai: display.clone(),
            capaian: classify(Some(ServiceCategory::Perpustakaan), &display, &display),
            petugas: self.library_officer.clone(),
        }
    }

    // ===== ROMANTIK: rekomendasi kegiatan statistik =====
    fn map_recommendation(&self, no: u32, recommendation: &StatisticalRecommendation) -> RekapRecord {
        let request = self.normalize_logged(
            no,
            "tanggal_pengajuan",
            recommendation.submission_date.as_deref(),
        );
        let completion = self.normalize_logged(
            no,
            "tanggal_selesai",
            recommendation.completion_date.as_deref(),
        );
        let request_display = request.display();
        let completion_display = completion.display();

        let keterangan = recommendation
            .activity_title
            .as_deref()
            .map(truncate_title)
            .unwrap_or_default();

        let petugas = non_empty(recommendation.processed_by.as_deref())
            .unwrap_or("-")
            .to_string();

        RekapRecord {
            no,
            id_transaksi: self
                .id_generator
                .generate(SourceKind::Romantik, recommendation),
            nama_pengguna: recommendation.organizer.clone().unwrap_or_default(),
            jenis_layanan: Some(ServiceCategory::RekomendasiStatistik),
            keterangan,
            tanggal_permintaan: request_display.clone(),
            tanggal_selesai: completion_display.clone(),
            capaian: classify(
                Some(ServiceCategory::RekomendasiStatistik),
                &request_display,
                &completion_display,
            ),
            petugas,
        }
    }

    fn normalize_logged(&self, no: u32, field: &str, raw: Option<&str>) -> NormalizedDate {
        let normalized = self.normalizer.normalize_opt(raw);
        if let NormalizedDate::Invalid(text) = &normalized {
            warn!(no, field, teks = %text, "tanggal tidak terparse, dibawa apa adanya");
        }
        normalized
    }
}

/// Pemetaan jenis kebutuhan teks bebas ke kategori layanan.
/// Kombinasi yang tidak dikenal menghasilkan None, bukan error
pub fn map_service_category(need_type: Option<&str>) -> Option<ServiceCategory> {
    let need_type = need_type?;
    if need_type.contains("Kunjungan langsung") {
        return Some(if need_type.contains("Permintaan Data") {
            ServiceCategory::ProdukStatistikBerbayar
        } else {
            ServiceCategory::KonsultasiLangsung
        });
    }
    if need_type.contains("Layanan Online") {
        return Some(if need_type.contains("Permintaan Data") {
            ServiceCategory::ProdukStatistikBerbayar
        } else {
            ServiceCategory::KonsultasiOnline
        });
    }
    None
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Potong judul kegiatan ke 50 karakter, beri elipsis bila terpotong
fn truncate_title(title: &str) -> String {
    let mut truncated: String = title.chars().take(ACTIVITY_TITLE_LIMIT).collect();
    if title.chars().count() > ACTIVITY_TITLE_LIMIT {
        truncated.push_str("...");
    }
    truncated
}

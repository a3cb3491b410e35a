// ==========================================
// Sistem Monitoring PST - Klasifikasi Capaian SLA
// ==========================================
// Tabel ambang baku mutu layanan per kategori. Aturan bisnis
// tetap; mengubah angka di sini berarti mengubah SLA kantor
// ==========================================

use crate::domain::types::{Capaian, ServiceCategory};
use crate::engine::business_calendar::{calendar_day_difference, count_business_days};
use crate::engine::date_normalizer::CanonicalDate;

/// Ambang hari kerja per kategori; None berarti kategori memakai
/// aturan selesai di hari kalender yang sama
pub fn business_day_limit(category: ServiceCategory) -> Option<u32> {
    match category {
        ServiceCategory::Perpustakaan => None,
        ServiceCategory::RekomendasiStatistik => Some(14),
        ServiceCategory::KonsultasiOnline => Some(3),
        ServiceCategory::KonsultasiLangsung => Some(1),
        ServiceCategory::ProdukStatistikBerbayar => Some(10),
    }
}

/// Nilai capaian untuk satu record rekap.
///
/// Kategori kosong, tanggal kosong, atau tanggal yang gagal diparse
/// menghasilkan Capaian::BelumDiketahui, bukan error; konsumen tetap
/// bisa membedakan "dinilai tidak patuh" dari "tidak bisa dinilai"
pub fn classify(
    category: Option<ServiceCategory>,
    request_date: &str,
    completion_date: &str,
) -> Capaian {
    let category = match category {
        Some(c) => c,
        None => return Capaian::BelumDiketahui,
    };
    if request_date.trim().is_empty() || completion_date.trim().is_empty() {
        return Capaian::BelumDiketahui;
    }

    // Di titik ini tanggal seharusnya sudah kanonik DD/MM/YYYY;
    // bentuk lain dianggap tidak ternilai
    let start = match CanonicalDate::parse_display(request_date) {
        Some(d) => d,
        None => return Capaian::BelumDiketahui,
    };
    let end = match CanonicalDate::parse_display(completion_date) {
        Some(d) => d,
        None => return Capaian::BelumDiketahui,
    };

    let compliant = match business_day_limit(category) {
        None => calendar_day_difference(start, end) == 0,
        Some(limit) => count_business_days(start, end) <= limit,
    };

    if compliant {
        Capaian::SesuaiTarget
    } else {
        Capaian::TidakSesuaiTarget
    }
}

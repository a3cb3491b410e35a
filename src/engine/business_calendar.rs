// ==========================================
// Sistem Monitoring PST - Kalender Hari Kerja
// ==========================================
// Hitungan hari kerja (Senin-Jumat) untuk penilaian SLA.
// Hari libur nasional tidak diperhitungkan; akhir pekan saja
// ==========================================

use chrono::{Datelike, Weekday};

use crate::engine::date_normalizer::CanonicalDate;

/// Jumlah hari kerja pada rentang [start, end], kedua ujung ikut dihitung.
///
/// Kontrak pemanggil: start <= end. Rentang terbalik menghasilkan 0,
/// bukan nilai negatif, supaya pembanding ambang SLA tetap aman
pub fn count_business_days(start: CanonicalDate, end: CanonicalDate) -> u32 {
    if end.date() < start.date() {
        return 0;
    }

    let mut count = 0;
    let mut current = start.date();
    while current <= end.date() {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    count
}

/// Selisih hari kalender end - start; negatif bila rentang terbalik.
/// Dipakai aturan "selesai di hari yang sama" layanan perpustakaan
pub fn calendar_day_difference(start: CanonicalDate, end: CanonicalDate) -> i64 {
    (end.date() - start.date()).num_days()
}

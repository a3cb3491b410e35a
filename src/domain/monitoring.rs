// ==========================================
// Sistem Monitoring PST - Bucket Monitoring
// ==========================================
// Akumulator kepatuhan per (kategori layanan x bulan kalender)
// untuk satu tahun laporan. Matriks monitoring dibangun dari
// bucket ini; dua mode keluaran wajib memakai satu lintasan
// bucket yang sama agar isinya identik
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::ServiceCategory;

// ==========================================
// MonitoringBucket - akumulator satu kategori
// ==========================================
// Indeks 0..=11 adalah bulan Januari..Desember.
// Invarian: fulfilled[m] <= total[m] untuk setiap m
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringBucket {
    pub fulfilled: [u32; 12], // jumlah record "Sesuai Target"
    pub total: [u32; 12],     // jumlah seluruh record kategori ini
}

impl MonitoringBucket {
    /// Catat satu record pada bulan `month_index` (0..=11)
    pub fn record(&mut self, month_index: usize, sesuai: bool) {
        debug_assert!(month_index < 12);
        self.total[month_index] += 1;
        if sesuai {
            self.fulfilled[month_index] += 1;
        }
    }

    /// Jumlah record setahun untuk kategori ini
    pub fn year_total(&self) -> u32 {
        self.total.iter().sum()
    }
}

// ==========================================
// MonitoringBuckets - lima bucket kategori tetap
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringBuckets {
    buckets: [MonitoringBucket; 5], // urutan mengikuti ServiceCategory::ALL
}

impl MonitoringBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(category: ServiceCategory) -> usize {
        ServiceCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0)
    }

    pub fn bucket(&self, category: ServiceCategory) -> &MonitoringBucket {
        &self.buckets[Self::index_of(category)]
    }

    pub fn bucket_mut(&mut self, category: ServiceCategory) -> &mut MonitoringBucket {
        &mut self.buckets[Self::index_of(category)]
    }

    /// Iterasi dalam urutan baris matriks
    pub fn iter(&self) -> impl Iterator<Item = (ServiceCategory, &MonitoringBucket)> {
        ServiceCategory::ALL
            .iter()
            .map(move |c| (*c, self.bucket(*c)))
    }
}

// ==========================================
// MatrixRowLabels - teks baris indikator per kategori
// ==========================================
#[derive(Debug, Clone)]
pub struct MatrixRowLabels {
    pub indicator: String,   // judul baris indikator (baris berformula)
    pub numerator: String,   // label baris pembilang
    pub denominator: String, // label baris penyebut
}

impl MatrixRowLabels {
    pub fn for_category(category: ServiceCategory) -> Self {
        let label = category.label();
        Self {
            indicator: format!("Persentase layanan {} yang sesuai target", label),
            numerator: format!("Jumlah layanan {} sesuai target", label),
            denominator: format!("Jumlah seluruh layanan {}", label),
        }
    }
}

/// Nilai target baris indikator (persen)
pub const INDICATOR_TARGET: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_record_keeps_fulfilled_within_total() {
        let mut bucket = MonitoringBucket::default();
        bucket.record(0, true);
        bucket.record(0, false);
        bucket.record(11, true);

        assert_eq!(bucket.total[0], 2);
        assert_eq!(bucket.fulfilled[0], 1);
        assert_eq!(bucket.total[11], 1);
        assert_eq!(bucket.fulfilled[11], 1);
        for m in 0..12 {
            assert!(bucket.fulfilled[m] <= bucket.total[m]);
        }
        assert_eq!(bucket.year_total(), 3);
    }

    #[test]
    fn test_buckets_iterate_in_fixed_category_order() {
        let buckets = MonitoringBuckets::new();
        let urutan: Vec<ServiceCategory> = buckets.iter().map(|(c, _)| c).collect();
        assert_eq!(urutan, ServiceCategory::ALL.to_vec());
    }

    #[test]
    fn test_row_labels_embed_category_name() {
        let labels = MatrixRowLabels::for_category(ServiceCategory::Perpustakaan);
        assert!(labels.indicator.contains("Perpustakaan"));
        assert!(labels.numerator.contains("sesuai target"));
        assert!(labels.denominator.contains("seluruh"));
    }
}

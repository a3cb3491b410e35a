// ==========================================
// Pembangkit Data Contoh
// ==========================================
// Kegunaan: membuat dataset JSON contoh untuk uji coba manual
// Keluaran: tests/fixtures/datasets/*.json
// ==========================================

use serde_json::json;
use std::error::Error;
use std::fs;

use pst_monitoring::domain::source::{
    LibraryVisit, OnlineServiceDetail, StatisticalRecommendation, StatisticalTransaction,
    TransactionDetail,
};

const OUTPUT_DIR: &str = "tests/fixtures/datasets";

const CUSTOMERS: &[&str] = &[
    "Budi Santoso",
    "Siti Rahma",
    "Andi Saputra",
    "Dewi Lestari",
    "CV Sumber Data",
    "PT Karya Statistik",
];

const OPERATORS: &[&str] = &["Andi Wijaya", "Rahmat Hidayat", "Nur Aisyah"];

const NEED_TYPES: &[&str] = &[
    "Layanan Online - Konsultasi Statistik",
    "Layanan Online - Permintaan Data",
    "Kunjungan langsung - Konsultasi",
    "Kunjungan langsung - Permintaan Data",
];

const ORGANIZERS: &[&str] = &[
    "Dinas Pendidikan Sulawesi Tengah",
    "BAPPEDA Kota Palu",
    "Dinas Kesehatan Kota Palu",
    "Universitas Tadulako",
];

const ACTIVITY_TITLES: &[&str] = &[
    "Pendataan UMKM",
    "Survei Kepuasan Masyarakat terhadap Pelayanan Publik Kota Palu Tahun 2025",
    "Kajian Indeks Pembangunan Manusia",
    "Pendataan Potensi Desa dan Kelurahan se-Provinsi Sulawesi Tengah",
];

const MONTH_LONG: &[&str] = &[
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

// Hari dan bulan deterministik supaya dataset stabil antar-jalankan
fn sample_day_month(index: usize) -> (usize, usize) {
    (1 + (index * 3) % 26, 1 + index % 12)
}

// Format tanggal bergiliran meniru variasi keluaran scraper
fn formatted_date(index: usize, day: usize, month: usize) -> String {
    match index % 4 {
        0 => format!("{:02}/{:02}/2025", day, month),
        1 => format!("2025-{:02}-{:02} 09:{:02}:00", month, day, index % 60),
        2 => format!("{} {} 2025", day, MONTH_LONG[month - 1]),
        _ => format!("2025-{:02}-{:02}", month, day),
    }
}

fn sample_transaction(index: usize) -> StatisticalTransaction {
    let (day, month) = sample_day_month(index);
    let completion_day = (day + 2 + index % 10).min(28);
    let need_type = NEED_TYPES[index % NEED_TYPES.len()];

    let online_detail = if need_type.starts_with("Layanan Online") {
        Some(OnlineServiceDetail {
            topic: Some(if index % 5 == 0 {
                format!("Permintaan Data Mikro Susenas {}", 2020 + index % 6)
            } else {
                "Publikasi Daerah Dalam Angka".to_string()
            }),
            operator: Some(OPERATORS[index % OPERATORS.len()].to_string()),
            ..OnlineServiceDetail::default()
        })
    } else {
        None
    };

    StatisticalTransaction {
        transaction_id: Some(format!("SIL-{:05}", index + 1)),
        customer_name: Some(CUSTOMERS[index % CUSTOMERS.len()].to_string()),
        need_type: Some(need_type.to_string()),
        request_date: Some(formatted_date(index, day, month)),
        status: format!("Selesai: {}", 1 + index % 5),
        main_operator: Some(OPERATORS[index % OPERATORS.len()].to_string()),
        detail: TransactionDetail {
            completion_date: Some(formatted_date(index + 1, completion_day, month)),
            online_service_detail: online_detail,
            ..TransactionDetail::default()
        },
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("mulai membuat dataset contoh...");

    fs::create_dir_all(OUTPUT_DIR)?;

    generate_silastik_normal()?;
    generate_silastik_bermasalah()?;
    generate_pst_kunjungan()?;
    generate_romantik()?;
    generate_respons_terbungkus()?;

    println!("✓ seluruh dataset contoh selesai dibuat");
    Ok(())
}

fn generate_silastik_normal() -> Result<(), Box<dyn Error>> {
    let transactions: Vec<StatisticalTransaction> = (0..40).map(sample_transaction).collect();

    let path = format!("{}/01_silastik_normal.json", OUTPUT_DIR);
    fs::write(&path, serde_json::to_string_pretty(&transactions)?)?;
    println!("✓ membuat 01_silastik_normal.json (40 record)");
    Ok(())
}

fn generate_silastik_bermasalah() -> Result<(), Box<dyn Error>> {
    let mut records = Vec::new();

    // Transaksi batal
    let mut cancelled = sample_transaction(100);
    cancelled.status = "Batal oleh pemohon".to_string();
    records.push(cancelled);

    // Tanggal placeholder "-" dan string kosong
    let mut dashed = sample_transaction(101);
    dashed.request_date = Some("-".to_string());
    dashed.detail.completion_date = Some(String::new());
    records.push(dashed);

    // Tanggal mustahil di kalender
    let mut impossible = sample_transaction(102);
    impossible.request_date = Some("31/02/2025".to_string());
    records.push(impossible);

    // Teks bebas yang bukan tanggal
    let mut freetext = sample_transaction(103);
    freetext.detail.completion_date = Some("secepatnya".to_string());
    records.push(freetext);

    // Tahun dua digit
    let mut short_year = sample_transaction(104);
    short_year.request_date = Some("05/01/25".to_string());
    records.push(short_year);

    // Sufiks jam dan zona di belakang tanggal
    let mut suffixed = sample_transaction(105);
    suffixed.detail.completion_date = Some("10/01/2025 - 14:30:22 WITA".to_string());
    records.push(suffixed);

    // Field identitas hilang
    let mut anonymous = sample_transaction(106);
    anonymous.customer_name = None;
    anonymous.main_operator = None;
    records.push(anonymous);

    // Jenis kebutuhan di luar pemetaan kategori
    let mut unmapped = sample_transaction(107);
    unmapped.need_type = Some("Magang dan penelitian".to_string());
    records.push(unmapped);

    let path = format!("{}/02_silastik_bermasalah.json", OUTPUT_DIR);
    fs::write(&path, serde_json::to_string_pretty(&records)?)?;
    println!("✓ membuat 02_silastik_bermasalah.json ({} record)", records.len());
    Ok(())
}

fn generate_pst_kunjungan() -> Result<(), Box<dyn Error>> {
    let visits: Vec<LibraryVisit> = (0..30)
        .map(|index| {
            let (day, month) = sample_day_month(index);
            let group = index % 4 == 3;
            let visit_type = if group { "group" } else { "individu" };
            let media = if index % 3 == 0 { "Digilib" } else { "Tercetak" };
            let gender = if index % 2 == 0 { "P" } else { "L" };

            LibraryVisit {
                name: if group {
                    None
                } else {
                    Some(CUSTOMERS[index % CUSTOMERS.len()].to_string())
                },
                lead_group: if group {
                    Some(format!("SMA Negeri {} Palu", 1 + index % 9))
                } else {
                    None
                },
                visit_type: Some(visit_type.to_string()),
                visit_datetime: Some(format!(
                    "2025-{:02}-{:02} {:02}:15:00",
                    month,
                    day,
                    8 + index % 8
                )),
                service_media: Some(media.to_string()),
                gender: Some(gender.to_string()),
                birthyear: Some(format!("{}", 1980 + index % 25)),
                education: Some("S1".to_string()),
                occupation: Some("Mahasiswa".to_string()),
            }
        })
        .collect();

    let path = format!("{}/03_pst_kunjungan.json", OUTPUT_DIR);
    fs::write(&path, serde_json::to_string_pretty(&visits)?)?;
    println!("✓ membuat 03_pst_kunjungan.json (30 record)");
    Ok(())
}

fn generate_romantik() -> Result<(), Box<dyn Error>> {
    let recommendations: Vec<StatisticalRecommendation> = (0..15)
        .map(|index| {
            let (day, month) = sample_day_month(index);
            let completion_day = (day + 5 + index % 15).min(28);

            StatisticalRecommendation {
                transaction_number: Some(format!("ROM-{:04}", index + 1)),
                organizer: Some(ORGANIZERS[index % ORGANIZERS.len()].to_string()),
                activity_title: Some(ACTIVITY_TITLES[index % ACTIVITY_TITLES.len()].to_string()),
                submission_date: Some(formatted_date(index, day, month)),
                // Tiap record kelima belum selesai diproses
                completion_date: if index % 5 == 4 {
                    Some(String::new())
                } else {
                    Some(formatted_date(index, completion_day, month))
                },
                processed_by: if index % 4 == 3 {
                    None
                } else {
                    Some(OPERATORS[index % OPERATORS.len()].to_string())
                },
                submitted_by: Some(CUSTOMERS[index % CUSTOMERS.len()].to_string()),
                commitment_letter: Some(format!("SK-{:04}/2025", index + 1)),
            }
        })
        .collect();

    let path = format!("{}/04_romantik_rekomendasi.json", OUTPUT_DIR);
    fs::write(&path, serde_json::to_string_pretty(&recommendations)?)?;
    println!("✓ membuat 04_romantik_rekomendasi.json (15 record)");
    Ok(())
}

fn generate_respons_terbungkus() -> Result<(), Box<dyn Error>> {
    let transactions: Vec<StatisticalTransaction> =
        (200..205).map(sample_transaction).collect();
    let total = transactions.len();

    let wrapped = json!({
        "data": transactions,
        "total": total,
        "page": 1,
    });

    let path = format!("{}/05_respons_terbungkus.json", OUTPUT_DIR);
    fs::write(&path, serde_json::to_string_pretty(&wrapped)?)?;
    println!("✓ membuat 05_respons_terbungkus.json (5 record terbungkus)");
    Ok(())
}

// Alat baris perintah rekapitulasi & monitoring SLA PST.
//
// Pemakaian:
//   pst-monitoring <tahun> [--silastik FILE] [--pst FILE] [--romantik FILE]
//                  [--config FILE] [--out DIR]
//
// Berkas sumber adalah JSON hasil scraper; koleksi yang tidak
// diberikan dianggap kosong. Keluaran: rekap.csv, buku kerja
// monitoring (JSON), dan muatan matriks untuk util ekspor generik.

use std::path::PathBuf;
use tracing::info;

use pst_monitoring::config::ReportConfig;
use pst_monitoring::engine::RecapAggregator;
use pst_monitoring::export::{write_payload_json, write_recap_csv, write_workbook_json, SheetPayload};
use pst_monitoring::importer::SourceLoader;
use pst_monitoring::logging;
use pst_monitoring::report::{MonitoringMatrixBuilder, RecapWorkbookBuilder};
use pst_monitoring::{APP_NAME, VERSION};

fn print_usage() {
    println!(
        "Pemakaian: pst-monitoring <tahun> [--silastik FILE] [--pst FILE] \
         [--romantik FILE] [--config FILE] [--out DIR]"
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut year: Option<i32> = None;
    let mut silastik: Option<PathBuf> = None;
    let mut pst: Option<PathBuf> = None;
    let mut romantik: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut out_dir = PathBuf::from(".");

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--silastik" => {
                silastik = Some(PathBuf::from(args.next().ok_or("--silastik butuh nilai")?))
            }
            "--pst" => pst = Some(PathBuf::from(args.next().ok_or("--pst butuh nilai")?)),
            "--romantik" => {
                romantik = Some(PathBuf::from(args.next().ok_or("--romantik butuh nilai")?))
            }
            "--config" => {
                config_path = Some(PathBuf::from(args.next().ok_or("--config butuh nilai")?))
            }
            "--out" => out_dir = PathBuf::from(args.next().ok_or("--out butuh nilai")?),
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                if year.is_some() {
                    return Err(format!("argumen tidak dikenal: {}", other).into());
                }
                year = Some(
                    other
                        .parse()
                        .map_err(|_| format!("tahun tidak sah: {}", other))?,
                );
            }
        }
    }

    let year = match year {
        Some(y) => y,
        None => {
            print_usage();
            return Err("tahun laporan wajib diisi".into());
        }
    };

    info!(aplikasi = APP_NAME, versi = VERSION, tahun = year, "mulai");

    let config = ReportConfig::load_or_default(config_path.as_deref());
    let sources = SourceLoader::load_collections(
        silastik.as_deref(),
        pst.as_deref(),
        romantik.as_deref(),
    )?;

    let records = RecapAggregator::new(&config).aggregate(&sources);

    // Mode buku kerja penuh dan mode matriks-saja memakai lintasan
    // bucket yang sama; keduanya ditulis untuk konsumen berbeda
    let workbook = RecapWorkbookBuilder::build(&records, year)?;
    let matrix = MonitoringMatrixBuilder::build(&records, year)?;
    let matrix_payload = SheetPayload::from_sheet(
        &matrix.to_sheet(RecapWorkbookBuilder::MATRIX_SHEET_NAME),
    );

    std::fs::create_dir_all(&out_dir)?;
    let csv_path = out_dir.join("rekap.csv");
    write_recap_csv(&records, &csv_path)?;

    let workbook_path = out_dir.join(format!("buku_kerja_{}.json", year));
    write_workbook_json(&workbook, &workbook_path)?;

    let payload_path = out_dir.join(format!("matriks_{}.json", year));
    write_payload_json(&matrix_payload, &payload_path)?;

    println!("record={}", records.len());
    println!("rekap_csv={}", csv_path.display());
    println!("buku_kerja={}", workbook_path.display());
    println!("matriks={}", payload_path.display());
    Ok(())
}

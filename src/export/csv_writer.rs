// ==========================================
// Sistem Monitoring PST - Penulis CSV Rekap
// ==========================================
// Ekspor datar seluruh record rekap dengan kepala kolom tampilan,
// satu baris per record, urutan kolom sama dengan lembar "Rekap"
// ==========================================

use std::path::Path;
use tracing::info;

use crate::domain::recap::RekapRecord;
use crate::export::ExportResult;
use crate::report::workbook::RECAP_HEADERS;

/// Susun isi CSV rekap sebagai string
pub fn recap_csv_string(records: &[RekapRecord]) -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(RECAP_HEADERS)?;

    for record in records {
        writer.write_record(&[
            record.no.to_string(),
            record.id_transaksi.clone(),
            record.nama_pengguna.clone(),
            record.jenis_layanan_label().to_string(),
            record.keterangan.clone(),
            record.tanggal_permintaan.clone(),
            record.tanggal_selesai.clone(),
            record.capaian.label().to_string(),
            record.petugas.clone(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::export::ExportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| crate::export::ExportError::Csv(e.to_string()))
}

/// Tulis CSV rekap ke berkas
pub fn write_recap_csv(records: &[RekapRecord], path: &Path) -> ExportResult<()> {
    let content = recap_csv_string(records)?;
    std::fs::write(path, content)?;
    info!(berkas = %path.display(), record = records.len(), "CSV rekap tertulis");
    Ok(())
}

// ==========================================
// Sistem Monitoring PST - Primitif Lembar Kerja
// ==========================================
// Model sel/lembar netral-format untuk diserahkan ke kolaborator
// penulis spreadsheet: nilai sel, petunjuk format tampilan,
// rentang gabung, lebar kolom, dan panel beku.
// Tidak ada pengetahuan format berkas (xlsx dsb.) di sini
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CellValue - isi satu sel
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    /// Teks formula apa adanya, termasuk tanda "=" di depan
    Formula(String),
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

/// Petunjuk format tampilan untuk penulis spreadsheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumberFormatHint {
    #[default]
    General,
    Integer,
    Percent {
        decimals: u8,
    },
}

// ==========================================
// SheetCell - sel beserta petunjuk formatnya
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SheetCell {
    pub value: CellValue,
    pub format: NumberFormatHint,
}

impl SheetCell {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            value: CellValue::Text(text.into()),
            format: NumberFormatHint::General,
        }
    }

    pub fn integer(value: u32) -> Self {
        Self {
            value: CellValue::Number(value as f64),
            format: NumberFormatHint::Integer,
        }
    }

    pub fn percent_formula(source: impl Into<String>) -> Self {
        Self {
            value: CellValue::Formula(source.into()),
            format: NumberFormatHint::Percent { decimals: 0 },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == CellValue::Empty
    }

    /// Nilai mentah untuk pratinjau/pengujian; formula tampil apa adanya
    pub fn raw_display(&self) -> String {
        match &self.value {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.clone(),
            CellValue::Number(number) => {
                if number.fract() == 0.0 {
                    format!("{}", *number as i64)
                } else {
                    format!("{:.2}", number)
                }
            }
            CellValue::Formula(source) => source.clone(),
        }
    }
}

// ==========================================
// Metadata tata letak
// ==========================================
/// Rentang sel gabungan, inklusif kedua ujung, indeks 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRange {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

/// Lebar satu kolom dalam satuan karakter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnWidth {
    pub column: usize,
    pub width: f32,
}

/// Panel beku: `rows` baris teratas dan `cols` kolom terkiri
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FreezePane {
    pub rows: usize,
    pub cols: usize,
}

// ==========================================
// Sheet - satu lembar lengkap dengan metadata
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<SheetCell>>,
    pub merges: Vec<MergeRange>,
    pub column_widths: Vec<ColumnWidth>,
    pub freeze: Option<FreezePane>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn push_row(&mut self, row: Vec<SheetCell>) {
        self.rows.push(row);
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&SheetCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

// ==========================================
// RecapWorkbook - kumpulan lembar siap tulis
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecapWorkbook {
    pub sheets: Vec<Sheet>,
}

impl RecapWorkbook {
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Nama kolom gaya A1 dari indeks 0-based: 0 -> "A", 25 -> "Z", 26 -> "AA"
pub fn column_letter(index: usize) -> String {
    let mut remaining = index;
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (remaining % 26) as u8);
        if remaining < 26 {
            break;
        }
        remaining = remaining / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

//! Generator for BAST (Berita Acara Serah Terima).
//!
//! Builds the handover certificate confirming a mitra's completed work was
//! received: red-highlighted document number, spelled-out signing date,
//! roman-numeral party paragraphs, a considerations table referencing the
//! team decree (SK), the volume-by-unit handover sentence, and a two-column
//! signature block.

use serde::{Deserialize, Serialize};

use crate::doc::builder::{
    cell, cell_paragraphs, empty_line, para, para_bold, para_runs, row, table, text_run,
};
use crate::doc::{
    Alignment, Block, Document, Highlight, Indent, Paragraph, Run, Section, Table, TableRow,
};
use crate::text::{kalimat_tanggal, parse_tanggal, tanggal_pendek};

use super::common::{footer_nomor_halaman, halaman_baku, nama_berkas};
use super::spk::MitraInfo;
use super::traits::{Generator, Validator};
use super::validation::{validate_bulan, validate_required, validate_tanggal, ValidationErrors};
use super::{GeneratedDocument, GeneratorError};

/// Body text size for BAST prose.
const UKURAN_TEKS: u8 = 12;
const UKURAN_JUDUL: u8 = 16;

/// Aggregated handed-over quantity per unit of measure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VolumeSatuan {
    pub satuan: String,
    pub total: u64,
}

/// Request untuk membuat satu BAST.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BastRequest {
    pub nomor: String,
    /// Project name the handover belongs to.
    pub kegiatan: String,
    pub bulan: u32,
    pub tahun: i32,
    pub mitra: MitraInfo,
    /// Team-lead signatory (PIHAK PERTAMA).
    pub ketua_tim: String,
    /// Signing date, dd/mm/yyyy.
    pub tanggal_bast: String,
    pub nomor_sk: String,
    /// Decree date, dd/mm/yyyy.
    pub tanggal_sk: String,
    #[serde(default)]
    pub volume: Vec<VolumeSatuan>,
}

impl Validator for BastRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.nomor, "nomor", "Nomor BAST", &mut errors);
        validate_required(&self.kegiatan, "kegiatan", "Nama Kegiatan", &mut errors);
        validate_bulan(self.bulan, "bulan", &mut errors);
        validate_required(&self.mitra.nama, "mitra.nama", "Nama Mitra", &mut errors);
        validate_required(&self.ketua_tim, "ketua_tim", "Nama Ketua Tim", &mut errors);
        validate_tanggal(&self.tanggal_bast, "tanggal_bast", &mut errors);
        validate_required(&self.nomor_sk, "nomor_sk", "Nomor SK", &mut errors);
        validate_tanggal(&self.tanggal_sk, "tanggal_sk", &mut errors);

        errors.into_result()
    }
}

/// Handed-over volume sentence:
/// - one unit type: "<total> <satuan> <kegiatan>"
/// - several: comma-joined "<total> <satuan>" entries, then " <kegiatan>"
/// - none: "0 dokumen <kegiatan>"
pub fn kalimat_volume(volume: &[VolumeSatuan], kegiatan: &str) -> String {
    match volume {
        [] => format!("0 dokumen {}", kegiatan),
        [satu] => format!("{} {} {}", satu.total, satu.satuan, kegiatan),
        banyak => {
            let daftar = banyak
                .iter()
                .map(|v| format!("{} {}", v.total, v.satuan))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} {}", daftar, kegiatan)
        }
    }
}

/// Generator untuk Berita Acara Serah Terima.
pub struct BastGenerator;

impl BastGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BastGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<BastRequest> for BastGenerator {
    fn generate(&self, request: BastRequest) -> Result<GeneratedDocument, GeneratorError> {
        self.check(&request)?;
        log::debug!(
            "generating BAST {} for mitra {} ({} volume entries)",
            request.nomor,
            request.mitra.nama,
            request.volume.len()
        );

        let tanggal = parse_tanggal(&request.tanggal_bast).ok_or_else(|| {
            GeneratorError::InvalidDate {
                field: "tanggal_bast".to_string(),
                value: request.tanggal_bast.clone(),
            }
        })?;

        let blocks = isi_bast(&request)?;
        let document = Document {
            sections: vec![Section {
                page: halaman_baku(),
                footer: Some(footer_nomor_halaman()),
                blocks,
            }],
        };

        Ok(GeneratedDocument {
            filename: nama_berkas("bast", &request.nomor),
            document,
            tanggal: tanggal_pendek(tanggal),
        })
    }
}

/// Section content of one BAST; the multi composer concatenates these.
pub(crate) fn isi_bast(request: &BastRequest) -> Result<Vec<Block>, GeneratorError> {
    let tanggal =
        parse_tanggal(&request.tanggal_bast).ok_or_else(|| GeneratorError::InvalidDate {
            field: "tanggal_bast".to_string(),
            value: request.tanggal_bast.clone(),
        })?;
    let tanggal_sk =
        parse_tanggal(&request.tanggal_sk).ok_or_else(|| GeneratorError::InvalidDate {
            field: "tanggal_sk".to_string(),
            value: request.tanggal_sk.clone(),
        })?;

    let mut blocks = Vec::new();

    blocks.push(Block::Paragraph(para_bold(
        "BERITA ACARA SERAH TERIMA",
        UKURAN_JUDUL,
        Alignment::Center,
    )));

    // Document number with a red highlight so typists spot the placeholder.
    blocks.push(Block::Paragraph(para_runs(
        vec![
            text_run("Nomor: ", UKURAN_TEKS),
            Run {
                highlight: Some(Highlight::Red),
                ..text_run(&request.nomor, UKURAN_TEKS)
            },
        ],
        Alignment::Center,
    )));

    // Horizontal rule under the head, drawn as a zero-height bordered row.
    blocks.push(Block::Table(garis_pemisah()));
    blocks.push(Block::Paragraph(empty_line(UKURAN_TEKS)));

    blocks.push(Block::Paragraph(para(
        format!(
            "Pada hari ini {}, kami yang bertanda tangan di bawah ini:",
            kalimat_tanggal(tanggal)
        ),
        UKURAN_TEKS,
        Alignment::Justify,
    )));

    blocks.push(Block::Paragraph(pihak_romawi(
        "I",
        &format!(
            "{}, Ketua Tim kegiatan {} Badan Pusat Statistik, dalam hal ini bertindak untuk dan atas nama Badan Pusat Statistik, selanjutnya disebut {{{{PIHAK PERTAMA}}}}.",
            request.ketua_tim, request.kegiatan
        ),
    )));
    blocks.push(Block::Paragraph(pihak_romawi(
        "II",
        &format!(
            "{}, {}, bertempat tinggal di {}, dalam hal ini bertindak atas nama sendiri, selanjutnya disebut {{{{PIHAK KEDUA}}}}.",
            request.mitra.nama, request.mitra.pekerjaan, request.mitra.alamat
        ),
    )));

    blocks.push(Block::Table(tabel_memperhatikan(request, tanggal_sk)));
    blocks.push(Block::Paragraph(para(
        "Dengan ini menyatakan sebagai berikut:",
        UKURAN_TEKS,
        Alignment::Justify,
    )));

    blocks.push(Block::Paragraph(pernyataan(
        1,
        &format!(
            "{{{{PIHAK KEDUA}}}} telah menyelesaikan dan menyerahkan hasil pekerjaan berupa {} bulan {} tahun {} kepada {{{{PIHAK PERTAMA}}}}.",
            kalimat_volume(&request.volume, &request.kegiatan),
            crate::text::nama_bulan(request.bulan),
            request.tahun
        ),
    )));
    blocks.push(Block::Paragraph(pernyataan(
        2,
        "{{PIHAK PERTAMA}} telah memeriksa dan menerima hasil pekerjaan sebagaimana dimaksud pada angka 1 dari {{PIHAK KEDUA}}.",
    )));

    blocks.push(Block::Paragraph(para(
        "Demikian Berita Acara Serah Terima ini dibuat dengan sebenarnya untuk dipergunakan sebagaimana mestinya.",
        UKURAN_TEKS,
        Alignment::Justify,
    )));
    blocks.push(Block::Paragraph(empty_line(UKURAN_TEKS)));

    blocks.push(Block::Table(tabel_tanda_tangan(request)));

    Ok(blocks)
}

/// Zero-height bordered row standing in for a horizontal rule.
fn garis_pemisah() -> Table {
    Table {
        rows: vec![TableRow {
            cells: vec![cell_paragraphs(vec![empty_line(1)])],
            height_mm: Some(0),
        }],
        column_width_mm: None,
        borders: true,
    }
}

/// Roman-numeral party paragraph, tab-stop aligned with a hanging indent.
fn pihak_romawi(angka: &str, template: &str) -> Paragraph {
    let teks = format!("{}.\t{}", angka, template);
    Paragraph {
        runs: crate::doc::builder::runs_with_bold_markers(&teks, UKURAN_TEKS),
        align: Alignment::Justify,
        indent: Some(Indent {
            left_mm: 10,
            hanging_mm: 10,
        }),
        tab_stop_mm: Some(10),
    }
}

/// Numbered statement paragraph.
fn pernyataan(angka: u32, template: &str) -> Paragraph {
    let teks = format!("{}.\t{}", angka, template);
    Paragraph {
        runs: crate::doc::builder::runs_with_bold_markers(&teks, UKURAN_TEKS),
        align: Alignment::Justify,
        indent: Some(Indent {
            left_mm: 8,
            hanging_mm: 8,
        }),
        tab_stop_mm: Some(8),
    }
}

/// Considerations table referencing the decree the team works under.
fn tabel_memperhatikan(request: &BastRequest, tanggal_sk: chrono::NaiveDate) -> Table {
    let mut tabel = table(
        vec![row(vec![
            cell("Memperhatikan", UKURAN_TEKS, Alignment::Left),
            cell(":", UKURAN_TEKS, Alignment::Left),
            cell(
                format!(
                    "Surat Keputusan Nomor {} tanggal {} tentang penetapan mitra kegiatan {}.",
                    request.nomor_sk,
                    tanggal_pendek(tanggal_sk),
                    request.kegiatan
                ),
                UKURAN_TEKS,
                Alignment::Justify,
            ),
        ])],
        false,
    );
    tabel.column_width_mm = Some(vec![35, 5, 130]);
    tabel
}

/// Signature block: mitra (PIHAK KEDUA) left, ketua tim (PIHAK PERTAMA)
/// right, blank lines standing in for physical signature space.
fn tabel_tanda_tangan(request: &BastRequest) -> Table {
    table(
        vec![row(vec![
            cell_paragraphs(vec![
                para_bold("PIHAK KEDUA", UKURAN_TEKS, Alignment::Center),
                empty_line(UKURAN_TEKS),
                empty_line(UKURAN_TEKS),
                empty_line(UKURAN_TEKS),
                empty_line(UKURAN_TEKS),
                para_bold(&request.mitra.nama, UKURAN_TEKS, Alignment::Center),
            ]),
            cell_paragraphs(vec![
                para_bold("PIHAK PERTAMA", UKURAN_TEKS, Alignment::Center),
                para("Ketua Tim", UKURAN_TEKS, Alignment::Center),
                empty_line(UKURAN_TEKS),
                empty_line(UKURAN_TEKS),
                empty_line(UKURAN_TEKS),
                para_bold(&request.ketua_tim, UKURAN_TEKS, Alignment::Center),
            ]),
        ])],
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contoh_request() -> BastRequest {
        BastRequest {
            nomor: "BAST-07/2025".to_string(),
            kegiatan: "Survei Sosial Ekonomi".to_string(),
            bulan: 10,
            tahun: 2025,
            mitra: MitraInfo {
                nama: "Budi Santoso".to_string(),
                alamat: "Jl. Melati No. 5".to_string(),
                pekerjaan: "Mitra Statistik".to_string(),
            },
            ketua_tim: "Dewi Lestari".to_string(),
            tanggal_bast: "31/10/2025".to_string(),
            nomor_sk: "SK-12/2025".to_string(),
            tanggal_sk: "01/10/2025".to_string(),
            volume: vec![VolumeSatuan {
                satuan: "dokumen".to_string(),
                total: 32,
            }],
        }
    }

    #[test]
    fn test_kalimat_volume_satu_entri() {
        let volume = vec![VolumeSatuan {
            satuan: "dokumen".to_string(),
            total: 32,
        }];
        assert_eq!(
            kalimat_volume(&volume, "Survei Harga"),
            "32 dokumen Survei Harga"
        );
    }

    #[test]
    fn test_kalimat_volume_banyak_entri() {
        let volume = vec![
            VolumeSatuan {
                satuan: "dokumen".to_string(),
                total: 10,
            },
            VolumeSatuan {
                satuan: "OK".to_string(),
                total: 5,
            },
        ];
        assert_eq!(
            kalimat_volume(&volume, "Survei Harga"),
            "10 dokumen, 5 OK Survei Harga"
        );
    }

    #[test]
    fn test_kalimat_volume_kosong() {
        assert_eq!(kalimat_volume(&[], "Survei Harga"), "0 dokumen Survei Harga");
    }

    #[test]
    fn test_validate() {
        assert!(Validator::validate(&contoh_request()).is_ok());

        let mut rusak = contoh_request();
        rusak.nomor_sk = String::new();
        rusak.tanggal_sk = "awal bulan".to_string();
        let message = Validator::validate(&rusak).unwrap_err();
        assert!(message.contains("[nomor_sk]"));
        assert!(message.contains("[tanggal_sk]"));
    }

    #[test]
    fn test_generate() {
        let hasil = BastGenerator::new().generate(contoh_request()).unwrap();
        assert_eq!(hasil.filename, "bast-bast-07-2025.docx");
        assert_eq!(hasil.tanggal, "31 Oktober 2025");
        // BAST fits one page: no forced breaks in the single document.
        assert_eq!(hasil.document.page_break_count(), 0);

        let teks = hasil.document.plain_text();
        assert!(teks.contains("BERITA ACARA SERAH TERIMA"));
        assert!(teks.contains("32 dokumen Survei Sosial Ekonomi"));
        assert!(teks.contains("Surat Keputusan Nomor SK-12/2025 tanggal 1 Oktober 2025"));
    }

    #[test]
    fn test_nomor_highlighted_red() {
        let hasil = BastGenerator::new().generate(contoh_request()).unwrap();
        let section = &hasil.document.sections[0];
        let disorot = section.blocks.iter().any(|b| match b {
            Block::Paragraph(p) => p
                .runs
                .iter()
                .any(|r| r.highlight == Some(Highlight::Red) && r.text == "BAST-07/2025"),
            _ => false,
        });
        assert!(disorot);
    }

    #[test]
    fn test_garis_pemisah_zero_height() {
        let garis = garis_pemisah();
        assert!(garis.borders);
        assert_eq!(garis.rows[0].height_mm, Some(0));
    }
}

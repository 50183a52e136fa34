//! Generator for SPK (Surat Perjanjian Kerja).
//!
//! Builds the work contract issued to one mitra: title block, opening with
//! the signing date spelled out, a two-party identification table, the fixed
//! legal clauses Pasal 1..12, a signature block, and - after a forced page
//! break - the "Lampiran" annex table listing every task with its computed
//! contract value and a spelled-out total.

use serde::{Deserialize, Serialize};

use crate::doc::builder::{
    ayat, bold_run, cell, cell_bold, cell_merge_continue, cell_merge_start, cell_paragraphs,
    empty_line, para, para_bold, para_runs, para_templated, row, runs_with_bold_markers, table,
    text_run,
};
use crate::doc::{Alignment, Block, Document, Section, Table, TableCell};
use crate::text::{
    format_rupiah, format_rupiah_opt, kalimat_tanggal, nama_bulan, parse_tanggal, periode,
    tanggal_pendek, terbilang_rupiah,
};

use super::common::{footer_nomor_halaman, halaman_baku, nama_berkas};
use super::traits::{Generator, Validator};
use super::validation::{validate_bulan, validate_required, validate_tanggal, ValidationErrors};
use super::{GeneratedDocument, GeneratorError};

/// Body text size for SPK prose and tables.
const UKURAN_TEKS: u8 = 9;
/// Title size shared by both document types.
const UKURAN_JUDUL: u8 = 16;

/// Issuing official signing as PIHAK PERTAMA.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Pejabat {
    pub nama: String,
    pub jabatan: String,
    pub alamat: String,
}

/// Partner (mitra) signing as PIHAK KEDUA.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MitraInfo {
    pub nama: String,
    pub alamat: String,
    pub pekerjaan: String,
}

/// Project identity the contract is issued under.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KegiatanInfo {
    pub id: String,
    pub nama: String,
}

/// One billable work item in the contract annex.
///
/// The displayed contract value is `harga_satuan * volume` when both are
/// present, otherwise the flat `honor`; when neither is present the value
/// column renders "Rp -".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TugasItem {
    pub uraian: String,
    /// dd/mm/yyyy
    pub tanggal_mulai: String,
    /// dd/mm/yyyy
    pub tanggal_selesai: String,
    #[serde(default)]
    pub honor: Option<u64>,
    #[serde(default)]
    pub volume: Option<u64>,
    #[serde(default)]
    pub harga_satuan: Option<u64>,
    #[serde(default)]
    pub satuan: Option<String>,
    /// Set on tasks fed to the multi composer, which resolves each entry's
    /// kegiatan from its first task.
    #[serde(default)]
    pub kegiatan: Option<KegiatanInfo>,
}

impl TugasItem {
    /// Displayed "Nilai Perjanjian" for this line.
    pub fn nilai(&self) -> Option<u64> {
        match (self.volume, self.harga_satuan) {
            (Some(volume), Some(harga)) => Some(volume * harga),
            _ => self.honor,
        }
    }
}

/// Request untuk membuat satu SPK.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpkRequest {
    pub nomor: String,
    pub kegiatan: KegiatanInfo,
    /// 1-based month the contract covers.
    pub bulan: u32,
    pub tahun: i32,
    pub mitra: MitraInfo,
    pub pejabat: Pejabat,
    /// Signing date, dd/mm/yyyy.
    pub tanggal_spk: String,
    pub tugas: Vec<TugasItem>,
}

impl Validator for SpkRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.nomor, "nomor", "Nomor SPK", &mut errors);
        validate_required(
            &self.kegiatan.nama,
            "kegiatan.nama",
            "Nama Kegiatan",
            &mut errors,
        );
        validate_bulan(self.bulan, "bulan", &mut errors);
        validate_required(&self.mitra.nama, "mitra.nama", "Nama Mitra", &mut errors);
        validate_required(
            &self.mitra.alamat,
            "mitra.alamat",
            "Alamat Mitra",
            &mut errors,
        );
        validate_required(
            &self.pejabat.nama,
            "pejabat.nama",
            "Nama Pejabat",
            &mut errors,
        );
        validate_tanggal(&self.tanggal_spk, "tanggal_spk", &mut errors);

        errors.into_result()
    }
}

/// Total contract value: the sum of every task's flat `honor`. Per-line
/// volume x harga overrides affect the displayed line value only, not this
/// total.
pub fn total_honor(tugas: &[TugasItem]) -> u64 {
    tugas.iter().map(|t| t.honor.unwrap_or(0)).sum()
}

/// Generator untuk Surat Perjanjian Kerja.
pub struct SpkGenerator;

impl SpkGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpkGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<SpkRequest> for SpkGenerator {
    fn generate(&self, request: SpkRequest) -> Result<GeneratedDocument, GeneratorError> {
        self.check(&request)?;
        log::debug!(
            "generating SPK {} for mitra {} ({} tasks)",
            request.nomor,
            request.mitra.nama,
            request.tugas.len()
        );

        let tanggal = parse_tanggal(&request.tanggal_spk).ok_or_else(|| {
            GeneratorError::InvalidDate {
                field: "tanggal_spk".to_string(),
                value: request.tanggal_spk.clone(),
            }
        })?;

        let blocks = isi_spk(&request)?;
        let document = Document {
            sections: vec![Section {
                page: halaman_baku(),
                footer: Some(footer_nomor_halaman()),
                blocks,
            }],
        };

        Ok(GeneratedDocument {
            filename: nama_berkas("spk", &request.nomor),
            document,
            tanggal: tanggal_pendek(tanggal),
        })
    }
}

/// Section content of one SPK; the multi composer concatenates these.
pub(crate) fn isi_spk(request: &SpkRequest) -> Result<Vec<Block>, GeneratorError> {
    let tanggal = parse_tanggal(&request.tanggal_spk).ok_or_else(|| GeneratorError::InvalidDate {
        field: "tanggal_spk".to_string(),
        value: request.tanggal_spk.clone(),
    })?;
    let rentang = periode(request.tahun, request.bulan)
        .ok_or(GeneratorError::InvalidBulan(request.bulan))?;
    let total = total_honor(&request.tugas);

    let mut blocks = Vec::new();

    // Title block.
    blocks.push(Block::Paragraph(para_bold(
        "SURAT PERJANJIAN KERJA",
        UKURAN_JUDUL,
        Alignment::Center,
    )));
    blocks.push(Block::Paragraph(para_bold(
        format!(
            "PELAKSANAAN KEGIATAN {} BULAN {} TAHUN {}",
            request.kegiatan.nama.to_uppercase(),
            nama_bulan(request.bulan).to_uppercase(),
            request.tahun
        ),
        UKURAN_TEKS,
        Alignment::Center,
    )));
    blocks.push(Block::Paragraph(para(
        format!("Nomor: {}", request.nomor),
        UKURAN_TEKS,
        Alignment::Center,
    )));
    blocks.push(Block::Paragraph(empty_line(UKURAN_TEKS)));

    // Opening with the signing date spelled out.
    blocks.push(Block::Paragraph(para(
        format!(
            "Pada hari ini {}, kami yang bertanda tangan di bawah ini:",
            kalimat_tanggal(tanggal)
        ),
        UKURAN_TEKS,
        Alignment::Justify,
    )));

    blocks.push(Block::Table(tabel_pihak(request)));

    blocks.push(Block::Paragraph(para(
        "Kedua belah pihak sepakat mengadakan Perjanjian Kerja dengan ketentuan sebagai berikut:",
        UKURAN_TEKS,
        Alignment::Justify,
    )));

    blocks.extend(pasal_pasal(request, &rentang.awal_teks, &rentang.akhir_teks, total));

    blocks.push(Block::Paragraph(empty_line(UKURAN_TEKS)));
    blocks.push(Block::Table(tabel_tanda_tangan(request)));

    // Annex starts on its own page.
    blocks.push(Block::PageBreak);
    blocks.extend(lampiran(request, total)?);

    Ok(blocks)
}

/// Two-row parties identification table.
fn tabel_pihak(request: &SpkRequest) -> Table {
    let pejabat = &request.pejabat;
    let mitra = &request.mitra;

    let mut tabel = table(
        vec![
            row(vec![
                cell("1.", UKURAN_TEKS, Alignment::Left),
                cell_paragraphs(vec![
                    para_bold(&pejabat.nama, UKURAN_TEKS, Alignment::Left),
                    para(&pejabat.jabatan, UKURAN_TEKS, Alignment::Left),
                    para(&pejabat.alamat, UKURAN_TEKS, Alignment::Left),
                ]),
                cell_paragraphs(vec![para_runs(
                    runs_with_bold_markers(
                        "dalam hal ini bertindak untuk dan atas nama Badan Pusat Statistik, selanjutnya disebut {{PIHAK PERTAMA}}.",
                        UKURAN_TEKS,
                    ),
                    Alignment::Justify,
                )]),
            ]),
            row(vec![
                cell("2.", UKURAN_TEKS, Alignment::Left),
                cell_paragraphs(vec![
                    para_bold(&mitra.nama, UKURAN_TEKS, Alignment::Left),
                    para(&mitra.pekerjaan, UKURAN_TEKS, Alignment::Left),
                    para(&mitra.alamat, UKURAN_TEKS, Alignment::Left),
                ]),
                cell_paragraphs(vec![para_runs(
                    runs_with_bold_markers(
                        "dalam hal ini bertindak atas nama sendiri, selanjutnya disebut {{PIHAK KEDUA}}.",
                        UKURAN_TEKS,
                    ),
                    Alignment::Justify,
                )]),
            ]),
        ],
        false,
    );
    tabel.column_width_mm = Some(vec![8, 72, 90]);
    tabel
}

/// Pasal 1..12, fixed legal language interpolated with the request data.
fn pasal_pasal(
    request: &SpkRequest,
    awal_teks: &str,
    akhir_teks: &str,
    total: u64,
) -> Vec<Block> {
    let kegiatan = &request.kegiatan.nama;
    let bulan = nama_bulan(request.bulan);
    let tahun = request.tahun;

    let mut blocks = Vec::new();
    let pasal = |nomor: u32, judul: &str, isi: Vec<Block>, blocks: &mut Vec<Block>| {
        blocks.push(Block::Paragraph(para_bold(
            format!("Pasal {}", nomor),
            UKURAN_TEKS,
            Alignment::Center,
        )));
        blocks.push(Block::Paragraph(para_bold(judul, UKURAN_TEKS, Alignment::Center)));
        blocks.extend(isi);
        blocks.push(Block::Paragraph(empty_line(UKURAN_TEKS)));
    };

    pasal(
        1,
        "TUGAS PEKERJAAN",
        vec![
            Block::Paragraph(ayat(
                1,
                &format!(
                    "{{{{PIHAK PERTAMA}}}} memberikan tugas kepada {{{{PIHAK KEDUA}}}} dan {{{{PIHAK KEDUA}}}} menerima tugas dari {{{{PIHAK PERTAMA}}}} untuk melaksanakan kegiatan {} bulan {} tahun {}.",
                    kegiatan, bulan, tahun
                ),
                UKURAN_TEKS,
            )),
            Block::Paragraph(ayat(
                2,
                "Rincian tugas sebagaimana dimaksud pada ayat (1) tercantum dalam Lampiran yang merupakan bagian tidak terpisahkan dari Perjanjian ini.",
                UKURAN_TEKS,
            )),
        ],
        &mut blocks,
    );

    pasal(
        2,
        "JANGKA WAKTU PELAKSANAAN",
        vec![Block::Paragraph(para_templated(
            &format!(
                "Jangka waktu pelaksanaan tugas sebagaimana dimaksud dalam Pasal 1 terhitung mulai tanggal {} sampai dengan tanggal {}.",
                awal_teks, akhir_teks
            ),
            UKURAN_TEKS,
        ))],
        &mut blocks,
    );

    pasal(
        3,
        "HONORARIUM",
        vec![
            Block::Paragraph(ayat(
                1,
                &format!(
                    "{{{{PIHAK PERTAMA}}}} memberikan honorarium atas pelaksanaan tugas sebagaimana dimaksud dalam Pasal 1 sebesar {} ({}) sudah termasuk pajak.",
                    format_rupiah(total),
                    terbilang_rupiah(total)
                ),
                UKURAN_TEKS,
            )),
            Block::Paragraph(ayat(
                2,
                "Rincian honorarium untuk setiap tugas tercantum dalam Lampiran Perjanjian ini.",
                UKURAN_TEKS,
            )),
        ],
        &mut blocks,
    );

    pasal(
        4,
        "CARA PEMBAYARAN",
        vec![Block::Paragraph(para_templated(
            "Pembayaran honorarium sebagaimana dimaksud dalam Pasal 3 dilakukan setelah {{PIHAK KEDUA}} menyelesaikan seluruh tugas yang dinyatakan dalam Berita Acara Serah Terima, melalui pemindahbukuan ke rekening {{PIHAK KEDUA}}.",
            UKURAN_TEKS,
        ))],
        &mut blocks,
    );

    pasal(
        5,
        "KEWAJIBAN PIHAK KEDUA",
        vec![
            Block::Paragraph(ayat(
                1,
                "{{PIHAK KEDUA}} wajib melaksanakan tugas sesuai dengan petunjuk teknis yang ditetapkan oleh {{PIHAK PERTAMA}}.",
                UKURAN_TEKS,
            )),
            Block::Paragraph(ayat(
                2,
                "{{PIHAK KEDUA}} wajib menjaga kerahasiaan seluruh data dan dokumen yang diperoleh dalam pelaksanaan tugas.",
                UKURAN_TEKS,
            )),
            Block::Paragraph(ayat(
                3,
                "{{PIHAK KEDUA}} wajib menyerahkan hasil pekerjaan kepada {{PIHAK PERTAMA}} sesuai jadwal yang ditetapkan.",
                UKURAN_TEKS,
            )),
        ],
        &mut blocks,
    );

    pasal(
        6,
        "HAK PIHAK KEDUA",
        vec![
            Block::Paragraph(ayat(
                1,
                "{{PIHAK KEDUA}} berhak memperoleh honorarium sebagaimana dimaksud dalam Pasal 3.",
                UKURAN_TEKS,
            )),
            Block::Paragraph(ayat(
                2,
                "{{PIHAK KEDUA}} berhak memperoleh pembinaan dan bimbingan teknis dari {{PIHAK PERTAMA}} dalam pelaksanaan tugas.",
                UKURAN_TEKS,
            )),
        ],
        &mut blocks,
    );

    pasal(
        7,
        "SANKSI",
        vec![Block::Paragraph(para_templated(
            "Apabila {{PIHAK KEDUA}} tidak menyelesaikan tugas sesuai jangka waktu sebagaimana dimaksud dalam Pasal 2, {{PIHAK KEDUA}} dikenakan denda sebesar 1\u{2030} (satu permil) dari nilai Perjanjian untuk setiap hari keterlambatan, setinggi-tingginya 5% (lima persen) dari nilai Perjanjian.",
            UKURAN_TEKS,
        ))],
        &mut blocks,
    );

    pasal(
        8,
        "PEMUTUSAN PERJANJIAN",
        vec![
            Block::Paragraph(ayat(
                1,
                "{{PIHAK PERTAMA}} dapat memutuskan Perjanjian ini secara sepihak apabila {{PIHAK KEDUA}} tidak melaksanakan kewajiban sebagaimana dimaksud dalam Pasal 5.",
                UKURAN_TEKS,
            )),
            Block::Paragraph(ayat(
                2,
                "Dalam hal Perjanjian diputuskan, {{PIHAK KEDUA}} hanya berhak atas honorarium untuk tugas yang telah diselesaikan dan diterima oleh {{PIHAK PERTAMA}}.",
                UKURAN_TEKS,
            )),
        ],
        &mut blocks,
    );

    pasal(
        9,
        "KEADAAN MEMAKSA",
        vec![
            Block::Paragraph(ayat(
                1,
                "Keadaan memaksa adalah keadaan di luar kemampuan kedua belah pihak, antara lain bencana alam, kebakaran, dan huru-hara.",
                UKURAN_TEKS,
            )),
            Block::Paragraph(ayat(
                2,
                "Apabila terjadi keadaan memaksa, {{PIHAK KEDUA}} wajib memberitahukan secara tertulis kepada {{PIHAK PERTAMA}} paling lambat 7 (tujuh) hari sejak keadaan memaksa terjadi.",
                UKURAN_TEKS,
            )),
        ],
        &mut blocks,
    );

    pasal(
        10,
        "PENYELESAIAN PERSELISIHAN",
        vec![Block::Paragraph(para_templated(
            "Perselisihan yang timbul dalam pelaksanaan Perjanjian ini diselesaikan oleh kedua belah pihak secara musyawarah untuk mufakat.",
            UKURAN_TEKS,
        ))],
        &mut blocks,
    );

    pasal(
        11,
        "LAIN-LAIN",
        vec![Block::Paragraph(para_templated(
            "Hal-hal yang belum diatur dalam Perjanjian ini akan diatur kemudian atas persetujuan {{PIHAK PERTAMA}} dan {{PIHAK KEDUA}}.",
            UKURAN_TEKS,
        ))],
        &mut blocks,
    );

    pasal(
        12,
        "PENUTUP",
        vec![Block::Paragraph(para_templated(
            "Perjanjian ini dibuat rangkap 2 (dua), bermeterai cukup, masing-masing mempunyai kekuatan hukum yang sama, dan mulai berlaku pada tanggal ditandatangani.",
            UKURAN_TEKS,
        ))],
        &mut blocks,
    );

    blocks
}

/// Two-column signature block: mitra left, pejabat right, blank lines
/// standing in for physical signature space.
fn tabel_tanda_tangan(request: &SpkRequest) -> Table {
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
                para(&request.pejabat.jabatan, UKURAN_TEKS, Alignment::Center),
                empty_line(UKURAN_TEKS),
                empty_line(UKURAN_TEKS),
                empty_line(UKURAN_TEKS),
                para_bold(&request.pejabat.nama, UKURAN_TEKS, Alignment::Center),
            ]),
        ])],
        false,
    )
}

/// Duration text for one task row. Only the end date's month and year are
/// shown; upstream supplies same-month tasks.
fn durasi_tugas(tugas: &TugasItem) -> Result<String, GeneratorError> {
    let mulai = parse_tanggal(&tugas.tanggal_mulai).ok_or_else(|| GeneratorError::InvalidDate {
        field: "tugas.tanggal_mulai".to_string(),
        value: tugas.tanggal_mulai.clone(),
    })?;
    let selesai =
        parse_tanggal(&tugas.tanggal_selesai).ok_or_else(|| GeneratorError::InvalidDate {
            field: "tugas.tanggal_selesai".to_string(),
            value: tugas.tanggal_selesai.clone(),
        })?;

    use chrono::Datelike;
    Ok(format!(
        "{} - {} {} {}",
        mulai.day(),
        selesai.day(),
        nama_bulan(selesai.month()),
        selesai.year()
    ))
}

/// Annex page: heading plus the task/honorarium table.
fn lampiran(request: &SpkRequest, total: u64) -> Result<Vec<Block>, GeneratorError> {
    Ok(vec![
        Block::Paragraph(para_bold("LAMPIRAN", UKURAN_TEKS, Alignment::Center)),
        Block::Paragraph(para_bold(
            "SURAT PERJANJIAN KERJA",
            UKURAN_TEKS,
            Alignment::Center,
        )),
        Block::Paragraph(para(
            format!("Nomor: {}", request.nomor),
            UKURAN_TEKS,
            Alignment::Center,
        )),
        Block::Paragraph(empty_line(UKURAN_TEKS)),
        Block::Table(tabel_lampiran(request, total)?),
    ])
}

fn tabel_lampiran(request: &SpkRequest, total: u64) -> Result<Table, GeneratorError> {
    let mut rows = Vec::new();

    // Two-level header: "Target Pekerjaan" spans Volume/Satuan/Harga Satuan,
    // the other columns merge vertically across both header rows.
    rows.push(row(vec![
        cell_merge_start("No", UKURAN_TEKS),
        cell_merge_start("Uraian Tugas", UKURAN_TEKS),
        cell_merge_start("Jangka Waktu Pelaksanaan", UKURAN_TEKS),
        TableCell {
            col_span: 3,
            ..cell_bold("Target Pekerjaan", UKURAN_TEKS, Alignment::Center)
        },
        cell_merge_start("Nilai Perjanjian", UKURAN_TEKS),
    ]));
    rows.push(row(vec![
        cell_merge_continue(UKURAN_TEKS),
        cell_merge_continue(UKURAN_TEKS),
        cell_merge_continue(UKURAN_TEKS),
        cell_bold("Volume", UKURAN_TEKS, Alignment::Center),
        cell_bold("Satuan", UKURAN_TEKS, Alignment::Center),
        cell_bold("Harga Satuan", UKURAN_TEKS, Alignment::Center),
        cell_merge_continue(UKURAN_TEKS),
    ]));

    // Column-number annotation row, kept exactly as printed on the issued
    // forms, including the duplicate "(4)".
    rows.push(row(
        ["(1)", "(2)", "(3)", "(4)", "(4)", "(5)"]
            .iter()
            .map(|label| cell(*label, UKURAN_TEKS, Alignment::Center))
            .collect(),
    ));

    for (i, tugas) in request.tugas.iter().enumerate() {
        let durasi = durasi_tugas(tugas)?;
        rows.push(row(vec![
            cell((i + 1).to_string(), UKURAN_TEKS, Alignment::Center),
            cell(&tugas.uraian, UKURAN_TEKS, Alignment::Left),
            cell(durasi, UKURAN_TEKS, Alignment::Center),
            cell(
                tugas
                    .volume
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                UKURAN_TEKS,
                Alignment::Center,
            ),
            cell(
                tugas.satuan.clone().unwrap_or_else(|| "-".to_string()),
                UKURAN_TEKS,
                Alignment::Center,
            ),
            cell(
                format_rupiah_opt(tugas.harga_satuan),
                UKURAN_TEKS,
                Alignment::Right,
            ),
            cell(format_rupiah_opt(tugas.nilai()), UKURAN_TEKS, Alignment::Right),
        ]));
    }

    // Blank template rows below the filled lines.
    for _ in 0..2 {
        rows.push(row(
            (0..7)
                .map(|_| cell_paragraphs(vec![empty_line(UKURAN_TEKS)]))
                .collect(),
        ));
    }

    rows.push(row(vec![
        TableCell {
            col_span: 5,
            ..cell_paragraphs(vec![para_runs(
                vec![
                    text_run("Terbilang: ", UKURAN_TEKS),
                    bold_run(terbilang_rupiah(total), UKURAN_TEKS),
                ],
                Alignment::Left,
            )])
        },
        cell_bold(format_rupiah(total), UKURAN_TEKS, Alignment::Right),
    ]));

    let mut tabel = table(rows, true);
    tabel.column_width_mm = Some(vec![8, 45, 27, 14, 16, 28, 32]);
    Ok(tabel)
}

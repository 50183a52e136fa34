//! Multi-partner SPK composer.
//!
//! Produces one document holding every mitra's contract back-to-back, a
//! forced page break before each mitra after the first. The composer works
//! on the same section content the single generator builds, so the final
//! document is materialized exactly once, with the shared page geometry and
//! page-number footer on the section.

use serde::{Deserialize, Serialize};

use crate::doc::{Block, Document, Section};
use crate::text::{parse_tanggal, tanggal_pendek};

use super::common::{footer_nomor_halaman, halaman_baku, nama_berkas, nomor_urut};
use super::spk::{isi_spk, MitraInfo, Pejabat, SpkRequest, TugasItem};
use super::traits::{Generator, Validator};
use super::validation::{validate_bulan, validate_required, validate_tanggal, ValidationErrors};
use super::{GeneratedDocument, GeneratorError};

/// One mitra's share of a batch: the partner and their task list. The
/// entry's kegiatan is resolved from the first task, so an entry without
/// tasks cannot be built.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpkMultiEntry {
    pub mitra: MitraInfo,
    pub tugas: Vec<TugasItem>,
}

/// Request untuk membuat SPK seluruh mitra dalam satu dokumen.
///
/// All entries share the base document number, month, year, signing date,
/// and signatory; entry `i > 1` receives the suffixed number
/// `"<base>-<i, 3 digits>"`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpkMultiRequest {
    pub nomor: String,
    pub bulan: u32,
    pub tahun: i32,
    pub pejabat: Pejabat,
    /// Signing date, dd/mm/yyyy.
    pub tanggal_spk: String,
    pub daftar_mitra: Vec<SpkMultiEntry>,
}

impl Validator for SpkMultiRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.nomor, "nomor", "Nomor SPK", &mut errors);
        validate_bulan(self.bulan, "bulan", &mut errors);
        validate_required(
            &self.pejabat.nama,
            "pejabat.nama",
            "Nama Pejabat",
            &mut errors,
        );
        validate_tanggal(&self.tanggal_spk, "tanggal_spk", &mut errors);
        for (i, entry) in self.daftar_mitra.iter().enumerate() {
            validate_required(
                &entry.mitra.nama,
                &format!("daftar_mitra[{}].mitra.nama", i),
                "Nama Mitra",
                &mut errors,
            );
        }

        errors.into_result()
    }
}

/// Composer untuk SPK multi-mitra.
pub struct SpkMultiGenerator;

impl SpkMultiGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpkMultiGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<SpkMultiRequest> for SpkMultiGenerator {
    fn generate(&self, request: SpkMultiRequest) -> Result<GeneratedDocument, GeneratorError> {
        if request.daftar_mitra.is_empty() {
            return Err(GeneratorError::EmptyMitraList);
        }
        self.check(&request)?;
        log::debug!(
            "generating multi SPK {} for {} mitra",
            request.nomor,
            request.daftar_mitra.len()
        );

        let tanggal = parse_tanggal(&request.tanggal_spk).ok_or_else(|| {
            GeneratorError::InvalidDate {
                field: "tanggal_spk".to_string(),
                value: request.tanggal_spk.clone(),
            }
        })?;

        let mut blocks = Vec::new();
        for (i, entry) in request.daftar_mitra.iter().enumerate() {
            let kegiatan = entry
                .tugas
                .first()
                .and_then(|t| t.kegiatan.clone())
                .ok_or_else(|| GeneratorError::MissingKegiatan {
                    mitra: entry.mitra.nama.clone(),
                })?;

            let satu = SpkRequest {
                nomor: nomor_urut(&request.nomor, i),
                kegiatan,
                bulan: request.bulan,
                tahun: request.tahun,
                mitra: entry.mitra.clone(),
                pejabat: request.pejabat.clone(),
                tanggal_spk: request.tanggal_spk.clone(),
                tugas: entry.tugas.clone(),
            };

            if i > 0 {
                blocks.push(Block::PageBreak);
            }
            blocks.extend(isi_spk(&satu)?);
        }

        let document = Document {
            sections: vec![Section {
                page: halaman_baku(),
                footer: Some(footer_nomor_halaman()),
                blocks,
            }],
        };

        Ok(GeneratedDocument {
            filename: nama_berkas("spk-semua-mitra", &request.nomor),
            document,
            tanggal: tanggal_pendek(tanggal),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::KegiatanInfo;

    fn tugas(kegiatan: bool) -> TugasItem {
        TugasItem {
            uraian: "Pendataan lapangan".to_string(),
            tanggal_mulai: "01/10/2025".to_string(),
            tanggal_selesai: "31/10/2025".to_string(),
            honor: Some(250_000),
            kegiatan: kegiatan.then(|| KegiatanInfo {
                id: "7420".to_string(),
                nama: "Survei Sosial Ekonomi".to_string(),
            }),
            ..Default::default()
        }
    }

    fn entry(nama: &str) -> SpkMultiEntry {
        SpkMultiEntry {
            mitra: MitraInfo {
                nama: nama.to_string(),
                alamat: "Jl. Melati No. 5".to_string(),
                pekerjaan: "Mitra Statistik".to_string(),
            },
            tugas: vec![tugas(true)],
        }
    }

    fn contoh_request(jumlah: usize) -> SpkMultiRequest {
        SpkMultiRequest {
            nomor: "B-123/SPK/2025".to_string(),
            bulan: 10,
            tahun: 2025,
            pejabat: Pejabat {
                nama: "Dewi Lestari".to_string(),
                jabatan: "Pejabat Pembuat Komitmen".to_string(),
                alamat: "Jl. Statistik No. 1".to_string(),
            },
            tanggal_spk: "31/10/2025".to_string(),
            daftar_mitra: (0..jumlah).map(|i| entry(&format!("Mitra {}", i + 1))).collect(),
        }
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = SpkMultiGenerator::new()
            .generate(contoh_request(0))
            .unwrap_err();
        assert!(matches!(err, GeneratorError::EmptyMitraList));
    }

    #[test]
    fn test_missing_kegiatan_rejected() {
        let mut request = contoh_request(2);
        request.daftar_mitra[1].tugas.clear();
        let err = SpkMultiGenerator::new().generate(request).unwrap_err();
        match err {
            GeneratorError::MissingKegiatan { mitra } => assert_eq!(mitra, "Mitra 2"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_page_breaks_between_mitra() {
        let hasil = SpkMultiGenerator::new().generate(contoh_request(3)).unwrap();
        assert_eq!(hasil.document.sections.len(), 1);
        // Each SPK carries one internal break before its annex, plus one
        // separator before every mitra after the first: 3 + 2.
        assert_eq!(hasil.document.page_break_count(), 5);

        // No separator before the first block.
        let first = &hasil.document.sections[0].blocks[0];
        assert!(!matches!(first, Block::PageBreak));
    }

    #[test]
    fn test_suffixed_document_numbers() {
        let hasil = SpkMultiGenerator::new().generate(contoh_request(3)).unwrap();
        let teks = hasil.document.plain_text();
        assert!(teks.contains("Nomor: B-123/SPK/2025\n"));
        assert!(teks.contains("Nomor: B-123/SPK/2025-002"));
        assert!(teks.contains("Nomor: B-123/SPK/2025-003"));
        assert!(!teks.contains("B-123/SPK/2025-001"));
    }

    #[test]
    fn test_single_entry_keeps_base_number() {
        let hasil = SpkMultiGenerator::new().generate(contoh_request(1)).unwrap();
        let teks = hasil.document.plain_text();
        assert!(teks.contains("Nomor: B-123/SPK/2025\n"));
        assert!(!teks.contains("-002"));
        assert_eq!(hasil.document.page_break_count(), 1);
    }
}

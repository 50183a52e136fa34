//! Multi-partner BAST composer.
//!
//! One document holding every mitra's handover certificate back-to-back,
//! separated by forced page breaks, with positionally suffixed document
//! numbers. Mirrors the SPK composer; BAST entries need no kegiatan
//! resolution because the project name is shared by the whole batch.

use serde::{Deserialize, Serialize};

use crate::doc::{Block, Document, Section};
use crate::text::{parse_tanggal, tanggal_pendek};

use super::bast::{isi_bast, BastRequest, VolumeSatuan};
use super::common::{footer_nomor_halaman, halaman_baku, nama_berkas, nomor_urut};
use super::spk::MitraInfo;
use super::traits::{Generator, Validator};
use super::validation::{validate_bulan, validate_required, validate_tanggal, ValidationErrors};
use super::{GeneratedDocument, GeneratorError};

/// One mitra's share of a batch: the partner and their handed-over volumes.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BastMultiEntry {
    pub mitra: MitraInfo,
    #[serde(default)]
    pub volume: Vec<VolumeSatuan>,
}

/// Request untuk membuat BAST seluruh mitra dalam satu dokumen.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BastMultiRequest {
    pub nomor: String,
    pub kegiatan: String,
    pub bulan: u32,
    pub tahun: i32,
    pub ketua_tim: String,
    /// Signing date, dd/mm/yyyy.
    pub tanggal_bast: String,
    pub nomor_sk: String,
    /// Decree date, dd/mm/yyyy.
    pub tanggal_sk: String,
    pub daftar_mitra: Vec<BastMultiEntry>,
}

impl Validator for BastMultiRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.nomor, "nomor", "Nomor BAST", &mut errors);
        validate_required(&self.kegiatan, "kegiatan", "Nama Kegiatan", &mut errors);
        validate_bulan(self.bulan, "bulan", &mut errors);
        validate_required(&self.ketua_tim, "ketua_tim", "Nama Ketua Tim", &mut errors);
        validate_tanggal(&self.tanggal_bast, "tanggal_bast", &mut errors);
        validate_required(&self.nomor_sk, "nomor_sk", "Nomor SK", &mut errors);
        validate_tanggal(&self.tanggal_sk, "tanggal_sk", &mut errors);
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

/// Composer untuk BAST multi-mitra.
pub struct BastMultiGenerator;

impl BastMultiGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BastMultiGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<BastMultiRequest> for BastMultiGenerator {
    fn generate(&self, request: BastMultiRequest) -> Result<GeneratedDocument, GeneratorError> {
        if request.daftar_mitra.is_empty() {
            return Err(GeneratorError::EmptyMitraList);
        }
        self.check(&request)?;
        log::debug!(
            "generating multi BAST {} for {} mitra",
            request.nomor,
            request.daftar_mitra.len()
        );

        let tanggal = parse_tanggal(&request.tanggal_bast).ok_or_else(|| {
            GeneratorError::InvalidDate {
                field: "tanggal_bast".to_string(),
                value: request.tanggal_bast.clone(),
            }
        })?;

        let mut blocks = Vec::new();
        for (i, entry) in request.daftar_mitra.iter().enumerate() {
            let satu = BastRequest {
                nomor: nomor_urut(&request.nomor, i),
                kegiatan: request.kegiatan.clone(),
                bulan: request.bulan,
                tahun: request.tahun,
                mitra: entry.mitra.clone(),
                ketua_tim: request.ketua_tim.clone(),
                tanggal_bast: request.tanggal_bast.clone(),
                nomor_sk: request.nomor_sk.clone(),
                tanggal_sk: request.tanggal_sk.clone(),
                volume: entry.volume.clone(),
            };

            if i > 0 {
                blocks.push(Block::PageBreak);
            }
            blocks.extend(isi_bast(&satu)?);
        }

        let document = Document {
            sections: vec![Section {
                page: halaman_baku(),
                footer: Some(footer_nomor_halaman()),
                blocks,
            }],
        };

        Ok(GeneratedDocument {
            filename: nama_berkas("bast-semua-mitra", &request.nomor),
            document,
            tanggal: tanggal_pendek(tanggal),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(nama: &str, total: u64) -> BastMultiEntry {
        BastMultiEntry {
            mitra: MitraInfo {
                nama: nama.to_string(),
                alamat: "Jl. Melati No. 5".to_string(),
                pekerjaan: "Mitra Statistik".to_string(),
            },
            volume: vec![VolumeSatuan {
                satuan: "dokumen".to_string(),
                total,
            }],
        }
    }

    fn contoh_request(jumlah: usize) -> BastMultiRequest {
        BastMultiRequest {
            nomor: "BAST-07/2025".to_string(),
            kegiatan: "Survei Sosial Ekonomi".to_string(),
            bulan: 10,
            tahun: 2025,
            ketua_tim: "Dewi Lestari".to_string(),
            tanggal_bast: "31/10/2025".to_string(),
            nomor_sk: "SK-12/2025".to_string(),
            tanggal_sk: "01/10/2025".to_string(),
            daftar_mitra: (0..jumlah)
                .map(|i| entry(&format!("Mitra {}", i + 1), 10 + i as u64))
                .collect(),
        }
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = BastMultiGenerator::new()
            .generate(contoh_request(0))
            .unwrap_err();
        assert!(matches!(err, GeneratorError::EmptyMitraList));
    }

    #[test]
    fn test_page_breaks_between_mitra() {
        let hasil = BastMultiGenerator::new()
            .generate(contoh_request(4))
            .unwrap();
        // BAST has no internal breaks, so only the 3 separators remain.
        assert_eq!(hasil.document.page_break_count(), 3);
        let first = &hasil.document.sections[0].blocks[0];
        assert!(!matches!(first, Block::PageBreak));
    }

    #[test]
    fn test_suffixed_document_numbers() {
        let hasil = BastMultiGenerator::new()
            .generate(contoh_request(2))
            .unwrap();
        let teks = hasil.document.plain_text();
        assert!(teks.contains("Nomor: BAST-07/2025\n"));
        assert!(teks.contains("Nomor: BAST-07/2025-002"));
    }

    #[test]
    fn test_per_mitra_volume() {
        let hasil = BastMultiGenerator::new()
            .generate(contoh_request(2))
            .unwrap();
        let teks = hasil.document.plain_text();
        assert!(teks.contains("10 dokumen Survei Sosial Ekonomi"));
        assert!(teks.contains("11 dokumen Survei Sosial Ekonomi"));
    }
}

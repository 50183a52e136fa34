//! Document generators for partner administration.
//!
//! Each document type has a single-partner generator and a multi-partner
//! composer producing one document with a page break between partners:
//! - `spk` / `spk_multi` - SPK (Surat Perjanjian Kerja), the work contract
//! - `bast` / `bast_multi` - BAST (Berita Acara Serah Terima), the handover
//!   certificate
//!
//! Generation is synchronous, stateless, and side-effect-free: validated
//! request in, in-memory [`Document`](crate::doc::Document) out. The host
//! application owns serialization and delivery of the result.

pub mod bast;
pub mod bast_multi;
pub mod common;
pub mod spk;
pub mod spk_multi;
pub mod traits;
pub mod validation;

pub use bast::{BastGenerator, BastRequest, VolumeSatuan};
pub use bast_multi::{BastMultiEntry, BastMultiGenerator, BastMultiRequest};
pub use spk::{KegiatanInfo, MitraInfo, Pejabat, SpkGenerator, SpkRequest, TugasItem};
pub use spk_multi::{SpkMultiEntry, SpkMultiGenerator, SpkMultiRequest};
pub use traits::{Generator, Validator};

use thiserror::Error;

use crate::doc::Document;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("request validation failed: {0}")]
    Validation(String),
    #[error("no partner entries supplied")]
    EmptyMitraList,
    #[error("no tasks with a kegiatan supplied for mitra '{mitra}'")]
    MissingKegiatan { mitra: String },
    #[error("invalid date '{value}' in field {field}, expected dd/mm/yyyy")]
    InvalidDate { field: String, value: String },
    #[error("month out of range: {0}")]
    InvalidBulan(u32),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    /// Suggested output filename, derived from the document number.
    pub filename: String,
    pub document: Document,
    /// Short signing-date text, e.g. "31 Oktober 2025".
    pub tanggal: String,
}

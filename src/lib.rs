//! dokumen-mitra: structured document generation for partner administration.
//!
//! Builds SPK work contracts and BAST handover certificates for statistics
//! field-program partners ("mitra") as plain in-memory document values. The
//! host application gathers the project/task/partner records, calls a
//! generator (single partner) or composer (all partners in one document),
//! and owns serialization of the returned [`doc::Document`].
//!
//! ```
//! use dokumen_mitra::generators::{
//!     BastGenerator, BastRequest, Generator, MitraInfo, VolumeSatuan,
//! };
//!
//! let request = BastRequest {
//!     nomor: "BAST-07/2025".to_string(),
//!     kegiatan: "Survei Sosial Ekonomi".to_string(),
//!     bulan: 10,
//!     tahun: 2025,
//!     mitra: MitraInfo {
//!         nama: "Budi Santoso".to_string(),
//!         alamat: "Jl. Melati No. 5".to_string(),
//!         pekerjaan: "Mitra Statistik".to_string(),
//!     },
//!     ketua_tim: "Dewi Lestari".to_string(),
//!     tanggal_bast: "31/10/2025".to_string(),
//!     nomor_sk: "SK-12/2025".to_string(),
//!     tanggal_sk: "01/10/2025".to_string(),
//!     volume: vec![VolumeSatuan { satuan: "dokumen".to_string(), total: 32 }],
//! };
//!
//! let hasil = BastGenerator::new().generate(request).unwrap();
//! assert_eq!(hasil.filename, "bast-bast-07-2025.docx");
//! ```

pub mod doc;
pub mod generators;
pub mod text;

pub use generators::{GeneratedDocument, Generator, GeneratorError, Validator};

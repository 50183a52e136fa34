//! Indonesian text utilities for legal/administrative documents.
//!
//! Pure helpers shared by every generator:
//! - `terbilang` - integer to Indonesian words
//! - `tanggal` - date parsing and spelled-out date sentences
//! - `rupiah` - currency display and words rendering
//! - `periode` - first/last calendar day of a month with text renderings

pub mod periode;
pub mod rupiah;
pub mod tanggal;
pub mod terbilang;

pub use periode::{periode, Periode};
pub use rupiah::{format_rupiah, format_rupiah_opt, terbilang_rupiah};
pub use tanggal::{kalimat_tanggal, nama_bulan, parse_tanggal, tanggal_pendek};
pub use terbilang::terbilang;

//! Shared helpers for document generation.

use crate::doc::{Footer, Margins, PageSetup};

/// Fixed page geometry shared by SPK and BAST.
pub fn halaman_baku() -> PageSetup {
    PageSetup {
        margins: Margins::baku(),
    }
}

/// Page-numbered footer applied to every generated section.
pub fn footer_nomor_halaman() -> Footer {
    Footer { page_numbers: true }
}

/// Document number for the entry at 0-based `posisi` in a multi-document
/// request: the first entry keeps the base, later entries get a 3-digit
/// suffix derived from their 1-based position ("BASE-002", "BASE-003", ...).
pub fn nomor_urut(base: &str, posisi: usize) -> String {
    if posisi == 0 {
        base.to_string()
    } else {
        format!("{}-{:03}", base, posisi + 1)
    }
}

/// Sanitize a document number or name for use in filenames.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut result = String::new();
    let mut last_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash && !result.is_empty() {
            result.push('-');
            last_dash = true;
        }
    }

    let result = result.trim_matches('-');
    if result.is_empty() {
        fallback.to_string()
    } else {
        result.to_string()
    }
}

/// Suggested output filename, e.g. `nama_berkas("spk", "B-123/SPK/2025")`
/// gives "spk-b-123-spk-2025.docx".
pub fn nama_berkas(jenis: &str, nomor: &str) -> String {
    format!("{}-{}.docx", jenis, sanitize_filename(nomor, jenis))
}

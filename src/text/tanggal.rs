//! Indonesian date text rendering.
//!
//! Dates enter the generators as `dd/mm/yyyy` strings; they are parsed into
//! `NaiveDate` (no timezone, zero time component) and rendered either short
//! ("31 Oktober 2025") or fully spelled out for contract openings.

use chrono::{Datelike, NaiveDate};

use super::terbilang::terbilang;

/// Day names, Sunday-indexed to line up with `num_days_from_sunday`.
const NAMA_HARI: [&str; 7] = [
    "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

const NAMA_BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Parse a `dd/mm/yyyy` date string. Returns `None` for malformed input;
/// generators turn that into an explicit error instead of garbled text.
pub fn parse_tanggal(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%d/%m/%Y").ok()
}

/// Indonesian month name for a 1-based month number.
pub fn nama_bulan(bulan: u32) -> &'static str {
    let idx = (bulan as usize).saturating_sub(1).min(NAMA_BULAN.len() - 1);
    NAMA_BULAN[idx]
}

/// Short date form used in tables and signature lines, e.g. "31 Oktober 2025".
pub fn tanggal_pendek(tanggal: NaiveDate) -> String {
    format!(
        "{} {} {}",
        tanggal.day(),
        nama_bulan(tanggal.month()),
        tanggal.year()
    )
}

/// Full spelled-out date sentence used in contract openings, e.g.
/// "Jumat, tanggal tiga puluh satu, bulan Oktober, tahun dua ribu dua puluh lima".
pub fn kalimat_tanggal(tanggal: NaiveDate) -> String {
    let hari = NAMA_HARI[tanggal.weekday().num_days_from_sunday() as usize];
    format!(
        "{}, tanggal {}, bulan {}, tahun {}",
        hari,
        terbilang(tanggal.day() as u64),
        nama_bulan(tanggal.month()),
        terbilang(tanggal.year() as u64)
    )
}

//! Indonesian number spelling ("terbilang").
//!
//! Converts non-negative integers into words the way Indonesian financial
//! and legal documents spell amounts next to the numerals.

const SATUAN: [&str; 10] = [
    "", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
];

/// Spell a non-negative integer in Indonesian (e.g. 1320000 ->
/// "satu juta tiga ratus dua puluh ribu").
pub fn terbilang(n: u64) -> String {
    if n == 0 {
        return "nol".to_string();
    }
    susun(n)
}

fn susun(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=9 => SATUAN[n as usize].to_string(),
        10 => "sepuluh".to_string(),
        11 => "sebelas".to_string(),
        12..=19 => format!("{} belas", SATUAN[(n - 10) as usize]),
        20..=99 => sambung(format!("{} puluh", SATUAN[(n / 10) as usize]), n % 10),
        100..=199 => sambung("seratus".to_string(), n % 100),
        200..=999 => sambung(format!("{} ratus", SATUAN[(n / 100) as usize]), n % 100),
        1_000..=1_999 => sambung("seribu".to_string(), n % 1_000),
        2_000..=999_999 => sambung(format!("{} ribu", susun(n / 1_000)), n % 1_000),
        1_000_000..=999_999_999 => {
            sambung(format!("{} juta", susun(n / 1_000_000)), n % 1_000_000)
        }
        1_000_000_000..=999_999_999_999 => {
            sambung(format!("{} miliar", susun(n / 1_000_000_000)), n % 1_000_000_000)
        }
        _ => sambung(
            format!("{} triliun", susun(n / 1_000_000_000_000)),
            n % 1_000_000_000_000,
        ),
    }
}

fn sambung(kepala: String, sisa: u64) -> String {
    if sisa == 0 {
        kepala
    } else {
        format!("{} {}", kepala, susun(sisa))
    }
}

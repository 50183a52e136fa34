//! Rupiah amount rendering.

use super::terbilang::terbilang;

/// Dot-grouped currency display, e.g. "Rp 1.320.000".
pub fn format_rupiah(jumlah: u64) -> String {
    let digits = jumlah.to_string();
    let mut kelompok = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            kelompok.push('.');
        }
        kelompok.push(c);
    }
    format!("Rp {}", kelompok)
}

/// Currency display for an optional amount; absent values render as "Rp -"
/// rather than erroring.
pub fn format_rupiah_opt(jumlah: Option<u64>) -> String {
    match jumlah {
        Some(nilai) => format_rupiah(nilai),
        None => "Rp -".to_string(),
    }
}

/// Words rendering conventionally placed beside the numeral, e.g.
/// "satu juta tiga ratus dua puluh ribu rupiah".
pub fn terbilang_rupiah(jumlah: u64) -> String {
    format!("{} rupiah", terbilang(jumlah))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(500), "Rp 500");
        assert_eq!(format_rupiah(1500), "Rp 1.500");
        assert_eq!(format_rupiah(1_320_000), "Rp 1.320.000");
        assert_eq!(format_rupiah(1_000_000_000), "Rp 1.000.000.000");
    }

    #[test]
    fn test_format_rupiah_opt() {
        assert_eq!(format_rupiah_opt(Some(25_000)), "Rp 25.000");
        assert_eq!(format_rupiah_opt(None), "Rp -");
    }

    #[test]
    fn test_terbilang_rupiah() {
        assert_eq!(
            terbilang_rupiah(1_320_000),
            "satu juta tiga ratus dua puluh ribu rupiah"
        );
        assert_eq!(terbilang_rupiah(0), "nol rupiah");
    }
}

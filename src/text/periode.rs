//! Calendar month range calculation.

use chrono::NaiveDate;

use super::tanggal::tanggal_pendek;

/// First and last calendar day of a month with their short text renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Periode {
    pub awal: NaiveDate,
    pub akhir: NaiveDate,
    pub awal_teks: String,
    pub akhir_teks: String,
}

/// Resolve the range of a calendar month. The last day is computed as the
/// first day of the next month minus one day, so variable month lengths and
/// leap years come out of chrono's calendar arithmetic. Returns `None` when
/// `bulan` is outside 1..=12.
pub fn periode(tahun: i32, bulan: u32) -> Option<Periode> {
    let awal = NaiveDate::from_ymd_opt(tahun, bulan, 1)?;
    let berikut = if bulan == 12 {
        NaiveDate::from_ymd_opt(tahun + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(tahun, bulan + 1, 1)?
    };
    let akhir = berikut.pred_opt()?;

    Some(Periode {
        awal_teks: tanggal_pendek(awal),
        akhir_teks: tanggal_pendek(akhir),
        awal,
        akhir,
    })
}

//! Zodiac signs: 30° longitude bands and their calendar start dates.
//!
//! Banding is plain `floor(lon / 30)` from 0° Aries. The calendar dates are
//! the conventional sun-sign start days and do not depend on the year.

use crate::ephemeris::normalize_longitude;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignMeta {
    pub sign: ZodiacSign,
    pub name: &'static str,
    /// Longitude where the band begins
    pub start_longitude: f64,
    /// Calendar start as (month, day)
    pub start_month_day: (u32, u32),
}

const fn sign(
    name: &'static str,
    sign: ZodiacSign,
    start_longitude: f64,
    start_month_day: (u32, u32),
) -> SignMeta {
    SignMeta {
        sign,
        name,
        start_longitude,
        start_month_day,
    }
}

/// Sign table in band order.
pub const SIGNS: [SignMeta; 12] = [
    sign("Aries", ZodiacSign::Aries, 0.0, (3, 21)),
    sign("Taurus", ZodiacSign::Taurus, 30.0, (4, 20)),
    sign("Gemini", ZodiacSign::Gemini, 60.0, (5, 21)),
    sign("Cancer", ZodiacSign::Cancer, 90.0, (6, 21)),
    sign("Leo", ZodiacSign::Leo, 120.0, (7, 23)),
    sign("Virgo", ZodiacSign::Virgo, 150.0, (8, 23)),
    sign("Libra", ZodiacSign::Libra, 180.0, (9, 23)),
    sign("Scorpio", ZodiacSign::Scorpio, 210.0, (10, 23)),
    sign("Sagittarius", ZodiacSign::Sagittarius, 240.0, (11, 22)),
    sign("Capricorn", ZodiacSign::Capricorn, 270.0, (12, 22)),
    sign("Aquarius", ZodiacSign::Aquarius, 300.0, (1, 20)),
    sign("Pisces", ZodiacSign::Pisces, 330.0, (2, 19)),
];

impl ZodiacSign {
    pub fn meta(self) -> &'static SignMeta {
        &SIGNS[self.index()]
    }

    /// Position in band order, 0 = Aries
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.meta().name
    }

    /// The day this sign starts in `year`, if that date exists.
    pub fn start_date(self, year: i32) -> Option<NaiveDate> {
        let (month, day) = self.meta().start_month_day;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign whose band contains `longitude`. Non-finite input has no sign.
pub fn zodiac_sign(longitude: f64) -> Option<ZodiacSign> {
    if !longitude.is_finite() {
        return None;
    }
    let lon = normalize_longitude(longitude);
    let index = ((lon / 30.0).floor() as usize).min(SIGNS.len() - 1);
    Some(SIGNS[index].sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_in_band_order() {
        for (i, meta) in SIGNS.iter().enumerate() {
            assert_eq!(meta.sign.index(), i);
            assert_eq!(meta.start_longitude, i as f64 * 30.0);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(zodiac_sign(0.0), Some(ZodiacSign::Aries));
        assert_eq!(zodiac_sign(29.999), Some(ZodiacSign::Aries));
        assert_eq!(zodiac_sign(30.0), Some(ZodiacSign::Taurus));
        assert_eq!(zodiac_sign(-0.5), Some(ZodiacSign::Pisces));
        assert_eq!(zodiac_sign(f64::NAN), None);
    }

    #[test]
    fn test_start_dates_are_distinct() {
        let mut days: Vec<(u32, u32)> = SIGNS.iter().map(|m| m.start_month_day).collect();
        days.sort();
        days.dedup();
        assert_eq!(days.len(), 12);
    }
}

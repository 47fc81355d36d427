//! Brazilian ANBIMA holiday calendar.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};

use super::Calendar;
use crate::types::Date;

static BRAZIL_CALENDAR: OnceLock<BrazilCalendar> = OnceLock::new();

/// Brazilian national holiday calendar (ANBIMA).
///
/// This is the calendar used by the B3 exchange for DI futures
/// business-day counting. It covers:
///
/// ## Fixed Holidays
///
/// - New Year's Day (January 1)
/// - Tiradentes (April 21)
/// - Labour Day (May 1)
/// - Independence Day (September 7)
/// - Our Lady of Aparecida (October 12)
/// - All Souls' Day (November 2)
/// - Republic Proclamation Day (November 15)
/// - Black Awareness Day (November 20, national holiday since 2024)
/// - Christmas Day (December 25)
///
/// ## Easter-Movable Holidays
///
/// - Carnival Monday and Tuesday (48 and 47 days before Easter)
/// - Good Friday (2 days before Easter)
/// - Corpus Christi (60 days after Easter)
///
/// Holidays falling on a weekend are not substituted.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrazilCalendar;

impl BrazilCalendar {
    /// Get the global Brazil calendar instance.
    pub fn global() -> &'static BrazilCalendar {
        BRAZIL_CALENDAR.get_or_init(|| BrazilCalendar)
    }

    /// Returns true if the date is a Brazilian national holiday.
    fn is_national_holiday(&self, date: Date) -> bool {
        let year = date.year();
        let month = date.month();
        let day = date.day();

        match (month, day) {
            // New Year's Day
            (1, 1) => return true,
            // Tiradentes
            (4, 21) => return true,
            // Labour Day
            (5, 1) => return true,
            // Independence Day
            (9, 7) => return true,
            // Our Lady of Aparecida
            (10, 12) => return true,
            // All Souls' Day
            (11, 2) => return true,
            // Republic Proclamation Day
            (11, 15) => return true,
            // Black Awareness Day - national since 2024 (law 14.759/2023)
            (11, 20) if year >= 2024 => return true,
            // Christmas Day
            (12, 25) => return true,
            _ => {}
        }

        // Easter-movable holidays
        if let Some(easter) = easter_sunday(year) {
            let naive = date.as_naive_date();
            for offset in [-48i64, -47, -2, 60] {
                if Some(naive) == easter.checked_add_signed(chrono::Duration::days(offset)) {
                    return true;
                }
            }
        }

        false
    }
}

impl Calendar for BrazilCalendar {
    fn name(&self) -> &'static str {
        "Brazil ANBIMA"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date.is_weekend() {
            return false;
        }
        !self.is_national_holiday(date)
    }
}

/// Calculates Easter Sunday for a given year (Gregorian calendar).
///
/// Uses the anonymous Gregorian computus (Meeus/Jones/Butcher algorithm).
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

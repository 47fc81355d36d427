//! Settlement records for DI futures.
//!
//! The input dataset is produced by an external retrieval component and
//! consumed read-only here: one row per (reference date, contract) with
//! the contract code and settlement price.

use std::io::Read;

use log::warn;
use serde::{Deserialize, Serialize};

use curva_core::types::Date;

use crate::error::{CurveError, CurveResult};

/// One futures settlement observation.
///
/// `contract_code` encodes the maturity month and year in the B3
/// convention (month letter + two-digit year, e.g. `F26` for January
/// 2026); see [`contract_maturity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Trading date the settlement price was published for.
    pub reference_date: Date,
    /// Commodity code (`DI1` for interbank deposit futures).
    pub commodity: String,
    /// Contract maturity code (month letter + two-digit year).
    pub contract_code: String,
    /// Settlement price in contract currency.
    pub settlement_price: f64,
}

impl SettlementRecord {
    /// Decodes the nominal maturity date from the contract code.
    pub fn maturity(&self) -> CurveResult<Date> {
        contract_maturity(&self.contract_code)
    }
}

/// Decodes a B3 futures contract code into its nominal maturity date.
///
/// The code is a month letter (`F G H J K M N Q U V X Z` for January
/// through December) followed by a two-digit year. The nominal maturity
/// is the first calendar day of the delivery month; it still needs
/// business-day adjustment before any day counting.
///
/// # Example
///
/// ```rust
/// use curva_curves::records::contract_maturity;
/// use curva_core::types::Date;
///
/// let maturity = contract_maturity("F26").unwrap();
/// assert_eq!(maturity, Date::from_ymd(2026, 1, 1).unwrap());
/// ```
pub fn contract_maturity(code: &str) -> CurveResult<Date> {
    let code = code.trim();
    if code.len() != 3 {
        return Err(CurveError::bad_contract_code(code));
    }

    let mut chars = code.chars();
    let month_letter = chars.next().ok_or_else(|| CurveError::bad_contract_code(code))?;
    let month = month_from_letter(month_letter).ok_or_else(|| CurveError::bad_contract_code(code))?;

    let year_digits: String = chars.collect();
    if !year_digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CurveError::bad_contract_code(code));
    }
    let year: i32 = year_digits
        .parse()
        .map_err(|_| CurveError::bad_contract_code(code))?;

    Ok(Date::from_ymd(2000 + year, month, 1)?)
}

/// Maps a B3 month letter to its month number.
fn month_from_letter(letter: char) -> Option<u32> {
    match letter.to_ascii_uppercase() {
        'F' => Some(1),
        'G' => Some(2),
        'H' => Some(3),
        'J' => Some(4),
        'K' => Some(5),
        'M' => Some(6),
        'N' => Some(7),
        'Q' => Some(8),
        'U' => Some(9),
        'V' => Some(10),
        'X' => Some(11),
        'Z' => Some(12),
        _ => None,
    }
}

/// Loads settlement records from CSV.
///
/// Expects a header row with columns `reference_date`, `commodity`,
/// `contract_code`, `settlement_price`. Rows that fail to deserialize
/// (unparseable date, non-numeric price) are skipped with a warning
/// rather than aborting the batch.
///
/// # Errors
///
/// Returns `CurveError::Csv` only if the reader itself fails (e.g. a
/// malformed header); per-row problems never fail the load.
pub fn load_settlements<R: Read>(reader: R) -> CurveResult<Vec<SettlementRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (line, row) in csv_reader.deserialize::<SettlementRecord>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            Err(err) => match err.kind() {
                // Reader-level failures abort the whole load; the
                // stream is not trustworthy past this point.
                csv::ErrorKind::Io(_) | csv::ErrorKind::Utf8 { .. } => {
                    return Err(CurveError::Csv(err.to_string()));
                }
                _ => {
                    warn!("skipping malformed settlement row {}: {}", line + 2, err);
                }
            },
        }
    }

    Ok(records)
}

use crate::error::Error;
use crate::storage::PERCENT_100;

/// Calculate a × b / den rounded half up
///
/// Operands are non-negative; `den` must be positive.
///
/// Example:
/// - a: 2,000,000, b: 100.0000000%, den: 12,000,000
/// - result: 16.6666667% (16.66666666… rounds up)
pub fn mul_div_half_up(a: i128, b: i128, den: i128) -> Result<i128, Error> {
    if den <= 0 {
        return Err(Error::DivisionByZero);
    }

    a.checked_mul(b)
        .and_then(|product| product.checked_add(den / 2))
        .map(|rounded| rounded / den)
        .ok_or(Error::ArithmeticOverflow)
}

/// Share of `total` held by `part`, in percentage points scaled by SCALE
pub fn percentage_of(part: u64, total: u64) -> Result<i128, Error> {
    mul_div_half_up(i128::from(part), PERCENT_100, i128::from(total))
}

pub fn to_shares(value: i128) -> Result<u64, Error> {
    u64::try_from(value).map_err(|_| Error::ArithmeticOverflow)
}

pub fn add_shares(a: u64, b: u64) -> Result<u64, Error> {
    a.checked_add(b).ok_or(Error::ArithmeticOverflow)
}

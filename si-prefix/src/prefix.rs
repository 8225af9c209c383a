//! SI prefix symbols and their exponents of ten
//!
//! The table is ordered from yocto (`10^-24`) to yotta (`10^24`), one symbol
//! per multiple of three, with a space in the middle standing for the base
//! unit.

use crate::error::{SiError, SiResult};
use crate::util::scale_up;

/// SI prefix symbols, smallest first. `µ` is U+00B5 MICRO SIGN.
pub const SI_PREFIX_UNITS: [char; 17] = [
    'y', 'z', 'a', 'f', 'p', 'n', 'µ', 'm', ' ', 'k', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y',
];

/// Number of prefix levels on each side of the base unit
pub const PREFIX_LEVELS: i32 = (SI_PREFIX_UNITS.len() as i32 - 1) / 2;

/// Return the prefix symbol for an exponent of ten.
///
/// The exponent is floored to a multiple of three, so `prefix(4)` is `'k'`.
/// The base unit yields `' '`.
///
/// # Examples
/// ```
/// use si_prefix::prefix;
///
/// assert_eq!(prefix(3).unwrap(), 'k');
/// assert_eq!(prefix(-6).unwrap(), 'µ');
/// assert!(prefix(27).is_err());
/// ```
pub fn prefix(expof10: i32) -> SiResult<char> {
    let si_level = expof10.div_euclid(3);
    if si_level.abs() > PREFIX_LEVELS {
        return Err(SiError::ExponentOutOfRange { expof10 });
    }
    Ok(SI_PREFIX_UNITS[(si_level + PREFIX_LEVELS) as usize])
}

/// Check whether `symbol` is one of the SI prefix symbols (including `' '`)
pub fn is_prefix_symbol(symbol: char) -> bool {
    SI_PREFIX_UNITS.contains(&symbol)
}

/// Exponent of ten for a prefix symbol, e.g. 3 for `'k'` and -6 for `'µ'`
pub fn si_prefix_expof10(symbol: char) -> SiResult<i32> {
    SI_PREFIX_UNITS
        .iter()
        .position(|&c| c == symbol)
        .map(|index| 3 * (index as i32 - PREFIX_LEVELS))
        .ok_or(SiError::UnknownPrefix { symbol })
}

/// Multiplier for a prefix symbol, e.g. 1000 for `'k'`
pub fn si_prefix_scale(symbol: char) -> SiResult<f64> {
    si_prefix_expof10(symbol).map(|expof10| scale_up(1.0, expof10))
}

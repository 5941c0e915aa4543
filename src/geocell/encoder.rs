/// Base-32 symbols, indexed by a 5-bit group.
pub const GEOCELL_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Symbols emitted when the caller does not ask for a precision.
pub const DEFAULT_PRECISION: usize = 12;

const BITS_PER_SYMBOL: u8 = 5;

/// Closed interval narrowed by repeated bisection.
#[derive(Debug, Clone, Copy)]
struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Halve the interval towards `value` and return the chosen bit.
    /// Values exactly on the midpoint go to the lower half.
    fn bisect(&mut self, value: f64) -> u8 {
        let mid = (self.low + self.high) / 2.0;
        if value > mid {
            self.low = mid;
            1
        } else {
            self.high = mid;
            0
        }
    }
}

/// Encode a coordinate into a geocell of `precision` symbols.
///
/// Longitude and latitude are bisected alternately, longitude first. Every
/// five bits (most significant first) select one symbol of
/// [`GEOCELL_ALPHABET`]. Because bisection does not depend on where it
/// stops, a longer precision always extends a shorter one.
///
/// Coordinates are not range checked.
pub fn encode_geocell(latitude: f64, longitude: f64, precision: usize) -> String {
    let mut lat = Interval { low: -90.0, high: 90.0 };
    let mut lon = Interval { low: -180.0, high: 180.0 };

    let mut cell = String::with_capacity(precision);
    let mut even = true;
    let mut bits = 0u8;
    let mut acc = 0usize;

    while cell.len() < precision {
        let bit = if even {
            lon.bisect(longitude)
        } else {
            lat.bisect(latitude)
        };
        even = !even;

        acc = (acc << 1) | bit as usize;
        bits += 1;

        if bits == BITS_PER_SYMBOL {
            cell.push(GEOCELL_ALPHABET[acc] as char);
            bits = 0;
            acc = 0;
        }
    }

    cell
}

/// True when `s` is non-empty and every character belongs to
/// [`GEOCELL_ALPHABET`].
pub fn is_geocell(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| GEOCELL_ALPHABET.contains(&b))
}

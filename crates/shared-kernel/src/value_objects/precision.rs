// crates/shared-kernel/src/value_objects/precision.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of decimal digits kept when rounding averages.
///
/// `0` truncates to the integer part; any other value rounds half-to-even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Precision(u32);

/// Beyond this many digits an `f64` cannot carry the rounding anyway.
const MAX_EXACT_DIGITS: u32 = 17;

impl Precision {
    #[inline]
    pub const fn new(digits: u32) -> Self {
        Self(digits)
    }

    #[inline]
    pub const fn digits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn truncates(self) -> bool {
        self.0 == 0
    }

    /// Divides `numerator` by `denominator` and applies this precision.
    ///
    /// The rounding works on the exact rational value, so ties such as
    /// `9 / 4 = 2.25` go to the even neighbour (`2.2`). The quotient is never
    /// formed as a float first: `23 / 20` is exactly `1.15` and rounds to `1.2`,
    /// even though the nearest `f64` lies just below it. A zero denominator
    /// yields `0.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(self, numerator: u64, denominator: u64) -> f64 {
        if denominator == 0 {
            return 0.0;
        }
        if self.truncates() {
            return (numerator / denominator) as f64;
        }
        if self.0 > MAX_EXACT_DIGITS {
            return numerator as f64 / denominator as f64;
        }

        let scale = 10u128.pow(self.0);
        let denominator = u128::from(denominator);
        let scaled = u128::from(numerator) * scale;
        let mut quotient = scaled / denominator;
        let twice_rem = (scaled % denominator) * 2;

        if twice_rem > denominator || (twice_rem == denominator && quotient % 2 == 1) {
            quotient += 1;
        }

        quotient as f64 / scale as f64
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(1)
    }
}

impl From<u32> for Precision {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

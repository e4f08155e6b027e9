use std::fmt;

use serde::Serialize;

/// Greatest common divisor; `gcd(0, 0) == 0`.
pub(crate) fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// Non-negative rational kept as an exact integer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fraction {
    pub numerator: u128,
    pub denominator: u128,
}

impl Fraction {
    pub fn new(numerator: u128, denominator: u128) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Lowest terms. A zero numerator reduces to `0/1`.
    pub fn reduced(self) -> Self {
        if self.numerator == 0 {
            return Self::new(0, 1);
        }
        let common = gcd(self.numerator, self.denominator);
        Self::new(self.numerator / common, self.denominator / common)
    }

    pub fn is_unit(&self) -> bool {
        self.numerator == 1
    }

    /// `denominator / numerator` rounded to the nearest integer, halves rounding up.
    /// `None` for a zero numerator.
    pub fn one_in(&self) -> Option<u128> {
        if self.numerator == 0 {
            return None;
        }
        let quotient = self.denominator / self.numerator;
        let remainder = self.denominator % self.numerator;
        // remainder < numerator, so comparing against numerator - remainder cannot overflow.
        if remainder >= self.numerator - remainder {
            Some(quotient + 1)
        } else {
            Some(quotient)
        }
    }

    /// Lossy value for display and for comparing against observed frequencies.
    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

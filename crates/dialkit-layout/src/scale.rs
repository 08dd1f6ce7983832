//! Linear domain → range mapping.

use serde::{Deserialize, Serialize};

/// Linear scale mapping `[domain.0, domain.1]` onto `[range.0, range.1]`.
///
/// Inputs outside the domain extrapolate; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale. A zero-width domain maps every input to `range.0`.
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Input domain.
    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Output range.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        (r1 - r0).mul_add((value - d0) / span, r0)
    }
}

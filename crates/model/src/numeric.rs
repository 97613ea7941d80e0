//! Graded term encoding of `f64` values.
//!
//! A value is mapped to an order-preserving 64-bit key. The full-precision
//! term carries the whole key; each following term drops another
//! `precision_step` low-order bits, so a range can be covered by a few coarse
//! terms plus a handful of precise ones at its edges.
//!
//! Term layout: one byte holding the shift, then the big-endian bytes of
//! `key >> shift` that still carry information.

use crate::{error::EncodingError, term::Term};

pub const DEFAULT_PRECISION_STEP: u32 = 16;

const KEY_BITS: u32 = u64::BITS;
const SIGN_BIT: u64 = 1 << 63;

/// Maps `value` to a key whose unsigned order matches numeric order.
/// `-0.0` and `0.0` share a key, as do all NaN payloads.
pub fn sortable_key(value: f64) -> u64 {
    let value = if value == 0.0 {
        0.0
    } else if value.is_nan() {
        f64::NAN
    } else {
        value
    };

    let bits = value.to_bits();
    if bits & SIGN_BIT != 0 {
        !bits
    } else {
        bits | SIGN_BIT
    }
}

/// Full-precision term, used for equality filters on numeric columns.
pub fn leading_term(value: f64) -> Term {
    term_at(sortable_key(value), 0)
}

fn term_at(key: u64, shift: u32) -> Term {
    let significant = (KEY_BITS - shift).div_ceil(8) as usize;
    let bytes = (key >> shift).to_be_bytes();

    let mut term = Vec::with_capacity(1 + significant);
    term.push(shift as u8);
    term.extend_from_slice(&bytes[bytes.len() - significant..]);
    Term::new(term)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericEncoder {
    precision_step: u32,
}

impl NumericEncoder {
    pub fn new(precision_step: u32) -> Result<Self, EncodingError> {
        if precision_step == 0 || precision_step > KEY_BITS {
            return Err(EncodingError::InvalidPrecisionStep(precision_step));
        }
        Ok(Self { precision_step })
    }

    /// Terms from finest to coarsest. The first one equals [`leading_term`].
    pub fn encode(&self, value: f64) -> Vec<Term> {
        let key = sortable_key(value);
        (0..KEY_BITS)
            .step_by(self.precision_step as usize)
            .map(|shift| term_at(key, shift))
            .collect()
    }

    pub fn leading_term(&self, value: f64) -> Term {
        leading_term(value)
    }
}

impl Default for NumericEncoder {
    fn default() -> Self {
        Self {
            precision_step: DEFAULT_PRECISION_STEP,
        }
    }
}

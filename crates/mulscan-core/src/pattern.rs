//! Extraction of `mul(a,b)` instructions from text.
//!
//! A match is the exact shape `mul(` + digits + `,` + digits + `)` with no
//! whitespace or other separators. Anything else (`mul ( 1,2 )`, `mul(4,  5)`,
//! `mul(1,2,3)`, `mul[3,7]`) is ignored rather than treated as an error.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

use crate::error::ScanError;

static MUL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"mul\(([0-9]+),([0-9]+)\)").expect("mul pattern is valid"));

/// One `mul(a,b)` occurrence, borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mul<'a> {
    literal: &'a str,
    lhs: &'a str,
    rhs: &'a str,
    start: usize,
}

impl<'a> Mul<'a> {
    /// The full matched text, e.g. `mul(2,4)`.
    pub fn as_str(&self) -> &'a str {
        self.literal
    }

    /// Byte offset of the match within the scanned text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The two operands as integers.
    ///
    /// Digit runs are unbounded in the source, so a run wider than `u128`
    /// reports [`ScanError::Overflow`].
    pub fn operands(&self) -> Result<(u128, u128), ScanError> {
        let lhs = self
            .lhs
            .parse::<u128>()
            .map_err(|_| ScanError::overflow(self.literal))?;
        let rhs = self
            .rhs
            .parse::<u128>()
            .map_err(|_| ScanError::overflow(self.literal))?;
        Ok((lhs, rhs))
    }

    /// `a * b`, checked.
    pub fn product(&self) -> Result<u128, ScanError> {
        let (lhs, rhs) = self.operands()?;
        lhs.checked_mul(rhs)
            .ok_or_else(|| ScanError::overflow(self.literal))
    }
}

impl fmt::Display for Mul<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal)
    }
}

/// Lazy, left-to-right, non-overlapping iterator over the matches in a string.
pub struct MulMatches<'a> {
    inner: CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for MulMatches<'a> {
    type Item = Mul<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.inner.next()?;
        // Both groups are mandatory in the pattern.
        let whole = caps.get(0)?;
        Some(Mul {
            literal: whole.as_str(),
            lhs: caps.get(1)?.as_str(),
            rhs: caps.get(2)?.as_str(),
            start: whole.start(),
        })
    }
}

/// Find every `mul(a,b)` in `text`.
pub fn matches(text: &str) -> MulMatches<'_> {
    MulMatches {
        inner: MUL_REGEX.captures_iter(text),
    }
}

/// Add `mul.product()` to `sum`, reporting overflow against the match.
pub(crate) fn accumulate(sum: u128, mul: &Mul<'_>) -> Result<u128, ScanError> {
    sum.checked_add(mul.product()?)
        .ok_or_else(|| ScanError::overflow(mul.as_str()))
}

/// Sum of products over every match in `text`.
pub fn sum_products(text: &str) -> Result<u128, ScanError> {
    matches(text).try_fold(0u128, |sum, mul| accumulate(sum, &mul))
}

//! Character ramp lookup
//!
//! A ramp lists the output characters from darkest/densest to
//! lightest/sparsest. Cell luminance picks one of them.

use crate::error::{ConvertError, Result};

/// Sum of the integer BT.601 weights (299 + 587 + 114)
const WEIGHT_SCALE: u32 = 1000;

/// Largest weighted luminance: 255 * 1000
const MAX_WEIGHTED: u32 = 255 * WEIGHT_SCALE;

/// A validated, non-empty character ramp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiRamp {
    chars: Vec<char>,
}

impl AsciiRamp {
    /// Build a ramp from a string, one entry per Unicode scalar value
    pub fn new(ramp: &str) -> Result<Self> {
        let chars: Vec<char> = ramp.chars().collect();
        if chars.is_empty() {
            return Err(ConvertError::InvalidOptions(
                "ascii ramp must contain at least one character".to_string(),
            ));
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Ramp index for an RGB sample
    ///
    /// Computes `floor((L / 255) * (len - 1))` with the BT.601 luminance
    /// `L = 0.299 R + 0.587 G + 0.114 B`, in exact integer arithmetic so pure
    /// white always lands on the last entry.
    pub fn index_for(&self, rgb: [u8; 3]) -> usize {
        let [r, g, b] = rgb.map(u32::from);
        let weighted = 299 * r + 587 * g + 114 * b;
        let last = self.chars.len() - 1;

        // u64: weighted * last overflows u32 for ramps past ~16k entries
        let index = (u64::from(weighted) * last as u64) / u64::from(MAX_WEIGHTED);
        (index as usize).min(last)
    }

    /// Character for an RGB sample
    pub fn char_for(&self, rgb: [u8; 3]) -> char {
        self.chars[self.index_for(rgb)]
    }
}

//! Golomb-with-reserved-escape entropy encoder (`EncoderType::GolombZero`).
//!
//! Each zig-zag-folded residual below `outlier` is shifted up by one so
//! that the Golomb codeword for symbol `0` is never produced by an
//! in-range value, then coded via [`golomb::golomb_encode`]. That freed
//! codeword becomes the escape: it is followed by the zig-zag value as a
//! raw 16-bit field.

use crate::bitstream::BitWriter;
use crate::error::CmpResult;
use crate::golomb::{self, zigzag_encode};

const SAMPLE_BITS: u32 = 16;

#[derive(Debug, Clone, Copy)]
pub struct GolombZeroEncoder {
    g: u32,
    outlier: u32,
}

impl GolombZeroEncoder {
    pub fn probe(encoder_param: u16) -> CmpResult<()> {
        golomb::golomb_params(encoder_param as u32).map(|_| ())
    }

    /// `encoder_outlier`, when non-zero, overrides the default outlier; a
    /// zero value selects the formula-derived default.
    pub fn init(encoder_param: u16, encoder_outlier: u32) -> CmpResult<Self> {
        let g = encoder_param as u32;
        let (_, c) = golomb::golomb_params(g)?;
        let outlier = if encoder_outlier == 0 {
            default_outlier(g, c)
        } else {
            encoder_outlier
        };
        Ok(GolombZeroEncoder { g, outlier })
    }

    pub fn process(&mut self, residual: i32, writer: &mut BitWriter<'_>) -> CmpResult<()> {
        let mapped = zigzag_encode(residual);
        if mapped < self.outlier {
            golomb::golomb_encode(mapped + 1, self.g, writer)
        } else {
            golomb::golomb_encode(0, self.g, writer)?;
            writer.write(mapped, SAMPLE_BITS)
        }
    }
}

/// `v_low = c + n_bits*g - 1` is the highest mapped value whose Golomb
/// codeword still beats escaping to a raw `n_bits`-bit field; clamp it to
/// whatever a 32-bit codeword budget can actually reach.
fn default_outlier(g: u32, c: u32) -> u32 {
    let v_low = c
        .saturating_add(SAMPLE_BITS.saturating_mul(g))
        .saturating_sub(1);
    let max_symbol = golomb::golomb_max_symbol(g, 32);
    v_low.min(max_symbol).saturating_add(1)
}

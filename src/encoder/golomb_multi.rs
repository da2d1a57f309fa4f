//! Multi-level outlier-escape Golomb entropy encoder
//! (`EncoderType::GolombMulti`).
//!
//! Below `outlier`, a residual is zig-zag folded and Golomb coded
//! directly — the escape and in-range symbol spaces never collide, since
//! every in-range symbol is `< outlier` and every escape is
//! `outlier + level` for some `level >= 0`. At or above it, the
//! magnitude past `outlier` is bucketed into an escalating `level` and
//! written as `outlier + level` via Golomb, followed by the bucket's own
//! raw field.

use crate::bitstream::BitWriter;
use crate::error::CmpResult;
use crate::golomb::{self, zigzag_encode};

const MAX_CODEWORD_BITS: u32 = 32;
/// Escape levels 0..8 reserved past `outlier` when clamping its default.
const N_ESCAPE_SYMBOLS: u32 = 9;

#[derive(Debug, Clone, Copy)]
pub struct GolombMultiEncoder {
    g: u32,
    outlier: u32,
}

impl GolombMultiEncoder {
    pub fn probe(encoder_param: u16) -> CmpResult<()> {
        golomb::golomb_params(encoder_param as u32).map(|_| ())
    }

    /// `encoder_outlier` is clamped so the worst-case escape codeword (the
    /// Golomb prefix for `outlier + level` plus that level's raw field)
    /// still fits the 32-bit codeword budget.
    pub fn init(encoder_param: u16, encoder_outlier: u32) -> CmpResult<Self> {
        let g = encoder_param as u32;
        golomb::golomb_params(g)?;
        let max_outlier =
            golomb::golomb_max_symbol(g, MAX_CODEWORD_BITS).saturating_sub(N_ESCAPE_SYMBOLS);
        let outlier = encoder_outlier.min(max_outlier);
        Ok(GolombMultiEncoder { g, outlier })
    }

    pub fn process(&mut self, residual: i32, writer: &mut BitWriter<'_>) -> CmpResult<()> {
        let mapped = zigzag_encode(residual);
        if mapped < self.outlier {
            golomb::golomb_encode(mapped, self.g, writer)
        } else {
            let diff = mapped - self.outlier;
            let level = golomb::escape_level(diff);
            golomb::golomb_encode(self.outlier + level, self.g, writer)?;
            writer.write(diff, golomb::escape_field_bits(level))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CmpError;

    #[test]
    fn probe_rejects_zero_param() {
        assert_eq!(
            GolombMultiEncoder::probe(0).unwrap_err(),
            CmpError::ParamsInvalid
        );
    }

    #[test]
    fn small_residual_below_outlier_uses_plain_golomb() {
        let mut buf = vec![0u8; 16];
        let mut w = BitWriter::init(&mut buf).unwrap();
        let mut enc = GolombMultiEncoder::init(3, 4).unwrap();
        enc.process(0, &mut w).unwrap();
        w.flush().unwrap();
    }

    #[test]
    fn large_residual_escapes_through_levels_without_error() {
        let mut buf = vec![0u8; 32];
        let mut w = BitWriter::init(&mut buf).unwrap();
        let mut enc = GolombMultiEncoder::init(2, 4).unwrap();
        enc.process(i32::MAX / 2, &mut w).unwrap();
        w.flush().unwrap();
    }

    #[test]
    fn outlier_is_clamped_to_codeword_budget() {
        let enc = GolombMultiEncoder::init(3, 9_000_000).unwrap();
        assert!(enc.outlier < 9_000_000);
    }

    #[test]
    fn escape_level_rises_with_distance_past_outlier() {
        let mut buf = vec![0u8; 32];
        let mut w = BitWriter::init(&mut buf).unwrap();
        let mut enc = GolombMultiEncoder::init(4, 8).unwrap();
        enc.process(500, &mut w).unwrap();
        w.flush().unwrap();
    }
}

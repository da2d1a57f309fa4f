//! Entropy encoder dispatch (C5).
//!
//! A closed `enum` rather than a trait object: the three variants are
//! matched once when a pass starts, so the per-residual `process` call in
//! the hot loop is statically dispatched and monomorphized.

mod golomb_multi;
mod golomb_zero;
mod uncompressed;

use crate::bitstream::BitWriter;
use crate::error::CmpResult;
use crate::params::EncoderType;

use golomb_multi::GolombMultiEncoder;
use golomb_zero::GolombZeroEncoder;
use uncompressed::UncompressedEncoder;

/// A ready-to-use entropy encoder for one compression pass.
pub enum Encoder {
    Uncompressed(UncompressedEncoder),
    GolombZero(GolombZeroEncoder),
    GolombMulti(GolombMultiEncoder),
}

impl Encoder {
    /// Static validation of `(encoder_type, encoder_param)` without
    /// constructing a usable encoder. Called from [`crate::params::Params::validate`]
    /// so a bad parameter is rejected at context construction time, before
    /// any sample data exists.
    pub fn probe(encoder_type: EncoderType, encoder_param: u16) -> CmpResult<()> {
        match encoder_type {
            EncoderType::Uncompressed => UncompressedEncoder::probe(encoder_param),
            EncoderType::GolombZero => GolombZeroEncoder::probe(encoder_param),
            EncoderType::GolombMulti => GolombMultiEncoder::probe(encoder_param),
        }
    }

    /// Builds a stateful encoder for one pass.
    pub fn init(
        encoder_type: EncoderType,
        encoder_param: u16,
        encoder_outlier: u32,
    ) -> CmpResult<Self> {
        Ok(match encoder_type {
            EncoderType::Uncompressed => {
                Encoder::Uncompressed(UncompressedEncoder::init(encoder_param)?)
            }
            EncoderType::GolombZero => {
                Encoder::GolombZero(GolombZeroEncoder::init(encoder_param, encoder_outlier)?)
            }
            EncoderType::GolombMulti => {
                Encoder::GolombMulti(GolombMultiEncoder::init(encoder_param, encoder_outlier)?)
            }
        })
    }

    /// Encodes one residual into `writer`.
    pub fn process(&mut self, residual: i32, writer: &mut BitWriter<'_>) -> CmpResult<()> {
        match self {
            Encoder::Uncompressed(e) => e.process(residual, writer),
            Encoder::GolombZero(e) => e.process(residual, writer),
            Encoder::GolombMulti(e) => e.process(residual, writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_accepts_every_type_with_a_sane_param() {
        Encoder::probe(EncoderType::Uncompressed, 0).unwrap();
        Encoder::probe(EncoderType::GolombZero, 4).unwrap();
        Encoder::probe(EncoderType::GolombMulti, 4).unwrap();
    }

    #[test]
    fn init_and_process_each_variant() {
        let mut buf = vec![0u8; 64];
        let mut w = BitWriter::init(&mut buf).unwrap();

        let mut uncompressed = Encoder::init(EncoderType::Uncompressed, 0, 0).unwrap();
        uncompressed.process(42, &mut w).unwrap();

        let mut zero = Encoder::init(EncoderType::GolombZero, 3, 0).unwrap();
        zero.process(-7, &mut w).unwrap();

        let mut multi = Encoder::init(EncoderType::GolombMulti, 3, 4).unwrap();
        multi.process(100, &mut w).unwrap();

        w.flush().unwrap();
    }
}

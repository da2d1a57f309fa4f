//! Pass-through entropy encoder: every residual is stored as a raw 16-bit
//! two's-complement field. Used whenever `EncoderType::Uncompressed` is
//! selected, and as the emergency fallback frame body (§4.7 step 10).

use crate::bitstream::BitWriter;
use crate::error::CmpResult;

const RAW_BITS: u32 = 16;

#[derive(Debug, Clone, Copy)]
pub struct UncompressedEncoder;

impl UncompressedEncoder {
    /// `encoder_param` is unused by this encoder; any value is accepted.
    pub fn probe(_encoder_param: u16) -> CmpResult<()> {
        Ok(())
    }

    pub fn init(_encoder_param: u16) -> CmpResult<Self> {
        Ok(UncompressedEncoder)
    }

    pub fn process(&mut self, residual: i32, writer: &mut BitWriter<'_>) -> CmpResult<()> {
        writer.write((residual as i16) as u16 as u32, RAW_BITS)
    }
}

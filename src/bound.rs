//! Worst-case sizing (C8): how large a destination or scratch buffer a
//! caller must provide before calling into [`crate::context`].

use crate::encoder::Encoder;
use crate::error::{CmpError, CmpResult};
use crate::golomb;
use crate::header::MAX_HEADER_SIZE;
use crate::params::{EncoderType, Params, Ruleset};
use crate::preprocess;

const SAMPLE_BITS: u32 = 16;
/// Worst case per sample for either Golomb encoder: a 32-bit codeword
/// plus a 16-bit raw escape field (§4.5).
const GOLOMB_WORST_CASE_BITS: u32 = 32 + SAMPLE_BITS;
const CHECKSUM_TRAILER_SIZE: usize = 4;
const COMPRESSED_SIZE_FIELD_MAX: u64 = (1 << 24) - 1;

fn ruleset_upper_bound_bits(ruleset: &Ruleset) -> CmpResult<u32> {
    match ruleset.encoder_type {
        EncoderType::Uncompressed => Ok(SAMPLE_BITS),
        EncoderType::GolombZero | EncoderType::GolombMulti => {
            golomb::golomb_params(ruleset.encoder_param as u32)?;
            Ok(GOLOMB_WORST_CASE_BITS)
        }
    }
}

/// Largest frame [`crate::context::CompressionContext::compress`] could
/// ever produce for `src_size` bytes of samples under `params`, including
/// the header and (if enabled) the checksum trailer.
pub fn compress_bound(params: &Params, src_size: usize) -> CmpResult<usize> {
    if src_size == 0 || src_size % 2 != 0 {
        return Err(CmpError::SourceSizeWrong);
    }
    params.validate()?;

    let sample_count = (src_size / 2) as u64;
    let mut worst_bits_per_sample = ruleset_upper_bound_bits(&params.primary)? as u64;
    if params.secondary_iterations > 0 {
        worst_bits_per_sample =
            worst_bits_per_sample.max(ruleset_upper_bound_bits(&params.secondary)? as u64);
    }

    let payload_bits = sample_count
        .checked_mul(worst_bits_per_sample)
        .ok_or(CmpError::ParamsInvalid)?;
    let payload_bytes = (payload_bits + 7) / 8;

    let mut total = payload_bytes
        .checked_add(MAX_HEADER_SIZE as u64)
        .ok_or(CmpError::ParamsInvalid)?;
    if params.checksum_enabled {
        total = total
            .checked_add(CHECKSUM_TRAILER_SIZE as u64)
            .ok_or(CmpError::ParamsInvalid)?;
    }

    if total > COMPRESSED_SIZE_FIELD_MAX + MAX_HEADER_SIZE as u64 + CHECKSUM_TRAILER_SIZE as u64 {
        return Err(CmpError::HeaderCompressedTooLarge);
    }
    Ok(total as usize)
}

/// Scratch `i32` work-buffer size, in bytes, a caller must supply to
/// [`crate::context::CompressionContext::init`] for `src_size` bytes of
/// samples under `params`. Does not include the separately-sized model
/// array used by a `Model` secondary ruleset.
pub fn work_buf_size(params: &Params, src_size: usize) -> CmpResult<usize> {
    if src_size == 0 || src_size % 2 != 0 {
        return Err(CmpError::SourceSizeWrong);
    }
    let sample_count = src_size / 2;
    let primary_elems = preprocess::work_buf_size(params.primary.preprocessing, sample_count);
    let secondary_elems = if params.secondary_iterations > 0 {
        preprocess::work_buf_size(params.secondary.preprocessing, sample_count)
    } else {
        0
    };
    let elems = primary_elems.max(secondary_elems);
    elems
        .checked_mul(std::mem::size_of::<i32>())
        .ok_or(CmpError::ParamsInvalid)
}

#[allow(dead_code)]
fn _probe_every_encoder_is_reachable() -> CmpResult<()> {
    Encoder::probe(EncoderType::Uncompressed, 0)
}

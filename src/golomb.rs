//! Golomb codeword arithmetic shared by the `golomb_zero` and
//! `golomb_multi` entropy encoders (§4.5).
//!
//! Every residual is first mapped onto a non-negative integer by zig-zag
//! folding. The Golomb code itself is the general (non-power-of-two)
//! form: for parameter `g`, `l = floor(log2 g)` and `c = 2^(l+1) - g`; a
//! symbol `s` is split into quotient `q = s / g` (unary, `q` ones then a
//! `0` stop bit) and remainder `r = s % g`, which is written in `l` bits
//! when `r < c` or as `r + c` in `l + 1` bits otherwise.

use crate::bitstream::BitWriter;
use crate::error::{CmpError, CmpResult};

/// Folds a signed residual onto the non-negative integers: `0, -1, 1, -2,
/// 2, ...` → `0, 1, 2, 3, 4, ...`.
#[inline]
pub fn zigzag_encode(v: i32) -> u32 {
    ((v << 1) ^ (v >> 31)) as u32
}

/// Inverse of [`zigzag_encode`].
#[inline]
pub fn zigzag_decode(u: u32) -> i32 {
    ((u >> 1) as i32) ^ -((u & 1) as i32)
}

/// `(l, c)` for Golomb parameter `g`: `l = floor(log2 g)`,
/// `c = 2^(l+1) - g`. `g` must be non-zero.
pub fn golomb_params(g: u32) -> CmpResult<(u32, u32)> {
    if g == 0 {
        return Err(CmpError::ParamsInvalid);
    }
    let l = 31 - g.leading_zeros();
    let c = (1u32 << (l + 1)) - g;
    Ok((l, c))
}

/// Writes `symbol`'s general Golomb codeword for parameter `g`.
pub fn golomb_encode(symbol: u32, g: u32, writer: &mut BitWriter<'_>) -> CmpResult<()> {
    let (l, c) = golomb_params(g)?;
    let q = symbol / g;
    let r = symbol % g;
    write_unary(writer, q)?;
    if r < c {
        if l > 0 {
            writer.write(r, l)?;
        }
    } else {
        writer.write(r + c, l + 1)?;
    }
    Ok(())
}

/// Bit length of `symbol`'s Golomb codeword for parameter `g`, without
/// emitting it. Used for worst-case sizing.
pub fn golomb_codeword_len(symbol: u32, g: u32) -> CmpResult<u32> {
    let (l, c) = golomb_params(g)?;
    let q = symbol / g;
    let r = symbol % g;
    let remainder_bits = if r < c { l } else { l + 1 };
    Ok(q + 1 + remainder_bits)
}

fn write_unary(writer: &mut BitWriter<'_>, q: u32) -> CmpResult<()> {
    let mut remaining = q;
    while remaining >= 32 {
        writer.write(0xFFFF_FFFF, 32)?;
        remaining -= 32;
    }
    if remaining > 0 {
        writer.write((1u32 << remaining) - 1, remaining)?;
    }
    writer.write(0, 1)
}

/// Largest symbol whose Golomb codeword for parameter `g` is no wider than
/// `max_bits`. `g` must be non-zero; the caller is expected to have already
/// validated it through [`golomb_params`].
pub fn golomb_max_symbol(g: u32, max_bits: u32) -> u32 {
    let l = 31 - g.leading_zeros();
    let q_max = max_bits.saturating_sub(l).saturating_sub(2);
    q_max.saturating_mul(g).saturating_add(g.saturating_sub(1))
}

/// `golomb_multi`'s escape level for an out-of-range magnitude `diff`:
/// `0` below `4`, otherwise `floor(log2(diff)) / 2`.
pub fn escape_level(diff: u32) -> u32 {
    if diff < 4 {
        0
    } else {
        (31 - diff.leading_zeros()) / 2
    }
}

/// Raw field width, in bits, for a value escaped at `level`: `2*(level+1)`.
pub fn escape_field_bits(level: u32) -> u32 {
    2 * (level + 1)
}

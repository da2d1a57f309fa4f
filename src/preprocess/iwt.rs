//! Integer wavelet transform preprocessor (in-place multi-level lifting
//! scheme, Solomon *Data Compression* 4e eq. 5.24).
//!
//! Unlike [`super::diff::DiffPass`] or [`super::model::ModelPass`], the
//! transform is not causal in sample order and coefficients are left in
//! place rather than deinterleaved into separate bands: the stride
//! doubles from 1 until it reaches the block length, and each level
//! updates only the positions that are multiples of its stride, leaving
//! every other position exactly as the previous, smaller-stride level
//! left it. The whole block is lifted once in `init` and cached in the
//! caller-supplied work buffer; `process` just plays the coefficients
//! back.

use crate::error::{CmpError, CmpResult};
use crate::sample::SampleReader;

#[derive(Debug)]
pub struct IwtPass<'w> {
    coeffs: &'w mut [i32],
}

impl<'w> IwtPass<'w> {
    /// One `i32` coefficient per input sample.
    pub fn work_buf_size(sample_count: usize) -> usize {
        sample_count
    }

    /// Lifts `reader`'s full sample block into `work_buf` (which must have
    /// length `>= reader.len()`), then hands coefficient playback off to
    /// `process`.
    pub fn init(reader: &SampleReader, work_buf: &'w mut [i32]) -> CmpResult<Self> {
        let n = reader.len();
        if work_buf.len() < n {
            return Err(CmpError::WorkBufTooSmall);
        }
        let coeffs = &mut work_buf[..n];
        for i in 0..n {
            coeffs[i] = reader.get(i) as i32;
        }

        let mut stride = 1usize;
        while stride < n {
            lift_level(coeffs, n, stride);
            stride *= 2;
        }

        Ok(IwtPass { coeffs })
    }

    pub fn process(&mut self, _reader: &SampleReader, i: usize) -> i32 {
        self.coeffs[i]
    }
}

/// Lifts every position that is a multiple of `s` and less than `n`,
/// leaving finer-grained positions (already finalized by smaller strides)
/// untouched. Odd-numbered positions within the active set are updated
/// first from the level's pre-update neighbors, then even-numbered
/// positions are updated from the just-lifted odd values.
fn lift_level(buf: &mut [i32], n: usize, s: usize) {
    let active_len = (n - 1) / s + 1;
    if active_len <= 1 {
        return;
    }

    let mut j = 1;
    while j < active_len {
        let k = j * s;
        let left = buf[k - s];
        buf[k] = if k + s < n {
            let right = buf[k + s];
            buf[k] - (left + right).div_euclid(2)
        } else {
            buf[k] - left
        };
        j += 2;
    }

    let mut j = 0;
    while j < active_len {
        let k = j * s;
        if j == 0 {
            let right = buf[k + s];
            buf[k] += right.div_euclid(2);
        } else if k + s < n {
            let left = buf[k - s];
            let right = buf[k + s];
            buf[k] += (left + right).div_euclid(4);
        } else {
            let left = buf[k - s];
            buf[k] += left.div_euclid(2);
        }
        j += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s5_scenario_matches_expected_coefficients() {
        let data: [u16; 8] = [
            (-3i16) as u16,
            2,
            (-1i16) as u16,
            3,
            (-2i16) as u16,
            5,
            0,
            7,
        ];
        let reader = SampleReader::from_u16(&data);
        let mut work_buf = vec![0i32; 8];
        let mut pass = IwtPass::init(&reader, &mut work_buf).unwrap();
        let coeffs: Vec<i32> = (0..8).map(|i| pass.process(&reader, i)).collect();
        assert_eq!(coeffs, vec![0, 4, 2, 5, 1, 6, 3, 7]);
    }

    #[test]
    fn two_sample_block_uses_tail_and_leading_cases() {
        let data: [u16; 2] = [10, 12];
        let reader = SampleReader::from_u16(&data);
        let mut work_buf = vec![0i32; 2];
        let mut pass = IwtPass::init(&reader, &mut work_buf).unwrap();
        let coeffs: Vec<i32> = (0..2).map(|i| pass.process(&reader, i)).collect();
        // detail = 12-10 = 2; approx = 10 + 2/2 = 11
        assert_eq!(coeffs, vec![11, 2]);
    }

    #[test]
    fn single_sample_is_identity() {
        let data: [u16; 1] = [42];
        let reader = SampleReader::from_u16(&data);
        let mut work_buf = vec![0i32; 1];
        let mut pass = IwtPass::init(&reader, &mut work_buf).unwrap();
        assert_eq!(pass.process(&reader, 0), 42);
    }

    #[test]
    fn work_buf_too_small_is_rejected() {
        let data: [u16; 4] = [1, 2, 3, 4];
        let reader = SampleReader::from_u16(&data);
        let mut work_buf = vec![0i32; 2];
        assert_eq!(
            IwtPass::init(&reader, &mut work_buf).unwrap_err(),
            CmpError::WorkBufTooSmall
        );
    }
}

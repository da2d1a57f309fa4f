//! 32-bit content checksum over a sample stream.
//!
//! Thin wrapper around the `xxhash-rust` crate's streaming XXH32 state,
//! mirroring the teacher's own `xxhash.rs` wrapper. The digest is computed
//! from a [`SampleReader`](crate::sample::SampleReader) rather than a raw
//! byte slice so that the three physical input layouts (`U16`, `I16`,
//! `I16_IN_I32`) produce an identical checksum for the same logical
//! sample sequence.

use xxhash_rust::xxh32::Xxh32;

use crate::sample::SampleReader;

/// Seed used for every checksum computed by this crate.
pub const CHECKSUM_SEED: u32 = 0;

/// Computes the 32-bit digest of `reader`'s logical sample sequence,
/// expressed as big-endian 16-bit words.
pub fn sample_checksum(reader: &SampleReader) -> u32 {
    let mut state = Xxh32::new(CHECKSUM_SEED);
    for i in 0..reader.len() {
        let sample = reader.get(i) as u16;
        state.update(&sample.to_be_bytes());
    }
    state.digest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{Layout, SampleReader};

    #[test]
    fn checksum_is_deterministic() {
        let data: [u16; 3] = [1, 2, 3];
        let r = SampleReader::from_u16(&data);
        assert_eq!(sample_checksum(&r), sample_checksum(&r));
    }

    #[test]
    fn checksum_matches_across_physical_layouts() {
        let u16_data: [u16; 4] = [0, 1, 0xFFFF, 0x8000];
        let i16_data: [i16; 4] = [0, 1, -1, i16::MIN];
        let i32_data: [i32; 4] = [0, 1, 0x1234_FFFF_u32 as i32, 0x5678_8000_u32 as i32];

        let r_u16 = SampleReader::from_u16(&u16_data);
        let r_i16 = SampleReader::from_i16(&i16_data);
        let r_i32 = SampleReader::from_i16_in_i32(&i32_data);

        assert_eq!(sample_checksum(&r_u16), sample_checksum(&r_i16));
        assert_eq!(sample_checksum(&r_u16), sample_checksum(&r_i32));
    }

    #[test]
    fn empty_stream_checksum_is_seed_dependent_constant() {
        let data: [u16; 0] = [];
        let r = SampleReader::from_u16(&data);
        // XXH32("", 0) is a well-known constant.
        assert_eq!(sample_checksum(&r), 0x02CC_5D05);
    }

    #[test]
    fn checksum_changes_with_content() {
        let a = SampleReader::from_u16(&[1, 2, 3]);
        let b = SampleReader::from_u16(&[1, 2, 4]);
        assert_ne!(sample_checksum(&a), sample_checksum(&b));
    }

    #[allow(dead_code)]
    fn _layout_exhaustive_match(l: Layout) -> &'static str {
        match l {
            Layout::U16 => "u16",
            Layout::I16 => "i16",
            Layout::I16InI32 => "i16_in_i32",
        }
    }
}

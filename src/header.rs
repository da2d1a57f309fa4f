//! Frame header codec (C3): fixed 16-byte header plus an optional 6-byte
//! extension, serialized/deserialized per the bit layout in §4.3.

use crate::bitstream::BitWriter;
use crate::error::{CmpError, CmpResult};
use crate::params::{EncoderType, Preprocessing};

/// Size in bytes of the fixed header.
pub const FIXED_HEADER_SIZE: usize = 16;
/// Size in bytes of the extended header. 2 bytes wider than its packed
/// field width so the payload that follows it stays 8-byte aligned,
/// matching [`FIXED_HEADER_SIZE`]'s own alignment.
pub const EXTENDED_HEADER_SIZE: usize = 8;
/// Largest header this implementation ever emits (fixed + extended).
pub const MAX_HEADER_SIZE: usize = FIXED_HEADER_SIZE + EXTENDED_HEADER_SIZE;

const COMPRESSED_SIZE_MAX: u32 = (1 << 24) - 1;
const ORIGINAL_SIZE_MAX: u32 = (1 << 24) - 1;
const IDENTIFIER_MAX: u64 = (1 << 48) - 1;

/// Library version stamped into every header's `version_id` field.
pub const VERSION_ID: u16 = 1;

/// Fixed 16-byte frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHeader {
    pub version_flag: bool,
    pub version_id: u16,
    pub compressed_size: u32,
    pub original_size: u32,
    pub identifier: u64,
    pub sequence_number: u8,
    pub preprocessing: Preprocessing,
    pub checksum_enabled: bool,
    pub encoder_type: EncoderType,
}

/// Optional 6-byte header extension, present whenever `preprocessing !=
/// None` or `encoder_type != Uncompressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedHeader {
    pub model_rate: u8,
    pub encoder_param: u16,
    pub encoder_outlier: u32,
}

const EXTENDED_RESERVED_BITS: u32 = 16;

/// Whether a frame with this preprocessing/encoder combination carries an
/// extended header.
pub fn needs_extended_header(preprocessing: Preprocessing, encoder_type: EncoderType) -> bool {
    preprocessing != Preprocessing::None || encoder_type != EncoderType::Uncompressed
}

impl FixedHeader {
    /// Writes this header through `writer`, which must be positioned at
    /// the start of the destination buffer.
    pub fn serialize(&self, writer: &mut BitWriter<'_>) -> CmpResult<()> {
        if self.compressed_size > COMPRESSED_SIZE_MAX {
            return Err(CmpError::HeaderCompressedTooLarge);
        }
        if self.original_size > ORIGINAL_SIZE_MAX {
            return Err(CmpError::HeaderOriginalTooLarge);
        }
        if self.identifier > IDENTIFIER_MAX {
            return Err(CmpError::TimestampInvalid);
        }

        writer.write(self.version_flag as u32, 1)?;
        writer.write(self.version_id as u32, 15)?;
        writer.write(self.compressed_size, 24)?;
        writer.write(self.original_size, 24)?;
        writer.write64(self.identifier, 48)?;
        writer.write(self.sequence_number as u32, 8)?;
        writer.write(self.preprocessing.code() as u32, 4)?;
        writer.write(self.checksum_enabled as u32, 1)?;
        writer.write(self.encoder_type.code() as u32, 3)?;
        Ok(())
    }

    /// Extracts the fixed header from `src`. Returns `FIXED_HEADER_SIZE`
    /// on success.
    pub fn deserialize(src: &[u8]) -> CmpResult<(FixedHeader, usize)> {
        if src.len() < FIXED_HEADER_SIZE {
            return Err(CmpError::DestinationTooSmall);
        }
        let b = src;
        let version_flag = (b[0] >> 7) & 0x1 != 0;
        let version_id = (((b[0] as u16) & 0x7F) << 8) | b[1] as u16;
        let compressed_size = ((b[2] as u32) << 16) | ((b[3] as u32) << 8) | b[4] as u32;
        let original_size = ((b[5] as u32) << 16) | ((b[6] as u32) << 8) | b[7] as u32;
        let identifier = ((b[8] as u64) << 40)
            | ((b[9] as u64) << 32)
            | ((b[10] as u64) << 24)
            | ((b[11] as u64) << 16)
            | ((b[12] as u64) << 8)
            | b[13] as u64;
        let sequence_number = b[14];
        let preprocessing = Preprocessing::from_code((b[15] >> 4) & 0xF)?;
        let checksum_enabled = (b[15] >> 3) & 0x1 != 0;
        let encoder_type = EncoderType::from_code(b[15] & 0x7)?;

        Ok((
            FixedHeader {
                version_flag,
                version_id,
                compressed_size,
                original_size,
                identifier,
                sequence_number,
                preprocessing,
                checksum_enabled,
                encoder_type,
            },
            FIXED_HEADER_SIZE,
        ))
    }
}

impl ExtendedHeader {
    pub fn serialize(&self, writer: &mut BitWriter<'_>) -> CmpResult<()> {
        writer.write(self.model_rate as u32, 8)?;
        writer.write(self.encoder_param as u32, 16)?;
        writer.write(self.encoder_outlier, 24)?;
        writer.write(0, EXTENDED_RESERVED_BITS)?;
        Ok(())
    }

    /// Extracts the extended header from `src`, which must start at byte
    /// offset `FIXED_HEADER_SIZE` of the frame (i.e. `src` here is the
    /// whole frame buffer, not just the extension bytes).
    pub fn deserialize(src: &[u8]) -> CmpResult<(ExtendedHeader, usize)> {
        if src.len() < FIXED_HEADER_SIZE + EXTENDED_HEADER_SIZE {
            return Err(CmpError::DestinationTooSmall);
        }
        let b = &src[FIXED_HEADER_SIZE..];
        let model_rate = b[0];
        let encoder_param = ((b[1] as u16) << 8) | b[2] as u16;
        let encoder_outlier = ((b[3] as u32) << 16) | ((b[4] as u32) << 8) | b[5] as u32;
        Ok((
            ExtendedHeader {
                model_rate,
                encoder_param,
                encoder_outlier,
            },
            EXTENDED_HEADER_SIZE,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fixed() -> FixedHeader {
        FixedHeader {
            version_flag: true,
            version_id: VERSION_ID,
            compressed_size: 20,
            original_size: 4,
            identifier: 0x0001_0203_0405,
            sequence_number: 3,
            preprocessing: Preprocessing::Diff,
            checksum_enabled: true,
            encoder_type: EncoderType::GolombZero,
        }
    }

    #[test]
    fn fixed_header_roundtrips() {
        let mut buf = vec![0u8; 32];
        let header = sample_fixed();
        {
            let mut w = BitWriter::init(&mut buf).unwrap();
            header.serialize(&mut w).unwrap();
            w.flush().unwrap();
        }
        let (decoded, size) = FixedHeader::deserialize(&buf).unwrap();
        assert_eq!(size, FIXED_HEADER_SIZE);
        assert_eq!(decoded, header);
    }

    #[test]
    fn extended_header_roundtrips() {
        let mut buf = vec![0u8; 32];
        let fixed = sample_fixed();
        let ext = ExtendedHeader {
            model_rate: 9,
            encoder_param: 300,
            encoder_outlier: 0x00FF_EE,
        };
        {
            let mut w = BitWriter::init(&mut buf).unwrap();
            fixed.serialize(&mut w).unwrap();
            ext.serialize(&mut w).unwrap();
            w.flush().unwrap();
        }
        let (decoded, size) = ExtendedHeader::deserialize(&buf).unwrap();
        assert_eq!(size, EXTENDED_HEADER_SIZE);
        assert_eq!(decoded, ext);
    }

    #[test]
    fn compressed_size_over_24_bits_is_rejected() {
        let mut buf = vec![0u8; 32];
        let mut header = sample_fixed();
        header.compressed_size = 1 << 24;
        let mut w = BitWriter::init(&mut buf).unwrap();
        assert_eq!(
            header.serialize(&mut w).unwrap_err(),
            CmpError::HeaderCompressedTooLarge
        );
    }

    #[test]
    fn original_size_over_24_bits_is_rejected() {
        let mut buf = vec![0u8; 32];
        let mut header = sample_fixed();
        header.original_size = 1 << 24;
        let mut w = BitWriter::init(&mut buf).unwrap();
        assert_eq!(
            header.serialize(&mut w).unwrap_err(),
            CmpError::HeaderOriginalTooLarge
        );
    }

    #[test]
    fn identifier_over_48_bits_is_rejected() {
        let mut buf = vec![0u8; 32];
        let mut header = sample_fixed();
        header.identifier = 1 << 48;
        let mut w = BitWriter::init(&mut buf).unwrap();
        assert_eq!(header.serialize(&mut w).unwrap_err(), CmpError::TimestampInvalid);
    }

    #[test]
    fn deserialize_rejects_short_buffer() {
        let buf = vec![0u8; 15];
        assert_eq!(
            FixedHeader::deserialize(&buf).unwrap_err(),
            CmpError::DestinationTooSmall
        );
    }

    #[test]
    fn extended_deserialize_rejects_short_buffer() {
        let buf = vec![0u8; 20];
        assert_eq!(
            ExtendedHeader::deserialize(&buf).unwrap_err(),
            CmpError::DestinationTooSmall
        );
    }

    #[test]
    fn needs_extended_header_matches_spec() {
        assert!(!needs_extended_header(
            Preprocessing::None,
            EncoderType::Uncompressed
        ));
        assert!(needs_extended_header(
            Preprocessing::Diff,
            EncoderType::Uncompressed
        ));
        assert!(needs_extended_header(
            Preprocessing::None,
            EncoderType::GolombZero
        ));
    }

    #[test]
    fn s1_uncompressed_header_has_no_extension() {
        let header = FixedHeader {
            version_flag: true,
            version_id: VERSION_ID,
            compressed_size: 20,
            original_size: 4,
            identifier: 0,
            sequence_number: 0,
            preprocessing: Preprocessing::None,
            checksum_enabled: false,
            encoder_type: EncoderType::Uncompressed,
        };
        assert!(!needs_extended_header(
            header.preprocessing,
            header.encoder_type
        ));
    }
}

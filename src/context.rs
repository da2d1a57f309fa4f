//! Multi-pass compression context (C7): owns the sequence counter, the
//! identifier clock, and the model state that must persist across frames,
//! and drives one frame's header/body/checksum layout per `compress` call.

use crate::bitstream::BitWriter;
use crate::checksum::sample_checksum;
use crate::clock::{Clock, MonotoneClock};
use crate::encoder::Encoder;
use crate::error::{CmpError, CmpResult};
use crate::header::{needs_extended_header, ExtendedHeader, FixedHeader, EXTENDED_HEADER_SIZE, FIXED_HEADER_SIZE};
use crate::params::{Params, Ruleset};
use crate::preprocess::{self, Preprocessor};
use crate::sample::SampleReader;

const CHECKSUM_TRAILER_SIZE: usize = 4;

/// Drives repeated calls to `compress` over a stream of frames, carrying
/// the sequence number, reset-cycle identifier, and (for a `Model`
/// secondary ruleset) the running prediction array between them.
pub struct CompressionContext<C: Clock = MonotoneClock> {
    params: Params,
    sequence_number: u8,
    identifier: u64,
    model_size: usize,
    clock: C,
    model: Vec<i32>,
}

impl CompressionContext<MonotoneClock> {
    /// Builds a context with the default monotone-counter clock, seeded
    /// at zero.
    pub fn new(params: Params) -> CmpResult<Self> {
        Self::with_clock(params, MonotoneClock::default())
    }
}

impl<C: Clock> CompressionContext<C> {
    pub fn with_clock(params: Params, mut clock: C) -> CmpResult<Self> {
        params.validate()?;
        let identifier = clock.next_identifier();
        Ok(CompressionContext {
            params,
            sequence_number: 0,
            identifier,
            model_size: 0,
            clock,
            model: Vec::new(),
        })
    }

    /// Restarts sequence numbering, drops any accumulated model state, and
    /// captures a fresh identifier for the new reset cycle.
    pub fn reset(&mut self) {
        self.sequence_number = 0;
        self.model_size = 0;
        self.model.clear();
        self.identifier = self.clock.next_identifier();
    }

    fn model_tracking_enabled(&self) -> bool {
        self.params.secondary.preprocessing == crate::params::Preprocessing::Model
            && self.params.secondary_iterations > 0
    }

    /// Compresses one frame of samples from `reader` into `dst`, returning
    /// the number of bytes written. `work_buf` is scratch space sized per
    /// [`crate::bound::work_buf_size`].
    pub fn compress(
        &mut self,
        reader: &SampleReader,
        work_buf: &mut [i32],
        dst: &mut [u8],
    ) -> CmpResult<usize> {
        reader.validate_nonempty()?;

        let rollover = (self.sequence_number as u16) > self.params.secondary_iterations;
        let is_primary = self.sequence_number == 0 || rollover;
        if rollover {
            self.reset();
        }
        let ruleset = if is_primary {
            self.params.primary
        } else {
            self.params.secondary
        };

        if is_primary {
            self.model_size = reader.len();
            if self.model_tracking_enabled() {
                self.model = (0..reader.len()).map(|i| reader.get(i) as i32).collect();
            }
        } else if ruleset.preprocessing == crate::params::Preprocessing::Model
            && reader.len() != self.model_size
        {
            return Err(CmpError::SourceSizeMismatch);
        }

        let mut written = self.encode_frame(ruleset, reader, work_buf, dst)?;

        if self.params.uncompressed_fallback_enabled
            && written > FIXED_HEADER_SIZE + reader.packed_size()
        {
            written = self.encode_frame(Ruleset::uncompressed(), reader, work_buf, dst)?;
        }

        if self.params.checksum_enabled {
            let digest = sample_checksum(reader);
            if dst.len() < written + CHECKSUM_TRAILER_SIZE {
                return Err(CmpError::DestinationTooSmall);
            }
            dst[written..written + CHECKSUM_TRAILER_SIZE].copy_from_slice(&digest.to_be_bytes());
            written += CHECKSUM_TRAILER_SIZE;
        }

        self.sequence_number = self.sequence_number.wrapping_add(1);
        Ok(written)
    }

    /// Encodes one complete frame (header + body, no checksum) for
    /// `ruleset`, returning the frame's byte length.
    fn encode_frame(
        &mut self,
        ruleset: Ruleset,
        reader: &SampleReader,
        work_buf: &mut [i32],
        dst: &mut [u8],
    ) -> CmpResult<usize> {
        let needs_ext = needs_extended_header(ruleset.preprocessing, ruleset.encoder_type);
        let header_size = FIXED_HEADER_SIZE + if needs_ext { EXTENDED_HEADER_SIZE } else { 0 };
        if dst.len() < header_size {
            return Err(CmpError::DestinationTooSmall);
        }

        let needed = preprocess::work_buf_size(ruleset.preprocessing, reader.len());
        if work_buf.len() < needed {
            return Err(CmpError::WorkBufTooSmall);
        }

        let body_size = {
            let mut encoder =
                Encoder::init(ruleset.encoder_type, ruleset.encoder_param, ruleset.encoder_outlier)?;
            let mut preprocessor = Preprocessor::init(
                ruleset.preprocessing,
                reader,
                work_buf,
                &mut self.model,
                self.params.model_rate,
            )?;
            let mut body_writer = BitWriter::init(&mut dst[header_size..])?;
            for i in 0..reader.len() {
                let residual = preprocessor.process(reader, i);
                encoder.process(residual, &mut body_writer)?;
            }
            body_writer.flush()?
        };

        let fixed = FixedHeader {
            version_flag: true,
            version_id: crate::header::VERSION_ID,
            compressed_size: (header_size + body_size) as u32,
            original_size: reader.packed_size() as u32,
            identifier: self.identifier,
            sequence_number: self.sequence_number,
            preprocessing: ruleset.preprocessing,
            checksum_enabled: self.params.checksum_enabled,
            encoder_type: ruleset.encoder_type,
        };
        let mut header_writer = BitWriter::init(&mut dst[..header_size])?;
        fixed.serialize(&mut header_writer)?;
        if needs_ext {
            let ext = ExtendedHeader {
                model_rate: self.params.model_rate,
                encoder_param: ruleset.encoder_param,
                encoder_outlier: ruleset.encoder_outlier,
            };
            ext.serialize(&mut header_writer)?;
        }
        header_writer.flush()?;

        Ok(header_size + body_size)
    }
}

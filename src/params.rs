//! Caller-visible compression configuration (§3 of the specification).

use crate::error::{CmpError, CmpResult};

/// Sample-to-residual transform selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preprocessing {
    None,
    Diff,
    Iwt,
    Model,
}

impl Preprocessing {
    /// 4-bit on-wire code.
    pub fn code(self) -> u8 {
        match self {
            Preprocessing::None => 0,
            Preprocessing::Diff => 1,
            Preprocessing::Iwt => 2,
            Preprocessing::Model => 3,
        }
    }

    pub fn from_code(code: u8) -> CmpResult<Self> {
        match code {
            0 => Ok(Preprocessing::None),
            1 => Ok(Preprocessing::Diff),
            2 => Ok(Preprocessing::Iwt),
            3 => Ok(Preprocessing::Model),
            _ => Err(CmpError::Header),
        }
    }
}

/// Entropy encoder selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderType {
    Uncompressed,
    GolombZero,
    GolombMulti,
}

impl EncoderType {
    /// 3-bit on-wire code.
    pub fn code(self) -> u8 {
        match self {
            EncoderType::Uncompressed => 0,
            EncoderType::GolombZero => 1,
            EncoderType::GolombMulti => 2,
        }
    }

    pub fn from_code(code: u8) -> CmpResult<Self> {
        match code {
            0 => Ok(EncoderType::Uncompressed),
            1 => Ok(EncoderType::GolombZero),
            2 => Ok(EncoderType::GolombMulti),
            _ => Err(CmpError::Header),
        }
    }
}

/// One ruleset: a preprocessing choice paired with an encoder configuration.
/// Used for both the primary (frame 0) and secondary (subsequent frames)
/// rulesets inside [`Params`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ruleset {
    pub preprocessing: Preprocessing,
    pub encoder_type: EncoderType,
    pub encoder_param: u16,
    pub encoder_outlier: u32,
}

impl Ruleset {
    pub const fn uncompressed() -> Self {
        Ruleset {
            preprocessing: Preprocessing::None,
            encoder_type: EncoderType::Uncompressed,
            encoder_param: 0,
            encoder_outlier: 0,
        }
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset::uncompressed()
    }
}

/// Complete caller-visible compression configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub primary: Ruleset,
    /// Count of subsequent passes using `secondary`; in `[0, 255]`.
    pub secondary_iterations: u16,
    pub secondary: Ruleset,
    /// Model adaptation weight in `[0, 16]`; higher = slower adaptation.
    pub model_rate: u8,
    pub checksum_enabled: bool,
    pub uncompressed_fallback_enabled: bool,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            primary: Ruleset::uncompressed(),
            secondary_iterations: 0,
            secondary: Ruleset::uncompressed(),
            model_rate: 8,
            checksum_enabled: false,
            uncompressed_fallback_enabled: true,
        }
    }
}

impl Params {
    /// Static validation performed once at context construction (§4.7
    /// step 4). Per-ruleset encoder parameter validation happens inside
    /// [`crate::encoder::Encoder::init`], which this routine also probes
    /// with a disposable encoder.
    pub fn validate(&self) -> CmpResult<()> {
        if self.primary.preprocessing == Preprocessing::Model {
            // "model is forbidden here (primary must be stateless w.r.t. a
            // prior frame)."
            return Err(CmpError::ParamsInvalid);
        }
        if self.secondary_iterations > 255 {
            return Err(CmpError::ParamsInvalid);
        }
        if self.model_rate > 16 {
            return Err(CmpError::ParamsInvalid);
        }
        crate::encoder::Encoder::probe(self.primary.encoder_type, self.primary.encoder_param)?;
        if self.secondary_iterations > 0 {
            crate::encoder::Encoder::probe(
                self.secondary.encoder_type,
                self.secondary.encoder_param,
            )?;
        }
        Ok(())
    }
}

//! Turns `-p key=value` pairs collected by [`super::args`] into a
//! [`Params`] value, matching the field names in the format contract.

use anyhow::{bail, Context, Result};

use crate::params::{EncoderType, Params, Preprocessing};

fn parse_preprocessing(value: &str) -> Result<Preprocessing> {
    Ok(match value {
        "none" => Preprocessing::None,
        "diff" => Preprocessing::Diff,
        "iwt" => Preprocessing::Iwt,
        "model" => Preprocessing::Model,
        other => bail!("unknown preprocessing: {other}"),
    })
}

fn parse_encoder_type(value: &str) -> Result<EncoderType> {
    Ok(match value {
        "uncompressed" => EncoderType::Uncompressed,
        "golomb_zero" => EncoderType::GolombZero,
        "golomb_multi" => EncoderType::GolombMulti,
        other => bail!("unknown encoder type: {other}"),
    })
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        other => bail!("expected a boolean, got: {other}"),
    }
}

/// Applies `(key, value)` pairs on top of [`Params::default`].
pub fn apply_param_pairs(pairs: &[(String, String)]) -> Result<Params> {
    let mut params = Params::default();
    for (key, value) in pairs {
        match key.as_str() {
            "primary_preprocessing" => params.primary.preprocessing = parse_preprocessing(value)?,
            "primary_encoder_type" => params.primary.encoder_type = parse_encoder_type(value)?,
            "primary_encoder_param" => {
                params.primary.encoder_param =
                    value.parse().context("primary_encoder_param must be a u16")?
            }
            "primary_encoder_outlier" => {
                params.primary.encoder_outlier = value
                    .parse()
                    .context("primary_encoder_outlier must be a u32")?
            }
            "secondary_iterations" => {
                params.secondary_iterations =
                    value.parse().context("secondary_iterations must be a u16")?
            }
            "secondary_preprocessing" => {
                params.secondary.preprocessing = parse_preprocessing(value)?
            }
            "secondary_encoder_type" => {
                params.secondary.encoder_type = parse_encoder_type(value)?
            }
            "secondary_encoder_param" => {
                params.secondary.encoder_param = value
                    .parse()
                    .context("secondary_encoder_param must be a u16")?
            }
            "secondary_encoder_outlier" => {
                params.secondary.encoder_outlier = value
                    .parse()
                    .context("secondary_encoder_outlier must be a u32")?
            }
            "model_rate" => params.model_rate = value.parse().context("model_rate must be a u8")?,
            "checksum" => params.checksum_enabled = parse_bool(value)?,
            "fallback" => params.uncompressed_fallback_enabled = parse_bool(value)?,
            other => bail!("unknown parameter: {other}"),
        }
    }
    params.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_known_keys() {
        let pairs = vec![
            ("primary_preprocessing".to_string(), "diff".to_string()),
            ("checksum".to_string(), "true".to_string()),
        ];
        let params = apply_param_pairs(&pairs).unwrap();
        assert_eq!(params.primary.preprocessing, Preprocessing::Diff);
        assert!(params.checksum_enabled);
    }

    #[test]
    fn rejects_unknown_key() {
        let pairs = vec![("nonsense".to_string(), "1".to_string())];
        assert!(apply_param_pairs(&pairs).is_err());
    }

    #[test]
    fn rejects_invalid_resulting_params() {
        let pairs = vec![("primary_preprocessing".to_string(), "model".to_string())];
        assert!(apply_param_pairs(&pairs).is_err());
    }

    #[test]
    fn no_pairs_yields_default_params() {
        let params = apply_param_pairs(&[]).unwrap();
        assert_eq!(params, Params::default());
    }
}

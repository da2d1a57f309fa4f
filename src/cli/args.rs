//! Hand-rolled argument parsing, in the teacher's style: no `clap`, just a
//! straightforward scan over `&str` tokens with `anyhow` for the error
//! path. This module only exists at the CLI boundary — nothing in the
//! core library depends on it.

use anyhow::{bail, Result};

#[derive(Debug, Default, Clone)]
pub struct ParsedArgs {
    pub compress: bool,
    pub output: Option<String>,
    pub param_pairs: Vec<(String, String)>,
    pub verbosity_delta: i32,
    pub quiet: bool,
    pub color: Option<bool>,
    pub show_version: bool,
    pub show_help: bool,
    pub input_file: Option<String>,
}

pub fn parse_args_from(args: &[String]) -> Result<ParsedArgs> {
    let mut parsed = ParsedArgs::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-c" | "--compress" => parsed.compress = true,
            "-V" | "--version" => parsed.show_version = true,
            "-h" | "--help" => parsed.show_help = true,
            "-v" => parsed.verbosity_delta += 1,
            "-q" => parsed.quiet = true,
            "--color" => parsed.color = Some(true),
            "--no-color" => parsed.color = Some(false),
            "-o" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("-o requires an argument"))?;
                parsed.output = Some(value.clone());
            }
            "-p" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("-p requires an argument"))?;
                parse_params_into(value, &mut parsed.param_pairs)?;
            }
            "-" => parsed.input_file = Some("-".to_string()),
            other => {
                if let Some(value) = other.strip_prefix("--output=") {
                    parsed.output = Some(value.to_string());
                } else if let Some(value) = other.strip_prefix("--params=") {
                    parse_params_into(value, &mut parsed.param_pairs)?;
                } else if other.starts_with('-') && other.len() > 1 {
                    bail!("unrecognized option: {other}");
                } else if parsed.input_file.is_none() {
                    parsed.input_file = Some(other.to_string());
                } else {
                    bail!("unexpected extra argument: {other}");
                }
            }
        }
        i += 1;
    }
    Ok(parsed)
}

fn parse_params_into(spec: &str, out: &mut Vec<(String, String)>) -> Result<()> {
    for pair in spec.split(',') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("malformed -p entry (expected key=value): {pair}"))?;
        out.push((key.to_string(), value.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_compress_and_output() {
        let parsed = parse_args_from(&args(&["-c", "-o", "out.bin", "in.raw"])).unwrap();
        assert!(parsed.compress);
        assert_eq!(parsed.output.as_deref(), Some("out.bin"));
        assert_eq!(parsed.input_file.as_deref(), Some("in.raw"));
    }

    #[test]
    fn parses_long_output_flag() {
        let parsed = parse_args_from(&args(&["--output=result.bin"])).unwrap();
        assert_eq!(parsed.output.as_deref(), Some("result.bin"));
    }

    #[test]
    fn parses_multiple_params() {
        let parsed =
            parse_args_from(&args(&["-p", "primary_preprocessing=diff,model_rate=9"])).unwrap();
        assert_eq!(
            parsed.param_pairs,
            vec![
                ("primary_preprocessing".to_string(), "diff".to_string()),
                ("model_rate".to_string(), "9".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_malformed_param_entry() {
        assert!(parse_args_from(&args(&["-p", "no_equals_sign"])).is_err());
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(parse_args_from(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn dash_means_stdin() {
        let parsed = parse_args_from(&args(&["-c", "-"])).unwrap();
        assert_eq!(parsed.input_file.as_deref(), Some("-"));
    }

    #[test]
    fn verbosity_and_quiet_flags() {
        let parsed = parse_args_from(&args(&["-v", "-v", "-q"])).unwrap();
        assert_eq!(parsed.verbosity_delta, 2);
        assert!(parsed.quiet);
    }
}

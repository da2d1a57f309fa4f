//! Command-line front end (C10). Everything under this module is
//! ordinary crate-internal Rust, not a separate binary crate: it parses
//! arguments, reads/writes files, and is the only place in the crate that
//! depends on `anyhow` or touches the process environment. The core
//! library (`error`, `bitstream`, `context`, ...) never does either.

pub mod args;
pub mod constants;
pub mod help;
pub mod params_apply;

use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};

use anyhow::{bail, Context, Result};

use crate::bound::{compress_bound, work_buf_size};
use crate::context::CompressionContext;
use crate::sample::SampleReader;
use crate::{display, displaylevel};
use constants::{set_color_enabled, set_display_level, LEVEL_INFO};

/// Parses `argv[1..]`, performs the requested action, and returns the
/// process exit code.
pub fn run(argv: &[String]) -> i32 {
    match run_inner(argv) {
        Ok(code) => code,
        Err(err) => {
            display!("error: {err:#}");
            1
        }
    }
}

fn run_inner(argv: &[String]) -> Result<i32> {
    let parsed = args::parse_args_from(argv)?;

    if let Some(color) = parsed.color {
        set_color_enabled(color);
    } else {
        set_color_enabled(io::stderr().is_terminal());
    }

    if parsed.show_version {
        println!("{}", help::VERSION_STRING);
        return Ok(0);
    }
    if parsed.show_help {
        print!("{}", help::USAGE);
        return Ok(0);
    }

    let level = if parsed.quiet {
        0
    } else {
        (LEVEL_INFO as i32 + parsed.verbosity_delta).clamp(0, 4) as u8
    };
    set_display_level(level);

    if !parsed.compress {
        bail!("no action requested; pass -c to compress");
    }

    let params = params_apply::apply_param_pairs(&parsed.param_pairs)?;

    let raw = read_input(parsed.input_file.as_deref())?;
    if raw.len() % 2 != 0 {
        bail!("input length ({} bytes) is not a whole number of 16-bit samples", raw.len());
    }
    if raw.is_empty() {
        bail!("input is empty");
    }
    let samples: Vec<u16> = raw
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();
    let reader = SampleReader::from_u16(&samples);

    let bound = compress_bound(&params, reader.packed_size())
        .context("computing worst-case output size")?;
    let mut dst = vec![0u8; bound];
    let mut work_buf = vec![0i32; work_buf_size(&params, reader.packed_size())? / 4];

    let mut ctx = CompressionContext::new(params)?;
    let written = ctx.compress(&reader, &mut work_buf, &mut dst)?;
    dst.truncate(written);

    write_output(parsed.output.as_deref(), &dst)?;
    displaylevel!(LEVEL_INFO, "wrote {written} bytes");
    Ok(0)
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match path {
        None | Some("-") => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                bail!("refusing to read sample data from an interactive terminal");
            }
            stdin.lock().read_to_end(&mut buf)?;
        }
        Some(p) => {
            File::open(p)
                .with_context(|| format!("opening {p}"))?
                .read_to_end(&mut buf)?;
        }
    }
    Ok(buf)
}

fn write_output(path: Option<&str>, data: &[u8]) -> Result<()> {
    match path {
        None => {
            let stdout = io::stdout();
            if stdout.is_terminal() {
                bail!("refusing to write compressed data to an interactive terminal");
            }
            stdout.lock().write_all(data)?;
        }
        Some(p) => {
            File::create(p)
                .with_context(|| format!("creating {p}"))?
                .write_all(data)?;
        }
    }
    Ok(())
}

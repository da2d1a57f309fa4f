//! Static `--help`/`--version` text.

pub const VERSION_STRING: &str = concat!("airscmp ", env!("CARGO_PKG_VERSION"));

pub const USAGE: &str = "\
Usage: airscmp -c [OPTIONS] [FILE]

Compresses a stream of 16-bit AIRS sample values.

Options:
  -c, --compress              compress FILE (or stdin) to OUTPUT (or stdout)
  -o OUTPUT, --output=OUTPUT  write the compressed frame to OUTPUT
  -p k=v[,k=v...], --params=k=v[,k=v...]
                               override compression parameters
  -v                           increase verbosity (repeatable)
  -q                           suppress non-error output
  --color, --no-color          force or disable ANSI color in diagnostics
  -V, --version                print the version and exit
  -h, --help                    print this help and exit

FILE may be a path, `-`, or omitted, all meaning standard input.
";

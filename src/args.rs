use std::path::PathBuf;

use anyhow::{anyhow, bail};

pub const USAGE: &str = "\
usage: profiler [--filepath <dir>] [-p <name>] [-o <objects>] [-f] [--read-only] [-v]

options (one or two leading dashes):
  --filepath <dir>      base directory holding profiles/ and out/ (default: .)
  -p, --profile <name>  profile to update (default: Accounting)
  -o <objects>          comma separated objects to update (default: all)
  -f[=<bool>]           write out/<name>2.profile instead of only inspecting
  --read-only[=<bool>]  grant read access and revoke edit access
  -v, -vv               more logging on stderr (or set PROFILER_LOG)
  -h, --help            show this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub filepath: PathBuf,
    pub profile: String,
    pub objects: String,
    pub write_output: bool,
    pub read_only: bool,
    pub verbosity: u8,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            filepath: PathBuf::from("."),
            profile: "Accounting".to_owned(),
            objects: String::new(),
            write_output: false,
            read_only: false,
            verbosity: 0,
            help: false,
        }
    }
}

pub fn read() -> anyhow::Result<Args> {
    parse(std::env::args().skip(1))
}

/// Value of a boolean flag: bare `-f` means true, `-f=false` means false
fn parse_bool(flag: &str, inline: Option<String>) -> anyhow::Result<bool> {
    match inline.as_deref() {
        None | Some("1" | "t" | "T" | "true" | "TRUE" | "True") => Ok(true),
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => Ok(false),
        Some(other) => bail!("invalid boolean value {other:?} for {flag}"),
    }
}

/// Flags may be written with one or two leading dashes, and values given
/// either inline (`-o=Account`) or as the next argument.
pub fn parse<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Args> {
    let mut args = args.into_iter();
    let mut result = Args::default();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_owned(), Some(value.to_owned())),
            None => (arg.clone(), None),
        };
        let Some(name) = flag.strip_prefix("--").or_else(|| flag.strip_prefix('-')) else {
            bail!("Unexpected argument {arg:?}");
        };
        let mut value = |inline: Option<String>| {
            inline
                .or_else(|| args.next())
                .ok_or_else(|| anyhow!("{flag} value missing"))
        };

        match name {
            "filepath" => {
                let path = value(inline)?;
                if path.is_empty() {
                    bail!("{flag} must not be empty");
                }
                result.filepath = PathBuf::from(path);
            }
            "p" | "profile" => {
                let name = value(inline)?;
                if name.is_empty() {
                    bail!("{flag} must not be empty");
                }
                result.profile = name;
            }
            "o" => result.objects = value(inline)?,
            "f" => result.write_output = parse_bool(&flag, inline)?,
            "read-only" => result.read_only = parse_bool(&flag, inline)?,
            "v" | "vv" | "h" | "help" if inline.is_some() => {
                bail!("{flag} does not take a value")
            }
            "v" => result.verbosity += 1,
            "vv" => result.verbosity += 2,
            "h" | "help" => result.help = true,
            _ => bail!("Unknown option {flag:?}"),
        }
    }

    Ok(result)
}

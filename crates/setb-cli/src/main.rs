use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use lab::Lab;
use setb::Set;

/// Decode a binary scene-set file and print it as a text report.
///
/// With one argument, FILE is read from disk. With two, the first is a LAB
/// archive and FILE is the name of an entry inside it.
#[derive(Parser)]
#[command(name = "setb2set", about = "Dump binary scene-set files as text")]
struct Cli {
    /// Set file, or LAB archive when a second argument follows.
    #[arg(value_name = "LAB|FILE")]
    first: String,
    /// Entry name inside the LAB archive.
    #[arg(value_name = "FILE")]
    second: Option<String>,
    /// Fail on recoverable problems (unknown sector types, degenerate
    /// sectors, trailing bytes) instead of reporting them as warnings.
    #[arg(long)]
    strict: bool,
    /// Write the report here instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    /// Split the positional arguments into (archive, file name).
    fn source(&self) -> (Option<&Path>, &str) {
        match &self.second {
            Some(name) => (Some(Path::new(&self.first)), name.as_str()),
            None => (None, self.first.as_str()),
        }
    }
}

fn read_source(archive: Option<&Path>, name: &str) -> Result<Vec<u8>> {
    let archive = archive
        .map(|path| {
            Lab::open(path).with_context(|| format!("could not open archive {}", path.display()))
        })
        .transpose()?;
    let data = lab::load(name, archive.as_ref())?;
    tracing::debug!(name, bytes = data.len(), "loaded source");
    Ok(data)
}

fn decode(data: &[u8], name: &str, strict: bool) -> Result<Set> {
    let set = Set::parse(data).with_context(|| format!("failed to decode {name}"))?;

    let diagnostics = set.diagnostics();
    for diagnostic in &diagnostics {
        tracing::warn!(file = name, "{diagnostic}");
    }
    if strict {
        set.check().with_context(|| format!("strict check failed for {name}"))?;
        if let Some(first) = diagnostics.first() {
            bail!("strict check failed for {name}: {first}");
        }
    }
    Ok(set)
}

fn write_report(set: &Set, output: Option<&Path>) -> Result<()> {
    let report = set.to_string();
    match output {
        Some(path) => fs::write(path, report)
            .with_context(|| format!("failed to write report: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write report to stdout")
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (archive, name) = cli.source();
    let data = read_source(archive, name)?;
    let set = decode(&data, name, cli.strict)?;
    write_report(&set, cli.output.as_deref())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_argument_is_a_plain_file() {
        let cli = Cli::parse_from(["setb2set", "dock.setb"]);
        assert_eq!(cli.source(), (None, "dock.setb"));
        assert!(!cli.strict);
    }

    #[test]
    fn two_arguments_read_from_archive() {
        let cli = Cli::parse_from(["setb2set", "data000.lab", "dock.setb", "--strict"]);
        assert_eq!(cli.source(), (Some(Path::new("data000.lab")), "dock.setb"));
        assert!(cli.strict);
    }

    #[test]
    fn file_argument_required() {
        assert!(Cli::try_parse_from(["setb2set"]).is_err());
    }

    #[test]
    fn strict_rejects_trailing_bytes() {
        let mut data = Vec::new();
        for count in [0i32, 0, 0] {
            data.extend_from_slice(&count.to_le_bytes());
        }
        data.push(0xff);
        assert!(decode(&data, "t.setb", false).is_ok());
        let err = decode(&data, "t.setb", true).unwrap_err();
        assert!(err.to_string().contains("strict check failed"), "{err:#}");
    }
}

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use itertools::Itertools;

use chordforge::{Chord, ChordFormula, ChordQuery, Report, ALL_NOTES};

/// ChordForge - chord notes and inversions on a piano keyboard
#[derive(Parser, Debug)]
#[command(name = "chordforge")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Root note: one of C C# D D# E F F# G G# A A# B
    root: Option<String>,

    /// Chord type, e.g. Major or Dominant 7th
    chord_type: Vec<String>,

    /// Whole chord as one query, e.g. "C# Minor 7th / 2"
    #[arg(short, long, conflicts_with_all = ["root", "chord_type"])]
    query: Option<String>,

    /// Inversion drawn on the keyboard (0 = root position)
    #[arg(short, long)]
    inversion: Option<usize>,

    /// Draw the selected voicing on a two-octave keyboard
    #[arg(short, long)]
    keyboard: bool,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,

    /// List root notes and chord types
    #[arg(long)]
    list: bool,
}

impl Cli {
    /// Root, chord type and inversion from either the positional arguments
    /// or `--query`. An explicit `--inversion` wins over the query's.
    fn resolve(&self) -> anyhow::Result<ChordQuery> {
        let query = match (&self.query, &self.root) {
            (Some(query), _) => ChordQuery::from_str(query)?,
            (None, Some(root)) => ChordQuery {
                root: root.clone(),
                chord_type: self.chord_type.join(" "),
                inversion: 0,
            },
            (None, None) => anyhow::bail!("missing chord; pass ROOT CHORD_TYPE or --query"),
        };
        Ok(ChordQuery {
            inversion: self.inversion.unwrap_or(query.inversion),
            ..query
        })
    }
}

fn list() {
    println!("Roots: {}", ALL_NOTES.iter().join(" "));
    println!("Chord types:");
    for name in ChordFormula::names() {
        println!("  {}", name);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.list {
        list();
        return Ok(());
    }

    let query = cli.resolve()?;
    let chord = Chord::new(&query.root, &query.chord_type)?;
    let report = Report::for_chord(&chord, query.inversion);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
        if cli.keyboard {
            println!();
            println!("{}", report.keyboard_text());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chordforge::ChordError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chordforge").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn positional_chord_type_is_joined() {
        let query = parse(&["C", "Dominant", "7th", "-i", "2"]).resolve().unwrap();
        assert_eq!(query.root, "C");
        assert_eq!(query.chord_type, "Dominant 7th");
        assert_eq!(query.inversion, 2);
    }

    #[test]
    fn query_inversion_can_be_overridden() {
        let query = parse(&["--query", "G Major / 1"]).resolve().unwrap();
        assert_eq!(query.inversion, 1);
        let query = parse(&["--query", "G Major / 1", "-i", "2"]).resolve().unwrap();
        assert_eq!(query.inversion, 2);
    }

    #[test]
    fn query_conflicts_with_positionals() {
        assert!(Cli::try_parse_from(["chordforge", "C", "Major", "--query", "D Minor"]).is_err());
    }

    #[test]
    fn missing_chord() {
        assert!(parse(&[]).resolve().is_err());
    }

    #[test]
    fn unknown_chord_type_fails() {
        let cli = parse(&["C", "Unknown"]);
        let err = run(&cli).unwrap_err();
        assert_eq!(err.downcast_ref::<ChordError>(), Some(&ChordError::UnknownChordType(String::from("Unknown"))));
    }

    #[test]
    fn list_succeeds() {
        assert!(run(&parse(&["--list"])).is_ok());
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! bitpart-plots CLI entrypoint.
//!
//! By default this reads `results.txt` from the working directory and writes every chart of the
//! catalog next to it. Log verbosity follows `RUST_LOG` (default `info`).

use std::error::Error;
use std::path::PathBuf;

use bitpart_plots::charts::ChartId;
use bitpart_plots::run::{RunOptions, DEFAULT_INPUT};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

fn print_usage(program: &str) {
    let charts = ChartId::ALL
        .iter()
        .map(|id| id.stem())
        .collect::<Vec<_>>()
        .join(", ");
    eprintln!(
        "Usage:\n  {program} [<results-file>] [--out-dir <dir>] [--chart <name>]... [--dump-json <path>] [--check]\n\n<results-file> defaults to `{DEFAULT_INPUT}`; charts are written to the current directory\nunless --out-dir is given.\n\n--chart limits output to the named charts (repeatable): {charts}.\n--dump-json writes the parsed measurements as JSON.\n--check parses and groups the report without writing images."
    );
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<RunOptions, ()> {
    let mut options = RunOptions::default();
    let mut input = None;
    let mut out_dir = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out-dir" => {
                if out_dir.is_some() {
                    return Err(());
                }
                out_dir = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--chart" => {
                let raw = args.next().ok_or(())?;
                let id = ChartId::from_name(&raw).ok_or(())?;
                if options.charts.contains(&id) {
                    return Err(());
                }
                options.charts.push(id);
            }
            "--dump-json" => {
                if options.dump_json.is_some() {
                    return Err(());
                }
                options.dump_json = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--check" => {
                if options.check_only {
                    return Err(());
                }
                options.check_only = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if input.is_some() {
                    return Err(());
                }
                input = Some(PathBuf::from(arg));
            }
        }
    }

    if let Some(input) = input {
        options.input = input;
    }
    if let Some(out_dir) = out_dir {
        options.out_dir = out_dir;
    }

    Ok(options)
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "bitpart-plots".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        let summary = bitpart_plots::run(&options)?;
        tracing::info!(
            records = summary.records,
            charts = summary.charts.len(),
            written = summary.written.len(),
            "done"
        );
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("bitpart-plots: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use bitpart_plots::charts::ChartId;
    use bitpart_plots::run::RunOptions;

    use super::parse_options;

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, RunOptions::default());
    }

    #[test]
    fn parses_positional_input() {
        let options = parse_options(args(&["bench/results.txt"])).expect("parse options");
        assert_eq!(options.input, PathBuf::from("bench/results.txt"));
        assert_eq!(options.out_dir, PathBuf::from("."));
    }

    #[test]
    fn parses_out_dir_and_flags_in_any_order() {
        let options = parse_options(args(&[
            "--check",
            "--out-dir",
            "plots",
            "results.txt",
            "--dump-json",
            "records.json",
        ]))
        .expect("parse options");
        assert!(options.check_only);
        assert_eq!(options.out_dir, PathBuf::from("plots"));
        assert_eq!(options.input, PathBuf::from("results.txt"));
        assert_eq!(options.dump_json, Some(PathBuf::from("records.json")));
    }

    #[test]
    fn parses_repeated_chart_selection() {
        let options = parse_options(args(&["--chart", "seqs", "--chart", "block_size.png"]))
            .expect("parse options");
        assert_eq!(options.charts, vec![ChartId::Seqs, ChartId::BlockSize]);
    }

    #[test]
    fn rejects_unknown_chart() {
        parse_options(args(&["--chart", "histogram"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(args(&["--nope"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(args(&["--check", "--check"])).unwrap_err();
        parse_options(args(&["--out-dir", "a", "--out-dir", "b"])).unwrap_err();
        parse_options(args(&["--dump-json", "a", "--dump-json", "b"])).unwrap_err();
        parse_options(args(&["--chart", "seqs", "--chart", "seqs.png"])).unwrap_err();
    }

    #[test]
    fn rejects_multiple_positional_inputs() {
        parse_options(args(&["one.txt", "two.txt"])).unwrap_err();
    }

    #[test]
    fn rejects_missing_values() {
        parse_options(args(&["--out-dir"])).unwrap_err();
        parse_options(args(&["--chart"])).unwrap_err();
        parse_options(args(&["--dump-json"])).unwrap_err();
    }
}

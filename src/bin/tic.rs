// src/bin/tic.rs

//! Driver program _tic_ drives the [_ticlib_].
//!
//! Processes user-passed command-line arguments, reads one transition
//! log (file or STDIN), runs the invariant consumption engine
//! ([`check_invariants_opt`]), and prints the terminal report
//! ([`print_report`]).
//!
//! A log that does not fully decompose into invariants is a normal
//! outcome and still exits with success; only unreadable input exits
//! with failure.
//!
//! [_ticlib_]: ticlib
//! [`check_invariants_opt`]: ticlib::engine::reducer::check_invariants_opt
//! [`print_report`]: ticlib::printer::report::print_report

use std::io::Read;
use std::process::ExitCode;

use ::anyhow::{Context, Result};
use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::ticlib::common::FPath;
use ::ticlib::data::invariant::InvariantCheckResult;
use ::ticlib::debug::printers::e_err;
use ::ticlib::engine::reducer::{check_invariants_opt, CheckOptions};
use ::ticlib::printer::report::{
    print_report,
    ColorChoice,
    ReportSettings,
    BAR_WIDTH_DEFAULT,
};

// --------------------
// command-line parsing

/// user-passed signifier that the log content is passed on STDIN
const INPUT_FROM_STDIN: &str = "-";

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
#[allow(non_camel_case_types)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "tic",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(T-Invariant Checker)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Repository: ", env!("CARGO_PKG_REPOSITORY"), "\n",
    ),
    verbatim_doc_comment,
)]
#[allow(non_camel_case_types)]
struct CLI_Args {
    /// Path of the transition log file, or "-" to read the log from
    /// STDIN (the default).
    #[clap(
        required = false,
        verbatim_doc_comment,
        default_value = INPUT_FROM_STDIN,
    )]
    input: FPath,

    /// Choose to print using colors.
    /// Environment variable NO_COLOR, when set, forces "never".
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Disable the banner and decorative glyphs.
    #[clap(
        long,
        default_value_t = false,
    )]
    plain: bool,

    /// Suppress non-essential output.
    #[clap(
        short = 'q',
        long,
        default_value_t = false,
    )]
    quiet: bool,

    /// Show additional diagnostic output.
    #[clap(
        short = 'v',
        long,
        default_value_t = false,
    )]
    verbose: bool,

    /// Width of the per-invariant count bars.
    #[clap(
        long = "bar-width",
        value_name = "N",
        default_value_t = BAR_WIDTH_DEFAULT,
    )]
    bar_width: usize,

    /// Strip all "-" characters from the leftover before reporting it
    /// (historical engine-variant behavior).
    #[clap(
        long = "strip-dashes",
        verbatim_doc_comment,
        default_value_t = false,
    )]
    strip_dashes: bool,
}

/// Read the entire log content from `input`; STDIN when `input` is `-`.
fn read_input(input: &FPath) -> Result<String> {
    defñ!("({:?})", input);
    if input == INPUT_FROM_STDIN {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Could not read input from STDIN")?;

        return Ok(content);
    }

    std::fs::read_to_string(input)
        .with_context(|| format!("Could not read input file {:?}", input))
}

// --------------------
// main

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    // map `CLI_Color_Choice` to `ColorChoice`; NO_COLOR wins over all
    let color_choice: ColorChoice = if std::env::var_os("NO_COLOR").is_some() {
        ColorChoice::Never
    } else {
        match args.color_choice {
            CLI_Color_Choice::always => ColorChoice::Always,
            CLI_Color_Choice::auto => ColorChoice::Auto,
            CLI_Color_Choice::never => ColorChoice::Never,
        }
    };
    defo!("color_choice {:?}", color_choice);

    let content: String = match read_input(&args.input) {
        Ok(content) => content,
        Err(err) => {
            e_err!("{:#}", err);
            defx!("exitcode FAILURE");

            return ExitCode::FAILURE;
        }
    };

    let options = CheckOptions {
        strip_dashes: args.strip_dashes,
    };
    let result: InvariantCheckResult = check_invariants_opt(&content, &options);
    defo!("result {:?}", result);

    let settings = ReportSettings {
        color_choice,
        decorations: !args.plain,
        quiet: args.quiet,
        verbose: args.verbose,
        bar_width: args.bar_width,
    };
    match print_report(&content, &result, &settings) {
        Ok(_) => {}
        Err(err) => {
            // stdout is gone or broken; nothing sensible left to print to
            e_err!("{}", err);
            defx!("exitcode FAILURE");

            return ExitCode::FAILURE;
        }
    }
    defx!("exitcode SUCCESS");

    ExitCode::SUCCESS
}

// src/printer/report.rs

//! Terminal report for an [`InvariantCheckResult`]: banner, per-invariant
//! counts with proportional bars, optional verbose diagnostics, and
//! either a success line or a highlighted preview of the leftover.
//!
//! All printing goes through [`termcolor::StandardStream`]; color and
//! decoration behavior is explicit configuration ([`ReportSettings`]),
//! never process-global state.

use crate::common::{Count, InvariantCounts, LogSz};
use crate::data::invariant::{InvariantCheckResult, InvariantTemplate, INVARIANT_CATALOG};
use crate::debug::printers::de_err;

use std::io::Write; // for `StandardStream.flush`

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use ::unicode_width::UnicodeWidthStr;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] for the banner box.
pub const COLOR_BANNER: Color = Color::Cyan;

/// [`Color`] for counts, bars, and the success line.
pub const COLOR_GOOD: Color = Color::Green;

/// [`Color`] for the leftover warning note.
pub const COLOR_WARN: Color = Color::Yellow;

/// [`Color`] for highlighted tokens in the leftover preview.
pub const COLOR_BAD: Color = Color::Red;

/// Default width of the per-invariant count bars, in columns.
pub const BAR_WIDTH_DEFAULT: usize = 40;

/// Default character limit of the leftover preview.
pub const PREVIEW_LIMIT_DEFAULT: usize = 200;

/// Per-invariant line markers when decorations are enabled.
const MARKERS_DECORATED: [&str; 3] = ["①", "②", "③"];

/// Per-invariant line markers in plain mode.
const MARKERS_PLAIN: [&str; 3] = ["1", "2", "3"];

const BANNER_INNER_WIDTH: usize = 56;

const BANNER_TITLE: &str = "T-Invariant Checker";

lazy_static! {
    /// Matches any `T<digits>` token; used for diagnostics counting and
    /// leftover highlighting.
    static ref TOKEN_REGEX: Regex = Regex::new(r"T\d+").unwrap();
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ReportSettings
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Explicit presentation configuration for one report.
#[derive(Clone, Copy, Debug)]
pub struct ReportSettings {
    /// Passed to [`StandardStream::stdout`].
    pub color_choice: ColorChoice,
    /// Banner and decorative glyphs (`①`, `✨`).
    pub decorations: bool,
    /// Suppress the entire report.
    pub quiet: bool,
    /// Also print diagnostic lines.
    pub verbose: bool,
    /// Width of the count bars, in columns.
    pub bar_width: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            color_choice: ColorChoice::Auto,
            decorations: true,
            quiet: false,
            verbose: false,
            bar_width: BAR_WIDTH_DEFAULT,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// helper functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn spec_fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));

    spec
}

fn spec_bold_fg(color: Color) -> ColorSpec {
    let mut spec = spec_fg(color);
    spec.set_bold(true);

    spec
}

fn spec_bold() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_bold(true);

    spec
}

fn spec_dim() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_dimmed(true);

    spec
}

/// Write `value` in the given style then reset.
fn write_styled(
    out: &mut StandardStream,
    spec: &ColorSpec,
    value: &str,
) -> std::io::Result<()> {
    match out.set_color(spec) {
        Ok(_) => {}
        Err(err) => {
            de_err!("write_styled: out.set_color({:?}) returned error {}", spec, err);
            return Err(err);
        }
    }
    out.write_all(value.as_bytes())?;
    out.reset()?;

    Ok(())
}

fn write_plain(
    out: &mut StandardStream,
    value: &str,
) -> std::io::Result<()> {
    out.write_all(value.as_bytes())
}

/// How many of `width` bar columns are filled for `count` of `total`.
pub(crate) fn bar_cells(count: Count, total: Count, width: usize) -> usize {
    if total == 0 {
        return 0;
    }

    (((count as f64) / (total as f64)) * (width as f64)).round() as usize
}

/// Count `T<digits>` token occurrences in `text`.
pub(crate) fn count_tokens(text: &str) -> usize {
    TOKEN_REGEX.find_iter(text).count()
}

/// Head`…`tail preview of `leftover`, limited to roughly `limit` chars.
pub(crate) fn leftover_preview(leftover: &str, limit: usize) -> String {
    if limit == 0 {
        return String::new();
    }
    let chars: Vec<char> = leftover.chars().collect();
    if chars.len() <= limit {
        return leftover.to_string();
    }
    let head_len: usize = std::cmp::max(1, limit / 2);
    let tail_len: usize = std::cmp::max(1, limit - head_len);
    let head: String = chars[..head_len].iter().collect();
    let tail: String = chars[chars.len() - tail_len..].iter().collect();

    format!("{} … {}", head, tail)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// report sections
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn print_banner(
    out: &mut StandardStream,
    settings: &ReportSettings,
) -> std::io::Result<()> {
    if !settings.decorations {
        return Ok(());
    }

    let pad_left: usize = (BANNER_INNER_WIDTH - BANNER_TITLE.len()) / 2;
    let pad_right: usize = BANNER_INNER_WIDTH - BANNER_TITLE.len() - pad_left;
    let top: String = format!("┌{}┐\n", "─".repeat(BANNER_INNER_WIDTH));
    let mid: String = format!(
        "│{}{}{}│\n",
        " ".repeat(pad_left),
        BANNER_TITLE,
        " ".repeat(pad_right),
    );
    let bottom: String = format!("└{}┘\n", "─".repeat(BANNER_INNER_WIDTH));
    let spec = spec_bold_fg(COLOR_BANNER);
    write_styled(out, &spec, &top)?;
    write_styled(out, &spec, &mid)?;
    write_styled(out, &spec, &bottom)?;

    Ok(())
}

fn print_counts(
    out: &mut StandardStream,
    settings: &ReportSettings,
    counts: &InvariantCounts,
) -> std::io::Result<()> {
    let total: Count = counts.iter().sum();
    let markers: &[&str; 3] = if settings.decorations {
        &MARKERS_DECORATED
    } else {
        &MARKERS_PLAIN
    };
    let labels: Vec<String> = INVARIANT_CATALOG
        .iter()
        .map(|template: &InvariantTemplate| {
            format!("{} {}", markers[(template.id - 1) as usize], template.label())
        })
        .collect();
    // markers may be double- or single-column glyphs; align by display width
    let label_width_max: usize = labels
        .iter()
        .map(|label| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);

    write_plain(out, "\n")?;
    write_styled(out, &spec_bold(), "Counts:\n")?;
    for (label, count) in labels.iter().zip(counts.iter()) {
        let pad: usize = label_width_max - UnicodeWidthStr::width(label.as_str());
        let percent: f64 = if total != 0 {
            (*count as f64) * 100.0 / (total as f64)
        } else {
            0.0
        };
        let filled: usize = bar_cells(*count, total, settings.bar_width);
        write_plain(out, &format!("  {}{}  ", label, " ".repeat(pad)))?;
        write_styled(out, &spec_fg(COLOR_GOOD), &"█".repeat(filled))?;
        write_plain(out, &".".repeat(settings.bar_width - filled))?;
        write_plain(out, "  ")?;
        write_styled(out, &spec_fg(COLOR_GOOD), &count.to_string())?;
        write_plain(out, &format!("  ({:.1}%)\n", percent))?;
    }
    write_plain(out, "\n")?;
    write_styled(out, &spec_bold(), "Total invariants matched: ")?;
    write_styled(out, &spec_fg(COLOR_GOOD), &total.to_string())?;
    write_plain(out, "\n")?;

    Ok(())
}

fn print_diagnostics(
    out: &mut StandardStream,
    settings: &ReportSettings,
    original_text: &str,
    result: &InvariantCheckResult,
) -> std::io::Result<()> {
    if !settings.verbose {
        return Ok(());
    }

    let input_len: LogSz = result.log_length;
    let left_len: LogSz = result.leftover_length;
    let consumed_ratio: f64 = if input_len != 0 {
        1.0 - (left_len as f64) / (input_len as f64)
    } else {
        1.0
    };
    write_plain(out, "\n")?;
    write_styled(
        out,
        &spec_dim(),
        &format!(
            "Input length: {}, leftover length: {}, consumed: {:.1}%\n",
            input_len,
            left_len,
            consumed_ratio * 100.0,
        ),
    )?;
    write_styled(
        out,
        &spec_dim(),
        &format!(
            "Token occurrences in input: {}, in leftover: {}\n",
            count_tokens(original_text),
            count_tokens(&result.leftover_transitions),
        ),
    )?;

    Ok(())
}

/// Print the leftover preview with each `T<digits>` token highlighted.
fn print_leftover(
    out: &mut StandardStream,
    preview: &str,
) -> std::io::Result<()> {
    let mut at: usize = 0;
    for match_ in TOKEN_REGEX.find_iter(preview) {
        write_plain(out, &preview[at..match_.start()])?;
        write_styled(out, &spec_bold_fg(COLOR_BAD), match_.as_str())?;
        at = match_.end();
    }
    write_plain(out, &preview[at..])?;
    write_plain(out, "\n")?;

    Ok(())
}

fn print_status(
    out: &mut StandardStream,
    settings: &ReportSettings,
    result: &InvariantCheckResult,
) -> std::io::Result<()> {
    write_plain(out, "\n")?;
    if result.fully_consumed {
        let message: &str = if settings.decorations {
            "No leftover transitions. ✨\n"
        } else {
            "No leftover transitions.\n"
        };
        write_styled(out, &spec_fg(COLOR_GOOD), message)?;

        return Ok(());
    }

    write_styled(
        out,
        &spec_fg(COLOR_WARN),
        "NOTE: leftover transitions found (this can happen if the simulation stops mid-invariant).\n",
    )?;
    write_plain(out, "\n")?;
    let preview: String =
        leftover_preview(&result.leftover_transitions, PREVIEW_LIMIT_DEFAULT);
    print_leftover(out, &preview)?;

    Ok(())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// print_report
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print the full report to stdout: banner, counts, optional
/// diagnostics, and status. `original_text` is the raw input (used only
/// for the diagnostic token count). A quiet `settings` prints nothing.
pub fn print_report(
    original_text: &str,
    result: &InvariantCheckResult,
    settings: &ReportSettings,
) -> std::io::Result<()> {
    if settings.quiet {
        return Ok(());
    }

    let mut out = StandardStream::stdout(settings.color_choice);
    print_banner(&mut out, settings)?;
    print_counts(&mut out, settings, &result.invariant_counts)?;
    print_diagnostics(&mut out, settings, original_text, result)?;
    print_status(&mut out, settings, result)?;
    out.flush()?;

    Ok(())
}

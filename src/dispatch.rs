//! The stdin command protocol: banner, command code, per-command handlers.
//!
//! Everything here is generic over the input and output streams, so the
//! whole protocol runs against in-memory buffers in tests and against
//! locked stdin/stdout in `main`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use quill_calendar::{CalendarError, days_to_nearest_leap_year};
use quill_reader::{ReadConfig, ReadError, read_block, read_request_line};
use quill_text::{TextBuffer, collapse_spaces, count_occurrences, strip_digits};

/// Fixed banner printed before anything is read.
const BANNER: &str = concat!("quill ", env!("CARGO_PKG_VERSION"), " (type 5 for help)");

/// A recognized command code from the first input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `0`: print the text block verbatim.
    Echo,
    /// `1`: count occurrences of a search substring in the block.
    Count,
    /// `2`: day distance from a date line to the nearest leap year.
    LeapDistance,
    /// `3`: collapse runs of ASCII spaces in the block.
    CollapseSpaces,
    /// `4`: strip ASCII digits from the block.
    StripDigits,
    /// `5`: print the help listing.
    Help,
}

impl Command {
    /// Maps an integer command code to its command, or `None` for codes
    /// outside the protocol.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Echo),
            1 => Some(Self::Count),
            2 => Some(Self::LeapDistance),
            3 => Some(Self::CollapseSpaces),
            4 => Some(Self::StripDigits),
            5 => Some(Self::Help),
            _ => None,
        }
    }
}

/// Runs one protocol exchange over the given streams.
///
/// Prints the banner, reads the command code from the first line of
/// `input`, and dispatches. Recoverable per-command problems (a bad date
/// line, a missing search line) print one `Error: ...` diagnostic on
/// `output` and still return `Ok`. Protocol failures return `Err`: an
/// unparseable or unrecognized command code, a violated read limit, or a
/// failing stream.
///
/// # Errors
///
/// See above; the caller is expected to report the error and exit
/// nonzero.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    writeln!(output, "{BANNER}")?;

    let code = read_command(input)?;
    let Some(command) = Command::from_code(code) else {
        bail!("invalid command: {code} (valid commands are 0..=5)");
    };
    info!(?command, code, "dispatching");

    let config = ReadConfig::default();
    match command {
        Command::Echo => echo(input, output, &config),
        Command::Count => count(input, output, &config),
        Command::LeapDistance => leap_distance(input, output, &config),
        Command::CollapseSpaces => collapse(input, output, &config),
        Command::StripDigits => digits(input, output, &config),
        Command::Help => help(output),
    }
}

/// Reads the first input line and parses it as an integer command code.
fn read_command<R: BufRead>(input: &mut R) -> Result<i64> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read command line")?;
    let token = line.trim();
    token
        .parse()
        .with_context(|| format!("invalid command token {token:?} (expected an integer)"))
}

fn read_text<R: BufRead>(input: &mut R, config: &ReadConfig) -> Result<TextBuffer> {
    read_block(input, config).context("failed to read text block")
}

fn echo<R: BufRead, W: Write>(input: &mut R, output: &mut W, config: &ReadConfig) -> Result<()> {
    let text = read_text(input, config)?;
    // Verbatim: no trailing newline beyond what the block itself holds.
    write!(output, "{text}")?;
    Ok(())
}

fn count<R: BufRead, W: Write>(input: &mut R, output: &mut W, config: &ReadConfig) -> Result<()> {
    let text = read_text(input, config)?;
    let needle = match read_request_line(input, config.max_line_len()) {
        Ok(needle) => needle,
        Err(ReadError::MissingLine) => {
            writeln!(output, "Error: Missing search line")?;
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to read search line"),
    };
    let n = count_occurrences(&needle, text.as_str());
    debug!(needle_len = needle.len(), n, "counted occurrences");
    writeln!(output, "{n}")?;
    Ok(())
}

fn leap_distance<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &ReadConfig,
) -> Result<()> {
    let text = read_text(input, config)?;
    match days_to_nearest_leap_year(text.as_str()) {
        Ok(days) => writeln!(output, "{days}")?,
        Err(CalendarError::InvalidFormat { .. }) => {
            writeln!(output, "Error: Invalid date format")?;
        }
        Err(e) => {
            debug!(%e, "date line rejected");
            writeln!(output, "Error: Invalid date")?;
        }
    }
    Ok(())
}

fn collapse<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &ReadConfig,
) -> Result<()> {
    let mut text = read_text(input, config)?;
    collapse_spaces(&mut text).context("failed to collapse spaces")?;
    writeln!(output, "{text}")?;
    Ok(())
}

fn digits<R: BufRead, W: Write>(input: &mut R, output: &mut W, config: &ReadConfig) -> Result<()> {
    let mut text = read_text(input, config)?;
    strip_digits(&mut text).context("failed to strip digits")?;
    writeln!(output, "{text}")?;
    Ok(())
}

fn help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Available commands:")?;
    writeln!(output, "  0  print the text block unchanged")?;
    writeln!(output, "  1  count substring occurrences (search text on the next line)")?;
    writeln!(output, "  2  days from a date (day month year) to the nearest leap year")?;
    writeln!(output, "  3  collapse runs of spaces")?;
    writeln!(output, "  4  remove all digits")?;
    writeln!(output, "  5  show this help")?;
    writeln!(output, "Text blocks end at two consecutive blank lines.")?;
    Ok(())
}

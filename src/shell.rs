//! Line-oriented shell: reads commands, executes them against a session and
//! writes the results as text.

use std::io::{self, BufRead, Write};

use crate::command::HELP_TEXT;
use crate::error::{Error, Result};
use crate::session::{Reply, Session};

/// Message written for unrecognized or invalid input.
pub const UNKNOWN_COMMAND_TEXT: &str = "Unknown command. Type HELP for help.";

/// Text written for an empty `FIND` result.
pub const NO_MATCHES_TEXT: &str = "(no matches)";

/// Runs the input loop until `END`, an empty line, or end of input.
///
/// Recoverable errors are reported on `output` and the loop continues.
///
/// # Errors
///
/// Returns an error only if reading `input` or writing `output` fails.
///
/// # Example
///
/// ```rust
/// use stackdb::{shell, Options, Session};
///
/// # fn main() -> Result<(), stackdb::Error> {
/// let mut session = Session::new(Options::new().print_help_on_start(false))?;
/// let input = b"SET a 10\nGET a\nEND\n";
/// let mut output = Vec::new();
///
/// shell::run(&mut session, &input[..], &mut output)?;
/// assert_eq!(String::from_utf8_lossy(&output), "10\n");
/// # Ok(())
/// # }
/// ```
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut output: W) -> Result<()> {
    if session.options().print_help_on_start {
        writeln!(output, "{}", HELP_TEXT)?;
    }

    let mut buf = Vec::new();
    while session.is_running() {
        if let Some(prompt) = &session.options().prompt {
            write!(output, "{}", prompt)?;
            output.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            log::info!("End of input");
            break;
        }

        // invalid UTF-8 fails validation in the parser like any other bad line
        let line = String::from_utf8_lossy(&buf);
        match session.execute_line(&line) {
            Ok(reply) => render(&reply, &mut output)?,
            Err(e) if e.is_recoverable() => report(&e, &mut output)?,
            Err(e) => return Err(e),
        }
    }

    output.flush()?;
    Ok(())
}

/// Writes a reply as text.
pub fn render<W: Write>(reply: &Reply, output: &mut W) -> io::Result<()> {
    match reply {
        Reply::Ok | Reply::Value(None) => Ok(()),
        Reply::Value(Some(value)) => writeln!(output, "{}", value),
        Reply::Keys(keys) if keys.is_empty() => writeln!(output, "{}", NO_MATCHES_TEXT),
        Reply::Keys(keys) => writeln!(output, "{}", keys.join(" ")),
        Reply::Count(count) => writeln!(output, "{}", count),
        Reply::Help => writeln!(output, "{}", HELP_TEXT),
        Reply::Layers(layers) => {
            writeln!(output, "depth {}", layers.len().saturating_sub(1))?;
            for (index, layer) in layers.iter().enumerate() {
                write!(output, "layer {}: ", index)?;
                serde_json::to_writer(&mut *output, layer).map_err(io::Error::from)?;
                writeln!(output)?;
            }
            Ok(())
        }
    }
}

/// Writes a recoverable error as text.
pub fn report<W: Write>(error: &Error, output: &mut W) -> io::Result<()> {
    match error {
        Error::UnknownCommand(line) => {
            log::warn!("Rejected input line {:?}", line);
            writeln!(output, "{}", UNKNOWN_COMMAND_TEXT)
        }
        other => writeln!(output, "{}", other),
    }
}

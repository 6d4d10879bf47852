//! Parsing of text input lines into commands.
//!
//! Lines are split on single spaces into an action keyword and up to two
//! arguments. The keyword is case-insensitive. Keys must be alphabetic and
//! values alphanumeric; any line that fails these checks is reported the same
//! way as an unrecognized keyword.

use crate::error::{Error, Result};

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `SET <key> <value>`
    Set {
        /// Key to write
        key: String,
        /// Value to store
        value: String,
    },
    /// `UNSET <key>`
    Unset {
        /// Key to delete
        key: String,
    },
    /// `GET <key>`
    Get {
        /// Key to read
        key: String,
    },
    /// `FIND <value>`
    Find {
        /// Value to search for
        value: String,
    },
    /// `COUNTS <value>`
    Counts {
        /// Value to count
        value: String,
    },
    /// `BEGIN`
    Begin,
    /// `ROLLBACK`
    Rollback,
    /// `COMMIT`
    Commit,
    /// `HELP`
    Help,
    /// `END`, or an empty line
    End,
    /// `R`: dump the raw layer stack. Only recognized in diagnostic mode.
    Dump,
}

/// Usage text printed by `HELP`.
pub const HELP_TEXT: &str = "\
How to use:                             For transactions use:
SET    variable value                   BEGIN
UNSET  variable                         ROLLBACK
GET    variable                         COMMIT
FIND   value
COUNTS value
END";

fn is_key(arg: &str) -> bool {
    !arg.is_empty() && arg.chars().all(char::is_alphabetic)
}

fn is_value(arg: &str) -> bool {
    !arg.is_empty() && arg.chars().all(char::is_alphanumeric)
}

impl Command {
    /// Parses one input line.
    ///
    /// `diagnostics` enables the `R` command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] for unrecognized keywords and for
    /// arguments that fail validation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stackdb::Command;
    ///
    /// let cmd = Command::parse("set a 10", false).unwrap();
    /// assert_eq!(cmd, Command::Set { key: "a".into(), value: "10".into() });
    ///
    /// assert!(Command::parse("SET a1 10", false).is_err());
    /// ```
    pub fn parse(line: &str, diagnostics: bool) -> Result<Self> {
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        let mut fields = line.split(' ');
        let action = fields.next().unwrap_or("").to_uppercase();
        let arg1 = fields.next().unwrap_or("");
        let arg2 = fields.next().unwrap_or("");

        let command = match action.as_str() {
            "SET" if is_key(arg1) && is_value(arg2) => {
                Command::Set { key: arg1.to_string(), value: arg2.to_string() }
            }
            "UNSET" if is_key(arg1) => Command::Unset { key: arg1.to_string() },
            "GET" if is_key(arg1) => Command::Get { key: arg1.to_string() },
            "FIND" if is_value(arg1) => Command::Find { value: arg1.to_string() },
            "COUNTS" if is_value(arg1) => Command::Counts { value: arg1.to_string() },
            "END" | "" => Command::End,
            "BEGIN" => Command::Begin,
            "ROLLBACK" => Command::Rollback,
            "COMMIT" => Command::Commit,
            "HELP" => Command::Help,
            "R" if diagnostics => Command::Dump,
            _ => return Err(Error::unknown_command(line)),
        };

        Ok(command)
    }

}

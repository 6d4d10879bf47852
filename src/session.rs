//! A single client session driving one transaction stack.

use crate::command::Command;
use crate::config::Options;
use crate::error::{Error, Result};
use crate::layer::Layer;
use crate::stack::TransactionStack;

/// Structured result of executing a command.
///
/// Rendering to text is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The command succeeded and has nothing to report.
    Ok,

    /// Result of `GET`: the effective value, if any.
    Value(Option<String>),

    /// Result of `FIND`: matching keys in ascending order.
    Keys(Vec<String>),

    /// Result of `COUNTS`.
    Count(usize),

    /// `HELP` was requested.
    Help,

    /// Snapshot of the raw layer stack, base first.
    Layers(Vec<Layer>),
}

/// A session owns its own transaction stack; nothing is shared between
/// sessions.
///
/// # Example
///
/// ```rust
/// use stackdb::{Command, Options, Reply, Session};
///
/// # fn main() -> Result<(), stackdb::Error> {
/// let mut session = Session::new(Options::default())?;
/// session.execute_line("SET a 10")?;
/// assert_eq!(session.execute_line("GET a")?, Reply::Value(Some("10".to_string())));
///
/// session.execute(Command::End)?;
/// assert!(!session.is_running());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Session {
    options: Options,
    stack: TransactionStack,
    running: bool,
}

impl Session {
    /// Creates a session with an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        log::info!("Session started (trace: {})", options.trace);
        Ok(Self { options, stack: TransactionStack::new(), running: true })
    }

    /// Returns `false` once `END` has been executed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the session options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the underlying transaction stack.
    pub fn stack(&self) -> &TransactionStack {
        &self.stack
    }

    /// Parses and executes one input line.
    pub fn execute_line(&mut self, line: &str) -> Result<Reply> {
        let command = Command::parse(line, self.options.trace)?;
        self.execute(command)
    }

    /// Executes a parsed command against the stack.
    ///
    /// # Errors
    ///
    /// - [`Error::NoActiveTransaction`] for `ROLLBACK` with no open transaction
    /// - [`Error::UnknownCommand`] for `R` outside diagnostic mode
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let reply = match command {
            Command::Set { key, value } => {
                self.stack.set(key, value);
                Reply::Ok
            }
            Command::Unset { key } => {
                self.stack.unset(&key);
                Reply::Ok
            }
            Command::Get { key } => Reply::Value(self.stack.get(&key).map(str::to_owned)),
            Command::Find { value } => Reply::Keys(self.stack.find(&value)),
            Command::Counts { value } => Reply::Count(self.stack.counts(&value)),
            Command::Begin => {
                self.stack.begin();
                Reply::Ok
            }
            Command::Rollback => {
                self.stack.rollback()?;
                Reply::Ok
            }
            Command::Commit => {
                self.stack.commit();
                Reply::Ok
            }
            Command::Help => Reply::Help,
            Command::End => {
                self.running = false;
                log::info!("Session ended with {} open transactions", self.stack.depth());
                Reply::Ok
            }
            Command::Dump if self.options.trace => Reply::Layers(self.stack.layers().to_vec()),
            Command::Dump => return Err(Error::unknown_command("R")),
        };

        Ok(reply)
    }
}

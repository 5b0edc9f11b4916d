//! Line-oriented prompt over any reader/writer pair.
//!
//! Ctrl-C is delivered through an [`Interrupt`] flag set from the signal
//! handler. The flag is checked and cleared after every line read, so an
//! interrupt surfaces as [`InputError::Interrupted`] on the answer being
//! read. End of input is reported the same way. Paired with
//! [`crate::console::ConsoleInput`], a pending read returns as soon as the
//! flag is set.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared interrupt flag
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the current action
    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Read and clear the flag
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub enum InputError {
    /// Ctrl-C or end of input
    Interrupted,
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Interrupted => write!(f, "input interrupted"),
            InputError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            InputError::Interrupted => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

pub struct Prompt<R, W> {
    input: R,
    output: W,
    interrupt: Interrupt,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W, interrupt: Interrupt) -> Self {
        Self {
            input,
            output,
            interrupt,
        }
    }

    /// Display stream
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `label` without a newline and read one answer.
    ///
    /// The returned line has its trailing newline removed. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn ask(&mut self, label: &str) -> Result<String, InputError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        let read = self.input.read_until(b'\n', &mut buf)?;
        if self.interrupt.take() || read == 0 {
            return Err(InputError::Interrupted);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Block until the user presses Enter
    pub fn pause(&mut self) -> Result<(), InputError> {
        self.ask("\nPress Enter to continue...").map(|_| ())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new(), Interrupt::new())
    }

    #[test]
    fn test_ask_strips_line_ending() {
        let mut p = prompt("42\r\nnext\n");
        assert_eq!(p.ask("Value: ").unwrap(), "42");
        assert_eq!(p.ask("Again: ").unwrap(), "next");

        let (_, out) = p.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "Value: Again: ");
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut p = prompt("\n");
        assert_eq!(p.ask("> ").unwrap(), "");
        assert!(matches!(p.ask("> "), Err(InputError::Interrupted)));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompt("0");
        assert_eq!(p.ask("> ").unwrap(), "0");
    }

    #[test]
    fn test_interrupt_flag_cancels_once() {
        let interrupt = Interrupt::new();
        let mut p = Prompt::new("a\nb\n".as_bytes(), Vec::new(), interrupt.clone());

        interrupt.trigger();
        assert!(matches!(p.ask("> "), Err(InputError::Interrupted)));
        assert_eq!(p.ask("> ").unwrap(), "b");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"1\xff\n";
        let mut p = Prompt::new(bytes, Vec::new(), Interrupt::new());
        assert_eq!(p.ask("> ").unwrap(), "1\u{fffd}");
    }
}

//! Terminal input read on a worker thread.
//!
//! A blocking read on stdin is restarted after SIGINT, so a prompt waiting on
//! it would not notice Ctrl-C until Enter is pressed. Instead the reader thread
//! forwards whole lines over a channel, and the Ctrl-C handler pushes a
//! wake-up onto the same channel through [`ConsoleWaker::interrupt`].

use std::io::{self, BufRead, BufReader, Read};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use crate::prompt::Interrupt;

enum ConsoleEvent {
    Line(Vec<u8>),
    Wake,
    Closed,
    Failed(io::Error),
}

/// [`BufRead`] side of the channel, handed to the prompt
pub struct ConsoleInput {
    events: Receiver<ConsoleEvent>,
    interrupt: Interrupt,
    line: Vec<u8>,
    pos: usize,
    closed: bool,
}

/// Sending side: used by the reader thread and the Ctrl-C handler
#[derive(Clone)]
pub struct ConsoleWaker {
    events: Sender<ConsoleEvent>,
    interrupt: Interrupt,
}

impl ConsoleWaker {
    /// Set the interrupt flag and wake any pending read
    pub fn interrupt(&self) {
        self.interrupt.trigger();
        let _ = self.events.send(ConsoleEvent::Wake);
    }

    /// Queue one line of input. Returns false once the input side is gone.
    pub fn send_line(&self, line: impl Into<Vec<u8>>) -> bool {
        self.events.send(ConsoleEvent::Line(line.into())).is_ok()
    }

    /// Signal end of input
    pub fn close(&self) {
        let _ = self.events.send(ConsoleEvent::Closed);
    }

    fn fail(&self, err: io::Error) {
        let _ = self.events.send(ConsoleEvent::Failed(err));
    }
}

impl ConsoleInput {
    /// Unconnected input; lines arrive only through the returned waker
    pub fn channel(interrupt: Interrupt) -> (Self, ConsoleWaker) {
        let (tx, rx) = channel();
        let input = Self {
            events: rx,
            interrupt: interrupt.clone(),
            line: Vec::new(),
            pos: 0,
            closed: false,
        };
        let waker = ConsoleWaker {
            events: tx,
            interrupt,
        };
        (input, waker)
    }

    /// Forward `reader` line by line from a background thread
    pub fn spawn<R>(reader: R, interrupt: Interrupt) -> io::Result<(Self, ConsoleWaker)>
    where
        R: Read + Send + 'static,
    {
        let (input, waker) = Self::channel(interrupt);
        let feeder = waker.clone();
        thread::Builder::new()
            .name("console-reader".into())
            .spawn(move || feed_lines(reader, &feeder))?;
        Ok((input, waker))
    }
}

fn feed_lines<R: Read>(reader: R, waker: &ConsoleWaker) {
    let mut reader = BufReader::new(reader);
    loop {
        let mut line = Vec::new();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                waker.close();
                return;
            }
            Ok(_) => {
                if !waker.send_line(line) {
                    return;
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Console read failed");
                waker.fail(err);
                return;
            }
        }
    }
}

impl Read for ConsoleInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for ConsoleInput {
    /// Blocks until a line, end of input, or a live interrupt arrives.
    /// The last two yield an empty buffer.
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        while self.pos >= self.line.len() && !self.closed {
            match self.events.recv() {
                Ok(ConsoleEvent::Line(line)) => {
                    self.line = line;
                    self.pos = 0;
                }
                // A wake-up whose flag was already taken by an earlier answer is stale
                Ok(ConsoleEvent::Wake) => {
                    if self.interrupt.is_set() {
                        break;
                    }
                }
                Ok(ConsoleEvent::Closed) | Err(_) => self.closed = true,
                Ok(ConsoleEvent::Failed(err)) => {
                    self.closed = true;
                    return Err(err);
                }
            }
        }
        Ok(&self.line[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.line.len());
    }
}

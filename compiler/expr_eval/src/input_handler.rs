//! Where `get` reads integers from.
//!
//! `get` skips input until it reaches a digit, or a `+`/`-` immediately
//! followed by a digit, then consumes the longest run of digits. At end of
//! input it yields nothing, and the intrinsic returns void.

use std::io::{self, BufRead, Cursor};
use std::sync::Arc;

use parking_lot::Mutex;

/// Reads from the process's standard input.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    pub fn read_int(&self) -> io::Result<Option<i64>> {
        scan_int(&mut io::stdin().lock())
    }
}

/// Reads from a fixed in-memory buffer.
pub struct BufferInputHandler {
    input: Mutex<Cursor<Vec<u8>>>,
}

impl BufferInputHandler {
    pub fn new(input: impl Into<Vec<u8>>) -> Self {
        BufferInputHandler {
            input: Mutex::new(Cursor::new(input.into())),
        }
    }

    pub fn read_int(&self) -> io::Result<Option<i64>> {
        scan_int(&mut *self.input.lock())
    }
}

pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Buffer(BufferInputHandler),
}

impl InputHandlerImpl {
    /// Next integer in the input, or `None` at end of input.
    pub fn read_int(&self) -> io::Result<Option<i64>> {
        match self {
            Self::Stdin(h) => h.read_int(),
            Self::Buffer(h) => h.read_int(),
        }
    }
}

pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin(StdinInputHandler))
}

pub fn buffer_input(input: impl Into<Vec<u8>>) -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Buffer(BufferInputHandler::new(input)))
}

/// Next byte without consuming it.
fn peek(reader: &mut impl BufRead) -> io::Result<Option<u8>> {
    Ok(reader.fill_buf()?.first().copied())
}

/// Scan one signed integer.
///
/// A sign only counts when the very next byte is a digit: in `-x5` the
/// result is `5`, in `--5` it is `-5`.
pub(crate) fn scan_int(reader: &mut impl BufRead) -> io::Result<Option<i64>> {
    let mut sign: Option<u8> = None;

    let first_digit = loop {
        let Some(byte) = peek(reader)? else {
            return Ok(None);
        };
        reader.consume(1);
        match byte {
            b'0'..=b'9' => break byte,
            b'+' | b'-' => sign = Some(byte),
            _ => sign = None,
        }
    };

    let mut text = String::with_capacity(20);
    if sign == Some(b'-') {
        text.push('-');
    }
    text.push(char::from(first_digit));
    while let Some(byte @ b'0'..=b'9') = peek(reader)? {
        text.push(char::from(byte));
        reader.consume(1);
    }

    text.parse::<i64>().map(Some).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("input integer `{text}` is out of range"),
        )
    })
}

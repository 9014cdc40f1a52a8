//! Object header scanning
//!
//! Every decompressed object starts with `<kind> <size>\0`. The scanner reads
//! that prefix and hands back a reader bounded to exactly `size` bytes, so
//! whoever consumes the payload cannot run into bytes that follow it.
//!
//! A scanner reads one object per cycle. Scanning again while the previous
//! payload still has unread bytes fails with [`DecodeError::NotReset`] instead
//! of parsing a "header" out of the middle of that payload.

use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{DecodeError, DecodeResult};
use std::io::{BufRead, BufReader, Read, Take};

/// Upper bound on `<kind> <size>\0`; the longest kind plus a 20-digit size fits
const MAX_HEADER_LENGTH: u64 = 32;

/// Kind and declared payload length of an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectHeader {
    pub kind: ObjectType,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Ready,
    AwaitingConsumption,
}

/// Reads object headers from a buffered view over `R`
///
/// The buffered view is kept across resets so one scanner can walk any
/// number of objects without reallocating its buffer.
pub struct HeaderScanner<R> {
    reader: Take<BufReader<R>>,
    state: ScanState,
}

impl<R: Read> HeaderScanner<R> {
    pub fn new(inner: R) -> Self {
        HeaderScanner {
            reader: BufReader::new(inner).take(MAX_HEADER_LENGTH),
            state: ScanState::Ready,
        }
    }

    /// Parse the header and return a reader primed on the payload after it
    ///
    /// # Errors
    ///
    /// - `NotReset` if the previous payload was neither fully read nor reset
    /// - `UnknownObjectKind` if the kind token is not one of the four kinds
    /// - `MalformedSize` if the size contains anything but decimal digits
    /// - `TruncatedHeader` if the stream ends before a terminator
    pub fn scan(&mut self) -> DecodeResult<(ObjectHeader, &mut Take<BufReader<R>>)> {
        if self.state == ScanState::AwaitingConsumption && !self.payload_exhausted()? {
            return Err(DecodeError::NotReset);
        }

        self.reader.set_limit(MAX_HEADER_LENGTH);

        let kind = self.read_token(b' ')?;
        let kind = ObjectType::try_from(kind.as_str())?;

        let size = self.read_token(b'\0')?;
        if size.is_empty() || !size.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::MalformedSize { raw: size });
        }
        let size = size
            .parse::<u64>()
            .map_err(|_| DecodeError::MalformedSize { raw: size.clone() })?;

        self.reader.set_limit(size);
        self.state = ScanState::AwaitingConsumption;

        Ok((ObjectHeader { kind, size }, &mut self.reader))
    }

    /// The bounded payload reader of the current cycle, if a header was scanned
    pub fn payload(&mut self) -> Option<&mut Take<BufReader<R>>> {
        match self.state {
            ScanState::AwaitingConsumption => Some(&mut self.reader),
            ScanState::Ready => None,
        }
    }

    /// Point the scanner at a new source, discarding anything still buffered
    pub fn reset(&mut self, inner: R) {
        self.rewind_with(|current| *current = inner);
    }

    /// Re-initialise the underlying source in place and rewind the buffered view
    pub(crate) fn rewind_with(&mut self, reinit: impl FnOnce(&mut R)) {
        let buffered = self.reader.get_mut();
        reinit(buffered.get_mut());

        let stale = buffered.buffer().len();
        buffered.consume(stale);

        self.reader.set_limit(MAX_HEADER_LENGTH);
        self.state = ScanState::Ready;
    }

    /// Pull the first chunk of the source into the buffered view
    pub(crate) fn prime(&mut self) -> std::io::Result<()> {
        self.reader.get_mut().fill_buf().map(|_| ())
    }

    pub fn into_inner(self) -> R {
        self.reader.into_inner().into_inner()
    }

    /// Whether the current payload has no bytes left, either because its
    /// declared size was read or because the source ended early
    fn payload_exhausted(&mut self) -> std::io::Result<bool> {
        if self.reader.limit() == 0 {
            return Ok(true);
        }

        Ok(self.reader.fill_buf()?.is_empty())
    }

    fn read_token(&mut self, terminator: u8) -> DecodeResult<String> {
        let mut token = Vec::new();
        self.reader.read_until(terminator, &mut token)?;

        if token.pop() != Some(terminator) {
            return Err(DecodeError::TruncatedHeader);
        }

        Ok(String::from_utf8_lossy(&token).into_owned())
    }
}

use crate::artifacts::decoder::header_scanner::{HeaderScanner, ObjectHeader};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{DecodeError, DecodeResult};
use flate2::read::ZlibDecoder;
use std::io::{BufRead, BufReader, Read, Take};

/// Where the decoder stands within the current object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cycle {
    /// Freshly opened or reset, nothing read yet
    Ready,
    /// Header scanned, payload untouched
    HeaderRead,
    /// Payload handed out or parsed
    Consumed,
}

/// Decompresses loose objects and decodes their header and commit body
///
/// One decoder is meant to be reset onto object after object: the zlib
/// state and the buffered view are re-initialised in place rather than
/// rebuilt. Each object is a cycle; asking for a second header or a second
/// commit within one cycle fails with [`DecodeError::NotReset`].
///
/// Not safe for concurrent use; give every worker its own decoder.
pub struct ObjectDecoder<S> {
    scanner: HeaderScanner<ZlibDecoder<S>>,
    cycle: Cycle,
}

impl<S: Read> ObjectDecoder<S> {
    /// Start decoding a compressed source
    ///
    /// # Errors
    ///
    /// `Decompression` if the source does not start with a valid zlib stream
    pub fn open(source: S) -> DecodeResult<Self> {
        let mut decoder = ObjectDecoder {
            scanner: HeaderScanner::new(ZlibDecoder::new(source)),
            cycle: Cycle::Ready,
        };
        decoder.prime()?;

        Ok(decoder)
    }

    /// Read the header of the current object
    pub fn header(&mut self) -> DecodeResult<ObjectHeader> {
        if self.cycle != Cycle::Ready {
            return Err(DecodeError::NotReset);
        }

        let (header, _) = self.scanner.scan()?;
        self.cycle = Cycle::HeaderRead;

        Ok(header)
    }

    /// Decode the current object as a commit
    ///
    /// Scans the header first when [`Self::header`] was not called this
    /// cycle, so callers that already know the object is a commit can skip
    /// the header step.
    pub fn decode_commit(&mut self, oid: ObjectId) -> DecodeResult<Commit> {
        let payload = self.take_payload()?;
        Commit::parse(oid, payload)
    }

    /// Bounded reader over the raw payload of the current object
    pub fn payload(&mut self) -> DecodeResult<impl BufRead + '_> {
        self.take_payload()
    }

    /// Re-initialise the decoder onto a new compressed source
    ///
    /// The decompression state and buffered view are reused; afterwards the
    /// decoder behaves exactly like one freshly opened on `source`.
    pub fn reset(&mut self, source: S) -> DecodeResult<()> {
        self.scanner.rewind_with(|zlib| {
            zlib.reset(source);
        });
        self.cycle = Cycle::Ready;

        self.prime()
    }

    /// Release the decompression stage, returning the current source
    pub fn close(self) -> S {
        self.scanner.into_inner().into_inner()
    }

    fn take_payload(&mut self) -> DecodeResult<&mut Take<BufReader<ZlibDecoder<S>>>> {
        match self.cycle {
            Cycle::Ready => {
                self.scanner.scan()?;
            }
            Cycle::HeaderRead => {}
            Cycle::Consumed => return Err(DecodeError::NotReset),
        }
        self.cycle = Cycle::Consumed;

        self.scanner.payload().ok_or(DecodeError::NotReset)
    }

    fn prime(&mut self) -> DecodeResult<()> {
        self.scanner.prime().map_err(DecodeError::Decompression)
    }
}

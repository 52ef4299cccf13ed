//! # lzstring-rs
//!
//! Compatible implementation of the "LZString" family of string-oriented
//! LZ-78/LZW-derived compressors and decompressors.
//!
//! * `bitstream` packs and unpacks arbitrary-width unsigned integers into a
//!   byte buffer using the non-obvious bit ordering the wire format needs,
//!   and converts to/from two reversed-index base-64 alphabets.
//! * `compressor` builds the growing dictionary while scanning the input.
//! * `decompressor` replays that dictionary to reconstruct the input.
//!
//! Both work on a complete in-memory [`bitstream::BitStream`] — this is not
//! a streaming codec, and the algorithm is fixed by interoperability with
//! the reference `lz-string` JavaScript library, not tunable.
//!
//! ## Buffer Example
//!
//! ```rs
//! use lzstring_rs::*;
//! let compressed = compress_to_base64(b"hello hello hello").expect("compression failed");
//! let expanded = decompress_from_base64(&compressed).expect("decompression failed");
//! assert_eq!(expanded, b"hello hello hello");
//! ```

pub mod bitstream;
mod compressor;
mod decompressor;
mod token;

use bitstream::BitStream;

/// Errors produced by the codec.
///
/// [`Error::DictionaryInconsistency`] is the only condition the decoder can
/// raise: a corrupt or non-LZString stream. [`Error::PreconditionViolation`]
/// signals a contract bug in a caller of [`bitstream::BitStream`] (a
/// zero-width `append_value`, or a bit value outside `{0,1}`); truncated
/// input and unknown base-64 characters are explicitly not errors — reads
/// past the end of a stream fabricate zero bits, and alphabet conversion
/// truncates silently at the first unrecognised character.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("token {token} not found in compression dictionary of size {dictsize}")]
    DictionaryInconsistency { token: u32, dictsize: usize },
    #[error("{0}")]
    PreconditionViolation(String),
}

/// Selects which of the three interchangeable wire containers to produce or
/// consume. The compression algorithm itself has no tunables; this is the
/// only axis of configuration the codec exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Raw byte buffer: the `BitStream`'s byte store as-is.
    Bytes,
    /// Padded base-64 text using [`bitstream::STD_ALPHABET`].
    Base64,
    /// Unpadded URL-safe base-64 text using [`bitstream::URI_ALPHABET`].
    UrlComponent,
}

/// Compress `data`, producing the raw byte buffer of the resulting
/// [`bitstream::BitStream`].
pub fn compress_to_bytes(data: &[u8]) -> Result<Vec<u8>, Error> {
    Ok(compressor::compress(data)?.bytes().to_vec())
}

/// Compress `data`, rendering the result as padded base-64 text.
pub fn compress_to_base64(data: &[u8]) -> Result<String, Error> {
    Ok(compressor::compress(data)?.to_base64())
}

/// Compress `data`, rendering the result as unpadded URL-safe base-64 text.
pub fn compress_to_url_component(data: &[u8]) -> Result<String, Error> {
    Ok(compressor::compress(data)?.to_url_component())
}

/// Decompress a raw byte buffer produced by [`compress_to_bytes`].
pub fn decompress_from_bytes(data: &[u8]) -> Result<Vec<u8>, Error> {
    decompressor::decompress(BitStream::from_bytes(data))
}

/// Decompress padded base-64 text produced by [`compress_to_base64`].
pub fn decompress_from_base64(text: &str) -> Result<Vec<u8>, Error> {
    decompressor::decompress(BitStream::from_base64(text)?)
}

/// Decompress unpadded URL-safe base-64 text produced by
/// [`compress_to_url_component`].
pub fn decompress_from_url_component(text: &str) -> Result<Vec<u8>, Error> {
    decompressor::decompress(BitStream::from_url_component(text)?)
}

/// Compress `data` into whichever container `format` selects.
/// Returns UTF-8 bytes in all three cases, so callers working from a
/// `--format` style flag don't need to branch on the return type.
pub fn compress_with(data: &[u8], format: Format) -> Result<Vec<u8>, Error> {
    match format {
        Format::Bytes => compress_to_bytes(data),
        Format::Base64 => Ok(compress_to_base64(data)?.into_bytes()),
        Format::UrlComponent => Ok(compress_to_url_component(data)?.into_bytes()),
    }
}

/// Decompress `container`, interpreting it according to `format`.
pub fn decompress_with(container: &[u8], format: Format) -> Result<Vec<u8>, Error> {
    match format {
        Format::Bytes => decompress_from_bytes(container),
        Format::Base64 => {
            let text = std::str::from_utf8(container).map_err(|e| {
                Error::PreconditionViolation(format!("container is not valid utf-8: {e}"))
            })?;
            decompress_from_base64(text)
        }
        Format::UrlComponent => {
            let text = std::str::from_utf8(container).map_err(|e| {
                Error::PreconditionViolation(format!("container is not valid utf-8: {e}"))
            })?;
            decompress_from_url_component(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_bytes() {
        let data = b"I am Sam. Sam I am. I do not like this Sam I am.\n";
        let compressed = compress_to_bytes(data).unwrap();
        assert_eq!(decompress_from_bytes(&compressed).unwrap(), data.to_vec());
    }

    #[test]
    fn round_trip_base64() {
        let data = b"The quick brown fox jumps over the lazy dog.";
        let compressed = compress_to_base64(data).unwrap();
        assert_eq!(decompress_from_base64(&compressed).unwrap(), data.to_vec());
    }

    #[test]
    fn round_trip_url_component() {
        let data = b"The quick brown fox jumps over the lazy dog.";
        let compressed = compress_to_url_component(data).unwrap();
        assert_eq!(
            decompress_from_url_component(&compressed).unwrap(),
            data.to_vec()
        );
    }

    #[test]
    fn format_dispatch_round_trips() {
        let data = b"round trip through Format dispatch";
        for format in [Format::Bytes, Format::Base64, Format::UrlComponent] {
            let compressed = compress_with(data, format).unwrap();
            assert_eq!(decompress_with(&compressed, format).unwrap(), data.to_vec());
        }
    }

    #[test]
    fn decodes_circuitjs_fixture() {
        let text = "CQAgjCAMB0l3BWc0FwCwCY0HYEA4cEMElURTJyBTAWjDACgwE0QMs21KBmANj06VKGKOSZl2rMGlZ8B01sNEIGAGXAZ5vSnkphtbUQDMAhgBsAzlXJQ1GgZJC62HEZVOXrSSAwDu9lykDRx9-fWEOcIDQ8AMwTUDov1iI1kcQ5PitPQBOESiYsDyU8GLiXlswsoQK9JrK0vzgyIMfAFkQOXAZEDR9brS2FAYOrqxKPtquQwxhoA";
        let expected = "$ 1 0.000005 1.500424758475255 50 5 50 5e-11\n154 224 240 368 240 0 2 0 5\n150 224 144 368 144 0 2 0 5\nL 128 160 80 160 2 0 false 5 0\nL 128 224 80 224 2 0 false 5 0\nw 128 224 160 224 0\nw 160 224 160 128 0\nw 160 128 224 128 0\nw 160 224 224 224 0\nw 128 160 192 160 0\nw 192 160 192 256 0\nw 192 256 224 256 0\nw 192 160 224 160 0\nM 368 144 416 144 2 2.5\nM 368 240 416 240 2 2.5\n";
        assert_eq!(
            decompress_from_url_component(text).unwrap(),
            expected.as_bytes().to_vec()
        );
    }
}

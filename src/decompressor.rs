//! Dictionary-based decompressor
//!
//! Reconstructs the original byte sequence from a [`BitStream`] by replaying
//! the same dictionary-construction algorithm the compressor runs, one token
//! at a time.

use std::collections::HashMap;

use crate::bitstream::BitStream;
use crate::token::Token;
use crate::Error;

/// Number of bits needed to write `dictsize - 1`, i.e. `ceil(log2(dictsize))`.
/// `dictsize` is always `>= 3` in practice, so `dictsize - 1 >= 2` and the
/// zero-bit-length case never arises here.
fn token_width(dictsize: usize) -> usize {
    let x = dictsize - 1;
    (usize::BITS - x.leading_zeros()) as usize
}

/// Decompress a [`BitStream`] into the original byte sequence.
///
/// Returns [`Error::DictionaryInconsistency`] if a token names neither a
/// reserved marker, an already-assigned dictionary index, nor the single
/// index equal to the current dictionary size (the "kwkwk" case).
pub fn decompress(mut bs: BitStream) -> Result<Vec<u8>, Error> {
    log::debug!("entering decompress loop, initial bit_len {}", bs.bit_len());
    bs.seek(0);
    let mut dict: HashMap<u32, Vec<u8>> = HashMap::new();
    let mut dictsize: usize = 3;
    let mut last_data: Option<Vec<u8>> = None;
    let mut output = Vec::new();

    loop {
        if bs.pos() >= bs.bit_len() {
            // No real bits remain; any further tokens would be fabricated
            // zeros with no corresponding input. Treat this as an implicit
            // EndOfStream rather than looping forever.
            log::debug!("cursor reached end of stream, {} bytes produced", output.len());
            return Ok(output);
        }
        let w = token_width(dictsize);
        let raw = bs.read_bits(w);
        let token = Token::from_raw(raw);
        log::trace!("token {:?} at width {}, dictsize {}", token, w, dictsize);

        let data = match token {
            Token::LiteralByte | Token::LiteralWord => {
                let n = if token == Token::LiteralByte { 1 } else { 2 };
                let bytes = bs.read_chars(n);
                dict.insert(dictsize as u32, bytes.clone());
                dictsize += 1;
                bytes
            }
            Token::EndOfStream => {
                log::debug!("end of stream token, {} bytes produced", output.len());
                return Ok(output);
            }
            Token::Reference(idx) => {
                if let Some(existing) = dict.get(&idx) {
                    existing.clone()
                } else if idx as usize == dictsize {
                    match &last_data {
                        Some(prev) => {
                            let mut data = prev.clone();
                            data.push(prev[0]);
                            data
                        }
                        None => {
                            log::error!("kwkwk reference with no prior entry, token {idx}");
                            return Err(Error::DictionaryInconsistency {
                                token: idx,
                                dictsize,
                            });
                        }
                    }
                } else {
                    log::error!("token {idx} not in dictionary of size {dictsize}");
                    return Err(Error::DictionaryInconsistency {
                        token: idx,
                        dictsize,
                    });
                }
            }
        };

        output.extend_from_slice(&data);
        if let Some(prev) = &last_data {
            let mut pair = prev.clone();
            pair.push(data[0]);
            dict.insert(dictsize as u32, pair);
            dictsize += 1;
        }
        last_data = Some(data);
    }
}

//! Dictionary-based compressor
//!
//! Builds a growing dictionary of byte patterns while scanning the input,
//! emitting a token each time the longest matched prefix cannot be extended,
//! mirroring the decompressor's dictionary growth step for step so the two
//! sides' token widths never diverge.

use std::collections::{HashMap, HashSet};

use crate::bitstream::BitStream;
use crate::Error;

/// Number of bits needed to write `dictsize - 1`. Identical formula to the
/// decompressor's; kept as a private copy here rather than shared, since the
/// two call sites reason about different variables (`dictsize` vs `|cdict|`)
/// even though the arithmetic coincides.
fn token_width(dictsize: usize) -> usize {
    let x = dictsize - 1;
    (usize::BITS - x.leading_zeros()) as usize
}

struct Encoder {
    cdict: HashMap<Vec<u8>, u32>,
    not_emitted_yet: HashSet<Vec<u8>>,
    dictsize: usize,
    out: BitStream,
}

impl Encoder {
    fn new() -> Self {
        Self {
            cdict: HashMap::new(),
            not_emitted_yet: HashSet::new(),
            dictsize: 3,
            out: BitStream::new(),
        }
    }

    /// Write `pattern` as a token, inserting a literal the first time a
    /// single byte pattern is emitted.
    fn emit(&mut self, pattern: &[u8]) -> Result<(), Error> {
        let w = token_width(self.dictsize);
        if self.not_emitted_yet.remove(pattern) {
            log::trace!("emit literal {:02x?} at width {w}", pattern);
            self.out.append_value(0, w)?; // LiteralByte
            self.out.append_value(pattern[0] as u32, 8)?;
            self.dictsize += 2;
        } else {
            let idx = self.cdict[pattern];
            log::trace!("emit reference {idx} at width {w}");
            self.out.append_value(idx, w)?;
            self.dictsize += 1;
        }
        Ok(())
    }
}

/// Compress a byte sequence into a [`BitStream`].
pub fn compress(data: &[u8]) -> Result<BitStream, Error> {
    log::debug!("entering compress loop, {} bytes input", data.len());
    let mut enc = Encoder::new();
    let mut pattern: Vec<u8> = Vec::new();

    for &b in data {
        let s = [b];
        if !enc.cdict.contains_key(&s[..]) {
            let idx = enc.cdict.len() as u32 + 3;
            enc.cdict.insert(s.to_vec(), idx);
            enc.not_emitted_yet.insert(s.to_vec());
        }

        let mut combined = pattern.clone();
        combined.push(b);
        if enc.cdict.contains_key(&combined) {
            pattern = combined;
        } else {
            enc.emit(&pattern)?;
            let idx = enc.cdict.len() as u32 + 3;
            enc.cdict.insert(combined, idx);
            pattern = s.to_vec();
        }
    }

    if !pattern.is_empty() {
        enc.emit(&pattern)?;
    }

    let w = token_width(enc.dictsize);
    log::debug!("emitting end of stream at width {w}, final dictsize {}", enc.dictsize);
    enc.out.append_value(2, w)?; // EndOfStream

    Ok(enc.out)
}

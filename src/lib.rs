//! MHash-384 - a table-driven 384-bit digest, streaming and one-shot.
//! **WARNING: NOT CRYPTOGRAPHICALLY SECURE** - checksums and fingerprints only.

mod digest;
mod error;
mod tables;

pub use digest::{Digest, DigestParseError, DIGEST_LEN};
pub use error::{Error, Result};

use std::io::{ErrorKind, Read};

pub const VERSION_MAJOR: u16 = 2;
pub const VERSION_MINOR: u16 = 0;
pub const VERSION_PATCH: u16 = 0;

pub fn version() -> (u16, u16, u16) {
    (VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH)
}

/// Table row reserved for the finalization feedback chain.
const FEEDBACK_ROW: usize = 256;

const READ_CHUNK: usize = 8 * 1024;

/// Multiplier for the 128-to-64 bit mixing step.
const KMUL: u64 = 0x9DDFEA08EB382D69;

#[inline(always)]
fn mix128_to_64(u: u64, mut v: u64) -> u64 {
    v = (v ^ u).wrapping_mul(KMUL);
    v ^= v >> 47;
    v = (v ^ u).wrapping_mul(KMUL);
    v ^= v >> 47;
    v.wrapping_mul(KMUL)
}

/// Incremental MHash-384 state.
///
/// Feed bytes with the `update*` methods, then call [`digest`](Self::digest)
/// once. A finalized state rejects further use until [`reset`](Self::reset).
#[derive(Clone)]
pub struct MHash384 {
    words: [u64; 6],
    rnd: u8,
    finished: bool,
}

impl MHash384 {
    pub fn new() -> Self {
        Self {
            words: tables::TABLES.init,
            rnd: 0,
            finished: false,
        }
    }

    /// Returns the state to its initial value, discarding all input so far.
    pub fn reset(&mut self) {
        self.words = tables::TABLES.init;
        self.rnd = 0;
        self.finished = false;
    }

    /// One table-driven transition. All six new words are derived from the
    /// pre-transition state; the round counter picks the permutation row
    /// and advances with wraparound.
    #[inline(always)]
    fn step(&mut self, row: usize) {
        let t = &*tables::TABLES;
        let xor = &t.xor[row];
        let add = &t.add[row];
        let mix = &t.mix[self.rnd as usize];
        self.rnd = self.rnd.wrapping_add(1);
        let prev = self.words;
        for i in 0..6 {
            self.words[i] =
                mix128_to_64(prev[i].wrapping_add(add[i]), prev[mix[i] as usize]) ^ xor[i];
        }
    }

    #[inline(always)]
    fn absorb(&mut self, byte: u8) {
        self.step(byte as usize);
    }

    fn check_active(&self) -> Result<()> {
        if self.finished {
            Err(Error::Finished)
        } else {
            Ok(())
        }
    }

    pub fn update_byte(&mut self, byte: u8) -> Result<()> {
        self.check_active()?;
        self.absorb(byte);
        Ok(())
    }

    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.check_active()?;
        for &b in data {
            self.absorb(b);
        }
        Ok(())
    }

    /// Absorbs `data[offset..offset + len]`, validating the range first.
    /// A failed validation leaves the state untouched.
    pub fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<()> {
        let end = match offset.checked_add(len) {
            Some(end) if end <= data.len() => end,
            _ => {
                return Err(Error::Range {
                    offset,
                    len,
                    size: data.len(),
                })
            }
        };
        self.update(&data[offset..end])
    }

    /// Absorbs the UTF-8 bytes of `text`.
    pub fn update_str(&mut self, text: &str) -> Result<()> {
        self.update(text.as_bytes())
    }

    /// Drains `reader` to end of stream, returning the number of bytes
    /// absorbed. Interrupted reads are retried; any other I/O failure
    /// aborts with the state partially advanced.
    pub fn update_reader<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        self.check_active()?;
        let mut buf = [0u8; READ_CHUNK];
        let mut total = 0u64;
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(Error::Io(err)),
            };
            for &b in &buf[..n] {
                self.absorb(b);
            }
            total += n as u64;
        }
        Ok(total)
    }

    /// Finalizes the state and returns the 48-byte digest. The state is
    /// marked finished; call [`reset`](Self::reset) to hash again.
    pub fn digest(&mut self) -> Result<Digest> {
        self.check_active()?;
        Ok(self.finish())
    }

    /// The feedback chain: 48 extra transitions, each keyed by the byte
    /// extracted in the previous one (row 256 seeds the first).
    fn finish(&mut self) -> Digest {
        let mut out = [0u8; DIGEST_LEN];
        let mut row = FEEDBACK_ROW;
        for i in 0..DIGEST_LEN {
            self.step(row);
            let sel = tables::TABLES.fin[i] as usize;
            let byte = (self.words[sel / 8] >> ((sel % 8) * 8)) as u8;
            out[i] = byte;
            row = byte as usize;
        }
        self.finished = true;
        Digest::from(out)
    }
}

impl Default for MHash384 {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot digest of a byte slice.
pub fn compute(data: &[u8]) -> Digest {
    let mut state = MHash384::new();
    for &b in data {
        state.absorb(b);
    }
    state.finish()
}

/// One-shot digest of the UTF-8 bytes of `text`.
pub fn compute_str(text: &str) -> Digest {
    compute(text.as_bytes())
}

/// One-shot digest of everything `reader` yields.
pub fn compute_reader<R: Read>(reader: &mut R) -> Result<Digest> {
    let mut state = MHash384::new();
    state.update_reader(reader)?;
    Ok(state.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let data = b"Hello, MHash-384!";
        assert_eq!(compute(data), compute(data));
    }

    #[test]
    fn test_streaming_matches_oneshot() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let oneshot = compute(data);

        let mut streaming = MHash384::new();
        streaming.update(&data[..10]).unwrap();
        streaming.update(&data[10..20]).unwrap();
        streaming.update(&data[20..]).unwrap();
        assert_eq!(oneshot, streaming.digest().unwrap());
    }

    #[test]
    fn test_single_bytes_match_slice() {
        let data = b"incremental";
        let mut state = MHash384::new();
        for &b in data.iter() {
            state.update_byte(b).unwrap();
        }
        assert_eq!(compute(data), state.digest().unwrap());
    }

    #[test]
    fn test_range_validation() {
        let data = b"0123456789";
        let mut state = MHash384::new();
        assert!(matches!(
            state.update_range(data, 4, 7),
            Err(Error::Range { offset: 4, len: 7, size: 10 })
        ));
        assert!(matches!(
            state.update_range(data, usize::MAX, 2),
            Err(Error::Range { .. })
        ));
        // rejected range leaves the state equal to a fresh one
        state.update_range(data, 2, 5).unwrap();
        let mut expect = MHash384::new();
        expect.update(&data[2..7]).unwrap();
        assert_eq!(state.digest().unwrap(), expect.digest().unwrap());
    }

    #[test]
    fn test_finished_state_rejects_use() {
        let mut state = MHash384::new();
        state.update(b"abc").unwrap();
        let first = state.digest().unwrap();
        assert!(matches!(state.update(b"x"), Err(Error::Finished)));
        assert!(matches!(state.update_byte(b'x'), Err(Error::Finished)));
        assert!(matches!(state.digest(), Err(Error::Finished)));

        state.reset();
        state.update(b"abc").unwrap();
        assert_eq!(state.digest().unwrap(), first);
    }

    #[test]
    fn test_reader_matches_slice() {
        let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
        let mut cursor = std::io::Cursor::new(&data);
        let mut state = MHash384::new();
        let n = state.update_reader(&mut cursor).unwrap();
        assert_eq!(n, data.len() as u64);
        assert_eq!(state.digest().unwrap(), compute(&data));
    }

    #[test]
    fn test_empty_input() {
        let d = compute(b"");
        assert_eq!(d.as_bytes().len(), DIGEST_LEN);
        assert_eq!(compute_str(""), d);
    }

    #[test]
    fn test_round_counter_carries_into_finalization() {
        // identical words, different counter phase: only the feedback
        // loop's permutation-row choice can tell them apart
        let mut advanced = MHash384::new();
        advanced.update(b"abc").unwrap();
        let mut rephased = advanced.clone();
        rephased.rnd = 0;
        assert_ne!(advanced.digest().unwrap(), rephased.digest().unwrap());
    }

    #[test]
    fn test_round_counter_wraps() {
        let mut state = MHash384::new();
        state.update(&[0u8; 256]).unwrap();
        assert_eq!(state.rnd, 0);
        let mut fresh = MHash384::new();
        assert_eq!(state.rnd, fresh.rnd);
        // same phase, different words
        fresh.update(&[1u8; 256]).unwrap();
        assert_ne!(state.digest().unwrap(), fresh.digest().unwrap());
    }
}

//! Decoding many words at once. Every word gets its own `Result`, and the
//! output order always follows the input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::bits::{Word, HEX_DIGITS};
use crate::decoder::{DecodeError, Decoded, Decoder};
use crate::table::Fpscr;

/// Words decoded when no limit is given.
pub const DEFAULT_LIMIT: usize = 50;

/// Below this many words the serial path is used even when parallel is on.
pub const PARALLEL_THRESHOLD: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum number of words to decode; `None` decodes everything.
    pub limit: Option<usize>,
    pub parallel: bool,
    pub fpscr: Fpscr,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { limit: Some(DEFAULT_LIMIT), parallel: true, fpscr: Fpscr::empty() }
    }
}

impl BatchConfig {
    fn take(&self, len: usize) -> usize {
        self.limit.map_or(len, |n| n.min(len))
    }
}

/// One decoded chunk, keeping the source text for listing output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub index: usize,
    pub chunk: String,
    pub result: Result<Decoded, DecodeError>,
}

fn run<T, F, R>(items: &[T], cfg: &BatchConfig, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &T) -> R + Sync + Send,
{
    let items = &items[..cfg.take(items.len())];
    if cfg.parallel && items.len() >= PARALLEL_THRESHOLD {
        trace!(count = items.len(), "parallel batch");
        items.par_iter().enumerate().map(|(i, t)| f(i, t)).collect()
    } else {
        trace!(count = items.len(), "serial batch");
        items.iter().enumerate().map(|(i, t)| f(i, t)).collect()
    }
}

pub fn decode_words<D>(decoder: &D, words: &[Word], cfg: &BatchConfig) -> Vec<Result<Decoded, DecodeError>>
where
    D: Decoder + Sync,
{
    run(words, cfg, |_, &w| decoder.decode_with(w, cfg.fpscr))
}

/// Decode 4-hex-digit chunks, e.g. the output of a section dump.
pub fn decode_chunks<D, S>(decoder: &D, chunks: &[S], cfg: &BatchConfig) -> Vec<BatchItem>
where
    D: Decoder + Sync,
    S: AsRef<str> + Sync,
{
    run(chunks, cfg, |index, chunk| {
        let chunk = chunk.as_ref();
        let result = Word::from_hex(chunk).and_then(|w| decoder.decode_with(w, cfg.fpscr));
        BatchItem { index, chunk: chunk.to_string(), result }
    })
}

/// Split one line of hex text into 4-character chunks. A short tail is dropped.
pub fn split_chunks(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    chars.chunks_exact(HEX_DIGITS).map(|c| c.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{init, Variant};
    use pretty_assertions::assert_eq;

    #[test]
    fn chunks_split_per_line() {
        assert_eq!(split_chunks("d0010009e1"), vec!["d001", "0009"]);
        assert!(split_chunks("abc").is_empty());
    }

    #[test]
    fn limit_and_isolation() {
        let sh1 = init().unwrap().engine(Variant::SuperH1);
        let chunks = ["0009", "zz09", "301c", "ffff", "000b"];
        let cfg = BatchConfig { limit: Some(4), ..Default::default() };
        let out = decode_chunks(sh1, &chunks, &cfg);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0].result.as_ref().unwrap().to_string(), "NOP");
        assert!(out[1].result.is_err());
        assert_eq!(out[2].result.as_ref().unwrap().to_string(), "ADD R1, R0");
        assert_eq!(out[3].result.as_ref().unwrap().to_string(), "word1111111111111111");
        assert_eq!(out[3].index, 3);
    }

    #[test]
    fn parallel_matches_serial() {
        let sh4 = init().unwrap().engine(Variant::SuperH4);
        let words: Vec<Word> = (0..4096u16).map(|i| Word(i.wrapping_mul(37))).collect();
        let serial = BatchConfig { limit: None, parallel: false, ..Default::default() };
        let parallel = BatchConfig { limit: None, parallel: true, ..Default::default() };
        assert_eq!(decode_words(sh4, &words, &serial), decode_words(sh4, &words, &parallel));
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg: BatchConfig = serde_json::from_str(r#"{"limit": 7}"#).unwrap();
        assert_eq!(cfg, BatchConfig { limit: Some(7), ..Default::default() });
    }
}

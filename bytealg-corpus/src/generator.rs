use core::fmt;

use heapless::Vec;
use typed_builder::TypedBuilder;

const DEFAULT_SEED: u64 = 0x2545_f491_4f6c_dd1d;

/// The set of bytes filler is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alphabet {
    /// Every byte value.
    Full,
    /// Printable ASCII, `0x20..=0x7e`.
    Ascii,
}

impl Alphabet {
    const fn bounds(&self) -> (u8, u8) {
        match self {
            Alphabet::Full => (0x00, 0xff),
            Alphabet::Ascii => (0x20, 0x7e),
        }
    }

    // never returns `needle`
    fn filler(&self, random: u64, needle: u8) -> u8 {
        let (low, high) = self.bounds();
        let width = (high - low) as u64 + 1;
        let byte = low + (random % width) as u8;
        if byte != needle {
            byte
        } else if byte == high {
            low
        } else {
            byte + 1
        }
    }
}

#[derive(Debug)]
struct Xorshift64(u64);

impl Xorshift64 {
    fn new(seed: u64) -> Self {
        // zero is a fixed point of xorshift
        Self(if seed == 0 { DEFAULT_SEED } else { seed })
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateError {
    TooManyMatches { matches: usize, len: usize },
    CapacityExceeded { len: usize, capacity: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::TooManyMatches { matches, len } => write!(
                f,
                "cannot place {} matches in a haystack of {} bytes.",
                matches, len
            ),
            GenerateError::CapacityExceeded { len, capacity } => write!(
                f,
                "length {} exceeds the corpus capacity {}.",
                len, capacity
            ),
        }
    }
}

/// Parameters of a generated corpus.
///
/// The same parameters always produce the same bytes.
#[derive(Clone, Debug, TypedBuilder)]
pub struct Generator<const N: usize> {
    needle: u8,
    len: usize,
    matches: usize,
    #[builder(default = DEFAULT_SEED)]
    seed: u64,
    #[builder(default = Alphabet::Full)]
    alphabet: Alphabet,
}

impl<const N: usize> Generator<N> {
    /// Fills `len` bytes and places exactly `matches` needles among them.
    ///
    /// Positions are picked by selection sampling: a position is taken with
    /// probability `needed / remaining`, so every subset of positions is
    /// equally likely and the last positions are forced when required.
    pub fn generate(&self) -> Result<Corpus<N>, GenerateError> {
        let capacity_exceeded = GenerateError::CapacityExceeded {
            len: self.len,
            capacity: N,
        };
        if self.len > N {
            return Err(capacity_exceeded);
        }
        if self.matches > self.len {
            return Err(GenerateError::TooManyMatches {
                matches: self.matches,
                len: self.len,
            });
        }

        let mut rng = Xorshift64::new(self.seed);
        let mut bytes = Vec::<u8, N>::new();
        let mut needed = self.matches;
        for remaining in (1..=self.len).rev() {
            let byte = if (rng.below(remaining as u64) as usize) < needed {
                needed -= 1;
                self.needle
            } else {
                self.alphabet.filler(rng.next_u64(), self.needle)
            };
            bytes.push(byte).map_err(|_| capacity_exceeded)?;
        }
        debug_assert_eq!(needed, 0);

        Ok(Corpus {
            bytes,
            needle: self.needle,
            expected: self.matches,
        })
    }
}

/// A haystack together with the number of needles it contains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus<const N: usize> {
    bytes: Vec<u8, N>,
    needle: u8,
    expected: usize,
}

impl<const N: usize> Corpus<N> {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn needle(&self) -> u8 {
        self.needle
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    /// The haystack as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }
}

//! Base62 and base82 string forms for non-negative `i64` values
//!
//! Digits are written least-significant first, so `i64::MAX` encodes to
//! `7m85Y0n8LzA` in base62. Both alphabets are instances of the same
//! [`Alphabet`] codec and never depend on the id layout.
use once_cell::sync::Lazy;

/// Character set for base62 encoding (0-9, A-Z, a-z)
const BASE62_SYMBOLS: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Character set for base82 encoding (base62 plus punctuation)
const BASE82_SYMBOLS: &[u8; 82] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@$^*()_-{}[]<>,.`~|";

/// Maximum accepted string length for any alphabet (11 digits cover `i64::MAX` in base62)
pub const MAX_LEN: usize = 11;

const INVALID: u8 = u8::MAX;

static BASE62_LOOKUP: Lazy<[u8; 256]> = Lazy::new(|| reverse_table(BASE62_SYMBOLS));
static BASE82_LOOKUP: Lazy<[u8; 256]> = Lazy::new(|| reverse_table(BASE82_SYMBOLS));

/// The 62-symbol alphanumeric alphabet
pub static BASE62: Alphabet<62> = Alphabet::new(BASE62_SYMBOLS, &BASE62_LOOKUP);

/// The 82-symbol extended alphabet
pub static BASE82: Alphabet<82> = Alphabet::new(BASE82_SYMBOLS, &BASE82_LOOKUP);

fn reverse_table<const N: usize>(symbols: &[u8; N]) -> [u8; 256] {
    let mut map = [INVALID; 256];
    for (i, &c) in symbols.iter().enumerate() {
        map[c as usize] = i as u8;
    }
    map
}

/// Errors that can occur while encoding or decoding string forms
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Only non-negative values have a string form
    #[error("Cannot encode negative number {0}")]
    NegativeInput(i64),

    /// The input string is empty or too long
    #[error("Encoded length {len} is invalid, it must be between 1 and {max}")]
    InvalidLength { len: usize, max: usize },

    /// The input string contains a character outside the alphabet
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(char),

    /// The decoded value would not fit an i64
    #[error("Decoded value would overflow i64")]
    Overflow,
}

/// A positional base-`N` codec over a fixed set of ASCII symbols
#[derive(Debug)]
pub struct Alphabet<const N: usize> {
    symbols: &'static [u8; N],
    lookup: &'static Lazy<[u8; 256]>,
}

impl<const N: usize> Alphabet<N> {
    /// # Panics
    /// Panics (at compile time for statics) if the alphabet has fewer than 62
    /// symbols or contains non-ASCII bytes.
    pub const fn new(symbols: &'static [u8; N], lookup: &'static Lazy<[u8; 256]>) -> Self {
        assert!(N >= 62 && N < INVALID as usize, "alphabet must have 62..255 symbols");
        let mut i = 0;
        while i < N {
            assert!(symbols[i].is_ascii(), "alphabet symbols must be ASCII");
            i += 1;
        }
        Self { symbols, lookup }
    }

    /// Number of symbols in the alphabet
    #[inline(always)]
    pub const fn base(&self) -> usize {
        N
    }

    /// Encode into a caller-provided buffer without allocating
    pub fn encode_into<'a>(
        &self,
        value: i64,
        buf: &'a mut [u8; MAX_LEN],
    ) -> Result<&'a str, CodecError> {
        if value < 0 {
            return Err(CodecError::NegativeInput(value));
        }

        let base = N as u64;
        let mut rest = value as u64;
        let mut len = 0;
        // Emit at least one digit so zero encodes as "0"
        loop {
            buf[len] = self.symbols[(rest % base) as usize];
            len += 1;
            rest /= base;
            if rest == 0 {
                break;
            }
        }

        // Symbols are ASCII, checked in `new`, so this never fails
        let digits: &'a [u8] = &buf[..len];
        std::str::from_utf8(digits)
            .map_err(|e| CodecError::InvalidSymbol(char::from(digits[e.valid_up_to()])))
    }

    /// Encode a non-negative value
    pub fn encode(&self, value: i64) -> Result<String, CodecError> {
        let mut buf = [0u8; MAX_LEN];
        self.encode_into(value, &mut buf).map(str::to_owned)
    }

    /// Decode a string produced by [`Alphabet::encode`]
    pub fn decode(&self, encoded: &str) -> Result<i64, CodecError> {
        let len = encoded.chars().count();
        if len == 0 || len > MAX_LEN {
            return Err(CodecError::InvalidLength { len, max: MAX_LEN });
        }

        let mut digits = [0u8; MAX_LEN];
        for (slot, c) in digits.iter_mut().zip(encoded.chars()) {
            let digit = if c.is_ascii() {
                self.lookup[c as usize]
            } else {
                INVALID
            };
            if digit == INVALID {
                return Err(CodecError::InvalidSymbol(c));
            }
            *slot = digit;
        }

        // Least-significant digit comes first, so fold from the end
        let base = N as u64;
        let mut value: u64 = 0;
        for &digit in digits[..len].iter().rev() {
            value = value
                .checked_mul(base)
                .and_then(|v| v.checked_add(digit as u64))
                .ok_or(CodecError::Overflow)?;
        }

        i64::try_from(value).map_err(|_| CodecError::Overflow)
    }
}

/// Encode a non-negative value in base62
pub fn encode_base62(value: i64) -> Result<String, CodecError> {
    BASE62.encode(value)
}

/// Decode a base62 string
pub fn decode_base62(encoded: &str) -> Result<i64, CodecError> {
    BASE62.decode(encoded)
}

/// Encode a non-negative value in base82
pub fn encode_base82(value: i64) -> Result<String, CodecError> {
    BASE82.encode(value)
}

/// Decode a base82 string
pub fn decode_base82(encoded: &str) -> Result<i64, CodecError> {
    BASE82.decode(encoded)
}

//! Seed normalization for rendering sessions.
//!
//! A session seed arrives as a block hash (hex string, usually
//! `0x`-prefixed), a user-typed number, or free text. All three resolve
//! through the same path to one 64-bit state, so reproducibility is not
//! format-dependent: the official block-hash render and an exploratory
//! numeric preview go through identical resolution.

/// Normalized, immutable seed for one rendering session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed {
    raw: String,
    state: u64,
}

impl Seed {
    /// Normalize any textual input to a seed.
    ///
    /// Resolution order: decimal integer, then hex digits (block hash,
    /// low 64 bits), then a CRC32 digest of the raw bytes. Empty input
    /// resolves through the digest path to a canonical default rather
    /// than failing, since seeds may come from free-text entry.
    pub fn new(input: &str) -> Self {
        Seed {
            raw: input.to_string(),
            state: normalize(input),
        }
    }

    /// Seed from an already-numeric input (e.g. a block number).
    pub fn from_number(n: u64) -> Self {
        Seed {
            raw: n.to_string(),
            state: n,
        }
    }

    /// The 64-bit state that keys all randomness for the session.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// The input as supplied by the caller.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for Seed {
    fn from(input: &str) -> Self {
        Seed::new(input)
    }
}

impl From<u64> for Seed {
    fn from(n: u64) -> Self {
        Seed::from_number(n)
    }
}

fn normalize(input: &str) -> u64 {
    let trimmed = input.trim();

    if let Ok(n) = trimmed.parse::<u64>() {
        return n;
    }

    // Block hashes: take the low 64 bits of the hex value
    let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        let tail = &hex[hex.len().saturating_sub(16)..];
        if let Ok(n) = u64::from_str_radix(tail, 16) {
            return n;
        }
    }

    // Free text (including empty input): stable digest of the bytes
    crc32fast::hash(trimmed.as_bytes()) as u64
}

//! Constants for the NTRU public-key encryption scheme

/// Parameters of an NTRU instance over Z[x]/(x^N − 1).
pub struct NtruParams {
    /// Ring degree N
    pub n: usize,

    /// Small modulus p (an odd prime)
    pub p: i64,

    /// Large modulus q (a power of two, coprime to p)
    pub q: i64,

    /// Maximum attempts for the private-key polynomial search
    pub max_attempts: usize,
}

/// Base-3 digits consumed per embedded ASCII character.
pub const DIGITS_PER_CHAR: usize = 5;

/// Reference attempt budget for the private-key search.
///
/// A uniformly random ternary polynomial is invertible both mod p and
/// mod q roughly a third of the time, so five attempts still fail a
/// nontrivial fraction of calls; parameter sets meant to succeed on the
/// first call carry a larger budget.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

impl NtruParams {
    /// OAEP output length in bytes, `⌊N/5 · 3/4⌋ − 5`.
    ///
    /// Every 5 ternary digits carry one base64 character and every 4
    /// base64 characters carry 3 payload bytes; the slack of 5 absorbs
    /// the base64 padding and the codec terminator. Returns `None` when
    /// N is too small for the embedding to exist at all.
    pub const fn padded_len(&self) -> Option<usize> {
        let bytes = self.n / DIGITS_PER_CHAR * 3 / 4;
        if bytes > 5 {
            Some(bytes - 5)
        } else {
            None
        }
    }

    /// Number of base-3 digits the ring can embed, `⌊(N−1)/5⌋·5`.
    ///
    /// The message polynomial has degree at most N−2; the digit count is
    /// rounded down to a whole number of characters so the ternary codec
    /// always sees a multiple of 5.
    pub const fn digit_capacity(&self) -> usize {
        (self.n - 1) / DIGITS_PER_CHAR * DIGITS_PER_CHAR
    }
}

/// Toy parameters (N = 11, p = 3, q = 32): key generation and the ring
/// inverse invariants only. The derived OAEP length is negative, so the
/// encryption path rejects this set.
pub const NTRU_TOY: NtruParams = NtruParams {
    n: 11,
    p: 3,
    q: 32,
    max_attempts: DEFAULT_MAX_ATTEMPTS,
};

/// Demonstration parameters (N = 503, p = 3, q = 2048): supports the full
/// encrypt/decrypt path with a 70-byte OAEP block (about 26 plaintext
/// characters under SHA-1).
pub const NTRU_503: NtruParams = NtruParams {
    n: 503,
    p: 3,
    q: 2048,
    max_attempts: 40,
};

//! Constants for the McEliece public-key encryption scheme

/// Parameters of a binary Goppa code instance.
///
/// The code corrects up to `t` errors over a length-`n` code built from
/// GF(2^m); the code dimension is `k = n − t·m`.
pub struct GoppaParams {
    /// Code length (number of support elements)
    pub n: usize,

    /// Error correction capability (degree of the Goppa polynomial)
    pub t: usize,

    /// Extension degree of the field GF(2^m)
    pub m: usize,

    /// Maximum attempts for the random irreducible-polynomial search
    pub poly_attempts: usize,

    /// Maximum attempts for the invertible scrambler-matrix search
    pub matrix_attempts: usize,
}

impl GoppaParams {
    /// Code dimension `k = n − t·m`, the length of the message bit vector.
    pub const fn dimension(&self) -> usize {
        self.n - self.t * self.m
    }

    /// OAEP output length in bytes, `k / 8`.
    ///
    /// Only meaningful when `k` is a multiple of 8; `encrypt` rejects
    /// parameter sets where it is not.
    pub const fn message_bytes(&self) -> usize {
        self.dimension() / 8
    }
}

/// Toy parameters over GF(16): k = 7, enough to exercise key generation
/// and the generator-matrix invariants, but k is not byte-aligned so the
/// encryption path rejects this set.
pub const MCELIECE_TOY: GoppaParams = GoppaParams {
    n: 15,
    t: 2,
    m: 4,
    poly_attempts: 100,
    matrix_attempts: 100,
};

/// Demonstration parameters over GF(1024): k = 344 bits = 43 bytes, the
/// smallest set here whose OAEP output length (k/8 ≥ 42) supports SHA-1
/// padding. Key generation at this size takes minutes in debug builds.
pub const MCELIECE_1024: GoppaParams = GoppaParams {
    n: 1024,
    t: 68,
    m: 10,
    poly_attempts: 500,
    matrix_attempts: 100,
};

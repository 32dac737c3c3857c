//! Arithmetic over the truncated polynomial ring Z[x]/(x^N − 1)
//!
//! Ring elements are fixed-capacity coefficient vectors tagged with the
//! domain they are currently reduced in ([`Domain::Plain`] integers or
//! [`Domain::Mod`]). Operations between polynomials in different domains
//! are rejected; [`RingPoly::lift`] is the explicit escape hatch back to
//! plain integers.
//!
//! The two ring primitives are [`truncate_mod`] (reduction by x^N − 1,
//! folding every degree ≥ N contribution onto degree mod N) and
//! [`modulo_coeffs`] (coefficient-wise reduction that preserves the fixed
//! vector length). Everything else composes them around ordinary
//! polynomial multiplication.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

use crate::error::{Error, Result};


/// The reduction domain a ring element currently lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Plain integer coefficients, no modular reduction applied.
    Plain,
    /// Coefficients reduced into [0, m).
    Mod(i64),
}

/// Reduction by x^N − 1: every coefficient of degree ≥ n is folded onto
/// degree (degree mod n), summing overlapping contributions.
pub fn truncate_mod(coeffs: &[i64], n: usize) -> Vec<i64> {
    let mut out = vec![0i64; n];
    for (degree, &c) in coeffs.iter().enumerate() {
        out[degree % n] += c;
    }
    out
}

/// Coefficient-wise reduction into [0, m). No coefficient is dropped
/// even if it becomes zero, keeping the vector length fixed.
pub fn modulo_coeffs(coeffs: &[i64], m: i64) -> Vec<i64> {
    coeffs.iter().map(|&c| c.rem_euclid(m)).collect()
}

/// An element of Z[x]/(x^N − 1): exactly N coefficients, lowest degree
/// first, tagged with the current reduction domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingPoly {
    n: usize,
    coeffs: Vec<i64>,
    domain: Domain,
}

impl RingPoly {
    /// The zero element of the degree-n ring.
    pub fn zero(n: usize) -> Self {
        Self {
            n,
            coeffs: vec![0; n],
            domain: Domain::Plain,
        }
    }

    /// The multiplicative identity of the degree-n ring.
    pub fn one(n: usize) -> Self {
        let mut poly = Self::zero(n);
        poly.coeffs[0] = 1;
        poly
    }

    /// Builds a plain-domain element from up to n coefficients, lowest
    /// degree first; shorter inputs are zero-padded.
    pub fn from_coeffs(n: usize, coeffs: &[i64]) -> Result<Self> {
        if coeffs.len() > n {
            return Err(Error::Length {
                context: "ring coefficients",
                expected: n,
                actual: coeffs.len(),
            });
        }
        let mut poly = Self::zero(n);
        poly.coeffs[..coeffs.len()].copy_from_slice(coeffs);
        Ok(poly)
    }

    /// Draws a polynomial with every coefficient uniform in {−1, 0, 1}.
    pub fn sample_ternary<R: CryptoRng + RngCore>(rng: &mut R, n: usize) -> Self {
        let mut poly = Self::zero(n);
        for c in poly.coeffs.iter_mut() {
            *c = rng.gen_range(-1..=1);
        }
        poly
    }

    /// Ring degree N.
    pub fn ring_degree(&self) -> usize {
        self.n
    }

    /// The domain this element is currently reduced in.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// The coefficient vector, lowest degree first, always length N.
    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    /// Whether every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    fn check_compatible(&self, rhs: &Self, context: &'static str) -> Result<()> {
        if self.n != rhs.n {
            return Err(Error::Length {
                context,
                expected: self.n,
                actual: rhs.n,
            });
        }
        if self.domain != rhs.domain {
            return Err(Error::param(
                context,
                "operands are reduced in different domains",
            ));
        }
        Ok(())
    }

    /// Ring addition. Operands must share degree and domain; a modular
    /// result is reduced again.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs, "ring addition")?;
        let mut coeffs: Vec<i64> = self
            .coeffs
            .iter()
            .zip(&rhs.coeffs)
            .map(|(&a, &b)| a + b)
            .collect();
        if let Domain::Mod(m) = self.domain {
            coeffs = modulo_coeffs(&coeffs, m);
        }
        Ok(Self {
            n: self.n,
            coeffs,
            domain: self.domain,
        })
    }

    /// Multiplication by an integer scalar.
    pub fn scalar_mul(&self, scalar: i64) -> Self {
        let mut coeffs: Vec<i64> = self.coeffs.iter().map(|&c| c * scalar).collect();
        if let Domain::Mod(m) = self.domain {
            coeffs = modulo_coeffs(&coeffs, m);
        }
        Self {
            n: self.n,
            coeffs,
            domain: self.domain,
        }
    }

    /// Ring multiplication: ordinary polynomial convolution followed by
    /// [`truncate_mod`]. Operands must share degree and domain.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs, "ring multiplication")?;
        let mut conv = vec![0i64; 2 * self.n - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                conv[i + j] += a * b;
            }
        }
        let mut coeffs = truncate_mod(&conv, self.n);
        if let Domain::Mod(m) = self.domain {
            coeffs = modulo_coeffs(&coeffs, m);
        }
        Ok(Self {
            n: self.n,
            coeffs,
            domain: self.domain,
        })
    }

    /// Reduces every coefficient into [0, m), tagging the result with
    /// that domain.
    pub fn reduce_mod(&self, m: i64) -> Result<Self> {
        if m < 2 {
            return Err(Error::param("modulus", "must be at least 2"));
        }
        Ok(Self {
            n: self.n,
            coeffs: modulo_coeffs(&self.coeffs, m),
            domain: Domain::Mod(m),
        })
    }

    /// Retags the element as plain integers without touching the
    /// coefficients. This is the explicit re-reduction step required
    /// before mixing elements from different domains.
    pub fn lift(&self) -> Self {
        Self {
            n: self.n,
            coeffs: self.coeffs.clone(),
            domain: Domain::Plain,
        }
    }

    /// Center-lifts a mod-q element into the symmetric range
    /// (−q/2, q/2] by subtracting q from any coefficient exceeding q/2.
    pub fn center_lift(&self) -> Result<Self> {
        let q = match self.domain {
            Domain::Mod(q) => q,
            Domain::Plain => {
                return Err(Error::param(
                    "center lift",
                    "element is not reduced modulo anything",
                ))
            }
        };
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| if 2 * c > q { c - q } else { c })
            .collect();
        Ok(Self {
            n: self.n,
            coeffs,
            domain: Domain::Plain,
        })
    }
}

impl Zeroize for RingPoly {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

// ---- Inversion in the ring ----

fn poly_deg(v: &[i64]) -> Option<usize> {
    v.iter().rposition(|&c| c != 0)
}

// Inverse of a modulo p by the extended Euclidean algorithm on integers.
fn int_invert_mod(a: i64, p: i64) -> Result<i64> {
    let (mut r0, mut r1) = (p, a.rem_euclid(p));
    let (mut t0, mut t1) = (0i64, 1i64);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (t0, t1) = (t1, t0 - q * t1);
    }
    if r0 != 1 {
        return Err(Error::NotInvertible {
            context: "integers modulo p",
        });
    }
    Ok(t0.rem_euclid(p))
}

// Schoolbook product of two dense polynomials with coefficients mod p.
fn poly_mul_mod_p(a: &[i64], b: &[i64], p: i64) -> Vec<i64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0i64; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            out[i + j] = (out[i + j] + x * y).rem_euclid(p);
        }
    }
    out
}

// Long division over GF(p): returns (quotient, remainder).
fn poly_divmod_mod_p(num: &[i64], den: &[i64], p: i64) -> Result<(Vec<i64>, Vec<i64>)> {
    let dd = poly_deg(den).ok_or_else(|| {
        Error::param("denominator", "division by the zero polynomial")
    })?;
    let lead_inv = int_invert_mod(den[dd], p)?;
    let mut rem: Vec<i64> = num.to_vec();
    let nd = match poly_deg(&rem) {
        Some(d) if d >= dd => d,
        _ => return Ok((Vec::new(), rem)),
    };
    let mut quot = vec![0i64; nd - dd + 1];
    for shift in (0..=nd - dd).rev() {
        let coeff = rem.get(dd + shift).copied().unwrap_or(0).rem_euclid(p);
        if coeff == 0 {
            continue;
        }
        let factor = (coeff * lead_inv).rem_euclid(p);
        quot[shift] = factor;
        for i in 0..=dd {
            rem[i + shift] = (rem[i + shift] - factor * den[i]).rem_euclid(p);
        }
    }
    rem.truncate(poly_deg(&rem).map_or(0, |d| d + 1));
    Ok((quot, rem))
}

fn poly_sub_mod_p(a: &[i64], b: &[i64], p: i64) -> Vec<i64> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            (x - y).rem_euclid(p)
        })
        .collect()
}

/// Inverse of `f` in Z[x]/(x^N − 1) with coefficients modulo the prime
/// `p`, by the extended Euclidean algorithm over GF(p)[x].
///
/// Fails with [`Error::NotInvertible`] when gcd(f, x^N − 1) is not
/// constant modulo p.
pub fn invert_mod_prime(f: &RingPoly, p: i64) -> Result<RingPoly> {
    if p < 2 {
        return Err(Error::param("modulus", "must be at least 2"));
    }
    let n = f.n;
    // x^N - 1 over GF(p)
    let mut ring_poly = vec![0i64; n + 1];
    ring_poly[0] = (-1i64).rem_euclid(p);
    ring_poly[n] = 1;

    let reduced = modulo_coeffs(&f.coeffs, p);
    if poly_deg(&reduced).is_none() {
        return Err(Error::NotInvertible {
            context: "truncated polynomial ring",
        });
    }

    // Extended Euclid, tracking only the Bezout coefficient of f:
    // invariant r_i ≡ t_i · f (mod x^N − 1, p).
    let mut r0 = ring_poly;
    let mut r1 = reduced;
    let mut t0: Vec<i64> = Vec::new();
    let mut t1: Vec<i64> = vec![1];
    while poly_deg(&r1).is_some() {
        let (q, r2) = poly_divmod_mod_p(&r0, &r1, p)?;
        let t2 = poly_sub_mod_p(&t0, &poly_mul_mod_p(&q, &t1, p), p);
        r0 = r1;
        r1 = r2;
        t0 = t1;
        t1 = t2;
    }
    match poly_deg(&r0) {
        Some(0) => {
            let scale = int_invert_mod(r0[0], p)?;
            let scaled: Vec<i64> = t0.iter().map(|&c| (c * scale).rem_euclid(p)).collect();
            let folded = truncate_mod(&scaled, n);
            Ok(RingPoly {
                n,
                coeffs: modulo_coeffs(&folded, p),
                domain: Domain::Mod(p),
            })
        }
        _ => Err(Error::NotInvertible {
            context: "truncated polynomial ring",
        }),
    }
}

/// Inverse of `f` in Z[x]/(x^N − 1) modulo a power of two `q`, by
/// Newton–Hensel lifting from the inverse modulo 2: each step replaces
/// b with 2b − f·b², doubling the precision of the inverse, truncated
/// into the ring and reduced mod q. The loop runs log2(q) times.
pub fn invert_mod_power_of_two(f: &RingPoly, q: i64) -> Result<RingPoly> {
    if q < 2 || q.count_ones() != 1 {
        return Err(Error::param("modulus", "must be a power of two"));
    }
    let e = q.trailing_zeros();
    let n = f.n;

    let base = invert_mod_prime(f, 2)?;
    let mut b = base.lift();
    let f_plain = f.lift();
    for _ in 0..e {
        let b_sq = b.mul(&b)?;
        let f_bsq = f_plain.mul(&b_sq)?;
        let doubled = b.scalar_mul(2);
        let next: Vec<i64> = doubled
            .coeffs
            .iter()
            .zip(&f_bsq.coeffs)
            .map(|(&x, &y)| (x - y).rem_euclid(q))
            .collect();
        b = RingPoly {
            n,
            coeffs: next,
            domain: Domain::Plain,
        };
    }
    Ok(RingPoly {
        n,
        coeffs: b.coeffs,
        domain: Domain::Mod(q),
    })
}

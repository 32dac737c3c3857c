//! Polynomials over GF(2^m)
//!
//! Used for the Goppa polynomial: construction, evaluation, and the
//! randomized irreducible-polynomial search (Ben-Or style distinct-degree
//! test).

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::{BinaryField, FieldElement};
use crate::error::{Error, Result};

/// A polynomial with GF(2^m) coefficients, stored lowest degree first
/// with no trailing zero coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPoly<F: BinaryField> {
    coeffs: Vec<FieldElement<F>>,
}

impl<F: BinaryField> FieldPoly<F> {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The monomial x.
    pub fn x() -> Self {
        Self {
            coeffs: vec![FieldElement::zero(), FieldElement::one()],
        }
    }

    /// Builds a polynomial from coefficients, lowest degree first.
    pub fn from_coeffs(coeffs: Vec<FieldElement<F>>) -> Self {
        let mut poly = Self { coeffs };
        poly.trim();
        poly
    }

    fn trim(&mut self) {
        while matches!(self.coeffs.last(), Some(c) if c.is_zero()) {
            self.coeffs.pop();
        }
    }

    /// Degree of the polynomial, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Coefficient of x^i (zero beyond the degree).
    pub fn coeff(&self, i: usize) -> FieldElement<F> {
        self.coeffs.get(i).copied().unwrap_or_else(FieldElement::zero)
    }

    /// Whether this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluates the polynomial at `x` by Horner's rule.
    pub fn eval(&self, x: FieldElement<F>) -> FieldElement<F> {
        let mut acc = FieldElement::zero();
        for &c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    /// Polynomial sum; in characteristic 2 this is also the difference.
    pub fn add(&self, rhs: &Self) -> Self {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = Vec::with_capacity(len);
        for i in 0..len {
            coeffs.push(self.coeff(i) + rhs.coeff(i));
        }
        Self::from_coeffs(coeffs)
    }

    /// Schoolbook polynomial product.
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        let mut coeffs =
            vec![FieldElement::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        Self::from_coeffs(coeffs)
    }

    /// Remainder of `self` divided by `modulus` (long division).
    pub fn rem(&self, modulus: &Self) -> Result<Self> {
        let md = modulus.degree().ok_or_else(|| {
            Error::param("modulus", "division by the zero polynomial")
        })?;
        let lead_inv = modulus.coeff(md).invert()?;
        let mut r = self.clone();
        while let Some(rd) = r.degree() {
            if rd < md {
                break;
            }
            let factor = r.coeff(rd) * lead_inv;
            let shift = rd - md;
            for i in 0..=md {
                let updated = r.coeff(i + shift) + factor * modulus.coeff(i);
                r.coeffs[i + shift] = updated;
            }
            r.trim();
        }
        Ok(r)
    }

    /// Modular product: `self · rhs mod modulus`.
    pub fn mulmod(&self, rhs: &Self, modulus: &Self) -> Result<Self> {
        self.mul(rhs).rem(modulus)
    }

    /// Polynomial greatest common divisor (not normalized to monic).
    pub fn gcd(a: &Self, b: &Self) -> Result<Self> {
        let mut r0 = a.clone();
        let mut r1 = b.clone();
        while !r1.is_zero() {
            let r2 = r0.rem(&r1)?;
            r0 = r1;
            r1 = r2;
        }
        Ok(r0)
    }

    /// Ben-Or style irreducibility test.
    ///
    /// A polynomial g of degree t is irreducible over GF(2^m) iff it has
    /// no irreducible factor of degree at most t/2, i.e.
    /// gcd(x^(2^(m·i)) − x, g) is constant for every i up to t/2.
    pub fn is_irreducible(&self) -> Result<bool> {
        let t = match self.degree() {
            None | Some(0) => return Ok(false),
            Some(1) => return Ok(true),
            Some(t) => t,
        };
        let x = Self::x();
        let mut h = x.rem(self)?;
        for _ in 1..=t / 2 {
            // h <- h^(2^m) mod g by m successive squarings
            for _ in 0..F::M {
                h = h.mulmod(&h, self)?;
            }
            let diff = h.add(&x);
            if Self::gcd(&diff, self)?.degree() != Some(0) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Draws a uniformly random monic polynomial of exactly the given
    /// degree.
    pub fn random_monic<R: CryptoRng + RngCore>(rng: &mut R, degree: usize) -> Self {
        let mask = (1u32 << F::M) - 1;
        let mut coeffs = Vec::with_capacity(degree + 1);
        for _ in 0..degree {
            coeffs.push(FieldElement::from_raw(rng.next_u32() & mask));
        }
        coeffs.push(FieldElement::one());
        Self { coeffs }
    }

    /// Rejection-samples a random monic irreducible polynomial of the
    /// given degree, giving up after `max_attempts` candidates.
    pub fn random_irreducible<R: CryptoRng + RngCore>(
        rng: &mut R,
        degree: usize,
        max_attempts: usize,
    ) -> Result<Self> {
        if degree == 0 {
            return Err(Error::param("degree", "must be at least 1"));
        }
        for _ in 0..max_attempts {
            let candidate = Self::random_monic(rng, degree);
            if candidate.is_irreducible()? {
                return Ok(candidate);
            }
        }
        Err(Error::Exhausted {
            operation: "irreducible polynomial search",
            attempts: max_attempts,
        })
    }
}

impl<F: BinaryField> Zeroize for FieldPoly<F> {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

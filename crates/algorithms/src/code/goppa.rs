//! Binary Goppa code construction
//!
//! Builds the parity-check matrix H = X·Y·Z of a Goppa code from the
//! Goppa polynomial g and a support set L, expands H over GF(2), and
//! derives the generator matrix G as a basis of the null space. For a
//! binary Goppa code the resulting code corrects up to deg(g) errors;
//! decoding itself is left to the scheme layer's extension point.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::matrix::BinaryMatrix;
use crate::error::{Error, Result};
use crate::field::{BinaryField, FieldElement, FieldMatrix, FieldPoly};

/// A constructed Goppa code: the parity-check matrix over the field and
/// the binary generator matrix spanning its null space.
#[derive(Debug, Clone)]
pub struct GoppaCode<F: BinaryField> {
    parity_check: FieldMatrix<F>,
    generator: BinaryMatrix,
}

impl<F: BinaryField> GoppaCode<F> {
    /// Builds the code from an irreducible Goppa polynomial and a
    /// support set none of whose elements is a root of g.
    pub fn build(g: &FieldPoly<F>, support: &[FieldElement<F>]) -> Result<Self> {
        let t = match g.degree() {
            Some(t) if t >= 1 => t,
            _ => {
                return Err(Error::param(
                    "goppa polynomial",
                    "degree must be at least 1",
                ))
            }
        };
        if support.is_empty() {
            return Err(Error::param("support set", "must not be empty"));
        }

        let x = x_matrix(g, t);
        let y = y_matrix(support, t);
        let z = z_matrix(support, g)?;
        let parity_check = x.mul(&y)?.mul(&z)?;

        let expanded = binary_expansion(&parity_check);
        let generator = expanded.null_space();

        Ok(Self {
            parity_check,
            generator,
        })
    }

    /// The t×n parity-check matrix H over GF(2^m).
    pub fn parity_check(&self) -> &FieldMatrix<F> {
        &self.parity_check
    }

    /// The k×n binary generator matrix G with H·Gᵀ = 0.
    pub fn generator(&self) -> &BinaryMatrix {
        &self.generator
    }

    /// Code dimension k (number of generator rows).
    pub fn dimension(&self) -> usize {
        self.generator.rows()
    }
}

// X is t×t and lower triangular: X[i][j] = g_(i-j) for j <= i.
fn x_matrix<F: BinaryField>(g: &FieldPoly<F>, t: usize) -> FieldMatrix<F> {
    let mut x = FieldMatrix::zeros(t, t);
    for i in 0..t {
        for j in 0..=i {
            x.set(i, j, g.coeff(i - j));
        }
    }
    x
}

// Y is the t×n Vandermonde-like matrix: Y[i][j] = L[j]^i.
fn y_matrix<F: BinaryField>(support: &[FieldElement<F>], t: usize) -> FieldMatrix<F> {
    let n = support.len();
    let mut y = FieldMatrix::zeros(t, n);
    for (j, &elem) in support.iter().enumerate() {
        for i in 0..t {
            y.set(i, j, elem.pow(i as u64));
        }
    }
    y
}

// Z is the n×n diagonal matrix of g(L[i])^-1; a support element that is
// a root of g surfaces as NotInvertible here.
fn z_matrix<F: BinaryField>(
    support: &[FieldElement<F>],
    g: &FieldPoly<F>,
) -> Result<FieldMatrix<F>> {
    let n = support.len();
    let mut z = FieldMatrix::zeros(n, n);
    for (i, &elem) in support.iter().enumerate() {
        z.set(i, i, g.eval(elem).invert()?);
    }
    Ok(z)
}

/// Expands a field matrix over GF(2): each element becomes its m-bit
/// coordinate column, highest coefficient first, so a t×n matrix becomes
/// a (t·m)×n binary matrix.
pub fn binary_expansion<F: BinaryField>(matrix: &FieldMatrix<F>) -> BinaryMatrix {
    let m = F::M;
    let mut out = BinaryMatrix::zeros(matrix.rows() * m, matrix.cols());
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            let elem = matrix.get(i, j);
            for b in 0..m {
                out.set(i * m + b, j, elem.bit(m - 1 - b));
            }
        }
    }
    out
}

/// Collects the first n field elements, in the fixed enumeration order
/// 0, 1, 2, …, that are not roots of g.
pub fn support_set<F: BinaryField>(
    g: &FieldPoly<F>,
    n: usize,
) -> Result<Vec<FieldElement<F>>> {
    let order = FieldElement::<F>::order() as usize;
    let mut support = Vec::with_capacity(n);
    for value in 0..order {
        if support.len() == n {
            break;
        }
        let elem = FieldElement::new(value as u32)?;
        if !g.eval(elem).is_zero() {
            support.push(elem);
        }
    }
    if support.len() < n {
        return Err(Error::Capacity {
            context: "support set",
            needed: n,
            available: support.len(),
        });
    }
    Ok(support)
}

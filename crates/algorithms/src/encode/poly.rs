//! Coefficient vector wire formats
//!
//! The fixed-width form packs each coefficient into ⌈log2(n)⌉ bits,
//! concatenated big-endian and right-aligned in the minimal byte buffer;
//! it carries neither n nor the coefficient count, so decoding requires
//! both out of band. The textual form is base64-framed comma-separated
//! decimal (optionally deflate-compressed) and is lossless for
//! coefficients of any magnitude or sign.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::{Error, Result};

#[cfg(feature = "std")]
use std::io::{Read, Write};

#[cfg(feature = "std")]
use base64::engine::general_purpose::STANDARD as BASE64;
#[cfg(feature = "std")]
use base64::Engine as _;
#[cfg(feature = "std")]
use flate2::read::ZlibDecoder;
#[cfg(feature = "std")]
use flate2::write::ZlibEncoder;
#[cfg(feature = "std")]
use flate2::Compression;

// Bits needed per coefficient in [0, n)
fn bits_per_coeff(n: i64) -> Result<usize> {
    if n < 2 {
        return Err(Error::param("n", "coefficient range must be at least 2"));
    }
    Ok(64 - (n as u64 - 1).leading_zeros() as usize)
}

/// Bit-packs coefficients in [0, n) into ⌈log2(n)⌉ bits each,
/// big-endian, right-aligned in the minimal byte buffer.
pub fn compress_coefficients(coeffs: &[i64], n: i64) -> Result<Vec<u8>> {
    let b = bits_per_coeff(n)?;
    for &c in coeffs {
        if c < 0 || c >= n {
            return Err(Error::param(
                "coefficient",
                "outside the representable range [0, n)",
            ));
        }
    }

    let total_bits = b * coeffs.len();
    let mut out = vec![0u8; total_bits.div_ceil(8)];
    let mut bit_index = out.len() * 8;
    for &c in coeffs.iter().rev() {
        for bit in 0..b {
            bit_index -= 1;
            if (c >> bit) & 1 == 1 {
                out[bit_index / 8] |= 1 << (7 - (bit_index % 8));
            }
        }
    }
    Ok(out)
}

/// Inverts [`compress_coefficients`]; both the coefficient range `n` and
/// the original coefficient count must be supplied by the caller.
pub fn decompress_coefficients(bytes: &[u8], n: i64, length: usize) -> Result<Vec<i64>> {
    let b = bits_per_coeff(n)?;
    let total_bits = b * length;
    if bytes.len() * 8 < total_bits {
        return Err(Error::Length {
            context: "compressed coefficients",
            expected: total_bits.div_ceil(8),
            actual: bytes.len(),
        });
    }

    let mut out = vec![0i64; length];
    let mut bit_index = bytes.len() * 8;
    for slot in out.iter_mut().rev() {
        let mut c = 0i64;
        for bit in 0..b {
            bit_index -= 1;
            if (bytes[bit_index / 8] >> (7 - (bit_index % 8))) & 1 == 1 {
                c |= 1 << bit;
            }
        }
        *slot = c;
    }
    Ok(out)
}

/// Serializes coefficients (highest degree first) as comma-separated
/// decimal, optionally deflate-compressed, framed in base64.
#[cfg(feature = "std")]
pub fn coeffs_to_base64(coeffs: &[i64], apply_compression: bool) -> Result<String> {
    let joined = coeffs
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",");

    let payload = if apply_compression {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(joined.as_bytes())
            .and_then(|_| encoder.finish())
            .map_err(|_| Error::param("polynomial text", "deflate compression failed"))?
    } else {
        joined.into_bytes()
    };

    Ok(BASE64.encode(payload))
}

/// Inverts [`coeffs_to_base64`]. The caller states whether compression
/// was applied; the frame itself does not record it.
#[cfg(feature = "std")]
pub fn base64_to_coeffs(encoded: &str, compression_applied: bool) -> Result<Vec<i64>> {
    let decoded = BASE64
        .decode(encoded)
        .map_err(|_| Error::param("polynomial text", "invalid base64 framing"))?;

    let text_bytes = if compression_applied {
        let mut decompressed = Vec::new();
        ZlibDecoder::new(decoded.as_slice())
            .read_to_end(&mut decompressed)
            .map_err(|_| Error::param("polynomial text", "deflate stream is corrupt"))?;
        decompressed
    } else {
        decoded
    };

    let text = core::str::from_utf8(&text_bytes)
        .map_err(|_| Error::param("polynomial text", "payload is not UTF-8"))?;
    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| Error::param("polynomial text", "non-integer coefficient"))
        })
        .collect()
}

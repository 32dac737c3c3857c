//! SHA-1 hash function
//!
//! Implements SHA-1 as specified in FIPS 180-4. SHA-1 is
//! cryptographically broken for collision resistance; it is carried here
//! as the default OAEP/MGF1 hash of the demonstration schemes, where the
//! digest is used as a mask and integrity tag over self-chosen data.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use super::{Hash, HashFunction};

const SHA1_BLOCK_SIZE: usize = 64;
const SHA1_OUTPUT_SIZE: usize = 20;

/// Initial hash values for SHA-1
const H0: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// SHA-1 hash function
#[derive(Clone, Zeroize)]
pub struct Sha1 {
    /// Current hash state
    h: [u32; 5],
    /// Message buffer
    buffer: [u8; SHA1_BLOCK_SIZE],
    /// Bytes in buffer
    buffer_len: usize,
    /// Total message length in bits
    total_len: u64,
}

impl Sha1 {
    fn process_block(&mut self, block: &[u8; SHA1_BLOCK_SIZE]) {
        let mut w = [0u32; 80];
        for i in 0..16 {
            w[i] = BigEndian::read_u32(&block[i * 4..]);
        }
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let mut a = self.h[0];
        let mut b = self.h[1];
        let mut c = self.h[2];
        let mut d = self.h[3];
        let mut e = self.h[4];

        for (i, &word) in w.iter().enumerate() {
            let (f, k) = if i < 20 {
                ((b & c) | ((!b) & d), 0x5A827999)
            } else if i < 40 {
                (b ^ c ^ d, 0x6ED9EBA1)
            } else if i < 60 {
                ((b & c) | (b & d) | (c & d), 0x8F1BBCDC)
            } else {
                (b ^ c ^ d, 0xCA62C1D6)
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        self.h[0] = self.h[0].wrapping_add(a);
        self.h[1] = self.h[1].wrapping_add(b);
        self.h[2] = self.h[2].wrapping_add(c);
        self.h[3] = self.h[3].wrapping_add(d);
        self.h[4] = self.h[4].wrapping_add(e);
    }
}

impl HashFunction for Sha1 {
    fn new() -> Self {
        Self {
            h: H0,
            buffer: [0u8; SHA1_BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.total_len = self
            .total_len
            .wrapping_add((data.len() as u64).wrapping_mul(8));

        let mut input = data;
        if self.buffer_len > 0 {
            let take = (SHA1_BLOCK_SIZE - self.buffer_len).min(input.len());
            self.buffer[self.buffer_len..self.buffer_len + take]
                .copy_from_slice(&input[..take]);
            self.buffer_len += take;
            input = &input[take..];

            if self.buffer_len == SHA1_BLOCK_SIZE {
                let block = self.buffer;
                self.process_block(&block);
                self.buffer_len = 0;
            }
        }

        while input.len() >= SHA1_BLOCK_SIZE {
            let mut block = [0u8; SHA1_BLOCK_SIZE];
            block.copy_from_slice(&input[..SHA1_BLOCK_SIZE]);
            self.process_block(&block);
            input = &input[SHA1_BLOCK_SIZE..];
        }

        if !input.is_empty() {
            self.buffer[..input.len()].copy_from_slice(input);
            self.buffer_len = input.len();
        }
    }

    fn finalize(&mut self) -> Hash {
        let total_len = self.total_len;
        let mut block = [0u8; SHA1_BLOCK_SIZE];
        block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
        block[self.buffer_len] = 0x80;

        if self.buffer_len + 1 > SHA1_BLOCK_SIZE - 8 {
            self.process_block(&block);
            block = [0u8; SHA1_BLOCK_SIZE];
        }
        BigEndian::write_u64(&mut block[SHA1_BLOCK_SIZE - 8..], total_len);
        self.process_block(&block);

        let mut out = vec![0u8; SHA1_OUTPUT_SIZE];
        for (i, &word) in self.h.iter().enumerate() {
            BigEndian::write_u32(&mut out[i * 4..], word);
        }

        // Reset so the hasher can be reused
        self.h = H0;
        self.buffer = [0u8; SHA1_BLOCK_SIZE];
        self.buffer_len = 0;
        self.total_len = 0;

        out
    }

    fn output_size() -> usize {
        SHA1_OUTPUT_SIZE
    }

    fn block_size() -> usize {
        SHA1_BLOCK_SIZE
    }

    fn name() -> &'static str {
        "SHA-1"
    }
}

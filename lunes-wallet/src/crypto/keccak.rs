//! Keccak sponge construction
//!
//! A self-contained Keccak implementation over the 1600-bit permutation,
//! parameterised by bitrate, capacity and output length. It uses the
//! original Keccak padding (domain byte `0x01`), so `KeccakHash::keccak256`
//! produces the same digests as [`crate::crypto::hash::keccak256`] and
//! differs from NIST SHA3-256.
//!
//! Lanes are `u64`, so rotations wrap natively and no truncation masks are
//! needed.

use crate::error::{Error, Result};

/// Width of the Keccak-f permutation in bits
pub const STATE_BITS: usize = 1600;

const ROUNDS: usize = 24;

const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
    0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
    0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// Rho rotation offsets, indexed `[y][x]`.
const ROTATION_OFFSETS: [[u32; 5]; 5] = [
    [0, 1, 62, 28, 27],
    [36, 44, 6, 55, 20],
    [3, 10, 43, 25, 39],
    [41, 45, 15, 21, 8],
    [18, 2, 61, 56, 14],
];

/// Lanes indexed `[x][y]`.
type Lanes = [[u64; 5]; 5];

fn keccak_f(a: &mut Lanes) {
    for round_constant in ROUND_CONSTANTS {
        // theta
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = a[x][0] ^ a[x][1] ^ a[x][2] ^ a[x][3] ^ a[x][4];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                a[x][y] ^= d;
            }
        }

        // rho and pi
        let mut b: Lanes = [[0u64; 5]; 5];
        for x in 0..5 {
            for y in 0..5 {
                b[y][(2 * x + 3 * y) % 5] = a[x][y].rotate_left(ROTATION_OFFSETS[y][x]);
            }
        }

        // chi
        for x in 0..5 {
            for y in 0..5 {
                a[x][y] = b[x][y] ^ (!b[(x + 1) % 5][y] & b[(x + 2) % 5][y]);
            }
        }

        // iota
        a[0][0] ^= round_constant;
    }
}

/// Keccak sponge with configurable parameters
#[derive(Debug, Clone)]
pub struct KeccakHash {
    lanes: Lanes,
    rate: usize,
    output_len: usize,
    buffer: Vec<u8>,
}

impl KeccakHash {
    /// Create a sponge; all sizes are in bits and `bitrate + capacity` must be 1600.
    pub fn new(bitrate: usize, capacity: usize, output_bits: usize) -> Result<Self> {
        if bitrate + capacity != STATE_BITS {
            return Err(Error::InvalidInput(format!(
                "bitrate {} + capacity {} must equal {}",
                bitrate, capacity, STATE_BITS
            )));
        }
        if bitrate == 0 || bitrate % 8 != 0 || output_bits % 8 != 0 {
            return Err(Error::InvalidInput(
                "bitrate and output length must be positive multiples of 8".to_string(),
            ));
        }

        Ok(Self {
            lanes: [[0u64; 5]; 5],
            rate: bitrate / 8,
            output_len: output_bits / 8,
            buffer: Vec::with_capacity(bitrate / 8),
        })
    }

    /// Keccak-256: bitrate 1088, capacity 512, 256-bit output
    pub fn keccak256() -> Self {
        Self {
            lanes: [[0u64; 5]; 5],
            rate: 136,
            output_len: 32,
            buffer: Vec::with_capacity(136),
        }
    }

    /// One-shot Keccak-256 digest
    pub fn digest(data: &[u8]) -> [u8; 32] {
        let mut hasher = Self::keccak256();
        hasher.update(data);
        let mut out = [0u8; 32];
        out.copy_from_slice(&hasher.finalize());
        out
    }

    /// Absorb more input
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (self.rate - self.buffer.len()).min(data.len());
            self.buffer.extend_from_slice(&data[..take]);
            data = &data[take..];

            if self.buffer.len() == self.rate {
                let block = std::mem::replace(&mut self.buffer, Vec::with_capacity(self.rate));
                self.absorb_block(&block);
            }
        }
    }

    /// Pad, then squeeze `output_bits / 8` bytes
    pub fn finalize(mut self) -> Vec<u8> {
        let mut block = vec![0u8; self.rate];
        block[..self.buffer.len()].copy_from_slice(&self.buffer);
        block[self.buffer.len()] ^= 0x01;
        block[self.rate - 1] ^= 0x80;
        self.absorb_block(&block);

        let mut out = Vec::with_capacity(self.output_len);
        loop {
            for i in 0..self.rate {
                if out.len() == self.output_len {
                    return out;
                }
                out.push(self.byte_at(i));
            }
            keccak_f(&mut self.lanes);
        }
    }

    fn absorb_block(&mut self, block: &[u8]) {
        for (i, byte) in block.iter().enumerate() {
            let lane = i / 8;
            self.lanes[lane % 5][lane / 5] ^= (*byte as u64) << (8 * (i % 8));
        }
        keccak_f(&mut self.lanes);
    }

    fn byte_at(&self, i: usize) -> u8 {
        let lane = i / 8;
        (self.lanes[lane % 5][lane / 5] >> (8 * (i % 8))) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::keccak256;

    #[test]
    fn test_empty_input() {
        assert_eq!(
            hex::encode(KeccakHash::digest(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_matches_sha3_crate_across_block_boundaries() {
        // 135, 136 and 137 bytes straddle the Keccak-256 rate
        for len in [0usize, 1, 31, 135, 136, 137, 272, 500] {
            let data: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
            assert_eq!(KeccakHash::digest(&data), keccak256(&data), "length {}", len);
        }
    }

    #[test]
    fn test_incremental_update() {
        let data = vec![0xabu8; 300];
        let mut hasher = KeccakHash::keccak256();
        hasher.update(&data[..10]);
        hasher.update(&data[10..200]);
        hasher.update(&data[200..]);
        assert_eq!(hasher.finalize(), KeccakHash::digest(&data).to_vec());
    }

    #[test]
    fn test_custom_parameters() {
        let mut hasher = KeccakHash::new(1088, 512, 256).unwrap();
        hasher.update(b"lunes");
        assert_eq!(hasher.finalize(), keccak256(b"lunes").to_vec());

        // Keccak-512 squeezes 64 bytes from a 72-byte rate
        let hasher = KeccakHash::new(576, 1024, 512).unwrap();
        assert_eq!(hasher.finalize().len(), 64);

        assert!(KeccakHash::new(1000, 512, 256).is_err());
        assert!(KeccakHash::new(1084, 516, 256).is_err());
    }

    #[test]
    fn test_long_output_squeezes_again() {
        let hasher = KeccakHash::new(1088, 512, 2048).unwrap();
        let out = hasher.finalize();
        assert_eq!(out.len(), 256);
        assert_eq!(&out[..32], &keccak256(b"")[..]);
    }
}

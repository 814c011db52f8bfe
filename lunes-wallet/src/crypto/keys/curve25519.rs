//! Curve25519 signing capability
//!
//! Lunes keys are X25519 (Montgomery) keys, and signatures are Ed25519-style
//! signatures produced with the same clamped scalar. The verifier recovers
//! the Edwards public key from the Montgomery one, and the sign bit it needs
//! travels in the top bit of the signature's last byte.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::montgomery::MontgomeryPoint;
use curve25519_dalek::scalar::Scalar;
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

/// Length of a signature in bytes
pub const SIGNATURE_LENGTH: usize = 64;

/// Key generation and signing over some curve.
///
/// All methods are pure apart from the randomness `sign` may draw.
pub trait SignatureScheme {
    /// Turn 32 bytes of seed material into a private key
    fn private_key(&self, seed: &[u8; 32]) -> [u8; 32];

    /// Compute the public key for a private key
    fn public_key(&self, private_key: &[u8; 32]) -> [u8; 32];

    /// Sign an arbitrary message
    fn sign(&self, private_key: &[u8; 32], message: &[u8]) -> [u8; SIGNATURE_LENGTH];

    /// Check a signature produced by `sign`
    /// Stricter than the node: `s` must be a canonical scalar and `R` must
    /// decompress, where the node only rejects an `s` with its top three bits
    /// set. A `false` here can still be accepted on broadcast.
    fn verify(&self, public_key: &[u8; 32], message: &[u8], signature: &[u8; SIGNATURE_LENGTH]) -> bool;
}

/// The curve25519 scheme used by Lunes (and Waves) nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct Curve25519;

impl Curve25519 {
    /// Sign using caller-provided nonce randomness.
    ///
    /// Identical inputs give identical signatures, which makes this useful
    /// for fixtures; production code goes through [`SignatureScheme::sign`].
    pub fn sign_with_random(
        &self,
        private_key: &[u8; 32],
        message: &[u8],
        random: &[u8; 64],
    ) -> [u8; SIGNATURE_LENGTH] {
        let private_key = Zeroizing::new(clamp(private_key));
        let a = Scalar::from_bytes_mod_order(*private_key);
        let public = EdwardsPoint::mul_base(&a).compress();
        let sign_bit = public.as_bytes()[31] & 0x80;

        let mut nonce_hash = Sha512::new();
        nonce_hash.update([0xFEu8]);
        nonce_hash.update([0xFFu8; 31]);
        nonce_hash.update(&*private_key);
        nonce_hash.update(message);
        nonce_hash.update(random);
        let r = Zeroizing::new(wide_scalar(nonce_hash));

        let big_r = EdwardsPoint::mul_base(&r).compress();
        let k = challenge(&big_r, &public, message);
        let s = k * a + *r;

        let mut signature = [0u8; SIGNATURE_LENGTH];
        signature[..32].copy_from_slice(big_r.as_bytes());
        signature[32..].copy_from_slice(s.as_bytes());
        signature[63] &= 0x7F;
        signature[63] |= sign_bit;
        signature
    }
}

impl SignatureScheme for Curve25519 {
    fn private_key(&self, seed: &[u8; 32]) -> [u8; 32] {
        clamp(seed)
    }

    fn public_key(&self, private_key: &[u8; 32]) -> [u8; 32] {
        let a = Scalar::from_bytes_mod_order(*Zeroizing::new(clamp(private_key)));
        EdwardsPoint::mul_base(&a).to_montgomery().to_bytes()
    }

    fn sign(&self, private_key: &[u8; 32], message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        let mut random = Zeroizing::new([0u8; 64]);
        OsRng.fill_bytes(&mut *random);
        self.sign_with_random(private_key, message, &random)
    }

    /// Stricter than the node: `s` must be a canonical scalar and `R` must
    /// decompress, where the node only rejects an `s` with its top three bits
    /// set. A `false` here can still be accepted on broadcast.
    fn verify(&self, public_key: &[u8; 32], message: &[u8], signature: &[u8; SIGNATURE_LENGTH]) -> bool {
        let sign_bit = (signature[63] & 0x80) >> 7;
        let Some(a) = MontgomeryPoint(*public_key).to_edwards(sign_bit) else {
            return false;
        };

        let mut r_bytes = [0u8; 32];
        r_bytes.copy_from_slice(&signature[..32]);
        let mut s_bytes = [0u8; 32];
        s_bytes.copy_from_slice(&signature[32..]);
        s_bytes[31] &= 0x7F;

        let Some(s) = Option::<Scalar>::from(Scalar::from_canonical_bytes(s_bytes)) else {
            return false;
        };
        let big_r = CompressedEdwardsY(r_bytes);
        if big_r.decompress().is_none() {
            return false;
        }

        let k = challenge(&big_r, &a.compress(), message);
        let expected = EdwardsPoint::vartime_double_scalar_mul_basepoint(&k, &-a, &s);
        expected.compress() == big_r
    }
}

/// X25519 scalar clamping
fn clamp(key: &[u8; 32]) -> [u8; 32] {
    let mut key = *key;
    key[0] &= 248;
    key[31] &= 127;
    key[31] |= 64;
    key
}

fn challenge(r: &CompressedEdwardsY, public: &CompressedEdwardsY, message: &[u8]) -> Scalar {
    let mut hasher = Sha512::new();
    hasher.update(r.as_bytes());
    hasher.update(public.as_bytes());
    hasher.update(message);
    wide_scalar(hasher)
}

fn wide_scalar(hasher: Sha512) -> Scalar {
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&hasher.finalize());
    Scalar::from_bytes_mod_order_wide(&wide)
}

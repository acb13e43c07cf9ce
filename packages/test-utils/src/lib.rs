use k256::ecdsa::SigningKey;
use sha3::{Digest, Keccak256};

/// Deterministic Ethereum key used to sign checkpoints and address claims in tests.
///
/// The secret key is the 32-byte array filled with `seed`, so `seed` must be non-zero.
pub struct EthSigner {
    key: SigningKey,
}

impl EthSigner {
    pub fn new(seed: u8) -> Self {
        assert_ne!(seed, 0, "the zero scalar is not a valid secret key");
        let key = SigningKey::from_slice(&[seed; 32]).unwrap();
        EthSigner { key }
    }

    /// Uncompressed SEC1 encoding (`0x04 || x || y`) of the public key
    pub fn uncompressed_pubkey(&self) -> Vec<u8> {
        self.key
            .verifying_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec()
    }

    /// Lower-case, `0x`-prefixed Ethereum address of this key
    pub fn eth_address(&self) -> String {
        let pubkey = self.uncompressed_pubkey();
        let hash = Keccak256::digest(&pubkey[1..]);
        format!("0x{}", hex::encode(&hash[12..]))
    }

    /// Signs a 32-byte hash, returning `r || s || v` with the legacy `v` (27 / 28)
    pub fn sign_hash(&self, hash: &[u8]) -> Vec<u8> {
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(hash).unwrap();
        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(27 + recovery_id.to_byte());
        bytes
    }

    /// Signs the Keccak-256 hash of `data`
    pub fn sign_keccak(&self, data: &[u8]) -> Vec<u8> {
        let hash = Keccak256::digest(data);
        self.sign_hash(&hash)
    }
}

/// `signers` builds `n` distinct signers, with seeds `1..=n`
pub fn signers(n: u8) -> Vec<EthSigner> {
    (1..=n).map(EthSigner::new).collect()
}

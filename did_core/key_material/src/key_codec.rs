use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::KeyMaterialError;

/// Public key codecs of the multicodec table that may prefix a multibase key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCodec {
    Secp256k1,
    Bls12381g1,
    Bls12381g2,
    X25519,
    Ed25519,
    P256,
    P384,
}

impl KeyCodec {
    const C_SECP256K1: u64 = 0xe7;
    const C_BLS12381G1: u64 = 0xea;
    const C_BLS12381G2: u64 = 0xeb;
    const C_X25519: u64 = 0xec;
    const C_ED25519: u64 = 0xed;
    const C_P256: u64 = 0x1200;
    const C_P384: u64 = 0x1201;

    /// Splits a multicodec prefixed key into its codec and the raw key bytes.
    pub fn split_prefixed(prefixed_key: &[u8]) -> Result<(KeyCodec, &[u8]), KeyMaterialError> {
        let (code, raw_key) = unsigned_varint::decode::u64(prefixed_key)?;
        Ok((code.try_into()?, raw_key))
    }

    /// Returns the raw key, stripping the multicodec prefix of `self` when present. A prefix
    /// naming a different known codec is an error; bytes without a recognisable prefix are
    /// returned untouched.
    pub fn strip_prefix_if_present(self, key: Vec<u8>) -> Result<Vec<u8>, KeyMaterialError> {
        match Self::split_prefixed(&key) {
            Ok((codec, raw_key)) if codec == self => Ok(raw_key.to_vec()),
            Ok((codec, _)) => Err(KeyMaterialError::InvalidKeyCodec(codec, self)),
            Err(_) => Ok(key),
        }
    }

    pub fn prefix(self, raw_key: &[u8]) -> Vec<u8> {
        let mut buffer = unsigned_varint::encode::u64_buffer();
        let mut prefixed_key = unsigned_varint::encode::u64((&self).into(), &mut buffer).to_vec();
        prefixed_key.extend_from_slice(raw_key);
        prefixed_key
    }
}

// https://github.com/multiformats/multicodec/blob/master/table.csv
impl From<&KeyCodec> for u64 {
    fn from(codec: &KeyCodec) -> Self {
        match codec {
            KeyCodec::Secp256k1 => KeyCodec::C_SECP256K1,
            KeyCodec::Bls12381g1 => KeyCodec::C_BLS12381G1,
            KeyCodec::Bls12381g2 => KeyCodec::C_BLS12381G2,
            KeyCodec::X25519 => KeyCodec::C_X25519,
            KeyCodec::Ed25519 => KeyCodec::C_ED25519,
            KeyCodec::P256 => KeyCodec::C_P256,
            KeyCodec::P384 => KeyCodec::C_P384,
        }
    }
}

impl TryFrom<u64> for KeyCodec {
    type Error = KeyMaterialError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            KeyCodec::C_SECP256K1 => Ok(KeyCodec::Secp256k1),
            KeyCodec::C_BLS12381G1 => Ok(KeyCodec::Bls12381g1),
            KeyCodec::C_BLS12381G2 => Ok(KeyCodec::Bls12381g2),
            KeyCodec::C_X25519 => Ok(KeyCodec::X25519),
            KeyCodec::C_ED25519 => Ok(KeyCodec::Ed25519),
            KeyCodec::C_P256 => Ok(KeyCodec::P256),
            KeyCodec::C_P384 => Ok(KeyCodec::P384),
            p => Err(KeyMaterialError::UnsupportedMulticodecDescriptor(p)),
        }
    }
}

impl Display for KeyCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyCodec::Secp256k1 => write!(f, "secp256k1-pub"),
            KeyCodec::Bls12381g1 => write!(f, "bls12_381-g1-pub"),
            KeyCodec::Bls12381g2 => write!(f, "bls12_381-g2-pub"),
            KeyCodec::X25519 => write!(f, "x25519-pub"),
            KeyCodec::Ed25519 => write!(f, "ed25519-pub"),
            KeyCodec::P256 => write!(f, "p256-pub"),
            KeyCodec::P384 => write!(f, "p384-pub"),
        }
    }
}

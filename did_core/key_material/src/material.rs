use serde::{Deserialize, Serialize};

use crate::{error::KeyMaterialError, jwk::JsonWebKey, KeyCodec, KeySuite};

pub const ED25519_KEY_LENGTH: usize = 32;

/// Key material of a verification method, in whichever encoding the document used.
/// Meant to be flattened into a verification method object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerificationMaterial {
    #[serde(rename_all = "camelCase")]
    Base58 { public_key_base58: String },
    #[serde(rename_all = "camelCase")]
    Multibase { public_key_multibase: String },
    #[serde(rename_all = "camelCase")]
    Hex { public_key_hex: String },
    #[serde(rename_all = "camelCase")]
    Jwk { public_key_jwk: JsonWebKey },
}

impl VerificationMaterial {
    /// Decodes the material into raw key bytes of the given codec. Multicodec prefixes are
    /// only expected on multibase values.
    pub fn key_decoded(&self, codec: KeyCodec) -> Result<Vec<u8>, KeyMaterialError> {
        match self {
            VerificationMaterial::Base58 { public_key_base58 } => {
                Ok(bs58::decode(public_key_base58).into_vec()?)
            }
            VerificationMaterial::Multibase {
                public_key_multibase,
            } => {
                let (_base, decoded) = multibase::decode(public_key_multibase)?;
                codec.strip_prefix_if_present(decoded)
            }
            VerificationMaterial::Hex { public_key_hex } => Ok(hex::decode(public_key_hex)?),
            VerificationMaterial::Jwk { public_key_jwk } => public_key_jwk.key_decoded(codec),
        }
    }

    /// Encodes the material as a base58 string for the given suite. Only the Ed25519 suite
    /// has a base58 representation.
    pub fn to_base58(&self, suite: KeySuite) -> Result<String, KeyMaterialError> {
        match suite {
            KeySuite::Ed25519VerificationKey2018 => {
                let key = self.key_decoded(KeyCodec::Ed25519)?;
                if key.len() != ED25519_KEY_LENGTH {
                    return Err(KeyMaterialError::InvalidKeyLength(
                        key.len(),
                        ED25519_KEY_LENGTH,
                    ));
                }
                Ok(bs58::encode(key).into_string())
            }
            KeySuite::RsaVerificationKey2018 | KeySuite::Secp256k1VerificationKey2018 => {
                Err(KeyMaterialError::UnsupportedSuite(suite))
            }
        }
    }
}

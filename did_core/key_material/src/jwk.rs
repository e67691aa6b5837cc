use std::collections::HashMap;

use askar_crypto::{
    alg::{AnyKey, EcCurves, KeyAlg},
    jwk::FromJwk,
    repr::ToPublicBytes,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::KeyMaterialError, KeyCodec};

/// Public JSON Web Key as found in `publicKeyJwk`. Members other than the ones needed to
/// identify the key are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonWebKey {
    pub kty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(flatten)]
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, Value>,
}

impl JsonWebKey {
    /// Decodes the public key, returning its codec along with the raw key bytes.
    pub fn public_key(&self) -> Result<(KeyCodec, Vec<u8>), KeyMaterialError> {
        let jwk = serde_json::to_string(self)
            .map_err(|err| KeyMaterialError::JwkDecodingError(Box::new(err)))?;
        let askar_key: Box<AnyKey> = FromJwk::from_jwk(&jwk)
            .map_err(|err| KeyMaterialError::JwkDecodingError(Box::new(err)))?;
        let askar_alg = askar_key.algorithm();
        let codec = match askar_alg {
            KeyAlg::Ed25519 => KeyCodec::Ed25519,
            KeyAlg::X25519 => KeyCodec::X25519,
            KeyAlg::EcCurve(EcCurves::Secp256k1) => KeyCodec::Secp256k1,
            KeyAlg::EcCurve(EcCurves::Secp256r1) => KeyCodec::P256,
            KeyAlg::EcCurve(EcCurves::Secp384r1) => KeyCodec::P384,
            _ => return Err(KeyMaterialError::UnsupportedJwk(askar_alg.to_string())),
        };
        let key = askar_key
            .to_public_bytes()
            .map_err(|err| KeyMaterialError::JwkDecodingError(Box::new(err)))?
            .to_vec();
        Ok((codec, key))
    }

    /// Decodes the public key, requiring it to be of the given codec.
    pub fn key_decoded(&self, codec: KeyCodec) -> Result<Vec<u8>, KeyMaterialError> {
        let (jwk_codec, key) = self.public_key()?;
        if jwk_codec != codec {
            return Err(KeyMaterialError::InvalidKeyCodec(jwk_codec, codec));
        }
        Ok(key)
    }
}

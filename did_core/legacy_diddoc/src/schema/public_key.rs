use key_material::KeySuite;
use serde::{Deserialize, Serialize};

/// Entry of the `publicKey` array, one variant per signature suite. The `type` member of the
/// wire form selects the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PublicKey {
    #[serde(rename = "RsaVerificationKey2018")]
    Rsa(RsaPublicKey),
    #[serde(rename = "Ed25519VerificationKey2018")]
    Ed25519(Ed25519PublicKey),
    #[serde(rename = "Secp256k1VerificationKey2018")]
    Secp256k1(Secp256k1PublicKey),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsaPublicKey {
    pub id: String,
    pub controller: String,
    pub public_key_pem: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ed25519PublicKey {
    pub id: String,
    pub controller: String,
    pub public_key_base58: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secp256k1PublicKey {
    pub id: String,
    pub controller: String,
    pub public_key_hex: String,
}

impl PublicKey {
    pub fn ed25519(id: String, controller: String, public_key_base58: String) -> Self {
        PublicKey::Ed25519(Ed25519PublicKey {
            id,
            controller,
            public_key_base58,
        })
    }

    pub fn rsa(id: String, controller: String, public_key_pem: String) -> Self {
        PublicKey::Rsa(RsaPublicKey {
            id,
            controller,
            public_key_pem,
        })
    }

    pub fn secp256k1(id: String, controller: String, public_key_hex: String) -> Self {
        PublicKey::Secp256k1(Secp256k1PublicKey {
            id,
            controller,
            public_key_hex,
        })
    }

    pub fn id(&self) -> &str {
        match self {
            PublicKey::Rsa(key) => &key.id,
            PublicKey::Ed25519(key) => &key.id,
            PublicKey::Secp256k1(key) => &key.id,
        }
    }

    pub fn controller(&self) -> &str {
        match self {
            PublicKey::Rsa(key) => &key.controller,
            PublicKey::Ed25519(key) => &key.controller,
            PublicKey::Secp256k1(key) => &key.controller,
        }
    }

    pub fn suite(&self) -> KeySuite {
        match self {
            PublicKey::Rsa(_) => KeySuite::RsaVerificationKey2018,
            PublicKey::Ed25519(_) => KeySuite::Ed25519VerificationKey2018,
            PublicKey::Secp256k1(_) => KeySuite::Secp256k1VerificationKey2018,
        }
    }

    /// The suite specific key value: PEM, base58 or hex.
    pub fn key_material(&self) -> &str {
        match self {
            PublicKey::Rsa(key) => &key.public_key_pem,
            PublicKey::Ed25519(key) => &key.public_key_base58,
            PublicKey::Secp256k1(key) => &key.public_key_hex,
        }
    }
}

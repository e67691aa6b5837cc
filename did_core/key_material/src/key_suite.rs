use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::KeyMaterialError;

pub const SUITE_RSA_2018: &str = "RsaVerificationKey2018";
pub const SUITE_ED25519_2018: &str = "Ed25519VerificationKey2018";
pub const SUITE_SECP256K1_2018: &str = "Secp256k1VerificationKey2018";

/// Signature suites a legacy DIDComm document may list keys for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeySuite {
    #[serde(rename = "RsaVerificationKey2018")]
    RsaVerificationKey2018,
    #[serde(rename = "Ed25519VerificationKey2018")]
    Ed25519VerificationKey2018,
    #[serde(rename = "Secp256k1VerificationKey2018")]
    Secp256k1VerificationKey2018,
}

impl KeySuite {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeySuite::RsaVerificationKey2018 => SUITE_RSA_2018,
            KeySuite::Ed25519VerificationKey2018 => SUITE_ED25519_2018,
            KeySuite::Secp256k1VerificationKey2018 => SUITE_SECP256K1_2018,
        }
    }
}

impl FromStr for KeySuite {
    type Err = KeyMaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SUITE_RSA_2018 => Ok(KeySuite::RsaVerificationKey2018),
            SUITE_ED25519_2018 => Ok(KeySuite::Ed25519VerificationKey2018),
            SUITE_SECP256K1_2018 => Ok(KeySuite::Secp256k1VerificationKey2018),
            other => Err(KeyMaterialError::UnknownSuite(other.to_owned())),
        }
    }
}

impl Display for KeySuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

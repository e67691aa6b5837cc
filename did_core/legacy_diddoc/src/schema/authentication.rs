use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{codec::decode_authentication, schema::public_key::PublicKey};

/// Entry of the `authentication` array: either a full key definition, or a reference to an
/// entry of the `publicKey` array by its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Authentication {
    Referenced(ReferencedAuthentication),
    Embedded(PublicKey),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencedAuthentication {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

impl Authentication {
    /// Reference to `public_key`, typed with the key's suite.
    pub fn referencing(public_key: &PublicKey) -> Self {
        Authentication::Referenced(ReferencedAuthentication {
            type_: public_key.suite().to_string(),
            public_key: public_key.id().to_string(),
        })
    }

    pub fn authentication_type(&self) -> &str {
        match self {
            Authentication::Referenced(reference) => &reference.type_,
            Authentication::Embedded(public_key) => public_key.suite().as_str(),
        }
    }
}

impl<'de> Deserialize<'de> for Authentication {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_authentication(value).map_err(serde::de::Error::custom)
    }
}

//! Peer DID documents and their normalization into legacy [`DidDoc`](crate::schema::did_doc::DidDoc)s.

pub mod converter;
mod normalize;
mod services;

pub use normalize::INDY_AGENT_SERVICE_ID;

use key_material::VerificationMaterial;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Resolved peer DID document, restricted to the members normalization reads. Other members of
/// a DID core document are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerDidDocument {
    id: String,
    #[serde(default)]
    verification_method: Vec<VerificationMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    service: Option<Vec<Value>>,
}

impl PeerDidDocument {
    pub fn new(
        id: String,
        verification_method: Vec<VerificationMethod>,
        service: Option<Vec<Value>>,
    ) -> Self {
        Self {
            id,
            verification_method,
            service,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn verification_method(&self) -> &[VerificationMethod] {
        &self.verification_method
    }

    /// Services in their raw JSON form; their shape is only known once normalized.
    pub fn service(&self) -> &[Value] {
        self.service.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationMethod {
    id: String,
    controller: String,
    #[serde(rename = "type")]
    verification_method_type: String,
    #[serde(flatten)]
    material: VerificationMaterial,
}

impl VerificationMethod {
    pub fn new(
        id: String,
        controller: String,
        verification_method_type: String,
        material: VerificationMaterial,
    ) -> Self {
        Self {
            id,
            controller,
            verification_method_type,
            material,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn verification_method_type(&self) -> &str {
        &self.verification_method_type
    }

    pub fn material(&self) -> &VerificationMaterial {
        &self.material
    }
}

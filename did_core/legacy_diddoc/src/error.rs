use key_material::KeyMaterialError;
use thiserror::Error;

pub type DidDocResult<T> = Result<T, DidDocError>;

#[derive(Debug, Error)]
pub enum DidDocError {
    #[error("Peer DID document has no verification method")]
    MissingVerificationMethod,
    #[error("Service matches neither the DIDComm v1 nor the DIDComm v2 shape: {0}")]
    ServiceDecodeFailure(String),
    #[error("Key conversion failed: {0}")]
    KeyConversionFailure(#[from] KeyMaterialError),
    #[error("Unknown {field} type: {tag}")]
    UnknownVariant { field: &'static str, tag: String },
    #[error("Malformed authentication entry: {0}")]
    MalformedAuthentication(String),
    #[error("Cannot build DID document from an empty service list")]
    EmptyServiceList,
    #[error("First service has no recipient keys")]
    EmptyRecipientKeys,
    #[error("Duplicate public key id: {0}")]
    DuplicatePublicKeyId(String),
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

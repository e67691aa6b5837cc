use key_material::{KeyMaterialError, KeySuite};

use crate::peer::VerificationMethod;

const KEY_AGREEMENT_TYPES: [&str; 2] = ["X25519KeyAgreementKey2019", "X25519KeyAgreementKey2020"];

/// Key conversions normalization delegates to. The agent runtime may plug in its own wallet
/// backed implementation; [`DefaultKeyMaterialConverter`] covers the encodings known to
/// `key_material`.
pub trait KeyMaterialConverter {
    /// Encodes the key of `verification_method` as a base58 string of the given suite.
    fn verification_method_to_base58(
        &self,
        verification_method: &VerificationMethod,
        suite: KeySuite,
    ) -> Result<String, KeyMaterialError>;

    /// Derives the raw base58 verkey a DID reference stands for.
    fn did_to_verkey(&self, did: &str) -> Result<String, KeyMaterialError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultKeyMaterialConverter;

impl KeyMaterialConverter for DefaultKeyMaterialConverter {
    fn verification_method_to_base58(
        &self,
        verification_method: &VerificationMethod,
        suite: KeySuite,
    ) -> Result<String, KeyMaterialError> {
        let method_type = verification_method.verification_method_type();
        if KEY_AGREEMENT_TYPES.contains(&method_type) {
            return Err(KeyMaterialError::UnsupportedVerificationMethodType(
                method_type.to_string(),
            ));
        }
        verification_method.material().to_base58(suite)
    }

    fn did_to_verkey(&self, did: &str) -> Result<String, KeyMaterialError> {
        key_material::did_to_verkey(did)
    }
}

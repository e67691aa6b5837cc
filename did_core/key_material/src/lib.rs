mod did_key;
mod error;
mod jwk;
mod key_codec;
mod key_suite;
mod material;

pub use did_key::{did_to_verkey, verkey_to_did_key, DID_KEY_PREFIX};
pub use error::{KeyMaterialError, VarintDecodingError};
pub use jwk::JsonWebKey;
pub use key_codec::KeyCodec;
pub use key_suite::{KeySuite, SUITE_ED25519_2018, SUITE_RSA_2018, SUITE_SECP256K1_2018};
pub use material::{VerificationMaterial, ED25519_KEY_LENGTH};

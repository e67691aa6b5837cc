use thiserror::Error;

use crate::{KeyCodec, KeySuite};

#[derive(Debug, Error)]
pub enum KeyMaterialError {
    #[error("Base 58 decoding error")]
    Base58DecodingError(#[from] bs58::decode::Error),
    #[error("Hex decoding error")]
    HexDecodingError(#[from] hex::FromHexError),
    #[error("Multibase decoding error")]
    MultibaseDecodingError(#[from] multibase::Error),
    #[error("Varint decoding error: {0}")]
    VarintDecodingError(#[from] VarintDecodingError),
    #[error("Unsupported multicodec descriptor: {0}")]
    UnsupportedMulticodecDescriptor(u64),
    #[error("Invalid key codec {0}, expected key codec: {1}")]
    InvalidKeyCodec(KeyCodec, KeyCodec),
    #[error("Invalid key length {0}, expected {1} bytes")]
    InvalidKeyLength(usize, usize),
    #[error("Unknown key suite: {0}")]
    UnknownSuite(String),
    #[error("Conversion to base58 is not supported for key suite {0}")]
    UnsupportedSuite(KeySuite),
    #[error("Unsupported verification method type: {0}")]
    UnsupportedVerificationMethodType(String),
    #[error("JWK decoding error: {0}")]
    JwkDecodingError(Box<dyn std::error::Error + Send + Sync>),
    #[error("Unsupported JWK key algorithm: {0}")]
    UnsupportedJwk(String),
    #[error("Invalid did:key DID or DID URL: {0}")]
    InvalidDidKey(String),
    #[error("Cannot derive a verkey from: {0}")]
    UnsupportedDid(String),
}

#[derive(Debug, Error)]
pub struct VarintDecodingError(unsigned_varint::decode::Error);

impl std::fmt::Display for VarintDecodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<unsigned_varint::decode::Error> for KeyMaterialError {
    fn from(error: unsigned_varint::decode::Error) -> Self {
        Self::VarintDecodingError(VarintDecodingError(error))
    }
}

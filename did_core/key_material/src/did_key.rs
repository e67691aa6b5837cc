use log::trace;
use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{char, one_of},
    combinator::{all_consuming, opt, recognize, rest},
    sequence::{pair, preceded, terminated},
    IResult,
};

use crate::{error::KeyMaterialError, material::ED25519_KEY_LENGTH, KeyCodec};

pub const DID_KEY_PREFIX: &str = "did:key:";

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn is_base58_char(c: char) -> bool {
    BASE58_ALPHABET.contains(c)
}

// mb-value = "z" 1*base58-char
fn fingerprint(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('z'), take_while1(is_base58_char)))(input)
}

// did-key-url = "did:key:" mb-value [ ( "/" / "?" / "#" ) *char ]
fn did_key_url(input: &str) -> IResult<&str, &str> {
    all_consuming(terminated(
        preceded(tag(DID_KEY_PREFIX), fingerprint),
        opt(preceded(one_of("/?#"), rest)),
    ))(input)
}

/// Derives the raw base58 verkey a DID reference stands for.
///
/// Accepts `did:key` DIDs and DID URLs over an Ed25519 key. A value which already is a base58
/// verkey is returned unchanged, so key lists mixing both forms can be converted uniformly.
pub fn did_to_verkey(did: &str) -> Result<String, KeyMaterialError> {
    if did.starts_with(DID_KEY_PREFIX) {
        let (_, fingerprint) = did_key_url(did)
            .map_err(|err| KeyMaterialError::InvalidDidKey(format!("{did}, error: {err}")))?;
        let (_base, prefixed_key) = multibase::decode(fingerprint)?;
        let (codec, raw_key) = KeyCodec::split_prefixed(&prefixed_key)?;
        if codec != KeyCodec::Ed25519 {
            return Err(KeyMaterialError::InvalidKeyCodec(codec, KeyCodec::Ed25519));
        }
        let verkey = bs58::encode(raw_key).into_string();
        trace!("did_to_verkey >> converted {did} into {verkey}");
        return Ok(verkey);
    }
    if is_verkey(did) {
        return Ok(did.to_owned());
    }
    Err(KeyMaterialError::UnsupportedDid(did.to_owned()))
}

pub fn verkey_to_did_key(verkey: &str) -> Result<String, KeyMaterialError> {
    let raw_key = bs58::decode(verkey).into_vec()?;
    if raw_key.len() != ED25519_KEY_LENGTH {
        return Err(KeyMaterialError::InvalidKeyLength(
            raw_key.len(),
            ED25519_KEY_LENGTH,
        ));
    }
    let fingerprint = multibase::encode(
        multibase::Base::Base58Btc,
        KeyCodec::Ed25519.prefix(&raw_key),
    );
    Ok(format!("{DID_KEY_PREFIX}{fingerprint}"))
}

fn is_verkey(value: &str) -> bool {
    matches!(bs58::decode(value).into_vec(), Ok(bytes) if bytes.len() == ED25519_KEY_LENGTH)
}

//! Wire JSON codec of [`DidDoc`].
//!
//! The `publicKey` and `service` arrays are polymorphic: every element is dispatched on its
//! `type` member before the rest of it is parsed into the matching variant.

use key_material::KeySuite;
use log::warn;
use serde::{
    de::{self, DeserializeOwned},
    ser::SerializeStruct,
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::{Map, Value};

use crate::{
    error::{DidDocError, DidDocResult},
    schema::{
        authentication::{Authentication, ReferencedAuthentication},
        did_doc::{check_authentication_references, DidDoc, CONTEXT},
        public_key::PublicKey,
        service::{DidDocService, ServiceType},
    },
};

const FIELD_CONTEXT: &str = "@context";
const FIELD_ID: &str = "id";
const FIELD_PUBLIC_KEY: &str = "publicKey";
const FIELD_SERVICE: &str = "service";
const FIELD_AUTHENTICATION: &str = "authentication";
const FIELD_TYPE: &str = "type";

/// What to do with `publicKey` and `service` elements of an unrecognised type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownVariantPolicy {
    /// Fail decoding with [`DidDocError::UnknownVariant`].
    #[default]
    Strict,
    /// Skip the element, tolerating documents written by newer implementations.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub unknown_variants: UnknownVariantPolicy,
    /// Require every referenced authentication entry to resolve to a `publicKey` entry.
    pub check_authentication_references: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            unknown_variants: UnknownVariantPolicy::Strict,
            check_authentication_references: true,
        }
    }
}

impl DecodeOptions {
    pub fn lenient() -> Self {
        Self {
            unknown_variants: UnknownVariantPolicy::Lenient,
            ..Default::default()
        }
    }
}

impl DidDoc {
    pub fn from_json_str(json: &str) -> DidDocResult<Self> {
        Self::from_json_str_with(json, &DecodeOptions::default())
    }

    pub fn from_json_str_with(json: &str, options: &DecodeOptions) -> DidDocResult<Self> {
        Self::from_json_value_with(serde_json::from_str(json)?, options)
    }

    pub fn from_json_value(value: Value) -> DidDocResult<Self> {
        Self::from_json_value_with(value, &DecodeOptions::default())
    }

    pub fn from_json_value_with(value: Value, options: &DecodeOptions) -> DidDocResult<Self> {
        decode_did_doc(value, options)
    }

    pub fn to_json_value(&self) -> DidDocResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Serialize for DidDoc {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DidDoc", 5)?;
        state.serialize_field(FIELD_CONTEXT, CONTEXT)?;
        state.serialize_field(FIELD_ID, &self.id)?;
        state.serialize_field(FIELD_PUBLIC_KEY, &self.public_key)?;
        state.serialize_field(FIELD_SERVICE, &self.service)?;
        state.serialize_field(FIELD_AUTHENTICATION, &self.authentication)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for DidDoc {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_did_doc(value, &DecodeOptions::default()).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for DidDoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{json}"),
            Err(e) => write!(f, "Error serializing DidDoc: {e}"),
        }
    }
}

fn decode_did_doc(value: Value, options: &DecodeOptions) -> DidDocResult<DidDoc> {
    let Value::Object(mut object) = value else {
        return Err(DidDocError::InvalidJson(
            "DID document must be a JSON object".to_string(),
        ));
    };
    // @context is a constant of the document, whatever the sender wrote is not kept
    object.remove(FIELD_CONTEXT);

    let id = match object.remove(FIELD_ID) {
        Some(Value::String(id)) if !id.is_empty() => id,
        Some(Value::String(_)) => {
            return Err(DidDocError::InvalidJson("id is empty".to_string()));
        }
        _ => {
            return Err(DidDocError::InvalidJson(
                "id is missing or not a string".to_string(),
            ));
        }
    };

    let public_key: Vec<PublicKey> = decode_variant_array(
        take_array(&mut object, FIELD_PUBLIC_KEY)?,
        FIELD_PUBLIC_KEY,
        |tag| tag.parse::<KeySuite>().is_ok(),
        options,
    )?;
    let service: Vec<DidDocService> = decode_variant_array(
        take_array(&mut object, FIELD_SERVICE)?,
        FIELD_SERVICE,
        |tag| tag.parse::<ServiceType>().is_ok(),
        options,
    )?;
    let authentication = take_array(&mut object, FIELD_AUTHENTICATION)?
        .into_iter()
        .map(decode_authentication)
        .collect::<DidDocResult<Vec<_>>>()?;

    if options.check_authentication_references {
        check_authentication_references(&id, &public_key, &authentication)?;
    }

    Ok(DidDoc {
        id,
        public_key,
        service,
        authentication,
    })
}

fn take_array(object: &mut Map<String, Value>, field: &'static str) -> DidDocResult<Vec<Value>> {
    match object.remove(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(elements)) => Ok(elements),
        Some(other) => Err(DidDocError::InvalidJson(format!(
            "{field} must be an array, got: {other}"
        ))),
    }
}

fn variant_tag<'a>(element: &'a Value, field: &'static str) -> DidDocResult<&'a str> {
    element
        .get(FIELD_TYPE)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            DidDocError::InvalidJson(format!("{field} entry has no string type: {element}"))
        })
}

fn decode_variant_array<T, F>(
    elements: Vec<Value>,
    field: &'static str,
    is_known_tag: F,
    options: &DecodeOptions,
) -> DidDocResult<Vec<T>>
where
    T: DeserializeOwned,
    F: Fn(&str) -> bool,
{
    let mut decoded = Vec::with_capacity(elements.len());
    for element in elements {
        let tag = variant_tag(&element, field)?;
        if !is_known_tag(tag) {
            match options.unknown_variants {
                UnknownVariantPolicy::Strict => {
                    return Err(DidDocError::UnknownVariant {
                        field,
                        tag: tag.to_string(),
                    });
                }
                UnknownVariantPolicy::Lenient => {
                    warn!("Skipping {field} entry of unknown type {tag}");
                    continue;
                }
            }
        }
        let variant = serde_json::from_value(element).map_err(|err| {
            DidDocError::InvalidJson(format!("Invalid {field} entry: {err}"))
        })?;
        decoded.push(variant);
    }
    Ok(decoded)
}

/// Decodes an authentication entry: `{type, publicKey: <id>}` is a reference, a full key
/// object is an embedded key.
pub(crate) fn decode_authentication(element: Value) -> DidDocResult<Authentication> {
    if element.get(FIELD_PUBLIC_KEY).is_some_and(Value::is_string) {
        return serde_json::from_value::<ReferencedAuthentication>(element.clone())
            .map(Authentication::Referenced)
            .map_err(|err| {
                DidDocError::MalformedAuthentication(format!("{element}, error: {err}"))
            });
    }
    let is_key_object = element
        .get(FIELD_TYPE)
        .and_then(Value::as_str)
        .is_some_and(|tag| tag.parse::<KeySuite>().is_ok());
    if is_key_object {
        return serde_json::from_value::<PublicKey>(element.clone())
            .map(Authentication::Embedded)
            .map_err(|err| {
                DidDocError::MalformedAuthentication(format!("{element}, error: {err}"))
            });
    }
    Err(DidDocError::MalformedAuthentication(element.to_string()))
}

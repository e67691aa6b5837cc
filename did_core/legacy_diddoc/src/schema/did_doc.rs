use std::collections::HashSet;

use log::debug;

use crate::{
    error::{DidDocError, DidDocResult},
    schema::{
        authentication::Authentication,
        public_key::PublicKey,
        service::{DidDocService, ServiceType},
    },
};

pub const CONTEXT: &str = "https://w3id.org/did/v1";

/// DID document in the form legacy DIDComm (connection, credential exchange) messages carry.
///
/// Documents are value objects: they are built once, by decoding, by normalizing a peer DID
/// document or from a service list, and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DidDoc {
    pub(crate) id: String,
    pub(crate) public_key: Vec<PublicKey>,
    pub(crate) service: Vec<DidDocService>,
    pub(crate) authentication: Vec<Authentication>,
}

impl DidDoc {
    pub fn builder(id: String) -> DidDocBuilder {
        DidDocBuilder::new(id)
    }

    /// Builds a keyless document which only serves as a routing handle for `services`. The
    /// first recipient key of the first service becomes the document id.
    pub fn from_services(services: Vec<DidDocService>) -> DidDocResult<Self> {
        let service = services.first().ok_or(DidDocError::EmptyServiceList)?;
        let id = service
            .recipient_keys()
            .first()
            .ok_or(DidDocError::EmptyRecipientKeys)?
            .to_owned();
        debug!(
            "DidDoc::from_services >> id: {id}, services: {}",
            services.len()
        );
        Ok(Self {
            id,
            public_key: Vec::new(),
            service: services,
            authentication: Vec::new(),
        })
    }

    pub fn context(&self) -> &'static str {
        CONTEXT
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn public_keys(&self) -> &[PublicKey] {
        &self.public_key
    }

    pub fn services(&self) -> &[DidDocService] {
        &self.service
    }

    pub fn authentication(&self) -> &[Authentication] {
        &self.authentication
    }

    pub fn public_key(&self, id: &str) -> Option<&PublicKey> {
        self.public_key.iter().find(|key| key.id() == id)
    }

    pub fn services_by_type(&self, service_type: &str) -> Vec<&DidDocService> {
        self.service
            .iter()
            .filter(|service| service.service_type().as_str() == service_type)
            .collect()
    }

    /// Services usable for DIDComm delivery, highest priority first. Services of equal
    /// priority keep their document order.
    pub fn did_comm_services(&self) -> Vec<&DidDocService> {
        let mut services: Vec<&DidDocService> = self
            .service
            .iter()
            .filter(|service| {
                matches!(
                    service.service_type(),
                    ServiceType::DidComm | ServiceType::IndyAgent
                )
            })
            .collect();
        services.sort_by(|a, b| b.priority().cmp(&a.priority()));
        services
    }

    /// Key an authentication entry stands for: the embedded key, or the `publicKey` entry a
    /// reference resolves to.
    pub fn resolve_authentication<'a>(
        &'a self,
        authentication: &'a Authentication,
    ) -> Option<&'a PublicKey> {
        match authentication {
            Authentication::Embedded(public_key) => Some(public_key),
            Authentication::Referenced(reference) => {
                find_key_by_reference(&self.id, &self.public_key, &reference.public_key)
            }
        }
    }

    pub fn validate(&self) -> DidDocResult<()> {
        if self.id.is_empty() {
            return Err(DidDocError::InvalidJson(
                "DIDDoc validation failed: id is empty".to_string(),
            ));
        }
        let mut ids = HashSet::new();
        for key in &self.public_key {
            if !ids.insert(key.id()) {
                return Err(DidDocError::DuplicatePublicKeyId(key.id().to_string()));
            }
        }
        check_authentication_references(&self.id, &self.public_key, &self.authentication)
    }
}

impl TryFrom<Vec<DidDocService>> for DidDoc {
    type Error = DidDocError;

    fn try_from(services: Vec<DidDocService>) -> Result<Self, Self::Error> {
        Self::from_services(services)
    }
}

/// Finds the key a reference points to, either by exact id or by local id, so that
/// `did#1` resolves a key listed as `1` and vice versa. A reference into another DID only
/// matches by exact id.
pub(crate) fn find_key_by_reference<'a>(
    did: &str,
    public_keys: &'a [PublicKey],
    reference: &str,
) -> Option<&'a PublicKey> {
    public_keys
        .iter()
        .find(|key| key.id() == reference)
        .or_else(|| {
            let local_id = local_key_id(did, reference)?;
            public_keys
                .iter()
                .find(|key| local_key_id(did, key.id()) == Some(local_id))
        })
}

/// Fragment of a key reference, provided it is relative or rooted at `did`.
fn local_key_id<'a>(did: &str, key_reference: &'a str) -> Option<&'a str> {
    match key_reference.split_once('#') {
        Some(("", fragment)) => Some(fragment),
        Some((reference_did, fragment)) if reference_did == did => Some(fragment),
        Some(_) => None,
        None => Some(key_reference),
    }
}

pub(crate) fn check_authentication_references(
    did: &str,
    public_keys: &[PublicKey],
    authentication: &[Authentication],
) -> DidDocResult<()> {
    for entry in authentication {
        if let Authentication::Referenced(reference) = entry {
            if find_key_by_reference(did, public_keys, &reference.public_key).is_none() {
                return Err(DidDocError::MalformedAuthentication(format!(
                    "Failed to find entry in publicKey by key reference: {}",
                    reference.public_key
                )));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct DidDocBuilder {
    id: String,
    public_key: Vec<PublicKey>,
    service: Vec<DidDocService>,
    authentication: Vec<Authentication>,
}

impl DidDocBuilder {
    pub fn new(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn add_public_key(mut self, public_key: PublicKey) -> Self {
        self.public_key.push(public_key);
        self
    }

    pub fn add_service(mut self, service: DidDocService) -> Self {
        self.service.push(service);
        self
    }

    pub fn add_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication.push(authentication);
        self
    }

    pub fn build(self) -> DidDoc {
        DidDoc {
            id: self.id,
            public_key: self.public_key,
            service: self.service,
            authentication: self.authentication,
        }
    }
}

use key_material::KeySuite;
use log::{debug, trace};

use crate::{
    error::{DidDocError, DidDocResult},
    peer::{
        converter::{DefaultKeyMaterialConverter, KeyMaterialConverter},
        services::{parse_peer_service, PeerService},
        PeerDidDocument,
    },
    schema::{
        authentication::Authentication,
        did_doc::DidDoc,
        public_key::PublicKey,
        service::{DidCommService, DidDocService, IndyAgentService, DID_COMM_TRANSPORT_QUEUE},
    },
};

pub const INDY_AGENT_SERVICE_ID: &str = "#IndyAgentService";

impl DidDoc {
    /// Normalizes a peer DID document into the legacy form, converting keys with the
    /// built-in [`DefaultKeyMaterialConverter`].
    pub fn from_peer_did_document(peer_did_document: &PeerDidDocument) -> DidDocResult<Self> {
        Self::from_peer_did_document_with(peer_did_document, &DefaultKeyMaterialConverter)
    }

    /// Normalizes a peer DID document into the legacy form.
    ///
    /// Only the first verification method is carried over, as the single Ed25519 key
    /// `<id>#1`. Every service is rewritten into a `did-communication` service addressed to
    /// that key, with its routing key DIDs resolved to verkeys. A document without services
    /// gets an `IndyAgent` service over the queue transport.
    pub fn from_peer_did_document_with(
        peer_did_document: &PeerDidDocument,
        converter: &impl KeyMaterialConverter,
    ) -> DidDocResult<Self> {
        let id = peer_did_document.id();
        debug!(
            "DidDoc::from_peer_did_document >> id: {id}, verification methods: {}, services: {}",
            peer_did_document.verification_method().len(),
            peer_did_document.service().len()
        );
        // TODO: carry over the remaining verification methods once legacy consumers can select
        // keys by purpose
        let verification_method = peer_did_document
            .verification_method()
            .first()
            .ok_or(DidDocError::MissingVerificationMethod)?;
        let verkey = converter.verification_method_to_base58(
            verification_method,
            KeySuite::Ed25519VerificationKey2018,
        )?;

        let public_key = PublicKey::ed25519(format!("{id}#1"), id.to_string(), verkey.clone());
        let authentication = Authentication::referencing(&public_key);

        let mut service = peer_did_document
            .service()
            .iter()
            .enumerate()
            .map(|(index, service)| {
                let peer_service = parse_peer_service(service)?;
                to_did_comm_service(peer_service, index, &verkey, converter)
            })
            .collect::<DidDocResult<Vec<_>>>()?;
        if service.is_empty() {
            trace!("DidDoc::from_peer_did_document >> no services, using queue transport");
            service.push(
                IndyAgentService::new(
                    INDY_AGENT_SERVICE_ID.to_string(),
                    DID_COMM_TRANSPORT_QUEUE.to_string(),
                    vec![verkey],
                )
                .into(),
            );
        }

        Ok(DidDoc {
            id: id.to_string(),
            public_key: vec![public_key],
            service,
            authentication: vec![authentication],
        })
    }
}

impl TryFrom<&PeerDidDocument> for DidDoc {
    type Error = DidDocError;

    fn try_from(peer_did_document: &PeerDidDocument) -> Result<Self, Self::Error> {
        Self::from_peer_did_document(peer_did_document)
    }
}

fn to_did_comm_service(
    peer_service: PeerService,
    index: usize,
    verkey: &str,
    converter: &impl KeyMaterialConverter,
) -> DidDocResult<DidDocService> {
    let routing_keys = peer_service
        .routing_keys
        .map(|routing_keys| {
            routing_keys
                .iter()
                .map(|routing_key| converter.did_to_verkey(routing_key))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;
    let id = peer_service
        .id
        .unwrap_or_else(|| format!("#service-{index}"));
    trace!(
        "DidDoc::from_peer_did_document >> service {id}: endpoint {}, routing keys {routing_keys:?}",
        peer_service.service_endpoint
    );
    Ok(
        DidCommService::new(id, peer_service.service_endpoint, vec![verkey.to_string()])
            .set_priority(peer_service.priority)
            .set_routing_keys(routing_keys)
            .set_accept(peer_service.accept)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use key_material::{KeyMaterialError, VerificationMaterial};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::peer::VerificationMethod;

    const PEER_DID: &str = "did:peer:2.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc";
    const VERKEY: &str = "8HH5gYEeNc3z7PYXmd54d4x6qAfCNrqQqEB3nS7Zfu7K";

    fn verification_method() -> VerificationMethod {
        VerificationMethod::new(
            "#key-1".to_string(),
            PEER_DID.to_string(),
            "Ed25519VerificationKey2020".to_string(),
            VerificationMaterial::Multibase {
                public_key_multibase: "z6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th"
                    .to_string(),
            },
        )
    }

    #[test]
    fn test_fallback_service_without_input_services() {
        let document =
            PeerDidDocument::new(PEER_DID.to_string(), vec![verification_method()], None);
        let did_doc = DidDoc::from_peer_did_document(&document).unwrap();
        assert_eq!(
            did_doc.services(),
            &[DidDocService::IndyAgent(IndyAgentService::new(
                INDY_AGENT_SERVICE_ID.to_string(),
                DID_COMM_TRANSPORT_QUEUE.to_string(),
                vec![VERKEY.to_string()],
            ))]
        );
    }

    #[test]
    fn test_missing_id_uses_service_index() {
        let document = PeerDidDocument::new(
            PEER_DID.to_string(),
            vec![verification_method()],
            Some(vec![
                json!({ "id": "#didcomm", "serviceEndpoint": "https://a.example.com" }),
                json!({ "serviceEndpoint": { "uri": "https://b.example.com" } }),
            ]),
        );
        let did_doc = DidDoc::from_peer_did_document(&document).unwrap();
        let ids: Vec<&str> = did_doc.services().iter().map(DidDocService::id).collect();
        assert_eq!(ids, vec!["#didcomm", "#service-1"]);
        assert!(did_doc.services()[1].routing_keys().is_empty());
    }

    #[derive(Debug)]
    struct FailingConverter;

    impl KeyMaterialConverter for FailingConverter {
        fn verification_method_to_base58(
            &self,
            _verification_method: &VerificationMethod,
            _suite: KeySuite,
        ) -> Result<String, KeyMaterialError> {
            Ok(VERKEY.to_string())
        }

        fn did_to_verkey(&self, did: &str) -> Result<String, KeyMaterialError> {
            Err(KeyMaterialError::UnsupportedDid(did.to_string()))
        }
    }

    #[test]
    fn test_routing_key_conversion_failure_aborts() {
        let document = PeerDidDocument::new(
            PEER_DID.to_string(),
            vec![verification_method()],
            Some(vec![json!({
                "serviceEndpoint": "https://example.com",
                "routingKeys": ["did:example:somemediator#somekey"]
            })]),
        );
        assert!(matches!(
            DidDoc::from_peer_did_document_with(&document, &FailingConverter),
            Err(DidDocError::KeyConversionFailure(
                KeyMaterialError::UnsupportedDid(_)
            ))
        ));
    }
}

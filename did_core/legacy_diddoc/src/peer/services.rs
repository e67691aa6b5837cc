use serde::Deserialize;
use serde_json::Value;

use crate::error::{DidDocError, DidDocResult};

/// DIDComm v1 service as found in peer DID documents: a flat string endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DidCommV1Service {
    id: Option<String>,
    #[serde(default)]
    priority: i32,
    service_endpoint: String,
    routing_keys: Option<Vec<String>>,
    accept: Option<Vec<String>>,
}

/// DIDComm v2 service: the endpoint is an object carrying the uri and routing keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DidCommV2Service {
    id: Option<String>,
    service_endpoint: DidCommV2Endpoint,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DidCommV2Endpoint {
    uri: String,
    routing_keys: Option<Vec<String>>,
    accept: Option<Vec<String>>,
}

/// The parts of a peer DID service which survive normalization, whichever shape it came in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PeerService {
    pub id: Option<String>,
    pub priority: i32,
    pub service_endpoint: String,
    pub routing_keys: Option<Vec<String>>,
    pub accept: Option<Vec<String>>,
}

impl From<DidCommV1Service> for PeerService {
    fn from(service: DidCommV1Service) -> Self {
        Self {
            id: service.id,
            priority: service.priority,
            service_endpoint: service.service_endpoint,
            routing_keys: service.routing_keys,
            accept: service.accept,
        }
    }
}

impl From<DidCommV2Service> for PeerService {
    fn from(service: DidCommV2Service) -> Self {
        Self {
            id: service.id,
            priority: 0,
            service_endpoint: service.service_endpoint.uri,
            routing_keys: service.service_endpoint.routing_keys,
            accept: service.service_endpoint.accept,
        }
    }
}

/// Reads a service as the v1 shape, falling back to the v2 shape.
pub(super) fn parse_peer_service(service: &Value) -> DidDocResult<PeerService> {
    if let Ok(v1) = DidCommV1Service::deserialize(service) {
        return Ok(v1.into());
    }
    DidCommV2Service::deserialize(service)
        .map(PeerService::from)
        .map_err(|err| DidDocError::ServiceDecodeFailure(format!("{service}, error: {err}")))
}

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

pub const SERVICE_TYPE_DIDCOMM: &str = "did-communication";
pub const SERVICE_TYPE_INDY_AGENT: &str = "IndyAgent";
// Only ever read from peer DID documents, never stored.
pub const SERVICE_TYPE_DIDCOMM_V2: &str = "DIDCommMessaging";

/// Endpoint of services whose messages are delivered over the queue transport, i.e. which
/// have no physical endpoint.
pub const DID_COMM_TRANSPORT_QUEUE: &str = "didcomm:transport/queue";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    DidComm,
    IndyAgent,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::DidComm => SERVICE_TYPE_DIDCOMM,
            ServiceType::IndyAgent => SERVICE_TYPE_INDY_AGENT,
        }
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SERVICE_TYPE_DIDCOMM => Ok(ServiceType::DidComm),
            SERVICE_TYPE_INDY_AGENT => Ok(ServiceType::IndyAgent),
            other => Err(other.to_owned()),
        }
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entry of the `service` array, one variant per endpoint schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DidDocService {
    #[serde(rename = "did-communication")]
    DidComm(DidCommService),
    #[serde(rename = "IndyAgent")]
    IndyAgent(IndyAgentService),
}

// Service object as defined https://github.com/hyperledger/aries-rfcs/blob/main/features/0067-didcomm-diddoc-conventions/README.md#service-conventions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidCommService {
    pub id: String,
    #[serde(default)]
    pub priority: i32,
    pub service_endpoint: String,
    #[serde(default)]
    pub recipient_keys: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndyAgentService {
    pub id: String,
    #[serde(default)]
    pub priority: i32,
    pub service_endpoint: String,
    #[serde(default)]
    pub recipient_keys: Vec<String>,
    #[serde(default)]
    pub routing_keys: Vec<String>,
}

impl DidCommService {
    pub fn new(id: String, service_endpoint: String, recipient_keys: Vec<String>) -> Self {
        Self {
            id,
            priority: 0,
            service_endpoint,
            recipient_keys,
            routing_keys: None,
            accept: None,
        }
    }

    pub fn set_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn set_routing_keys(mut self, routing_keys: Option<Vec<String>>) -> Self {
        self.routing_keys = routing_keys;
        self
    }

    pub fn set_accept(mut self, accept: Option<Vec<String>>) -> Self {
        self.accept = accept;
        self
    }
}

impl IndyAgentService {
    pub fn new(id: String, service_endpoint: String, recipient_keys: Vec<String>) -> Self {
        Self {
            id,
            priority: 0,
            service_endpoint,
            recipient_keys,
            routing_keys: Vec::new(),
        }
    }

    pub fn set_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn set_routing_keys(mut self, routing_keys: Vec<String>) -> Self {
        self.routing_keys = routing_keys;
        self
    }
}

impl DidDocService {
    pub fn id(&self) -> &str {
        match self {
            DidDocService::DidComm(service) => &service.id,
            DidDocService::IndyAgent(service) => &service.id,
        }
    }

    pub fn service_type(&self) -> ServiceType {
        match self {
            DidDocService::DidComm(_) => ServiceType::DidComm,
            DidDocService::IndyAgent(_) => ServiceType::IndyAgent,
        }
    }

    pub fn priority(&self) -> i32 {
        match self {
            DidDocService::DidComm(service) => service.priority,
            DidDocService::IndyAgent(service) => service.priority,
        }
    }

    pub fn service_endpoint(&self) -> &str {
        match self {
            DidDocService::DidComm(service) => &service.service_endpoint,
            DidDocService::IndyAgent(service) => &service.service_endpoint,
        }
    }

    pub fn recipient_keys(&self) -> &[String] {
        match self {
            DidDocService::DidComm(service) => &service.recipient_keys,
            DidDocService::IndyAgent(service) => &service.recipient_keys,
        }
    }

    pub fn routing_keys(&self) -> &[String] {
        match self {
            DidDocService::DidComm(service) => service.routing_keys.as_deref().unwrap_or_default(),
            DidDocService::IndyAgent(service) => &service.routing_keys,
        }
    }
}

impl From<DidCommService> for DidDocService {
    fn from(service: DidCommService) -> Self {
        DidDocService::DidComm(service)
    }
}

impl From<IndyAgentService> for DidDocService {
    fn from(service: IndyAgentService) -> Self {
        DidDocService::IndyAgent(service)
    }
}

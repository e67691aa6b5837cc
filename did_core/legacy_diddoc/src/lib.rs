pub mod codec;
pub mod error;
pub mod peer;
pub mod schema;

pub use codec::{DecodeOptions, UnknownVariantPolicy};
pub use error::{DidDocError, DidDocResult};
pub use key_material;
pub use peer::{
    converter::{DefaultKeyMaterialConverter, KeyMaterialConverter},
    PeerDidDocument, VerificationMethod, INDY_AGENT_SERVICE_ID,
};
pub use schema::{
    authentication::{Authentication, ReferencedAuthentication},
    did_doc::{DidDoc, DidDocBuilder, CONTEXT},
    public_key::{Ed25519PublicKey, PublicKey, RsaPublicKey, Secp256k1PublicKey},
    service::{
        DidCommService, DidDocService, IndyAgentService, ServiceType, DID_COMM_TRANSPORT_QUEUE,
        SERVICE_TYPE_DIDCOMM, SERVICE_TYPE_DIDCOMM_V2, SERVICE_TYPE_INDY_AGENT,
    },
};

pub static PEER_DID: &str = "did:peer:2\
.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc\
.Vz6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th";

// Base58 form of the Ed25519 key of the verification method below.
pub static PEER_VERKEY: &str = "8HH5gYEeNc3z7PYXmd54d4x6qAfCNrqQqEB3nS7Zfu7K";

pub static ROUTING_DID_KEY: &str = "did:key:z6Mkw7FfEGiwh6YQbCLTNbJWAYR8boGNMt7PCjh35GLNxmMo";
pub static ROUTING_VERKEY: &str = "Hezce2UWMZ3wUhVkh2LfKSs8nDzWwzs2Win7EzNN3YaR";

pub static MEDIATOR_DID_KEY_URL: &str = "did:key:z6MkukGVb3mRvTu1msArDKY9UwxeZFGjmwnCKtdQttr4Fk6i\
#z6MkukGVb3mRvTu1msArDKY9UwxeZFGjmwnCKtdQttr4Fk6i";
pub static MEDIATOR_VERKEY: &str = "GJ1SzoWzavQYfNL9XkaJdrQejfztN4XqdsiV4ct3LXKL";

pub static PEER_DID_DOC_V1_SERVICE: &str = r##"
    {
        "id": "did:peer:2.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc.Vz6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th",
        "alsoKnownAs": [],
        "verificationMethod": [
            {
                "id": "#6MkmjY8G",
                "type": "Ed25519VerificationKey2020",
                "controller": "did:peer:2.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc.Vz6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th",
                "publicKeyMultibase": "z6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th"
            },
            {
                "id": "#6LSbysY2",
                "type": "X25519KeyAgreementKey2020",
                "controller": "did:peer:2.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc.Vz6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th",
                "publicKeyMultibase": "z6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc"
            }
        ],
        "authentication": ["#6MkmjY8G"],
        "keyAgreement": ["#6LSbysY2"],
        "service": [
            {
                "id": "#service-0",
                "type": "DIDCommMessaging",
                "priority": 2,
                "serviceEndpoint": "https://example.com",
                "recipientKeys": ["#6LSbysY2"],
                "routingKeys": ["did:key:z6Mkw7FfEGiwh6YQbCLTNbJWAYR8boGNMt7PCjh35GLNxmMo"]
            }
        ]
    }
"##;

pub static PEER_DID_DOC_V2_SERVICE: &str = r##"
    {
        "id": "did:peer:2.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc.Vz6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th",
        "verificationMethod": [
            {
                "id": "#6MkmjY8G",
                "type": "Ed25519VerificationKey2018",
                "controller": "did:peer:2.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc.Vz6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th",
                "publicKeyBase58": "8HH5gYEeNc3z7PYXmd54d4x6qAfCNrqQqEB3nS7Zfu7K"
            }
        ],
        "service": [
            {
                "id": "#didcomm",
                "type": "DIDCommMessaging",
                "serviceEndpoint": {
                    "uri": "https://example.com/endpoint",
                    "routingKeys": [
                        "did:key:z6MkukGVb3mRvTu1msArDKY9UwxeZFGjmwnCKtdQttr4Fk6i#z6MkukGVb3mRvTu1msArDKY9UwxeZFGjmwnCKtdQttr4Fk6i"
                    ],
                    "accept": ["didcomm/v2", "didcomm/aip2;env=rfc587"]
                }
            }
        ]
    }
"##;

pub static PEER_DID_DOC_KEY_AGREEMENT_FIRST: &str = r##"
    {
        "id": "did:peer:2.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc",
        "verificationMethod": [
            {
                "id": "#key-1",
                "type": "X25519KeyAgreementKey2020",
                "controller": "did:peer:2.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc",
                "publicKeyBase58": "JhNWeSVLMYccCk7iopQW4guaSJTojqpMEELgSLhKwRr"
            }
        ],
        "service": []
    }
"##;

pub static PEER_DID_DOC_NO_VERIFICATION_METHOD: &str = r##"
    {
        "id": "did:peer:2.SeyJpZCI6IiNzZXJ2aWNlLTAiLCJ0IjoiZG0iLCJzIjoiaHR0cHM6Ly9leGFtcGxlLmNvbS9lbmRwb2ludCJ9",
        "verificationMethod": [],
        "service": [
            {
                "id": "#service-0",
                "type": "DIDCommMessaging",
                "serviceEndpoint": "https://example.com/endpoint"
            }
        ]
    }
"##;

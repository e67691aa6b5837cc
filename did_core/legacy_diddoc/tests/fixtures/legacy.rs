pub static LEGACY_DID: &str = "did:sov:LjgpST2rjsoxYegQDRm7EL";

pub static LEGACY_VERKEY: &str = "GJ1SzoWzavQYfNL9XkaJdrQejfztN4XqdsiV4ct3LXKL";

pub static LEGACY_ROUTING_VERKEY: &str = "Hezce2UWMZ3wUhVkh2LfKSs8nDzWwzs2Win7EzNN3YaR";

pub static DID_DOC_ALL_VARIANTS: &str = r##"
    {
        "@context": "https://w3id.org/did/v1",
        "id": "did:sov:LjgpST2rjsoxYegQDRm7EL",
        "publicKey": [
            {
                "id": "did:sov:LjgpST2rjsoxYegQDRm7EL#1",
                "type": "Ed25519VerificationKey2018",
                "controller": "did:sov:LjgpST2rjsoxYegQDRm7EL",
                "publicKeyBase58": "GJ1SzoWzavQYfNL9XkaJdrQejfztN4XqdsiV4ct3LXKL"
            },
            {
                "id": "did:sov:LjgpST2rjsoxYegQDRm7EL#2",
                "type": "Secp256k1VerificationKey2018",
                "controller": "did:sov:LjgpST2rjsoxYegQDRm7EL",
                "publicKeyHex": "02b97c30de767f084ce3080168ee293053ba33b235d7116a3263d29f1450936b71"
            },
            {
                "id": "did:sov:LjgpST2rjsoxYegQDRm7EL#3",
                "type": "RsaVerificationKey2018",
                "controller": "did:sov:LjgpST2rjsoxYegQDRm7EL",
                "publicKeyPem": "-----BEGIN PUBLIC X..."
            }
        ],
        "service": [
            {
                "id": "did:sov:LjgpST2rjsoxYegQDRm7EL;indy",
                "type": "IndyAgent",
                "priority": 0,
                "recipientKeys": ["GJ1SzoWzavQYfNL9XkaJdrQejfztN4XqdsiV4ct3LXKL"],
                "routingKeys": ["Hezce2UWMZ3wUhVkh2LfKSs8nDzWwzs2Win7EzNN3YaR"],
                "serviceEndpoint": "http://localhost:8080/agency/msg"
            },
            {
                "id": "did:sov:LjgpST2rjsoxYegQDRm7EL#didcomm-1",
                "type": "did-communication",
                "priority": 1,
                "recipientKeys": ["GJ1SzoWzavQYfNL9XkaJdrQejfztN4XqdsiV4ct3LXKL"],
                "routingKeys": ["Hezce2UWMZ3wUhVkh2LfKSs8nDzWwzs2Win7EzNN3YaR"],
                "accept": ["didcomm/aip2;env=rfc19"],
                "serviceEndpoint": "https://example.com/endpoint"
            }
        ],
        "authentication": [
            {
                "type": "Ed25519SignatureAuthentication2018",
                "publicKey": "did:sov:LjgpST2rjsoxYegQDRm7EL#1"
            },
            {
                "id": "did:sov:LjgpST2rjsoxYegQDRm7EL#4",
                "type": "RsaVerificationKey2018",
                "controller": "did:sov:LjgpST2rjsoxYegQDRm7EL",
                "publicKeyPem": "-----BEGIN PUBLIC A..."
            }
        ]
    }
"##;

// Key ids and references in the short form older agents emit.
pub static DID_DOC_FRAGMENT_REFERENCES: &str = r##"
    {
        "@context": "https://w3id.org/did/v1",
        "id": "2ZHFFhzA2XtTD6hJqzL7ux",
        "publicKey": [
            {
                "id": "1",
                "type": "Ed25519VerificationKey2018",
                "controller": "2ZHFFhzA2XtTD6hJqzL7ux",
                "publicKeyBase58": "rCw3x5h1jS6gPo7rRrt3EYbXXe5nNjnGbdf1jAwUxuj"
            }
        ],
        "authentication": [
            {
                "type": "Ed25519SignatureAuthentication2018",
                "publicKey": "2ZHFFhzA2XtTD6hJqzL7ux#1"
            }
        ],
        "service": [
            {
                "id": "did:example:123456789abcdefghi;indy",
                "type": "IndyAgent",
                "priority": 0,
                "recipientKeys": ["2ZHFFhzA2XtTD6hJqzL7ux#1"],
                "routingKeys": [],
                "serviceEndpoint": "http://localhost:8080/agency/msg"
            }
        ]
    }
"##;

use serde::{Deserialize, Serialize};

/// Wallet material supplied by the upstream wallet generator.
///
/// `address` is the raw form `<workchain>:<64 hex chars>`, `public_key` a
/// 32-byte and `secret_key` a 64-byte hex string. Extra fields in the source
/// document (mnemonics, boc, creation date) are ignored.
#[derive(Clone, Deserialize)]
pub struct Wallet {
    pub address: String,
    pub public_key: String,
    pub secret_key: String,
}

/// ```json
/// {
///   "name": "ton_proof",
///   "proof": {
///     "timestamp": 1700000000, // unix epoch seconds
///     "domain": {
///       "lengthBytes": 19,
///       "value": "telegram.blum.codes"
///     },
///     "signature": "XI2mI5wURYKpvJsfvUzsTpL38gMcx0ob1FjwbMlBSQ70J/TzQhobiBpka/H16RSLKLQNvBpWGykol4+b8NveCg==",
///     "payload": "1700000000000"
///   }
/// }
/// ```
///
/// Exactly one of `proof` / `error` is set; the constructors keep it that
/// way, and `None` fields never reach the wire.
#[derive(Serialize)]
pub struct TonProofItemReply {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<TonProof>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ConnectItemError>,
}

impl TonProofItemReply {
    pub fn proof(proof: TonProof) -> Self {
        Self {
            name: "ton_proof".to_string(),
            proof: Some(proof),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            name: "ton_proof".to_string(),
            proof: None,
            error: Some(ConnectItemError {
                code: ConnectItemErrorCode::UnknownError,
                message,
            }),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TonProof {
    pub timestamp: u64,
    pub domain: TonDomain,
    pub signature: String,
    pub payload: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TonDomain {
    #[serde(rename = "lengthBytes")]
    pub length_bytes: u32,
    pub value: String,
}

#[derive(Serialize)]
pub struct ConnectItemError {
    pub code: ConnectItemErrorCode,
    pub message: String,
}

#[derive(Serialize)]
pub enum ConnectItemErrorCode {
    #[serde(rename = "UNKNOWN_ERROR")]
    UnknownError,
}

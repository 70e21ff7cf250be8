use crate::{
    codec::{encode_i32_be, encode_i64_le, encode_u32_le, extract_domain, hex_to_bytes},
    dto::{TonDomain, TonProof, TonProofItemReply, Wallet},
    error::{anyhow, ProofError},
};
use base64::prelude::*;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

const TON_PROOF_PREFIX: &str = "ton-proof-item-v2/";
const TON_CONNECT_PREFIX: &str = "ton-connect";

/// Raw-form wallet address: `<workchain>:<64 hex chars>`.
pub struct TonAddress {
    pub workchain: i32,
    pub hash_part: [u8; 32],
}

impl TonAddress {
    pub fn from_raw_str(address: &str) -> Result<Self, ProofError> {
        let (workchain_str, hash_hex) = match address.split(':').collect::<Vec<_>>()[..] {
            [w, h] => (w, h),
            _ => {
                return Err(ProofError::InvalidWalletAddress(anyhow!(
                    "expected <workchain>:<hash>, got {:?}",
                    address
                )))
            }
        };

        let workchain = workchain_str.parse::<i32>().map_err(|e| {
            ProofError::InvalidWalletAddress(anyhow!(
                "invalid workchain {:?}: {}",
                workchain_str,
                e
            ))
        })?;

        let hash_part: [u8; 32] = hex_to_bytes(hash_hex)?.try_into().map_err(|b: Vec<u8>| {
            ProofError::InvalidWalletAddress(anyhow!(
                "address hash must be 32 bytes, got {}",
                b.len()
            ))
        })?;

        Ok(Self {
            workchain,
            hash_part,
        })
    }
}

/// Canonical `ton-proof-item-v2` message: the exact byte sequence both sides
/// of the protocol hash. Field order and the mixed endianness (domain length
/// little-endian, workchain big-endian) are wire contract.
fn proof_message(address: &TonAddress, domain: &str, timestamp: u64, payload: &str) -> Vec<u8> {
    let mut msg: Vec<u8> = Vec::new();
    msg.extend_from_slice(TON_PROOF_PREFIX.as_bytes());
    msg.extend_from_slice(&encode_i32_be(address.workchain));
    msg.extend_from_slice(&address.hash_part);
    msg.extend_from_slice(&encode_u32_le(domain.len() as u32));
    msg.extend_from_slice(domain.as_bytes());
    msg.extend_from_slice(&encode_i64_le(timestamp as i64));
    msg.extend_from_slice(payload.as_bytes());
    msg
}

/// Double hash with domain separation: SHA-256 of the message, then SHA-256
/// of `0xffff || "ton-connect" || first hash`. The signature covers the
/// second digest only.
fn signing_digest(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(msg);
    let msg_hash = hasher.finalize();

    let mut full_msg: Vec<u8> = vec![0xff, 0xff];
    full_msg.extend_from_slice(TON_CONNECT_PREFIX.as_bytes());
    full_msg.extend_from_slice(&msg_hash);

    let mut hasher = Sha256::new();
    hasher.update(full_msg);
    hasher.finalize().into()
}

/// Fallible core of [`build_proof`], keeping the error taxonomy intact.
///
/// `secret_key` is the 64-byte keypair hex (seed followed by public key);
/// `ed25519-dalek` rejects a pair whose halves do not match.
pub fn try_build_proof(
    manifest_url: &str,
    wallet_address: &str,
    secret_key: &str,
    payload: &str,
    now_seconds: u64,
) -> Result<TonProof, ProofError> {
    let domain = extract_domain(manifest_url)?;
    let address = TonAddress::from_raw_str(wallet_address)?;

    let key_bytes: [u8; 64] = hex_to_bytes(secret_key)?.try_into().map_err(|b: Vec<u8>| {
        ProofError::SigningFailure(anyhow!("secret key must be 64 bytes, got {}", b.len()))
    })?;
    let signing_key = SigningKey::from_keypair_bytes(&key_bytes)
        .map_err(|e| ProofError::SigningFailure(e.into()))?;

    let msg = proof_message(&address, &domain, now_seconds, payload);
    let signature = signing_key.sign(&signing_digest(&msg));

    Ok(TonProof {
        timestamp: now_seconds,
        domain: TonDomain {
            length_bytes: domain.len() as u32,
            value: domain,
        },
        signature: BASE64_STANDARD.encode(signature.to_bytes()),
        payload: payload.to_string(),
    })
}

/// Builds the `ton_proof` connect item for a wallet.
///
/// Always returns a well-formed reply: any construction failure is folded
/// into the `UNKNOWN_ERROR` wire variant with the cause in its message.
/// Failures are deterministic given the inputs; nothing is retried here.
pub fn build_proof(
    manifest_url: &str,
    wallet_address: &str,
    secret_key: &str,
    payload: &str,
    now_seconds: u64,
) -> TonProofItemReply {
    match try_build_proof(manifest_url, wallet_address, secret_key, payload, now_seconds) {
        Ok(proof) => TonProofItemReply::proof(proof),
        Err(e) => {
            tracing::warn!("ton_proof construction failed: {}", e);
            TonProofItemReply::error(e.to_string())
        }
    }
}

/// Builds a proof for `wallet` against the current system clock, using the
/// unix-millisecond count as the freshness payload.
pub fn generate_ton_proof(manifest_url: &str, wallet: &Wallet) -> TonProofItemReply {
    let now = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!("ton_proof construction failed: {}", e);
            return TonProofItemReply::error(format!("system clock before unix epoch: {}", e));
        }
    };

    build_proof(
        manifest_url,
        &wallet.address,
        &wallet.secret_key,
        &now.as_millis().to_string(),
        now.as_secs(),
    )
}

/// Checks a received proof against the wallet's 32-byte hex public key by
/// reconstructing the signed digest from the proof's own fields.
///
/// Deliberately clock-free: payload freshness and timestamp expiry are the
/// remote verifier's policy, not part of the signature check.
pub fn verify_proof(
    wallet_address: &str,
    public_key: &str,
    proof: &TonProof,
) -> Result<(), ProofError> {
    if proof.domain.length_bytes as usize != proof.domain.value.len() {
        return Err(ProofError::InvalidManifestUrl(anyhow!(
            "domain length mismatched against provided lengthBytes of {}",
            proof.domain.length_bytes
        )));
    }

    let address = TonAddress::from_raw_str(wallet_address)?;
    let msg = proof_message(&address, &proof.domain.value, proof.timestamp, &proof.payload);
    let digest = signing_digest(&msg);

    let pubkey_bytes: [u8; 32] = hex_to_bytes(public_key)?.try_into().map_err(|b: Vec<u8>| {
        ProofError::SigningFailure(anyhow!("public key must be 32 bytes, got {}", b.len()))
    })?;
    let pubkey = VerifyingKey::from_bytes(&pubkey_bytes)
        .map_err(|e| ProofError::SigningFailure(e.into()))?;

    let signature_bytes: [u8; 64] = BASE64_STANDARD
        .decode(&proof.signature)
        .map_err(|e| ProofError::SigningFailure(e.into()))?
        .try_into()
        .map_err(|_| ProofError::SigningFailure(anyhow!("expected 64 byte long signature")))?;
    let signature = Signature::from_bytes(&signature_bytes);

    pubkey
        .verify(&digest, &signature)
        .map_err(|e| ProofError::SigningFailure(e.into()))
}

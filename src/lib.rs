//! Domain-bound ownership proofs for TON wallets.
//!
//! Builds the TON Connect `ton-proof-item-v2` item a wallet presents to
//! prove control of its signing key to a remote verifier, without ever
//! transmitting the key: the canonical message binds the wallet address,
//! the manifest's hostname, a timestamp and a caller-supplied payload, and
//! is double-hashed with fixed domain-separation prefixes before the
//! Ed25519 detached signature is produced.
//!
//! The whole crate is synchronous, stateless and free of I/O; every
//! function is safe to call from any number of threads at once.

pub mod codec;
pub mod dto;
pub mod error;
pub mod proof;

pub use dto::{TonDomain, TonProof, TonProofItemReply, Wallet};
pub use error::ProofError;
pub use proof::{build_proof, generate_ton_proof, try_build_proof, verify_proof, TonAddress};

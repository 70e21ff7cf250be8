use crate::error::{anyhow, ProofError};
use url::Url;

/// Decodes an even-length lowercase/uppercase hex string into raw bytes.
///
/// Odd length or a non-hex digit is a hard error, never a truncated parse.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, ProofError> {
    hex::decode(hex_str).map_err(|e| ProofError::InvalidHexEncoding(e.into()))
}

/// Inverse of [`hex_to_bytes`]: lowercase, no separators, `2 * len` chars.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Returns the hostname of an absolute URL, with scheme, port and path
/// stripped.
pub fn extract_domain(manifest_url: &str) -> Result<String, ProofError> {
    let parsed = Url::parse(manifest_url).map_err(|e| ProofError::InvalidManifestUrl(e.into()))?;
    match parsed.host_str() {
        Some(host) => Ok(host.to_string()),
        None => Err(ProofError::InvalidManifestUrl(anyhow!(
            "no host in url {}",
            manifest_url
        ))),
    }
}

/// Two's-complement little-endian, used for the proof timestamp.
pub fn encode_i64_le(n: i64) -> [u8; 8] {
    n.to_le_bytes()
}

/// Little-endian, used for the domain byte length.
///
/// Note the asymmetry with [`encode_i32_be`]: the wire format really does
/// mix endiannesses between the domain length and the workchain.
pub fn encode_u32_le(n: u32) -> [u8; 4] {
    n.to_le_bytes()
}

/// Big-endian, used for the address workchain.
pub fn encode_i32_be(n: i32) -> [u8; 4] {
    n.to_be_bytes()
}

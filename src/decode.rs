//! Pure decoders that turn blob bytes into typed structure.
//!
//! The wire formats for ledger headers, inner nodes, and field-tagged objects are
//! treated as given by the upstream protocol; this module implements a compact,
//! self-contained encoding for them so the crate is runnable standalone. See
//! DESIGN.md for the exact byte layouts chosen where the source was ambiguous.

use crate::digest::Digest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DecodeError {
    #[error("blob too short: expected at least {expected} bytes, found {found}")]
    TooShort { expected: usize, found: usize },
    #[error("malformed field table: {0}")]
    MalformedFields(String),
}

fn require(bytes: &[u8], expected: usize) -> Result<(), DecodeError> {
    if bytes.len() < expected {
        return Err(DecodeError::TooShort {
            expected,
            found: bytes.len(),
        });
    }
    Ok(())
}

/// Strips the 4-byte hash-prefix tag all node blobs begin with.
pub fn strip_prefix(blob: &[u8]) -> Result<&[u8], DecodeError> {
    require(blob, 4)?;
    Ok(&blob[4..])
}

/// A decoded ledger header. Fields beyond the four the core cares about are
/// not modeled; they are not part of the navigable namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerHeader {
    pub sequence: u32,
    pub parent_hash: Digest,
    pub tx_root: Digest,
    pub state_root: Digest,
}

const LEDGER_HEADER_BODY_LEN: usize = 4 + 32 * 3;

/// Decodes a ledger-header blob body (prefix already stripped).
pub fn decode_ledger_header(body: &[u8]) -> Result<LedgerHeader, DecodeError> {
    require(body, LEDGER_HEADER_BODY_LEN)?;
    let sequence = u32::from_be_bytes(body[0..4].try_into().unwrap());
    let parent_hash = Digest::new(body[4..36].try_into().unwrap());
    let tx_root = Digest::new(body[36..68].try_into().unwrap());
    let state_root = Digest::new(body[68..100].try_into().unwrap());
    Ok(LedgerHeader {
        sequence,
        parent_hash,
        tx_root,
        state_root,
    })
}

/// The 16 children of an inner trie node, in branch order. A null child is
/// all-zero.
pub type InnerChildren = [Digest; 16];

const INNER_NODE_BODY_LEN: usize = 32 * 16;

/// Decodes an inner-node blob body (prefix already stripped) into its 16
/// fixed-order child digests.
pub fn decode_inner_children(body: &[u8]) -> Result<InnerChildren, DecodeError> {
    require(body, INNER_NODE_BODY_LEN)?;
    let mut children = [Digest::ZERO; 16];
    for (i, chunk) in body.chunks_exact(32).take(16).enumerate() {
        children[i] = Digest::new(chunk.try_into().unwrap());
    }
    Ok(children)
}

/// Splits a leaf or transaction-with-metadata payload (prefix already stripped)
/// into its object body and trailing 32-byte trie-key suffix.
pub fn split_key_suffix(payload: &[u8]) -> Result<(&[u8], Digest), DecodeError> {
    require(payload, 32)?;
    let split_at = payload.len() - 32;
    let body = &payload[..split_at];
    let key = Digest::new(payload[split_at..].try_into().unwrap());
    Ok((body, key))
}

/// A single named field of a decoded object: an account, other ledger entry, or
/// transaction-with-metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub type_name: String,
    pub text: String,
    pub is_default: bool,
}

/// Decodes the field table making up an object body: a flat sequence of
/// length-prefixed `(name, type, is_default, text)` tuples.
pub fn decode_fields(mut body: &[u8]) -> Result<Vec<Field>, DecodeError> {
    let mut fields = Vec::new();
    while !body.is_empty() {
        let name_len = *body
            .first()
            .ok_or_else(|| DecodeError::MalformedFields("missing name length".into()))?
            as usize;
        body = &body[1..];
        require(body, name_len)?;
        let name = String::from_utf8_lossy(&body[..name_len]).into_owned();
        body = &body[name_len..];

        let type_len = *body
            .first()
            .ok_or_else(|| DecodeError::MalformedFields("missing type length".into()))?
            as usize;
        body = &body[1..];
        require(body, type_len)?;
        let type_name = String::from_utf8_lossy(&body[..type_len]).into_owned();
        body = &body[type_len..];

        let is_default = *body
            .first()
            .ok_or_else(|| DecodeError::MalformedFields("missing is_default flag".into()))?
            != 0;
        body = &body[1..];

        require(body, 2)?;
        let text_len = u16::from_be_bytes([body[0], body[1]]) as usize;
        body = &body[2..];
        require(body, text_len)?;
        let text = String::from_utf8_lossy(&body[..text_len]).into_owned();
        body = &body[text_len..];

        fields.push(Field {
            name,
            type_name,
            text,
            is_default,
        });
    }
    Ok(fields)
}

/// Encodes a single field in the layout `decode_fields` expects. Used by tests
/// and by the in-memory fixture builder to construct object bodies.
pub fn encode_field(field: &Field) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(field.name.len() as u8);
    out.extend_from_slice(field.name.as_bytes());
    out.push(field.type_name.len() as u8);
    out.extend_from_slice(field.type_name.as_bytes());
    out.push(field.is_default as u8);
    out.extend_from_slice(&(field.text.len() as u16).to_be_bytes());
    out.extend_from_slice(field.text.as_bytes());
    out
}

pub fn encode_fields(fields: &[Field]) -> Vec<u8> {
    fields.iter().flat_map(encode_field).collect()
}

/// A decoded ledger entry: the trie key it lives at plus its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub key: Digest,
    pub fields: Vec<Field>,
}

/// Decodes a leaf-node payload (prefix already stripped) into a `LedgerEntry`.
pub fn decode_leaf(payload: &[u8]) -> Result<LedgerEntry, DecodeError> {
    let (body, key) = split_key_suffix(payload)?;
    let fields = decode_fields(body)?;
    Ok(LedgerEntry { key, fields })
}

/// A decoded transaction-with-metadata object: a transaction body plus its
/// metadata collection, both flattened into one field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxWithMeta {
    pub fields: Vec<Field>,
}

/// Decodes a transaction-with-metadata payload (prefix already stripped). The
/// wrapping node's own digest is this object's identity, so (unlike leaves) the
/// key suffix is discarded rather than exposed as a pseudo-child.
pub fn decode_tx_with_meta(payload: &[u8]) -> Result<TxWithMeta, DecodeError> {
    let (body, _key) = split_key_suffix(payload)?;
    let fields = decode_fields(body)?;
    Ok(TxWithMeta { fields })
}

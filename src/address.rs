//! Base58 account-identifier parsing and the account keylet (trie key) derivation.

use blake2::{
    digest::{Update, VariableOutput},
    Blake2bVar,
};
use sha2::{Digest as Sha2Digest, Sha256};

use crate::digest::Digest;

/// The ripple alphabet orders the base58 digits differently from the bitcoin
/// alphabet used elsewhere in the ecosystem.
const RIPPLE_ALPHABET: &bs58::Alphabet = bs58::Alphabet::RIPPLE;

/// XRPL account IDs are 160-bit (20 byte) hashes, version-prefixed and
/// checksummed the way bitcoin addresses are.
const ACCOUNT_ID_LEN: usize = 20;
const ACCOUNT_VERSION_BYTE: u8 = 0x00;

/// Decodes a base58check-encoded account address into its raw 20-byte account ID.
///
/// Returns `None` on any malformed input: wrong alphabet, wrong length, bad
/// checksum, or wrong version byte. The resolver maps all of these uniformly to
/// `DOES_NOT_EXIST`, mirroring a directory listing with no matching entry.
pub fn parse_account_id(address: &str) -> Option<[u8; ACCOUNT_ID_LEN]> {
    let decoded = bs58::decode(address)
        .with_alphabet(RIPPLE_ALPHABET)
        .into_vec()
        .ok()?;
    // version byte + account id + 4 byte checksum
    if decoded.len() != 1 + ACCOUNT_ID_LEN + 4 {
        return None;
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - 4);
    let expected_checksum = &double_sha256(payload)[..4];
    if checksum != expected_checksum {
        return None;
    }
    if payload[0] != ACCOUNT_VERSION_BYTE {
        return None;
    }
    let mut account_id = [0u8; ACCOUNT_ID_LEN];
    account_id.copy_from_slice(&payload[1..]);
    Some(account_id)
}

fn double_sha256(data: &[u8]) -> [u8; 32] {
    let once = Sha256::digest(data);
    Sha256::digest(once).into()
}

/// The namespace byte prepended to an account ID before hashing into a trie key,
/// distinguishing account keylets from other ledger-entry keylets.
const ACCOUNT_KEYLET_SPACE: u8 = b'a';

/// Computes the trie key (keylet) at which an account's ledger entry is stored.
pub fn account_keylet(account_id: &[u8; ACCOUNT_ID_LEN]) -> Digest {
    let mut hasher = Blake2bVar::new(Digest::LENGTH).expect("valid blake2b output length");
    hasher.update(&[ACCOUNT_KEYLET_SPACE]);
    hasher.update(account_id);
    let mut out = [0u8; Digest::LENGTH];
    hasher.finalize_variable(&mut out).expect("output buffer is exactly Digest::LENGTH");
    Digest::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_account_id(account_id: &[u8; ACCOUNT_ID_LEN]) -> String {
        let mut payload = vec![ACCOUNT_VERSION_BYTE];
        payload.extend_from_slice(account_id);
        let checksum = double_sha256(&payload);
        payload.extend_from_slice(&checksum[..4]);
        bs58::encode(payload).with_alphabet(RIPPLE_ALPHABET).into_string()
    }

    #[test]
    fn round_trips_account_id() {
        let account_id = [7u8; ACCOUNT_ID_LEN];
        let address = encode_account_id(&account_id);
        assert_eq!(parse_account_id(&address), Some(account_id));
    }

    #[test]
    fn rejects_bad_checksum() {
        let account_id = [7u8; ACCOUNT_ID_LEN];
        let mut address = encode_account_id(&account_id);
        address.push('r');
        assert_eq!(parse_account_id(&address), None);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_account_id("not an address"), None);
    }

    #[test]
    fn keylet_is_deterministic() {
        let a = account_keylet(&[1u8; ACCOUNT_ID_LEN]);
        let b = account_keylet(&[1u8; ACCOUNT_ID_LEN]);
        let c = account_keylet(&[2u8; ACCOUNT_ID_LEN]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

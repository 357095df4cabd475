//! A virtual filesystem over the content-addressed object store of an
//! XRP-Ledger-compatible node: ledgers, their Merkle tries, accounts, ledger
//! entries, and individual serialized fields, navigated with familiar path
//! operations.
//!
//! [`resolve`] is the sole entry point. It walks a path component-by-component,
//! fetching blobs from a [`blob::BlobStore`] on demand, and performs one of
//! three terminal actions: change directory, list children, or stream contents.

pub mod address;
pub mod blob;
pub mod context;
pub mod decode;
pub mod digest;
pub mod error;
pub mod handlers;
pub mod os;
pub mod prefix;
mod resolve;

pub use context::Action;
pub use error::{ErrorKind, ResolveError};
pub use resolve::resolve;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::{Blob, BlobStore, MemoryBlobStore};
    use crate::decode::{encode_fields, Field};
    use crate::digest::Digest;
    use crate::os::OperatingSystem;
    use std::sync::Arc;

    /// A minimal in-process `OperatingSystem` for exercising `resolve` end to end.
    struct TestOs {
        cwd: String,
        env: std::collections::HashMap<String, String>,
        hostname: String,
        db: MemoryBlobStore,
        output: Vec<String>,
    }

    impl TestOs {
        fn new(db: MemoryBlobStore) -> Self {
            TestOs {
                cwd: "/".to_string(),
                env: Default::default(),
                hostname: "localhost".to_string(),
                db,
                output: Vec::new(),
            }
        }
    }

    impl OperatingSystem for TestOs {
        fn cwd(&self) -> String {
            self.cwd.clone()
        }
        fn chdir(&mut self, path: &str) {
            self.cwd = path.to_string();
        }
        fn getenv(&self, key: &str) -> Option<String> {
            self.env.get(key).cloned()
        }
        fn setenv(&mut self, key: &str, value: &str) {
            self.env.insert(key.to_string(), value.to_string());
        }
        fn unsetenv(&mut self, key: &str) {
            self.env.remove(key);
        }
        fn gethostname(&self) -> String {
            self.hostname.clone()
        }
        fn sethostname(&mut self, hostname: &str) {
            self.hostname = hostname.to_string();
        }
        fn db(&self) -> Arc<dyn BlobStore> {
            Arc::new(self.db.clone())
        }
        fn write_line(&mut self, line: &str) {
            self.output.push(line.to_string());
        }
    }

    fn ledger_header_blob(seq: u32, parent: Digest, tx_root: Digest, state_root: Digest) -> Blob {
        let mut bytes = crate::prefix::LEDGER_HEADER_TAG.to_be_bytes().to_vec();
        bytes.extend_from_slice(&seq.to_be_bytes());
        bytes.extend_from_slice(parent.as_bytes());
        bytes.extend_from_slice(tx_root.as_bytes());
        bytes.extend_from_slice(state_root.as_bytes());
        Blob::from(bytes)
    }

    fn inner_node_blob(children: &[(usize, Digest)]) -> Blob {
        let mut bytes = crate::prefix::INNER_NODE_TAG.to_be_bytes().to_vec();
        let mut slots = [Digest::ZERO; 16];
        for &(i, d) in children {
            slots[i] = d;
        }
        for slot in slots {
            bytes.extend_from_slice(slot.as_bytes());
        }
        Blob::from(bytes)
    }

    fn leaf_node_blob(key: Digest, fields: &[Field]) -> Blob {
        let mut bytes = crate::prefix::LEAF_NODE_TAG.to_be_bytes().to_vec();
        bytes.extend_from_slice(&encode_fields(fields));
        bytes.extend_from_slice(key.as_bytes());
        Blob::from(bytes)
    }

    #[test]
    fn root_listing_shows_nodes() {
        let db = MemoryBlobStore::new();
        let mut os = TestOs::new(db);
        resolve(&mut os, "/", Action::Ls).unwrap();
        assert_eq!(os.output, vec!["nodes".to_string()]);
    }

    #[test]
    fn nodes_listing_shows_placeholder() {
        let db = MemoryBlobStore::new();
        let mut os = TestOs::new(db);
        resolve(&mut os, "/nodes", Action::Ls).unwrap();
        assert_eq!(os.output, vec!["<node ID>".to_string()]);
    }

    #[test]
    fn ledger_header_listing_and_sequence_cat() {
        let db = MemoryBlobStore::new();
        let parent = Digest::new([0x11; 32]);
        let tx_root = Digest::new([0x22; 32]);
        let state_root = Digest::new([0x33; 32]);
        let header_digest = Digest::new([0xAA; 32]);
        db.insert(header_digest, ledger_header_blob(42, parent, tx_root, state_root));

        let mut os = TestOs::new(db);
        let path = format!("/nodes/{}", header_digest.to_hex_lower());
        resolve(&mut os, &path, Action::Ls).unwrap();
        assert_eq!(
            os.output,
            vec![
                "sequence".to_string(),
                format!("parent -> /nodes/{}", parent.to_hex_lower()),
                format!("txns -> /nodes/{}", tx_root.to_hex_lower()),
                format!("state -> /nodes/{}", state_root.to_hex_lower()),
            ]
        );

        os.output.clear();
        let seq_path = format!("{path}/sequence");
        resolve(&mut os, &seq_path, Action::Cat).unwrap();
        assert_eq!(os.output, vec!["42".to_string()]);
    }

    #[test]
    fn missing_node_is_node_missing() {
        let db = MemoryBlobStore::new();
        let mut os = TestOs::new(db);
        let digest = Digest::new([0xFF; 32]);
        let path = format!("/nodes/{}", digest.to_hex_lower());
        let err = resolve(&mut os, &path, Action::Ls).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NodeMissing);
        assert_eq!(err.path(), path);
    }

    #[test]
    fn inner_node_lists_nonzero_branches_in_order() {
        let db = MemoryBlobStore::new();
        let leaf_digest = Digest::new([0x77; 32]);
        db.insert(leaf_digest, leaf_node_blob(Digest::new([0x01; 32]), &[]));
        let inner_digest = Digest::new([0x66; 32]);
        db.insert(
            inner_digest,
            inner_node_blob(&[(0, leaf_digest), (3, leaf_digest), (15, leaf_digest)]),
        );

        let mut os = TestOs::new(db);
        let path = format!("/nodes/{}", inner_digest.to_hex_lower());
        resolve(&mut os, &path, Action::Ls).unwrap();
        assert_eq!(os.output, vec!["0", "3", "F"]);

        os.output.clear();
        resolve(&mut os, &format!("{path}/g"), Action::Ls).unwrap_err();

        resolve(&mut os, &format!("{path}/3"), Action::Cd).unwrap();
        assert_eq!(os.cwd, format!("{path}/3"));
    }

    #[test]
    fn short_hex_is_not_a_digest() {
        let db = MemoryBlobStore::new();
        let mut os = TestOs::new(db);
        let err = resolve(&mut os, "/nodes/DEADBEEF", Action::Ls).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotADigest);
        assert_eq!(err.path(), "/nodes/DEADBEEF");
    }

    #[test]
    fn leaf_listing_always_includes_key_and_hides_default_empty_fields() {
        let db = MemoryBlobStore::new();
        let key = Digest::new([0x09; 32]);
        let fields = vec![
            Field {
                name: "Balance".into(),
                type_name: "Amount".into(),
                text: "1000".into(),
                is_default: false,
            },
            Field {
                name: "Flags".into(),
                type_name: "UInt32".into(),
                text: String::new(),
                is_default: true,
            },
        ];
        let leaf_digest = Digest::new([0x44; 32]);
        db.insert(leaf_digest, leaf_node_blob(key, &fields));

        let mut os = TestOs::new(db);
        let path = format!("/nodes/{}", leaf_digest.to_hex_lower());
        resolve(&mut os, &path, Action::Ls).unwrap();
        assert_eq!(os.output, vec![".key".to_string(), "Balance".to_string()]);

        os.output.clear();
        resolve(&mut os, &format!("{path}/.key"), Action::Cat).unwrap();
        assert_eq!(os.output, vec![key.to_hex_upper()]);
    }
}

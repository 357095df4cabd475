//! Listing and lookup logic shared between the ledger-entry and
//! transaction-with-metadata handlers, which both enumerate a flat field table.

use crate::decode::Field;

/// A field is omitted from a listing exactly when it is simultaneously default
/// and has an empty textual rendering.
pub fn is_visible(field: &Field) -> bool {
    !(field.is_default && field.text.is_empty())
}

pub fn visible_field_names(fields: &[Field]) -> Vec<String> {
    fields
        .iter()
        .filter(|f| is_visible(f))
        .map(|f| f.name.clone())
        .collect()
}

pub fn find_field<'a>(fields: &'a [Field], name: &str) -> Option<&'a Field> {
    fields.iter().find(|f| f.name == name)
}

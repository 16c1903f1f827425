//! Identifier generation: UUID batches and short link ids.

use rand::Rng;
use uuid::Uuid;

/// Length of a generated short link id.
const SHORT_ID_LENGTH: usize = 6;

/// Alphabet of short link ids (base 36, lowercase).
const SHORT_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates `count` random (version 4) UUIDs in hyphenated lowercase form.
pub fn generate_uuids(count: usize) -> Vec<String> {
    (0..count).map(|_| Uuid::new_v4().to_string()).collect()
}

/// Generates a random 6-character base-36 short link id.
///
/// Ids are not checked for uniqueness against existing links.
///
/// # Examples
///
/// ```ignore
/// let id = generate_short_id();
/// assert_eq!(id.len(), 6);
/// assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_short_id() -> String {
    let mut rng = rand::rng();

    (0..SHORT_ID_LENGTH)
        .map(|_| SHORT_ID_ALPHABET[rng.random_range(0..SHORT_ID_ALPHABET.len())] as char)
        .collect()
}

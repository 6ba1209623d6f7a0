//! Random identifiers for rendered form instances.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const FORM_ID_BYTES: usize = 12;

/// Generates a 16-character URL-safe form instance id.
///
/// # Panics
///
/// Panics if the system random number generator fails.
pub fn generate_form_id() -> String {
    let mut buffer = [0u8; FORM_ID_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Whether `id` could have been produced by [`generate_form_id`].
pub fn is_well_formed(id: &str) -> bool {
    id.len() == 16
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

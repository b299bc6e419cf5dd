//! Short opaque identifiers for keyframes, color stops and history entries

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of characters in a generated identifier
pub const ID_LEN: usize = 7;

/// Generate a random lowercase base-36 identifier
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

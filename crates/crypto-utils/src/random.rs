use rand::{Rng, RngCore};
use rand_core::OsRng;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a fixed-size array of cryptographically secure random bytes.
pub fn random_bytes_fixed<const N: usize>() -> [u8; N] {
    let mut buf = [0u8; N];
    OsRng.fill_bytes(&mut buf);
    buf
}

/// Generates a lowercase base-36 string of `len` characters, used for
/// non-secret identifiers such as wallet ids.
pub fn random_base36(len: usize) -> String {
    (0..len)
        .map(|_| BASE36_ALPHABET[OsRng.gen_range(0..BASE36_ALPHABET.len())] as char)
        .collect()
}

//! Random secret synthesis
//!
//! The fallback path of the value resolver: when the store does not return
//! a secret, a random one is generated locally so the caller's workflow
//! stays unblocked.
//!
//! The character set is lowercase plus uppercase ASCII letters plus digits
//! (62 symbols), extended by either a caller-supplied override or
//! [`crate::DEFAULT_SPECIAL_CHARS`]. Characters are drawn independently and
//! uniformly.
//!
//! This is **not** cryptographic-strength generation. The default entry
//! point uses [`rand::thread_rng`]; callers that need reproducible output
//! (tests) inject their own source via [`generate_secret_with`].

use rand::Rng;

const BASE_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random secret of exactly `length` characters
///
/// `override_special`, when non-empty, replaces the default special-symbol
/// extension of the charset. `length <= 0` yields an empty string.
///
/// # Example
///
/// ```
/// use vault_kv_resolver::generate_secret;
///
/// let secret = generate_secret(12, None);
/// assert_eq!(secret.chars().count(), 12);
///
/// assert_eq!(generate_secret(0, None), "");
/// assert_eq!(generate_secret(-3, None), "");
/// ```
pub fn generate_secret(length: i64, override_special: Option<&str>) -> String {
    generate_secret_with(&mut rand::thread_rng(), length, override_special)
}

/// Generate a random secret from an injected randomness source
///
/// Same policy as [`generate_secret`], with the uniform source supplied by
/// the caller. A seeded source makes the output deterministic.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use vault_kv_resolver::generate_secret_with;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let first = generate_secret_with(&mut rng, 16, None);
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let second = generate_secret_with(&mut rng, 16, None);
///
/// assert_eq!(first, second);
/// ```
pub fn generate_secret_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: i64,
    override_special: Option<&str>,
) -> String {
    if length <= 0 {
        return String::new();
    }

    let charset = build_charset(override_special);
    (0..length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect()
}

/// Combined charset: base 62 symbols plus override-or-default specials
fn build_charset(override_special: Option<&str>) -> Vec<char> {
    let mut charset: Vec<char> = BASE_CHARSET.chars().collect();
    match override_special {
        Some(specials) if !specials.is_empty() => charset.extend(specials.chars()),
        _ => charset.extend(crate::DEFAULT_SPECIAL_CHARS.chars()),
    }
    charset
}

//! Credential generation for new FTP accounts.
//!
//! Produces the random password, salt, and salted SHA-512 hash persisted
//! into the configuration document. Only hash and salt are ever written to
//! disk; the plaintext password lives in memory until announced once and is
//! zeroized on drop.

use rand::Rng;
use rand::rngs::OsRng;
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Characters credentials are drawn from: digits, lowercase, uppercase, and
/// ASCII punctuation, in the canonical printable ordering with its final 6
/// whitespace characters removed. 94 characters total.
pub const CREDENTIAL_ALPHABET: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Salt length in characters.
pub const SALT_LENGTH: usize = 80;

/// Password length in characters.
pub const PASSWORD_LENGTH: usize = 20;

/// A freshly generated credential set for one account.
///
/// The plaintext password is the only secret here: hash and salt are
/// destined for the configuration document, and the username is public.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CredentialSet {
    /// Account name, normalized to uppercase.
    #[zeroize(skip)]
    pub username: String,

    /// Plaintext password. Never persisted.
    pub password: String,

    /// Random salt mixed into the password before hashing.
    #[zeroize(skip)]
    pub salt: String,

    /// Uppercase hex SHA-512 of `password || salt` (128 hex characters).
    #[zeroize(skip)]
    pub hash: String,
}

/// Generate a credential set for `username`.
///
/// Salt and password are drawn independently and uniformly from
/// [`CREDENTIAL_ALPHABET`] using the operating system's CSPRNG. Pure
/// generation; there are no error conditions.
pub fn generate(username: &str) -> CredentialSet {
    let salt = random_string(SALT_LENGTH);
    let password = random_string(PASSWORD_LENGTH);
    let hash = salted_hash(&password, &salt);

    CredentialSet {
        username: username.to_uppercase(),
        password,
        salt,
        hash,
    }
}

/// Uppercase hex SHA-512 of `password || salt`.
///
/// This exact rendering is part of the on-disk contract with the consuming
/// server and must not change.
pub fn salted_hash(password: &str, salt: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode_upper(hasher.finalize())
}

fn random_string(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| CREDENTIAL_ALPHABET[rng.gen_range(0..CREDENTIAL_ALPHABET.len())] as char)
        .collect()
}

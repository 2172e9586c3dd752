use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;

use umbra_dns_application::ports::SecretHasher;

/// One-way hash for secret config fields (Argon2id, PHC string form).
///
/// Only the digest ever reaches the registry or the on-disk document; there
/// is no way back to the plaintext and none is needed by this core.
#[derive(Default)]
pub struct Argon2PasswordHasher;

impl SecretHasher for Argon2PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| e.to_string())
    }
}

/// Opaque one-way function applied to secret fields before they reach the
/// codec. The plaintext is never stored, displayed, or persisted.
pub trait SecretHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, String>;
}

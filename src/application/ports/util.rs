// src/application/ports/util.rs
/// Turns free text into a URL-safe slug. Implementations must be pure and
/// idempotent: `slugify(slugify(s)) == slugify(s)`.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

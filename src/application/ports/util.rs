// src/application/ports/util.rs

/// Derives a URL slug from an article title.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

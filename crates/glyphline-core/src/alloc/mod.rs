//! Optimized hash collections for glyphline.
//!
//! Re-exports the AHash-backed map, used for glyph metric tables where
//! lookups happen once per codepoint.

pub use ahash::AHashMap as HashMap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert('a', 10.0_f32);
        assert_eq!(map.get(&'a'), Some(&10.0));
    }
}

//! NPC template catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use crawl_core::ActorTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for actor templates from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load an actor catalog.
    ///
    /// RON format: `Vec<(String, ActorTemplate)>`, where the string is the
    /// catalog key used by scenario files. `level` and `ai` may be omitted.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid actor catalog {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let catalog: Vec<(String, ActorTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for (key, template) in &catalog {
            if !seen.insert(key.as_str()) {
                anyhow::bail!("duplicate actor id '{}'", key);
            }
            if template.max_hp <= 0 {
                anyhow::bail!("actor '{}' must have positive max_hp, got {}", key, template.max_hp);
            }
        }

        tracing::debug!(count = catalog.len(), "actor catalog loaded");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use crawl_core::AiKind;

    use super::*;

    const CATALOG: &str = r#"[
    ("rat", (name: "rat", glyph: 'r', max_hp: 3, power: 1, ai: Wander)),
    ("orc", (name: "orc", glyph: 'o', max_hp: 12, level: 3, power: 4, ai: Melee)),
    ("statue", (name: "statue", glyph: '&', max_hp: 50, power: 0)),
]"#;

    #[test]
    fn catalog_keeps_file_order_and_defaults() {
        let catalog = ActorLoader::parse(CATALOG).unwrap();

        let keys: Vec<_> = catalog.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["rat", "orc", "statue"]);
        assert_eq!(catalog[0].1.ai, AiKind::Wander);
        assert_eq!(catalog[0].1.level, 1);
        assert_eq!(catalog[1].1.level, 3);
        assert_eq!(catalog[2].1.ai, AiKind::Idle);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = ActorLoader::parse(
            r#"[
    ("rat", (name: "rat", glyph: 'r', max_hp: 3, power: 1)),
    ("rat", (name: "big rat", glyph: 'R', max_hp: 6, power: 2)),
]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate actor id 'rat'"));
    }

    #[test]
    fn non_positive_hp_is_rejected() {
        let err =
            ActorLoader::parse(r#"[("ghost", (name: "ghost", glyph: 'g', max_hp: 0, power: 1))]"#)
                .unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actors.ron");
        std::fs::write(&path, CATALOG).unwrap();

        let catalog = ActorLoader::load(&path).unwrap();
        assert_eq!(catalog.len(), 3);
    }
}

//! Static map loader.
//!
//! Maps are plain text, one row of terrain glyphs per line (`.` floor,
//! `#` wall, `~` water, `^` lava, `_` ice, `"` swamp, space for void).
//! Short rows are padded with void; entity placement lives elsewhere.

use std::path::Path;

use crawl_core::{GridMap, TerrainKind};

use crate::loaders::{LoadResult, read_file};

/// Loader for ASCII grid maps.
pub struct MapLoader;

impl MapLoader {
    pub fn load(path: &Path) -> LoadResult<GridMap> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("Invalid map {}: {}", path.display(), e))
    }

    /// Parses glyph rows. Trailing blank lines are ignored.
    pub fn parse(content: &str) -> LoadResult<GridMap> {
        let lines: Vec<&str> = content.trim_end_matches(['\n', '\r']).lines().collect();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        if width == 0 {
            anyhow::bail!("map has no tiles");
        }

        let mut rows = Vec::with_capacity(lines.len());
        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(width);
            for (x, glyph) in line.chars().enumerate() {
                let terrain = TerrainKind::from_glyph(glyph).ok_or_else(|| {
                    anyhow::anyhow!("unknown terrain glyph {:?} at ({}, {})", glyph, x, y)
                })?;
                row.push(terrain);
            }
            row.resize(width, TerrainKind::Void);
            rows.push(row);
        }

        let height = rows.len();
        let map = GridMap::from_rows(rows)
            .ok_or_else(|| anyhow::anyhow!("map rows have inconsistent widths"))?;
        tracing::debug!(width, height, "map loaded");
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use crawl_core::{MapOracle, Position};

    use super::*;

    #[test]
    fn glyphs_map_to_terrain() {
        let map = MapLoader::parse("#.^\n_\"~\n").unwrap();

        let dims = map.dimensions();
        assert_eq!((dims.width, dims.height), (3, 2));
        let terrain = |x, y| map.tile(Position::new(x, y)).map(|t| t.terrain());
        assert_eq!(terrain(0, 0), Some(TerrainKind::Wall));
        assert_eq!(terrain(1, 0), Some(TerrainKind::Floor));
        assert_eq!(terrain(2, 0), Some(TerrainKind::Lava));
        assert_eq!(terrain(0, 1), Some(TerrainKind::Ice));
        assert_eq!(terrain(1, 1), Some(TerrainKind::Swamp));
        assert_eq!(terrain(2, 1), Some(TerrainKind::Water));
    }

    #[test]
    fn short_rows_are_padded_with_void() {
        let map = MapLoader::parse("...\n.\n").unwrap();

        assert_eq!(
            map.tile(Position::new(2, 1)).map(|t| t.terrain()),
            Some(TerrainKind::Void)
        );
        assert!(!map.tile(Position::new(2, 1)).unwrap().is_passable());
    }

    #[test]
    fn unknown_glyph_reports_its_position() {
        let err = MapLoader::parse("..\n.X\n").unwrap_err();
        assert!(err.to_string().contains("(1, 1)"), "{err}");
    }

    #[test]
    fn empty_map_is_rejected() {
        assert!(MapLoader::parse("\n\n").is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cave.txt");
        std::fs::write(&path, "#####\n#...#\n#####\n").unwrap();

        let map = MapLoader::load(&path).unwrap();
        assert!(map.contains(Position::new(4, 2)));
        assert!(!map.contains(Position::new(5, 2)));
    }
}

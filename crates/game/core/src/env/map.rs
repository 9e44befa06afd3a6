use crate::state::Position;

/// Static map oracle exposing immutable layout information.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;
    fn tile(&self, position: Position) -> Option<StaticTile>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Loot placement check: may an item be dropped on this cell?
    fn allows_items(&self, position: Position) -> bool {
        self.tile(position)
            .is_some_and(|tile| tile.terrain().holds_items())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_passable(self) -> bool {
        self.terrain.is_passable()
    }
}

/// Terrain classes. Hazard terrain is passable and handled by
/// [`super::TerrainEffects`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TerrainKind {
    Floor,
    Wall,
    Void,
    Water,
    Lava,
    Ice,
    Swamp,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(
            self,
            TerrainKind::Floor | TerrainKind::Lava | TerrainKind::Ice | TerrainKind::Swamp
        )
    }

    /// Items sink in lava and slide off impassable cells.
    pub fn holds_items(self) -> bool {
        self.is_passable() && self != TerrainKind::Lava
    }

    /// Canonical ASCII glyph used by map files.
    pub fn glyph(self) -> char {
        match self {
            TerrainKind::Floor => '.',
            TerrainKind::Wall => '#',
            TerrainKind::Void => ' ',
            TerrainKind::Water => '~',
            TerrainKind::Lava => '^',
            TerrainKind::Ice => '_',
            TerrainKind::Swamp => '"',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        [
            TerrainKind::Floor,
            TerrainKind::Wall,
            TerrainKind::Void,
            TerrainKind::Water,
            TerrainKind::Lava,
            TerrainKind::Ice,
            TerrainKind::Swamp,
        ]
        .into_iter()
        .find(|terrain| terrain.glyph() == glyph)
    }
}

/// Dense in-memory map, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    dimensions: MapDimensions,
    tiles: Vec<TerrainKind>,
}

impl GridMap {
    pub fn filled(width: u32, height: u32, terrain: TerrainKind) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            tiles: vec![terrain; (width * height) as usize],
        }
    }

    /// Builds a map from equally long rows. Returns `None` on ragged input.
    pub fn from_rows(rows: Vec<Vec<TerrainKind>>) -> Option<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len()) as u32;
        if rows.iter().any(|row| row.len() as u32 != width) {
            return None;
        }
        Some(Self {
            dimensions: MapDimensions::new(width, height),
            tiles: rows.into_iter().flatten().collect(),
        })
    }

    pub fn set(&mut self, position: Position, terrain: TerrainKind) -> bool {
        match self.index(position) {
            Some(index) => {
                self.tiles[index] = terrain;
                true
            }
            None => false,
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions
            .contains(position)
            .then(|| (position.y as u32 * self.dimensions.width + position.x as u32) as usize)
    }
}

impl MapOracle for GridMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.index(position)
            .map(|index| StaticTile::new(self.tiles[index]))
    }
}

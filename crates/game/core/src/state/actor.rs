use std::collections::BTreeMap;

use super::{Buffs, EntityId, Position};

/// Built-in behaviour tag consumed by [`crate::env::BuiltinAi`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AiKind {
    /// Never acts. Also used for the player, whose actions come from commands.
    #[default]
    Idle,
    /// Closes in on the player and attacks when adjacent.
    Melee,
    /// Takes a random step each turn.
    Wander,
}

/// Blueprint used to populate the arena.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub name: String,
    pub glyph: char,
    pub max_hp: i32,
    #[cfg_attr(feature = "serde", serde(default = "ActorTemplate::default_level"))]
    pub level: u32,
    /// Upper bound of a melee damage roll.
    pub power: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ai: AiKind,
}

impl ActorTemplate {
    pub fn new(name: impl Into<String>, glyph: char, max_hp: i32, power: u32) -> Self {
        Self {
            name: name.into(),
            glyph,
            max_hp,
            level: Self::default_level(),
            power,
            ai: AiKind::Idle,
        }
    }

    pub fn with_ai(mut self, ai: AiKind) -> Self {
        self.ai = ai;
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    const fn default_level() -> u32 {
        1
    }
}

/// Live actor record (player or NPC).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub glyph: char,
    pub position: Position,
    /// May drop below zero between a killing blow and death processing.
    pub hp: i32,
    pub max_hp: i32,
    pub level: u32,
    pub power: u32,
    pub ai: AiKind,
    /// Consecutive completed turns without a position change.
    pub since_move: u32,
    /// Turns since the last natural heal or hit.
    pub regen_counter: u32,
    pub bloody: bool,
    pub buffs: Buffs,
}

impl ActorState {
    pub fn from_template(id: EntityId, template: &ActorTemplate, position: Position) -> Self {
        Self {
            id,
            name: template.name.clone(),
            glyph: template.glyph,
            position,
            hp: template.max_hp,
            max_hp: template.max_hp,
            level: template.level,
            power: template.power,
            ai: template.ai,
            since_move: 0,
            regen_counter: 0,
            bloody: false,
            buffs: Buffs::new(),
        }
    }

    /// The player is always the actor holding [`EntityId::PLAYER`].
    #[inline]
    pub fn is_player(&self) -> bool {
        self.id.is_player()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Arena of actors keyed by stable id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    actors: BTreeMap<EntityId, ActorState>,
}

impl EntitiesState {
    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.get_mut(&id)
    }

    pub fn player(&self) -> Option<&ActorState> {
        self.actor(EntityId::PLAYER)
    }

    /// Actor that resolves and still has positive hp.
    pub fn living(&self, id: EntityId) -> Option<&ActorState> {
        self.actor(id).filter(|actor| actor.is_alive())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.actors.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.values()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub(crate) fn insert(&mut self, actor: ActorState) {
        self.actors.insert(actor.id, actor);
    }

    pub(crate) fn remove(&mut self, id: EntityId) -> Option<ActorState> {
        self.actors.remove(&id)
    }
}

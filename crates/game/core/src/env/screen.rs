/// What the player sees on the terminal screen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOverSummary {
    /// Global turn on which the player died.
    pub turn: u64,
    pub killed_by: Option<String>,
    pub strength: u32,
}

/// Screens the simulation can ask the UI to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    GameOver(GameOverSummary),
}

/// UI screen stack owned by the presentation layer.
pub trait ScreenStack {
    fn push(&mut self, screen: Screen);
}

impl ScreenStack for Vec<Screen> {
    fn push(&mut self, screen: Screen) {
        Vec::push(self, screen);
    }
}

//! Plate counter state

pub const INITIAL_PLATES: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatesState {
    pub plates: u32,
}

impl Default for PlatesState {
    fn default() -> Self {
        Self {
            plates: INITIAL_PLATES,
        }
    }
}

//! Plate counter actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatesAction {
    /// Take one plate off the stack
    ReducePlates,
}

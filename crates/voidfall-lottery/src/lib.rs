//! Weapon lottery: weighted rarity draws, the pity guarantee, and
//! deterministic AI card selection.
//!
//! Pure logic over plain data — no ECS or engine dependency. The engine
//! owns the pity counter and per-player reroll budgets; this crate only
//! computes draws and picks.

pub mod draw;
pub mod select;

pub use draw::{draw, DrawResult, LotteryConfig};
pub use select::ai_select;

#[cfg(test)]
mod tests;

//! Deterministic AI card selection.

use voidfall_core::state::Card;

/// Pick the best card: rarity rank first, declared damage breaks ties,
/// the earliest slot wins remaining ties. No randomness — identical input
/// cards always produce the same pick.
pub fn ai_select(cards: &[Card]) -> usize {
    let mut best = 0;
    for (i, card) in cards.iter().enumerate().skip(1) {
        let current = &cards[best];
        let better = card.rarity > current.rarity
            || (card.rarity == current.rarity && card.damage_display > current.damage_display);
        if better {
            best = i;
        }
    }
    best
}

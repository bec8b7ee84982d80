//! Weighted card draws and the pity adjustment.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidfall_core::constants::{LOTTERY_CARD_COUNT, PITY_THRESHOLD, RARITY_WEIGHTS};
use voidfall_core::enums::Rarity;
use voidfall_core::state::Card;
use voidfall_core::weapons::{rarity_pool, WeaponId};

/// Draw policy. Duplicates-across-slots is a policy knob at this boundary,
/// not an engine invariant.
#[derive(Debug, Clone)]
pub struct LotteryConfig {
    /// Cards offered per draw (3 or 5).
    pub card_count: usize,
    /// Weight per rarity tier, indexed in `Rarity::ALL` order.
    pub weights: [u32; 5],
    /// Draws without a rare-or-better card before one is forced.
    pub pity_threshold: u32,
    /// Whether the same weapon may appear in more than one slot.
    pub allow_duplicates: bool,
    /// When true, tiers above the unlock level for the current round get
    /// zero probability mass (renormalized over the rest).
    pub progressive_unlock: bool,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            card_count: LOTTERY_CARD_COUNT,
            weights: RARITY_WEIGHTS,
            pity_threshold: PITY_THRESHOLD,
            allow_duplicates: true,
            progressive_unlock: false,
        }
    }
}

/// Result of one pity-adjusted draw.
#[derive(Debug, Clone)]
pub struct DrawResult {
    pub cards: Vec<Card>,
    /// Counter value after this draw (reset or incremented).
    pub pity_after: u32,
    /// Index of the slot upgraded by the pity rule, if any.
    pub pity_upgraded_slot: Option<usize>,
}

/// Perform one draw.
///
/// Pity ordering: the threshold is checked against the counter value
/// entering the draw. If `pity >= threshold` and no drawn card is
/// rare-or-above, the single lowest-rarity card is replaced by a fresh
/// rare draw. Afterwards the counter resets to 0 if any card is
/// rare-or-above, else increments by 1.
pub fn draw(config: &LotteryConfig, pity: u32, round: u32, rng: &mut ChaCha8Rng) -> DrawResult {
    let weights = effective_weights(config, round);

    let mut cards = Vec::with_capacity(config.card_count);
    for _ in 0..config.card_count {
        let rarity = roll_rarity(&weights, rng);
        cards.push(make_card(pick_weapon(rarity, &cards, config, rng)));
    }

    let mut pity_upgraded_slot = None;
    if pity >= config.pity_threshold && !cards.iter().any(|c| c.rarity.is_rare_or_better()) {
        let slot = lowest_rarity_slot(&cards);
        cards[slot] = make_card(pick_weapon(Rarity::Rare, &cards, config, rng));
        pity_upgraded_slot = Some(slot);
    }

    let pity_after = if cards.iter().any(|c| c.rarity.is_rare_or_better()) {
        0
    } else {
        pity + 1
    };

    DrawResult {
        cards,
        pity_after,
        pity_upgraded_slot,
    }
}

/// Highest rarity tier available at the given round under progressive
/// unlock: one new tier every two rounds, starting from Uncommon at round 1.
fn unlocked_tiers(round: u32) -> usize {
    ((round as usize + 3) / 2).clamp(2, Rarity::ALL.len())
}

fn effective_weights(config: &LotteryConfig, round: u32) -> [u32; 5] {
    let mut weights = config.weights;
    if config.progressive_unlock {
        for w in weights.iter_mut().skip(unlocked_tiers(round)) {
            *w = 0;
        }
    }
    weights
}

/// One weighted roll over the rarity table.
fn roll_rarity(weights: &[u32; 5], rng: &mut ChaCha8Rng) -> Rarity {
    let total: u32 = weights.iter().sum();
    debug_assert!(total > 0, "all rarity weights zeroed out");
    let mut roll = rng.gen_range(0..total);
    for (i, &w) in weights.iter().enumerate() {
        if roll < w {
            return Rarity::ALL[i];
        }
        roll -= w;
    }
    Rarity::Common
}

/// Uniform pick from the rarity's pool, honoring the duplicate policy.
/// Falls back to allowing a duplicate when the pool is smaller than the
/// number of slots already filled from it.
fn pick_weapon(
    rarity: Rarity,
    taken: &[Card],
    config: &LotteryConfig,
    rng: &mut ChaCha8Rng,
) -> WeaponId {
    let pool = rarity_pool(rarity);
    if !config.allow_duplicates {
        let available: Vec<WeaponId> = pool
            .iter()
            .copied()
            .filter(|id| !taken.iter().any(|c| c.weapon == *id))
            .collect();
        if !available.is_empty() {
            return available[rng.gen_range(0..available.len())];
        }
    }
    pool[rng.gen_range(0..pool.len())]
}

fn make_card(weapon: WeaponId) -> Card {
    let spec = weapon.spec();
    Card {
        weapon,
        rarity: spec.rarity,
        damage_display: spec.damage.round() as u32,
    }
}

fn lowest_rarity_slot(cards: &[Card]) -> usize {
    let mut best = 0;
    for (i, card) in cards.iter().enumerate() {
        if card.rarity < cards[best].rarity {
            best = i;
        }
    }
    best
}

//! Spawning of obstacles and coins.
//!
//! Each frame rolls two independent dice: one for a new obstacle, one for a
//! new coin.  What gets spawned is picked from an explicit weighted table.

use std::sync::OnceLock;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Coin, Obstacle, ObstacleKind};

/// Coins spawn just above the top edge, regardless of their size.
const COIN_SPAWN_Y: f32 = -30.0;
/// Horizontal spawn range for coins is `[0, width - COIN_SPAWN_MARGIN)`.
const COIN_SPAWN_MARGIN: f32 = 30.0;

// ── Weighted choice ───────────────────────────────────────────────────────────

/// A list of outcomes with relative weights.
#[derive(Clone, Debug)]
pub struct WeightedTable<T> {
    items: Vec<T>,
    index: WeightedIndex<u32>,
}

impl<T: Clone> WeightedTable<T> {
    /// Panics if `entries` is empty or every weight is zero; tables are
    /// built from constants, so that is a programming error.
    pub fn new(entries: &[(T, u32)]) -> Self {
        let items = entries.iter().map(|(item, _)| item.clone()).collect();
        let index = WeightedIndex::new(entries.iter().map(|(_, w)| *w))
            .expect("weighted table needs at least one non-zero weight");
        WeightedTable { items, index }
    }

    pub fn pick(&self, rng: &mut impl Rng) -> T {
        self.items[self.index.sample(rng)].clone()
    }
}

/// 80% straight fallers, 20% swirlers.
pub fn obstacle_kinds() -> &'static WeightedTable<ObstacleKind> {
    static TABLE: OnceLock<WeightedTable<ObstacleKind>> = OnceLock::new();
    TABLE.get_or_init(|| {
        WeightedTable::new(&[(ObstacleKind::Straight, 80), (ObstacleKind::Swirling, 20)])
    })
}

/// Mostly 1-coin pickups; 10 and 50 are rare (5% each).
pub fn coin_values() -> &'static WeightedTable<u32> {
    static TABLE: OnceLock<WeightedTable<u32>> = OnceLock::new();
    TABLE.get_or_init(|| WeightedTable::new(&[(1, 90), (10, 5), (50, 5)]))
}

// ── Spawners ──────────────────────────────────────────────────────────────────

fn random_x(rng: &mut impl Rng, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}

/// Roll for a new obstacle this frame.  `level` speeds up new spawns.
pub fn maybe_spawn_obstacle(
    rng: &mut impl Rng,
    config: &GameConfig,
    kinds: &WeightedTable<ObstacleKind>,
    current: usize,
    width: f32,
    level: u32,
) -> Option<Obstacle> {
    if !rng.gen_bool(config.obstacle_spawn_chance) || current >= config.max_obstacles {
        return None;
    }
    let size = config.obstacle_size;
    let spread = if config.obstacle_speed_spread > 0.0 {
        rng.gen_range(0.0..config.obstacle_speed_spread)
    } else {
        0.0
    };
    let bonus = config.level_speed_bonus * level.saturating_sub(1) as f32;
    Some(Obstacle {
        x: random_x(rng, width - size),
        y: -size,
        width: size,
        height: size,
        speed: config.obstacle_min_speed + spread + bonus,
        kind: kinds.pick(rng),
        phase: 0.0,
    })
}

/// Roll for a new coin this frame.
pub fn maybe_spawn_coin(
    rng: &mut impl Rng,
    config: &GameConfig,
    values: &WeightedTable<u32>,
    current: usize,
    width: f32,
) -> Option<Coin> {
    if !rng.gen_bool(config.coin_spawn_chance) || current >= config.max_coins {
        return None;
    }
    Some(Coin {
        x: random_x(rng, width - COIN_SPAWN_MARGIN),
        y: COIN_SPAWN_Y,
        width: config.coin_size,
        height: config.coin_size,
        value: values.pick(rng),
    })
}

use sky_dodger::config::GameConfig;
use sky_dodger::entities::ObstacleKind;
use sky_dodger::spawn::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn single_entry_table_always_picks_it() {
    let table = WeightedTable::new(&[("only", 3)]);
    let mut rng = seeded_rng();
    for _ in 0..20 {
        assert_eq!(table.pick(&mut rng), "only");
    }
}

#[test]
fn zero_weight_entries_never_picked() {
    let table = WeightedTable::new(&[(1u32, 0), (2, 5), (3, 0)]);
    let mut rng = seeded_rng();
    for _ in 0..200 {
        assert_eq!(table.pick(&mut rng), 2);
    }
}

#[test]
fn obstacle_kinds_favour_straight() {
    let table = obstacle_kinds();
    let mut rng = seeded_rng();
    let straight = (0..10_000)
        .filter(|_| table.pick(&mut rng) == ObstacleKind::Straight)
        .count();
    // Expect ~8000
    assert!((7500..8500).contains(&straight), "straight = {}", straight);
}

#[test]
fn coin_values_mostly_one() {
    let table = coin_values();
    let mut rng = seeded_rng();
    let picks: Vec<u32> = (0..10_000).map(|_| table.pick(&mut rng)).collect();
    assert!(picks.iter().all(|v| [1, 10, 50].contains(v)));
    let ones = picks.iter().filter(|&&v| v == 1).count();
    assert!((8500..9500).contains(&ones), "ones = {}", ones);
    assert!(picks.contains(&10));
    assert!(picks.contains(&50));
}

#[test]
fn obstacle_spawns_above_screen_within_width() {
    let config = GameConfig { obstacle_spawn_chance: 1.0, ..GameConfig::default() };
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let o = maybe_spawn_obstacle(&mut rng, &config, obstacle_kinds(), 0, 800.0, 1)
            .expect("chance is 1.0");
        assert_eq!(o.y, -150.0);
        assert!(o.x >= 0.0 && o.x < 650.0);
        assert!(o.speed >= 2.0 && o.speed < 5.0);
        assert_eq!(o.phase, 0.0);
    }
}

#[test]
fn higher_level_spawns_faster_obstacles() {
    let config = GameConfig { obstacle_spawn_chance: 1.0, ..GameConfig::default() };
    let mut rng = seeded_rng();
    let o = maybe_spawn_obstacle(&mut rng, &config, obstacle_kinds(), 0, 800.0, 5).unwrap();
    // level 5: +4 * 0.5
    assert!(o.speed >= 4.0 && o.speed < 7.0);
}

#[test]
fn obstacle_spawn_respects_cap() {
    let config = GameConfig { obstacle_spawn_chance: 1.0, max_obstacles: 4, ..GameConfig::default() };
    let mut rng = seeded_rng();
    assert!(maybe_spawn_obstacle(&mut rng, &config, obstacle_kinds(), 4, 800.0, 1).is_none());
    assert!(maybe_spawn_obstacle(&mut rng, &config, obstacle_kinds(), 3, 800.0, 1).is_some());
}

#[test]
fn zero_chance_never_spawns() {
    let config = GameConfig {
        obstacle_spawn_chance: 0.0,
        coin_spawn_chance: 0.0,
        ..GameConfig::default()
    };
    let mut rng = seeded_rng();
    for _ in 0..100 {
        assert!(maybe_spawn_obstacle(&mut rng, &config, obstacle_kinds(), 0, 800.0, 1).is_none());
        assert!(maybe_spawn_coin(&mut rng, &config, coin_values(), 0, 800.0).is_none());
    }
}

#[test]
fn coin_spawns_just_above_top() {
    let config = GameConfig { coin_spawn_chance: 1.0, ..GameConfig::default() };
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let c = maybe_spawn_coin(&mut rng, &config, coin_values(), 0, 800.0).unwrap();
        assert_eq!(c.y, -30.0);
        assert!(c.x >= 0.0 && c.x < 770.0);
        assert_eq!(c.width, 125.0);
    }
}

#[test]
fn coin_spawn_respects_cap() {
    let config = GameConfig { coin_spawn_chance: 1.0, max_coins: 1, ..GameConfig::default() };
    let mut rng = seeded_rng();
    assert!(maybe_spawn_coin(&mut rng, &config, coin_values(), 1, 800.0).is_none());
}

#[test]
fn tiny_canvas_does_not_panic() {
    let config = GameConfig {
        obstacle_spawn_chance: 1.0,
        coin_spawn_chance: 1.0,
        ..GameConfig::default()
    };
    let mut rng = seeded_rng();
    let o = maybe_spawn_obstacle(&mut rng, &config, obstacle_kinds(), 0, 20.0, 1).unwrap();
    assert_eq!(o.x, 0.0);
    let c = maybe_spawn_coin(&mut rng, &config, coin_values(), 0, 10.0).unwrap();
    assert_eq!(c.x, 0.0);
}

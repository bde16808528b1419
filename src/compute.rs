//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `Session` (and, where needed, an RNG handle) and returns a brand-new
//! `Session`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Coin, Mode, Obstacle, ObstacleKind, Player, Session};
use crate::layout;
use crate::spawn::{coin_values, maybe_spawn_coin, maybe_spawn_obstacle, obstacle_kinds};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Where the player stands at the start of a run.  Narrow canvases put the
/// player higher up so a thumb doesn't cover it.
fn start_player(config: &GameConfig, width: f32, height: f32) -> Player {
    let size = config.player_size;
    let y_ratio = if width < config.narrow_width { 0.3 } else { 0.5 };
    Player {
        x: width / 2.0 - size / 2.0,
        y: height * y_ratio,
        width: size,
        height: size,
        lives: i32::try_from(config.starting_lives).unwrap_or(i32::MAX),
        dragging: false,
    }
}

/// A fresh session sitting on the main menu.
pub fn new_session(config: GameConfig, width: f32, height: f32) -> Session {
    Session {
        player: start_player(&config, width, height),
        obstacles: Vec::new(),
        coins: Vec::new(),
        score: 0,
        coins_collected: 0,
        bank: 0,
        level: 1,
        upgraded: false,
        mode: Mode::Menu,
        audio_started: false,
        width,
        height,
        config,
    }
}

// ── Mode transitions ─────────────────────────────────────────────────────────

/// Menu → Playing.  Resets everything a run owns; the bank and the upgrade
/// carry over.
pub fn start_run(state: &Session) -> Session {
    if state.mode != Mode::Menu {
        return state.clone();
    }
    log::info!("Run started (bank {}, upgraded {})", state.bank, state.upgraded);
    Session {
        player: start_player(&state.config, state.width, state.height),
        obstacles: Vec::new(),
        coins: Vec::new(),
        score: 0,
        coins_collected: 0,
        level: 1,
        mode: Mode::Playing,
        ..state.clone()
    }
}

/// Menu → UpgradeMenu.
pub fn open_upgrade_menu(state: &Session) -> Session {
    if state.mode != Mode::Menu {
        return state.clone();
    }
    Session {
        mode: Mode::UpgradeMenu,
        ..state.clone()
    }
}

/// UpgradeMenu → Menu without buying anything.
pub fn close_upgrade_menu(state: &Session) -> Session {
    if state.mode != Mode::UpgradeMenu {
        return state.clone();
    }
    Session {
        mode: Mode::Menu,
        ..state.clone()
    }
}

/// Buy the one-time upgrade.  Only succeeds from the upgrade menu, with
/// enough banked currency, and only once; otherwise nothing changes.
pub fn purchase_upgrade(state: &Session) -> Session {
    let cost = state.config.upgrade_cost;
    if state.mode != Mode::UpgradeMenu || state.upgraded || state.bank < cost {
        return state.clone();
    }
    log::info!("Upgrade purchased for {} (bank {} -> {})", cost, state.bank, state.bank - cost);
    Session {
        bank: state.bank - cost,
        upgraded: true,
        mode: Mode::Menu,
        ..state.clone()
    }
}

/// A click at canvas coordinates while a menu is showing.
pub fn click(state: &Session, x: f32, y: f32) -> Session {
    let (w, h) = (state.width, state.height);
    match state.mode {
        Mode::Menu => {
            // On short canvases the two buttons overlap; Start wins.
            if layout::start_button(w, h).contains(x, y) {
                start_run(state)
            } else if layout::upgrade_button(w, h).contains(x, y) {
                open_upgrade_menu(state)
            } else {
                state.clone()
            }
        }
        Mode::UpgradeMenu => {
            // The preview and the back button overlap slightly; a click in
            // the overlap buys (if affordable) and then leaves, same as
            // either action alone would end up on the menu.
            let mut next = state.clone();
            if layout::purchase_area(w, h).contains(x, y) {
                next = purchase_upgrade(&next);
            }
            if layout::back_button(w, h).contains(x, y) {
                next = close_upgrade_menu(&next);
            }
            next
        }
        Mode::Playing | Mode::GameOver { .. } => state.clone(),
    }
}

/// Record that background music has been requested.  Returns the new state
/// and whether this call is the first interaction (i.e. music should start).
pub fn note_interaction(state: &Session) -> (Session, bool) {
    if state.audio_started {
        return (state.clone(), false);
    }
    (
        Session {
            audio_started: true,
            ..state.clone()
        },
        true,
    )
}

// ── Pointer-driven player movement ───────────────────────────────────────────

/// Pointer pressed: start dragging if it landed on the player.
pub fn begin_drag(state: &Session, x: f32, y: f32) -> Session {
    if state.mode != Mode::Playing || !state.player.rect().contains(x, y) {
        return state.clone();
    }
    Session {
        player: Player {
            dragging: true,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Centre the player horizontally on `x`, kept inside the canvas.
fn place_player(state: &Session, x: f32) -> Session {
    let p = &state.player;
    let max_x = (state.width - p.width).max(0.0);
    let new_x = (x - p.width / 2.0).clamp(0.0, max_x);
    Session {
        player: Player {
            x: new_x,
            ..p.clone()
        },
        ..state.clone()
    }
}

/// Pointer moved.  Only has an effect while a drag is in progress; the
/// player only ever moves sideways.
pub fn drag_to(state: &Session, x: f32) -> Session {
    if state.mode != Mode::Playing || !state.player.dragging {
        return state.clone();
    }
    place_player(state, x)
}

/// Pointer released.
pub fn end_drag(state: &Session) -> Session {
    Session {
        player: Player {
            dragging: false,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Keyboard nudge, `dx` canvas units.  Clamped like a drag.
pub fn nudge_player(state: &Session, dx: f32) -> Session {
    if state.mode != Mode::Playing {
        return state.clone();
    }
    let centre = state.player.x + state.player.width / 2.0;
    place_player(state, centre + dx)
}

/// The canvas changed size: keep the session but put the player back on its
/// start spot for the new dimensions.
pub fn resize(state: &Session, width: f32, height: f32) -> Session {
    let fresh = start_player(&state.config, width, height);
    Session {
        player: Player {
            x: fresh.x,
            y: fresh.y,
            ..state.player.clone()
        },
        width,
        height,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure: RNG is injected) ───────────────────────────

fn advance_obstacle(o: &Obstacle, config: &GameConfig) -> Obstacle {
    match o.kind {
        ObstacleKind::Straight => Obstacle {
            y: o.y + o.speed,
            ..o.clone()
        },
        ObstacleKind::Swirling => Obstacle {
            x: o.x + o.phase.sin() * config.swirl_amplitude,
            y: o.y + o.speed,
            phase: o.phase + config.swirl_step,
            ..o.clone()
        },
    }
}

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &Session, rng: &mut impl Rng) -> Session {
    match state.mode {
        Mode::Playing => tick_playing(state, rng),
        Mode::GameOver { frames_left } => {
            if frames_left <= 1 {
                log::info!("Back to menu");
                Session {
                    mode: Mode::Menu,
                    ..state.clone()
                }
            } else {
                Session {
                    mode: Mode::GameOver {
                        frames_left: frames_left - 1,
                    },
                    ..state.clone()
                }
            }
        }
        Mode::Menu | Mode::UpgradeMenu => state.clone(),
    }
}

fn tick_playing(state: &Session, rng: &mut impl Rng) -> Session {
    let config = &state.config;
    let player_box = state.player.rect();

    // ── 1. Move obstacles ────────────────────────────────────────────────────
    let moved: Vec<Obstacle> = state
        .obstacles
        .iter()
        .map(|o| advance_obstacle(o, config))
        .collect();

    // ── 2. Obstacles ↔ player, then cull ────────────────────────────────────
    let mut hits: i32 = 0;
    let mut dodged: u32 = 0;
    let mut obstacles: Vec<Obstacle> = Vec::with_capacity(moved.len());
    for o in moved {
        if o.rect().overlaps(&player_box) {
            hits += 1;
        } else if o.y > state.height {
            dodged += 1;
        } else {
            obstacles.push(o);
        }
    }

    // ── 3. Move coins, collect, cull ────────────────────────────────────────
    let mut gained: u32 = 0;
    let mut coins: Vec<Coin> = Vec::with_capacity(state.coins.len());
    for c in &state.coins {
        let c = Coin {
            y: c.y + config.coin_fall_speed,
            ..c.clone()
        };
        if c.rect().overlaps(&player_box) {
            gained += c.value;
        } else if c.y <= state.height {
            coins.push(c);
        }
    }

    // ── 4. Score & level ─────────────────────────────────────────────────────
    let score = state.score + dodged;
    let level = 1 + score / config.points_per_level.max(1);
    if level > state.level {
        log::debug!("Level {} reached at score {}", level, score);
    }

    // ── 5. Spawn ─────────────────────────────────────────────────────────────
    if let Some(o) = maybe_spawn_obstacle(
        rng,
        config,
        obstacle_kinds(),
        obstacles.len(),
        state.width,
        level,
    ) {
        obstacles.push(o);
    }
    if let Some(c) = maybe_spawn_coin(rng, config, coin_values(), coins.len(), state.width) {
        coins.push(c);
    }

    // ── 6. Lives & mode ──────────────────────────────────────────────────────
    let lives = state.player.lives - hits;
    let mode = if lives <= 0 {
        log::info!(
            "Game over: score {}, collected {}, bank {}",
            score,
            state.coins_collected + gained,
            state.bank + gained
        );
        Mode::GameOver {
            frames_left: config.game_over_frames().max(1),
        }
    } else {
        Mode::Playing
    };

    Session {
        player: Player {
            lives,
            dragging: state.player.dragging && mode == Mode::Playing,
            ..state.player.clone()
        },
        obstacles,
        coins,
        score,
        coins_collected: state.coins_collected + gained,
        bank: state.bank + gained,
        level,
        mode,
        ..state.clone()
    }
}

//! All game entity types: pure data, plus the geometry they share.
//!
//! Positions and sizes are in canvas units; the renderer decides how many
//! units one terminal cell covers.

use crate::config::GameConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.  `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Strict overlap on both axes: touching edges do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Inclusive point test, used for pointer hit-testing.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}

// ── Modes ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Menu,
    Playing,
    /// Overlay shown after the last life is lost; counts down to the menu.
    GameOver { frames_left: u32 },
    UpgradeMenu,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub lives: i32,
    /// Set while a pointer drag that started on the player is in progress.
    pub dragging: bool,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Falling things ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObstacleKind {
    /// Falls straight down.
    Straight,
    /// Falls while weaving sideways on a sine wave.
    Swirling,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub kind: ObstacleKind,
    /// Sine phase for `Swirling`; untouched for `Straight`.
    pub phase: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub value: u32,
}

impl Coin {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the game knows.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub score: u32,
    /// Currency picked up during the current run.
    pub coins_collected: u32,
    /// Currency kept across runs; spent on the upgrade.
    pub bank: u32,
    pub level: u32,
    /// The one-time upgrade has been bought.
    pub upgraded: bool,
    pub mode: Mode,
    /// Background music has been kicked off by a first interaction.
    pub audio_started: bool,
    pub width: f32,
    pub height: f32,
    pub config: GameConfig,
}

//! Translating terminal events into session changes.
//!
//! Mouse positions arrive as terminal cells and are converted into
//! canvas-local coordinates before any hit-testing happens.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::compute::{
    begin_drag, click, close_upgrade_menu, drag_to, end_drag, note_interaction, nudge_player,
    open_upgrade_menu, purchase_upgrade, resize, start_run,
};
use crate::config::GameConfig;
use crate::entities::{Mode, Session};

/// Keyboard nudges move the player this many cells.
const NUDGE_CELLS: f32 = 2.0;

// ── Terminal ↔ canvas mapping ─────────────────────────────────────────────────

/// How the canvas sits inside the terminal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_col: u16,
    pub origin_row: u16,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Viewport {
    pub fn from_config(config: &GameConfig) -> Self {
        Viewport {
            origin_col: 0,
            origin_row: 0,
            cell_width: config.cell_width,
            cell_height: config.cell_height,
        }
    }

    /// Canvas dimensions for a terminal of `cols` × `rows`.
    pub fn canvas_size(&self, cols: u16, rows: u16) -> (f32, f32) {
        let cols = cols.saturating_sub(self.origin_col) as f32;
        let rows = rows.saturating_sub(self.origin_row) as f32;
        (cols * self.cell_width, rows * self.cell_height)
    }

    /// Centre of the cell at (`col`, `row`) in canvas units.
    pub fn to_canvas(&self, col: u16, row: u16) -> (f32, f32) {
        let x = (col as f32 - self.origin_col as f32 + 0.5) * self.cell_width;
        let y = (row as f32 - self.origin_row as f32 + 0.5) * self.cell_height;
        (x, y)
    }

    /// Cell containing the canvas point; may be off-screen (negative).
    pub fn to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        let col = (x / self.cell_width).floor() as i32 + self.origin_col as i32;
        let row = (y / self.cell_height).floor() as i32 + self.origin_row as i32;
        (col, row)
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Result of feeding one event to the session.
#[derive(Clone, Debug)]
pub struct Handled {
    pub state: Session,
    pub quit: bool,
    /// This was the first user interaction: background audio should start.
    pub start_audio: bool,
}

impl Handled {
    fn with(state: Session) -> Self {
        Handled {
            state,
            quit: false,
            start_audio: false,
        }
    }
}

pub fn handle_event(state: &Session, event: &Event, view: &Viewport) -> Handled {
    match event {
        Event::Key(key) => handle_key(state, key, view),
        Event::Mouse(mouse) => handle_mouse(state, mouse, view),
        Event::Resize(cols, rows) => {
            let (w, h) = view.canvas_size(*cols, *rows);
            log::debug!("Resized to {}x{} cells ({}x{} canvas)", cols, rows, w, h);
            Handled::with(resize(state, w, h))
        }
        _ => Handled::with(state.clone()),
    }
}

/// First interactions kick off the music exactly once.
fn interacted(state: Session) -> Handled {
    let (state, first) = note_interaction(&state);
    Handled {
        state,
        quit: false,
        start_audio: first,
    }
}

fn handle_key(state: &Session, key: &KeyEvent, view: &Viewport) -> Handled {
    if key.kind == KeyEventKind::Release {
        return Handled::with(state.clone());
    }
    let quit = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Esc => state.mode != Mode::UpgradeMenu,
        _ => false,
    };
    if quit {
        return Handled {
            state: state.clone(),
            quit: true,
            start_audio: false,
        };
    }

    let step = NUDGE_CELLS * view.cell_width;
    let next = match (state.mode, &key.code) {
        (Mode::Menu, KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S')) => start_run(state),
        (Mode::Menu, KeyCode::Char('u') | KeyCode::Char('U')) => open_upgrade_menu(state),
        (Mode::UpgradeMenu, KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc) => {
            close_upgrade_menu(state)
        }
        (Mode::UpgradeMenu, KeyCode::Enter | KeyCode::Char(' ')) => purchase_upgrade(state),
        (Mode::Playing, KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A')) => {
            nudge_player(state, -step)
        }
        (Mode::Playing, KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D')) => {
            nudge_player(state, step)
        }
        _ => state.clone(),
    };
    interacted(next)
}

fn handle_mouse(state: &Session, mouse: &MouseEvent, view: &Viewport) -> Handled {
    let (x, y) = view.to_canvas(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let next = match state.mode {
                Mode::Playing => begin_drag(state, x, y),
                _ => click(state, x, y),
            };
            interacted(next)
        }
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Handled::with(drag_to(state, x))
        }
        MouseEventKind::Up(_) => Handled::with(end_drag(state)),
        _ => Handled::with(state.clone()),
    }
}

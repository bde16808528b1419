//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer, the viewport and an immutable
//! view of the session.  No game logic is performed; this module only
//! translates state into terminal commands.  Everything is clipped to the
//! canvas, so entities half above the top edge draw partially.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{Coin, Mode, Obstacle, ObstacleKind, Rect, Session};
use crate::input::Viewport;
use crate::layout;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_PLAYER_UPGRADED: Color = Color::Yellow;
const C_OBSTACLE_STRAIGHT: Color = Color::Grey;
const C_OBSTACLE_SWIRLING: Color = Color::Magenta;
const C_COIN: Color = Color::Yellow;
const C_COIN_RARE: Color = Color::Green;
const C_MENU_PANEL: Color = Color::Black;
const C_UPGRADE_PANEL: Color = Color::DarkGrey;
const C_BUTTON: Color = Color::Blue;
const C_GAME_OVER: Color = Color::Red;

/// Terminal size in cells covered by the session's canvas.
fn grid(state: &Session, view: &Viewport) -> (i32, i32) {
    view.to_cell(state.width, state.height)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &Session, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match state.mode {
        Mode::Menu => draw_menu(out, state, view)?,
        Mode::UpgradeMenu => draw_upgrade_menu(out, state, view)?,
        Mode::Playing => draw_game(out, state, view)?,
        Mode::GameOver { .. } => {
            draw_game(out, state, view)?;
            draw_game_over(out, state, view)?;
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

/// Fill the cells covered by `rect` with `ch`, clipped to the canvas.
fn fill_rect<W: Write>(
    out: &mut W,
    state: &Session,
    view: &Viewport,
    rect: &Rect,
    ch: char,
    fg: Color,
    bg: Color,
) -> std::io::Result<()> {
    let (cols, rows) = grid(state, view);
    let (c0, r0) = view.to_cell(rect.x, rect.y);
    // Far edges are exclusive: a box ending on a cell boundary stops there.
    let (c1, r1) = view.to_cell(rect.x + rect.w - 0.01, rect.y + rect.h - 0.01);
    let c0 = c0.max(0);
    let r0 = r0.max(0);
    let c1 = c1.min(cols - 1);
    let r1 = r1.min(rows - 1);
    if c0 > c1 || r0 > r1 {
        return Ok(());
    }
    let line: String = std::iter::repeat(ch).take((c1 - c0 + 1) as usize).collect();
    out.queue(style::SetForegroundColor(fg))?;
    out.queue(style::SetBackgroundColor(bg))?;
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0 as u16, row as u16))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

/// Print `text` at a cell, truncated at the right edge and dropped when
/// the row is off-screen.
fn put_text<W: Write>(
    out: &mut W,
    state: &Session,
    view: &Viewport,
    col: i32,
    row: i32,
    text: &str,
    fg: Color,
    bg: Color,
) -> std::io::Result<()> {
    let (cols, rows) = grid(state, view);
    if row < 0 || row >= rows || col >= cols {
        return Ok(());
    }
    let skip = (-col).max(0) as usize;
    let start = col.max(0);
    let visible: String = text
        .chars()
        .skip(skip)
        .take((cols - start).max(0) as usize)
        .collect();
    if visible.is_empty() {
        return Ok(());
    }
    out.queue(cursor::MoveTo(start as u16, row as u16))?;
    out.queue(style::SetForegroundColor(fg))?;
    out.queue(style::SetBackgroundColor(bg))?;
    out.queue(Print(visible))?;
    Ok(())
}

/// Text centred on the cell containing canvas point (`x`, `y`).
fn put_centred<W: Write>(
    out: &mut W,
    state: &Session,
    view: &Viewport,
    x: f32,
    y: f32,
    text: &str,
    fg: Color,
    bg: Color,
) -> std::io::Result<()> {
    let (col, row) = view.to_cell(x, y);
    let half = text.chars().count() as i32 / 2;
    put_text(out, state, view, col - half, row, text, fg, bg)
}

fn draw_button<W: Write>(
    out: &mut W,
    state: &Session,
    view: &Viewport,
    rect: &Rect,
    label: &str,
) -> std::io::Result<()> {
    fill_rect(out, state, view, rect, ' ', Color::White, C_BUTTON)?;
    put_centred(
        out,
        state,
        view,
        rect.x + rect.w / 2.0,
        rect.y + rect.h / 2.0,
        label,
        Color::White,
        C_BUTTON,
    )
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// The avatar as a box at an arbitrary spot; reused for the upgrade preview.
fn draw_avatar<W: Write>(
    out: &mut W,
    state: &Session,
    view: &Viewport,
    rect: &Rect,
    upgraded: bool,
    bg: Color,
) -> std::io::Result<()> {
    let (ch, color, face) = if upgraded {
        ('█', C_PLAYER_UPGRADED, "★")
    } else {
        ('▒', C_PLAYER, "v")
    };
    fill_rect(out, state, view, rect, ch, color, bg)?;
    put_centred(out, state, view, rect.x + rect.w / 2.0, rect.y + rect.h / 2.0, face, color, bg)
}

fn draw_player<W: Write>(out: &mut W, state: &Session, view: &Viewport) -> std::io::Result<()> {
    draw_avatar(out, state, view, &state.player.rect(), state.upgraded, C_SKY)
}

fn draw_obstacle<W: Write>(
    out: &mut W,
    state: &Session,
    view: &Viewport,
    obstacle: &Obstacle,
) -> std::io::Result<()> {
    let (ch, color) = match obstacle.kind {
        ObstacleKind::Straight => ('▓', C_OBSTACLE_STRAIGHT),
        ObstacleKind::Swirling => ('~', C_OBSTACLE_SWIRLING),
    };
    fill_rect(out, state, view, &obstacle.rect(), ch, color, C_SKY)
}

fn draw_coin<W: Write>(
    out: &mut W,
    state: &Session,
    view: &Viewport,
    coin: &Coin,
) -> std::io::Result<()> {
    let color = if coin.value > 1 { C_COIN_RARE } else { C_COIN };
    let r = coin.rect();
    fill_rect(out, state, view, &r, '░', color, C_SKY)?;
    put_centred(
        out,
        state,
        view,
        r.x + r.w / 2.0,
        r.y + r.h / 2.0,
        &format!("${}", coin.value),
        Color::Black,
        color,
    )
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &Session, view: &Viewport) -> std::io::Result<()> {
    let lines = [
        format!("Score: {}", state.score),
        format!("Coins: {}", state.coins_collected),
        format!("Bank: {}", state.bank),
        format!("Level: {}", state.level),
    ];
    for (i, line) in lines.iter().enumerate() {
        put_text(out, state, view, 2, 1 + i as i32, line, C_HUD, C_SKY)?;
    }
    let lives = format!("Lives: {}", state.player.lives.max(0));
    put_text(out, state, view, 2, 1 + lines.len() as i32, &lives, C_HUD_LIVES, C_SKY)
}

fn draw_game<W: Write>(out: &mut W, state: &Session, view: &Viewport) -> std::io::Result<()> {
    draw_player(out, state, view)?;
    for obstacle in &state.obstacles {
        draw_obstacle(out, state, view, obstacle)?;
    }
    for coin in &state.coins {
        draw_coin(out, state, view, coin)?;
    }
    draw_hud(out, state, view)
}

fn draw_menu<W: Write>(out: &mut W, state: &Session, view: &Viewport) -> std::io::Result<()> {
    let (w, h) = (state.width, state.height);
    fill_rect(out, state, view, &layout::menu_panel(w, h), ' ', Color::White, C_MENU_PANEL)?;
    draw_button(out, state, view, &layout::start_button(w, h), "Start Game")?;
    draw_button(out, state, view, &layout::upgrade_button(w, h), "Upgrade Bird")?;

    let bottom = h * 0.75;
    put_centred(
        out,
        state,
        view,
        w / 2.0,
        bottom - 2.0 * view.cell_height,
        &format!("Bank: {}", state.bank),
        C_COIN,
        C_MENU_PANEL,
    )?;
    let hint = "Enter: Start   U: Upgrade   Q: Quit";
    put_centred(out, state, view, w / 2.0, bottom - view.cell_height, hint, Color::DarkGrey, C_MENU_PANEL)
}

fn draw_upgrade_menu<W: Write>(
    out: &mut W,
    state: &Session,
    view: &Viewport,
) -> std::io::Result<()> {
    let (w, h) = (state.width, state.height);
    fill_rect(out, state, view, &layout::menu_panel(w, h), ' ', Color::White, C_UPGRADE_PANEL)?;
    // The preview sits partly over the back button; the button goes first.
    let back = layout::back_button(w, h);
    draw_button(out, state, view, &back, "Back")?;

    let (px, py) = layout::preview_origin(w, h);
    put_centred(out, state, view, w / 2.0, py - 50.0, "Upgrades", Color::White, C_UPGRADE_PANEL)?;
    let preview = Rect::new(px, py, 100.0, 100.0);
    draw_avatar(out, state, view, &preview, true, C_UPGRADE_PANEL)?;

    let status = if state.upgraded {
        "Owned".to_string()
    } else {
        format!("Cost: {} Coins", state.config.upgrade_cost)
    };
    let below = back.y + back.h + view.cell_height;
    put_centred(out, state, view, w / 2.0, below, &status, Color::White, C_UPGRADE_PANEL)?;
    put_centred(
        out,
        state,
        view,
        w / 2.0,
        below + view.cell_height,
        &format!("Bank: {}", state.bank),
        C_COIN,
        C_UPGRADE_PANEL,
    )
}

fn draw_game_over<W: Write>(out: &mut W, state: &Session, view: &Viewport) -> std::io::Result<()> {
    let (cx, cy) = (state.width / 2.0, state.height / 2.0);
    put_centred(out, state, view, cx, cy, "Game Over!", C_GAME_OVER, C_SKY)?;
    put_centred(
        out,
        state,
        view,
        cx,
        cy + view.cell_height * 2.0,
        "Returning to Main Menu...",
        C_GAME_OVER,
        C_SKY,
    )
}

//! Where the menu buttons sit on the canvas.
//!
//! Shared by the click handler and the renderer so what is drawn is exactly
//! what can be clicked.

use crate::entities::Rect;

pub fn start_button(width: f32, height: f32) -> Rect {
    Rect::new(width / 2.0 - 100.0, height / 3.0 - 25.0, 200.0, 50.0)
}

pub fn upgrade_button(width: f32, height: f32) -> Rect {
    Rect::new(width / 2.0 - 150.0, height / 2.0 - 25.0, 300.0, 50.0)
}

pub fn back_button(width: f32, height: f32) -> Rect {
    Rect::new(width / 2.0 - 100.0, height / 2.0 - 25.0, 200.0, 50.0)
}

/// Top-left of the upgraded-avatar preview in the upgrade menu.
pub fn preview_origin(width: f32, height: f32) -> (f32, f32) {
    (width / 2.0 - 50.0, height / 3.0)
}

/// Clicking anywhere on the preview (plus a small margin) buys the upgrade.
pub fn purchase_area(width: f32, height: f32) -> Rect {
    let (px, py) = preview_origin(width, height);
    Rect::new(px - 20.0, py, 140.0, 120.0)
}

/// The dark panel both menus are drawn on.
pub fn menu_panel(width: f32, height: f32) -> Rect {
    Rect::new(width / 4.0, height / 4.0, width / 2.0, height / 2.0)
}

//! Screen geometry for the 900×600 layout: card slots, buttons and the
//! animation strip. Hit testing in the rule engine and drawing in the web
//! front end both read from here so the two never disagree.

use super::{COLUMNS, SLOT_COUNT, column_of, row_of};
use crate::input::{Point, Rect};

pub const SCREEN_WIDTH: i32 = 900;
pub const SCREEN_HEIGHT: i32 = 600;

pub const CARD_WIDTH: i32 = 130;
pub const CARD_HEIGHT: i32 = 195;
pub const ROW_Y: [i32; 2] = [15, 230];
pub const ROW_START_X: i32 = 35;
pub const CARD_GAP: i32 = 10;
pub const OUTLINE_THICKNESS: i32 = 10;

pub const SCREEN_RECT: Rect = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);
pub const START_BUTTON: Rect = Rect::new(350, 500, 200, 80);
pub const HELP_BUTTON: Rect = Rect::new(50, 500, 200, 80);
pub const HIDDEN_BUTTON: Rect = Rect::new(650, 500, 200, 80);
pub const MENU_BUTTON: Rect = Rect::new(350, 400, 200, 80);
pub const BACK_BUTTON: Rect = Rect::new(50, 500, 200, 80);
pub const NEXT_BUTTON: Rect = Rect::new(650, 500, 200, 80);
pub const ANIMATION_RECT: Rect = Rect::new(320, 420, 300, 150);

/// Where the deck counter text is drawn during gameplay.
pub const DECK_LABEL_POS: Point = Point::new(10.0, 540.0);

/// Clickable buttons across all screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Button {
    Start,
    Help,
    Hidden,
    Menu,
    Back,
    Next,
}

impl Button {
    pub fn rect(self) -> Rect {
        match self {
            Button::Start => START_BUTTON,
            Button::Help => HELP_BUTTON,
            Button::Hidden => HIDDEN_BUTTON,
            Button::Menu => MENU_BUTTON,
            Button::Back => BACK_BUTTON,
            Button::Next => NEXT_BUTTON,
        }
    }
}

pub fn slot_rect(index: usize) -> Rect {
    let column = (column_of(index) % COLUMNS) as i32;
    let row = row_of(index).min(ROW_Y.len() - 1);
    Rect::new(
        ROW_START_X + column * (CARD_WIDTH + CARD_GAP),
        ROW_Y[row],
        CARD_WIDTH,
        CARD_HEIGHT,
    )
}

/// First slot (in index order) under the point, if any.
pub fn slot_at(p: Point) -> Option<usize> {
    (0..SLOT_COUNT).find(|&i| slot_rect(i).contains(p))
}

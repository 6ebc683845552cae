//! Owned, read-only view of everything a renderer needs for one frame.

use rand::Rng;

use crate::animation::AnimationView;
use crate::background::BackgroundView;
use crate::board::SLOT_COUNT;
use crate::board::layout::{self, Button};
use crate::card::Card;
use crate::input::{Point, Rect};
use crate::screen::{Game, Screen};

/// Outline drawn around a slot, strongest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outline {
    /// First half of a pair (green).
    Selected,
    /// Under the cursor (yellow).
    Highlighted,
    /// Face card that can no longer be swapped (red).
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotView {
    pub index: usize,
    pub card: Card,
    pub pile_depth: u32,
    pub rect: Rect,
    pub is_hidden: bool,
    pub is_selected: bool,
    pub is_highlighted: bool,
    pub is_blocked_face: bool,
    pub outline: Option<Outline>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ButtonView {
    pub button: Button,
    pub rect: Rect,
    pub hovered: bool,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    pub tick: u64,
    pub screen: Screen,
    pub help_page: usize,
    pub help_pages: usize,
    pub fade_active: bool,
    pub fade_opacity: f32,
    pub background: BackgroundView,
    pub animation: AnimationView,
    pub slots: Vec<SlotView>,
    pub deck_remaining: usize,
    pub selected: Option<usize>,
    pub highlighted: Option<usize>,
    pub hidden_mode_enabled: bool,
    pub buttons: Vec<ButtonView>,
    pub player_won: bool,
    pub player_lost: bool,
    pub cursor: Point,
}

impl Snapshot {
    pub fn slot(&self, index: usize) -> Option<&SlotView> {
        self.slots.get(index)
    }

    pub fn hidden_slots(&self) -> Vec<usize> {
        self.slots.iter().filter(|s| s.is_hidden).map(|s| s.index).collect()
    }
}

fn button_label(button: Button, help_page: usize, hidden_on: bool) -> &'static str {
    match button {
        Button::Start => "START",
        Button::Help => "HELP",
        Button::Hidden if hidden_on => "HIDDEN: ON",
        Button::Hidden => "HIDDEN: OFF",
        Button::Menu => "MENU",
        // the back button leaves help from its first page
        Button::Back if help_page == 0 => "MENU",
        Button::Back => "BACK",
        Button::Next => "NEXT",
    }
}

impl<R: Rng> Game<R> {
    pub fn snapshot(&self) -> Snapshot {
        let session = self.session();
        let board = session.board();
        let selected = session.selected();
        let highlighted = self.highlighted();
        let hidden_on = self.hidden().is_enabled();

        let slots = (0..SLOT_COUNT)
            .zip(board.slots().iter())
            .map(|(index, slot)| {
                let is_selected = selected == Some(index);
                let is_highlighted = highlighted == Some(index);
                let is_blocked_face = board.is_blocked_face(index);
                let outline = if is_selected {
                    Some(Outline::Selected)
                } else if is_highlighted {
                    Some(Outline::Highlighted)
                } else if is_blocked_face {
                    Some(Outline::Blocked)
                } else {
                    None
                };
                SlotView {
                    index,
                    card: slot.card,
                    pile_depth: slot.pile_depth,
                    rect: layout::slot_rect(index),
                    is_hidden: self.hidden().is_hidden(index),
                    is_selected,
                    is_highlighted,
                    is_blocked_face,
                    outline,
                }
            })
            .collect();

        let buttons = self
            .visible_buttons()
            .into_iter()
            .map(|button| ButtonView {
                button,
                rect: button.rect(),
                hovered: self.input().hovering(button.rect()),
                label: button_label(button, self.help_page(), hidden_on),
            })
            .collect();

        Snapshot {
            tick: self.ticks(),
            screen: self.screen(),
            help_page: self.help_page(),
            help_pages: self.config().help_pages,
            fade_active: self.fade().is_active(),
            fade_opacity: self.fade().opacity(),
            background: self.background().view(),
            animation: self.animations().view(),
            slots,
            deck_remaining: session.deck().len(),
            selected,
            highlighted,
            hidden_mode_enabled: hidden_on,
            buttons,
            player_won: session.player_won(),
            player_lost: session.player_lost(),
            cursor: self.input().cursor(),
        }
    }
}

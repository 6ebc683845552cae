// Integration tests (native) for the `elevens` crate.
// These drive the public `Game` controller tick by tick with synthetic mouse
// frames, the same way the browser loop does, and never touch web APIs.

mod common;

use common::{centre, click, game_in_play, idle, init_logging, scripted, settle, slot_centre};
use elevens::board::layout::Button;
use elevens::snapshot::Outline;
use elevens::{Cue, Game, GameConfig, Screen};

#[test]
fn matching_pair_refills_both_slots_and_plays_feedback() {
    let mut game = game_in_play(7);
    game.set_session(scripted([5, 1, 1, 1, 1, 1, 1, 6, 1, 1, 1, 1], 1, &[2, 3, 4, 8, 9]));

    assert_eq!(click(&mut game, slot_centre(0)), vec![Cue::Click]);
    assert_eq!(game.session().selected(), Some(0));
    assert_eq!(game.snapshot().slot(0).unwrap().outline, Some(Outline::Selected));

    let cues = click(&mut game, slot_centre(7));
    assert_eq!(cues.len(), 1);
    assert!(matches!(cues[0], Cue::CorrectMatch { variant } if variant < 3));
    assert!(game.animations().is_playing());

    let snap = game.snapshot();
    assert_eq!(snap.deck_remaining, 3);
    assert_eq!(snap.selected, None);
    assert_eq!(snap.slot(0).unwrap().card.rank(), 2);
    assert_eq!(snap.slot(7).unwrap().card.rank(), 3);
    assert_eq!(snap.slot(0).unwrap().pile_depth, 2);
    assert_eq!(snap.slot(7).unwrap().pile_depth, 2);
}

#[test]
fn mismatch_plays_error_cue_and_leaves_board_alone() {
    let mut game = game_in_play(8);
    game.set_session(scripted([5, 4, 1, 1, 1, 1, 1, 6, 1, 1, 1, 1], 1, &[2, 3, 4]));
    let before = game.session().board().clone();

    click(&mut game, slot_centre(0));
    assert_eq!(click(&mut game, slot_centre(1)), vec![Cue::ErrorMatch]);
    assert_eq!(game.session().board(), &before);
    assert_eq!(game.session().selected(), None);
    assert_eq!(game.session().deck().len(), 3);
}

#[test]
fn untouched_face_card_goes_back_under_the_deck() {
    let mut game = game_in_play(9);
    game.set_session(scripted([13, 5, 6, 1, 1, 1, 1, 1, 1, 1, 1, 1], 1, &[7, 8]));

    assert_eq!(click(&mut game, slot_centre(0)), vec![Cue::Click]);
    let session = game.session();
    assert_eq!(session.board().card(0).unwrap().rank(), 7);
    assert_eq!(session.board().slot(0).unwrap().pile_depth, 1);
    let deck: Vec<u8> = session.deck().iter().map(|c| c.rank()).collect();
    assert_eq!(deck, vec![8, 13]);
    assert_eq!(session.selected(), None);
}

#[test]
fn last_pair_wins_without_touching_the_board() {
    let mut game = game_in_play(10);
    game.set_session(scripted([5, 6, 11, 12, 13, 11, 12, 13, 11, 12, 13, 11], 2, &[4, 8]));
    let before = game.session().board().clone();

    click(&mut game, slot_centre(0));
    let cues = click(&mut game, slot_centre(1));
    assert!(cues.is_empty());
    assert!(game.session().player_won());
    assert_eq!(game.session().board(), &before);
    assert_eq!(game.session().deck().len(), 2);
    assert_eq!(game.fade().pending_destination(), Some(Screen::Win));

    let mut win_cues = 0;
    while game.screen() != Screen::Win || game.fade().is_active() {
        win_cues += game.tick(idle()).iter().filter(|c| **c == Cue::Win).count();
    }
    for _ in 0..30 {
        win_cues += game.tick(idle()).iter().filter(|c| **c == Cue::Win).count();
    }
    assert_eq!(win_cues, 1);
    assert_eq!(game.visible_buttons(), vec![Button::Menu]);

    click(&mut game, centre(Button::Menu.rect()));
    while game.screen() != Screen::Menu {
        game.tick(idle());
    }
}

#[test]
fn dead_board_is_lost_and_clicks_stop_mattering() {
    let mut game = game_in_play(11);
    game.set_session(scripted([11, 12, 13, 11, 12, 13, 11, 12, 13, 11, 12, 13], 2, &[1, 2, 3]));
    game.tick(idle());
    assert!(game.session().player_lost());
    assert_eq!(game.fade().pending_destination(), Some(Screen::Loss));

    // no highlight and no click handling once the game is over
    let cues = click(&mut game, slot_centre(3));
    assert!(cues.is_empty());
    assert_eq!(game.highlighted(), None);
}

#[test]
fn hover_highlights_the_slot_under_the_cursor() {
    let mut game = game_in_play(12);
    game.tick(elevens::InputFrame { cursor: slot_centre(4), left_down: false });
    assert_eq!(game.highlighted(), Some(4));
    let snap = game.snapshot();
    assert!(snap.slot(4).unwrap().is_highlighted);
    assert!(!snap.slot(3).unwrap().is_highlighted);

    game.tick(elevens::InputFrame::new(5.0, 5.0, false));
    assert_eq!(game.highlighted(), None);
}

#[test]
fn hidden_mode_turns_six_distinct_slots_face_down() {
    init_logging();
    let mut game = Game::new(GameConfig::seeded(21)).unwrap();
    while game.screen() != Screen::Menu || game.fade().is_active() {
        game.tick(idle());
    }
    click(&mut game, centre(Button::Hidden.rect()));
    assert!(game.snapshot().hidden_mode_enabled);
    click(&mut game, centre(Button::Start.rect()));
    while game.screen() != Screen::Gameplay {
        game.tick(idle());
    }

    let mut ticks = 0;
    while game.hidden().hidden_slots().is_empty() {
        game.tick(idle());
        ticks += 1;
        assert!(ticks <= 120, "hidden set never drawn");
    }
    assert_eq!(game.hidden().ticks_until_reshuffle(), 120);

    let mut hidden = game.snapshot().hidden_slots();
    assert_eq!(hidden.len(), 6);
    hidden.sort_unstable();
    hidden.dedup();
    assert_eq!(hidden.len(), 6);
    assert!(hidden.iter().all(|&s| s < 12));
}

#[test]
fn hidden_slots_reshuffle_and_stay_playable() {
    init_logging();
    let mut game = Game::new(GameConfig::seeded(21)).unwrap();
    while game.screen() != Screen::Menu || game.fade().is_active() {
        game.tick(idle());
    }
    click(&mut game, centre(Button::Hidden.rect()));
    click(&mut game, centre(Button::Start.rect()));
    while game.screen() != Screen::Gameplay {
        game.tick(idle());
    }
    settle(&mut game);
    // every number card has a partner on the board, so any hidden slot can match
    game.set_session(scripted([5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6], 1, &[2, 9, 3, 8, 4, 7]));

    while game.hidden().hidden_slots().is_empty() {
        game.tick(idle());
    }
    let first = game.hidden().hidden_slots().to_vec();
    for _ in 0..game.hidden().ticks_until_reshuffle() {
        game.tick(idle());
    }
    let second = game.hidden().hidden_slots().to_vec();
    assert_ne!(first, second);
    assert_eq!(second.len(), 6);
    assert_eq!(second.iter().collect::<std::collections::HashSet<_>>().len(), 6);

    let slot = second[0];
    assert!(game.snapshot().slot(slot).unwrap().is_hidden);
    assert_eq!(click(&mut game, slot_centre(slot)), vec![Cue::Click]);
    assert_eq!(game.session().selected(), Some(slot));

    let rank = game.session().board().card(slot).unwrap().rank();
    let partner = (0..12)
        .find(|&i| i != slot && game.session().board().card(i).unwrap().rank() + rank == 11)
        .unwrap();
    let cues = click(&mut game, slot_centre(partner));
    assert!(matches!(cues.as_slice(), [Cue::CorrectMatch { .. }]));

    let session = game.session();
    assert_eq!(session.deck().len(), 4);
    assert_eq!(session.board().card(slot).unwrap().rank(), 2);
    assert_eq!(session.board().card(partner).unwrap().rank(), 9);
    assert_eq!(session.board().slot(slot).unwrap().pile_depth, 2);
}

#[test]
fn second_match_while_animating_does_not_restart_playback() {
    let mut game = game_in_play(13);
    // refills keep a 2+9 pair on the board so the game stays live
    game.set_session(scripted([5, 6, 4, 7, 1, 1, 1, 1, 1, 1, 1, 1], 1, &[2, 9, 2, 9, 2]));
    click(&mut game, slot_centre(0));
    click(&mut game, slot_centre(1));
    assert!(game.animations().is_playing());
    let frame_before = game.animations().current_frame();

    click(&mut game, slot_centre(2));
    let cues = click(&mut game, slot_centre(3));
    assert!(matches!(cues.as_slice(), [Cue::CorrectMatch { .. }]));
    assert_eq!(game.animations().sequence_index(), 0);
    assert!(game.animations().current_frame() >= frame_before);

    // first definition is 61 frames at 6 ticks each
    for _ in 0..400 {
        game.tick(idle());
    }
    assert!(!game.animations().is_playing());
    assert_eq!(game.animations().sequence_index(), 1);
}

#[test]
fn fade_darkens_then_lightens_around_the_screen_switch() {
    init_logging();
    let mut game = Game::new(GameConfig::seeded(3)).unwrap();
    while game.screen() != Screen::Menu || game.fade().is_active() {
        game.tick(idle());
    }
    click(&mut game, centre(Button::Help.rect()));

    let mut opacities = Vec::new();
    let mut switch_at = None;
    while game.fade().is_active() {
        let snap = game.snapshot();
        if snap.screen == Screen::Help && switch_at.is_none() {
            switch_at = Some(opacities.len());
        }
        opacities.push(snap.fade_opacity);
        game.tick(idle());
    }
    let peak = switch_at.expect("screen never switched");
    assert!(opacities.iter().all(|o| (0.0..=1.0).contains(o)));
    assert!(opacities[..peak].windows(2).all(|w| w[0] <= w[1]));
    assert!(opacities[peak..].windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(game.snapshot().fade_opacity, 0.0);
    settle(&mut game);
    assert_eq!(game.screen(), Screen::Help);
}

#[test]
fn new_game_from_the_menu_is_freshly_dealt() {
    let mut game = game_in_play(14);
    game.set_session(scripted([11, 12, 13, 11, 12, 13, 11, 12, 13, 11, 12, 13], 2, &[1]));
    while game.screen() != Screen::Loss || game.fade().is_active() {
        game.tick(idle());
    }
    click(&mut game, centre(Button::Menu.rect()));
    while game.screen() != Screen::Menu || game.fade().is_active() {
        game.tick(idle());
    }
    click(&mut game, centre(Button::Start.rect()));
    let session = game.session();
    assert!(!session.is_over());
    assert_eq!(session.deck().len(), 40);
    assert_eq!(session.board().cards().count(), 12);
}

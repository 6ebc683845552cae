//! Top-level controller: owns every piece of game state and advances it one
//! tick at a time.
//!
//! Per tick the order is fixed: input edges are refreshed, the screen fade is
//! advanced (possibly switching the current screen), then the active screen
//! runs its own logic. Gameplay in turn runs the rule engine, the animation
//! sequencer, hidden mode and the background rotator, in that order.
//!
//! The current screen only ever changes on the peak tick of a fade, and a new
//! fade cannot start until the previous one has fully faded back in.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::animation::AnimationSequencer;
use crate::background::BackgroundRotator;
use crate::board::MatchOutcome;
use crate::board::layout::{self, Button};
use crate::clock::Countdown;
use crate::config::GameConfig;
use crate::cue::{Cue, CueQueue};
use crate::error::ConfigError;
use crate::fade::Fade;
use crate::hidden::HiddenMode;
use crate::input::{InputFrame, InputState};
use crate::session::{ClickOutcome, GameSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Screen {
    Intro,
    Menu,
    Gameplay,
    Win,
    Loss,
    Help,
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::Intro => "intro",
            Screen::Menu => "menu",
            Screen::Gameplay => "gameplay",
            Screen::Win => "win",
            Screen::Loss => "loss",
            Screen::Help => "help",
        }
    }
}

pub struct Game<R = SmallRng> {
    config: GameConfig,
    rng: R,
    input: InputState,
    screen: Screen,
    fade: Fade,
    intro: Countdown,
    intro_over: bool,
    intro_cue_played: bool,
    help_page: usize,
    session: GameSession,
    highlighted: Option<usize>,
    hidden: HiddenMode,
    animations: AnimationSequencer,
    background: BackgroundRotator,
    end_cue_played: bool,
    cues: CueQueue,
    ticks: u64,
}

impl Game<SmallRng> {
    /// Seeds a `SmallRng` from `config.seed`, or from OS / browser entropy when unset.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => entropy_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let session = GameSession::new(&mut rng);
        Ok(Self {
            input: InputState::default(),
            screen: Screen::Intro,
            fade: Fade::new(config.fade_ticks),
            intro: Countdown::new(config.intro_ticks),
            intro_over: false,
            intro_cue_played: false,
            help_page: 0,
            session,
            highlighted: None,
            hidden: HiddenMode::new(config.hidden_ticks, config.hidden_count),
            animations: AnimationSequencer::new(config.animations.clone()),
            background: BackgroundRotator::new(
                config.background_dwell_ticks,
                config.background_fade_ticks,
                config.background_base_opacity,
                config.background_count,
            ),
            end_cue_played: false,
            cues: CueQueue::default(),
            ticks: 0,
            config,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn fade(&self) -> &Fade {
        &self.fade
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Replaces the running game, e.g. with a scripted deal. Selection,
    /// animation and end-of-game bookkeeping restart as for a new game.
    pub fn set_session(&mut self, session: GameSession) {
        self.session = session;
        self.reset_game_bookkeeping();
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn help_page(&self) -> usize {
        self.help_page
    }

    pub fn hidden(&self) -> &HiddenMode {
        &self.hidden
    }

    pub fn animations(&self) -> &AnimationSequencer {
        &self.animations
    }

    pub fn background(&self) -> &BackgroundRotator {
        &self.background
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Buttons drawn (and clickable) on the current screen.
    pub fn visible_buttons(&self) -> Vec<Button> {
        match self.screen {
            Screen::Intro | Screen::Gameplay => Vec::new(),
            Screen::Menu => vec![Button::Start, Button::Help, Button::Hidden],
            Screen::Win | Screen::Loss => vec![Button::Menu],
            Screen::Help if self.on_last_help_page() => vec![Button::Back],
            Screen::Help => vec![Button::Back, Button::Next],
        }
    }

    /// Advances the whole game by one tick and returns the cues raised.
    pub fn tick(&mut self, frame: InputFrame) -> Vec<Cue> {
        self.input.refresh(frame);
        if !self.intro_cue_played {
            self.intro_cue_played = true;
            self.cues.push(Cue::Intro);
        }

        if let Some(destination) = self.fade.update() {
            tracing::debug!(from = self.screen.name(), to = destination.name(), "screen switched");
            self.screen = destination;
        }

        match self.screen {
            Screen::Intro => self.update_intro(),
            Screen::Menu => self.update_menu(),
            Screen::Gameplay => self.update_gameplay(),
            Screen::Win => self.update_end_screen(Cue::Win),
            Screen::Loss => self.update_end_screen(Cue::Loss),
            Screen::Help => self.update_help(),
        }

        self.ticks += 1;
        self.cues.take()
    }

    /// Starts a fade toward `destination`; false if one is already running.
    pub fn request_transition(&mut self, destination: Screen) -> bool {
        let accepted = self.fade.request(destination);
        if accepted {
            tracing::debug!(from = self.screen.name(), to = destination.name(), "fade started");
        }
        accepted
    }

    /// Deals a fresh shuffled game.
    pub fn start_new_game(&mut self) {
        self.session = GameSession::new(&mut self.rng);
        self.reset_game_bookkeeping();
        tracing::info!(deck = self.session.deck().len(), "new game dealt");
    }

    fn reset_game_bookkeeping(&mut self) {
        self.highlighted = None;
        self.end_cue_played = false;
        self.animations.reset();
    }

    fn on_last_help_page(&self) -> bool {
        self.help_page + 1 >= self.config.help_pages
    }

    fn update_intro(&mut self) {
        if !self.intro_over && self.intro.tick() {
            self.intro_over = true;
            self.request_transition(Screen::Menu);
        }
    }

    fn update_menu(&mut self) {
        if self.input.clicked(Button::Start.rect()) && self.request_transition(Screen::Gameplay) {
            self.cues.push(Cue::Click);
            self.start_new_game();
        }
        if self.input.clicked(Button::Help.rect()) && self.request_transition(Screen::Help) {
            self.cues.push(Cue::Click);
            self.help_page = 0;
        }
        if self.input.clicked(Button::Hidden.rect()) {
            let enabled = self.hidden.toggle();
            tracing::debug!(enabled, "hidden mode toggled");
            self.cues.push(Cue::Click);
        }
    }

    fn update_gameplay(&mut self) {
        // a freshly started animation holds frame 0 until the next tick
        if !self.update_rules() {
            self.animations.update();
        }
        if !self.session.is_over() {
            self.hidden.update(&mut self.rng);
        }
        self.background.update();
    }

    /// Returns true when a match started a new animation this tick.
    fn update_rules(&mut self) -> bool {
        self.highlighted = None;
        if self.session.is_over() {
            return false;
        }
        self.highlighted = layout::slot_at(self.input.cursor());

        // Moves and end-of-game checks wait for the screen to settle so a
        // terminal transition can never be dropped by a running fade.
        if self.fade.is_active() {
            return false;
        }
        if self.session.check_loss() {
            self.request_transition(Screen::Loss);
            return false;
        }
        let Some(slot) = self.highlighted else {
            return false;
        };
        if !self.input.left_pressed() {
            return false;
        }
        match self.session.click_slot(slot) {
            ClickOutcome::Ignored => false,
            ClickOutcome::Swapped { .. }
            | ClickOutcome::Selected { .. }
            | ClickOutcome::Inert { .. } => {
                self.cues.push(Cue::Click);
                false
            }
            ClickOutcome::Mismatch { .. } => {
                self.cues.push(Cue::ErrorMatch);
                false
            }
            ClickOutcome::Matched { outcome: MatchOutcome::DeckExhausted, .. } => {
                self.request_transition(Screen::Win);
                false
            }
            ClickOutcome::Matched { outcome: MatchOutcome::Refilled, .. } => {
                let variant = self.rng.random_range(0..self.config.correct_cue_variants);
                self.cues.push(Cue::CorrectMatch { variant });
                self.animations.start()
            }
        }
    }

    fn update_end_screen(&mut self, cue: Cue) {
        if !self.end_cue_played {
            self.end_cue_played = true;
            self.cues.push(cue);
        }
        if self.input.clicked(Button::Menu.rect()) && self.request_transition(Screen::Menu) {
            self.cues.push(Cue::Click);
        }
    }

    fn update_help(&mut self) {
        if self.input.clicked(Button::Back.rect()) {
            if self.help_page == 0 {
                if self.request_transition(Screen::Menu) {
                    self.cues.push(Cue::Click);
                }
            } else {
                self.help_page -= 1;
                self.cues.push(Cue::Click);
            }
        }
        if self.input.clicked(Button::Next.rect()) && !self.on_last_help_page() {
            self.help_page += 1;
            self.cues.push(Cue::Click);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_rng() -> SmallRng {
    SmallRng::try_from_os_rng().unwrap_or_else(|err| {
        tracing::warn!(%err, "os entropy unavailable, seeding from the clock");
        SmallRng::seed_from_u64(clock_seed())
    })
}

#[cfg(target_arch = "wasm32")]
fn entropy_rng() -> SmallRng {
    let mut seed = <SmallRng as SeedableRng>::Seed::default();
    match getrandom::getrandom(seed.as_mut()) {
        Ok(()) => SmallRng::from_seed(seed),
        Err(err) => {
            tracing::warn!(%err, "crypto.getRandomValues unavailable, seeding from the clock");
            SmallRng::seed_from_u64(clock_seed())
        }
    }
}

// Last resort only: a clock reading is guessable.
#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now().to_bits())
        .unwrap_or(0)
}

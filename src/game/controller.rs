//! The game controller.
//!
//! Composes the deck, the sequencer and the interval timer into the
//! commands a front end issues. Commands that arrive in the wrong phase are
//! ignored rather than rejected, so duplicated or late input from the
//! rendering layer can never corrupt a game.
//!
//! ## Phases
//!
//! ```text
//! NotStarted --start_auto_play--> AutoPlaying <--pause/resume--> Paused
//!      |                               |                           |
//!      +------- deck exhausted --------+------> Finished <---------+
//! ```
//!
//! `tick` is the only place cards advance on their own. The caller invokes
//! it from its own loop; calling it more often only reduces latency.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::snapshot::GameSnapshot;
use crate::cards::{Card, CardSet};
use crate::core::clock::{Clock, MonotonicClock};
use crate::core::config::CallerConfig;
use crate::core::error::CallerError;
use crate::core::rng::GameRng;
use crate::sequence::{Deck, Sequencer};
use crate::timer::{IntervalTimer, TimerStatus};

const LOG_TARGET: &str = "loteria_caller::game";

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Dealt but auto-play not started. Manual advances are allowed.
    NotStarted,
    /// Cards advance whenever the timer expires.
    AutoPlaying,
    /// Auto-play suspended; the timer is frozen.
    Paused,
    /// Every card has been called.
    Finished,
}

/// Outcome of a command that may reveal a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// A new card is now current.
    Revealed(Card),
    /// The deck ran out; the game is now finished.
    Exhausted,
    /// Nothing happened (wrong phase, or the timer has not expired).
    Ignored,
}

impl Advance {
    /// The revealed card, if any.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            Advance::Revealed(card) => Some(card),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self, Advance::Revealed(_))
    }
}

/// Everything that belongs to one game. Cleared and re-dealt by `new_game`.
#[derive(Clone, Debug)]
struct GameState {
    deck: Deck,
    sequencer: Sequencer,
    timer: IntervalTimer,
    phase: GamePhase,
    total: usize,
}

impl GameState {
    fn deal(cards: &CardSet, rng: &mut GameRng, interval: Duration) -> Self {
        Self {
            deck: Deck::shuffled(cards, rng),
            sequencer: Sequencer::new(),
            timer: IntervalTimer::new(interval),
            phase: GamePhase::NotStarted,
            total: cards.len(),
        }
    }

    /// Start over with a fresh shuffle, keeping the configured interval.
    fn redeal(&mut self, cards: &CardSet, rng: &mut GameRng) {
        self.deck = Deck::shuffled(cards, rng);
        self.sequencer.reset();
        self.timer.stop();
        self.phase = GamePhase::NotStarted;
        self.total = cards.len();
    }
}

/// Drives one caller session.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use loteria_caller::cards::{CardSetProvider, StandardDeck};
/// use loteria_caller::core::{CallerConfig, ManualClock};
/// use loteria_caller::game::{GameController, GamePhase};
///
/// let cards = StandardDeck::default().load().unwrap();
/// let clock = ManualClock::new();
/// let config = CallerConfig::default().with_seed(7).with_interval_ms(5_000);
/// let mut game = GameController::new(config, clock.clone(), &cards).unwrap();
///
/// game.start_auto_play();
/// assert_eq!(game.history().len(), 1);
///
/// clock.advance(Duration::from_secs(5));
/// assert!(game.tick().is_revealed());
/// assert_eq!(game.history().len(), 2);
/// assert_eq!(game.phase(), GamePhase::AutoPlaying);
/// ```
#[derive(Debug)]
pub struct GameController<C: Clock = MonotonicClock> {
    clock: C,
    rng: GameRng,
    state: GameState,
}

impl<C: Clock> GameController<C> {
    /// Build a controller and deal the first game from `cards`.
    pub fn new(config: CallerConfig, clock: C, cards: &CardSet) -> Result<Self, CallerError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let state = GameState::deal(cards, &mut rng.fork(), config.interval());
        info!(
            target: LOG_TARGET,
            seed = rng.seed(),
            cards = cards.len(),
            interval_ms = config.interval_ms,
            "caller ready"
        );
        Ok(Self { clock, rng, state })
    }

    /// Throw away the current game and deal a new one.
    ///
    /// The interval carries over from the previous game.
    pub fn new_game(&mut self, cards: &CardSet) {
        self.state.redeal(cards, &mut self.rng.fork());
        info!(target: LOG_TARGET, cards = cards.len(), "new game");
    }

    /// Reveal the next card.
    ///
    /// Allowed in every phase except `Finished`. Re-arms the timer for the
    /// new card; while paused the fresh interval stays frozen until
    /// `resume`. An empty deck finishes the game.
    pub fn manual_advance(&mut self) -> Advance {
        if self.state.phase == GamePhase::Finished {
            self.ignored("manual_advance");
            return Advance::Ignored;
        }

        let now = self.clock.now();
        let state = &mut self.state;
        match state.sequencer.advance(&mut state.deck) {
            Some(card) => {
                let card = card.clone();
                state.timer.start(now);
                if state.phase == GamePhase::Paused {
                    state.timer.pause(now);
                }
                debug!(
                    target: LOG_TARGET,
                    card = %card,
                    called = state.sequencer.revealed(),
                    left = state.deck.len(),
                    "card called"
                );
                Advance::Revealed(card)
            }
            None => {
                state.timer.stop();
                state.phase = GamePhase::Finished;
                info!(target: LOG_TARGET, called = state.sequencer.revealed(), "deck exhausted");
                Advance::Exhausted
            }
        }
    }

    /// Begin (or continue) auto-play.
    ///
    /// From `NotStarted`, reveals the first card if none is showing yet.
    /// From `Paused`, behaves like `resume`. Returns whether the command
    /// applied.
    pub fn start_auto_play(&mut self) -> bool {
        match self.state.phase {
            GamePhase::NotStarted => {
                if self.state.sequencer.current().is_none() {
                    if let Advance::Exhausted = self.manual_advance() {
                        return true;
                    }
                }
                self.state.phase = GamePhase::AutoPlaying;
                debug!(target: LOG_TARGET, "auto-play started");
                true
            }
            GamePhase::Paused => self.resume(),
            GamePhase::AutoPlaying | GamePhase::Finished => {
                self.ignored("start_auto_play");
                false
            }
        }
    }

    /// Suspend auto-play. Only applies while auto-playing.
    pub fn pause(&mut self) -> bool {
        if self.state.phase != GamePhase::AutoPlaying {
            self.ignored("pause");
            return false;
        }
        let now = self.clock.now();
        self.state.timer.pause(now);
        self.state.phase = GamePhase::Paused;
        debug!(target: LOG_TARGET, remaining_ms = self.remaining_ms(), "paused");
        true
    }

    /// Continue auto-play. Only applies while paused.
    pub fn resume(&mut self) -> bool {
        if self.state.phase != GamePhase::Paused {
            self.ignored("resume");
            return false;
        }
        let now = self.clock.now();
        self.state.timer.resume(now);
        self.state.phase = GamePhase::AutoPlaying;
        debug!(target: LOG_TARGET, remaining_ms = self.remaining_ms(), "resumed");
        true
    }

    /// Change the auto-play interval.
    ///
    /// A running timer restarts against the new interval immediately; a
    /// paused or idle one picks it up on its next start.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), CallerError> {
        if interval.is_zero() {
            return Err(CallerError::ZeroInterval);
        }
        let now = self.clock.now();
        self.state.timer.set_duration(interval, now);
        debug!(
            target: LOG_TARGET,
            interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
            "interval changed"
        );
        Ok(())
    }

    /// Advance automatically if auto-playing and the timer has expired.
    pub fn tick(&mut self) -> Advance {
        if self.state.phase != GamePhase::AutoPlaying {
            return Advance::Ignored;
        }
        if !self.state.timer.expired(self.clock.now()) {
            return Advance::Ignored;
        }
        self.manual_advance()
    }

    fn ignored(&self, command: &'static str) {
        debug!(target: LOG_TARGET, command, phase = ?self.state.phase, "command ignored");
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// The card on display.
    #[must_use]
    pub fn current(&self) -> Option<&Card> {
        self.state.sequencer.current()
    }

    /// Called cards, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Card> {
        self.state.sequencer.history()
    }

    /// Cards not yet called.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.state.deck
    }

    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.state.deck.len()
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.state.total
    }

    /// Configured auto-play interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.state.timer.duration()
    }

    /// Time until the next automatic advance.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.state.timer.remaining(self.clock.now())
    }

    #[must_use]
    pub fn remaining_ms(&self) -> u64 {
        u64::try_from(self.remaining().as_millis()).unwrap_or(u64::MAX)
    }

    /// Fraction of the current interval used up.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.timer.progress(self.clock.now())
    }

    #[must_use]
    pub fn timer_status(&self) -> TimerStatus {
        self.state.timer.status(self.clock.now())
    }

    /// Auto-play is on and not paused.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::AutoPlaying
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state.phase == GamePhase::Paused
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.phase == GamePhase::Finished
    }

    /// Read model for the rendering layer.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.state.phase,
            timer: self.timer_status(),
            current: self.current().cloned(),
            history: self.history().clone(),
            cards_left: self.cards_left(),
            total_cards: self.total_cards(),
            remaining_ms: self.remaining_ms(),
            interval_ms: u64::try_from(self.interval().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::clock::ManualClock;

    fn cards(n: u32) -> CardSet {
        CardSet::new(
            (1..=n)
                .map(|i| Card::new(CardId::new(i), format!("Card {i}"), format!("{i}.png")))
                .collect(),
        )
        .unwrap()
    }

    fn controller(n: u32, interval_ms: u64) -> (GameController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let config = CallerConfig::default()
            .with_seed(11)
            .with_interval_ms(interval_ms);
        let game = GameController::new(config, clock.clone(), &cards(n)).unwrap();
        (game, clock)
    }

    #[test]
    fn test_new_controller_is_dealt() {
        let (game, _) = controller(5, 1_000);
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert_eq!(game.cards_left(), 5);
        assert_eq!(game.total_cards(), 5);
        assert!(game.current().is_none());
        assert!(game.history().is_empty());
        assert_eq!(game.timer_status(), TimerStatus::Idle);
    }

    #[test]
    fn test_zero_interval_config_rejected() {
        let config = CallerConfig::default().with_interval_ms(0);
        let result = GameController::new(config, ManualClock::new(), &cards(3));
        assert!(matches!(result, Err(CallerError::ZeroInterval)));
    }

    #[test]
    fn test_manual_advance_without_auto_play() {
        let (mut game, _) = controller(3, 1_000);
        let first = game.manual_advance();
        assert!(first.is_revealed());
        assert_eq!(game.current(), first.card());
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert_eq!(game.timer_status(), TimerStatus::Running);
    }

    #[test]
    fn test_manual_advance_while_paused_keeps_timer_frozen() {
        let (mut game, clock) = controller(3, 1_000);
        game.start_auto_play();
        clock.advance_ms(600);
        game.pause();

        clock.advance_ms(300);
        assert!(game.manual_advance().is_revealed());
        assert_eq!(game.phase(), GamePhase::Paused);
        assert_eq!(game.timer_status(), TimerStatus::Paused);

        clock.advance_ms(5_000);
        assert_eq!(game.remaining(), Duration::from_millis(1_000));
    }

    #[test]
    fn test_start_from_paused_resumes() {
        let (mut game, clock) = controller(3, 1_000);
        game.start_auto_play();
        game.pause();
        clock.advance_ms(400);

        assert!(game.start_auto_play());
        assert_eq!(game.phase(), GamePhase::AutoPlaying);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.remaining(), Duration::from_millis(1_000));
    }

    #[test]
    fn test_start_twice_ignored() {
        let (mut game, _) = controller(3, 1_000);
        assert!(game.start_auto_play());
        assert!(!game.start_auto_play());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_pause_resume_only_in_valid_phases() {
        let (mut game, _) = controller(3, 1_000);
        assert!(!game.pause());
        assert!(!game.resume());

        game.start_auto_play();
        assert!(!game.resume());
        assert!(game.pause());
        assert!(!game.pause());
        assert!(game.resume());
    }

    #[test]
    fn test_set_interval_zero_rejected() {
        let (mut game, _) = controller(3, 1_000);
        assert!(matches!(
            game.set_interval(Duration::ZERO),
            Err(CallerError::ZeroInterval)
        ));
        assert_eq!(game.interval(), Duration::from_millis(1_000));
    }

    #[test]
    fn test_new_game_keeps_interval() {
        let (mut game, _) = controller(3, 1_000);
        game.start_auto_play();
        game.set_interval(Duration::from_millis(2_500)).unwrap();

        game.new_game(&cards(4));
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert_eq!(game.interval(), Duration::from_millis(2_500));
        assert_eq!(game.total_cards(), 4);
        assert!(game.history().is_empty());
        assert_eq!(game.timer_status(), TimerStatus::Idle);
    }

    #[test]
    fn test_new_game_mid_play_clears_call_state() {
        let (mut game, clock) = controller(4, 1_000);
        game.start_auto_play();
        clock.advance_ms(1_000);
        assert!(game.tick().is_revealed());
        game.pause();

        game.new_game(&cards(3));
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert!(game.current().is_none());
        assert!(game.history().is_empty());
        assert_eq!(game.cards_left(), 3);
        assert_eq!(game.timer_status(), TimerStatus::Idle);
        assert_eq!(game.remaining(), Duration::from_millis(1_000));

        clock.advance_ms(5_000);
        assert_eq!(game.tick(), Advance::Ignored);
        assert!(game.start_auto_play());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history().len() + game.cards_left(), 3);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let (mut game, clock) = controller(3, 1_000);
        game.start_auto_play();
        clock.advance_ms(250);

        let snap = game.snapshot();
        assert_eq!(snap.phase, GamePhase::AutoPlaying);
        assert_eq!(snap.timer, TimerStatus::Running);
        assert_eq!(snap.current.as_ref(), game.current());
        assert_eq!(snap.history.len(), 1);
        assert_eq!(snap.cards_left, 2);
        assert_eq!(snap.total_cards, 3);
        assert_eq!(snap.remaining_ms, 750);
        assert_eq!(snap.interval_ms, 1_000);
    }
}

//! The carousel state machine: explicit state, events in, commands out.
//!
//! [`CarouselController`] is a pure reducer. It owns the [`CarouselState`],
//! consumes [`CarouselEvent`]s, and emits [`Command`]s for an effectful
//! shell to execute (arm or disarm the rotation timer, schedule the unlock,
//! navigate). It never touches a clock or a channel itself, which is what
//! makes every transition testable without a runtime.

use std::time::Duration;

use tracing::debug;

use crate::constants::LOCK_DURATION;
use crate::lock::TransitionLock;
use crate::rejection::Rejection;
use crate::types::{SlideId, SlideLike};

/// External and internal stimuli the reducer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Timer-driven rotation to `(active + 1) % len`.
    Advance,
    /// User-driven rotation to a specific index; disables autoplay.
    Select(usize),
    /// Flip the autoplay flag; never touches the active slide or the lock.
    ToggleAutoplay,
    /// The transition lock's timed release fired.
    UnlockElapsed {
        /// Generation the unlock was scheduled for; stale generations are
        /// ignored.
        generation: u64,
    },
    /// The deck was replaced or resized; resolves Empty/Running.
    DeckChanged,
    /// Explicit "shop this slide" selection; a navigation side effect
    /// distinct from rotation.
    Shop(usize),
}

/// Effects the shell must carry out after an accepted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fire [`CarouselEvent::UnlockElapsed`] with this generation after
    /// `after` has elapsed.
    ScheduleUnlock {
        /// Lock generation to release.
        generation: u64,
        /// Exactly the visual transition duration.
        after: Duration,
    },
    /// Cancel a pending unlock timer, if any; its generation is stale.
    CancelUnlock,
    /// Start (or restart) the recurring autoplay timer.
    ArmRotation,
    /// Stop the recurring autoplay timer.
    DisarmRotation,
    /// Navigate to the given slide's destination.
    Navigate(SlideId),
}

/// Mutable carousel fields while the deck is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningState {
    /// Currently focal slide, always `< len`.
    pub active: usize,
    /// Focal slide before the most recent rotation.
    pub last: usize,
    /// Whether the rotation timer should be armed.
    pub autoplay: bool,
    /// Slide crossing the seam into view during the current transition;
    /// cleared by the same unlock that releases the transition lock.
    pub entering: Option<SlideId>,
}

impl RunningState {
    fn starting() -> Self {
        Self {
            active: 0,
            last: 0,
            autoplay: true,
            entering: None,
        }
    }
}

/// Carousel display state: a terminal Empty state while the deck has no
/// slides, Running otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselState {
    /// No slides; every rotation request is rejected.
    Empty,
    /// At least one slide; `active` is always a valid index.
    Running(RunningState),
}

/// Owns the [`CarouselState`] and the [`TransitionLock`], and is their only
/// mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselController {
    pub(crate) state: CarouselState,
    pub(crate) lock: TransitionLock,
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselController {
    /// A controller in the Empty state with an idle lock.
    pub fn new() -> Self {
        Self {
            state: CarouselState::Empty,
            lock: TransitionLock::default(),
        }
    }

    /// Current display state.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Focal slide index, when Running.
    pub fn active_index(&self) -> Option<usize> {
        match &self.state {
            CarouselState::Running(run) => Some(run.active),
            CarouselState::Empty => None,
        }
    }

    /// Focal slide index before the most recent rotation, when Running.
    pub fn last_index(&self) -> Option<usize> {
        match &self.state {
            CarouselState::Running(run) => Some(run.last),
            CarouselState::Empty => None,
        }
    }

    /// Whether autoplay rotation is enabled (`false` while Empty).
    pub fn autoplay(&self) -> bool {
        matches!(&self.state, CarouselState::Running(run) if run.autoplay)
    }

    /// The slide flagged as entering across the seam, if a wrap-crossing
    /// transition is in flight.
    pub fn entering(&self) -> Option<SlideId> {
        match &self.state {
            CarouselState::Running(run) => run.entering,
            CarouselState::Empty => None,
        }
    }

    /// Whether a transition is currently in flight.
    pub fn is_transitioning(&self) -> bool {
        self.lock.is_locked()
    }

    /// Reduce one event against the current deck.
    ///
    /// `Ok` carries the commands the shell must execute; `Err` means the
    /// request was dropped and the state is unchanged. This function is
    /// total: nothing in here panics on caller input.
    pub fn apply<S: SlideLike>(
        &mut self,
        deck: &[S],
        event: CarouselEvent,
    ) -> Result<Vec<Command>, Rejection> {
        match event {
            CarouselEvent::Advance => self.advance(deck),
            CarouselEvent::Select(index) => self.select(deck, index),
            CarouselEvent::ToggleAutoplay => Ok(self.toggle_autoplay()),
            CarouselEvent::UnlockElapsed { generation } => Ok(self.unlock(generation)),
            CarouselEvent::DeckChanged => Ok(self.deck_changed(deck.len())),
            CarouselEvent::Shop(index) => self.shop(deck, index),
        }
    }

    fn advance<S: SlideLike>(&mut self, deck: &[S]) -> Result<Vec<Command>, Rejection> {
        let len = deck.len();
        let CarouselState::Running(run) = &mut self.state else {
            return Err(Rejection::EmptyDeck);
        };
        if self.lock.is_locked() {
            return Err(Rejection::TransitionInFlight);
        }
        if len == 0 {
            return Err(Rejection::EmptyDeck);
        }

        let next = (run.active + 1) % len;
        let wrap = run.active == len - 1;
        if wrap {
            run.entering = Some(deck[0].slide_id());
        }
        run.last = run.active;
        run.active = next;
        let generation = self.lock.acquire();
        debug!(from = run.last, to = run.active, wrap = wrap, "advance accepted");
        Ok(vec![Command::ScheduleUnlock {
            generation,
            after: LOCK_DURATION,
        }])
    }

    fn select<S: SlideLike>(
        &mut self,
        deck: &[S],
        index: usize,
    ) -> Result<Vec<Command>, Rejection> {
        let len = deck.len();
        let CarouselState::Running(run) = &mut self.state else {
            return Err(Rejection::EmptyDeck);
        };
        if self.lock.is_locked() {
            return Err(Rejection::TransitionInFlight);
        }
        if len == 0 {
            return Err(Rejection::EmptyDeck);
        }
        if index >= len {
            return Err(Rejection::InvalidIndex { index, len });
        }

        // A seam crossing in either direction flags the target for the
        // entering treatment.
        let wrap = (run.active == len - 1 && index == 0)
            || (run.active == 0 && index == len - 1);
        if wrap {
            run.entering = Some(deck[index].slide_id());
        }
        run.last = run.active;
        run.active = index;
        run.autoplay = false;
        let generation = self.lock.acquire();
        debug!(from = run.last, to = run.active, wrap = wrap, "selection accepted");
        Ok(vec![
            Command::ScheduleUnlock {
                generation,
                after: LOCK_DURATION,
            },
            Command::DisarmRotation,
        ])
    }

    fn toggle_autoplay(&mut self) -> Vec<Command> {
        match &mut self.state {
            CarouselState::Running(run) => {
                run.autoplay = !run.autoplay;
                debug!(autoplay = run.autoplay, "autoplay toggled");
                if run.autoplay {
                    vec![Command::ArmRotation]
                } else {
                    vec![Command::DisarmRotation]
                }
            }
            // Nothing to arm; the flag resets when a deck arrives.
            CarouselState::Empty => Vec::new(),
        }
    }

    fn unlock(&mut self, generation: u64) -> Vec<Command> {
        if self.lock.release(generation) {
            if let CarouselState::Running(run) = &mut self.state {
                run.entering = None;
            }
        }
        Vec::new()
    }

    fn deck_changed(&mut self, len: usize) -> Vec<Command> {
        if len == 0 {
            if matches!(self.state, CarouselState::Running(_)) {
                self.state = CarouselState::Empty;
                self.lock.revoke();
                debug!("deck emptied, carousel reset");
                return vec![Command::CancelUnlock, Command::DisarmRotation];
            }
            return Vec::new();
        }

        let CarouselState::Running(run) = &mut self.state else {
            self.state = CarouselState::Running(RunningState::starting());
            debug!(len, "deck arrived, carousel running");
            return vec![Command::ArmRotation];
        };
        // Resize while running: keep the user's position, clamped into the
        // new range.
        if run.active >= len {
            run.active = len - 1;
        }
        if run.last >= len {
            run.last = len - 1;
        }
        Vec::new()
    }

    fn shop<S: SlideLike>(&self, deck: &[S], index: usize) -> Result<Vec<Command>, Rejection> {
        if deck.is_empty() || matches!(self.state, CarouselState::Empty) {
            return Err(Rejection::EmptyDeck);
        }
        if index >= deck.len() {
            return Err(Rejection::InvalidIndex {
                index,
                len: deck.len(),
            });
        }
        // Deliberately independent of the transition lock: shopping a slide
        // is navigation, not rotation.
        Ok(vec![Command::Navigate(deck[index].slide_id())])
    }
}

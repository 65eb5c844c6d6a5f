//! The showcase driver: single owner of the carousel state and its timers.

use tokio::sync::mpsc;
use tracing::trace;

use vitrine_engine::controller::{
    CarouselController, CarouselEvent, CarouselState, Command,
};
use vitrine_engine::plan::RenderPlan;
use vitrine_engine::types::{SlideId, SlideLike};

use crate::handle::TimerHandle;
use crate::scheduler::RotationScheduler;

/// Drives a carousel: owns the deck, the controller, the event queue, the
/// rotation scheduler, and the pending unlock timer.
///
/// All stimuli funnel through one unbounded queue. User-facing methods
/// ([`select`](Self::select), [`toggle_autoplay`](Self::toggle_autoplay),
/// [`shop`](Self::shop)) dispatch synchronously; timer events (autoplay
/// ticks, unlock firings) arrive on the queue and are consumed by
/// [`pump`](Self::pump) or [`drain`](Self::drain). Dropping the showcase
/// aborts both timers, so nothing fires into a destroyed carousel.
///
/// Must be constructed inside a tokio runtime: a non-empty deck arms the
/// autoplay timer immediately.
#[derive(Debug)]
pub struct Showcase<S: SlideLike> {
    deck: Vec<S>,
    controller: CarouselController,
    events: mpsc::UnboundedSender<CarouselEvent>,
    inbox: mpsc::UnboundedReceiver<CarouselEvent>,
    scheduler: RotationScheduler,
    unlock: Option<TimerHandle>,
}

impl<S: SlideLike> Showcase<S> {
    /// Build a showcase over `deck`; a non-empty deck starts Running at
    /// index 0 with autoplay armed.
    pub fn new(deck: Vec<S>) -> Self {
        let (events, inbox) = mpsc::unbounded_channel();
        let scheduler = RotationScheduler::new(events.clone());
        let mut showcase = Self {
            deck,
            controller: CarouselController::new(),
            events,
            inbox,
            scheduler,
            unlock: None,
        };
        showcase.dispatch(CarouselEvent::DeckChanged);
        showcase
    }

    /// Replace the deck; resolves the Empty/Running transition and clamps
    /// the active index if the deck shrank.
    pub fn set_deck(&mut self, deck: Vec<S>) {
        self.deck = deck;
        self.dispatch(CarouselEvent::DeckChanged);
    }

    /// User selection of a specific slide; disables autoplay when accepted.
    pub fn select(&mut self, index: usize) {
        self.dispatch(CarouselEvent::Select(index));
    }

    /// Flip autoplay; arms or disarms the rotation scheduler.
    pub fn toggle_autoplay(&mut self) {
        self.dispatch(CarouselEvent::ToggleAutoplay);
    }

    /// Explicit "shop this slide" selection; returns the navigation target
    /// when accepted. Independent of rotation and of the transition lock.
    pub fn shop(&mut self, index: usize) -> Option<SlideId> {
        self.dispatch(CarouselEvent::Shop(index))
    }

    /// Current deck.
    pub fn deck(&self) -> &[S] {
        &self.deck
    }

    /// The underlying controller, for state inspection.
    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    /// Current display state.
    pub fn state(&self) -> &CarouselState {
        self.controller.state()
    }

    /// Derive this frame's render hints.
    pub fn plan(&self) -> RenderPlan {
        self.controller.plan(&self.deck)
    }

    /// Whether the autoplay timer is currently armed.
    pub fn autoplay_armed(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Await and process the next queued timer event.
    pub async fn pump(&mut self) {
        // recv never yields None: we hold a sender for the timers.
        if let Some(event) = self.inbox.recv().await {
            self.dispatch(event);
        }
    }

    /// Process one queued event if any; returns whether one was processed.
    pub fn try_pump(&mut self) -> bool {
        match self.inbox.try_recv() {
            Ok(event) => {
                self.dispatch(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Process every queued event; returns how many were processed.
    pub fn drain(&mut self) -> usize {
        let mut processed = 0;
        while self.try_pump() {
            processed += 1;
        }
        processed
    }

    fn dispatch(&mut self, event: CarouselEvent) -> Option<SlideId> {
        match self.controller.apply(&self.deck, event) {
            Ok(commands) => {
                let mut navigation = None;
                for command in commands {
                    if let Some(target) = self.execute(command) {
                        navigation = Some(target);
                    }
                }
                navigation
            }
            Err(rejection) => {
                // Expected under timer/click races; lossless and quiet.
                trace!(%rejection, "carousel request rejected");
                None
            }
        }
    }

    fn execute(&mut self, command: Command) -> Option<SlideId> {
        match command {
            Command::ScheduleUnlock { generation, after } => {
                let events = self.events.clone();
                self.unlock = Some(TimerHandle::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = events.send(CarouselEvent::UnlockElapsed { generation });
                }));
                None
            }
            Command::CancelUnlock => {
                self.unlock = None;
                None
            }
            Command::ArmRotation => {
                self.scheduler.arm();
                None
            }
            Command::DisarmRotation => {
                self.scheduler.disarm();
                None
            }
            Command::Navigate(target) => Some(target),
        }
    }
}

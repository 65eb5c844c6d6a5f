//! Autoplay cadence: a recurring timer that requests one advance per period.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::trace;

use vitrine_engine::constants::ROTATION_PERIOD;
use vitrine_engine::controller::CarouselEvent;

use crate::handle::TimerHandle;

/// Owns the optional recurring autoplay timer.
///
/// Armed only while autoplay is enabled and the deck is non-empty; the
/// driver arms and disarms it in response to the reducer's commands. Each
/// firing submits exactly one [`CarouselEvent::Advance`] into the event
/// queue, where it is subject to the transition lock like any other
/// rotation request. Disarming aborts the timer task, so it can never fire
/// after teardown.
#[derive(Debug)]
pub struct RotationScheduler {
    events: mpsc::UnboundedSender<CarouselEvent>,
    period: Duration,
    timer: Option<TimerHandle>,
}

impl RotationScheduler {
    /// A disarmed scheduler submitting into `events` at the standard
    /// [`ROTATION_PERIOD`].
    pub fn new(events: mpsc::UnboundedSender<CarouselEvent>) -> Self {
        Self::with_period(events, ROTATION_PERIOD)
    }

    /// A disarmed scheduler with a custom period.
    pub fn with_period(
        events: mpsc::UnboundedSender<CarouselEvent>,
        period: Duration,
    ) -> Self {
        Self {
            events,
            period,
            timer: None,
        }
    }

    /// Whether the recurring timer is currently running.
    pub fn is_armed(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Start the recurring timer, replacing any previous one.
    ///
    /// The first tick fires one full period from now, not immediately.
    pub fn arm(&mut self) {
        self.disarm();
        let events = self.events.clone();
        let period = self.period;
        trace!(?period, "rotation scheduler armed");
        self.timer = Some(TimerHandle::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut ticker = tokio::time::interval_at(start, period);
            // A stalled consumer should not be hit with a burst of catch-up
            // advances once it resumes.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if events.send(CarouselEvent::Advance).is_err() {
                    break;
                }
            }
        }));
    }

    /// Tear the timer down; nothing fires afterwards.
    pub fn disarm(&mut self) {
        if self.timer.take().is_some() {
            trace!("rotation scheduler disarmed");
        }
    }
}

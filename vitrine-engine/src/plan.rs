//! Per-frame render hints derived from the carousel state.
//!
//! The plan is recomputed on demand from state alone, in the same spirit as
//! the classification it wraps; nothing here is cached between frames.

use crate::controller::{CarouselController, CarouselState};
use crate::position::{SlotClass, classify, offset};
use crate::types::{SlideId, SlideLike};
use crate::window::visible_indices;

/// Render hints for one materialized slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPlan {
    /// Deck index of the slide in this slot.
    pub index: usize,
    /// Identity of the slide in this slot.
    pub slide: SlideId,
    /// Position classification relative to the active slide.
    pub class: SlotClass,
    /// Whether this slide is crossing the seam into view and gets the
    /// entering transition treatment.
    pub entering: bool,
}

/// Everything the display layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Materialized slots, deduplicated, in window order.
    pub slots: Vec<SlotPlan>,
    /// Drives the autoplay control affordance.
    pub autoplay: bool,
    /// Whether a rotation is currently in flight.
    pub transitioning: bool,
}

impl RenderPlan {
    /// The plan for an empty deck: nothing to render.
    pub fn empty() -> Self {
        Self {
            slots: Vec::new(),
            autoplay: false,
            transitioning: false,
        }
    }
}

impl CarouselController {
    /// Derive the render plan for the current state against `deck`.
    pub fn plan<S: SlideLike>(&self, deck: &[S]) -> RenderPlan {
        let CarouselState::Running(run) = &self.state else {
            return RenderPlan::empty();
        };
        if deck.is_empty() {
            return RenderPlan::empty();
        }

        let len = deck.len();
        let active = run.active.min(len - 1);
        let slots = visible_indices(len, active)
            .into_iter()
            .map(|index| {
                let slide = deck[index].slide_id();
                SlotPlan {
                    index,
                    slide,
                    class: classify(offset(len, active, index)),
                    entering: run.entering == Some(slide),
                }
            })
            .collect();

        RenderPlan {
            slots,
            autoplay: run.autoplay,
            transitioning: self.lock.is_locked(),
        }
    }
}

//! Pure positioning and transition engine for the Vitrine showcase carousel.
//!
//! A Vitrine carousel presents a bounded deck of slides as an endless loop:
//! rotation wraps from the last slide back to the first in either direction,
//! advances on an autoplay cadence, and responds to direct selection. The
//! engine in this crate is the decision core behind that behavior. It is
//! entirely synchronous and side-effect free:
//!
//! - [`position`] maps any slide index to its signed shortest-path offset
//!   from the active slide and classifies it into a display slot.
//! - [`window`] derives the set of indices that must be materialized for
//!   rendering, padded across the wrap seam so nothing pops in mid-flight.
//! - [`lock`] is the mutual-exclusion state machine that keeps at most one
//!   rotation in flight at a time.
//! - [`controller`] composes the above into an explicit [`CarouselState`]
//!   plus a reducer over [`CarouselEvent`]s that returns [`Command`]s for an
//!   effectful shell to execute (timers, navigation).
//! - [`plan`] turns the current state into per-slot render hints.
//!
//! Timers, channels, and task scoping live in `vitrine-runtime`; everything
//! here can be tested without a runtime.

pub mod constants;
pub mod controller;
pub mod lock;
pub mod plan;
pub mod position;
pub mod rejection;
pub mod types;
pub mod window;

pub use controller::{
    CarouselController, CarouselEvent, CarouselState, Command, RunningState,
};
pub use lock::TransitionLock;
pub use plan::{RenderPlan, SlotPlan};
pub use position::{Side, SlotClass, classify, offset};
pub use rejection::Rejection;
pub use types::{Slide, SlideId, SlideLike};
pub use window::visible_indices;

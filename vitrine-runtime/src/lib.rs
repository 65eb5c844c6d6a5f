//! Tokio timer shell and driver for the Vitrine carousel engine.
//!
//! `vitrine-engine` is a pure reducer; this crate supplies the effects it
//! asks for. [`Showcase`] owns the deck and the controller, pumps every
//! stimulus through one event queue (scheduler ticks, user selections,
//! unlock timers), and executes the commands the reducer returns.
//! [`RotationScheduler`] provides the autoplay cadence and [`TimerHandle`]
//! guarantees that no timer outlives the state it was scoped to.
//!
//! The whole shell assumes a single logical thread of control: events are
//! discrete, operations are synchronous, and nothing blocks. Rejected
//! requests are dropped, never queued.

pub mod handle;
pub mod scheduler;
pub mod showcase;

pub use handle::TimerHandle;
pub use scheduler::RotationScheduler;
pub use showcase::Showcase;

pub use vitrine_engine as engine;

//! Rejection taxonomy for carousel requests.

/// Why a carousel request was dropped.
///
/// Rejections are information, not failures: every reducer operation is
/// total, and a rejected request simply leaves the state untouched.
/// [`Rejection::TransitionInFlight`] in particular is an expected, frequent
/// outcome of the race between the autoplay timer and user clicks, and is
/// never surfaced above `trace!` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// A selection referenced an index outside the deck; can originate from
    /// stale external references, so it is dropped rather than treated as
    /// fatal.
    #[error("index {index} out of range for deck of {len}")]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// Deck length at the time of the request.
        len: usize,
    },

    /// A rotation or shop request arrived while the deck was empty.
    #[error("deck is empty")]
    EmptyDeck,

    /// A rotation request arrived while another transition was in flight.
    #[error("a transition is already in flight")]
    TransitionInFlight,
}

//! Slide identity types and the trait seam toward caller-owned decks.

use uuid::Uuid;

/// Strongly typed ID for showcase slides.
///
/// Stable and unique within a deck; the engine never looks at a slide
/// beyond its id and ordinal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideId(pub Uuid);

impl Default for SlideId {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideId {
    /// Mint a fresh id.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Borrow the underlying uuid.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Copy out the underlying uuid.
    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for SlideId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Treats caller-owned slide types as opaque deck entries.
///
/// The engine only needs a stable identity per slide; everything else
/// (artwork, captions, prices) stays with the caller.
pub trait SlideLike {
    /// Stable identifier of this slide within its deck.
    fn slide_id(&self) -> SlideId;
}

/// Minimal owned slide for callers without their own slide type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    id: SlideId,
    /// Display payload; opaque to the engine.
    pub label: String,
}

impl Slide {
    /// Create a slide with a fresh id.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: SlideId::new(),
            label: label.into(),
        }
    }
}

impl SlideLike for Slide {
    fn slide_id(&self) -> SlideId {
        self.id
    }
}

impl SlideLike for SlideId {
    fn slide_id(&self) -> SlideId {
        *self
    }
}

//! End-to-end driver tests over a paused tokio clock.

use std::time::Duration;

use vitrine_engine::constants::{LOCK_DURATION, ROTATION_PERIOD};
use vitrine_engine::controller::CarouselState;
use vitrine_engine::types::{Slide, SlideLike};
use vitrine_runtime::Showcase;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn deck(len: usize) -> Vec<Slide> {
    (0..len).map(|i| Slide::new(format!("slide {i}"))).collect()
}

async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn autoplay_advances_on_cadence() {
    init_tracing();
    let mut showcase = Showcase::new(deck(5));
    assert_eq!(showcase.controller().active_index(), Some(0));
    assert!(showcase.autoplay_armed());

    // One period elapses: exactly one advance is queued and accepted.
    sleep_ms(ROTATION_PERIOD.as_millis() as u64 + 1).await;
    assert!(showcase.try_pump());
    assert_eq!(showcase.controller().active_index(), Some(1));
    assert!(showcase.controller().is_transitioning());

    // The lock releases on its own.
    sleep_ms(LOCK_DURATION.as_millis() as u64 + 1).await;
    assert!(showcase.try_pump());
    assert!(!showcase.controller().is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn timer_tick_loses_the_race_against_a_selection() {
    init_tracing();
    let mut showcase = Showcase::new(deck(5));

    // A tick is already queued when the user clicks: the click wins and
    // the tick lands as a silent no-op.
    sleep_ms(3001).await;
    showcase.select(3);
    assert_eq!(showcase.controller().active_index(), Some(3));
    assert!(showcase.try_pump());
    assert_eq!(showcase.controller().active_index(), Some(3));
    assert_eq!(showcase.controller().last_index(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn selection_disables_autoplay_but_unlock_still_fires() {
    // Scenario E: autoplay goes away mid-lock, the pending unlock does not.
    init_tracing();
    let mut showcase = Showcase::new(deck(5));
    showcase.select(2);
    assert!(showcase.controller().is_transitioning());
    assert!(!showcase.controller().autoplay());
    assert!(!showcase.autoplay_armed());

    sleep_ms(750).await;
    assert!(showcase.try_pump());
    assert!(!showcase.controller().is_transitioning());

    // No further rotation ever arrives.
    sleep_ms(10 * ROTATION_PERIOD.as_millis() as u64).await;
    assert!(!showcase.try_pump());
    assert_eq!(showcase.controller().active_index(), Some(2));
}

#[tokio::test(start_paused = true)]
async fn autoplay_loops_across_the_seam() {
    init_tracing();
    let slides = deck(3);
    let first_id = slides[0].slide_id();
    let mut showcase = Showcase::new(slides);

    // advance, unlock, advance, unlock, advance: 0 -> 1 -> 2 -> 0 (wrap).
    for _ in 0..5 {
        showcase.pump().await;
    }
    assert_eq!(showcase.controller().active_index(), Some(0));
    assert_eq!(showcase.controller().last_index(), Some(2));
    assert_eq!(showcase.controller().entering(), Some(first_id));

    let plan = showcase.plan();
    let entering: Vec<_> = plan.slots.iter().filter(|s| s.entering).collect();
    assert_eq!(entering.len(), 1);
    assert_eq!(entering[0].index, 0);

    // The unlock that ends the wrap transition clears the flag.
    showcase.pump().await;
    assert_eq!(showcase.controller().entering(), None);
    assert!(!showcase.controller().is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn toggle_rearms_the_scheduler() {
    init_tracing();
    let mut showcase = Showcase::new(deck(4));
    showcase.toggle_autoplay();
    assert!(!showcase.autoplay_armed());

    sleep_ms(10_000).await;
    assert!(!showcase.try_pump());
    assert_eq!(showcase.controller().active_index(), Some(0));

    showcase.toggle_autoplay();
    assert!(showcase.autoplay_armed());
    sleep_ms(3001).await;
    assert!(showcase.try_pump());
    assert_eq!(showcase.controller().active_index(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn emptied_deck_cancels_every_timer() {
    init_tracing();
    let mut showcase = Showcase::new(deck(3));
    showcase.select(1);
    assert!(showcase.controller().is_transitioning());

    showcase.set_deck(Vec::new());
    assert_eq!(showcase.state(), &CarouselState::Empty);
    assert!(!showcase.controller().is_transitioning());
    assert!(!showcase.autoplay_armed());

    // Neither the unlock nor the scheduler fires after the reset.
    sleep_ms(20_000).await;
    assert!(!showcase.try_pump());
    assert!(showcase.plan().slots.is_empty());
}

#[tokio::test(start_paused = true)]
async fn refilled_deck_restarts_from_zero() {
    init_tracing();
    let mut showcase = Showcase::new(deck(3));
    showcase.select(2);
    showcase.set_deck(Vec::new());

    showcase.set_deck(deck(4));
    assert_eq!(showcase.controller().active_index(), Some(0));
    assert!(showcase.controller().autoplay());
    assert!(showcase.autoplay_armed());

    sleep_ms(3001).await;
    assert!(showcase.try_pump());
    assert_eq!(showcase.controller().active_index(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn shop_returns_the_target_without_rotating() {
    init_tracing();
    let slides = deck(5);
    let third_id = slides[2].slide_id();
    let mut showcase = Showcase::new(slides);

    let target = showcase.shop(2);
    assert_eq!(target, Some(third_id));
    assert_eq!(showcase.controller().active_index(), Some(0));
    assert!(!showcase.controller().is_transitioning());

    // Out-of-range shop requests are dropped.
    assert_eq!(showcase.shop(42), None);
}

//! Teardown behavior of the processing sequence: an aborted run must go silent
//! immediately, and a superseded run must never touch the session again.

use std::time::Duration;

use cafe_storefront::lifecycle::Storefront;
use cafe_storefront::model::{house_menu, MenuItem};
use cafe_storefront::session_actor::{PhaseKind, SessionError, SessionEvent};
use tokio::time::advance;

fn menu_item(id: &str) -> MenuItem {
    house_menu()
        .into_iter()
        .find(|item| item.id == id)
        .expect("item missing from house menu")
}

/// Lets spawned timers and the actor drain after a clock jump.
async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// Cancel at stage 1: no later stage fires, no completion fires, no order is
/// produced, and the cart survives.
#[tokio::test(start_paused = true)]
async fn test_abort_cancels_pending_stages() {
    let (storefront, mut events) = Storefront::new();

    storefront.session.add_to_cart(menu_item("1")).await.unwrap();
    storefront.session.add_to_cart(menu_item("2")).await.unwrap();
    storefront.session.begin_checkout().await.unwrap();
    storefront.session.submit_checkout("Budi", "5").await.unwrap();

    // Run to just past stage 1 (1000 ms), then tear the run down.
    advance(Duration::from_millis(1200)).await;
    settle().await;
    storefront.session.abort_processing().await.unwrap();

    // Long past where stage 3 (3500 ms) and completion (4000 ms) would fire.
    advance(Duration::from_secs(10)).await;
    settle().await;

    let mut stages = Vec::new();
    while let Ok(event) = events.try_recv() {
        match event {
            SessionEvent::StageReached { stage, .. } => stages.push(stage),
            SessionEvent::OrderConfirmed(_) => panic!("aborted run must not confirm an order"),
        }
    }
    assert_eq!(stages, vec![0, 1]);

    // Back in checkout, cart untouched, no order anywhere.
    let snapshot = storefront.session.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, PhaseKind::Checkout);
    assert_eq!(snapshot.cart.total_price(), 40000);
    assert!(snapshot.current_order.is_none());

    storefront.shutdown().await.unwrap();
}

/// Aborting is only meaningful while processing.
#[tokio::test(start_paused = true)]
async fn test_abort_outside_processing_is_rejected() {
    let (storefront, _events) = Storefront::new();

    assert_eq!(
        storefront.session.abort_processing().await,
        Err(SessionError::InvalidPhase(PhaseKind::Browsing))
    );

    storefront.shutdown().await.unwrap();
}

/// A new run after an abort completes normally; everything observed after the
/// resubmission belongs to the new run.
#[tokio::test(start_paused = true)]
async fn test_resubmission_supersedes_aborted_run() {
    let (storefront, mut events) = Storefront::new();

    storefront.session.add_to_cart(menu_item("1")).await.unwrap();
    storefront.session.begin_checkout().await.unwrap();
    let first = storefront
        .session
        .submit_checkout("Budi", "5")
        .await
        .unwrap();

    advance(Duration::from_millis(1200)).await;
    settle().await;
    storefront.session.abort_processing().await.unwrap();

    // Drain what the first run emitted before the abort.
    while let Ok(event) = events.try_recv() {
        match event {
            SessionEvent::StageReached { run, .. } => assert_eq!(run, first),
            SessionEvent::OrderConfirmed(_) => panic!("aborted run must not confirm an order"),
        }
    }

    let second = storefront
        .session
        .submit_checkout("Budi", "5")
        .await
        .unwrap();
    assert_ne!(first, second);

    // The second run plays out in full: stages 0..=3, then the confirmation.
    let mut stages = Vec::new();
    let order = loop {
        match events.recv().await.unwrap() {
            SessionEvent::StageReached { run, stage, .. } => {
                assert_eq!(run, second);
                stages.push(stage);
            }
            SessionEvent::OrderConfirmed(order) => break order,
        }
    };
    assert_eq!(stages, vec![0, 1, 2, 3]);
    assert_eq!(order.total, 15000);

    let snapshot = storefront.session.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, PhaseKind::Confirmed);
    assert!(snapshot.cart.is_empty());

    storefront.shutdown().await.unwrap();
}

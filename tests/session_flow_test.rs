use cafe_storefront::lifecycle::Storefront;
use cafe_storefront::model::{house_menu, MenuItem};
use cafe_storefront::sequencer::{COMPLETION_OFFSET, STAGES};
use cafe_storefront::session_actor::{PhaseKind, SessionError, SessionEvent};
use tokio::time::Instant;

fn menu_item(id: &str) -> MenuItem {
    house_menu()
        .into_iter()
        .find(|item| item.id == id)
        .expect("item missing from house menu")
}

/// Full end-to-end flow with the real actor and real (paused) timers:
/// browse, fill the cart, check out, follow every processing stage, confirm,
/// acknowledge.
#[tokio::test(start_paused = true)]
async fn test_full_order_flow() {
    let (storefront, mut events) = Storefront::new();

    // Kopi Tubruk (15000) twice, Kopi Latte (25000) once.
    let tubruk = menu_item("1");
    let latte = menu_item("2");
    storefront.session.add_to_cart(tubruk.clone()).await.unwrap();
    storefront.session.add_to_cart(tubruk).await.unwrap();
    let cart = storefront.session.add_to_cart(latte).await.unwrap();

    assert_eq!(cart.entries().len(), 2);
    assert_eq!(cart.entries()[0].item.id, "1");
    assert_eq!(cart.entries()[0].quantity, 2);
    assert_eq!(cart.entries()[1].quantity, 1);
    assert_eq!(cart.total_quantity(), 3);
    assert_eq!(cart.total_price(), 55000);

    storefront.session.begin_checkout().await.unwrap();
    let run = storefront
        .session
        .submit_checkout("Budi", "5")
        .await
        .unwrap();

    // Stages arrive in order at their absolute offsets.
    let start = Instant::now();
    for expected in 0..STAGES.len() {
        match events.recv().await.unwrap() {
            SessionEvent::StageReached { run: r, stage, label } => {
                assert_eq!(r, run);
                assert_eq!(stage, expected);
                assert_eq!(label, STAGES[expected].label);
                assert_eq!(start.elapsed(), STAGES[expected].offset);
            }
            other => panic!("expected stage event, got {:?}", other),
        }
    }

    let order = match events.recv().await.unwrap() {
        SessionEvent::OrderConfirmed(order) => order,
        other => panic!("expected confirmation, got {:?}", other),
    };
    assert_eq!(start.elapsed(), COMPLETION_OFFSET);
    assert_eq!(order.customer_name, "Budi");
    assert_eq!(order.table_number, "5");
    assert_eq!(order.total, 55000);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].quantity, 2);

    // The cart was cleared at confirmation and the order is readable.
    let snapshot = storefront.session.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, PhaseKind::Confirmed);
    assert!(snapshot.cart.is_empty());
    assert_eq!(snapshot.current_order, Some(order));

    // Acknowledging twice has the same observable effect as once.
    storefront.session.acknowledge().await.unwrap();
    storefront.session.acknowledge().await.unwrap();

    let snapshot = storefront.session.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, PhaseKind::Browsing);
    assert!(snapshot.current_order.is_none());
    assert!(snapshot.cart.is_empty());

    storefront.shutdown().await.unwrap();
}

/// The order snapshot is taken at submission time; cart edits made while the
/// sequence runs do not leak into the confirmed order.
#[tokio::test(start_paused = true)]
async fn test_order_snapshot_ignores_later_cart_edits() {
    let (storefront, mut events) = Storefront::new();

    storefront.session.add_to_cart(menu_item("1")).await.unwrap();
    storefront.session.begin_checkout().await.unwrap();
    storefront.session.submit_checkout("Sari", "12").await.unwrap();

    // Mutate the cart mid-processing. Cart operations stay total functions.
    storefront.session.add_to_cart(menu_item("7")).await.unwrap();

    let order = loop {
        match events.recv().await.unwrap() {
            SessionEvent::OrderConfirmed(order) => break order,
            SessionEvent::StageReached { .. } => {}
        }
    };
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].item.id, "1");
    assert_eq!(order.total, 15000);

    storefront.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_checkout_validation() {
    let (storefront, _events) = Storefront::new();

    // Checkout needs something in the cart.
    assert_eq!(
        storefront.session.begin_checkout().await,
        Err(SessionError::EmptyCart)
    );

    storefront.session.add_to_cart(menu_item("3")).await.unwrap();

    // Submission is only valid from checkout.
    assert_eq!(
        storefront.session.submit_checkout("Budi", "5").await,
        Err(SessionError::InvalidPhase(PhaseKind::Browsing))
    );

    storefront.session.begin_checkout().await.unwrap();

    // Whitespace-only fields are rejected.
    assert_eq!(
        storefront.session.submit_checkout("   ", "5").await,
        Err(SessionError::EmptyCustomerName)
    );
    assert_eq!(
        storefront.session.submit_checkout("Budi", " ").await,
        Err(SessionError::EmptyTableNumber)
    );

    // Rejected submissions leave the session in checkout with the cart intact.
    let snapshot = storefront.session.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, PhaseKind::Checkout);
    assert_eq!(snapshot.cart.total_quantity(), 1);

    storefront.shutdown().await.unwrap();
}

/// Submitted details are stored trimmed.
#[tokio::test(start_paused = true)]
async fn test_submitted_details_are_trimmed() {
    let (storefront, mut events) = Storefront::new();

    storefront.session.add_to_cart(menu_item("5")).await.unwrap();
    storefront.session.begin_checkout().await.unwrap();
    storefront
        .session
        .submit_checkout("  Budi  ", " 5 ")
        .await
        .unwrap();

    let order = loop {
        match events.recv().await.unwrap() {
            SessionEvent::OrderConfirmed(order) => break order,
            SessionEvent::StageReached { .. } => {}
        }
    };
    assert_eq!(order.customer_name, "Budi");
    assert_eq!(order.table_number, "5");

    storefront.shutdown().await.unwrap();
}

/// Cancelling the checkout dialog discards only the dialog.
#[tokio::test(start_paused = true)]
async fn test_cancel_checkout_keeps_cart() {
    let (storefront, _events) = Storefront::new();

    storefront.session.add_to_cart(menu_item("9")).await.unwrap();
    storefront.session.begin_checkout().await.unwrap();
    storefront.session.cancel_checkout().await.unwrap();

    let snapshot = storefront.session.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, PhaseKind::Browsing);
    assert_eq!(snapshot.cart.total_quantity(), 1);

    storefront.shutdown().await.unwrap();
}

/// Cart edits through the client: clamping, removal, re-adding at the end.
#[tokio::test(start_paused = true)]
async fn test_cart_edits_through_client() {
    let (storefront, _events) = Storefront::new();

    storefront.session.add_to_cart(menu_item("1")).await.unwrap();
    storefront.session.add_to_cart(menu_item("2")).await.unwrap();

    let cart = storefront.session.update_quantity("1", 0).await.unwrap();
    assert_eq!(cart.entries()[0].quantity, 1);

    let cart = storefront.session.remove_item("1").await.unwrap();
    assert_eq!(cart.entries().len(), 1);

    let cart = storefront.session.add_to_cart(menu_item("1")).await.unwrap();
    let ids: Vec<_> = cart.entries().iter().map(|e| e.item.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);

    let cart = storefront.session.clear_cart().await.unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.total_price(), 0);

    storefront.shutdown().await.unwrap();
}

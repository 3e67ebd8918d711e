//! Scripted demo: one full order against the session actor.
//!
//! Adds two Kopi Tubruk and one Kopi Latte, checks out for Budi at table 5,
//! follows the processing stages as they fire, and acknowledges the confirmed
//! order before shutting down.

use cafe_storefront::display::rupiah;
use cafe_storefront::lifecycle::{setup_tracing, Storefront};
use cafe_storefront::model::{house_menu, Category};
use cafe_storefront::session_actor::SessionEvent;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting café storefront demo");

    let (storefront, mut events) = Storefront::new();

    let menu = house_menu();
    let drinks = menu.iter().filter(|i| i.category == Category::Drink).count();
    let foods = menu.iter().filter(|i| i.category == Category::Food).count();
    info!(drinks, foods, "House menu loaded");

    let kopi_tubruk = menu
        .iter()
        .find(|item| item.name == "Kopi Tubruk")
        .cloned()
        .ok_or("menu is missing Kopi Tubruk")?;
    let kopi_latte = menu
        .iter()
        .find(|item| item.name == "Kopi Latte")
        .cloned()
        .ok_or("menu is missing Kopi Latte")?;

    let span = tracing::info_span!("cart_building");
    let cart = async {
        storefront
            .session
            .add_to_cart(kopi_tubruk.clone())
            .await
            .map_err(|e| e.to_string())?;
        storefront
            .session
            .add_to_cart(kopi_tubruk)
            .await
            .map_err(|e| e.to_string())?;
        storefront
            .session
            .add_to_cart(kopi_latte)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        items = cart.total_quantity(),
        total = %rupiah(cart.total_price()),
        "Cart ready"
    );

    let span = tracing::info_span!("order_processing");
    let order = async {
        storefront
            .session
            .begin_checkout()
            .await
            .map_err(|e| e.to_string())?;
        let run = storefront
            .session
            .submit_checkout("Budi", "5")
            .await
            .map_err(|e| e.to_string())?;
        info!(%run, "Waiting for the kitchen");

        while let Some(event) = events.recv().await {
            match event {
                SessionEvent::StageReached { stage, label, .. } => {
                    info!(stage, label, "Processing");
                }
                SessionEvent::OrderConfirmed(order) => return Ok(order),
            }
        }
        Err("event stream closed before the order was confirmed".to_string())
    }
    .instrument(span)
    .await?;

    info!(
        customer = %order.customer_name,
        table = %order.table_number,
        total = %rupiah(order.total),
        "Order confirmed"
    );

    storefront
        .session
        .acknowledge()
        .await
        .map_err(|e| e.to_string())?;

    storefront.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}

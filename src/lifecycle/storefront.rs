use tokio::sync::mpsc;
use tracing::{error, info};

use crate::clients::SessionClient;
use crate::session_actor::{SessionActor, SessionEvent, REQUEST_BUFFER};

/// The runtime orchestrator for the storefront session.
///
/// `Storefront` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the session actor
/// - **Event Wiring**: Handing the presentation layer its event stream
///
/// # Example
///
/// ```ignore
/// let (storefront, mut events) = Storefront::new();
///
/// storefront.session.add_to_cart(item).await?;
/// storefront.session.begin_checkout().await?;
/// storefront.session.submit_checkout("Budi", "5").await?;
///
/// while let Some(event) = events.recv().await { /* render */ }
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client for interacting with the session actor.
    pub session: SessionClient,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Spawns the session actor and returns the storefront together with the
    /// receiving end of its event stream.
    ///
    /// The event sink is injected into the actor's `run()` rather than its
    /// constructor, so the actor is created with no dependencies and wired up
    /// here in one place.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let (actor, session) = SessionActor::new(REQUEST_BUFFER);
        let handle = tokio::spawn(actor.run(events_tx));

        (
            Self {
                session,
                handles: vec![handle],
            },
            events_rx,
        )
    }

    /// Gracefully shuts down the session.
    ///
    /// Drops the client, which closes the request channel; the actor drains what
    /// is queued and exits. Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.session);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Session task failed: {:?}", e);
                return Err(format!("Session task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

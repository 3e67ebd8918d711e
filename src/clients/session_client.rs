use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::model::{Cart, MenuItem};
use crate::sequencer::RunId;
use crate::session_actor::{SessionError, SessionRequest, SessionSnapshot};

/// Client for interacting with the session actor.
///
/// Cheap to clone; every clone talks to the same session. The request channel
/// closes when the last clone is dropped, which is what shuts the actor down.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub(crate) fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    /// Adds one unit of `item` to the cart and returns the updated cart.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn add_to_cart(&self, item: MenuItem) -> Result<Cart, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::AddToCart { item, respond_to })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }

    /// Sets the quantity of a cart line, clamped to a minimum of 1.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, item_id: &str, quantity: u32) -> Result<Cart, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::UpdateQuantity {
                item_id: item_id.to_string(),
                quantity,
                respond_to,
            })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }

    /// Removes a cart line if present.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, item_id: &str) -> Result<Cart, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::RemoveItem {
                item_id: item_id.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }

    /// Empties the cart.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<Cart, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::ClearCart { respond_to })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }

    /// Reads a point-in-time copy of the session state.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Snapshot { respond_to })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }

    /// Opens the checkout dialog. Requires a non-empty cart.
    #[instrument(skip(self))]
    pub async fn begin_checkout(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::BeginCheckout { respond_to })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }

    /// Closes the checkout dialog without submitting; the cart is untouched.
    #[instrument(skip(self))]
    pub async fn cancel_checkout(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::CancelCheckout { respond_to })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }

    /// Submits the checkout form and starts the processing sequence.
    ///
    /// Returns the id of the run that was started. The confirmed order arrives
    /// later as a [`SessionEvent::OrderConfirmed`](crate::session_actor::SessionEvent)
    /// once the sequence completes.
    #[instrument(skip(self))]
    pub async fn submit_checkout(
        &self,
        customer_name: &str,
        table_number: &str,
    ) -> Result<RunId, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::SubmitCheckout {
                customer_name: customer_name.to_string(),
                table_number: table_number.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }

    /// Tears down the active processing run. Silent abort: no order is produced
    /// and the session returns to checkout.
    #[instrument(skip(self))]
    pub async fn abort_processing(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::AbortProcessing { respond_to })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }

    /// Dismisses the confirmation view and discards the current order.
    /// Safe to call more than once.
    #[instrument(skip(self))]
    pub async fn acknowledge(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Acknowledge { respond_to })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }
}

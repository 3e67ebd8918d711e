//! The session actor: single owner of all storefront session state.
//!
//! # Architecture Note
//! The cart, the checkout phase, and the current order are global mutable state
//! from the presentation layer's point of view. Here they live inside one actor
//! task that processes requests sequentially, so there is exactly one writer and
//! no locking. Clients talk to it through [`SessionRequest`] messages and get
//! answers over oneshot channels; observers receive [`SessionEvent`]s on a
//! channel injected at [`run`](SessionActor::run) time.
//!
//! The processing sequence runs as detached timers owned by the active
//! [`ProcessingRun`]. Their ticks come back to this actor over an internal
//! channel and are fenced twice: leaving the processing phase drops the run,
//! aborting all pending timers, and any tick whose [`RunId`] does not match the
//! active run is discarded. A stale timer can therefore never advance the
//! session.

pub mod error;

pub use error::SessionError;

use std::fmt::Display;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::clients::SessionClient;
use crate::model::{Cart, MenuItem, Order, OrderDraft};
use crate::sequencer::{ProcessingRun, RunId, RunTick, Tick, STAGES};

/// How many client requests may queue before senders are backpressured.
pub const REQUEST_BUFFER: usize = 32;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, SessionError>>;

/// Requests the [`SessionClient`] sends to the session actor.
///
/// Cart mutations respond with the updated cart so callers can render without a
/// second round trip. Flow operations respond with `()` or, for submission, the
/// [`RunId`] of the processing run they started.
#[derive(Debug)]
pub enum SessionRequest {
    AddToCart {
        item: MenuItem,
        respond_to: Response<Cart>,
    },
    UpdateQuantity {
        item_id: String,
        quantity: u32,
        respond_to: Response<Cart>,
    },
    RemoveItem {
        item_id: String,
        respond_to: Response<Cart>,
    },
    ClearCart {
        respond_to: Response<Cart>,
    },
    Snapshot {
        respond_to: Response<SessionSnapshot>,
    },
    BeginCheckout {
        respond_to: Response<()>,
    },
    CancelCheckout {
        respond_to: Response<()>,
    },
    SubmitCheckout {
        customer_name: String,
        table_number: String,
        respond_to: Response<RunId>,
    },
    AbortProcessing {
        respond_to: Response<()>,
    },
    Acknowledge {
        respond_to: Response<()>,
    },
}

/// Where the session is in the order flow.
///
/// `Processing` owns the live timer run and the order draft captured at
/// submission; both die with the phase when it is left.
#[derive(Debug)]
enum Phase {
    Browsing,
    Checkout,
    Processing { run: ProcessingRun, draft: OrderDraft },
    Confirmed,
}

impl Phase {
    fn kind(&self) -> PhaseKind {
        match self {
            Phase::Browsing => PhaseKind::Browsing,
            Phase::Checkout => PhaseKind::Checkout,
            Phase::Processing { .. } => PhaseKind::Processing,
            Phase::Confirmed => PhaseKind::Confirmed,
        }
    }
}

/// Phase discriminant exposed to observers. The full phase owns live timer
/// handles and cannot be cloned out of the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Browsing,
    Checkout,
    Processing,
    Confirmed,
}

impl Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhaseKind::Browsing => "browsing",
            PhaseKind::Checkout => "checkout",
            PhaseKind::Processing => "processing",
            PhaseKind::Confirmed => "confirmed",
        };
        f.write_str(name)
    }
}

/// Read-only copy of the session state at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: PhaseKind,
    pub cart: Cart,
    pub current_order: Option<Order>,
}

/// Notifications pushed to the presentation layer while the session runs.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The processing sequence reached a stage; `stage` indexes [`STAGES`].
    StageReached {
        run: RunId,
        stage: usize,
        label: &'static str,
    },
    /// Processing finished and the order is final. The cart has been cleared.
    OrderConfirmed(Order),
}

/// The actor that owns the session.
///
/// Created together with its [`SessionClient`]; runs until every client handle
/// is dropped and the request channel closes.
pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    ticks_tx: mpsc::UnboundedSender<RunTick>,
    ticks_rx: mpsc::UnboundedReceiver<RunTick>,
    cart: Cart,
    phase: Phase,
    current_order: Option<Order>,
    next_run: u64,
}

impl SessionActor {
    pub fn new(buffer_size: usize) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();
        let actor = Self {
            receiver,
            ticks_tx,
            ticks_rx,
            cart: Cart::new(),
            phase: Phase::Browsing,
            current_order: None,
            next_run: 1,
        };
        let client = SessionClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until the request channel closes.
    ///
    /// # Context Injection
    /// The `events` sink is injected here rather than at construction, so the
    /// actor can be created before the consumer of its event stream is wired up.
    pub async fn run(mut self, events: mpsc::UnboundedSender<SessionEvent>) {
        info!("Session actor started");

        loop {
            tokio::select! {
                maybe_request = self.receiver.recv() => {
                    match maybe_request {
                        Some(request) => self.handle_request(request),
                        None => break,
                    }
                }
                Some(tick) = self.ticks_rx.recv() => {
                    self.handle_tick(tick, &events);
                }
            }
        }

        info!(items = self.cart.total_quantity(), phase = %self.phase.kind(), "Session actor shut down");
    }

    fn handle_request(&mut self, request: SessionRequest) {
        match request {
            SessionRequest::AddToCart { item, respond_to } => {
                debug!(item_id = %item.id, name = %item.name, "AddToCart");
                self.cart.add(item);
                info!(items = self.cart.total_quantity(), total = self.cart.total_price(), "Cart updated");
                let _ = respond_to.send(Ok(self.cart.clone()));
            }
            SessionRequest::UpdateQuantity { item_id, quantity, respond_to } => {
                debug!(%item_id, quantity, "UpdateQuantity");
                self.cart.update_quantity(&item_id, quantity);
                let _ = respond_to.send(Ok(self.cart.clone()));
            }
            SessionRequest::RemoveItem { item_id, respond_to } => {
                debug!(%item_id, "RemoveItem");
                self.cart.remove(&item_id);
                info!(items = self.cart.total_quantity(), "Cart updated");
                let _ = respond_to.send(Ok(self.cart.clone()));
            }
            SessionRequest::ClearCart { respond_to } => {
                debug!("ClearCart");
                self.cart.clear();
                let _ = respond_to.send(Ok(self.cart.clone()));
            }
            SessionRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(SessionSnapshot {
                    phase: self.phase.kind(),
                    cart: self.cart.clone(),
                    current_order: self.current_order.clone(),
                }));
            }
            SessionRequest::BeginCheckout { respond_to } => {
                let _ = respond_to.send(self.begin_checkout());
            }
            SessionRequest::CancelCheckout { respond_to } => {
                let _ = respond_to.send(self.cancel_checkout());
            }
            SessionRequest::SubmitCheckout { customer_name, table_number, respond_to } => {
                let _ = respond_to.send(self.submit_checkout(customer_name, table_number));
            }
            SessionRequest::AbortProcessing { respond_to } => {
                let _ = respond_to.send(self.abort_processing());
            }
            SessionRequest::Acknowledge { respond_to } => {
                let _ = respond_to.send(self.acknowledge());
            }
        }
    }

    fn begin_checkout(&mut self) -> Result<(), SessionError> {
        if !matches!(self.phase, Phase::Browsing) {
            warn!(phase = %self.phase.kind(), "BeginCheckout rejected");
            return Err(SessionError::InvalidPhase(self.phase.kind()));
        }
        if self.cart.is_empty() {
            warn!("BeginCheckout rejected: empty cart");
            return Err(SessionError::EmptyCart);
        }
        info!(items = self.cart.total_quantity(), "Checkout started");
        self.phase = Phase::Checkout;
        Ok(())
    }

    /// Closing the checkout dialog discards only the dialog. Nothing has been
    /// captured yet at this point, so the cart stays as it is.
    fn cancel_checkout(&mut self) -> Result<(), SessionError> {
        if !matches!(self.phase, Phase::Checkout) {
            warn!(phase = %self.phase.kind(), "CancelCheckout rejected");
            return Err(SessionError::InvalidPhase(self.phase.kind()));
        }
        info!("Checkout cancelled");
        self.phase = Phase::Browsing;
        Ok(())
    }

    /// Captures the order draft and starts a processing run. The order itself is
    /// materialized only when the run's completion tick arrives.
    fn submit_checkout(
        &mut self,
        customer_name: String,
        table_number: String,
    ) -> Result<RunId, SessionError> {
        if !matches!(self.phase, Phase::Checkout) {
            warn!(phase = %self.phase.kind(), "SubmitCheckout rejected");
            return Err(SessionError::InvalidPhase(self.phase.kind()));
        }
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            warn!("SubmitCheckout rejected: blank customer name");
            return Err(SessionError::EmptyCustomerName);
        }
        let table_number = table_number.trim();
        if table_number.is_empty() {
            warn!("SubmitCheckout rejected: blank table number");
            return Err(SessionError::EmptyTableNumber);
        }

        let draft = OrderDraft {
            customer_name: customer_name.to_string(),
            table_number: table_number.to_string(),
            items: self.cart.entries().to_vec(),
            total: self.cart.total_price(),
        };

        let id = RunId(self.next_run);
        self.next_run += 1;
        let run = ProcessingRun::start(id, self.ticks_tx.clone());

        info!(%id, customer = %draft.customer_name, table = %draft.table_number, total = draft.total, "Checkout submitted, processing started");
        self.phase = Phase::Processing { run, draft };
        Ok(id)
    }

    /// Tears the active run down: every pending timer is invalidated before the
    /// phase changes, so nothing of the aborted run can fire afterwards. The
    /// session returns to checkout with the cart untouched; no order exists.
    fn abort_processing(&mut self) -> Result<(), SessionError> {
        match std::mem::replace(&mut self.phase, Phase::Checkout) {
            Phase::Processing { mut run, .. } => {
                run.cancel();
                info!(id = %run.id(), "Processing aborted");
                Ok(())
            }
            other => {
                let kind = other.kind();
                self.phase = other;
                warn!(phase = %kind, "AbortProcessing rejected");
                Err(SessionError::InvalidPhase(kind))
            }
        }
    }

    /// Discards the confirmed order and returns to browsing. Idempotent:
    /// acknowledging with nothing confirmed is a quiet no-op.
    fn acknowledge(&mut self) -> Result<(), SessionError> {
        if self.current_order.take().is_some() {
            info!("Order acknowledged");
        }
        if matches!(self.phase, Phase::Confirmed) {
            self.phase = Phase::Browsing;
        }
        Ok(())
    }

    fn handle_tick(&mut self, tick: RunTick, events: &mpsc::UnboundedSender<SessionEvent>) {
        let active = match &self.phase {
            Phase::Processing { run, .. } => run.id(),
            _ => {
                debug!(run = %tick.run, "Dropping tick outside processing");
                return;
            }
        };
        if tick.run != active {
            warn!(run = %tick.run, %active, "Dropping stale tick");
            return;
        }

        match tick.tick {
            Tick::Stage(stage) => {
                let label = STAGES[stage].label;
                info!(run = %tick.run, stage, label, "Stage reached");
                let _ = events.send(SessionEvent::StageReached { run: tick.run, stage, label });
            }
            Tick::Completed => {
                if let Phase::Processing { draft, .. } =
                    std::mem::replace(&mut self.phase, Phase::Confirmed)
                {
                    let order = draft.into_order();
                    info!(run = %tick.run, customer = %order.customer_name, total = order.total, "Order confirmed");
                    self.cart.clear();
                    self.current_order = Some(order.clone());
                    let _ = events.send(SessionEvent::OrderConfirmed(order));
                }
            }
        }
    }
}

use mikro_events::{ConnectError, EventManager};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug)]
pub(super) enum Action {
    /// User-initiated login submission.
    SubmitLogin,
    /// Outcome posted back by the connect worker; drained only by the UI
    /// loop, so every UI-visible transition happens there.
    LoginFinished(Result<EventManager, ConnectError>),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}

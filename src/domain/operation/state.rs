use {
    super::Error,
    std::{fmt, future::Future},
    tokio::sync::{Mutex, watch},
};

/// Lifecycle of a single phase of an operation.
#[derive(Clone, Debug)]
pub enum ActionState<T> {
    Idle,
    Pending,
    Success(T),
    Error(Error),
}

impl<T> ActionState<T> {
    pub fn status(&self) -> Status {
        match self {
            Self::Idle => Status::Idle,
            Self::Pending => Status::Pending,
            Self::Success(_) => Status::Success,
            Self::Error(_) => Status::Error,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// The state of a phase without its payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Idle,
    Pending,
    Success,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
        })
    }
}

/// State cell of one phase. Invocations are serialized: a second invocation
/// waits for the running one to finish before it moves the state back to
/// `Pending`.
pub(super) struct Phase<T> {
    state: watch::Sender<ActionState<T>>,
    turn: Mutex<()>,
}

impl<T: Clone> Phase<T> {
    pub fn new() -> Self {
        Self {
            state: watch::channel(ActionState::Idle).0,
            turn: Mutex::new(()),
        }
    }

    pub fn state(&self) -> ActionState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ActionState<T>> {
        self.state.subscribe()
    }

    pub async fn run(&self, invocation: impl Future<Output = Result<T, Error>>) -> Result<T, Error> {
        let _turn = self.turn.lock().await;
        self.state.send_replace(ActionState::Pending);
        let result = invocation.await;
        self.state.send_replace(match &result {
            Ok(data) => ActionState::Success(data.clone()),
            Err(err) => ActionState::Error(err.clone()),
        });
        result
    }
}

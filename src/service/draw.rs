use crate::error::{DrawError, Result};
use crate::model::draw::Draw;
use crate::repository::random_source::RandomSource;
use crate::service::selector::select_draw;
use log::{error, info};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};

pub const LOADING_MESSAGE: &str = "Loading numbers ...";

/// What the display shows for a successful draw.
pub fn display_text(draw: &Draw) -> String {
    format!("Lotto numbers:\n\n{}", draw)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawPhase {
    Idle,
    Fetching,
    Selecting,
    Done(Draw),
    Failed(String),
}

impl DrawPhase {
    /// A new draw may start unless one is fetching or selecting.
    pub fn is_busy(&self) -> bool {
        matches!(self, DrawPhase::Fetching | DrawPhase::Selecting)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DrawPhase::Idle => "idle",
            DrawPhase::Fetching => "fetching",
            DrawPhase::Selecting => "selecting",
            DrawPhase::Done(_) => "done",
            DrawPhase::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DrawSnapshot {
    pub phase: DrawPhase,
    pub display: String,
}

struct DrawState {
    phase: DrawPhase,
    display: String,
}

/// Resolves exactly once with the outcome of the draw it was issued for.
pub struct DrawTicket {
    receiver: oneshot::Receiver<Result<Draw>>,
}

impl DrawTicket {
    pub async fn resolve(self) -> Result<Draw> {
        self.receiver.await.unwrap_or(Err(DrawError::Aborted))
    }
}

pub enum TriggerOutcome {
    Started(DrawTicket),
    Busy,
}

/// Runs one draw at a time and keeps the text the display shows.
#[derive(Clone)]
pub struct DrawService {
    source: Arc<dyn RandomSource>,
    state: Arc<Mutex<DrawState>>,
}

impl DrawService {
    pub fn new(source: Arc<dyn RandomSource>) -> Self {
        DrawService {
            source,
            state: Arc::new(Mutex::new(DrawState {
                phase: DrawPhase::Idle,
                display: String::new(),
            })),
        }
    }

    /// Starts a draw on a worker task, or does nothing if one is in flight.
    pub async fn trigger(&self) -> TriggerOutcome {
        {
            let mut state = self.state.lock().await;
            if state.phase.is_busy() {
                info!("A draw is already in progress.");
                return TriggerOutcome::Busy;
            }
            state.phase = DrawPhase::Fetching;
            state.display = LOADING_MESSAGE.to_string();
        }

        let (sender, receiver) = oneshot::channel();
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let result = fetch_and_select(source.as_ref(), &state).await;

            {
                let mut state = state.lock().await;
                match &result {
                    Ok(draw) => {
                        info!("Drawn numbers: {:?}", draw.numbers());
                        state.phase = DrawPhase::Done(*draw);
                        state.display = display_text(draw);
                    }
                    Err(e) => {
                        let message = e.user_message();
                        state.phase = DrawPhase::Failed(message.clone());
                        state.display = message;
                    }
                }
            }

            // The caller may not be waiting for the ticket.
            let _ = sender.send(result);
        });

        TriggerOutcome::Started(DrawTicket { receiver })
    }

    pub async fn snapshot(&self) -> DrawSnapshot {
        let state = self.state.lock().await;
        DrawSnapshot {
            phase: state.phase.clone(),
            display: state.display.clone(),
        }
    }
}

async fn fetch_and_select(source: &dyn RandomSource, state: &Mutex<DrawState>) -> Result<Draw> {
    let keys = source.fetch_keys().await?;

    state.lock().await.phase = DrawPhase::Selecting;

    select_draw(&keys).map_err(|e| {
        error!("Error during selection of numbers: {}", e);
        e
    })
}

//! Live frame feed over WebSocket
//!
//! A running simulation pushes one frame message per step. The client runs
//! tokio-tungstenite on a background thread and hands raw text messages to
//! the UI thread through a channel.

use crate::feed_state::FeedState;
use parking_lot::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct FeedClient {
    /// Raw text messages, in arrival order
    pub rx: Receiver<String>,
    /// Shared connection state
    pub state: Arc<Mutex<FeedState>>,
}

impl FeedClient {
    /// Connect to a frame feed.
    ///
    /// Spawns a thread with its own tokio runtime; connection failures are
    /// reported through `state`, never returned.
    pub fn connect(url: &str) -> Self {
        let (tx, rx): (Sender<String>, Receiver<String>) = mpsc::channel();
        let state = Arc::new(Mutex::new(FeedState::Connecting));

        let url = url.to_string();
        let state_clone = state.clone();

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!(error = %e, "Failed to create tokio runtime");
                    *state_clone.lock() = FeedState::Error(e.to_string());
                    return;
                }
            };
            rt.block_on(async move {
                Self::run(&url, tx, state_clone).await;
            });
        });

        Self { rx, state }
    }

    async fn run(url: &str, tx: Sender<String>, state: Arc<Mutex<FeedState>>) {
        use futures_util::StreamExt;
        use tokio_tungstenite::{connect_async, tungstenite::Message};

        info!(url, "Connecting to frame feed");

        let ws_stream = match connect_async(url).await {
            Ok((stream, _)) => {
                info!("Frame feed connected");
                *state.lock() = FeedState::Connected;
                stream
            }
            Err(e) => {
                error!(error = %e, "Failed to connect");
                *state.lock() = FeedState::Error(e.to_string());
                return;
            }
        };

        let (_write, mut read) = ws_stream.split();
        let mut received = 0u64;

        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    received += 1;
                    if tx.send(text.to_string()).is_err() {
                        debug!(received, "Viewer gone, closing feed");
                        break;
                    }
                }
                Ok(Message::Close(_)) => {
                    warn!(received, "Frame feed closed by server");
                    *state.lock() = FeedState::Disconnected;
                    return;
                }
                Err(e) => {
                    error!(error = %e, "Frame feed error");
                    *state.lock() = FeedState::Error(e.to_string());
                    return;
                }
                _ => {}
            }
        }

        warn!(received, "Frame feed ended");
        *state.lock() = FeedState::Disconnected;
    }
}

impl crate::core::FrameSource for FeedClient {
    /// Drain queued messages and keep the newest frame; older ones are
    /// superseded before they could be shown.
    fn next_frame(&mut self) -> Option<crate::core::Frame> {
        let mut latest = None;
        while let Ok(msg) = self.rx.try_recv() {
            match crate::core::parse_frame(&msg) {
                Ok(Some(frame)) => latest = Some(frame),
                Ok(None) => {}
                Err(e) => warn!(error = %e, "Dropping bad frame message"),
            }
        }
        latest
    }

    fn name(&self) -> &'static str {
        "feed"
    }

    fn state(&self) -> FeedState {
        self.state.lock().clone()
    }

    fn is_finite(&self) -> bool {
        false
    }
}

//! Frame messages: one snapshot of every particle position
//!
//! Wire format (one JSON object per message or per trajectory line):
//! `{"type":"frame","step":12,"positions":[[x,y],[x,y]]}`

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{trace, warn};

use super::FrameError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Simulation step the snapshot was taken at
    #[serde(default)]
    pub step: u64,
    pub positions: Vec<Vec<f64>>,
}

impl Frame {
    pub fn new(step: u64, positions: Vec<Vec<f64>>) -> Self {
        Self { step, positions }
    }

    pub fn from_points<const N: usize>(step: u64, points: &[[f64; N]]) -> Self {
        Self {
            step,
            positions: points.iter().map(|p| p.to_vec()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Encode as a wire message
    pub fn to_message(&self) -> String {
        serde_json::json!({
            "type": "frame",
            "step": self.step,
            "positions": self.positions,
        })
        .to_string()
    }
}

/// Parse one message.
///
/// Returns `Ok(None)` for well-formed messages that are not frames
/// (e.g. "hello" or "stats" messages from a feed).
pub fn parse_frame(msg: &str) -> Result<Option<Frame>, FrameError> {
    trace!(len = msg.len(), "Parsing message");

    let json: Value = serde_json::from_str(msg)?;
    // an untyped message is a frame; a `type` that is not "frame" is not
    match json.get("type") {
        None => {}
        Some(Value::String(msg_type)) if msg_type == "frame" => {}
        Some(other) => {
            trace!(msg_type = %other, "Skipping non-frame message");
            return Ok(None);
        }
    }

    let frame: Frame = serde_json::from_value(json)?;
    Ok(Some(frame))
}

/// Parse a JSON-lines trajectory, skipping blank lines and non-frame lines
pub fn parse_trajectory(text: &str) -> Result<Vec<Frame>, FrameError> {
    let mut frames = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_frame(line) {
            Ok(Some(frame)) => frames.push(frame),
            Ok(None) => {}
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "Bad trajectory line");
                return Err(e);
            }
        }
    }
    Ok(frames)
}

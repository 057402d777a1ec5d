//! Runs the square through its delay, movement and recolor

use crate::constants::*;
use crate::request::make_request;
use crate::square::{change_color, create_square, start_movement};
use crate::surface::{Surface, SquareHandle};
use crate::types::{RequestStatus, RunEvent, RunPhase, RunState};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{info, warn};

/// Parameters of one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub url: String,
    pub size: f32,
    pub distance: f32,
    pub duration: Duration,
    pub start_delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            url: REQUEST_URL.to_string(),
            size: DEFAULT_SQUARE_SIZE,
            distance: DEFAULT_DISTANCE,
            duration: DEFAULT_DURATION,
            start_delay: DEFAULT_START_DELAY,
        }
    }
}

fn record(state: &Mutex<RunState>, event: RunEvent) {
    state.lock().unwrap().timeline.record(event);
}

/// Create the square and fire the request, then move the square after
/// `start_delay` and color it once both the movement and the request are done.
pub async fn move_and_fetch(
    surface: &Surface,
    client: &reqwest::Client,
    config: &RunConfig,
    state: Arc<Mutex<RunState>>,
) -> SquareHandle {
    *state.lock().unwrap() = RunState::default();

    let square = create_square(surface, config.size);
    record(&state, RunEvent::SquareCreated);

    let request = {
        let client = client.clone();
        let url = config.url.clone();
        let state = state.clone();
        let surface = surface.clone();
        tokio::spawn(async move {
            record(&state, RunEvent::RequestSent);
            let result = make_request(&client, &url).await;
            {
                let mut s = state.lock().unwrap();
                s.request = RequestStatus::Resolved(result.clone());
                s.timeline.record(RunEvent::RequestResolved);
            }
            surface.request_repaint();
            result
        })
    };

    tokio::time::sleep(config.start_delay).await;

    {
        let mut s = state.lock().unwrap();
        s.phase = RunPhase::Moving;
        s.timeline.record(RunEvent::MovementStarted);
    }
    start_movement(&square, config.distance, config.duration).await;
    record(&state, RunEvent::MovementFinished);

    let result = request.await.unwrap_or_else(|e| {
        warn!(error = %e, "Request task failed");
        ERROR_SENTINEL.to_string()
    });
    change_color(&square, &result);

    {
        let mut s = state.lock().unwrap();
        s.phase = RunPhase::Settled;
        s.timeline.record(RunEvent::ColorApplied);
    }
    info!(result = %result, color = %square.get().color, "Run finished");

    square
}

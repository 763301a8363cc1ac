//! Background network worker
//!
//! All network IO (the geolocation read and the generateContent call) runs
//! on one background thread owning a current-thread tokio runtime. The UI
//! thread sends requests over a channel and drains responses each tick; every
//! response carries its request id so the UI can drop stale ones.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::location::provider::{Coordinate, GeoClient};
use crate::suggest::provider::{self, GeminiClient, SuggestError};
use crate::suggest::{Restaurant, extract_restaurants};

/// Request messages sent to the worker thread
#[derive(Debug)]
pub enum WorkerRequest {
    /// One-shot position read
    Locate { request_id: u64 },
    /// Restaurant search for the given prompt
    Search {
        prompt: String,
        request_id: u64,
        /// Cancels the HTTP future when the request is superseded
        cancel: CancellationToken,
    },
}

/// Response messages received from the worker thread
#[derive(Debug)]
pub enum WorkerResponse {
    Position {
        coordinate: Coordinate,
        request_id: u64,
    },
    PositionFailed {
        message: String,
        request_id: u64,
    },
    Restaurants {
        restaurants: Vec<Restaurant>,
        request_id: u64,
    },
    SearchFailed {
        message: String,
        request_id: u64,
    },
    /// The search was cancelled before completing
    Cancelled { request_id: u64 },
}

/// Spawn the worker thread.
///
/// The suggestion client is built eagerly so a missing API key surfaces on
/// the first search rather than at startup.
pub fn spawn_worker(
    config: &Config,
    request_rx: Receiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) {
    let suggest_client = provider::from_config(config);
    let geo_client = GeoClient::new(config.location.endpoint.clone());

    std::thread::spawn(move || {
        worker_loop(suggest_client, geo_client, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    suggest_client: Result<GeminiClient, SuggestError>,
    geo_client: GeoClient,
    request_rx: Receiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("failed to build worker runtime: {e}");
            return;
        }
    };

    if let Err(e) = &suggest_client {
        log::debug!("suggestion client not configured: {e}");
    }

    while let Ok(request) = request_rx.recv() {
        let response = match request {
            WorkerRequest::Locate { request_id } => {
                handle_locate(&runtime, &geo_client, request_id)
            }
            WorkerRequest::Search {
                prompt,
                request_id,
                cancel,
            } => handle_search(&runtime, &suggest_client, &prompt, request_id, cancel),
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected, stop working
            return;
        }
    }

    log::debug!("worker thread shutting down");
}

fn handle_locate(
    runtime: &tokio::runtime::Runtime,
    geo_client: &GeoClient,
    request_id: u64,
) -> WorkerResponse {
    match runtime.block_on(geo_client.current_position()) {
        Ok(coordinate) => WorkerResponse::Position {
            coordinate,
            request_id,
        },
        Err(e) => {
            log::warn!("position read failed: {e}");
            WorkerResponse::PositionFailed {
                message: e.to_string(),
                request_id,
            }
        }
    }
}

fn handle_search(
    runtime: &tokio::runtime::Runtime,
    suggest_client: &Result<GeminiClient, SuggestError>,
    prompt: &str,
    request_id: u64,
    cancel: CancellationToken,
) -> WorkerResponse {
    let client = match suggest_client {
        Ok(client) => client,
        Err(e) => {
            return WorkerResponse::SearchFailed {
                message: e.to_string(),
                request_id,
            };
        }
    };

    log::debug!("search request {request_id} started");

    let outcome = runtime.block_on(async {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = run_search(client, prompt) => Some(result),
        }
    });

    match outcome {
        None => {
            log::debug!("search request {request_id} cancelled");
            WorkerResponse::Cancelled { request_id }
        }
        Some(Ok(restaurants)) => WorkerResponse::Restaurants {
            restaurants,
            request_id,
        },
        Some(Err(e)) => WorkerResponse::SearchFailed {
            message: e.to_string(),
            request_id,
        },
    }
}

async fn run_search(client: &GeminiClient, prompt: &str) -> Result<Vec<Restaurant>, SuggestError> {
    let text = client.generate(prompt).await?;
    log::debug!("response text received ({} chars)", text.chars().count());
    Ok(extract_restaurants(&text)?)
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

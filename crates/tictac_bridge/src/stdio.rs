//! JSON-lines bridge: one request per input line, one response per output line.

use crate::BridgeError;
use crate::wire::{BAD_REQUEST, BridgeRequest, BridgeResponse, ErrorBody};
use std::io::{BufRead, Write};
use tictac_engine::GameEngine;
use tracing::{debug, info, instrument, warn};

/// Runs one request against the engine.
#[instrument(skip(engine))]
pub fn dispatch(engine: &GameEngine, request: BridgeRequest) -> BridgeResponse {
    match request {
        BridgeRequest::NewGame => BridgeResponse::Ok(engine.new_game()),
        BridgeRequest::SubmitMove { index } => engine.submit_move(index).into(),
        BridgeRequest::Reset => BridgeResponse::Ok(engine.reset()),
        BridgeRequest::CurrentState => BridgeResponse::Ok(engine.current_state()),
    }
}

/// Parses and answers a single line.
#[instrument(skip(engine))]
pub fn handle_line(engine: &GameEngine, line: &str) -> BridgeResponse {
    match serde_json::from_str::<BridgeRequest>(line) {
        Ok(request) => dispatch(engine, request),
        Err(e) => {
            warn!(error = %e, "Malformed request");
            BridgeResponse::Err(ErrorBody::new(BAD_REQUEST.to_string(), e.to_string()))
        }
    }
}

/// Serves requests from `input` until EOF, flushing after every response.
///
/// Blank lines are skipped. A malformed line gets a `BadRequest` reply and
/// the session continues.
#[instrument(skip_all)]
pub fn serve<R: BufRead, W: Write>(
    engine: &GameEngine,
    input: R,
    mut output: W,
) -> Result<(), BridgeError> {
    info!("Stdio bridge ready");
    let mut served = 0usize;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(engine, line);
        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
        served += 1;
        debug!(served, "Response written");
    }

    info!(served, "Stdio bridge reached end of input");
    Ok(())
}

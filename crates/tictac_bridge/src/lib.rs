//! Transport bridges and a terminal front end for [`tictac_engine`].
//!
//! # Architecture
//!
//! - **stdio**: JSON-lines request/response over stdin/stdout
//! - **http**: loopback JSON API served with axum
//! - **console**: line-oriented terminal play
//!
//! Every mode forwards to one [`GameEngine`](tictac_engine::GameEngine);
//! none of them decide game rules.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;

pub mod cli;
pub mod console;
pub mod http;
pub mod stdio;
pub mod wire;

pub use config::BridgeConfig;
pub use error::BridgeError;

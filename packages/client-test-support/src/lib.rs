//! Client test support utilities
//!
//! This crate provides utilities for client testing: unified logging
//! initialization and a stub game server that speaks HTTP on a local port.

pub mod stub_server;
pub mod test_logging;

pub use stub_server::{unreachable_base_url, RecordedRequest, StubReply, StubServer, StubServerBuilder};

//! Configuration and wire models shared across the service.

pub mod config;
pub mod directory;
pub mod zmq;

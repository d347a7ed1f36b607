pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{Settings, TomlConfig};
pub use core::{
    ActivationEvent, CountDisplay, ReactionBindings, ReactionControl, ReactionController,
    ReactionCount, ReactionKind, ReactionRequest, ReactionTransport, ResponseOrdering,
};
pub use utils::error::{ReactionError, Result};

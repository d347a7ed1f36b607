pub mod controller;
pub mod runtime;

pub use crate::domain::model::{ReactionCount, ReactionKind, ReactionRequest};
pub use crate::domain::ports::{ActivationEvent, CountDisplay, ReactionControl, ReactionTransport};
pub use crate::utils::error::Result;
pub use controller::{ReactionBindings, ReactionController, ResponseOrdering};

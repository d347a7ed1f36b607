// Adapters layer: concrete implementations of the domain ports (http, in-memory page).

pub mod http;
pub mod page;

pub use http::HttpTransport;
pub use page::{MemoryControl, MemoryDisplay, MemoryEvent};

//! Health API module

mod handler;

pub use handler::router;

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{create_server, start_server};
pub use state::AppState;

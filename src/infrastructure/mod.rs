pub mod auth;
pub mod config;
pub mod db;
pub mod seed;
pub mod server;
pub mod state;

pub use state::AppState;

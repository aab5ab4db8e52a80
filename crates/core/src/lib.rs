pub mod config;
pub mod error;
pub mod repository;
pub mod types;

pub use config::{Portfolio, parse_portfolio_toml};
pub use error::{Error, Result};
pub use repository::ContentRepository;
pub use types::*;

pub mod config;
pub mod dates;
pub mod error;
pub mod news;
pub mod types;

pub use config::Config;
pub use dates::{format_date, parse_date};
pub use error::PortalError;
pub use news::{NewsSource, StaticNewsSource};
pub use types::*;

mod advertisement_service;
mod error;
mod reading_sink;

pub use advertisement_service::*;
pub use error::*;
pub use reading_sink::*;

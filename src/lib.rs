pub mod args;
pub mod commands;
mod error;
mod home;
pub mod model;
pub mod report;
pub mod search;
mod store;
mod utils;
pub mod validate;

pub use error::Error;
pub use error::Result;
pub use home::Home;
pub use store::Store;

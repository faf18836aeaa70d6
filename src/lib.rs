pub mod collection;
pub mod error;
pub mod models;
pub mod repl;
pub mod session;
pub mod storage;

pub use error::CensusError;

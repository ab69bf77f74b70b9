pub mod avltree;
pub mod bst;
pub mod config;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod record;
pub mod report;
pub mod set;
pub mod util;

pub use error::{Error, Result};

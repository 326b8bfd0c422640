#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod contract;
mod error;
mod execute;
mod helpers;
pub mod msg;
mod queries;
pub mod registry;
pub mod state;


pub use crate::error::ContractError;

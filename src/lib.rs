mod context;
mod error;

pub mod pts;
pub mod stats;

pub use crate::context::Context;
pub use crate::error::*;

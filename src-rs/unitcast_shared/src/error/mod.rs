//! Errors for unitcast

mod context;
mod traits;

pub use context::Context;
pub use traits::AsUnitcastError;

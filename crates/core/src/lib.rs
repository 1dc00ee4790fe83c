#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod random;
pub mod text;

pub use error::Error;
pub use model::{Card, CardIndex, CardSet};

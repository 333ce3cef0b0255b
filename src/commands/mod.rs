pub mod info;

pub use info::{info, Outcome};

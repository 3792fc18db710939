pub mod account;
pub mod merkle;

pub use account::*;
pub use merkle::*;

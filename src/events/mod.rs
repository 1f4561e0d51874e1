pub mod scroll;

pub use scroll::*;

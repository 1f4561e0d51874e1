pub mod config;
pub mod constants;
pub mod detector;
pub mod policy;
pub mod state;

pub use config::*;
pub use detector::*;
pub use policy::*;
pub use state::*;

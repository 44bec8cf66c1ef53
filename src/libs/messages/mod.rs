pub mod display;
pub mod macros;
pub mod types;

pub use macros::init_tracing;
pub use types::Message;

//! Application state module

mod app_state;
mod forms;
mod notify;
mod pending;
mod session;
mod toggle;

pub use app_state::*;
pub use forms::*;
pub use notify::*;
pub use pending::*;
pub use session::*;
pub use toggle::*;

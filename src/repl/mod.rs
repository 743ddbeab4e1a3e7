pub mod commands;
pub mod completer;
pub mod renderer;
pub mod session;

pub use session::ReplSession;

mod commands;
mod completion;
mod configuration;
mod lifecycle;
mod notifications;

pub use commands::*;
pub use completion::*;
pub use configuration::*;
pub use lifecycle::*;
pub use notifications::*;

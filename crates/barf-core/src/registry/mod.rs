//! Protocol tag registry shared by both bridge endpoints.
//!
//! The registry follows a layered structure:
//! - `wire`: literal integers and strings (source of truth)
//! - `method`, `led`, `command`, `sentinel`: typed lookups over `wire`
//! - `error`: explicit, actionable lookup errors
//!
//! All data is `'static` and immutable; lookups never block and need no
//! synchronization. An unknown name, tag, or code is the only failure mode
//! and always indicates a version mismatch between endpoints.

pub mod command;
pub mod error;
pub mod led;
pub mod method;
pub mod sentinel;
pub mod wire;

pub use command::Command;
pub use error::RegistryError;
pub use led::LedMode;
pub use method::Method;
pub use sentinel::{Sentinel, is_sentinel};

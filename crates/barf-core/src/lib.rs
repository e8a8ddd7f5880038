//! barf core library: the shared protocol tag registry.
//!
//! This crate is the single source of truth for the command/response
//! vocabulary of the barf serial/WiFi configuration bridge. Both endpoints
//! (device firmware and host-side library) are independently built artifacts;
//! any divergence in these values is a silent protocol break, so every
//! consumer takes them from here instead of hand-maintaining a copy.
//!
//! Invariants:
//! - The registry is a closed set: two methods, five LED modes, three
//!   sentinels, twenty-two commands. Lookups outside it fail, never default.
//! - All values are `'static` immutable constants; no lookup blocks or
//!   requires synchronization.
//! - Snapshot output is deterministic and stable across runs, so two builds
//!   of the same registry serialize identically.
//! - Historical wire spellings (notably `"path_frament"`) are preserved
//!   byte-for-byte for compatibility with deployed peers.
//!
//! # Examples
//! ```
//! use barf_core::{Command, Method, is_sentinel};
//!
//! assert_eq!(Method::Get.code(), 0);
//! assert_eq!(Command::Connect.tag(), "connect");
//! assert!(is_sentinel("__timeout__"));
//! ```

pub mod registry;
mod snapshot;

pub use registry::{Command, LedMode, Method, RegistryError, Sentinel, is_sentinel, wire};
pub use snapshot::{CodeEntry, Mismatch, RegistrySnapshot, StringEntry};

/// Current snapshot schema version.
pub const REGISTRY_VERSION: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_all_sections() {
        let value =
            serde_json::to_value(RegistrySnapshot::current()).expect("snapshot json");
        assert_eq!(value["registry_version"], REGISTRY_VERSION);
        assert_eq!(value["methods"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["led_modes"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["sentinels"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["commands"].as_array().map(Vec::len), Some(22));
    }

    #[test]
    fn snapshot_carries_the_wire_spellings() {
        let snapshot = RegistrySnapshot::current();
        let entry = snapshot
            .commands
            .iter()
            .find(|entry| entry.name == "path_fragment")
            .expect("path_fragment entry");
        assert_eq!(entry.value, wire::COMMAND_PATH_FRAGMENT);
    }
}

use thiserror::Error;

/// Errors returned by registry lookups.
///
/// Every variant means the caller asked for a name, tag, or code outside the
/// closed registry. This is a build-time or version mismatch, never a
/// transient fault; surface it immediately instead of retrying.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown method name: {name:?}")]
    UnknownMethod { name: String },
    #[error("unknown method code: {code}")]
    UnknownMethodCode { code: u8 },
    #[error("unknown LED mode name: {name:?}")]
    UnknownLedMode { name: String },
    #[error("unknown LED mode code: {code}")]
    UnknownLedModeCode { code: u8 },
    #[error("unknown command name: {name:?}")]
    UnknownCommand { name: String },
    #[error("unknown command tag: {tag:?}")]
    UnknownCommandTag { tag: String },
}

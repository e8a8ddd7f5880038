use super::wire;

/// Reserved strings signaling an out-of-band condition.
///
/// A sentinel may appear where ordinary payload data is expected; consumers
/// must check [`is_sentinel`] before treating a value as data. The double
/// underscore framing keeps the set disjoint from every command tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    Error,
    Timeout,
    UnexpectedCommand,
}

impl Sentinel {
    /// Every sentinel, in declaration order (stable for snapshots).
    pub const ALL: [Sentinel; 3] = [
        Sentinel::Error,
        Sentinel::Timeout,
        Sentinel::UnexpectedCommand,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sentinel::Error => wire::SENTINEL_ERROR,
            Sentinel::Timeout => wire::SENTINEL_TIMEOUT,
            Sentinel::UnexpectedCommand => wire::SENTINEL_UNEXPECTED_COMMAND,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Sentinel::Error => "error",
            Sentinel::Timeout => "timeout",
            Sentinel::UnexpectedCommand => "unexpected_command",
        }
    }

    /// Recognize a reserved value; `None` means ordinary data.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|sentinel| sentinel.as_str() == value)
    }
}

/// True iff `value` is one of the reserved sentinel strings.
pub fn is_sentinel(value: &str) -> bool {
    Sentinel::from_value(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::{Sentinel, is_sentinel};
    use crate::registry::Command;

    #[test]
    fn reserved_values_are_recognized() {
        assert!(is_sentinel("__err__"));
        assert!(is_sentinel("__timeout__"));
        assert!(is_sentinel("__unexpected_command__"));
        assert!(!is_sentinel("connect"));
        assert!(!is_sentinel(""));
    }

    #[test]
    fn from_value_round_trips() {
        for sentinel in Sentinel::ALL {
            assert_eq!(Sentinel::from_value(sentinel.as_str()), Some(sentinel));
        }
        assert_eq!(Sentinel::from_value("timeout"), None);
    }

    #[test]
    fn sentinels_never_collide_with_command_tags() {
        for command in Command::ALL {
            assert!(!is_sentinel(command.tag()), "tag {:?}", command.tag());
        }
    }
}

use super::error::RegistryError;
use super::wire;

/// Visual indicator behavior selected on the device.
///
/// Closed set of five modes; the wire form is a single byte in 0..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedMode {
    Activity,
    Connection,
    Off,
    On,
    Gpio,
}

impl LedMode {
    /// Every LED mode, in wire-code order.
    pub const ALL: [LedMode; 5] = [
        LedMode::Activity,
        LedMode::Connection,
        LedMode::Off,
        LedMode::On,
        LedMode::Gpio,
    ];

    pub fn code(self) -> u8 {
        match self {
            LedMode::Activity => wire::LED_ACTIVITY,
            LedMode::Connection => wire::LED_CONNECTION,
            LedMode::Off => wire::LED_OFF,
            LedMode::On => wire::LED_ON,
            LedMode::Gpio => wire::LED_GPIO,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LedMode::Activity => "activity",
            LedMode::Connection => "connection",
            LedMode::Off => "off",
            LedMode::On => "on",
            LedMode::Gpio => "gpio",
        }
    }

    pub fn from_code(code: u8) -> Result<Self, RegistryError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.code() == code)
            .ok_or(RegistryError::UnknownLedModeCode { code })
    }

    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| RegistryError::UnknownLedMode {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::LedMode;

    #[test]
    fn codes_are_distinct_and_dense() {
        let codes: HashSet<u8> = LedMode::ALL.iter().map(|mode| mode.code()).collect();
        assert_eq!(codes.len(), LedMode::ALL.len());
        assert_eq!(codes, (0..5).collect());
    }

    #[test]
    fn round_trip_by_code_and_name() {
        for mode in LedMode::ALL {
            assert_eq!(LedMode::from_code(mode.code()).unwrap(), mode);
            assert_eq!(LedMode::from_name(mode.name()).unwrap(), mode);
        }
    }

    #[test]
    fn unknown_lookups_fail() {
        let err = LedMode::from_name("strobe").unwrap_err();
        assert!(err.to_string().contains("unknown LED mode name"));

        let err = LedMode::from_code(5).unwrap_err();
        assert!(err.to_string().contains("unknown LED mode code"));
    }
}

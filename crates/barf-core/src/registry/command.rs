use super::error::RegistryError;
use super::wire;

/// Logical commands exchanged over the bridge.
///
/// Each command has a corrected logical name (what callers write) and a
/// canonical wire tag (what goes on the wire). The two differ where the
/// deployed protocol carries a historical spelling: `PathFragment` is tagged
/// `"path_frament"` and `RequestResponse` is tagged `"respond"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Debug,
    Method,
    NumFragments,
    PathFragment,
    GetVar,
    GetValue,
    RequestResponse,
    ResponseStart,
    ResponseEnd,
    Ssid,
    Password,
    Connect,
    Disconnect,
    Timeout,
    LedMode,
    Get,
    Post,
    AllowGpio,
    DisallowGpio,
    BaudRate,
    IsConnected,
    GetIp,
}

impl Command {
    /// Every command, in declaration order (stable for snapshots).
    pub const ALL: [Command; 22] = [
        Command::Debug,
        Command::Method,
        Command::NumFragments,
        Command::PathFragment,
        Command::GetVar,
        Command::GetValue,
        Command::RequestResponse,
        Command::ResponseStart,
        Command::ResponseEnd,
        Command::Ssid,
        Command::Password,
        Command::Connect,
        Command::Disconnect,
        Command::Timeout,
        Command::LedMode,
        Command::Get,
        Command::Post,
        Command::AllowGpio,
        Command::DisallowGpio,
        Command::BaudRate,
        Command::IsConnected,
        Command::GetIp,
    ];

    /// Canonical wire tag for this command.
    pub fn tag(self) -> &'static str {
        match self {
            Command::Debug => wire::COMMAND_DEBUG,
            Command::Method => wire::COMMAND_METHOD,
            Command::NumFragments => wire::COMMAND_NUM_FRAGMENTS,
            Command::PathFragment => wire::COMMAND_PATH_FRAGMENT,
            Command::GetVar => wire::COMMAND_GET_VAR,
            Command::GetValue => wire::COMMAND_GET_VALUE,
            Command::RequestResponse => wire::COMMAND_REQUEST_RESPONSE,
            Command::ResponseStart => wire::COMMAND_RESPONSE_START,
            Command::ResponseEnd => wire::COMMAND_RESPONSE_END,
            Command::Ssid => wire::COMMAND_SSID,
            Command::Password => wire::COMMAND_PASSWORD,
            Command::Connect => wire::COMMAND_CONNECT,
            Command::Disconnect => wire::COMMAND_DISCONNECT,
            Command::Timeout => wire::COMMAND_TIMEOUT,
            Command::LedMode => wire::COMMAND_LED_MODE,
            Command::Get => wire::COMMAND_GET,
            Command::Post => wire::COMMAND_POST,
            Command::AllowGpio => wire::COMMAND_ALLOW_GPIO,
            Command::DisallowGpio => wire::COMMAND_DISALLOW_GPIO,
            Command::BaudRate => wire::COMMAND_BAUD_RATE,
            Command::IsConnected => wire::COMMAND_IS_CONNECTED,
            Command::GetIp => wire::COMMAND_GET_IP,
        }
    }

    /// Logical name for this command (corrected spelling).
    pub fn name(self) -> &'static str {
        match self {
            Command::Debug => "debug",
            Command::Method => "method",
            Command::NumFragments => "num_fragments",
            Command::PathFragment => "path_fragment",
            Command::GetVar => "get_var",
            Command::GetValue => "get_value",
            Command::RequestResponse => "request_response",
            Command::ResponseStart => "response_start",
            Command::ResponseEnd => "response_end",
            Command::Ssid => "ssid",
            Command::Password => "password",
            Command::Connect => "connect",
            Command::Disconnect => "disconnect",
            Command::Timeout => "timeout",
            Command::LedMode => "led_mode",
            Command::Get => "get",
            Command::Post => "post",
            Command::AllowGpio => "allow_gpio",
            Command::DisallowGpio => "disallow_gpio",
            Command::BaudRate => "baud_rate",
            Command::IsConnected => "is_connected",
            Command::GetIp => "get_ip",
        }
    }

    pub fn from_tag(tag: &str) -> Result<Self, RegistryError> {
        Self::ALL
            .into_iter()
            .find(|command| command.tag() == tag)
            .ok_or_else(|| RegistryError::UnknownCommandTag {
                tag: tag.to_string(),
            })
    }

    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or_else(|| RegistryError::UnknownCommand {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Command;

    #[test]
    fn tags_and_names_are_unique() {
        let tags: HashSet<&str> = Command::ALL.iter().map(|command| command.tag()).collect();
        assert_eq!(tags.len(), Command::ALL.len());

        let names: HashSet<&str> = Command::ALL.iter().map(|command| command.name()).collect();
        assert_eq!(names.len(), Command::ALL.len());
    }

    #[test]
    fn round_trip_by_tag_and_name() {
        for command in Command::ALL {
            assert_eq!(Command::from_tag(command.tag()).unwrap(), command);
            assert_eq!(Command::from_name(command.name()).unwrap(), command);
        }
    }

    #[test]
    fn historical_spellings_are_preserved_on_the_wire() {
        assert_eq!(Command::PathFragment.tag(), "path_frament");
        assert_eq!(Command::PathFragment.name(), "path_fragment");
        assert_eq!(Command::RequestResponse.tag(), "respond");
        assert_eq!(Command::NumFragments.tag(), "num_fragments");
    }

    #[test]
    fn unknown_lookups_fail() {
        let err = Command::from_name("frobnicate").unwrap_err();
        assert!(err.to_string().contains("unknown command name"));

        // The wire does not carry the corrected spelling.
        let err = Command::from_tag("path_fragment").unwrap_err();
        assert!(err.to_string().contains("unknown command tag"));
    }
}

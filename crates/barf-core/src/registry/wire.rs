//! Literal wire values (source of truth).
//!
//! Both endpoints of the bridge (firmware and host library) are built
//! independently; every constant here must match the peer byte-for-byte.
//! Typed lookups live in the sibling modules and must reference these
//! constants rather than repeating literals.

pub const METHOD_GET: u8 = 0;
pub const METHOD_POST: u8 = 1;

pub const LED_ACTIVITY: u8 = 0;
pub const LED_CONNECTION: u8 = 1;
pub const LED_OFF: u8 = 2;
pub const LED_ON: u8 = 3;
pub const LED_GPIO: u8 = 4;

// Reserved values, never valid as ordinary payload data.
pub const SENTINEL_ERROR: &str = "__err__";
pub const SENTINEL_TIMEOUT: &str = "__timeout__";
pub const SENTINEL_UNEXPECTED_COMMAND: &str = "__unexpected_command__";

pub const COMMAND_DEBUG: &str = "debug";
pub const COMMAND_METHOD: &str = "method";
pub const COMMAND_NUM_FRAGMENTS: &str = "num_fragments";
// Misspelled on the wire; kept as-is for compatibility with deployed peers.
pub const COMMAND_PATH_FRAGMENT: &str = "path_frament";
pub const COMMAND_GET_VAR: &str = "get_var";
pub const COMMAND_GET_VALUE: &str = "get_value";
pub const COMMAND_REQUEST_RESPONSE: &str = "respond";
pub const COMMAND_RESPONSE_START: &str = "response_start";
pub const COMMAND_RESPONSE_END: &str = "response_end";

pub const COMMAND_SSID: &str = "ssid";
pub const COMMAND_PASSWORD: &str = "password";
pub const COMMAND_CONNECT: &str = "connect";
pub const COMMAND_DISCONNECT: &str = "disconnect";
pub const COMMAND_TIMEOUT: &str = "timeout";
pub const COMMAND_LED_MODE: &str = "led_mode";
pub const COMMAND_GET: &str = "get";
pub const COMMAND_POST: &str = "post";
pub const COMMAND_ALLOW_GPIO: &str = "allow_gpio";
pub const COMMAND_DISALLOW_GPIO: &str = "disallow_gpio";
pub const COMMAND_BAUD_RATE: &str = "baud_rate";
pub const COMMAND_IS_CONNECTED: &str = "is_connected";
pub const COMMAND_GET_IP: &str = "get_ip";

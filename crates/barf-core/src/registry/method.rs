use super::error::RegistryError;
use super::wire;

/// Request method carried by the bridge.
///
/// Exactly two variants exist; the wire form is a single byte (0 or 1) and
/// the set is not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Every method, in wire-code order.
    pub const ALL: [Method; 2] = [Method::Get, Method::Post];

    pub fn code(self) -> u8 {
        match self {
            Method::Get => wire::METHOD_GET,
            Method::Post => wire::METHOD_POST,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
        }
    }

    pub fn from_code(code: u8) -> Result<Self, RegistryError> {
        Self::ALL
            .into_iter()
            .find(|method| method.code() == code)
            .ok_or(RegistryError::UnknownMethodCode { code })
    }

    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == name)
            .ok_or_else(|| RegistryError::UnknownMethod {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Method;

    #[test]
    fn codes_are_zero_and_one() {
        assert_eq!(Method::Get.code(), 0);
        assert_eq!(Method::Post.code(), 1);
        assert_ne!(Method::Get.code(), Method::Post.code());
    }

    #[test]
    fn round_trip_by_code_and_name() {
        for method in Method::ALL {
            assert_eq!(Method::from_code(method.code()).unwrap(), method);
            assert_eq!(Method::from_name(method.name()).unwrap(), method);
        }
    }

    #[test]
    fn unknown_lookups_fail() {
        let err = Method::from_name("frobnicate").unwrap_err();
        assert!(err.to_string().contains("unknown method name"));

        let err = Method::from_code(2).unwrap_err();
        assert!(err.to_string().contains("unknown method code"));
    }
}

use std::{fmt, str::FromStr};

use base64::{engine::general_purpose::URL_SAFE, Engine as _};

use crate::error::Error;

/// Opaque pagination token. Internally the offset of the item after the one
/// it points at, as a decimal string in base64.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor(u32);

impl Cursor {
    pub fn from_offset(offset: u32) -> Self {
        Cursor(offset)
    }

    pub fn offset(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&URL_SAFE.encode(self.0.to_string()))
    }
}

impl FromStr for Cursor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE.decode(s).map_err(|_| Error::Cursor(s.to_string()))?;

        std::str::from_utf8(&bytes)
            .ok()
            .and_then(|decoded| decoded.parse().ok())
            .map(Cursor)
            .ok_or_else(|| Error::Cursor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_is_symmetric() {
        let cursor = Cursor::from_offset(40);
        let encoded = cursor.to_string();

        assert_eq!(encoded, "NDA=");
        assert_eq!(encoded.parse::<Cursor>().unwrap().offset(), 40);
    }

    #[test]
    fn non_numeric_payload_is_rejected() {
        let encoded = URL_SAFE.encode("forty");
        let error = encoded.parse::<Cursor>().unwrap_err();

        assert!(matches!(error, Error::Cursor(_)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("!!not base64!!".parse::<Cursor>().is_err());
    }
}

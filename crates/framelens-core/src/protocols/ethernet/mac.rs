use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 48-bit hardware address, rendered as `aa:bb:cc:dd:ee:ff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; 6]);

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MacVisitor;

        impl<'de> Visitor<'de> for MacVisitor {
            type Value = MacAddr;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a MAC address like aa:bb:cc:dd:ee:ff")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<MacAddr, E> {
                let mut bytes = [0u8; 6];
                let mut parts = value.split(':');
                for byte in &mut bytes {
                    let part = parts
                        .next()
                        .ok_or_else(|| E::custom("expected 6 colon-separated octets"))?;
                    *byte = u8::from_str_radix(part, 16)
                        .map_err(|_| E::custom(format!("invalid octet '{part}'")))?;
                }
                if parts.next().is_some() {
                    return Err(E::custom("expected 6 colon-separated octets"));
                }
                Ok(MacAddr(bytes))
            }
        }

        deserializer.deserialize_str(MacVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::MacAddr;

    #[test]
    fn display_is_lowercase_colon_separated() {
        let mac = MacAddr([0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]);
        assert_eq!(mac.to_string(), "de:ad:be:ef:00:01");
    }

    #[test]
    fn serde_round_trips_as_string() {
        let mac = MacAddr([1, 2, 3, 4, 5, 6]);
        let json = serde_json::to_string(&mac).unwrap();
        assert_eq!(json, "\"01:02:03:04:05:06\"");
        let back: MacAddr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mac);
    }

    #[test]
    fn deserialize_rejects_short_address() {
        let result: Result<MacAddr, _> = serde_json::from_str("\"01:02:03\"");
        assert!(result.is_err());
    }
}

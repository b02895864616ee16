//! # Input Validator
//!
//! Checks the two user inputs before anything touches the system.
//!
//! The interface rule is a plain function pointer ([`InterfaceRule`]) so the
//! allow-list can be replaced without changing the validator or its callers.
//! The default rule, [`is_legacy_interface_name`], is intentionally narrow: it
//! accepts names like `eth0` or `ens33` and rejects `enp0s3`, `wlan0` and `lo`.

use std::fmt;

use pnet::util::MacAddr;
use thiserror::Error;

use crate::network::mac;

/// Predicate deciding whether an interface name is acceptable.
pub type InterfaceRule = fn(&str) -> bool;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid interface name: {0:?}")]
    InvalidInterface(String),
    #[error("invalid MAC address: {0:?}")]
    InvalidMacAddress(String),
    #[error("invalid interface name {interface:?} and MAC address {mac_address:?}")]
    Both {
        interface: String,
        mac_address: String,
    },
}

/// An interface name that passed the active [`InterfaceRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceName(String);

impl InterfaceName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A MAC address in `XX:XX:XX:XX:XX:XX` form.
///
/// Keeps the text exactly as the user typed it, since that is what gets handed
/// to the configuration command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacAddress {
    text: String,
    addr: MacAddr,
}

impl MacAddress {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn addr(&self) -> MacAddr {
        self.addr
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTarget {
    pub interface: InterfaceName,
    pub mac_address: MacAddress,
}

/// `^[en][tnl][shp]\d{1,2}$`, ASCII only.
pub fn is_legacy_interface_name(name: &str) -> bool {
    let bytes: &[u8] = name.as_bytes();
    if !(4..=5).contains(&bytes.len()) {
        return false;
    }

    matches!(bytes[0], b'e' | b'n')
        && matches!(bytes[1], b't' | b'n' | b'l')
        && matches!(bytes[2], b's' | b'h' | b'p')
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

pub fn is_valid_mac_address(mac_address: &str) -> bool {
    mac::parse_strict(mac_address).is_some()
}

#[derive(Debug, Clone, Copy)]
pub struct Validator {
    interface_rule: InterfaceRule,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(is_legacy_interface_name)
    }
}

impl Validator {
    pub fn new(interface_rule: InterfaceRule) -> Self {
        Self { interface_rule }
    }

    /// Runs both checks independently and reports which of them failed.
    pub fn check(
        &self,
        interface: &str,
        mac_address: &str,
    ) -> Result<ValidatedTarget, ValidationError> {
        let interface_ok: bool = (self.interface_rule)(interface);
        let parsed: Option<MacAddr> = mac::parse_strict(mac_address);

        match (interface_ok, parsed) {
            (true, Some(addr)) => Ok(ValidatedTarget {
                interface: InterfaceName(interface.to_string()),
                mac_address: MacAddress {
                    text: mac_address.to_string(),
                    addr,
                },
            }),
            (true, None) => Err(ValidationError::InvalidMacAddress(mac_address.to_string())),
            (false, Some(_)) => Err(ValidationError::InvalidInterface(interface.to_string())),
            (false, None) => Err(ValidationError::Both {
                interface: interface.to_string(),
                mac_address: mac_address.to_string(),
            }),
        }
    }

    pub fn validate(&self, interface: &str, mac_address: &str) -> bool {
        self.check(interface, mac_address).is_ok()
    }
}

/// `true` only when both the interface name and the MAC address are valid
/// under the default rules.
pub fn validate(interface: &str, mac_address: &str) -> bool {
    Validator::default().validate(interface, mac_address)
}

use std::fmt;

/// Which OS utility is used to cycle the interface and set its address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Legacy `ifconfig IF hw ether MAC`.
    #[default]
    Ifconfig,
    /// `ip link set dev IF address MAC` from iproute2.
    Iproute2,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Ifconfig => write!(f, "ifconfig"),
            Backend::Iproute2 => write!(f, "iproute2"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub backend: Backend,
    /// Treat invalid input, failed commands and an unchanged address as errors
    /// (non-zero exit) instead of only printing a message.
    pub strict: bool,
    /// 0 prints everything, 1 hides decorations, 2 also hides the address details.
    pub quiet: u8,
    pub no_banner: bool,
}

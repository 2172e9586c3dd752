//! Closed symbol tables for enumerated configuration values.
//!
//! Each enum carries its canonical on-disk spelling (`as_str`) and the full
//! list of accepted symbols (`variants`), which is what error messages show
//! when a lookup fails. Matching is always case-insensitive.

use serde::{Deserialize, Serialize};

macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Canonical spelling used in the config document and CLI output.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            /// Every accepted symbol, in declaration order.
            pub const fn variants() -> &'static [&'static str] {
                &[$($text),+]
            }

            /// Case-insensitive lookup of a symbol.
            pub fn from_text(text: &str) -> Option<Self> {
                $(
                    if text.eq_ignore_ascii_case($text) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }
        }
    };
}

symbol_enum! {
    /// How queries for the resolver's own PTR record are answered.
    PtrMode {
        None => "NONE",
        Hostname => "HOSTNAME",
        HostnameFqdn => "HOSTNAMEFQDN",
        PiHole => "PI.HOLE",
    }
}

symbol_enum! {
    /// Reply sent to clients that exceeded their rate limit.
    BusyMode {
        Block => "BLOCK",
        Allow => "ALLOW",
        Refuse => "REFUSE",
        Drop => "DROP",
    }
}

symbol_enum! {
    /// How blocked queries are answered.
    BlockingMode {
        Null => "NULL",
        IpNodataAaaa => "IP-NODATA-AAAA",
        Ip => "IP",
        Nxdomain => "NXDOMAIN",
        Nodata => "NODATA",
    }
}

symbol_enum! {
    /// Which client hostnames the hourly PTR refresh re-resolves.
    RefreshHostnames {
        Ipv4Only => "IPV4_ONLY",
        All => "ALL",
        Unknown => "UNKNOWN",
        None => "NONE",
    }
}

symbol_enum! {
    /// Which interfaces the dependent resolver binds to.
    ListeningMode {
        Local => "LOCAL",
        All => "ALL",
        Single => "SINGLE",
        Bind => "BIND",
        None => "NONE",
    }
}

symbol_enum! {
    /// Web interface color theme.
    WebTheme {
        DefaultAuto => "default-auto",
        DefaultLight => "default-light",
        DefaultDark => "default-dark",
        DefaultDarker => "default-darker",
        HighContrast => "high-contrast",
        HighContrastDark => "high-contrast-dark",
        Lcars => "lcars",
    }
}

/// Bounds for `misc.privacyLevel`, a numeric range rather than a symbol table.
pub const PRIVACY_LEVEL_MIN: u8 = 0;
pub const PRIVACY_LEVEL_MAX: u8 = 3;

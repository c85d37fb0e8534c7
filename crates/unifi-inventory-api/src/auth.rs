use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The platform type of the UniFi controller.
///
/// Determines the legacy URL prefix and the login/logout paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControllerPlatform {
    /// UniFi OS device (UDM, UCG, etc.) -- `/proxy/network/` prefix.
    UnifiOs,
    /// Standalone Network Application (Java) -- port 8443, no prefix.
    #[default]
    ClassicController,
}

impl ControllerPlatform {
    /// The path prefix for legacy API endpoints.
    pub fn legacy_prefix(self) -> &'static str {
        match self {
            Self::UnifiOs => "/proxy/network",
            Self::ClassicController => "",
        }
    }

    /// The login endpoint path.
    ///
    /// - UniFi OS: `/api/auth/login`
    /// - Standalone: `/api/login`
    pub fn login_path(self) -> &'static str {
        match self {
            Self::UnifiOs => "/api/auth/login",
            Self::ClassicController => "/api/login",
        }
    }

    /// The logout endpoint path.
    pub fn logout_path(self) -> &'static str {
        match self {
            Self::UnifiOs => "/api/auth/logout",
            Self::ClassicController => "/api/logout",
        }
    }
}

/// Platform name not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown controller platform '{0}' (expected 'classic' or 'unifi-os')")]
pub struct UnknownPlatform(pub String);

impl FromStr for ControllerPlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "standalone" | "controller" => Ok(Self::ClassicController),
            "unifi-os" | "unifios" | "unifi_os" | "udm" => Ok(Self::UnifiOs),
            other => Err(UnknownPlatform(other.to_owned())),
        }
    }
}

impl fmt::Display for ControllerPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnifiOs => "unifi-os",
            Self::ClassicController => "classic",
        })
    }
}

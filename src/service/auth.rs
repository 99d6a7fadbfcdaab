//! Auth API 1.0 profiles.

use std::fmt;

use crate::base::constants::{context, types};

/// Interaction pattern of an auth cookie service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthCookieProfile {
    Login,
    Clickthrough,
    Kiosk,
    External,
}

impl AuthCookieProfile {
    pub const ALL: [AuthCookieProfile; 4] = [
        Self::Login,
        Self::Clickthrough,
        Self::Kiosk,
        Self::External,
    ];

    pub fn uri(self) -> &'static str {
        match self {
            Self::Login => "http://iiif.io/api/auth/1/login",
            Self::Clickthrough => "http://iiif.io/api/auth/1/clickthrough",
            Self::Kiosk => "http://iiif.io/api/auth/1/kiosk",
            Self::External => "http://iiif.io/api/auth/1/external",
        }
    }

    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|profile| profile.uri() == uri)
    }
}

impl fmt::Display for AuthCookieProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

/// Which fixed-profile auth service an [`AuthService`](super::AuthService) is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthServiceKind {
    Token,
    Logout,
}

impl AuthServiceKind {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Token => types::AUTH_TOKEN_SERVICE_1,
            Self::Logout => types::AUTH_LOGOUT_SERVICE_1,
        }
    }

    pub fn profile(self) -> &'static str {
        match self {
            Self::Token => context::AUTH_TOKEN_PROFILE,
            Self::Logout => context::AUTH_LOGOUT_PROFILE,
        }
    }
}

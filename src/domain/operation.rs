//! Catalog of the named operations exposed by the hub.

use std::fmt;

/// A named, independently invocable unit of server-side computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Uuid,
    Hash,
    Base64,
    QrCode,
    Shorten,
    Time,
    Password,
    Json,
    Redirect,
}

impl Operation {
    /// Operations shown as cards on the index page, in display order.
    pub const CARDS: [Operation; 8] = [
        Operation::Uuid,
        Operation::Hash,
        Operation::Base64,
        Operation::QrCode,
        Operation::Shorten,
        Operation::Time,
        Operation::Password,
        Operation::Json,
    ];

    /// Machine name, also used as the card key in the presenter script.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Uuid => "uuid",
            Operation::Hash => "hash",
            Operation::Base64 => "base64",
            Operation::QrCode => "qrcode",
            Operation::Shorten => "shorten",
            Operation::Time => "time",
            Operation::Password => "password",
            Operation::Json => "json",
            Operation::Redirect => "redirect",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Operation::Uuid => "UUID Generator",
            Operation::Hash => "Hash Generator",
            Operation::Base64 => "Base64 Tools",
            Operation::QrCode => "QR Code",
            Operation::Shorten => "URL Shortener",
            Operation::Time => "Time Converter",
            Operation::Password => "Password Gen",
            Operation::Json => "JSON Tools",
            Operation::Redirect => "Short Link Redirect",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Operation::Uuid => "🔑",
            Operation::Hash => "🔒",
            Operation::Base64 => "📄",
            Operation::QrCode => "📱",
            Operation::Shorten => "🔗",
            Operation::Time => "⏰",
            Operation::Password => "🎯",
            Operation::Json => "📊",
            Operation::Redirect => "↪️",
        }
    }

    /// API path serving this operation.
    pub fn endpoint(self) -> &'static str {
        match self {
            Operation::Uuid => "/api/uuid",
            Operation::Hash => "/api/hash",
            Operation::Base64 => "/api/base64",
            Operation::QrCode => "/api/qrcode",
            Operation::Shorten => "/api/shorten",
            Operation::Time => "/api/time",
            Operation::Password => "/api/password",
            Operation::Json => "/api/json",
            Operation::Redirect => "/api/redirect",
        }
    }

    /// Whether the presenter collects parameters in a form before dispatch.
    pub fn needs_form(self) -> bool {
        matches!(
            self,
            Operation::Hash | Operation::Base64 | Operation::Shorten | Operation::Json
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

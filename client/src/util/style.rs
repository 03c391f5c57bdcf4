//! Tag-to-style lookups for badges and parameter cards.
//!
//! DESIGN
//! ======
//! Every colored element on the page is driven by a small closed enum. The
//! mapping to CSS classes is a plain `match`, so adding a tone is a compile
//! error everywhere it is not handled.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::fmt;

/// Color family used by badges and accented cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Primary,
    Secondary,
    Accent,
    Dark,
}

impl Tone {
    /// CSS modifier name shared by `badge--*` and `param--*` classes.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Dark => "dark",
        }
    }

    /// Full badge class list for this tone.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Success => "badge badge--success",
            Self::Error => "badge badge--error",
            Self::Warning => "badge badge--warning",
            Self::Info => "badge badge--info",
            Self::Primary => "badge badge--primary",
            Self::Secondary => "badge badge--secondary",
            Self::Accent => "badge badge--accent",
            Self::Dark => "badge badge--dark",
        }
    }
}

/// HTTP verbs that can label a documented endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Badge tone for the verb: reads are green, destructive calls red.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Get => Tone::Success,
            Self::Post => Tone::Info,
            Self::Put => Tone::Warning,
            Self::Patch => Tone::Primary,
            Self::Delete => Tone::Error,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge tone for an HTTP status code string.
#[must_use]
pub fn status_tone(status: &str) -> Tone {
    if status == "200" {
        Tone::Success
    } else if status.starts_with('4') || status.starts_with('5') {
        Tone::Error
    } else {
        Tone::Info
    }
}

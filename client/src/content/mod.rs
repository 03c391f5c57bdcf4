//! Static endpoint catalog rendered by the portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The "API" is display content only. Nothing here is routed by the server;
//! the catalog exists so page composition, the typing prompt and the copy
//! buttons all read the same paths.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod profile;

use serde::Serialize;

use crate::util::style::{HttpMethod, Tone};

/// Base URL prefixed to every documented path.
pub const BASE_URL: &str = "https://api.developer-portfolio.dev";

pub const API_TITLE: &str = "Developer Portfolio API";
pub const API_SUBTITLE: &str = "RESTful Interface v2.1";
pub const RATE_LIMIT_NOTE: &str =
    "No authentication required for public endpoints. Rate limited to 1000 requests/hour.";

/// Phrases cycled by the terminal prompt in the page header.
pub const TYPING_PHRASES: [&str; 4] = [
    "GET /developer/info",
    "GET /developer/skills",
    "GET /developer/experience",
    "GET /developer/projects",
];

/// One documented query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryParam {
    pub name: &'static str,
    pub kind: &'static str,
    pub required: bool,
    pub description: &'static str,
    pub tone: Tone,
}

impl QueryParam {
    /// `(integer, optional)` style annotation shown after the name.
    #[must_use]
    pub fn annotation(&self) -> String {
        if self.required {
            format!("({})", self.kind)
        } else {
            format!("({}, optional)", self.kind)
        }
    }
}

/// One fake endpoint card.
#[derive(Clone, Copy, Debug)]
pub struct Endpoint {
    /// Element id, usable as an in-page anchor.
    pub id: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub query_params: &'static [QueryParam],
    body: fn() -> serde_json::Result<String>,
}

impl Endpoint {
    /// Pretty-printed JSON example response.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the résumé section cannot be encoded.
    pub fn response_body(&self) -> serde_json::Result<String> {
        (self.body)()
    }

    /// Absolute URL copied to the clipboard.
    #[must_use]
    pub fn url(&self) -> String {
        endpoint_url(self.path)
    }

    /// `GET /developer/info` style request line.
    #[must_use]
    pub fn request_line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

fn pretty<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

fn info_body() -> serde_json::Result<String> {
    pretty(&profile::PROFILE)
}

fn skills_body() -> serde_json::Result<String> {
    pretty(&profile::SKILLS)
}

fn experience_body() -> serde_json::Result<String> {
    pretty(&profile::EXPERIENCE)
}

fn projects_body() -> serde_json::Result<String> {
    pretty(&profile::PROJECTS)
}

fn resume_body() -> serde_json::Result<String> {
    pretty(&profile::RESUME)
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        id: "info",
        method: HttpMethod::Get,
        path: "/developer/info",
        description: "Retrieve basic developer information and contact details",
        status: "200",
        query_params: &[],
        body: info_body,
    },
    Endpoint {
        id: "skills",
        method: HttpMethod::Get,
        path: "/developer/skills",
        description: "Get comprehensive list of technical skills and proficiency levels",
        status: "200",
        query_params: &[],
        body: skills_body,
    },
    Endpoint {
        id: "experience",
        method: HttpMethod::Get,
        path: "/developer/experience",
        description: "Retrieve work experience and career history",
        status: "200",
        query_params: &[],
        body: experience_body,
    },
    Endpoint {
        id: "projects",
        method: HttpMethod::Get,
        path: "/developer/projects",
        description: "Get portfolio of notable projects and contributions",
        status: "200",
        query_params: &[
            QueryParam {
                name: "limit",
                kind: "integer",
                required: false,
                description: "Number of projects (default: 10)",
                tone: Tone::Info,
            },
            QueryParam {
                name: "category",
                kind: "string",
                required: false,
                description: "Filter by category",
                tone: Tone::Primary,
            },
        ],
        body: projects_body,
    },
    Endpoint {
        id: "resume",
        method: HttpMethod::Get,
        path: "/developer/resume",
        description: "Download resume in various formats with metadata",
        status: "200",
        query_params: &[QueryParam {
            name: "format",
            kind: "string",
            required: false,
            description: r#""pdf" | "docx" | "json" | "html" (default: "pdf")"#,
            tone: Tone::Warning,
        }],
        body: resume_body,
    },
];

/// Join [`BASE_URL`] and a documented path.
#[must_use]
pub fn endpoint_url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Look up a catalogued endpoint by its anchor id.
#[must_use]
pub fn find_endpoint(id: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|endpoint| endpoint.id == id)
}

/// Owned copy of [`TYPING_PHRASES`] for the typing driver.
#[must_use]
pub fn typing_phrases() -> Vec<String> {
    TYPING_PHRASES.iter().map(|phrase| (*phrase).to_owned()).collect()
}

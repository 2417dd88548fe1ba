//! Defines `RouteMetadata`, the server-side rendering metadata usually stored in a `RouteTree`.
//!
//! A `RouteTree` accepts any metadata type; this module provides the one used for rendering
//! decisions so that build and render stages can share a single schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How the content of a route is produced.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderMode {
    /// Rendered on the server for every request.
    Server,

    /// Rendered in the browser; the server returns the application shell.
    Client,

    /// Rendered once at build time and served as a static file.
    Prerender,
}

/// Rendering metadata attached to a route.
///
/// Serializes with camelCase field names, omitting the optional fields that are not set:
///
/// ```rust
/// # use ssr_route_tree::{RenderMode, RouteMetadata};
/// let meta = RouteMetadata::new(RenderMode::Server).with_redirect_to("/home-page");
/// assert_eq!(
///     serde_json::to_string(&meta).unwrap(),
///     r#"{"renderMode":"server","redirectTo":"/home-page"}"#
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetadata {
    /// How the route is rendered.
    pub render_mode: RenderMode,

    /// Target of a redirect, when the route redirects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,

    /// HTTP status code to respond with instead of the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Extra response headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

impl RouteMetadata {
    /// Creates metadata with the given render mode and nothing else set.
    pub fn new(render_mode: RenderMode) -> Self {
        RouteMetadata {
            render_mode,
            redirect_to: None,
            status: None,
            headers: None,
        }
    }

    /// Sets the redirect target.
    pub fn with_redirect_to<S>(mut self, redirect_to: S) -> Self
    where
        S: Into<String>,
    {
        self.redirect_to = Some(redirect_to.into());
        self
    }

    /// Sets the response status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Adds a response header, replacing any earlier value for the same name.
    pub fn with_header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }
}

impl From<RenderMode> for RouteMetadata {
    fn from(render_mode: RenderMode) -> Self {
        RouteMetadata::new(render_mode)
    }
}

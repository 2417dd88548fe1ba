//! Defines `RouteRecord`, the flat form of a single registered route.

use serde::{Deserialize, Serialize};

/// A registered route pattern together with the metadata it was registered with.
///
/// This is both the value returned by `RouteTree::match_route` and the unit of the flat,
/// portable representation produced by `RouteTree::to_records`. When serialized, the metadata
/// fields are flattened next to `route`:
///
/// ```rust
/// # use serde_json::json;
/// # use ssr_route_tree::RouteRecord;
/// let record = RouteRecord::new("/home", json!({ "redirectTo": "/home-page" }));
/// assert_eq!(
///     serde_json::to_string(&record).unwrap(),
///     r#"{"route":"/home","redirectTo":"/home-page"}"#
/// );
/// ```
///
/// Because of this flattening, `M` must serialize as a struct or a map; scalar metadata such as
/// a bare integer cannot be serialized. The `route` key is reserved: metadata carrying its own
/// `route` field produces a record which cannot be deserialized again.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord<M> {
    route: String,
    #[serde(flatten)]
    metadata: M,
}

impl<M> RouteRecord<M> {
    /// Creates a new `RouteRecord`.
    ///
    /// The route is stored as given. Records built by a `RouteTree` always carry the canonical
    /// route, with wildcards rendered as `*` and catch-alls as `**`.
    pub fn new<S>(route: S, metadata: M) -> Self
    where
        S: Into<String>,
    {
        RouteRecord {
            route: route.into(),
            metadata,
        }
    }

    /// The route pattern of this record, e.g. `/shop/categories/*/products/*`.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The metadata registered for this route.
    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    /// Splits the record into its route and metadata.
    pub fn into_parts(self) -> (String, M) {
        (self.route, self.metadata)
    }
}

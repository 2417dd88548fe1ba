//! Defines helper functions for splitting route patterns and request paths into segments.

const EXCLUDED_SEGMENTS: [&str; 1] = [""];

/// Holder for a path that has been split into individual segments.
///
/// Used by the `RouteTree` both when registering a pattern and when resolving a request path,
/// so that the two are always normalized identically.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSegments<'a> {
    segments: Vec<&'a str>,
}

impl<'a> PathSegments<'a> {
    /// Creates a new `PathSegments` instance by splitting a path on `/`.
    ///
    /// Empty segments are skipped, which removes leading, trailing and repeated slashes. So, a
    /// path of `/some/path/to//my/handler/` will be split into segments:
    ///
    /// ```plain
    /// ["some", "path", "to", "my", "handler"]
    /// ```
    ///
    /// Both `""` and `"/"` produce no segments and therefore address the root.
    pub fn new(path: &'a str) -> Self {
        let segments = path
            .split('/')
            .filter(|s| !EXCLUDED_SEGMENTS.contains(s))
            .collect();

        PathSegments { segments }
    }

    /// Provides the segments of the path, in order.
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }
}

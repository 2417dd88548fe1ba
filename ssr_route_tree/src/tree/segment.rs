//! Defines `Segment` for `RouteTree`.

use std::fmt::{self, Display, Formatter};

/// Indicates the type of segment which is being represented by a `Node`.
///
/// When matching, a `Static` segment always wins over a `Wildcard`, which always wins over a
/// `CatchAll`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Segment<'a> {
    /// Is matched exactly (case-sensitive string equality) to the segment of a request path.
    Static(&'a str),

    /// Matches any single segment of a request path. Written as `*` or as a named parameter
    /// such as `:id`; the name is not retained.
    Wildcard,

    /// Matches all remaining segments of a request path. Written as `**`.
    CatchAll,
}

impl<'a> Segment<'a> {
    /// Determines the type of a single pattern segment.
    pub fn parse(segment: &'a str) -> Self {
        match segment {
            "**" => Segment::CatchAll,
            "*" => Segment::Wildcard,
            s if s.starts_with(':') => Segment::Wildcard,
            s => Segment::Static(s),
        }
    }
}

impl Display for Segment<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Static(s) => f.write_str(s),
            Segment::Wildcard => f.write_str("*"),
            Segment::CatchAll => f.write_str("**"),
        }
    }
}

/// Renders the canonical route string for a sequence of segments.
///
/// Wildcards render as `*` and catch-alls as `**`, so `/users/:id` becomes `/users/*`. No
/// segments at all renders as the root, `/`.
pub fn canonical_route(segments: &[Segment<'_>]) -> String {
    if segments.is_empty() {
        return String::from("/");
    }

    segments.iter().fold(String::new(), |mut route, segment| {
        route.push('/');
        route.push_str(&segment.to_string());
        route
    })
}

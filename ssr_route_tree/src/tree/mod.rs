//! Defines a hierarchical `RouteTree` with subtrees of `Node`.

use std::iter::FromIterator;

use log::{debug, trace, warn};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::path::PathSegments;
use crate::record::RouteRecord;
use crate::tree::node::{Node, Records};
use crate::tree::segment::{canonical_route, Segment};

pub mod node;
pub mod segment;

/// A hierarchical structure that provides a root `Node` and subtrees of linked nodes
/// that represent registered route patterns.
///
/// The `RouteTree` is built once per configuration pass with `insert`, may be handed to another
/// process through its flat form (`to_records` and `from_records`, or `serde`), and is then
/// queried read-only with `match_route`. A shared `&RouteTree` exposes no mutation, so it can be
/// queried from many threads at once, e.g. behind an `Arc`.
///
/// # Examples
///
/// ```rust
/// # use ssr_route_tree::RouteTree;
/// let mut tree = RouteTree::new();
/// tree.insert("/blog/:slug", "article");
/// tree.insert("/blog/archive", "archive");
/// tree.insert("/**", "fallback");
///
/// let record = tree.match_route("/blog/archive").unwrap();
/// assert_eq!(record.route(), "/blog/archive");
/// assert_eq!(*record.metadata(), "archive");
///
/// let record = tree.match_route("/blog/hello-world").unwrap();
/// assert_eq!(record.route(), "/blog/*");
///
/// let record = tree.match_route("/about/team").unwrap();
/// assert_eq!(record.route(), "/**");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RouteTree<M> {
    root: Node<M>,
    len: usize,
}

impl<M> RouteTree<M> {
    /// Creates a new `RouteTree` and root `Node`.
    pub fn new() -> Self {
        trace!(" creating new tree");
        RouteTree {
            root: Node::new(),
            len: 0,
        }
    }

    /// Rebuilds a `RouteTree` from its flat form, as produced by `to_records`.
    ///
    /// Every record is inserted with its route and metadata, so the result matches exactly like
    /// the tree the records were taken from.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RouteRecord<M>>,
    {
        records
            .into_iter()
            .map(RouteRecord::into_parts)
            .collect()
    }

    /// Registers `metadata` for the route pattern `path`.
    ///
    /// Leading, trailing and repeated slashes are ignored, so `foo`, `/foo` and `/foo/` are the
    /// same pattern. Segments `*` and `:name` match any single segment and `**` matches all
    /// remaining segments. Registering a pattern again replaces its metadata.
    pub fn insert(&mut self, path: &str, metadata: M) {
        let path_segments = PathSegments::new(path);
        let segments = path_segments
            .segments()
            .iter()
            .map(|s| Segment::parse(s))
            .collect::<Vec<_>>();

        let route = canonical_route(&segments);
        trace!(" inserting route `{}` for `{}`", route, path);

        if let Some(n) = segments.iter().position(|s| *s == Segment::CatchAll) {
            if n + 1 < segments.len() {
                warn!(
                    "route `{}` has segments after a catch-all and can never be matched",
                    route
                );
            }
        }

        let node = segments
            .iter()
            .fold(&mut self.root, |node, segment| node.child_mut(*segment));

        match node.set_record(RouteRecord::new(route, metadata)) {
            Some(previous) => debug!("replaced metadata for route `{}`", previous.route()),
            None => self.len += 1,
        }
    }

    /// Resolves a request path to the most specific registered route.
    ///
    /// The request path is normalized the same way as patterns given to `insert`. At every
    /// segment a static match is preferred over a wildcard, and a wildcard over a catch-all,
    /// falling back to the less specific alternatives whenever a more specific branch fails to
    /// consume the whole path.
    ///
    /// Returns `None` when no registered route matches.
    pub fn match_route(&self, path: &str) -> Option<&RouteRecord<M>> {
        let path_segments = PathSegments::new(path);
        trace!(" starting tree traversal for `{}`", path);

        let found = self.root.traverse(path_segments.segments());
        match found {
            Some(record) => trace!(" matched `{}` to route `{}`", path, record.route()),
            None => trace!(" no route matches `{}`", path),
        }
        found
    }

    /// Iterates all registered routes in canonical order.
    ///
    /// The order is depth-first, each route before the routes beneath it, with static segments
    /// in lexicographic order, then wildcards, then catch-alls. It depends only on the set of
    /// registered routes, never on the order they were inserted in.
    pub fn records(&self) -> Records<'_, M> {
        self.root.records()
    }

    /// Flattens the tree into one `RouteRecord` per registered route, in the order given by
    /// `records`.
    pub fn to_records(&self) -> Vec<RouteRecord<M>>
    where
        M: Clone,
    {
        self.records().cloned().collect()
    }

    /// True if no route has been registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of registered routes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Borrow the root `Node`.
    pub fn root(&self) -> &Node<M> {
        &self.root
    }
}

impl<M> Default for RouteTree<M> {
    fn default() -> Self {
        RouteTree::new()
    }
}

impl<M, S> FromIterator<(S, M)> for RouteTree<M>
where
    S: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, M)>,
    {
        let mut tree = RouteTree::new();
        tree.extend(iter);
        tree
    }
}

impl<M, S> Extend<(S, M)> for RouteTree<M>
where
    S: AsRef<str>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (S, M)>,
    {
        for (path, metadata) in iter {
            self.insert(path.as_ref(), metadata);
        }
    }
}

/// Serializes as the sequence of `RouteRecord` values yielded by `records`.
///
/// Metadata fields are flattened into each record, so `M` must serialize as a struct or a map
/// without a `route` key. Any other `M`, such as an integer, makes serialization fail.
impl<M> Serialize for RouteTree<M>
where
    M: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records())
    }
}

/// Deserializes from a sequence of `RouteRecord` values, see `from_records`.
///
/// Every field of a record other than `route` is handed to `M`, which must therefore
/// deserialize from a struct or a map.
impl<'de, M> Deserialize<'de> for RouteTree<M>
where
    M: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<RouteRecord<M>>::deserialize(deserializer).map(RouteTree::from_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route<M>(tree: &RouteTree<M>, path: &str) -> Option<String> {
        tree.match_route(path).map(|r| r.route().to_owned())
    }

    #[test]
    fn tree_traversal_tests() {
        let mut tree = RouteTree::new();
        tree.insert("/activate/:thing", 1);

        let record = tree.match_route("/activate/workflow5").unwrap();
        assert_eq!(record.route(), "/activate/*");
        assert_eq!(*record.metadata(), 1);

        assert!(tree.match_route("/").is_none());
        assert!(tree.match_route("/activate").is_none());
    }

    #[test]
    fn prefers_exact_over_wildcards() {
        let mut tree = RouteTree::new();
        for path in &["/", "/*", "/*/*", "/**", "/blog", "/blog/*"] {
            tree.insert(path, ());
        }

        assert_eq!(route(&tree, "/").as_deref(), Some("/"));
        assert_eq!(route(&tree, "/blog").as_deref(), Some("/blog"));
        assert_eq!(route(&tree, "/something").as_deref(), Some("/*"));
        assert_eq!(route(&tree, "/blog/article").as_deref(), Some("/blog/*"));
        assert_eq!(route(&tree, "/something/another").as_deref(), Some("/*/*"));
        assert_eq!(
            route(&tree, "/something/another/nested").as_deref(),
            Some("/**")
        );
    }

    #[test]
    fn exact_match_registered_after_wildcard_wins() {
        let mut tree = RouteTree::new();
        tree.insert("/blog/*", "wildcard");
        tree.insert("/blog/article", "exact");

        assert_eq!(*tree.match_route("/blog/article").unwrap().metadata(), "exact");
        assert_eq!(*tree.match_route("/blog/other").unwrap().metadata(), "wildcard");
    }

    #[test]
    fn last_insert_wins() {
        let mut tree = RouteTree::new();
        tree.insert("/a/:id", 1);
        tree.insert("a/*/", 2);

        assert_eq!(tree.len(), 1);
        assert_eq!(*tree.match_route("/a/b").unwrap().metadata(), 2);
    }

    #[test]
    fn len_counts_distinct_routes() {
        let mut tree = RouteTree::new();
        for (n, path) in ["/", "/a", "/a/", "/a/:id", "/a/*", "/a/**", "b//c"]
            .iter()
            .enumerate()
        {
            tree.insert(path, n);
        }

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.len(), tree.records().count());
        assert_eq!(RouteTree::from_records(tree.to_records()).len(), 5);
    }

    #[test]
    fn empty_tree() {
        let tree: RouteTree<()> = RouteTree::default();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.to_records().is_empty());
        assert!(tree.match_route("").is_none());
        assert!(tree.match_route("/any-path").is_none());
    }

    #[test]
    fn root_route() {
        let mut tree = RouteTree::new();
        tree.insert("", 0);

        assert!(!tree.is_empty());
        assert_eq!(route(&tree, "").as_deref(), Some("/"));
        assert_eq!(route(&tree, "/").as_deref(), Some("/"));
        assert!(tree.match_route("/x").is_none());
    }

    #[test]
    fn records_do_not_depend_on_insertion_order() {
        let paths = ["/home", "/about", "/products/:id", "/api/details", "/**", "/"];

        let forward = paths.iter().map(|p| (*p, ())).collect::<RouteTree<_>>();
        let backward = paths.iter().rev().map(|p| (*p, ())).collect::<RouteTree<_>>();

        let routes = forward.records().map(RouteRecord::route).collect::<Vec<_>>();
        assert_eq!(
            routes,
            vec!["/", "/about", "/api/details", "/home", "/products/*", "/**"]
        );
        assert_eq!(forward.to_records(), backward.to_records());
        assert_eq!(forward, backward);
    }

    #[test]
    fn from_records_round_trip() {
        let mut tree = RouteTree::new();
        tree.insert("/shop/categories/:category/products/:id", 1);
        tree.insert("/shop/cart", 2);
        tree.insert("/shop/**", 3);

        let rebuilt = RouteTree::from_records(tree.to_records());
        assert_eq!(rebuilt, tree);

        for path in &[
            "/shop/categories/electronics/products/123",
            "/shop/cart",
            "/shop/categories/electronics",
            "/shop",
            "/nonexistent",
        ] {
            assert_eq!(rebuilt.match_route(path), tree.match_route(path));
        }
    }
}

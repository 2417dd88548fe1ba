//! Defines `Node`, a recursive member of a `RouteTree` representing one segment of a route.

use std::collections::BTreeMap;

use log::trace;

use crate::record::RouteRecord;
use crate::tree::segment::Segment;

/// A recursive member of `RouteTree` representative of a segment in a registered route.
///
/// Static children are keyed by their segment value. A `Node` holds at most one wildcard child
/// and at most one catch-all child, and carries a `RouteRecord` only when a registered route
/// terminates here.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<M> {
    children: BTreeMap<String, Node<M>>,
    wildcard: Option<Box<Node<M>>>,
    catch_all: Option<Box<Node<M>>>,
    record: Option<RouteRecord<M>>,
}

impl<M> Node<M> {
    /// Creates a new `Node` with no children and no route.
    pub fn new() -> Self {
        Node {
            children: BTreeMap::new(),
            wildcard: None,
            catch_all: None,
            record: None,
        }
    }

    /// The route terminating at this `Node`, if any.
    pub fn record(&self) -> Option<&RouteRecord<M>> {
        self.record.as_ref()
    }

    /// True if there is at least one child `Node` present.
    pub fn is_parent(&self) -> bool {
        !self.children.is_empty() || self.wildcard.is_some() || self.catch_all.is_some()
    }

    /// True if a registered route terminates at this `Node`.
    pub fn is_routable(&self) -> bool {
        self.record.is_some()
    }

    /// Borrow the child representing the segment provided, if it exists.
    pub fn borrow_child(&self, segment: Segment<'_>) -> Option<&Node<M>> {
        match segment {
            Segment::Static(s) => self.children.get(s),
            Segment::Wildcard => self.wildcard.as_deref(),
            Segment::CatchAll => self.catch_all.as_deref(),
        }
    }

    /// Mutably borrow the child representing the segment provided, creating it first when it
    /// does not exist yet.
    pub(crate) fn child_mut(&mut self, segment: Segment<'_>) -> &mut Node<M> {
        trace!(" descending into `{}`", segment);

        match segment {
            Segment::Static(s) => self.children.entry(s.to_owned()).or_insert_with(Node::new),
            Segment::Wildcard => self.wildcard.get_or_insert_with(|| Box::new(Node::new())),
            Segment::CatchAll => self.catch_all.get_or_insert_with(|| Box::new(Node::new())),
        }
    }

    /// Attaches a route to this `Node`, returning the route it replaces.
    pub(crate) fn set_record(&mut self, record: RouteRecord<M>) -> Option<RouteRecord<M>> {
        self.record.replace(record)
    }

    /// Recursively traverses children attempting to locate a path of nodes which consumes all
    /// of `req_path_segments` and ends on a routable `Node`.
    ///
    /// Children are tried from most to least specific, backtracking whenever a branch fails:
    ///
    /// 1. Static
    /// 2. Wildcard
    /// 3. CatchAll
    ///
    /// A catch-all consumes every remaining segment, including none at all once the request
    /// path has been exhausted, so `/de/**` matches both `/de/x/y` and `/de`.
    pub fn traverse<'r>(&'r self, req_path_segments: &[&str]) -> Option<&'r RouteRecord<M>> {
        match req_path_segments.split_first() {
            None => self.record().or_else(|| self.catch_all_record()),
            Some((segment, rest)) => {
                if let Some(record) = self.children.get(*segment).and_then(|c| c.traverse(rest)) {
                    trace!(" found static match for `{}`", segment);
                    return Some(record);
                }

                if let Some(record) = self.wildcard.as_deref().and_then(|c| c.traverse(rest)) {
                    trace!(" found wildcard match for `{}`", segment);
                    return Some(record);
                }

                self.catch_all_record()
            }
        }
    }

    fn catch_all_record(&self) -> Option<&RouteRecord<M>> {
        self.catch_all.as_deref().and_then(Node::record)
    }

    /// Iterates the routes of this sub-tree depth-first, each `Node` before its children, with
    /// static children in key order, then the wildcard child, then the catch-all child.
    pub fn records(&self) -> Records<'_, M> {
        Records { stack: vec![self] }
    }
}

impl<M> Default for Node<M> {
    fn default() -> Self {
        Node::new()
    }
}

/// Depth-first iterator over the routes of a `Node`, created by `Node::records`.
pub struct Records<'a, M> {
    stack: Vec<&'a Node<M>>,
}

impl<'a, M> Iterator for Records<'a, M> {
    type Item = &'a RouteRecord<M>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // Pushed in reverse so the static children are visited first.
            self.stack.extend(node.catch_all.as_deref());
            self.stack.extend(node.wildcard.as_deref());
            self.stack.extend(node.children.values().rev());

            if let Some(record) = node.record() {
                return Some(record);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::path::PathSegments;

    fn add(root: &mut Node<u32>, path: &str, id: u32) {
        let segments = PathSegments::new(path)
            .segments()
            .iter()
            .map(|s| Segment::parse(s))
            .collect::<Vec<_>>();

        let node = segments
            .iter()
            .fold(root, |node, segment| node.child_mut(*segment));
        node.set_record(RouteRecord::new(path, id));
    }

    fn test_structure() -> Node<u32> {
        let mut root = Node::new();

        add(&mut root, "/seg1", 1);
        add(&mut root, "/seg3/seg4", 2);

        // Ensure traversal will backtrack and find the correct path if it goes down an ultimately
        // invalid branch, in this case seg6 initially being matched by the static segment but
        // only `/seg5/*/seg7` accepting the remainder.
        add(&mut root, "/seg5/seg6", 3);
        add(&mut root, "/seg5/*/seg7", 4);

        // Ensure traversal will respect catch-alls
        add(&mut root, "/seg8/**", 5);
        add(&mut root, "/seg8/seg9/*", 6);

        root
    }

    fn traverse(root: &Node<u32>, path: &str) -> Option<u32> {
        root.traverse(PathSegments::new(path).segments())
            .map(|record| *record.metadata())
    }

    #[test]
    fn manages_children() {
        let root = test_structure();

        assert!(root.borrow_child(Segment::Static("seg1")).is_some());
        assert!(root.borrow_child(Segment::Static("seg0")).is_none());
        assert!(root.borrow_child(Segment::Wildcard).is_none());

        let seg5 = root.borrow_child(Segment::Static("seg5")).unwrap();
        assert!(seg5.is_parent());
        assert!(!seg5.is_routable());
        assert!(seg5.borrow_child(Segment::Wildcard).is_some());
    }

    #[test]
    fn traverses_children() {
        let root = test_structure();

        assert_eq!(traverse(&root, "/seg3/seg4"), Some(2));
        assert_eq!(traverse(&root, "/seg3/seg4/seg5"), None);
        assert_eq!(traverse(&root, "/seg3"), None);

        assert_eq!(traverse(&root, "/seg5/seg6"), Some(3));
        assert_eq!(traverse(&root, "/seg5/someval/seg7"), Some(4));
        assert_eq!(traverse(&root, "/seg5/seg6/seg7"), Some(4));

        assert_eq!(traverse(&root, "/seg8/seg9/x"), Some(6));
        assert_eq!(traverse(&root, "/seg8/seg9/x/y"), Some(5));
        assert_eq!(traverse(&root, "/seg8/seg9"), Some(5));
        assert_eq!(traverse(&root, "/seg8"), Some(5));
    }

    #[test]
    fn catch_all_without_route_does_not_match() {
        let mut root = Node::new();
        add(&mut root, "/a/**/b", 1);

        assert_eq!(traverse(&root, "/a/x/b"), None);
        assert_eq!(traverse(&root, "/a/x"), None);
    }

    #[test]
    fn replaces_records() {
        let mut root = Node::new();
        add(&mut root, "/a", 1);

        let previous = root
            .child_mut(Segment::Static("a"))
            .set_record(RouteRecord::new("/a", 2));

        assert_eq!(previous, Some(RouteRecord::new("/a", 1)));
        assert_eq!(traverse(&root, "/a"), Some(2));
    }

    #[test]
    fn iterates_records_depth_first() {
        let mut root = Node::new();
        add(&mut root, "/b/**", 1);
        add(&mut root, "/b/*", 2);
        add(&mut root, "/b/z", 3);
        add(&mut root, "/b", 4);
        add(&mut root, "/a", 5);
        add(&mut root, "/", 6);

        let ids = root.records().map(|r| *r.metadata()).collect::<Vec<_>>();
        assert_eq!(ids, vec![6, 5, 4, 3, 2, 1]);
    }
}

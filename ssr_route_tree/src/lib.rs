//! A segment trie which resolves request paths to the metadata of the most specific registered
//! route pattern, used to decide how server-side rendering handles a request.
//!
//! Patterns are made of static segments, single segment wildcards (`*` or `:name`) and trailing
//! catch-alls (`**`). Static segments are preferred over wildcards, and wildcards over
//! catch-alls, backtracking at every level until the whole request path is consumed.
//!
//! A `RouteTree` is built at build time, flattened into a sequence of `RouteRecord` values (see
//! the `manifest` module for the JSON form), and rebuilt in the rendering process where it is
//! queried read-only.
//!
//! ```rust
//! # use ssr_route_tree::{manifest, RenderMode, RouteMetadata, RouteTree};
//! let mut tree = RouteTree::new();
//! tree.insert("/users/:id", RouteMetadata::new(RenderMode::Server));
//! tree.insert("/**", RouteMetadata::new(RenderMode::Client));
//!
//! let json = manifest::to_json(&tree).unwrap();
//! let tree: RouteTree<RouteMetadata> = manifest::from_json(&json).unwrap();
//!
//! let record = tree.match_route("/users/123").unwrap();
//! assert_eq!(record.route(), "/users/*");
//! assert_eq!(record.metadata().render_mode, RenderMode::Server);
//! ```
#![warn(missing_docs, deprecated)]
#![doc(test(no_crate_inject, attr(deny(warnings))))]

pub mod error;
pub mod manifest;
pub mod metadata;
pub mod path;
pub mod record;
pub mod tree;

pub use crate::error::{ManifestError, Result};
pub use crate::metadata::{RenderMode, RouteMetadata};
pub use crate::record::RouteRecord;
pub use crate::tree::RouteTree;

//! Helpers for handing a `RouteTree` between processes as a JSON route manifest.
//!
//! The manifest is the flat form of the tree: a JSON array with one object per registered
//! route, each carrying `route` alongside the metadata fields, in the canonical order of
//! `RouteTree::records`. Equal trees always produce byte-identical manifests.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::trace;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::tree::RouteTree;

/// Serializes the tree to a compact JSON manifest.
pub fn to_json<M>(tree: &RouteTree<M>) -> Result<String>
where
    M: Serialize,
{
    Ok(serde_json::to_string(tree)?)
}

/// Serializes the tree to a pretty-printed JSON manifest, suitable for diffing across builds.
pub fn to_json_pretty<M>(tree: &RouteTree<M>) -> Result<String>
where
    M: Serialize,
{
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Rebuilds a tree from a JSON manifest.
pub fn from_json<M>(json: &str) -> Result<RouteTree<M>>
where
    M: DeserializeOwned,
{
    Ok(serde_json::from_str(json)?)
}

/// Writes the tree as a JSON manifest to `writer`.
pub fn write_to<M, W>(tree: &RouteTree<M>, writer: W) -> Result<()>
where
    M: Serialize,
    W: Write,
{
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer(&mut writer, tree)?;
    writer.flush()?;
    Ok(())
}

/// Reads a tree from a JSON manifest provided by `reader`.
pub fn read_from<M, R>(reader: R) -> Result<RouteTree<M>>
where
    M: DeserializeOwned,
    R: Read,
{
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Writes the tree as a JSON manifest to the file at `path`, replacing its contents.
pub fn write_file<M, P>(tree: &RouteTree<M>, path: P) -> Result<()>
where
    M: Serialize,
    P: AsRef<Path>,
{
    trace!(" writing route manifest to {}", path.as_ref().display());
    write_to(tree, File::create(path)?)
}

/// Reads a tree from the JSON manifest file at `path`.
pub fn read_file<M, P>(path: P) -> Result<RouteTree<M>>
where
    M: DeserializeOwned,
    P: AsRef<Path>,
{
    trace!(" reading route manifest from {}", path.as_ref().display());
    read_from(File::open(path)?)
}

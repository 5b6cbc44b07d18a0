//! Lockfile document model. Two shapes exist: v2/v3 lockfiles carry a
//! flat `packages` map keyed by install path, legacy lockfiles nest
//! records under `dependencies` to unbounded depth.

use offline_manifest::external::indexmap::IndexMap;
use serde::Deserialize;

mod r#impl;

#[derive(Debug, Deserialize)]
pub struct LockDocument {
    // flat install-path map, lockfile v2/v3
    #[serde(default)]
    packages: Option<IndexMap<String, PackageRecord>>,
    // nested name map, legacy lockfiles
    #[serde(default)]
    dependencies: Option<IndexMap<String, TreeRecord>>,
}

/// Entry of the flat `packages` map. A missing `resolved` means the
/// entry is not a fetchable package.
#[derive(Debug, Default, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub resolved: Option<String>,
    #[serde(default)]
    pub integrity: Option<String>,
}

/// Entry of the legacy `dependencies` tree. A record can be both a
/// package and a parent of further packages.
#[derive(Debug, Default, Deserialize)]
pub struct TreeRecord {
    #[serde(default)]
    pub resolved: Option<String>,
    #[serde(default)]
    pub integrity: Option<String>,
    #[serde(default)]
    pub dependencies: Option<IndexMap<String, TreeRecord>>,
}

/// Traversal strategy, picked from the document shape.
#[derive(Debug)]
pub enum LockSchema<'d> {
    Flat(&'d IndexMap<String, PackageRecord>),
    Tree(&'d IndexMap<String, TreeRecord>),
    Empty,
}

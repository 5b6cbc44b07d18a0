//! Traversals over the two lockfile shapes. Both feed every resolved
//! entry through the same normalization tail, so the hash logic exists
//! exactly once.

use offline_manifest::external::indexmap::IndexMap;
use offline_manifest::integrity::{self, SHA512_TAG};
use offline_manifest::source_record::{SourceList, SourceRecord};
use url::Url;

use crate::error::EntryError;
use crate::fetch;
use crate::lockfile::{LockDocument, LockSchema, PackageRecord, TreeRecord};
use crate::warn_print;

/// Install prefix of flat-form keys, stripped for destination names.
const NODE_MODULES: &str = "node_modules/";

/// Cache subdirectory all destinations land in.
const CACHE_DIR: &str = "npm-cache";

/// Collect one source record per fetchable dependency, in document
/// order; entries whose hash cannot be determined are dropped.
pub fn collect_sources(doc: &LockDocument) -> SourceList {
    let mut sources = SourceList::empty();

    match doc.schema() {
        LockSchema::Flat(packages) => collect_flat(packages, &mut sources),
        LockSchema::Tree(dependencies) => collect_tree(dependencies, &mut sources),
        LockSchema::Empty => {}
    }

    sources
}

/// Flat form: keys are install paths. The empty key is the project
/// itself, never a fetchable package.
fn collect_flat(packages: &IndexMap<String, PackageRecord>, sources: &mut SourceList) {
    for (path, record) in packages {
        if path.is_empty() {
            continue;
        }
        let Some(url) = &record.resolved else {
            continue;
        };
        if url.is_empty() {
            continue;
        }

        // scoped names keep their internal slashes
        let dest = match path.strip_prefix(NODE_MODULES) {
            Some(stripped) => stripped.to_string(),
            None => url_basename(url),
        };

        push_normalized(url, record.integrity.as_deref(), dest, path, sources);
    }
}

/// Tree form: explicit worklist instead of call recursion, deeply
/// nested lockfiles must not exhaust the stack. Frames keep their
/// entry iterator so emission order stays strict pre-order.
fn collect_tree(dependencies: &IndexMap<String, TreeRecord>, sources: &mut SourceList) {
    let mut stack = vec![(String::new(), dependencies.iter())];

    while let Some((prefix, mut entries)) = stack.pop() {
        while let Some((name, record)) = entries.next() {
            let path = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}/{name}")
            };

            if let Some(url) = &record.resolved {
                if !url.is_empty() {
                    let dest = url_basename(url);
                    push_normalized(url, record.integrity.as_deref(), dest, &path, sources);
                }
            }

            // a record can be both a package and a parent of more
            if let Some(nested) = &record.dependencies {
                stack.push((prefix, entries));
                stack.push((path, nested.iter()));
                break;
            }
        }
    }
}

/// Shared tail of both traversals: resolve the hash, keep the record
/// or drop the entry with a diagnostic.
fn push_normalized(
    url: &str,
    integrity: Option<&str>,
    dest: String,
    entry_path: &str,
    sources: &mut SourceList,
) {
    match normalize_entry(url, integrity, dest) {
        Ok(record) => sources.push(record),
        Err(err) => warn_print("Skipping", &format!("{entry_path}: {err}")),
    }
}

/// Resolve the canonical hash: inline decode when the lockfile carries
/// a sha512 integrity, fetch and digest otherwise.
fn normalize_entry(
    url: &str,
    integrity: Option<&str>,
    dest: String,
) -> Result<SourceRecord, EntryError> {
    let sha512 = match integrity {
        Some(integrity) if integrity.starts_with(SHA512_TAG) => integrity::decode_sha512(integrity)
            .map_err(|e| EntryError::HashDecode(e.to_string()))?,
        _ => fetch::fetch_sha512(url)?,
    };

    Ok(SourceRecord::file(
        url.to_string(),
        sha512,
        format!("{CACHE_DIR}/{dest}"),
    ))
}

/// Final path segment of the URL, query and fragment excluded.
fn url_basename(url: &str) -> String {
    let path = Url::parse(url)
        .map(|parsed| parsed.path().to_string())
        .unwrap_or_else(|_| url.to_string());

    match path.rsplit('/').next() {
        Some(base) => base.to_string(),
        None => path,
    }
}

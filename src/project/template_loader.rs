//! Loading of template catalogs.
//!
//! A catalog is a directory holding an `index` file and one snippet file per
//! template. Each `index` line naming a `<name>.js` file declares the template
//! `<name>`; other lines are ignored. The default catalog is compiled into the
//! crate from `templates/`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace, warn};

use super::config::TemplateSource;
use crate::ide::{TemplateEntry, TemplateIndex};

/// Name of the file listing a catalog's templates.
pub const CATALOG_FILE: &str = "index";

const TEMPLATE_EXTENSION: &str = ".js";

const BUNDLED_CATALOG: &str = include_str!("../../templates/index");

const BUNDLED: &[(&str, &str)] = &[
    ("aggregate.js", include_str!("../../templates/aggregate.js")),
    ("count.js", include_str!("../../templates/count.js")),
    ("createIndex.js", include_str!("../../templates/createIndex.js")),
    ("distinct.js", include_str!("../../templates/distinct.js")),
    ("find.js", include_str!("../../templates/find.js")),
    ("findOne.js", include_str!("../../templates/findOne.js")),
    ("insert.js", include_str!("../../templates/insert.js")),
    ("remove.js", include_str!("../../templates/remove.js")),
    ("update.js", include_str!("../../templates/update.js")),
];

/// Errors that can occur while loading a template catalog.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The directory has no catalog file.
    #[error("template catalog not found: {}", .0.display())]
    MissingCatalog(PathBuf),

    /// A catalog or template file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TemplateError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Build the template index for `source`.
///
/// Failures are logged and produce an empty index.
pub fn load_or_empty(source: &TemplateSource) -> TemplateIndex {
    match source {
        TemplateSource::Bundled => load_bundled(),
        TemplateSource::Directory(dir) => load_dir(dir).unwrap_or_else(|err| {
            warn!(error = %err, "template catalog not loaded");
            TemplateIndex::new()
        }),
        TemplateSource::None => TemplateIndex::new(),
    }
}

/// Load the catalog compiled into the crate.
pub fn load_bundled() -> TemplateIndex {
    let mut index = TemplateIndex::new();
    for (file, name) in catalog_entries(BUNDLED_CATALOG) {
        match BUNDLED.iter().find(|(bundled, _)| *bundled == file) {
            Some((_, body)) => {
                index.insert(TemplateEntry::new(name, trim_body(body)));
            }
            None => warn!(%file, "bundled template missing"),
        }
    }
    debug!(templates = index.len(), "loaded bundled templates");
    index
}

/// Load the catalog in `dir`.
///
/// Every listed file must be readable; the first failure aborts the load.
pub fn load_dir(dir: &Path) -> Result<TemplateIndex, TemplateError> {
    let catalog_path = dir.join(CATALOG_FILE);
    if !catalog_path.is_file() {
        return Err(TemplateError::MissingCatalog(catalog_path));
    }
    let catalog =
        fs::read_to_string(&catalog_path).map_err(|e| TemplateError::io(&catalog_path, e))?;

    let mut index = TemplateIndex::new();
    for (file, name) in catalog_entries(&catalog) {
        let path = dir.join(file);
        let body = fs::read_to_string(&path).map_err(|e| TemplateError::io(&path, e))?;
        index.insert(TemplateEntry::new(name, trim_body(&body)));
    }

    debug!(dir = %dir.display(), templates = index.len(), "loaded templates");
    Ok(index)
}

/// `(file, template name)` for each usable catalog line.
fn catalog_entries(catalog: &str) -> impl Iterator<Item = (&str, &str)> {
    catalog.lines().map(str::trim).filter_map(|line| {
        let Some(name) = line.strip_suffix(TEMPLATE_EXTENSION) else {
            if !line.is_empty() {
                trace!(%line, "catalog line ignored");
            }
            return None;
        };
        if !is_template_name(name) {
            warn!(%line, "template name is not an identifier");
            return None;
        }
        Some((line, name))
    })
}

/// Template names must be typeable as a single identifier, or they could
/// never be offered.
fn is_template_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first == '$' || unicode_ident::is_xid_start(first))
        && chars.all(|c| c == '$' || unicode_ident::is_xid_continue(c))
}

fn trim_body(body: &str) -> &str {
    body.trim_end_matches(['\n', '\r'])
}

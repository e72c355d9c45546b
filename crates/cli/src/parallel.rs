//! Parallel name extraction.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use font_names::postscript_name;
use log::error;
use rayon::prelude::*;

/// A font or UFO path together with its PostScript name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedFont {
    pub path: PathBuf,
    pub name: String,
}

impl NamedFont {
    pub fn read(path: &Path) -> Result<Self> {
        let name = postscript_name(path)
            .with_context(|| format!("Failed to read name of {}", path.display()))?;
        Ok(Self { path: path.to_path_buf(), name })
    }
}

/// Collect results from parallel operations without printing.
pub fn collect_parallel<T, R, F>(items: &[T], op: F) -> Vec<Result<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> Result<R> + Sync + Send,
{
    items.par_iter().map(op).collect()
}

/// Read the names of all `paths`, keeping their order.
///
/// Every failure is logged before the batch is rejected.
pub fn read_names<P>(paths: &[P]) -> Result<Vec<NamedFont>>
where
    P: AsRef<Path> + Sync,
{
    let results = collect_parallel(paths, |path| NamedFont::read(path.as_ref()));

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        for e in results.iter().filter_map(|r| r.as_ref().err()) {
            error!("{e:?}");
        }
        bail!("Name extraction failed for {failed} of {} files", results.len());
    }

    results.into_iter().collect()
}

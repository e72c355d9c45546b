//! Font and UFO discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use font_names::is_ufo;
use glob::{MatchOptions, Pattern, glob_with};
use norad::designspace::DesignSpaceDocument;

/// Find files matching a glob pattern below a directory, sorted by path.
///
/// Matching ignores case, so `*.otf` also finds `*.OTF`.
pub fn glob_fonts(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let dir_str = dir.to_str().context("Invalid directory path")?;
    let pattern_str = format!("{}/{pattern}", Pattern::escape(dir_str));
    let options = MatchOptions { case_sensitive: false, ..MatchOptions::new() };

    let mut paths: Vec<PathBuf> = glob_with(&pattern_str, options)
        .with_context(|| format!("Failed to glob pattern: {pattern_str}"))?
        .filter_map(Result::ok)
        .collect();
    paths.sort();
    Ok(paths)
}

/// Binary fonts at `path`.
///
/// A directory is searched recursively and yields its OTFs, or its TTFs when
/// it holds no OTF. A single `.otf`/`.ttf` file is returned as is; any other
/// file yields nothing.
pub fn font_paths(path: &Path) -> Result<Vec<PathBuf>> {
    ensure_exists(path)?;

    if path.is_dir() {
        let otf_paths = glob_fonts(path, "**/*.otf")?;
        if !otf_paths.is_empty() {
            return Ok(otf_paths);
        }
        return glob_fonts(path, "**/*.ttf");
    }

    if has_extension(path, &["otf", "ttf"]) {
        return Ok(vec![path.to_path_buf()]);
    }
    Ok(Vec::new())
}

/// UFO sources at `path`.
///
/// A `.ufo` directory is returned as is, other directories are searched
/// recursively, and a `.designspace` file yields its sources.
pub fn ufo_paths(path: &Path) -> Result<Vec<PathBuf>> {
    ensure_exists(path)?;

    if path.is_dir() {
        if is_ufo(path) {
            return Ok(vec![path.to_path_buf()]);
        }
        let ufos = glob_fonts(path, "**/*.ufo")?;
        return Ok(ufos.into_iter().filter(|ufo| ufo.is_dir()).collect());
    }

    if has_extension(path, &["designspace"]) {
        return designspace_sources(path);
    }
    Ok(Vec::new())
}

/// Fonts to sort at `path`: UFOs if there are any, otherwise binary fonts.
pub fn sortable_paths(path: &Path) -> Result<Vec<PathBuf>> {
    let ufos = ufo_paths(path)?;
    if !ufos.is_empty() {
        return Ok(ufos);
    }
    font_paths(path)
}

/// Source UFO paths of a designspace document, relative to the document.
pub fn designspace_sources(path: &Path) -> Result<Vec<PathBuf>> {
    let document = DesignSpaceDocument::load(path)
        .with_context(|| format!("Failed to load designspace: {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(document.sources.iter().map(|source| base.join(&source.filename)).collect())
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("No such file or directory: {}", path.display());
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

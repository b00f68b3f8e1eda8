//! Path helpers for schema references.
//!
//! Responsibilities:
//! - Express a schema path relative to the directory of the config that
//!   references it, the way editors resolve `$schema` values.
//!
//! Does NOT handle:
//! - File I/O. Paths are compared lexically; nothing is canonicalized.
//!
//! Invariants:
//! - References always use `/` separators.
//! - When no lexical relative path exists, the schema path is used as given.

use std::path::{Component, Path};

/// Returns the reference a config at `config_path` should embed for `schema_path`.
pub(crate) fn schema_reference(config_path: &Path, schema_path: &Path) -> String {
    let base = config_path.parent().unwrap_or_else(|| Path::new(""));

    match relative_components(schema_path, base) {
        Some(parts) if !parts.is_empty() => parts.join("/"),
        _ => schema_path.to_string_lossy().into_owned(),
    }
}

fn relative_components(target: &Path, base: &Path) -> Option<Vec<String>> {
    if target.is_absolute() != base.is_absolute() {
        return None;
    }

    let target: Vec<Component<'_>> = significant(target);
    let base: Vec<Component<'_>> = significant(base);

    let common = target
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    // `..` or a root left in the base cannot be walked back lexically.
    if base[common..]
        .iter()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    if target[common..]
        .iter()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
    {
        return None;
    }

    let mut parts = vec!["..".to_string(); base.len() - common];
    parts.extend(
        target[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    Some(parts)
}

fn significant(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

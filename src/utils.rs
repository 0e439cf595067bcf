use std::path::{Component, Path, PathBuf};

/// Case-folded key used wherever page identities are compared or hashed
pub fn identity_key(identity: &str) -> String {
    identity.to_lowercase()
}

/// Compare a scanned token against a markup marker such as `<A` or `</A>`
pub fn is_marker(token: &str, marker: &str) -> bool {
    token.eq_ignore_ascii_case(marker)
}

/// Strip one layer of matching quotes from an attribute value
pub fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Resolve a page identity to a file below `root`.
///
/// Returns `None` for identities that would escape the root (absolute paths,
/// `..` components) or that are empty.
pub fn resolve_in_root(root: &Path, identity: &str) -> Option<PathBuf> {
    let relative = Path::new(identity);
    if identity.is_empty() {
        return None;
    }

    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return None;
    }

    Some(root.join(relative))
}

//! Path utilities for locating the static companies resource.
//!
//! The resource is addressed the way a web page addresses it: an absolute URL
//! path such as `/companies.json`, served from a static web root directory.
//! These helpers map that onto the local filesystem.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or when `$HOME` is unset, are returned as-is.
///
/// # Examples
///
/// ```
/// use company_directory::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/srv/www"), "/srv/www");
/// assert_eq!(expand_tilde("public"), "public");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = std::env::var_os("HOME") else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if path == "~" {
        home.into_owned()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}

/// Resolves a resource URL path against a static web root.
///
/// A leading `/` on `resource` means "relative to the web root", not the
/// filesystem root.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use company_directory::infrastructure::resolve_resource;
///
/// assert_eq!(
///     resolve_resource("public", "/companies.json"),
///     Path::new("public/companies.json"),
/// );
/// ```
#[must_use]
pub fn resolve_resource(static_root: &str, resource: &str) -> PathBuf {
    let root = expand_tilde(static_root);
    let relative = resource.trim_start_matches('/');

    Path::new(&root).join(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_slash_is_relative_to_root() {
        assert_eq!(
            resolve_resource("/srv/www", "/data/companies.json"),
            PathBuf::from("/srv/www/data/companies.json")
        );
    }

    #[test]
    fn bare_resource_name() {
        assert_eq!(
            resolve_resource("public", "companies.json"),
            PathBuf::from("public/companies.json")
        );
    }

    #[test]
    fn tilde_expands_when_home_is_set() {
        let Some(home) = std::env::var_os("HOME") else {
            return;
        };
        let home = home.to_string_lossy().trim_end_matches('/').to_string();

        assert_eq!(expand_tilde("~/site"), format!("{home}/site"));
        assert!(!expand_tilde("~").starts_with('~'));
    }

    #[test]
    fn tilde_in_the_middle_is_left_alone() {
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }
}

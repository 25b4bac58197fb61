//! Filesystem locations for persisted state and logs.
//!
//! The data directory holds `state.json` (session and signed-in user) and the
//! rotating log file.

use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "COUNTRY_EXPLORER_DATA_DIR";

/// Returns the default data directory.
///
/// Resolution order:
/// 1. `COUNTRY_EXPLORER_DATA_DIR`
/// 2. `$HOME/.local/share/country-explorer`
/// 3. `./.country-explorer` when no home directory is known
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    home_dir().map_or_else(
        || PathBuf::from(".country-explorer"),
        |home| home.join(".local").join("share").join("country-explorer"),
    )
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading tilde, and every path when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use country_explorer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

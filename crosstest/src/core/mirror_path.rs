//! Mapping from repository URLs to local mirror directories.
//!
//! A mirror lives at `<storage_root>/<segment>`, where `<segment>` is the path
//! component right after the host (`https://host/<segment>/...`). Distinct
//! repositories can share a segment, so [`MirrorLayout`] keys every assignment
//! by the normalized repository identity and reports collisions instead of
//! letting two repositories share one directory.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where a repository URL lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    /// Normalized `host/path`, lowercase, without trailing `/` or `.git`.
    pub identity: String,
    /// Namespace segment used as the mirror directory name.
    pub segment: String,
}

/// Split a URL into its identity and mirror segment.
pub fn locate(url: &str) -> Result<RepoLocation, String> {
    let parts: Vec<&str> = url.trim().split('/').collect();
    let (Some(host), Some(segment)) = (parts.get(2), parts.get(3)) else {
        return Err(format!("url '{url}' has no namespace segment"));
    };
    if host.is_empty() {
        return Err(format!("url '{url}' has no host"));
    }
    if segment.is_empty() || *segment == "." || *segment == ".." {
        return Err(format!("url '{url}' has an unusable namespace segment"));
    }

    let path = parts[3..].join("/");
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    Ok(RepoLocation {
        identity: format!("{}/{}", host.to_lowercase(), path.to_lowercase()),
        segment: (*segment).to_string(),
    })
}

/// Outcome of assigning a URL to a mirror directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// Directory reserved for this repository (or already reserved by the same one).
    Path(PathBuf),
    /// Another repository already owns the directory.
    Collision { segment: String, existing: String },
    /// URL cannot be mapped to a directory.
    Invalid(String),
}

/// Keyed mapping of repository identities to mirror directories.
#[derive(Debug, Clone)]
pub struct MirrorLayout {
    root: PathBuf,
    owners: BTreeMap<String, String>,
}

impl MirrorLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            owners: BTreeMap::new(),
        }
    }

    pub fn assign(&mut self, url: &str) -> Assignment {
        let location = match locate(url) {
            Ok(location) => location,
            Err(reason) => return Assignment::Invalid(reason),
        };
        match self.owners.get(&location.segment) {
            Some(existing) if *existing != location.identity => Assignment::Collision {
                segment: location.segment,
                existing: existing.clone(),
            },
            Some(_) => Assignment::Path(self.root.join(&location.segment)),
            None => {
                let path = self.root.join(&location.segment);
                self.owners.insert(location.segment, location.identity);
                Assignment::Path(path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_is_component_after_host() {
        let location = locate("https://github.com/OzerovaDaria/pythonprac").expect("locate");
        assert_eq!(location.segment, "OzerovaDaria");
        assert_eq!(location.identity, "github.com/ozerovadaria/pythonprac");
    }

    #[test]
    fn identity_ignores_git_suffix_and_trailing_slash() {
        let plain = locate("https://github.com/a/repo").expect("plain");
        let suffixed = locate("https://GitHub.com/a/repo.git/").expect("suffixed");
        assert_eq!(plain.identity, suffixed.identity);
    }

    #[test]
    fn short_url_is_invalid() {
        assert!(locate("https://github.com").is_err());
        assert!(locate("not a url").is_err());
        assert!(locate("https://host/../repo").is_err());
    }

    #[test]
    fn layout_joins_segment_under_root() {
        let mut layout = MirrorLayout::new("crosstest_repos");
        let assignment = layout.assign("https://git.cs.msu.ru/s02190248/pythonprac");
        assert_eq!(
            assignment,
            Assignment::Path(PathBuf::from("crosstest_repos/s02190248"))
        );
    }

    #[test]
    fn same_repository_twice_shares_directory() {
        let mut layout = MirrorLayout::new("root");
        let first = layout.assign("https://github.com/a/repo");
        let second = layout.assign("https://github.com/a/repo.git");
        assert_eq!(first, second);
    }

    #[test]
    fn different_hosts_with_same_segment_collide() {
        let mut layout = MirrorLayout::new("root");
        layout.assign("https://github.com/student/pythonprac");
        let clash = layout.assign("https://gitlab.com/student/pythonprac");
        assert_eq!(
            clash,
            Assignment::Collision {
                segment: "student".to_string(),
                existing: "github.com/student/pythonprac".to_string(),
            }
        );
    }
}

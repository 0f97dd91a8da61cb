use std::fmt;
use std::path::{Component, Path, PathBuf};

use url::Url;

use crate::error::{Error, Result};

/// Hosting services understood by the `host:user/repo` shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    GitHub,
    GitLab,
    Bitbucket,
    SourceHut,
}

impl Host {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "github" | "github.com" => Some(Host::GitHub),
            "gitlab" | "gitlab.com" => Some(Host::GitLab),
            "bitbucket" | "bitbucket.org" => Some(Host::Bitbucket),
            "sourcehut" | "git.sr.ht" => Some(Host::SourceHut),
            _ => None,
        }
    }

    fn clone_url(&self, user: &str, repo: &str) -> String {
        match self {
            Host::GitHub => format!("https://github.com/{user}/{repo}"),
            Host::GitLab => format!("https://gitlab.com/{user}/{repo}"),
            Host::Bitbucket => format!("https://bitbucket.org/{user}/{repo}"),
            Host::SourceHut => format!("https://git.sr.ht/~{user}/{repo}"),
        }
    }
}

/// A parsed template identifier.
///
/// Accepts `[host:]user/repo[/sub/dir][#ref]` shorthands as well as full
/// repository URLs optionally followed by `#ref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// URL handed to git for cloning.
    pub url: String,
    /// Directory inside the repository to materialize instead of its root.
    pub subdir: Option<PathBuf>,
    /// Branch, tag or commit to check out.
    pub reference: Option<String>,
}

impl TemplateSource {
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidTemplateSource {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid("identifier is empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(invalid("identifier contains whitespace"));
        }

        let (location, reference) = match trimmed.split_once('#') {
            Some((_, "")) => return Err(invalid("ref after '#' is empty")),
            Some((location, reference)) => (location, Some(reference.to_string())),
            None => (trimmed, None),
        };

        if Self::is_url(location) {
            return Ok(Self { url: location.to_string(), subdir: None, reference });
        }
        if location.contains("://") {
            return Err(invalid("unsupported URL scheme"));
        }

        let (host, path) = match location.split_once(':') {
            Some((prefix, path)) => {
                let host =
                    Host::from_prefix(prefix).ok_or_else(|| invalid("unknown host"))?;
                (host, path)
            }
            None => (Host::GitHub, location),
        };

        let mut segments = path.trim_end_matches('/').split('/');
        let user = segments.next().filter(|s| !s.is_empty());
        let repo = segments.next().map(|s| s.trim_end_matches(".git")).filter(|s| !s.is_empty());
        let (Some(user), Some(repo)) = (user, repo) else {
            return Err(invalid("expected 'user/repo'"));
        };

        let rest: Vec<&str> = segments.collect();
        let subdir = if rest.is_empty() {
            None
        } else {
            let subdir: PathBuf = rest.iter().collect();
            if rest.iter().any(|s| s.is_empty()) || !Self::is_contained(&subdir) {
                return Err(invalid("subdirectory must be a plain relative path"));
            }
            Some(subdir)
        };

        Ok(Self { url: host.clone_url(user, repo), subdir, reference })
    }

    /// Returns `true` for URLs git can clone directly, including the
    /// scp-like `git@host:user/repo` form.
    fn is_url(s: &str) -> bool {
        if let Ok(url) = Url::parse(s) {
            if matches!(url.scheme(), "http" | "https" | "git" | "ssh" | "file") {
                return true;
            }
        }
        if let Some((user_host, path)) = s.split_once(':') {
            if let Some((user, host)) = user_host.split_once('@') {
                return !user.is_empty()
                    && host.contains('.')
                    && path.contains('/');
            }
        }
        false
    }

    /// Returns `true` when `path` only contains normal components.
    pub(crate) fn is_contained(path: &Path) -> bool {
        path.components().all(|c| matches!(c, Component::Normal(_)))
    }

    /// Whether the source points at the local filesystem.
    pub fn is_local(&self) -> bool {
        self.url.starts_with("file://")
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)?;
        if let Some(subdir) = &self.subdir {
            let subdir: Vec<String> = subdir
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            write!(f, "/{}", subdir.join("/"))?;
        }
        if let Some(reference) = &self.reference {
            write!(f, "#{reference}")?;
        }
        Ok(())
    }
}

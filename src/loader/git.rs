use std::path::{Path, PathBuf};

use git2::build::{CheckoutBuilder, RepoBuilder};
use walkdir::WalkDir;

use crate::{
    constants::GIT_DIR,
    error::{Error, Result},
    ioutils::{copy_file, create_dir_all, is_dir_empty},
    loader::{directives::apply_directives, interface::TemplateFetcher, TemplateSource},
};

/// Fetches templates from git repositories, keeping only the working tree.
#[derive(Debug, Default)]
pub struct GitFetcher {
    force: bool,
}

impl GitFetcher {
    /// Creates a new GitFetcher. With `force`, a non-empty destination is
    /// written into instead of rejected.
    pub fn new(force: bool) -> Self {
        Self { force }
    }

    fn clone_repository(source: &TemplateSource, clone_path: &Path) -> Result<git2::Repository> {
        log::debug!("Cloning '{}' to '{}'", source.url, clone_path.display());

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
            } else {
                git2::Cred::default()
            }
        });

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);
        // libgit2 cannot fetch shallow over the local transport, and a ref may
        // point anywhere in history.
        if source.reference.is_none() && !source.is_local() {
            fetch_opts.depth(1);
        }

        let mut builder = RepoBuilder::new();
        builder.fetch_options(fetch_opts);
        Ok(builder.clone(&source.url, clone_path)?)
    }

    fn checkout_reference(repo: &git2::Repository, reference: &str) -> Result<()> {
        let object = repo
            .revparse_single(reference)
            .or_else(|_| repo.revparse_single(&format!("origin/{reference}")))
            .map_err(|_| Error::TemplateRefNotFound { reference: reference.to_string() })?;
        let commit = object.peel_to_commit()?;

        log::debug!("Checking out '{reference}' at {}", commit.id());

        let mut checkout = CheckoutBuilder::new();
        checkout.force();
        repo.checkout_tree(commit.as_object(), Some(&mut checkout))?;
        repo.set_head_detached(commit.id())?;
        Ok(())
    }

    fn template_root(clone_path: &Path, subdir: Option<&Path>) -> Result<PathBuf> {
        let Some(subdir) = subdir else {
            return Ok(clone_path.to_path_buf());
        };
        let root = clone_path.join(subdir);
        if !root.is_dir() {
            return Err(Error::TemplateSubdirNotFound {
                subdir: subdir.display().to_string(),
            });
        }
        Ok(root)
    }

    /// Copies everything under `root` except `.git` into `destination`.
    fn copy_tree(root: &Path, destination: &Path) -> Result<()> {
        create_dir_all(destination)?;

        let walker = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != GIT_DIR);

        for entry in walker {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let target = destination.join(relative);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                create_dir_all(&target)?;
            } else if file_type.is_symlink() {
                Self::copy_symlink(entry.path(), &target)?;
            } else {
                copy_file(entry.path(), &target)?;
            }
            log::trace!("Wrote '{}'", target.display());
        }
        Ok(())
    }

    #[cfg(unix)]
    fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
        let link = std::fs::read_link(source)?;
        crate::ioutils::remove_path(target)?;
        std::os::unix::fs::symlink(link, target)?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn copy_symlink(source: &Path, _target: &Path) -> Result<()> {
        log::warn!("Skipping symlink '{}'", source.display());
        Ok(())
    }
}

impl TemplateFetcher for GitFetcher {
    fn fetch(&self, source: &TemplateSource, destination: &Path) -> Result<()> {
        if !self.force && !is_dir_empty(destination)? {
            return Err(Error::DestinationNotEmpty {
                destination: destination.display().to_string(),
            });
        }

        let staging = tempfile::tempdir()?;
        let clone_path = staging.path().join("template");
        let repo = Self::clone_repository(source, &clone_path)?;

        if let Some(reference) = &source.reference {
            Self::checkout_reference(&repo, reference)?;
        }

        let root = Self::template_root(&clone_path, source.subdir.as_deref())?;
        apply_directives(&root)?;
        Self::copy_tree(&root, destination)?;

        log::info!("Fetched {source} into '{}'", destination.display());
        Ok(())
    }
}

//! Post-clone directives read from a template's `degit.json`.
//!
//! The file holds a JSON array of actions:
//!
//! ```json
//! [
//!   { "action": "remove", "files": ["LICENSE", ".github"] }
//! ]
//! ```
//!
//! `remove` deletes paths relative to the template root; a path that resolves
//! outside the root through a symlink is rejected. Any other action is skipped
//! with a warning, which the default log level shows.

use serde::Deserialize;
use std::path::Path;

use crate::{
    constants::DIRECTIVES_FILE,
    error::{Error, Result},
    ioutils::remove_path,
    loader::TemplateSource,
};

#[derive(Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Files {
    One(String),
    Many(Vec<String>),
}

impl Files {
    fn paths(&self) -> Vec<&str> {
        match self {
            Files::One(file) => vec![file.as_str()],
            Files::Many(files) => files.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Directive {
    Remove {
        files: Files,
    },
    Clone {
        src: String,
    },
    #[serde(other)]
    Unsupported,
}

/// Reads the directives file under `root`, if any.
pub fn load_directives(root: &Path) -> Result<Vec<Directive>> {
    let path = root.join(DIRECTIVES_FILE);
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Whether the parent of `target` is still under `root` once symlinks are
/// resolved. A missing parent has nothing to remove and counts as inside.
fn resolves_inside(root: &Path, target: &Path) -> Result<bool> {
    let Some(parent) = target.parent() else {
        return Ok(false);
    };
    match parent.canonicalize() {
        Ok(parent) => Ok(parent.starts_with(root.canonicalize()?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(e.into()),
    }
}

/// Applies the directives found under `root` and removes the directives file.
pub fn apply_directives(root: &Path) -> Result<()> {
    let directives = load_directives(root)?;

    for directive in &directives {
        match directive {
            Directive::Remove { files } => {
                for file in files.paths() {
                    let relative = Path::new(file);
                    if !TemplateSource::is_contained(relative) {
                        return Err(Error::DirectiveError {
                            file: DIRECTIVES_FILE.to_string(),
                            reason: format!("'{file}' is outside the template"),
                        });
                    }
                    let target = root.join(relative);
                    if !resolves_inside(root, &target)? {
                        return Err(Error::DirectiveError {
                            file: DIRECTIVES_FILE.to_string(),
                            reason: format!("'{file}' resolves outside the template"),
                        });
                    }
                    log::debug!("Removing '{file}' from template");
                    remove_path(target)?;
                }
            }
            Directive::Clone { src } => {
                log::warn!("Ignoring unsupported clone directive for '{src}'");
            }
            Directive::Unsupported => {
                log::warn!("Ignoring unsupported directive in {DIRECTIVES_FILE}");
            }
        }
    }

    remove_path(root.join(DIRECTIVES_FILE))
}

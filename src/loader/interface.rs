use crate::{error::Result, loader::TemplateSource};
use std::path::Path;

/// Trait for materializing a template into a directory.
pub trait TemplateFetcher {
    /// Writes the files of `source` into `destination`.
    ///
    /// # Returns
    /// * `Result<()>` - Error if the template could not be fully written
    fn fetch(&self, source: &TemplateSource, destination: &Path) -> Result<()>;
}

impl<T: TemplateFetcher + ?Sized> TemplateFetcher for &T {
    fn fetch(&self, source: &TemplateSource, destination: &Path) -> Result<()> {
        (**self).fetch(source, destination)
    }
}

//! Template sources and the fetchers that materialize them.

pub mod directives;
pub mod git;
pub mod interface;
pub mod source;

pub use git::GitFetcher;
pub use interface::TemplateFetcher;
pub use source::{Host, TemplateSource};

/// Convenience function to construct the default fetcher.
pub fn get_template_fetcher(force: bool) -> GitFetcher {
    GitFetcher::new(force)
}

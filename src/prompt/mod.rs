//! Interactive user input
//!
//! - `interface`: abstract prompt interface independent of any UI library
//! - `dialoguer`: concrete implementation using the dialoguer library

pub mod dialoguer;
pub mod interface;

pub use self::dialoguer::DialoguerPrompter;
pub use interface::*;

/// Convenience function to construct the default terminal prompter.
pub fn get_prompt_provider() -> DialoguerPrompter {
    DialoguerPrompter::new()
}

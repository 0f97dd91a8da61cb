//! Constants used throughout create-vite-island

/// Directory used when none is given and prompts are skipped
pub const DEFAULT_DIRECTORY: &str = "my-vite-island";

/// Template fetched into the project directory
pub const TEMPLATE: &str = "jonathanmoore/vite-island";

/// Question shown when asking for the project directory
pub const DIRECTORY_PROMPT: &str = "Project directory:";

/// Template file holding post-clone directives
pub const DIRECTIVES_FILE: &str = "degit.json";

/// Git metadata directory, never copied into the project
pub const GIT_DIR: &str = ".git";

/// Package manager commands
pub mod npm {
    #[cfg(windows)]
    pub const PROGRAM: &str = "npm.cmd";
    #[cfg(not(windows))]
    pub const PROGRAM: &str = "npm";

    pub const INSTALL: &str = "install";

    /// Commands shown to the user in the next-steps block
    pub const INSTALL_COMMAND: &str = "npm install";
    pub const DEV_COMMAND: &str = "npm run dev";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.plaudit.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PLAUDIT_FIXTURE` and friends
//! 4. **Command-line arguments** – `--fixture`/`-f`, `--tui`/`-T`
//!
//! # Configuration File
//!
//! Place `.plaudit.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! fixture = "listing.json"
//! tui = true
//! reply_max_length = 1000
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

/// Default character limit for a developer reply.
pub const DEFAULT_REPLY_MAX_LENGTH: usize = 1000;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print the listing to stdout and exit.
    Summary,
    /// Interactive TUI for browsing and replying to reviews.
    ReviewTui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PLAUDIT_FIXTURE` or `--fixture`: Listing fixture to load
/// - `PLAUDIT_REPLY_MAX_LENGTH` or `--reply-max-length`: Reply length limit
///
/// # Example
///
/// ```no_run
/// use plaudit::PlauditConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = PlauditConfig::load().expect("failed to load configuration");
/// let limit = config.reply_limit();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PLAUDIT",
    discovery(
        dotfile_name = ".plaudit.toml",
        config_file_name = "plaudit.toml",
        app_name = "plaudit"
    )
)]
pub struct PlauditConfig {
    /// Path to a JSON review-listing fixture.
    ///
    /// When absent, the built-in sample listing is used.
    ///
    /// Can be provided via:
    /// - CLI: `--fixture <PATH>` or `-f <PATH>`
    /// - Environment: `PLAUDIT_FIXTURE`
    /// - Config file: `fixture = "..."`
    #[ortho_config(cli_short = 'f')]
    pub fixture: Option<String>,

    /// Enables the interactive TUI instead of the stdout summary.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    ///
    /// Note: Environment variable `PLAUDIT_TUI` is not supported because
    /// `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Browses the listing without the fixture's viewer identity.
    ///
    /// Anonymous viewers see no edit or reply affordances.
    ///
    /// Can be provided via:
    /// - CLI: `--anonymous` / `-a`
    /// - Config file: `anonymous = true`
    #[ortho_config(cli_short = 'a')]
    pub anonymous: bool,

    /// Character limit for a reply draft.
    ///
    /// Can be provided via:
    /// - CLI: `--reply-max-length <N>`
    /// - Environment: `PLAUDIT_REPLY_MAX_LENGTH`
    /// - Config file: `reply_max_length = 1000`
    #[ortho_config()]
    pub reply_max_length: usize,
}

impl Default for PlauditConfig {
    fn default() -> Self {
        Self {
            fixture: None,
            tui: false,
            anonymous: false,
            reply_max_length: DEFAULT_REPLY_MAX_LENGTH,
        }
    }
}

impl PlauditConfig {
    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui {
            OperationMode::ReviewTui
        } else {
            OperationMode::Summary
        }
    }

    /// Returns the reply length limit, clamped to at least one character.
    #[must_use]
    pub const fn reply_limit(&self) -> usize {
        if self.reply_max_length == 0 {
            1
        } else {
            self.reply_max_length
        }
    }
}

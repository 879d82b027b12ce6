//! Command-line interface definition, built on clap's derive macros.
//!
//! # Task structure
//!
//! - `packwright build [--aot]` - compose a production build configuration
//! - `packwright serve` - compose the dev-server configuration
//! - `packwright test` - compose the karma test-runner configuration
//! - bare `packwright` - print the task guidance banner

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use packwright_config::{Environment, OutputHashing};

/// Packwright - webpack configuration assembly for Angular-style projects
#[derive(Parser, Debug)]
#[command(
    name = "packwright",
    version,
    about = "Composes webpack build configurations for Angular-style projects",
    long_about = "Packwright layers build options (defaults, per-variant presets, \n\
                  overrides from file, environment, and flags) and composes them \n\
                  into a single webpack configuration, emitted as JSON for an \n\
                  external bundler process to consume."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Task to run; without one, prints the task guidance banner
    #[command(subcommand)]
    pub task: Option<Task>,
}

/// Available packwright tasks
#[derive(Subcommand, Debug)]
pub enum Task {
    /// Compose a production build configuration
    ///
    /// Emits the JIT variant by default; `--aot` switches to the
    /// ahead-of-time template compiler.
    Build(BuildArgs),

    /// Compose the development server configuration
    ///
    /// Development defaults plus the dev-server block (localhost:4200,
    /// history API fallback).
    Serve(ServeArgs),

    /// Compose the karma test-runner configuration
    ///
    /// Always compiles against the spec tsconfig with `./test.ts` as the
    /// entry point.
    Test(TestArgs),
}

/// Arguments for the build task
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Compile templates ahead of time
    #[arg(long)]
    pub aot: bool,

    #[command(flatten)]
    pub compose: ComposeArgs,
}

/// Arguments for the serve task
#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub compose: ComposeArgs,
}

/// Arguments for the test task
#[derive(Args, Debug)]
pub struct TestArgs {
    #[command(flatten)]
    pub compose: ComposeArgs,
}

/// Flags shared by every composing task: where the project lives, where the
/// configuration goes, and explicit build-option overrides.
///
/// Boolean overrides take an optional value so both `--extract-css` and
/// `--extract-css=false` work; leaving a flag off means "no override", which
/// lets file and environment layers through.
#[derive(Args, Debug, Clone)]
pub struct ComposeArgs {
    /// Project root directory the layout conventions resolve against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Override file to read (defaults to packwright.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the composed configuration to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Pretty-print the emitted JSON
    #[arg(long)]
    pub pretty: bool,

    /// Build environment
    #[arg(long, value_enum, value_name = "ENV")]
    pub env: Option<EnvArg>,

    /// Emit source maps
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub source_map: Option<bool>,

    /// Extract global styles into .css assets instead of injecting them
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub extract_css: Option<bool>,

    /// Filename hashing mode
    #[arg(long, value_enum, value_name = "MODE")]
    pub output_hash: Option<HashArg>,

    /// Serve over TLS
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub https: Option<bool>,

    /// Enable hot module replacement in the dev server
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub hmr: Option<bool>,

    /// Public path the application deploys under
    #[arg(long, value_name = "PATH")]
    pub deploy_path: Option<String>,

    /// Entry module, relative to the source root
    #[arg(long, value_name = "FILE")]
    pub main: Option<String>,
}

/// CLI-facing mirror of [`Environment`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvArg {
    Development,
    Production,
}

impl From<EnvArg> for Environment {
    fn from(value: EnvArg) -> Self {
        match value {
            EnvArg::Development => Environment::Development,
            EnvArg::Production => Environment::Production,
        }
    }
}

/// CLI-facing mirror of [`OutputHashing`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashArg {
    None,
    All,
}

impl From<HashArg> for OutputHashing {
    fn from(value: HashArg) -> Self {
        match value {
            HashArg::None => OutputHashing::None,
            HashArg::All => OutputHashing::All,
        }
    }
}

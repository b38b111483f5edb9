//! Command-line interface for camprama.
//!
//! This module provides the CLI structure for the `camprama` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    CategoryArg, ConfigCommand, ListsCommand, LocationCommand, LocationsCommand, OutputFormat,
    QuizCommand, SettingsCommand, StatusCommand, SwitchArg, TemplatesCommand, WildlifeCommand,
};

/// camprama - Pack smarter for Canadian campsites
///
/// Keep packing checklists, start them from templates, and browse
/// campsites, wildlife safety profiles and a trail quiz.
#[derive(Debug, Parser)]
#[command(name = "camprama")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage your packing lists
    #[command(subcommand)]
    Lists(ListsCommand),

    /// Browse packing list templates
    #[command(subcommand)]
    Templates(TemplatesCommand),

    /// Browse campsites
    Locations(LocationsCommand),

    /// Wildlife safety profiles
    Wildlife(WildlifeCommand),

    /// Take the trail safety quiz
    Quiz(QuizCommand),

    /// View or change preferences
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Show storage status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

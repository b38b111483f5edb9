//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::catalog::Category;

/// Commands over saved packlists.
#[derive(Debug, Subcommand)]
pub enum ListsCommand {
    /// Show all saved lists, newest first
    Ls {
        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Create an empty list
    Create {
        /// Title of the new list
        title: String,
    },

    /// Show one list with its items
    Show {
        /// List id
        list: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Add an item to the top of a list
    Add {
        /// List id
        list: String,

        /// Item text
        text: String,
    },

    /// Check or uncheck an item
    Toggle {
        /// List id
        list: String,

        /// Item id
        item: String,
    },

    /// Remove an item from a list
    Rm {
        /// List id
        list: String,

        /// Item id
        item: String,
    },

    /// Print a list's share text
    Share {
        /// List id
        list: String,
    },

    /// Permanently delete a list
    Delete {
        /// List id
        list: String,
    },

    /// Copy a template into a new list
    Import {
        /// Template id
        template: String,
    },

    /// Delete every saved list
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Commands over the built-in templates.
#[derive(Debug, Subcommand)]
pub enum TemplatesCommand {
    /// Show all templates
    Ls {
        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Show a template, marking items already in the matching list
    Show {
        /// Template id
        template: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Check template items into the list with the same title
    Pick {
        /// Template id
        template: String,

        /// Template item ids to check
        items: Vec<String>,

        /// Extra item text to add
        #[arg(short, long = "add", value_name = "TEXT")]
        extra: Vec<String>,
    },
}

/// Locations command arguments.
#[derive(Debug, Args)]
pub struct LocationsCommand {
    /// Show a single location
    #[command(subcommand)]
    pub command: Option<LocationCommand>,

    /// Match against title, region and access
    #[arg(short = 's', long)]
    pub query: Option<String>,

    /// Filter by landscape category
    #[arg(short = 't', long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Location ids to list first (repeatable)
    #[arg(long = "favorite", value_name = "ID")]
    pub favorites: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Single-location commands.
#[derive(Debug, Subcommand)]
pub enum LocationCommand {
    /// Show a location in full
    Show {
        /// Location id
        id: String,
    },
}

/// Wildlife command arguments.
#[derive(Debug, Args)]
pub struct WildlifeCommand {
    /// Show one profile in full
    pub id: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Quiz command arguments.
#[derive(Debug, Args)]
pub struct QuizCommand {
    /// Answer letters in question order (e.g. "BACD..."); read from stdin when omitted
    #[arg(short, long)]
    pub answers: Option<String>,
}

/// Settings commands.
#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show or change the notifications preference
    Notifications {
        /// New state; prints the current one when omitted
        #[arg(value_enum)]
        state: Option<SwitchArg>,
    },

    /// Print the text used to recommend the app
    Share,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Landscape category argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Rocky Mountains
    Rockies,
    /// Atlantic and Pacific coasts
    Coasts,
    /// Canadian Shield lakes
    Shield,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Rockies => Self::Rockies,
            CategoryArg::Coasts => Self::Coasts,
            CategoryArg::Shield => Self::Shield,
        }
    }
}

/// On/off switch argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SwitchArg {
    /// Turn on
    On,
    /// Turn off
    Off,
    /// Flip the current state
    Toggle,
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_arg_conversion() {
        assert_eq!(Category::from(CategoryArg::Rockies), Category::Rockies);
        assert_eq!(Category::from(CategoryArg::Coasts), Category::Coasts);
        assert_eq!(Category::from(CategoryArg::Shield), Category::Shield);
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_lists_command_debug() {
        let cmd = ListsCommand::Add {
            list: "u_1_abcdef".to_string(),
            text: "Map".to_string(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Add"));
        assert!(debug_str.contains("Map"));
    }

    #[test]
    fn test_templates_command_debug() {
        let cmd = TemplatesCommand::Pick {
            template: "car-camping".to_string(),
            items: vec!["cc-tent".to_string()],
            extra: Vec::new(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("cc-tent"));
    }

    #[test]
    fn test_settings_command_debug() {
        let cmd = SettingsCommand::Notifications {
            state: Some(SwitchArg::Off),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Off"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_output_format_debug() {
        let format = OutputFormat::Json;
        let debug_str = format!("{format:?}");
        assert_eq!(debug_str, "Json");
    }
}

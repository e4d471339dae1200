use clap::{Parser, Subcommand};
use std::fmt;

#[derive(Parser)]
#[command(name = "inventory-cli")]
#[command(about = "Interactive inventory manager and grade-average calculator")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (.env format)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Manage an in-memory product inventory
    Inventory,
    /// Enter subjects and grades, then print a summary
    Grades,
}

impl Args {
    /// The inventory menu is the default mode
    pub fn mode(&self) -> Commands {
        self.command.unwrap_or(Commands::Inventory)
    }
}

impl fmt::Display for Commands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Commands::Inventory => write!(f, "inventory"),
            Commands::Grades => write!(f, "grades"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_inventory() {
        let args = Args::try_parse_from(["inventory-cli"]).unwrap();
        assert_eq!(args.mode(), Commands::Inventory);
        assert!(!args.verbose);
    }

    #[test]
    fn test_grades_with_global_flags() {
        let args =
            Args::try_parse_from(["inventory-cli", "grades", "--verbose", "-c", "app.env"]).unwrap();
        assert_eq!(args.mode(), Commands::Grades);
        assert!(args.verbose);
        assert_eq!(args.config.as_deref(), Some("app.env"));
    }
}

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Faari character console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "List the registered characters")]
    List,
    #[command(about = "Print one character as JSON")]
    Show { character_id: String },
    #[command(about = "Check a message against a character's predefined responses")]
    Check { character_id: String, message: String },
}

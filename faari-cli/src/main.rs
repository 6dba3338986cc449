mod cli;

use clap::Parser;
use engine::CharacterRegistry;
use shared::models::ChatRequest;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();
    let cli = cli::Cli::parse();
    let registry = CharacterRegistry::builtin()?;

    match cli.command {
        cli::Command::List => {
            for character in registry.characters() {
                println!(
                    "{:<12} {:<16} voice={:<16} canned_phrases={}",
                    character.id,
                    character.name,
                    character.voice_id,
                    character.predefined_responses.len()
                );
            }
        }
        cli::Command::Show { character_id } => {
            let character = registry.get_character(&character_id)?;
            println!("{}", serde_json::to_string_pretty(character)?);
        }
        cli::Command::Check {
            character_id,
            message,
        } => {
            let request = ChatRequest {
                character_id,
                user_message: message,
                history: Vec::new(),
            };
            match registry.respond_predefined(&request)? {
                Some(response) => println!("{}", serde_json::to_string_pretty(&response)?),
                None => {
                    tracing::info!("No predefined match; this message would go to generation");
                    println!("(no predefined response)");
                }
            }
        }
    }
    Ok(())
}

use clap::Args;
use colcase_core::camel_to_snake;
use eyre::Result;

#[derive(Args)]
pub struct SnakeCommand {
    /// Identifiers to convert (e.g., createdAt HTTPServer)
    #[arg(required = true)]
    identifiers: Vec<String>,
}

impl SnakeCommand {
    pub fn run(&self) -> Result<()> {
        for identifier in &self.identifiers {
            println!("{} -> {}", identifier, camel_to_snake(identifier));
        }
        Ok(())
    }
}

use clap::Subcommand;
use pantry_core::{Config, FeedbackClient, FeedbackMessage};

use super::runtime;

#[derive(Subcommand)]
pub enum FeedbackAction {
    /// Send a message to the feedback relay server
    Send {
        /// Your name
        #[arg(long)]
        name: String,
        /// Reply-to address
        #[arg(long)]
        email: String,
        /// Optional subject line
        #[arg(long)]
        subject: Option<String>,
        /// Message body
        #[arg(long)]
        message: String,
        /// Server URL (defaults to feedback.server_url)
        #[arg(long)]
        server: Option<String>,
    },
}

pub fn run(action: FeedbackAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        FeedbackAction::Send {
            name,
            email,
            subject,
            message,
            server,
        } => {
            let server_url = match server {
                Some(url) => url,
                None => Config::load_or_default().with_env_overrides().feedback.server_url,
            };

            let feedback = FeedbackMessage::new(name, email, subject, message);
            let client = FeedbackClient::new(&server_url)?;
            let reply = runtime()?.block_on(client.send(&feedback))?;
            println!("{reply}");
        }
    }
    Ok(())
}

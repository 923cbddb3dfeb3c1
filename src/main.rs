//! gigdesk - freelance marketplace session relay and CLI client
//!
//! One binary: `serve` runs the HTTP session relay, the remaining
//! subcommands drive it as a client against the local session stores.

mod api;
mod auth;
mod config;
mod data;
mod forms;
mod models;
mod server;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::forms::OfferForm;
use crate::store::{Mode, ModeStore};

#[derive(Parser)]
#[command(name = "gigdesk")]
#[command(about = "Freelance marketplace session relay and CLI client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the session relay HTTP service
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Sign in and store session tokens
    Login {
        /// Account email address
        email: String,

        /// Display username (defaults to the email local part)
        #[arg(short, long)]
        username: Option<String>,

        /// Start a new session even if one is already active
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a registration form and sign in
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,
    },

    /// Sign out and clear session cookies
    Logout,

    /// Show current authentication status
    Status,

    /// Rotate tokens using the refresh cookie
    Refresh,

    /// Poll the relay and refresh tokens periodically
    Watch {
        /// Minutes between refresh attempts
        #[arg(short, long, default_value = "10")]
        interval: u64,
    },

    /// Get or change the browsing mode
    Mode {
        /// New mode: client or freelancer
        #[arg(short, long)]
        set: Option<String>,

        /// Flip between client and freelancer
        #[arg(short, long, conflicts_with = "set")]
        toggle: bool,
    },

    /// List marketplace offers
    Offers {
        /// Maximum number of offers to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// List freelancer profiles
    Freelancers,

    /// List conversations
    Chats,

    /// Read messages from a conversation
    Read {
        /// Conversation ID (from `chats` output)
        conversation_id: String,
    },

    /// List disputes, optionally for a single offer
    Disputes {
        /// Offer ID to filter by
        #[arg(long)]
        offer: Option<String>,
    },

    /// Browse FAQ categories
    Faq {
        /// Category ID to show
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the rating left for an offer
    Ratings {
        /// Offer ID
        offer_id: String,
    },

    /// Validate a new-offer draft
    NewOffer {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Budget in USD
        #[arg(long)]
        budget: String,

        /// Category value, e.g. web-development
        #[arg(long)]
        category: String,

        /// Deadline date, YYYY-MM-DD
        #[arg(long)]
        deadline: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Serve { port } => {
            let mut config = Config::from_env()?;
            if let Some(port) = port {
                config.port = port;
            }
            server::serve(&config).await?;
        }
        Commands::Login { email, username, force } => {
            api::login(&email, username.as_deref(), force).await?;
        }
        Commands::Register { email, username, password, confirm_password } => {
            let form = forms::RegisterForm { email, username, password, confirm_password };
            let errors = forms::validate_register_form(&form);
            if !errors.is_empty() {
                for message in [
                    errors.email,
                    errors.username,
                    errors.password,
                    errors.confirm_password,
                    errors.general,
                ]
                .into_iter()
                .flatten()
                {
                    println!("error: {}", message);
                }
                std::process::exit(1);
            }
            api::login(&form.email, Some(&form.username), true).await?;
        }
        Commands::Logout => {
            api::logout().await?;
        }
        Commands::Status => {
            api::status().await?;
        }
        Commands::Refresh => {
            api::refresh().await?;
        }
        Commands::Watch { interval } => {
            api::watch(interval).await?;
        }
        Commands::Mode { set, toggle } => {
            let mut store = ModeStore::load()?;
            if let Some(value) = set {
                store.mode = value.parse::<Mode>()?;
                store.save()?;
            } else if toggle {
                store.toggle();
                store.save()?;
            }
            println!("Browsing as: {}", store.mode);
        }
        Commands::Offers { limit } => {
            for offer in data::offers().iter().take(limit) {
                println!(
                    "{:10} {:40} {:20} {:?}",
                    offer.id, offer.title, offer.company, offer.status
                );
            }
        }
        Commands::Freelancers => {
            for fl in data::freelancers() {
                let availability = if fl.is_available { "available" } else { "busy" };
                println!(
                    "{:6} {:20} {:30} ${:>5.0}/h  {:.1}*  {}",
                    fl.id, fl.name, fl.title, fl.hourly_rate, fl.rating, availability
                );
            }
        }
        Commands::Chats => {
            for conv in data::conversations() {
                let unread = if conv.unread_count > 0 {
                    format!(" ({} unread)", conv.unread_count)
                } else {
                    String::new()
                };
                println!(
                    "{:8} {:20}{}  {}",
                    conv.id,
                    conv.participant_name,
                    unread,
                    conv.last_message.as_deref().unwrap_or("")
                );
            }
        }
        Commands::Read { conversation_id } => {
            let messages = data::messages_for(&conversation_id);
            if messages.is_empty() {
                println!("No messages in {}", conversation_id);
            }
            for msg in messages {
                println!("[{}] {}: {}", msg.timestamp, msg.sender_id, msg.content);
            }
        }
        Commands::Disputes { offer } => {
            match offer {
                Some(offer_id) => {
                    for dispute in data::disputes_by_offer(&offer_id) {
                        println!("{:10} {:?} {:?}  {}", dispute.id, dispute.status, dispute.reason, dispute.offer_title);
                    }
                    if let Some(offer) = data::offer_by_id(&offer_id) {
                        let eligible = data::is_offer_eligible_for_dispute(&offer_id, offer.status);
                        println!("New dispute possible: {}", eligible);
                    }
                }
                None => {
                    for dispute in data::disputes() {
                        println!("{:10} {:?} {:?}  {}", dispute.id, dispute.status, dispute.reason, dispute.offer_title);
                    }
                    println!();
                    println!("Offers open to a new dispute:");
                    for (id, title) in data::eligible_offers() {
                        println!("  {:10} {}", id, title);
                    }
                }
            }
        }
        Commands::Faq { category } => {
            let categories: Vec<_> = match category.as_deref() {
                Some(id) => data::faq_category(id).into_iter().collect(),
                None => data::faq_categories().iter().collect(),
            };
            for category in categories {
                println!("== {} ==", category.name);
                for item in &category.items {
                    println!("Q: {}", item.question);
                    println!("A: {}", item.answer);
                    println!();
                }
            }
        }
        Commands::Ratings { offer_id } => match data::rating_by_offer(&offer_id) {
            Some(rating) => {
                println!(
                    "{} rated {}/5 by {}: {}",
                    rating.freelancer_name, rating.rating, rating.client_id, rating.comment
                );
            }
            None => println!("No rating for {}", offer_id),
        },
        Commands::NewOffer { title, description, budget, category, deadline } => {
            let form = OfferForm { title, description, budget, category, deadline };
            let errors = forms::validate_offer_form(&form);
            if errors.is_empty() {
                println!("Offer draft is valid");
            } else {
                for message in [
                    errors.title,
                    errors.description,
                    errors.budget,
                    errors.category,
                    errors.deadline,
                ]
                .into_iter()
                .flatten()
                {
                    println!("error: {}", message);
                }
                println!();
                println!("Available categories:");
                for category in forms::categories() {
                    println!("  {:20} {}", category.value, category.label);
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

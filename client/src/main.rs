//! CupCakeLeader client - command line front end.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog, focused on one cupcake
//! cupcake catalog --focus 3
//!
//! # Add two Red Velvets to the cart
//! cupcake add 1 --quantity 2
//!
//! # Log in, then finish the purchase
//! cupcake login ana@example.com --password segredo
//! cupcake cart checkout
//! ```
//!
//! # Commands
//!
//! - `login` / `signup` / `logout` - Session management
//! - `catalog` / `add` / `search` - Catalog browsing
//! - `cart` - Show, clear, remove lines, checkout
//! - `history` / `profile` / `coupons` / `payment` - Account screens
//!
//! Every command prints the resulting screen followed by notices. The exit
//! status is non-zero when an error notice was raised or a login is required.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use cupcake_client::app::{NoticeLevel, Prompt, PromptChoice, SignupForm};
use cupcake_client::debug::{self, LogConfig};
use cupcake_client::{ui, ApiClient, App, ClientConfig, Route, RouteParams, Session};

#[derive(Parser)]
#[command(name = "cupcake")]
#[command(author, version, about = "CupCakeLeader ordering client")]
struct Cli {
    /// Backend base URL (overrides CUPCAKE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        cep: String,
        /// Street address
        #[arg(long)]
        rua: String,
        /// State
        #[arg(long)]
        estado: String,
    },
    /// Forget the stored session
    Logout,
    /// List the cupcake catalog
    Catalog {
        /// Highlight this cupcake
        #[arg(long)]
        focus: Option<i64>,
    },
    /// Add a cupcake to the cart
    Add {
        id: i64,

        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },
    /// Search cupcakes by name
    Search { query: String },
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Show the order history
    History,
    /// Show or change the profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Show promotional coupons
    Coupons,
    /// Show payment methods
    Payment,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart (default)
    Show,
    /// Remove every item
    Clear {
        /// Confirm without asking
        #[arg(long)]
        yes: bool,
    },
    /// Remove one cupcake's line
    Remove { id: i64 },
    /// Record the order and empty the cart
    Checkout,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the profile (default)
    Show,
    /// Update profile fields; omitted fields keep their value
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        cep: Option<String>,
        #[arg(long)]
        rua: Option<String>,
        #[arg(long)]
        estado: Option<String>,
    },
    /// Upload a new profile picture
    SetImage { path: PathBuf },
    /// Remove the profile picture
    RemoveImage,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    debug::init(&LogConfig::from_env());

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Run one command. `Ok(false)` means the command finished with an error notice.
async fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config = config.with_api_base_url(url);
    }
    config.validate()?;

    let session = Arc::new(Session::with_file(&config.session_file));
    session.init()?;
    let api_client = Arc::new(ApiClient::new(&config)?);
    tracing::info!(api = %api_client.base_url(), command = ?std::env::args().nth(1), "Starting");

    let mut app = App::new(api_client, session);
    execute(&mut app, cli.command).await;
    Ok(report(&mut app))
}

async fn execute(app: &mut App, command: Commands) {
    match command {
        Commands::Login { email, password } => {
            // A successful login returns to Home, so it is loaded underneath.
            app.start();
            app.navigate(Route::Login, RouteParams::default());
            app.login(email, password);
        }
        Commands::Signup { name, email, password, cep, rua, estado } => {
            app.navigate(Route::Signup, RouteParams::default());
            app.signup(SignupForm { name, email, password, cep, rua, estado, submitting: false });
        }
        Commands::Logout => {
            app.logout();
        }
        Commands::Catalog { focus } => {
            match focus {
                Some(id) => app.navigate(Route::Home, RouteParams::focus(id)),
                None => app.start(),
            }
        }
        Commands::Add { id, quantity } => {
            app.start();
            app.settle().await;
            for _ in 1..quantity {
                app.increment(id);
            }
            app.add_to_cart(id);
        }
        Commands::Search { query } => {
            app.navigate(Route::Search, RouteParams::default());
            app.settle().await;
            app.set_search_query(query);
        }
        Commands::Cart { action } => {
            app.navigate(Route::Cart, RouteParams::default());
            app.settle().await;
            match action.unwrap_or(CartAction::Show) {
                CartAction::Show => {}
                CartAction::Clear { yes } => {
                    app.clear_cart();
                    if yes {
                        app.resolve_prompt(PromptChoice::Confirm);
                    }
                }
                CartAction::Remove { id } => app.remove_cart_item(id),
                CartAction::Checkout => app.finalize_purchase(),
            }
        }
        Commands::History => {
            app.navigate(Route::History, RouteParams::default());
        }
        Commands::Profile { action } => match action.unwrap_or(ProfileAction::Show) {
            ProfileAction::Show => app.navigate(Route::Profile, RouteParams::default()),
            ProfileAction::Edit { name, email, password, cep, rua, estado } => {
                app.navigate(Route::Config, RouteParams::default());
                app.settle().await;
                if app.current_route() == Route::Config {
                    app.edit_profile_form(|form| {
                        let fields = [
                            (&mut form.name, name),
                            (&mut form.email, email),
                            (&mut form.password, password),
                            (&mut form.cep, cep),
                            (&mut form.rua, rua),
                            (&mut form.estado, estado),
                        ];
                        for (field, value) in fields {
                            if let Some(value) = value {
                                *field = value;
                            }
                        }
                    });
                    app.save_profile();
                }
            }
            ProfileAction::SetImage { path } => {
                app.navigate(Route::Profile, RouteParams::default());
                app.settle().await;
                app.change_profile_image(path);
            }
            ProfileAction::RemoveImage => {
                app.navigate(Route::Profile, RouteParams::default());
                app.settle().await;
                app.remove_profile_image();
            }
        },
        Commands::Coupons => app.navigate(Route::Cupon, RouteParams::default()),
        Commands::Payment => app.navigate(Route::Payment, RouteParams::default()),
    }
    app.settle().await;
}

/// Print the screen, notices and any open prompt. Returns `false` on failure.
fn report(app: &mut App) -> bool {
    let (screen, prompt) = {
        let state = app.state.read();
        (ui::render(&state), state.prompt)
    };
    println!("{screen}");

    let notices = app.take_notices();
    for notice in &notices {
        println!("{}", ui::render_notice(notice));
    }

    if let Some(prompt) = prompt {
        println!("\n{}", ui::render_prompt(prompt));
        if prompt == Prompt::ConfirmClearCart {
            println!("(run `cupcake cart clear --yes` to confirm)");
        }
    }

    let failed = notices.iter().any(|notice| notice.level == NoticeLevel::Error);
    !failed && prompt != Some(Prompt::LoginRequired)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_zero_quantity() {
        assert!(Cli::try_parse_from(["cupcake", "add", "1", "--quantity", "0"]).is_err());

        let cli = Cli::try_parse_from(["cupcake", "add", "1"]).unwrap();
        assert!(matches!(cli.command, Commands::Add { id: 1, quantity: 1 }));

        let cli = Cli::try_parse_from(["cupcake", "add", "2", "-q", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Add { id: 2, quantity: 3 }));
    }

    #[test]
    fn test_cart_defaults_to_show() {
        let cli = Cli::try_parse_from(["cupcake", "--api-url", "http://localhost:5000", "cart"]).unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:5000"));
        assert!(matches!(cli.command, Commands::Cart { action: None }));
    }
}

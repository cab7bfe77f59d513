use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use ministry_auth::SessionCodec;
use ministry_cli::{issue_cookie, render_check, render_guard, render_roles};
use ministry_config::{GuardConfig, SessionConfig};

#[derive(Parser)]
#[command(name = "ministry-cli")]
#[command(about = "Ministry CLI - inspect roles, permissions and session cookies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every role with its display label
    Roles,
    /// Resolve a permission for a session cookie value
    Check {
        /// Raw value of the session cookie
        #[arg(short = 'c', long)]
        cookie: Option<String>,

        /// Permission to resolve, e.g. activites.create
        #[arg(short = 'p', long)]
        permission: String,
    },
    /// Show what the route guard does with a request
    Guard {
        /// Request path, e.g. /dashboard/enfants
        #[arg(long)]
        path: String,

        /// Raw value of the session cookie
        #[arg(short = 'c', long)]
        cookie: Option<String>,
    },
    /// Produce a session cookie value for a user record
    Issue {
        /// User record as JSON, e.g. '{"id":1,"name":"Ana","role":"admin"}'
        #[arg(short = 'u', long)]
        user: String,
    },
}

fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ministry_auth=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let codec = SessionCodec::new(&SessionConfig::from_env());

    match cli.command {
        Commands::Roles => println!("{}", render_roles()),
        Commands::Check { cookie, permission } => {
            println!("{}", render_check(&codec, cookie.as_deref(), &permission))
        }
        Commands::Guard { path, cookie } => println!(
            "{}",
            render_guard(&codec, &GuardConfig::from_env(), &path, cookie.as_deref())
        ),
        Commands::Issue { user } => match issue_cookie(&codec, &user) {
            Ok(value) => {
                if !codec.is_signed() {
                    eprintln!("⚠️  SESSION_SIGNING_SECRET is not set; issuing a plain JSON cookie");
                }
                println!("{}", value);
            }
            Err(e) => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        },
    }
}

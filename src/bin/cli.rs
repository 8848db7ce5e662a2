use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use ojgate::ojgate_auth::{NewClaims, create_token, verify};
use ojgate::ojgate_config::JwtConfig;

#[derive(Parser)]
#[command(name = "ojgate-cli")]
#[command(about = "ojgate CLI - Development tools for ojgate credentials", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a signed authToken for local testing
    IssueToken {
        /// Username to embed in the token
        #[arg(short = 'u', long)]
        username: String,

        /// Grant admin privileges
        #[arg(long)]
        admin: bool,

        /// Lifetime in seconds (defaults to JWT_ACCESS_EXPIRY)
        #[arg(short = 't', long)]
        ttl: Option<i64>,
    },
    /// Check a token against JWT_SECRET_KEY and print its claims
    VerifyToken {
        token: String,
    },
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let jwt_config = JwtConfig::from_env();

    match cli.command {
        Commands::IssueToken {
            username,
            admin,
            ttl,
        } => {
            let ttl = ttl.unwrap_or(jwt_config.access_token_expiry);
            match create_token(&NewClaims::new(username, admin, ttl), &jwt_config) {
                Ok(token) => println!("{}", token),
                Err(e) => {
                    eprintln!("❌ Failed to issue token: {}", e);
                    eprintln!("   Is JWT_SECRET_KEY set?");
                    std::process::exit(1);
                }
            }
        }
        Commands::VerifyToken { token } => match verify(&token, &jwt_config.secret) {
            Ok(claims) => {
                println!("✅ Token is valid");
                println!("   Username: {}", claims.username());
                println!("   Admin: {}", claims.is_admin());
                println!("   Expires at: {}", claims.expires_at());
                if let Some(issuer) = claims.issuer() {
                    println!("   Issuer: {}", issuer);
                }
            }
            Err(e) => {
                eprintln!("❌ Token rejected ({}): {}", e.kind(), e);
                std::process::exit(1);
            }
        },
    }
}

//! Offline administration for urlcut.
//!
//! Talks to Postgres directly, so accounts can be created and tokens
//! minted without the HTTP service running:
//!
//! ```bash
//! cargo run --bin admin -- create-user
//! cargo run --bin admin -- list-users
//! cargo run --bin admin -- disable-user alice
//! cargo run --bin admin -- issue-token alice
//! ```
//!
//! Reads `DATABASE_URL` and `AUTH_SECRET` from the environment (a `.env`
//! file is honored). `AUTH_SECRET` must match the one the service runs
//! with, or credentials minted here will not verify over HTTP.

use urlcut::application::services::AuthService;
use urlcut::domain::entities::User;
use urlcut::domain::repositories::UserRepository;
use urlcut::infrastructure::persistence::{PgTokenRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing urlcut accounts.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Administrative commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a user account
    CreateUser {
        /// User name (prompted when omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List all user accounts
    ListUsers,

    /// Disable a user account (cannot be re-enabled here)
    DisableUser {
        /// User name or ID to disable
        name_or_id: String,
    },

    /// Mint a bearer token for a user
    IssueToken {
        /// User name or ID to issue the token for
        name_or_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let auth_secret = std::env::var("AUTH_SECRET").context("AUTH_SECRET must be set")?;

    let pool = Arc::new(
        PgPool::connect(&database_url)
            .await
            .context("Failed to connect to database")?,
    );
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let tokens = Arc::new(PgTokenRepository::new(pool));
    let auth = AuthService::new(users.clone(), tokens, auth_secret);

    match cli.command {
        Commands::CreateUser { name } => create_user(&auth, name).await?,
        Commands::ListUsers => list_users(users.as_ref()).await?,
        Commands::DisableUser { name_or_id } => disable_user(users.as_ref(), name_or_id).await?,
        Commands::IssueToken { name_or_id } => issue_token(&auth, users.as_ref(), name_or_id).await?,
    }

    Ok(())
}

/// Creates an account interactively. The password prompt hides input and
/// asks twice; validation matches the signup endpoint, so accounts made
/// here behave exactly like ones registered over HTTP.
async fn create_user(auth: &AuthService, name: Option<String>) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let user_name: String = match name {
        Some(n) => n,
        None => Input::new().with_prompt("User name").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    AuthService::validate_signup(&user_name, &password)
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    let user = auth
        .sign_up(user_name, password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!();
    println!("  Name:       {}", user.user_name.cyan());
    println!("  ID:         {}", user.id.to_string().bright_black());
    println!("  Account ID: {}", user.account_id.bright_yellow());
    println!();

    Ok(())
}

/// Prints an aligned table of accounts with a colored ACTIVE / DISABLED
/// marker per row:
///
/// ```text
///   ID   Name                     Account ID                            Created           Status
///   ────────────────────────────────────────────────────────────────────────────────────────────
///   1    alice                    8f14e45f-ceea-467f-a0e6-8f0c44ab901a  2026-08-25 10:30  ACTIVE
/// ```
async fn list_users(users: &PgUserRepository) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let accounts = users
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if accounts.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {}",
            "cargo run --bin admin create-user".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<24} {:<37} {:<17} {:<8}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Account ID".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(92).bright_black());

    for user in &accounts {
        let status = if user.disabled {
            "DISABLED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<4} {:<24} {:<37} {:<17} {}",
            user.id.to_string().bright_black(),
            user.user_name.cyan(),
            user.account_id.bright_black(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        accounts.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Disables an account after a confirmation prompt that defaults to No.
/// Accepts a numeric id or an exact name; already-disabled accounts are
/// reported and left untouched.
async fn disable_user(users: &PgUserRepository, name_or_id: String) -> Result<()> {
    println!("{}", "🔒 Disable User".bright_blue().bold());
    println!();

    let user = find_user(users, &name_or_id).await?;

    if user.disabled {
        println!("{}", "⚠️  This user is already disabled".yellow());
        return Ok(());
    }

    println!("  Name: {}", user.user_name.cyan());
    println!("  ID:   {}", user.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Disable this user?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    users
        .set_disabled(user.id, true)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to disable user: {}", e))?;

    println!();
    println!("{}", "✅ User disabled".green().bold());
    println!();

    Ok(())
}

/// Mints a bearer token and prints it exactly once. Only the HMAC hash
/// is persisted, so a lost token cannot be recovered, only reissued.
async fn issue_token(auth: &AuthService, users: &PgUserRepository, name_or_id: String) -> Result<()> {
    println!("{}", "🔑 Issue Bearer Token".bright_blue().bold());
    println!();

    let user = find_user(users, &name_or_id).await?;

    if user.disabled {
        anyhow::bail!("User '{}' is disabled; tokens would be rejected", user.user_name);
    }

    let token = auth
        .mint_token(user.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;

    println!("  User:  {}", user.user_name.cyan());
    println!("  Token: {}", token.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();
    println!("{}", "Send it with every request:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        token.bright_yellow()
    );
    println!();
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/files",
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Finds a user by numeric id or exact name.
async fn find_user(users: &PgUserRepository, name_or_id: &str) -> Result<User> {
    let user = match name_or_id.parse::<i64>() {
        Ok(id) => users
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => users
            .find_by_name(name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    user.context("User not found")
}

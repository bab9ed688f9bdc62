//! User management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use super::Cli;
use crate::output;
use fams_auth::password::{PasswordHasher, PasswordValidator};
use fams_core::error::AppError;
use fams_core::types::pagination::PageRequest;
use fams_database::repositories::UserRepository;
use fams_entity::user::{User, UserRole};
use fams_service::user::{CreateUserRequest, UserService};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a user (use this to bootstrap the first faculty admin)
    Create {
        /// Login email
        #[arg(long)]
        email: String,
        /// Display name
        #[arg(long)]
        name: String,
        /// Role: FACULTY_ADMIN, DEPARTMENTAL_OFFICER, LECTURER or COURSE_REP
        #[arg(long)]
        role: String,
        /// Department
        #[arg(long)]
        department: Option<String>,
        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// List users
    List {
        /// Filter by role
        #[arg(short, long)]
        role: Option<String>,
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    /// Delete a user by email
    Delete {
        /// Login email
        email: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Email
    email: String,
    /// Name
    name: String,
    /// Role
    role: String,
    /// Department
    department: String,
    /// Created at
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email.clone(),
            name: u.name.clone(),
            role: u.role.to_string(),
            department: u.department.clone().unwrap_or_default(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(args: &UserArgs, cli: &Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;
    let pool = super::create_db_pool(&config).await?;
    let user_repo = Arc::new(UserRepository::new(pool));

    match &args.command {
        UserCommand::Create {
            email,
            name,
            role,
            department,
            password,
        } => {
            let role: UserRole = role.parse()?;
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let service = UserService::new(
                Arc::clone(&user_repo),
                Arc::new(PasswordHasher::new()),
                Arc::new(PasswordValidator::new(&config.auth)),
            );
            let user = service
                .create_unchecked(CreateUserRequest {
                    email: email.clone(),
                    password,
                    name: name.clone(),
                    role,
                    department: department.clone(),
                })
                .await?;

            output::print_success(&format!("Created {} '{}'", user.role.label(), user.email));
            output::print_kv("ID", &user.id.to_string());
            output::print_kv("Dashboard", user.role.dashboard_path());
        }
        UserCommand::List { role, page } => {
            let role = role.as_deref().map(str::parse::<UserRole>).transpose()?;
            let users = user_repo
                .find_all(role, &PageRequest::new(*page, 100))
                .await?;

            let rows: Vec<UserRow> = users.items.iter().map(UserRow::from).collect();
            output::print_list(&rows, cli.format);
            if matches!(cli.format, output::OutputFormat::Table) {
                println!(
                    "Page {} of {} ({} users)",
                    users.page, users.total_pages, users.total_items
                );
            }
        }
        UserCommand::Delete { email, force } => {
            let user = user_repo
                .find_by_email(&email.trim().to_lowercase())
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{email}' not found")))?;

            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete {} '{}'?", user.role.label(), user.email))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            user_repo.delete(user.id).await?;
            output::print_success(&format!("User '{}' deleted", user.email));
        }
    }

    Ok(())
}

use alumnet_core::AppError;
use alumnet_models::{RegisterRequest, User, roles};
use clap::{Parser, Subcommand};
use sqlx::PgPool;

use crate::modules::auth::service::AuthService;

#[derive(Debug, Parser)]
#[command(name = "alumnet")]
#[command(about = "Alumnet API - alumni, student and employment records", long_about = None)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Apply pending database migrations
    Migrate,
    /// Create an account with the admin role
    CreateAdmin {
        /// Email address
        email: String,
        /// Password (at least 6 characters)
        password: String,
    },
}

/// Admin accounts are never created through the public registration route.
pub async fn create_admin(db: &PgPool, email: &str, password: &str) -> Result<User, AppError> {
    let dto = RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    AuthService::register(db, dto, roles::ADMIN).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_serves() {
        let cli = Cli::try_parse_from(["alumnet"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_create_admin() {
        let cli =
            Cli::try_parse_from(["alumnet", "create-admin", "admin@kampus.ac.id", "rahasia"])
                .unwrap();
        match cli.command {
            Some(Commands::CreateAdmin { email, password }) => {
                assert_eq!(email, "admin@kampus.ac.id");
                assert_eq!(password, "rahasia");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_create_admin_requires_both_arguments() {
        assert!(Cli::try_parse_from(["alumnet", "create-admin", "admin@kampus.ac.id"]).is_err());
    }
}

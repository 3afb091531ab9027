// CLI module for operational policy checks

pub mod check;
pub mod roles;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::services::role_policy::Operation;

/// Sitedesk access CLI for role-assignment policy checks
#[derive(Parser)]
#[command(name = "sitedesk-access")]
#[command(about = "Sitedesk admin console access policy CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate whether a role assignment would be allowed
    Check(CheckArgs),

    /// List the roles an acting role may assign
    Roles(RolesArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Role of the operator performing the action
    #[arg(long)]
    pub acting: String,

    /// Role being assigned
    #[arg(long)]
    pub target: String,

    /// Operation being performed
    #[arg(long, value_enum)]
    pub operation: OperationArg,

    /// Current role of the user being modified (change-role only)
    #[arg(long)]
    pub current: Option<String>,

    /// Emit the decision as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct RolesArgs {
    /// Role of the operator performing the action
    #[arg(long)]
    pub acting: String,

    /// Operation the picker is for
    #[arg(long, value_enum)]
    pub operation: OperationArg,

    /// Emit the list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OperationArg {
    CreateUser,
    ChangeRole,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::CreateUser => Operation::CreateUser,
            OperationArg::ChangeRole => Operation::ChangeRole,
        }
    }
}

/// Execute CLI command
///
/// Routes the parsed CLI command to the appropriate handler function.
pub fn execute_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check(args) => check::run_check(&args),
        Commands::Roles(args) => roles::run_roles(&args),
    }
}

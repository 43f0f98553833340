use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal front end for the employee scheduling service
#[derive(Parser, Debug)]
#[command(name = "shiftbook")]
#[command(version)]
#[command(about = "Employee shift planner for the scheduling API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and cache the bearer token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the cached bearer token
    Logout,
    /// Manage the employee directory
    Employee {
        #[command(subcommand)]
        command: EmployeeCommand,
    },
    /// Manage the position directory
    Position {
        #[command(subcommand)]
        command: PositionCommand,
    },
    /// Plan shifts on the calendar
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCommand {
    /// List all employees
    List,
    /// Add a new employee
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        middle_name: Option<String>,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        email: String,
    },
    /// Update an existing employee record
    Update {
        /// Employee id as assigned by the server
        id: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        middle_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete an employee
    Rm {
        /// Employee id as assigned by the server
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PositionCommand {
    /// List all positions
    List,
    /// Add a new position
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Whether the position is active, e.g. --active false
        #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
        active: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScheduleCommand {
    /// Show the projected calendar and staff legend
    Show,
    /// Create a shift
    Add {
        /// Employee id the shift is assigned to
        #[arg(long)]
        employee: String,
        /// Start time, e.g. 2024-01-01T09:00
        #[arg(long)]
        start: String,
        /// End time, e.g. 2024-01-01T17:00
        #[arg(long)]
        end: String,
        #[arg(long)]
        notes: Option<String>,
        /// Display color, e.g. "#34a853"
        #[arg(long)]
        color: Option<String>,
    },
    /// Edit an existing shift
    Edit {
        /// Shift id as assigned by the server
        id: i64,
        #[arg(long)]
        employee: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a shift
    Rm {
        /// Shift id as assigned by the server
        id: i64,
    },
    /// Export the projected schedule
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ExportFormat {
    Csv,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_schedule_add_parses() {
        let cli = Cli::try_parse_from([
            "shiftbook",
            "schedule",
            "add",
            "--employee",
            "E1",
            "--start",
            "2024-01-01T09:00",
            "--end",
            "2024-01-01T17:00",
        ])
        .expect("valid invocation");
        match cli.command {
            Command::Schedule {
                command: ScheduleCommand::Add { employee, .. },
            } => assert_eq!(employee, "E1"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_export_defaults_to_text() {
        let cli = Cli::try_parse_from(["shiftbook", "schedule", "export"])
            .expect("valid invocation");
        match cli.command {
            Command::Schedule {
                command: ScheduleCommand::Export { format, out },
            } => {
                assert!(matches!(format, ExportFormat::Text));
                assert!(out.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

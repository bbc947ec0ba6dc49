//! CLI administration tool for students-api.
//!
//! Inspects and maintains the student database directly, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all students
//! cargo run --bin admin -- students list
//!
//! # Show one student
//! cargo run --bin admin -- students show 3
//!
//! # Delete a student (asks for confirmation unless -y)
//! cargo run --bin admin -- students delete 3
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (default `storage/storage.db`): SQLite database file

use students_api::application::services::StudentService;
use students_api::config::Config;
use students_api::infrastructure::database;
use students_api::infrastructure::persistence::SqliteStudentRepository;
use students_api::AppError;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

type Service = StudentService<SqliteStudentRepository>;

/// CLI tool for managing students-api data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect or remove students
    Students {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Student subcommands.
#[derive(Subcommand)]
enum StudentAction {
    /// List all students
    List,

    /// Show a single student
    Show {
        /// Student ID
        id: i64,
    },

    /// Delete a student
    Delete {
        /// Student ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    let pool = database::connect(
        &config.storage_path,
        config.db_max_connections,
        config.connect_timeout(),
    )
    .await
    .with_context(|| format!("Failed to open database at {}", config.storage_path))?;

    database::migrate(&pool)
        .await
        .context("Failed to migrate")?;

    let repository = Arc::new(SqliteStudentRepository::new(Arc::new(pool.clone())));
    let service = StudentService::new(repository);

    match cli.command {
        Commands::Students { action } => handle_student_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service, &config).await?,
    }

    pool.close().await;
    Ok(())
}

/// Dispatches student subcommands.
async fn handle_student_action(action: StudentAction, service: &Service) -> Result<()> {
    match action {
        StudentAction::List => list_students(service).await,
        StudentAction::Show { id } => show_student(service, id).await,
        StudentAction::Delete { id, yes } => delete_student(service, id, yes).await,
    }
}

/// Prints every student as a table.
///
/// # Output Format
///
/// ```text
/// Students
///
///   ID    Name                      Email                          Age
///   ──────────────────────────────────────────────────────────────────
///   1     Ada Lovelace              ada@example.com                36
/// ```
async fn list_students(service: &Service) -> Result<()> {
    println!("{}", "Students".bright_blue().bold());
    println!();

    let students = service
        .list_students()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list students: {}", e))?;

    if students.is_empty() {
        println!("{}", "  No students found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<25} {:<30} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Age".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for student in &students {
        println!(
            "  {:<5} {:<25} {:<30} {}",
            student.id.to_string().bright_black(),
            student.name.cyan(),
            student.email,
            student.age
        );
    }

    println!();
    println!(
        "  Total: {}",
        students.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_student(service: &Service, id: i64) -> Result<()> {
    match service.get_student(id).await {
        Ok(student) => {
            println!("  ID:    {}", student.id.to_string().bright_black());
            println!("  Name:  {}", student.name.cyan());
            println!("  Email: {}", student.email);
            println!("  Age:   {}", student.age);
            Ok(())
        }
        Err(AppError::NotFound { message }) => {
            println!("{}", message.yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Deletes a student after showing it and asking for confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
/// - Deletion is permanent
async fn delete_student(service: &Service, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete student".bright_blue().bold());
    println!();

    let student = match service.get_student(id).await {
        Ok(student) => student,
        Err(AppError::NotFound { message }) => {
            println!("{}", message.yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  Name:  {}", student.name.cyan());
    println!("  Email: {}", student.email);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Permanently delete this student?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_student(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete student: {}", e))?;

    println!("{}", "Student deleted".green().bold());
    Ok(())
}

/// Dispatches database subcommands.
async fn handle_db_action(action: DbAction, service: &Service, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("Checking database connection... ");
            match service.health_check().await {
                Ok(()) => println!("{}", "OK".green().bold()),
                Err(e) => {
                    println!("{}", "FAILED".red().bold());
                    anyhow::bail!("Database check failed: {}", e);
                }
            }
        }
        DbAction::Info => {
            println!("{}", "Database info".bright_blue().bold());
            println!();

            let count = service
                .count_students()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count students: {}", e))?;

            println!("  Path:     {}", config.storage_path.cyan());
            println!("  Students: {}", count.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

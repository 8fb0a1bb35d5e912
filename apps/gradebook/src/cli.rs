//! # CLI
//!
//! Command-line interface for the Gradebook binary.
//!
//! Commands:
//! - `serve` (default): run the GraphQL server
//! - `schema`: print the GraphQL SDL
//! - `fixtures`: load a fixture dataset and summarize it

use crate::api;
use crate::config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
use crate::error::AppError;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gradebook_core::relations::dangling_students;
use gradebook_core::{Fixtures, IdStrategy, RecordId, StoreCounts};
use serde::Serialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "gradebook",
    version,
    about = "GraphQL API over in-memory courses, students and grades"
)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, env = "GRADEBOOK_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the GraphQL server
    Serve(ServeArgs),

    /// Print the GraphQL schema in SDL
    Schema,

    /// Load a fixture dataset and print a summary
    Fixtures {
        /// Directory holding courses.json, students.json and grades.json
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Id assignment rule for new records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdStrategyArg {
    /// Highest issued id + 1; ids are never reused
    Monotonic,
    /// Record count + 1; may collide after deletions
    Legacy,
}

impl From<IdStrategyArg> for IdStrategy {
    fn from(arg: IdStrategyArg) -> Self {
        match arg {
            IdStrategyArg::Monotonic => IdStrategy::Monotonic,
            IdStrategyArg::Legacy => IdStrategy::Legacy,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "GRADEBOOK_HOST", default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to bind
    #[arg(short, long, env = "GRADEBOOK_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Load fixtures from this directory instead of the bundled dataset
    #[arg(long, env = "GRADEBOOK_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    /// How ids of added records are chosen
    #[arg(long, value_enum, env = "GRADEBOOK_ID_STRATEGY", default_value_t = IdStrategyArg::Monotonic)]
    pub id_strategy: IdStrategyArg,

    /// Do not serve the GraphiQL IDE
    #[arg(long, env = "GRADEBOOK_NO_GRAPHIQL")]
    pub no_graphiql: bool,

    /// Do not add CORS headers
    #[arg(long, env = "GRADEBOOK_NO_CORS")]
    pub no_cors: bool,

    /// Maximum requests per second (0 disables the limit)
    #[arg(long, env = "GRADEBOOK_RATE_LIMIT", default_value_t = 0)]
    pub rate_limit: u32,
}

impl Default for ServeArgs {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            host: defaults.addr.ip(),
            port: defaults.addr.port(),
            fixtures: None,
            id_strategy: IdStrategyArg::Monotonic,
            no_graphiql: false,
            no_cors: false,
            rate_limit: 0,
        }
    }
}

impl ServeArgs {
    /// Translate the flags into a server configuration.
    pub fn to_config(&self) -> ServerConfig {
        let mut config = ServerConfig::default()
            .with_address(SocketAddr::new(self.host, self.port))
            .with_id_strategy(self.id_strategy.into())
            .with_rate_limit(self.rate_limit);

        if let Some(dir) = &self.fixtures {
            config = config.with_fixtures_dir(dir);
        }
        if self.no_graphiql {
            config = config.without_graphiql();
        }
        if self.no_cors {
            config = config.without_cors();
        }
        config
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        None => cmd_serve(&ServeArgs::default()).await,
        Some(Commands::Serve(args)) => cmd_serve(&args).await,
        Some(Commands::Schema) => {
            cmd_schema();
            Ok(())
        }
        Some(Commands::Fixtures { dir, json }) => cmd_fixtures(dir.as_deref(), json),
    }
}

pub async fn cmd_serve(args: &ServeArgs) -> Result<(), AppError> {
    api::serve(args.to_config()).await
}

pub fn cmd_schema() {
    print!("{}", api::schema::sdl());
}

/// Summary of a fixture dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureSummary {
    pub counts: StoreCounts,
    /// Ids of students whose course does not exist.
    pub dangling_students: Vec<RecordId>,
}

/// Load the fixtures in `dir` (or the bundled ones) and summarize them.
pub fn summarize_fixtures(dir: Option<&Path>) -> Result<FixtureSummary, AppError> {
    let fixtures = match dir {
        Some(dir) => Fixtures::load_dir(dir)?,
        None => Fixtures::embedded()?,
    };

    Ok(FixtureSummary {
        counts: StoreCounts {
            courses: fixtures.courses.len(),
            students: fixtures.students.len(),
            grades: fixtures.grades.len(),
        },
        dangling_students: dangling_students(&fixtures.students, &fixtures.courses)
            .iter()
            .map(|student| student.id)
            .collect(),
    })
}

pub fn cmd_fixtures(dir: Option<&Path>, json: bool) -> Result<(), AppError> {
    let summary = summarize_fixtures(dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("courses:  {}", summary.counts.courses);
    println!("students: {}", summary.counts.students);
    println!("grades:   {}", summary.counts.grades);
    if summary.dangling_students.is_empty() {
        println!("all students reference an existing course");
    } else {
        println!(
            "students with unknown course: {:?}",
            summary.dangling_students
        );
    }
    Ok(())
}

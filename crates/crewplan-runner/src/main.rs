use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crewplan_prompts::AgentAction;
use crewplan_runner::config::CrewplanConfig;
use crewplan_runner::duration::parse_duration_text;
use crewplan_runner::employees::load_employees;
use crewplan_runner::estimator::estimate_from_reply;
use crewplan_runner::json_extract::extract_json;
use crewplan_runner::matcher::similarity_scores;
use crewplan_runner::model::mock::ScriptedModel;
use crewplan_runner::report::plan_project;
use crewplan_runner::suitability::interpret_suitability;
use crewplan_runner::{Crew, TracingLogger};
use serde_json::json;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "crewplan", about = "Interpret agent replies and plan task assignments")]
struct Cli {
    #[command(flatten)]
    config: CrewplanConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize a YES/NO answer into "<VERDICT>: <reason>"
    Suitability(ReplyArgs),
    /// Turn a task agent reply into hours and sub-tasks
    Estimate {
        /// Task description the reply answers
        #[arg(long)]
        task: String,
        #[command(flatten)]
        reply: ReplyArgs,
    },
    /// Print the first JSON fragment found in a reply
    ExtractJson(ReplyArgs),
    /// Print the hour count found in a reply
    Duration(ReplyArgs),
    /// Rank employees by how well their skills match a task
    Match {
        #[arg(long)]
        task: String,
    },
    /// Run the full planning flow against recorded model replies
    Replay {
        /// CEO requirement to plan
        #[arg(long)]
        requirement: String,
        /// JSON file mapping analyze/evaluate/estimate to lists of replies
        #[arg(long)]
        replies: PathBuf,
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, clap::Args)]
struct ReplyArgs {
    /// Reply text; read from stdin when neither this nor --reply-file is given
    #[arg(long, conflicts_with = "reply_file")]
    reply: Option<String>,

    /// File holding the reply text
    #[arg(long)]
    reply_file: Option<PathBuf>,
}

impl ReplyArgs {
    fn read(&self) -> Result<String> {
        if let Some(ref reply) = self.reply {
            return Ok(reply.clone());
        }
        if let Some(ref path) = self.reply_file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("read reply file {}", path.display()));
        }
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read reply from stdin")?;
        Ok(buf)
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    cli.config.validate().context("invalid configuration")?;
    let logger = TracingLogger;

    match cli.command {
        Command::Suitability(args) => {
            let reply = args.read()?;
            println!("{}", interpret_suitability(&reply, &logger));
        }
        Command::Estimate { task, reply } => {
            let reply = reply.read()?;
            let estimate = estimate_from_reply(&task, &reply, &logger);
            let out = json!({
                "duration": estimate.duration,
                "days": estimate.days(cli.config.hours_per_day),
                "sub_tasks": estimate.sub_tasks,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::ExtractJson(args) => match extract_json(&args.read()?) {
            Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
            None => {
                warn!("no JSON found in reply");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Duration(args) => match parse_duration_text(&args.read()?) {
            Some(hours) => println!("{hours}"),
            None => {
                warn!("no duration found in reply");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Match { task } => {
            let employees = load_employees(&cli.config.employees_file)?;
            info!(
                "loaded {} employees from {}",
                employees.len(),
                cli.config.employees_file.display()
            );
            for scored in similarity_scores(&task, &employees)? {
                println!(
                    "{:.2}\t{}\t{}",
                    scored.score, scored.employee.name, scored.employee.role
                );
            }
        }
        Command::Replay {
            requirement,
            replies,
            json,
        } => {
            let content = std::fs::read_to_string(&replies)
                .with_context(|| format!("read replies file {}", replies.display()))?;
            let recorded: HashMap<AgentAction, Vec<String>> = serde_json::from_str(&content)
                .with_context(|| format!("parse replies file {}", replies.display()))?;
            let employees = load_employees(&cli.config.employees_file)?;

            let crew = Crew::new(Arc::new(ScriptedModel::from_replies(recorded)))
                .with_policy(cli.config.retry_policy()?);
            let today = chrono::Local::now().date_naive();
            let Some(report) = plan_project(&crew, &requirement, &employees, &cli.config, today)
            else {
                warn!("no plan produced for '{requirement}'");
                return Ok(ExitCode::FAILURE);
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

mod render;

use clap::{Parser, Subcommand};
use sd_core::types::enums::{Difficulty, RequestSource, SkillLevel};
use sd_core::types::io::{AssessmentRequest, CourseFilter, GapRequest, PathRequest, SearchRequest};
use sd_core::{RequestContext, SkillDeck};
use sd_gen::GeminiModel;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Parser)]
#[command(name = "sd")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server with the bundled web UI.
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the OpenAPI document for the HTTP API.
    Openapi,
    /// Generate a learning path from current skills and goals.
    Path {
        #[arg(long = "skill", required = true)]
        skills: Vec<String>,
        #[arg(long, default_value = "intermediate", value_parser = parse_skill_level)]
        level: SkillLevel,
        #[arg(long = "goal")]
        goals: Vec<String>,
    },
    /// Analyze skill gaps against a target role.
    Gaps {
        #[arg(long = "skill", required = true)]
        skills: Vec<String>,
        #[arg(long)]
        role: String,
    },
    /// Ask the generator for course and path recommendations.
    Search { query: String },
    /// Generate assessments for a difficulty level.
    Assess {
        #[arg(long, default_value = "intermediate", value_parser = parse_difficulty)]
        level: Difficulty,
    },
    /// List catalog courses, optionally filtered.
    Courses {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_parser = parse_difficulty)]
        difficulty: Option<Difficulty>,
    },
    /// List catalog learning paths.
    Paths,
    /// Show the tracked skill portfolio.
    Skills,
    /// Show the dashboard summary.
    Dashboard,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port } => {
            sd_serve::openapi::ensure_initialized();
            let port = port.unwrap_or_else(|| {
                std::env::var("SKILLDECK_PORT")
                    .ok()
                    .and_then(|value| value.parse::<u16>().ok())
                    .unwrap_or(4860)
            });
            let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port);
            let state = sd_serve::AppState::new(GeminiModel::from_env());
            if let Err(err) = sd_serve::serve(state, addr).await {
                eprintln!("serve error: {err}");
            }
        }
        Command::Openapi => {
            let spec = sd_serve::openapi::generate_spec();
            println!("{}", spec);
        }
        Command::Path {
            skills,
            level,
            goals,
        } => {
            let deck = deck();
            let result = deck
                .paths()
                .generate(
                    &cli_context(),
                    PathRequest {
                        skills,
                        level,
                        goals,
                    },
                )
                .await;
            render::generated_path(&result);
        }
        Command::Gaps { skills, role } => {
            let deck = deck();
            let result = deck
                .skills()
                .gap_analysis(
                    &cli_context(),
                    GapRequest {
                        current_skills: skills,
                        target_role: role,
                    },
                )
                .await;
            render::gap_report(&result);
        }
        Command::Search { query } => {
            let deck = deck();
            let result = deck
                .search()
                .query(&cli_context(), SearchRequest { query })
                .await;
            render::search_results(&result);
        }
        Command::Assess { level } => {
            let deck = deck();
            let result = deck
                .assessments()
                .generate(&cli_context(), AssessmentRequest { level })
                .await;
            render::assessments(&result);
        }
        Command::Courses {
            query,
            category,
            difficulty,
        } => {
            let filter = CourseFilter {
                query,
                category,
                difficulty,
            };
            render::courses(&deck().catalog().courses(&filter));
        }
        Command::Paths => {
            render::catalog_paths(&deck().catalog().paths());
        }
        Command::Skills => {
            render::portfolio(&deck().catalog().skills());
        }
        Command::Dashboard => {
            render::dashboard(&deck().dashboard().summary());
        }
    }
}

fn deck() -> SkillDeck<GeminiModel> {
    SkillDeck::new(GeminiModel::from_env())
}

fn cli_context() -> RequestContext {
    RequestContext::new(RequestSource::Cli, None)
}

fn parse_skill_level(value: &str) -> Result<SkillLevel, String> {
    match value {
        "beginner" => Ok(SkillLevel::Beginner),
        "intermediate" => Ok(SkillLevel::Intermediate),
        "advanced" => Ok(SkillLevel::Advanced),
        "expert" => Ok(SkillLevel::Expert),
        other => Err(format!("unknown level: {other}")),
    }
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    match value {
        "beginner" => Ok(Difficulty::Beginner),
        "intermediate" => Ok(Difficulty::Intermediate),
        "advanced" => Ok(Difficulty::Advanced),
        other => Err(format!("unknown difficulty: {other}")),
    }
}

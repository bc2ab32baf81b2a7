//! Squat Score CLI
//!
//! 키포인트 JSON → 스쿼트 점수 (0~100) + 관절 각도

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use squat_core::api::assess_request;
#[cfg(feature = "cli")]
use squat_core::{compute_angle, BodySide, ScoringConfig};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "squat_score")]
#[command(about = "Score squat form from detected body keypoints", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Score one subject's keypoints
    Score {
        /// Keypoint JSON file (request object or [[x, y], ...] rows)
        #[arg(long)]
        input: PathBuf,

        /// Body side to score (left or right); defaults to SQUAT_BODY_SIDE or left
        #[arg(long)]
        side: Option<BodySide>,

        /// Print the JSON response instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Angle at B between rays B→A and B→C
    Angle {
        /// First point as x,y
        #[arg(long, allow_hyphen_values = true)]
        a: String,

        /// Vertex as x,y
        #[arg(long, allow_hyphen_values = true)]
        b: String,

        /// Second point as x,y
        #[arg(long, allow_hyphen_values = true)]
        c: String,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score { input, side, json } => {
            let mut request = squat_cli::load_keypoints(&input)?;
            if side.is_some() {
                request.side = side;
            }

            let config = ScoringConfig::from_env_or_default();
            let response = assess_request(&request, &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", squat_cli::format_response(&response));
            }
        }

        Commands::Angle { a, b, c } => {
            let a = squat_cli::parse_point(&a)?;
            let b = squat_cli::parse_point(&b)?;
            let c = squat_cli::parse_point(&c)?;
            println!("{:.2}", compute_angle(a, b, c));
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("squat_score CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}

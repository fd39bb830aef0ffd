#![deny(unsafe_code)]
//! CLI binary for the flow-field particle visualizer.
//!
//! Subcommands:
//! - `render` — run the simulation N frames, write PNG
//! - `list` — print available noise sources and the parameter schema

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use flow_field_core::noise::{self, NOISE_NAMES};
use flow_field_render::PixelCanvas;
use flow_field_sim::{FlowSim, SimParams};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "flow-field", about = "Flow-field particle visualizer CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation for N frames and write a PNG snapshot.
    Render {
        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 1800)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 1800)]
        height: usize,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 600)]
        frames: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Noise source (perlin, simplex, or constant:<value>).
        #[arg(short, long, default_value = "perlin")]
        noise: String,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Simulation parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available noise sources and the parameter schema.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            if cli.json {
                let info = serde_json::json!({
                    "noise": NOISE_NAMES,
                    "params": SimParams::schema(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Noise sources:");
                println!("  {}", NOISE_NAMES.join(", "));
                println!("Parameters:");
                println!("{}", serde_json::to_string_pretty(&SimParams::schema())?);
            }
        }
        Command::Render {
            width,
            height,
            frames,
            seed,
            noise,
            output,
            params,
        } => {
            let params_json: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let sim_params = SimParams::from_json(&params_json);

            let source = noise::from_name(&noise, seed as u32)?;

            let mut sim = FlowSim::with_noise(width, height, seed, sim_params, source)?;
            let mut canvas = PixelCanvas::new(width, height)?;

            for _ in 0..frames {
                sim.frame(&mut canvas);
            }

            flow_field_render::snapshot::write_png(&canvas, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "noise": noise,
                    "width": width,
                    "height": height,
                    "frames": frames,
                    "seed": seed,
                    "params": sim.params_json(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {noise} field ({width}x{height}, {frames} frames, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

// cli.rs - Command-line interface configuration
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::fetch::{DEFAULT_FETCH_TIMEOUT, DEFAULT_STATE_URL};

pub const DEFAULT_FPS: f32 = 60.0;
pub const DEFAULT_FRAMES: u64 = 600;
/// Slowest accepted refresh rate; anything lower falls back to `DEFAULT_FPS`
pub const MIN_FPS: f32 = 0.01;

#[derive(Parser, Debug, Clone)]
#[command(name = "tree-scene")]
#[command(about = "Procedural decorated-tree scene generator", long_about = None)]
pub struct Cli {
    /// Endpoint serving the initial tree state as JSON
    #[arg(long, default_value = DEFAULT_STATE_URL)]
    pub state_url: String,

    /// Timeout for the initial state request, in milliseconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// Skip the initial fetch and keep the default state
    #[arg(long = "no-fetch", default_value = "false")]
    pub no_fetch: bool,

    /// Number of frames to simulate
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    pub frames: u64,

    /// Simulated display refresh rate
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: f32,

    /// Run frames back to back instead of pacing them to the refresh rate
    #[arg(long = "no-pacing", default_value = "false")]
    pub no_pacing: bool,

    /// Read full state replacements from stdin, one JSON object per line
    #[arg(long = "stdin-updates", default_value = "false")]
    pub stdin_updates: bool,

    /// Write the final scene description as JSON
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write the flattened mesh instance buffer as raw bytes
    #[arg(long)]
    pub instances: Option<PathBuf>,
}

/// Validated run settings
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub state_url: Option<String>,
    pub fetch_timeout: Duration,
    pub frames: u64,
    pub fps: f32,
    pub pacing: bool,
    pub stdin_updates: bool,
    pub output: Option<PathBuf>,
    pub instances: Option<PathBuf>,
}

impl RunConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::try_from_secs_f32(1.0 / self.fps)
            .unwrap_or_else(|_| Duration::from_secs_f32(1.0 / DEFAULT_FPS))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            state_url: Some(DEFAULT_STATE_URL.to_string()),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            frames: DEFAULT_FRAMES,
            fps: DEFAULT_FPS,
            pacing: true,
            stdin_updates: false,
            output: None,
            instances: None,
        }
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        // A near-zero or NaN rate would stall the loop
        let fps = if cli.fps.is_finite() && cli.fps >= MIN_FPS {
            cli.fps
        } else {
            DEFAULT_FPS
        };

        Self {
            state_url: (!cli.no_fetch).then_some(cli.state_url),
            fetch_timeout: Duration::from_millis(cli.timeout_ms),
            frames: cli.frames,
            fps,
            pacing: !cli.no_pacing,
            stdin_updates: cli.stdin_updates,
            output: cli.output,
            instances: cli.instances,
        }
    }
}

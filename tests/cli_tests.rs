use std::time::Duration;

use clap::Parser;
use tree_scene::cli::{Cli, RunConfig, DEFAULT_FPS};

fn config(args: &[&str]) -> RunConfig {
    let argv = std::iter::once("tree-scene").chain(args.iter().copied());
    RunConfig::from(Cli::try_parse_from(argv).unwrap())
}

#[cfg(test)]
mod run_config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.frame_interval(), Duration::from_secs_f32(1.0 / 60.0));
    }

    #[test]
    fn test_flags() {
        let config = config(&[
            "--no-fetch",
            "--no-pacing",
            "--stdin-updates",
            "--frames",
            "10",
            "--fps",
            "30",
            "--timeout-ms",
            "250",
        ]);

        assert_eq!(config.state_url, None);
        assert!(!config.pacing);
        assert!(config.stdin_updates);
        assert_eq!(config.frames, 10);
        assert_eq!(config.fps, 30.0);
        assert_eq!(config.fetch_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_tiny_fps_falls_back() {
        let config = config(&["--fps", "1e-30", "--no-pacing"]);
        assert_eq!(config.fps, DEFAULT_FPS);
        assert_eq!(config.frame_interval(), Duration::from_secs_f32(1.0 / DEFAULT_FPS));
    }

    #[test]
    fn test_invalid_fps_falls_back() {
        assert_eq!(config(&["--fps", "0"]).fps, DEFAULT_FPS);
        assert_eq!(config(&["--fps=-5"]).fps, DEFAULT_FPS);
        assert_eq!(config(&["--fps", "NaN"]).fps, DEFAULT_FPS);
    }

    #[test]
    fn test_frame_interval_never_panics() {
        let config = RunConfig {
            fps: 1e-30,
            ..RunConfig::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_secs_f32(1.0 / DEFAULT_FPS));
    }
}

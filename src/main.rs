use std::fs;
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tree_scene::app::App;
use tree_scene::cli::{Cli, RunConfig};
use tree_scene::fetch::{spawn_fetch, HttpStateSource};
use tree_scene::frame::FrameIterator;
use tree_scene::instances;
use tree_scene::scene::SceneBuilder;
use tree_scene::updates::spawn_update_reader;

fn run(config: RunConfig) -> Result<()> {
    let (tx, rx) = mpsc::channel();

    // First frame renders with defaults; the fetch lands whenever it lands
    let mut app = App::new(SceneBuilder::new());

    if let Some(url) = &config.state_url {
        info!("Fetching initial state from {}", url);
        spawn_fetch(Box::new(HttpStateSource::new(url.clone(), config.fetch_timeout)), tx.clone());
    }
    if config.stdin_updates {
        spawn_update_reader(io::BufReader::new(io::stdin()), tx.clone());
    }
    drop(tx);

    let interval = config.frame_interval();
    for frame in FrameIterator::fixed(config.fps).take(config.frames as usize) {
        let started = Instant::now();

        app.drain(&rx);
        app.frame(frame.time);

        if config.pacing {
            if let Some(rest) = interval.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    // Pick up anything that arrived during the last frame
    app.drain(&rx);

    info!(
        "Finished {} frames at t={:.2}s, {} state changes, final state {}",
        config.frames,
        app.elapsed(),
        app.revision(),
        app.state().to_json()
    );

    if let Some(path) = &config.output {
        let json = serde_json::to_string_pretty(app.scene()).context("Failed to serialize scene")?;
        fs::write(path, json).with_context(|| format!("Failed to write scene to {}", path.display()))?;
        info!("Scene written to {}", path.display());
    }

    if let Some(path) = &config.instances {
        let flat = instances::flatten(app.scene());
        fs::write(path, instances::as_bytes(&flat))
            .with_context(|| format!("Failed to write instances to {}", path.display()))?;
        info!("{} instances written to {}", flat.len(), path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::from(Cli::parse());
    run(config)
}

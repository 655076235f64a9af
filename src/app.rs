use std::sync::mpsc::Receiver;

use log::{info, trace, warn};

use crate::fetch::FetchError;
use crate::scene::{Scene, SceneBuilder};
use crate::state::TreeState;

/// Messages the app reacts to; the only way state changes after startup
#[derive(Debug)]
pub enum AppEvent {
    /// Outcome of the one-shot initial fetch
    StateFetched(Result<TreeState, FetchError>),
    /// Full replacement from the update channel
    StateUpdated(TreeState),
}

/// Owns the current state and the scene derived from it
pub struct App {
    state: TreeState,
    builder: SceneBuilder,
    scene: Scene,
    elapsed: f32,
    revision: u64,
}

impl App {
    /// Starts from the default state so the first frame never waits on the network
    pub fn new(builder: SceneBuilder) -> Self {
        let state = TreeState::default();
        let scene = builder.build(&state);
        Self {
            state,
            builder,
            scene,
            elapsed: 0.0,
            revision: 0,
        }
    }

    pub fn state(&self) -> &TreeState {
        &self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn builder(&self) -> &SceneBuilder {
        &self.builder
    }

    /// Number of state replacements applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns true when the event replaced the state
    pub fn handle(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::StateFetched(Ok(state)) => {
                info!("Initial state loaded");
                self.replace_state(state);
                true
            }
            AppEvent::StateFetched(Err(e)) => {
                warn!("Keeping current state, fetch failed: {}", e);
                false
            }
            AppEvent::StateUpdated(state) => {
                self.replace_state(state);
                true
            }
        }
    }

    /// Applies every pending event without blocking; returns how many changed state
    pub fn drain(&mut self, events: &Receiver<AppEvent>) -> usize {
        let mut changed = 0;
        for event in events.try_iter() {
            if self.handle(event) {
                changed += 1;
            }
        }
        changed
    }

    /// Whole-record replacement, last write wins
    pub fn replace_state(&mut self, state: TreeState) {
        info!(
            "State -> lights {:?}, texture {:?}, theme {:?}",
            state.lights_color, state.ornament_texture, state.theme
        );
        self.scene = self.builder.build(&state);
        self.scene.apply_frame(self.elapsed);
        self.state = state;
        self.revision += 1;
    }

    /// Per-frame update: pose animated nodes for the given elapsed time
    pub fn frame(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
        self.scene.apply_frame(elapsed);
        trace!("Frame at {:.3}s", elapsed);
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

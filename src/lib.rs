pub mod animation;
pub mod app;
pub mod cli;
pub mod fetch;
pub mod frame;
pub mod instances;
pub mod math;
pub mod scene;
pub mod state;
pub mod types;
pub mod updates;

pub use app::{App, AppEvent};
pub use scene::{Scene, SceneBuilder};
pub use state::{LightsColor, Theme, TreeState};

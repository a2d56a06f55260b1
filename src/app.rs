mod app_events;
mod app_render;
mod app_state;
mod dashboard;
mod prompt;


pub use app_state::{App, FetchLauncher, Phase};
pub use prompt::QueryPrompt;

mod component;
mod config;
pub mod data;
mod highlight;
mod panels;
mod render;
mod state;
mod types;
mod walkthrough;

pub use component::PipelineCanvas;
pub use panels::{HelpPanel, Legend, PresentationControls};
pub use walkthrough::Walkthrough;

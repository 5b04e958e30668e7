pub mod controller;

pub use controller::{ControllerState, PipelineController};

pub mod actions;
pub mod errors;
pub mod state;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, VoxelError};
pub use state::UiState;
pub use types::{Color, Gesture, HandInteractionState, HandPatch, ShapeKind};

pub type Result<T> = std::result::Result<T, VoxelError>;

//! Particle morphing engine: shape targets, morph timing, gesture-driven
//! forces, and the per-frame data handed to the renderer.

pub mod field;
pub mod forces;
pub mod morph;
pub mod particles;
pub mod perf;
pub mod shapes;
pub mod uniforms;

pub use forces::{damp, CameraRig, CursorTracker, ForceMapper, InteractionDynamics};
pub use morph::{MorphController, MorphOutcome, MorphPhase, ShapeTicket};
pub use particles::ParticleSet;
pub use perf::FrameTimer;
pub use shapes::{generate, GlyphOutline, ShapeError, ShapeGenerator};
pub use uniforms::FrameUniforms;

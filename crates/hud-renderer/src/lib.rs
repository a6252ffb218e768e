pub mod gpu;
pub mod perf;
pub mod quad;
pub mod texture;

pub use gpu::{RendererError, Viewport};
pub use perf::FrameTimer;
pub use quad::{OverlayRenderer, Primitive, QuadBatch};
pub use texture::{TextureHandle, TextureStore};

//! Texture registry for the overlay.
//!
//! The batcher only ever sees opaque [`TextureHandle`]s; the GPU objects
//! (texture, view, per-texture bind group) live here and are looked up
//! when draw calls are recorded.

mod store;
mod types;

pub use store::{TextureEntry, TextureStore};
pub use types::TextureHandle;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_compare_by_identity() {
        let a = TextureHandle(0);
        let b = TextureHandle(0);
        let c = TextureHandle(1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn handle_is_copy() {
        let a = TextureHandle(7);
        let b = a;
        assert_eq!(a.index(), 7);
        assert_eq!(b.index(), 7);
    }
}

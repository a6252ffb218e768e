/// Opaque handle to a texture registered with a [`TextureStore`].
///
/// Handles are compared by identity: two quads batch into one draw call
/// iff they carry equal handles.
///
/// [`TextureStore`]: super::TextureStore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub(crate) u32);

impl TextureHandle {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

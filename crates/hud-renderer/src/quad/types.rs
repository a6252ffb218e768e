use crate::texture::TextureHandle;

/// One corner of a quad as it lands in the vertex scratch buffer.
///
/// 7 floats: pixel position, the colorize flag, the unnormalized texture
/// coordinate, and the corner-marker pair the fragment stage interpolates
/// into a graph-height comparison axis.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// [x, y, colorize]; colorize is 1.0 for enabled quads, 0.0 otherwise.
    pub position: [f32; 3],
    /// [u, v, corner_x, corner_y]; u/v in texels, corners 0 or 1.
    pub texcoord: [f32; 4],
}

/// One contiguous run of same-texture quads, i.e. one indexed draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    /// First index in the static index table.
    pub base: u32,
    /// Number of indices covered (6 per quad).
    pub count: u32,
    pub texture: TextureHandle,
}

/// Per-frame uniform block, written once before the draw loop.
///
/// Matches the WGSL `FrameUniforms` struct: 28 floats, 16-byte aligned.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct FrameUniforms {
    /// Tint multiplied into every output pixel.
    pub tint: [f32; 4],
    pub graph0: [f32; 4],
    pub graph1: [f32; 4],
    pub graph2: [f32; 4],
    pub watermark: [f32; 4],
    pub background: [f32; 4],
    /// Logical screen size after pixel-ratio adjustment.
    pub screen_size: [f32; 2],
    /// Half-texel band around the watermark level, in texture space.
    pub watermark_size: f32,
    pub _pad: f32,
}

/// Per-texture uniform carried in each texture's bind group.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct TextureSizeUniform {
    pub size: [f32; 2],
    pub _pad: [f32; 2],
}

pub(crate) const VERTICES_PER_QUAD: usize = 4;
pub(crate) const INDICES_PER_QUAD: usize = 6;

/// Build the immutable two-triangles-per-quad index table:
/// quad i covers (4i, 4i+1, 4i+2) and (4i, 4i+2, 4i+3).
///
/// Callers validate `max_quads` against [`hud_common::MAX_QUADS_LIMIT`]
/// before the table is built; every index fits in a `u16`.
pub(crate) fn quad_indices(max_quads: usize) -> Vec<u16> {
    let mut indices = Vec::with_capacity(max_quads * INDICES_PER_QUAD);
    for i in 0..max_quads {
        let base = (i * VERTICES_PER_QUAD) as u16;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    indices
}

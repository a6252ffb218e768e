use bytemuck::Zeroable;

use super::types::{Primitive, Vertex, INDICES_PER_QUAD, VERTICES_PER_QUAD};
use crate::gpu::RendererError;
use crate::texture::TextureHandle;

/// CPU-side frame state: the vertex scratch buffer plus the primitive pool.
///
/// Both allocations are made once and reused every frame. `push` writes four
/// vertices per quad and greedily merges the quad into the open primitive
/// when it shares that primitive's texture; any texture change opens a new
/// primitive, so batching quality follows the caller's emission order.
/// `reset` only rewinds the logical counters; the scratch buffer keeps its
/// full length and the pool keeps every slot it ever grew.
pub struct QuadBatch {
    vertices: Vec<Vertex>,
    quads: usize,
    prims: Vec<Primitive>,
    active_prims: usize,
    max_quads: usize,
}

impl QuadBatch {
    /// Allocate scratch for `max_quads` quads. The caller has already
    /// validated the capacity (positive, within the u16 index limit).
    pub(crate) fn new(max_quads: usize) -> Self {
        Self {
            vertices: vec![Vertex::zeroed(); max_quads * VERTICES_PER_QUAD],
            quads: 0,
            prims: Vec::new(),
            active_prims: 0,
            max_quads,
        }
    }

    /// Append one quad: target rectangle `(x, y, w, h)` in pixels, texture
    /// origin `(u, v)` in texels. `uw`/`uh` default to `w`/`h`, giving a
    /// 1:1 texel-to-pixel mapping when omitted.
    ///
    /// Fails once the frame holds `max_quads` quads; already-emitted quads
    /// are unaffected.
    #[allow(clippy::too_many_arguments)]
    pub fn push(
        &mut self,
        texture: TextureHandle,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        u: f32,
        v: f32,
        uw: Option<f32>,
        uh: Option<f32>,
        enabled: bool,
    ) -> Result<(), RendererError> {
        if self.quads == self.max_quads {
            return Err(RendererError::CapacityExceeded {
                max: self.max_quads,
            });
        }
        let quad = self.quads;
        self.quads += 1;

        // Extend the open primitive or claim the next pool slot.
        if self.active_prims > 0 && self.prims[self.active_prims - 1].texture == texture {
            self.prims[self.active_prims - 1].count += INDICES_PER_QUAD as u32;
        } else {
            let prim = Primitive {
                base: (quad * INDICES_PER_QUAD) as u32,
                count: INDICES_PER_QUAD as u32,
                texture,
            };
            if self.active_prims == self.prims.len() {
                self.prims.push(prim);
            } else {
                self.prims[self.active_prims] = prim;
            }
            self.active_prims += 1;
        }

        let x1 = x + w;
        let y1 = y + h;
        let u1 = u + uw.unwrap_or(w);
        let v1 = v + uh.unwrap_or(h);
        let colorize = if enabled { 1.0 } else { 0.0 };

        let base = quad * VERTICES_PER_QUAD;
        self.vertices[base] = Vertex {
            position: [x, y, colorize],
            texcoord: [u, v, 0.0, 0.0],
        };
        self.vertices[base + 1] = Vertex {
            position: [x1, y, colorize],
            texcoord: [u1, v, 1.0, 0.0],
        };
        self.vertices[base + 2] = Vertex {
            position: [x1, y1, colorize],
            texcoord: [u1, v1, 1.0, 1.0],
        };
        self.vertices[base + 3] = Vertex {
            position: [x, y1, colorize],
            texcoord: [u, v1, 0.0, 1.0],
        };

        Ok(())
    }

    /// Rewind the frame counters. Allocations stay put.
    pub fn reset(&mut self) {
        self.quads = 0;
        self.active_prims = 0;
    }

    /// The primitives of the current frame, in emission order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.prims[..self.active_prims]
    }

    /// The full scratch buffer, the whole capacity rather than just the
    /// populated prefix. Uploaded in one transfer per frame.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn quad_count(&self) -> usize {
        self.quads
    }

    pub fn is_empty(&self) -> bool {
        self.quads == 0
    }

    pub fn max_quads(&self) -> usize {
        self.max_quads
    }

    /// High-water mark of the primitive pool (slots survive `reset`).
    pub fn pooled_primitives(&self) -> usize {
        self.prims.len()
    }
}

//! Batched textured-quad rendering for the performance overlay.
//!
//! Callers push quads each frame (glyph rectangles and graph strips), and
//! consecutive quads sharing a texture collapse into a single indexed draw
//! call. All buffers (vertex scratch, index table, primitive pool) are
//! allocated once at construction and reused every frame; `render` uploads,
//! draws in emission order, and rewinds the frame counters.
//!
//! CPU-side accumulation lives in [`QuadBatch`] so the batching rules are
//! testable without a GPU device; [`OverlayRenderer`] adds the pipeline,
//! buffers, and draw submission on top.

mod batch;
mod pipeline;
mod renderer;
mod types;

pub use batch::QuadBatch;
pub use renderer::OverlayRenderer;
pub use types::{FrameUniforms, Primitive, TextureSizeUniform, Vertex};

#[cfg(test)]
mod tests {
    use super::types::quad_indices;
    use super::*;
    use crate::gpu::RendererError;
    use crate::texture::TextureHandle;

    fn push_plain(batch: &mut QuadBatch, texture: TextureHandle) {
        batch
            .push(texture, 0.0, 0.0, 8.0, 8.0, 0.0, 0.0, None, None, true)
            .unwrap();
    }

    #[test]
    fn vertex_is_seven_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 28);
    }

    #[test]
    fn frame_uniforms_are_uniform_aligned() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 112);
        assert_eq!(std::mem::size_of::<TextureSizeUniform>(), 16);
    }

    #[test]
    fn index_table_follows_two_triangle_pattern() {
        let indices = quad_indices(3);
        assert_eq!(indices.len(), 18);
        assert_eq!(&indices[..6], &[0, 1, 2, 0, 2, 3]);
        // Quad i starts at vertex 4i.
        assert_eq!(&indices[6..12], &[4, 5, 6, 4, 6, 7]);
        assert_eq!(&indices[12..], &[8, 9, 10, 8, 10, 11]);
    }

    #[test]
    fn push_writes_four_corners_in_order() {
        let mut batch = QuadBatch::new(4);
        let tex = TextureHandle(0);
        batch
            .push(tex, 10.0, 20.0, 5.0, 8.0, 1.0, 2.0, Some(3.0), Some(4.0), true)
            .unwrap();

        let v = batch.vertices();
        // TL, TR, BR, BL with corner markers (0,0), (1,0), (1,1), (0,1).
        assert_eq!(v[0].position, [10.0, 20.0, 1.0]);
        assert_eq!(v[0].texcoord, [1.0, 2.0, 0.0, 0.0]);
        assert_eq!(v[1].position, [15.0, 20.0, 1.0]);
        assert_eq!(v[1].texcoord, [4.0, 2.0, 1.0, 0.0]);
        assert_eq!(v[2].position, [15.0, 28.0, 1.0]);
        assert_eq!(v[2].texcoord, [4.0, 6.0, 1.0, 1.0]);
        assert_eq!(v[3].position, [10.0, 28.0, 1.0]);
        assert_eq!(v[3].texcoord, [1.0, 6.0, 0.0, 1.0]);
    }

    #[test]
    fn omitted_uv_extents_default_to_quad_size() {
        let mut batch = QuadBatch::new(4);
        batch
            .push(TextureHandle(0), 10.0, 20.0, 5.0, 8.0, 0.0, 0.0, None, None, true)
            .unwrap();

        // Second texture corner lands at (u + w, v + h) = (5, 8).
        let br = batch.vertices()[2];
        assert_eq!(br.texcoord[0], 5.0);
        assert_eq!(br.texcoord[1], 8.0);
    }

    #[test]
    fn disabled_quad_zeroes_colorize_on_all_corners() {
        let mut batch = QuadBatch::new(4);
        batch
            .push(TextureHandle(0), 0.0, 0.0, 4.0, 4.0, 0.0, 0.0, None, None, false)
            .unwrap();
        for v in &batch.vertices()[..4] {
            assert_eq!(v.position[2], 0.0);
        }

        batch
            .push(TextureHandle(0), 0.0, 0.0, 4.0, 4.0, 0.0, 0.0, None, None, true)
            .unwrap();
        for v in &batch.vertices()[4..8] {
            assert_eq!(v.position[2], 1.0);
        }
    }

    #[test]
    fn consecutive_same_texture_quads_merge() {
        let mut batch = QuadBatch::new(8);
        let a = TextureHandle(0);
        push_plain(&mut batch, a);
        push_plain(&mut batch, a);
        push_plain(&mut batch, a);

        let prims = batch.primitives();
        assert_eq!(prims.len(), 1);
        assert_eq!(prims[0].base, 0);
        assert_eq!(prims[0].count, 18);
        assert_eq!(prims[0].texture, a);
    }

    #[test]
    fn texture_change_starts_new_primitive_even_for_reused_texture() {
        // [A, A, A, B, B, A] -> three primitives with counts (18, 12, 6).
        let mut batch = QuadBatch::new(8);
        let a = TextureHandle(0);
        let b = TextureHandle(1);
        for tex in [a, a, a, b, b, a] {
            push_plain(&mut batch, tex);
        }

        let prims = batch.primitives();
        assert_eq!(prims.len(), 3);
        assert_eq!((prims[0].base, prims[0].count, prims[0].texture), (0, 18, a));
        assert_eq!((prims[1].base, prims[1].count, prims[1].texture), (18, 12, b));
        assert_eq!((prims[2].base, prims[2].count, prims[2].texture), (30, 6, a));
    }

    #[test]
    fn primitives_partition_the_index_range() {
        let mut batch = QuadBatch::new(16);
        for tex in [0u32, 0, 1, 2, 2, 2, 0, 3, 3, 1] {
            push_plain(&mut batch, TextureHandle(tex));
        }

        // No gaps, no overlaps: each primitive starts where the previous
        // one ended and together they cover [0, 6 * quads).
        let mut cursor = 0;
        for prim in batch.primitives() {
            assert_eq!(prim.base, cursor);
            cursor += prim.count;
        }
        assert_eq!(cursor as usize, 6 * batch.quad_count());
    }

    #[test]
    fn capacity_is_enforced() {
        let mut batch = QuadBatch::new(2);
        push_plain(&mut batch, TextureHandle(0));
        push_plain(&mut batch, TextureHandle(0));

        let err = batch
            .push(TextureHandle(0), 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, None, None, true)
            .unwrap_err();
        assert!(matches!(err, RendererError::CapacityExceeded { max: 2 }));
        // The frame keeps what was already emitted.
        assert_eq!(batch.quad_count(), 2);
    }

    #[test]
    fn reset_rewinds_counters_but_keeps_allocations() {
        let mut batch = QuadBatch::new(8);
        for tex in [0u32, 1, 2] {
            push_plain(&mut batch, TextureHandle(tex));
        }
        assert_eq!(batch.pooled_primitives(), 3);

        batch.reset();
        assert_eq!(batch.quad_count(), 0);
        assert!(batch.primitives().is_empty());
        assert!(batch.is_empty());
        // Pool slots and the scratch buffer survive the reset.
        assert_eq!(batch.pooled_primitives(), 3);
        assert_eq!(batch.vertices().len(), 8 * 4);
    }

    #[test]
    fn pool_slots_are_overwritten_not_reallocated() {
        let mut batch = QuadBatch::new(8);
        for tex in [0u32, 1, 2] {
            push_plain(&mut batch, TextureHandle(tex));
        }
        batch.reset();

        // Next frame uses fewer primitives; the pool keeps its high-water mark.
        push_plain(&mut batch, TextureHandle(5));
        assert_eq!(batch.primitives().len(), 1);
        assert_eq!(batch.primitives()[0].texture, TextureHandle(5));
        assert_eq!(batch.pooled_primitives(), 3);
    }

    #[test]
    fn identical_frames_produce_identical_state() {
        let emit = |batch: &mut QuadBatch| {
            for (i, tex) in [0u32, 0, 1, 1, 0].into_iter().enumerate() {
                batch
                    .push(
                        TextureHandle(tex),
                        i as f32 * 10.0,
                        4.0,
                        8.0,
                        8.0,
                        0.0,
                        0.0,
                        None,
                        None,
                        i % 2 == 0,
                    )
                    .unwrap();
            }
        };

        let mut batch = QuadBatch::new(8);
        emit(&mut batch);
        let first_vertices = batch.vertices().to_vec();
        let first_prims = batch.primitives().to_vec();

        batch.reset();
        emit(&mut batch);
        assert_eq!(batch.vertices(), first_vertices.as_slice());
        assert_eq!(batch.primitives(), first_prims.as_slice());
    }
}

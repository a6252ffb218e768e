use bytemuck::Zeroable;
use wgpu::util::DeviceExt;

use hud_common::{OverlayColors, OverlayConfig, Rgba};

use super::batch::QuadBatch;
use super::pipeline::SHADER_SOURCE;
use super::types::{FrameUniforms, TextureSizeUniform, Vertex, VERTICES_PER_QUAD};
use crate::gpu::{RendererError, Viewport};
use crate::texture::{TextureHandle, TextureStore};

/// Batched renderer for the performance overlay.
///
/// Quads pushed during a frame accumulate in a [`QuadBatch`]; `render`
/// uploads the scratch buffer, records one indexed draw call per primitive,
/// and rewinds the frame state. All capacity is fixed at construction.
pub struct OverlayRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    texture_layout: wgpu::BindGroupLayout,
    colors: OverlayColors,
    batch: QuadBatch,
}

impl OverlayRenderer {
    /// Build the pipeline and permanent buffers for `config.max_quads` quads.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        config: &OverlayConfig,
    ) -> Result<Self, RendererError> {
        config.validate()?;
        let max_quads = config.max_quads;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("overlay shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("overlay frame uniforms"),
            contents: bytemuck::cast_slice(&[FrameUniforms::zeroed()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("overlay frame bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<FrameUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("overlay frame bind group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        // One bind group per texture: view, sampler, and the texture's size
        // so each draw call sees its own texel scale.
        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("overlay texture bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<TextureSizeUniform>() as u64,
                        ),
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("overlay pipeline layout"),
            bind_group_layouts: &[&frame_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("overlay pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        // position + colorize
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x3,
                        },
                        // texcoord + corner markers
                        wgpu::VertexAttribute {
                            offset: 12,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32x4,
                        },
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState {
                        color: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::SrcAlpha,
                            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                            operation: wgpu::BlendOperation::Add,
                        },
                        alpha: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::One,
                            dst_factor: wgpu::BlendFactor::One,
                            operation: wgpu::BlendOperation::Add,
                        },
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("overlay vertex scratch"),
            size: (max_quads * VERTICES_PER_QUAD * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("overlay indices"),
            contents: bytemuck::cast_slice(&super::types::quad_indices(max_quads)),
            usage: wgpu::BufferUsages::INDEX,
        });

        tracing::debug!(max_quads, "created overlay renderer");

        Ok(Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            frame_buffer,
            frame_bind_group,
            texture_layout,
            colors: config.colors,
            batch: QuadBatch::new(max_quads),
        })
    }

    /// Append one quad for this frame. See [`QuadBatch::push`].
    #[allow(clippy::too_many_arguments)]
    pub fn push_quad(
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
        self.batch.push(texture, x, y, w, h, u, v, uw, uh, enabled)
    }

    /// Draw everything accumulated this frame into `target`, then rewind.
    ///
    /// The whole scratch buffer is uploaded in one transfer regardless of
    /// how many quads were pushed. Draw calls are recorded in emission
    /// order, one per primitive. `height_px` is the overlay's pixel height;
    /// it sizes the watermark band at half a texel.
    pub fn render(
        &mut self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        textures: &TextureStore,
        viewport: Viewport,
        tint: Rgba,
        height_px: f32,
    ) {
        queue.write_buffer(
            &self.vertex_buffer,
            0,
            bytemuck::cast_slice(self.batch.vertices()),
        );

        queue.write_buffer(
            &self.frame_buffer,
            0,
            bytemuck::cast_slice(&[FrameUniforms {
                tint: tint.to_f32_array(),
                graph0: self.colors.graph0.to_f32_array(),
                graph1: self.colors.graph1.to_f32_array(),
                graph2: self.colors.graph2.to_f32_array(),
                watermark: self.colors.watermark.to_f32_array(),
                background: self.colors.background.to_f32_array(),
                screen_size: viewport.scaled_size(),
                watermark_size: 0.5 / height_px,
                _pad: 0.0,
            }]),
        );

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("overlay pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !self.batch.is_empty() {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.frame_bind_group, &[]);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

                for prim in self.batch.primitives() {
                    let entry = textures.get(prim.texture);
                    pass.set_bind_group(1, &entry.bind_group, &[]);
                    pass.draw_indexed(prim.base..prim.base + prim.count, 0, 0..1);
                }
            }
        }

        tracing::trace!(
            quads = self.batch.quad_count(),
            draw_calls = self.batch.primitives().len(),
            "overlay frame submitted"
        );

        self.batch.reset();
    }

    /// Layout the [`TextureStore`] builds per-texture bind groups against.
    pub fn texture_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_layout
    }

    /// The accumulated frame state (primitives, quad count).
    pub fn batch(&self) -> &QuadBatch {
        &self.batch
    }
}

use wgpu::util::DeviceExt;

use super::types::TextureHandle;
use crate::quad::{OverlayRenderer, TextureSizeUniform};

/// One registered texture: the GPU objects plus its pixel dimensions.
pub struct TextureEntry {
    texture: wgpu::Texture,
    pub bind_group: wgpu::BindGroup,
    pub width: u32,
    pub height: u32,
}

/// Owns the RGBA8 textures the overlay samples from.
///
/// Each entry gets its own bind group carrying the texture view, the shared
/// nearest-neighbor sampler, and a small uniform with the texture's size,
/// so a draw call picks up the right texel scale just by binding the group.
pub struct TextureStore {
    entries: Vec<TextureEntry>,
    sampler: wgpu::Sampler,
}

impl TextureStore {
    pub fn new(device: &wgpu::Device) -> Self {
        // Glyph and graph texels must stay crisp; no filtering.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("overlay sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            entries: Vec::new(),
            sampler,
        }
    }

    /// Upload `pixels` (tightly packed RGBA8, `width * height * 4` bytes)
    /// as a new texture and return its handle.
    pub fn create(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        renderer: &OverlayRenderer,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> TextureHandle {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("overlay texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        write_pixels(queue, &texture, width, height, pixels);

        let size_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("overlay texture size"),
            contents: bytemuck::cast_slice(&[TextureSizeUniform {
                size: [width as f32, height as f32],
                _pad: [0.0; 2],
            }]),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("overlay texture bind group"),
            layout: renderer.texture_layout(),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: size_buffer.as_entire_binding(),
                },
            ],
        });

        let handle = TextureHandle(self.entries.len() as u32);
        self.entries.push(TextureEntry {
            texture,
            bind_group,
            width,
            height,
        });

        tracing::debug!(width, height, ?handle, "registered overlay texture");
        handle
    }

    /// Replace the full pixel contents of an existing texture.
    ///
    /// Graph strips are re-authored by the caller every frame; this is the
    /// cheap path that reuses the texture and its bind group.
    pub fn write(&self, queue: &wgpu::Queue, handle: TextureHandle, pixels: &[u8]) {
        let entry = self.get(handle);
        debug_assert_eq!(pixels.len(), (entry.width * entry.height * 4) as usize);
        write_pixels(queue, &entry.texture, entry.width, entry.height, pixels);
    }

    /// Resolve a handle issued by this store.
    pub fn get(&self, handle: TextureHandle) -> &TextureEntry {
        &self.entries[handle.index()]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn write_pixels(queue: &wgpu::Queue, texture: &wgpu::Texture, width: u32, height: u32, pixels: &[u8]) {
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(width * 4),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
}

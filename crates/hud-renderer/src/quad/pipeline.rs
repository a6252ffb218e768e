pub(crate) const SHADER_SOURCE: &str = r#"
struct FrameUniforms {
    tint: vec4<f32>,
    graph0: vec4<f32>,
    graph1: vec4<f32>,
    graph2: vec4<f32>,
    watermark: vec4<f32>,
    background: vec4<f32>,
    screen_size: vec2<f32>,
    watermark_size: f32,
    _pad: f32,
};

struct TextureSize {
    size: vec2<f32>,
    _pad: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> frame: FrameUniforms;

@group(1) @binding(0)
var source: texture_2d<f32>;

@group(1) @binding(1)
var source_sampler: sampler;

@group(1) @binding(2)
var<uniform> tex: TextureSize;

struct VertexInput {
    // xy: pixel position, z: colorize flag
    @location(0) position: vec3<f32>,
    // xy: texel coordinate, zw: corner markers
    @location(1) texcoord: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    // xy: normalized uv, zw: interpolated corner markers
    @location(0) uv: vec4<f32>,
    @location(1) colorize: f32,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;

    // Pixel coordinates (origin top-left) to NDC.
    let pos = in.position.xy / frame.screen_size;
    out.clip_position = vec4<f32>(pos.x * 2.0 - 1.0, 1.0 - pos.y * 2.0, 0.5, 1.0);

    out.uv = vec4<f32>(in.texcoord.xy / tex.size, in.texcoord.zw);
    out.colorize = in.position.z;
    return out;
}

// Pure-white texels are text glyphs and pass straight through. Any other
// texel encodes graph data: R/G/B hold the height thresholds of series
// 0/1/2 and A holds the watermark level, each compared against the
// interpolated vertical corner marker.
@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    var color = textureSample(source, source_sampler, in.uv.xy);

    if (!all(color.rgb == vec3<f32>(1.0))) {
        if (in.colorize < 0.5) {
            color = frame.background;
        } else if (abs(in.uv.w - color.a) < frame.watermark_size) {
            color = frame.watermark;
        } else if (in.uv.w < color.r) {
            color = frame.graph0;
        } else if (in.uv.w < color.g) {
            color = frame.graph1;
        } else if (in.uv.w < color.b) {
            color = frame.graph2;
        } else {
            color = frame.background;
        }
    }

    return color * frame.tint;
}
"#;

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::core::gpu_context::GpuContext;
use crate::mesh::{MeshData, Vertex};
use crate::scene::{DrawCommand, Material, MeshKind, FLOOR_HEIGHT};
use crate::texture::TextureData;
use crate::types::{ModelUniform, SceneUniform};
use crate::viewer::Viewer;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};
/// Floor texture repeats this many times per side
const FLOOR_TILES: f32 = 50.0;
const INITIAL_DRAW_CAPACITY: usize = 16;

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertices", label)),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Indices", label)),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }
}

/// Snapshot of the values shown in the HUD
struct HudInfo {
    fps: f32,
    flight_mode: &'static str,
    camera_mode: &'static str,
    position: glam::Vec3,
    direction: glam::Vec3,
    yaw: f32,
    pitch: f32,
    camera_position: glam::Vec3,
    zoom: f32,
}

struct Hud {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Rasterizes the scene and the optional egui HUD
pub struct SceneRenderer {
    gpu: GpuContext,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    pipeline: wgpu::RenderPipeline,
    depth_view: wgpu::TextureView,
    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    model_layout: wgpu::BindGroupLayout,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
    model_stride: u64,
    model_capacity: usize,
    meshes: HashMap<MeshKind, GpuMesh>,
    materials: HashMap<Material, wgpu::BindGroup>,
    hud: Option<Hud>,
}

impl SceneRenderer {
    pub async fn new(window: Arc<Window>, floor_extent: f32, show_ui: bool) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create window surface")?;
        let gpu = GpuContext::new(&instance, &surface).await?;
        let device = gpu.device();

        let surface_config = Self::create_surface_config(&surface, gpu.adapter(), size)?;
        surface.configure(device, &surface_config);

        let depth_view = Self::create_depth_view(device, size);

        let scene_layout = Self::uniform_layout(device, "scene_bind_group_layout", false, None);
        let model_size = std::mem::size_of::<ModelUniform>() as u64;
        let model_layout = Self::uniform_layout(
            device,
            "model_bind_group_layout",
            true,
            wgpu::BufferSize::new(model_size),
        );
        let material_layout = Self::material_layout(device);

        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Scene Uniform Buffer"),
            size: std::mem::size_of::<SceneUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &scene_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
            label: Some("scene_bind_group"),
        });

        let model_stride = gpu.uniform_stride(model_size);
        let (model_buffer, model_bind_group) =
            Self::create_model_buffer(device, &model_layout, model_stride, INITIAL_DRAW_CAPACITY);

        let pipeline = Self::create_pipeline(
            device,
            surface_config.format,
            &[&scene_layout, &model_layout, &material_layout],
        );

        let meshes = HashMap::from([
            (MeshKind::Cube, GpuMesh::upload(device, "Cube", &MeshData::cube())),
            (
                MeshKind::Floor,
                GpuMesh::upload(
                    device,
                    "Floor",
                    &MeshData::floor(floor_extent, FLOOR_HEIGHT, FLOOR_TILES),
                ),
            ),
            (MeshKind::Airplane, GpuMesh::upload(device, "Airplane", &MeshData::airplane())),
        ]);

        let materials = Self::create_materials(&gpu, &material_layout);

        let hud = show_ui.then(|| {
            let ctx = egui::Context::default();
            let state = egui_winit::State::new(
                ctx.clone(),
                egui::ViewportId::ROOT,
                &window,
                Some(window.scale_factor() as f32),
                None,
                None,
            );
            let renderer = egui_wgpu::Renderer::new(
                device,
                surface_config.format,
                egui_wgpu::RendererOptions::default(),
            );
            Hud { ctx, state, renderer }
        });

        log::info!(
            "Renderer initialized: {}x{}, {:?}, HUD {}",
            size.width,
            size.height,
            surface_config.format,
            if show_ui { "on" } else { "off" }
        );

        Ok(Self {
            gpu,
            surface,
            surface_config,
            size,
            pipeline,
            depth_view,
            scene_buffer,
            scene_bind_group,
            model_layout,
            model_buffer,
            model_bind_group,
            model_stride,
            model_capacity: INITIAL_DRAW_CAPACITY,
            meshes,
            materials,
            hud,
        })
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> Result<wgpu::SurfaceConfiguration> {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("Surface reports no supported formats")?;

        Ok(wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    fn create_depth_view(
        device: &wgpu::Device,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn uniform_layout(
        device: &wgpu::Device,
        label: &str,
        has_dynamic_offset: bool,
        min_binding_size: Option<wgpu::BufferSize>,
    ) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset,
                    min_binding_size,
                },
                count: None,
            }],
            label: Some(label),
        })
    }

    fn material_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
            ],
            label: Some("material_bind_group_layout"),
        })
    }

    fn create_model_buffer(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        stride: u64,
        capacity: usize,
    ) -> (wgpu::Buffer, wgpu::BindGroup) {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Model Uniform Buffer"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<ModelUniform>() as u64),
                }),
            }],
            label: Some("model_bind_group"),
        });

        (buffer, bind_group)
    }

    fn create_materials(
        gpu: &GpuContext,
        layout: &wgpu::BindGroupLayout,
    ) -> HashMap<Material, wgpu::BindGroup> {
        let sampler = gpu.device().create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Material Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let textures = [
            (
                Material::Crate,
                TextureData::framed(64, 6, [92, 58, 30, 255], [170, 120, 70, 255]),
            ),
            (
                Material::Floor,
                TextureData::checker(64, 2, [90, 90, 95, 255], [140, 140, 150, 255]),
            ),
            (
                Material::Airplane,
                TextureData::stripes(64, 16, [220, 220, 225, 255], [200, 40, 40, 255]),
            ),
            (Material::Blank, TextureData::solid([255, 255, 255, 255])),
        ];

        textures
            .into_iter()
            .map(|(material, data)| {
                let view = Self::upload_texture(gpu, &format!("{:?} Texture", material), &data);
                let bind_group = gpu.device().create_bind_group(&wgpu::BindGroupDescriptor {
                    layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(&view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::Sampler(&sampler),
                        },
                    ],
                    label: Some("material_bind_group"),
                });
                (material, bind_group)
            })
            .collect()
    }

    fn upload_texture(gpu: &GpuContext, label: &str, data: &TextureData) -> wgpu::TextureView {
        let size = wgpu::Extent3d {
            width: data.width,
            height: data.height,
            depth_or_array_layers: 1,
        };
        let texture = gpu.device().create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        gpu.queue().write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &data.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(data.bytes_per_row()),
                rows_per_image: Some(data.height),
            },
            size,
        );

        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_pipeline(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        bind_group_layouts: &[&wgpu::BindGroupLayout],
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts,
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    pub fn size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.size
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.size.width.max(1) as f32 / self.size.height.max(1) as f32
    }

    /// Zero-sized (minimized) windows keep the previous configuration
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.surface_config.width = new_size.width;
        self.surface_config.height = new_size.height;
        self.reconfigure();
        self.depth_view = Self::create_depth_view(self.gpu.device(), new_size);
        log::debug!("Resized to {}x{}", new_size.width, new_size.height);
    }

    /// Reapply the surface configuration after it was lost or outdated
    pub fn reconfigure(&mut self) {
        self.surface.configure(self.gpu.device(), &self.surface_config);
    }

    fn ensure_model_capacity(&mut self, count: usize) {
        if count <= self.model_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        let (buffer, bind_group) = Self::create_model_buffer(
            self.gpu.device(),
            &self.model_layout,
            self.model_stride,
            capacity,
        );
        self.model_buffer = buffer;
        self.model_bind_group = bind_group;
        self.model_capacity = capacity;
        log::debug!("Model uniform buffer grown to {} draws", capacity);
    }

    pub fn render(
        &mut self,
        viewer: &Viewer,
        window: &Window,
        fps: f32,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let camera = &viewer.camera;
        let scene_uniform = SceneUniform::new(
            camera.view_matrix(),
            camera.projection(self.aspect_ratio()),
            camera.position,
            &viewer.scene.lights,
        );
        self.gpu
            .queue()
            .write_buffer(&self.scene_buffer, 0, bytemuck::cast_slice(&[scene_uniform]));

        let draws = viewer.draw_list();
        self.ensure_model_capacity(draws.len());
        for (i, draw) in draws.iter().enumerate() {
            self.gpu.queue().write_buffer(
                &self.model_buffer,
                i as u64 * self.model_stride,
                bytemuck::cast_slice(&[ModelUniform::from(draw)]),
            );
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        self.encode_scene_pass(&mut encoder, &view, &draws);

        if self.hud.is_some() {
            let info = HudInfo {
                fps,
                flight_mode: viewer.airplane.mode().label(),
                camera_mode: camera.mode().label(),
                position: viewer.airplane.position(),
                direction: viewer.airplane.direction(),
                yaw: viewer.airplane.heading().yaw(),
                pitch: viewer.airplane.heading().pitch(),
                camera_position: camera.position,
                zoom: camera.zoom(),
            };
            self.encode_hud_pass(&mut encoder, &view, window, &info);
        }

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn encode_scene_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        draws: &[DrawCommand],
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.scene_bind_group, &[]);

        for (i, draw) in draws.iter().enumerate() {
            let (Some(mesh), Some(material)) =
                (self.meshes.get(&draw.mesh), self.materials.get(&draw.material))
            else {
                log::warn!("Skipping draw with missing GPU resources: {:?}", draw.mesh);
                continue;
            };

            let offset = (i as u64 * self.model_stride) as wgpu::DynamicOffset;
            render_pass.set_bind_group(1, &self.model_bind_group, &[offset]);
            render_pass.set_bind_group(2, material, &[]);
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    fn encode_hud_pass(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        window: &Window,
        info: &HudInfo,
    ) {
        let Some(hud) = self.hud.as_mut() else {
            return;
        };

        let raw_input = hud.state.take_egui_input(window);
        let full_output = hud.ctx.run(raw_input, |ctx| draw_flight_info(ctx, info));

        hud.state
            .handle_platform_output(window, full_output.platform_output);

        let tris = hud
            .ctx
            .tessellate(full_output.shapes, hud.ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            hud.renderer
                .update_texture(self.gpu.device(), self.gpu.queue(), *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.size.width, self.size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        hud.renderer.update_buffers(
            self.gpu.device(),
            self.gpu.queue(),
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            hud.renderer.render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            hud.renderer.free_texture(id);
        }
    }

    /// Forward a window event to the HUD. Returns true when egui consumed it.
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        match self.hud.as_mut() {
            Some(hud) => hud.state.on_window_event(window, event).consumed,
            None => false,
        }
    }
}

fn draw_flight_info(ctx: &egui::Context, info: &HudInfo) {
    egui::Window::new("Flight Info")
        .title_bar(true)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .default_width(250.0)
        .show(ctx, |ui| {
            ui.heading(
                egui::RichText::new(format!("{:.0} FPS", info.fps))
                    .size(32.0)
                    .color(egui::Color32::from_rgb(74, 158, 255)),
            );

            let frame_time_ms = if info.fps > 0.0 { 1000.0 / info.fps } else { 0.0 };
            ui.label(
                egui::RichText::new(format!("{:.2} ms", frame_time_ms))
                    .size(14.0)
                    .color(egui::Color32::GRAY),
            );

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label(
                egui::RichText::new("Airplane")
                    .size(16.0)
                    .color(egui::Color32::from_rgb(100, 200, 100)),
            );
            ui.monospace(format!("Mode: {}", info.flight_mode));
            ui.monospace(format!(
                "Pos: ({:.2}, {:.2}, {:.2})",
                info.position.x, info.position.y, info.position.z
            ));
            ui.monospace(format!(
                "Dir: ({:.2}, {:.2}, {:.2})",
                info.direction.x, info.direction.y, info.direction.z
            ));
            ui.monospace(format!("Yaw: {:.1}° Pitch: {:.1}°", info.yaw, info.pitch));

            ui.add_space(5.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label(
                egui::RichText::new("Camera")
                    .size(16.0)
                    .color(egui::Color32::from_rgb(200, 150, 100)),
            );
            ui.monospace(format!("Mode: {}", info.camera_mode));
            ui.monospace(format!(
                "Pos: ({:.2}, {:.2}, {:.2})",
                info.camera_position.x, info.camera_position.y, info.camera_position.z
            ));
            ui.monospace(format!("FOV: {:.1}°", info.zoom));

            ui.add_space(5.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label(
                egui::RichText::new("Controls")
                    .size(16.0)
                    .color(egui::Color32::from_rgb(200, 100, 200)),
            );
            ui.monospace("O: chase   F: free camera");
            ui.monospace("C: manual  V: scripted (chase)");
            ui.monospace("WASD/Space: move  Mouse: look");
            ui.monospace("Scroll: zoom  Esc: quit");
        });
}

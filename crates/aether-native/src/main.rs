use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use aether_core::{
    pack_instances, CueTracker, FieldScene, HandleSlot, PointInstance, SceneConfig, SceneHandle,
    ScrollController, ScrollSample, ScrollTimeline, SectionSpan, SectionTracker, ShapeId,
    SpriteUniforms, POINTS_WGSL, POINT_INSTANCE_STRIDE, QUAD_CORNERS, SECTION_COUNT,
};
use glam::Vec2;

// The virtual page is five viewports tall, like the site's scroll track.
const PAGE_VIEWPORTS: f32 = 5.0;
const WHEEL_LINE_PX: f32 = 60.0;
const MAX_FRAME_DT_SEC: f32 = 0.1;

/// Scroll position over a document that only exists in this process.
struct VirtualScroll {
    offset: f32,
    viewport: f32,
}

impl VirtualScroll {
    fn document_height(&self) -> f32 {
        self.viewport * PAGE_VIEWPORTS
    }

    fn scroll_by(&mut self, dy: f32) {
        let max = (self.document_height() - self.viewport).max(0.0);
        self.offset = (self.offset + dy).clamp(0.0, max);
    }

    fn set_viewport(&mut self, height: f32) {
        let progress = self.sample().progress().unwrap_or(0.0);
        self.viewport = height.max(1.0);
        self.offset = progress * (self.document_height() - self.viewport);
    }

    fn sample(&self) -> ScrollSample {
        ScrollSample::new(self.offset, self.document_height(), self.viewport)
    }
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instances: Vec<PointInstance>,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, point_count: usize) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_uniforms"),
            size: std::mem::size_of::<SpriteUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: POINT_INSTANCE_STRIDE * point_count.max(1) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-point instances
            wgpu::VertexBufferLayout {
                array_stride: POINT_INSTANCE_STRIDE,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: std::mem::offset_of!(PointInstance, position) as u64,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: std::mem::offset_of!(PointInstance, size) as u64,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: std::mem::offset_of!(PointInstance, color) as u64,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let additive = wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        };
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("points_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState {
                        color: additive,
                        alpha: additive,
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
            instances: Vec::with_capacity(point_count),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, scene: &FieldScene) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&SpriteUniforms::from_scene(scene)),
        );
        pack_instances(scene, &mut self.instances);
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&self.instances));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.02,
                            b: 0.04,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..QUAD_CORNERS.len() as u32, 0..self.instances.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Desktop stand-in for the page: wheel scrolls, cursor tilts, digits pick
/// a shape directly.
struct Preview {
    handle: SceneHandle,
    controller: ScrollController,
    scroll: VirtualScroll,
    last_frame: Instant,
}

impl Preview {
    fn new(config: SceneConfig, viewport: winit::dpi::PhysicalSize<u32>) -> Self {
        let mut scene = FieldScene::new(config);
        scene.resize(viewport.width, viewport.height);
        let handle = SceneHandle::new(scene);

        let slot = HandleSlot::new();
        let mut controller = ScrollController::new(
            ScrollTimeline::default(),
            CueTracker::default(),
            SectionTracker::default(),
        );
        // Nothing to wait for natively; publish and bind straight away.
        if slot.fill(handle.clone()).is_err() {
            log::warn!("[native] scene handle already published");
        }
        controller.bind(&slot);

        let mut preview = Self {
            handle,
            controller,
            scroll: VirtualScroll {
                offset: 0.0,
                viewport: viewport.height.max(1) as f32,
            },
            last_frame: Instant::now(),
        };
        preview.relayout();
        preview.on_scroll();
        preview
    }

    fn relayout(&mut self) {
        let doc = self.scroll.document_height();
        self.controller
            .set_section_spans(SectionSpan::evenly(SECTION_COUNT, doc));
    }

    fn on_scroll(&mut self) {
        let effects = self.controller.on_scroll(self.scroll.sample());
        if let Some(section) = effects.section {
            log::info!("[native] section {} active", section);
        }
        for shape in &effects.shapes {
            log::info!("[native] cue -> {}", shape);
        }
    }

    fn wheel(&mut self, delta: MouseScrollDelta) {
        let dy = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
            MouseScrollDelta::PixelDelta(p) => -p.y as f32,
        };
        self.scroll.scroll_by(dy);
        self.on_scroll();
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.handle.with_scene_mut(|s| s.resize(size.width, size.height));
        if size.height > 0 {
            self.scroll.set_viewport(size.height as f32);
            self.relayout();
            self.on_scroll();
        }
    }

    fn pointer(&mut self, x: f64, y: f64, size: winit::dpi::PhysicalSize<u32>) {
        let p = Vec2::new(
            x as f32 - size.width as f32 * 0.5,
            y as f32 - size.height as f32 * 0.5,
        );
        self.handle.with_scene_mut(|s| s.set_pointer(p));
    }

    fn key(&mut self, key: &Key) {
        let Key::Character(c) = key else {
            return;
        };
        let shape = c
            .parse::<usize>()
            .ok()
            .and_then(|d| d.checked_sub(1))
            .and_then(|i| ShapeId::ALL.get(i).copied());
        if let Some(shape) = shape {
            log::info!("[native] shape -> {}", shape);
            self.handle.set_active_shape(shape);
        }
    }

    fn advance(&mut self) -> bool {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_frame = now;
        self.handle.with_scene_mut(|s| s.advance(dt)).is_some()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("aether (native preview)")
        .build(&event_loop)?;

    let config = SceneConfig::default();
    let point_count = config.field.count;
    let mut preview = Preview::new(config, window.inner_size());
    let mut state = pollster::block_on(GpuState::new(&window, point_count))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                state.resize(size);
                preview.resize(size);
            }
            WindowEvent::CloseRequested => {
                preview.handle.dispose();
                elwt.exit();
            }
            WindowEvent::MouseWheel { delta, .. } => preview.wheel(delta),
            WindowEvent::CursorMoved { position, .. } => {
                preview.pointer(position.x, position.y, state.window.inner_size())
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if logical_key == Key::Named(NamedKey::Escape) {
                    preview.handle.dispose();
                    elwt.exit();
                } else {
                    preview.key(&logical_key);
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            if !preview.advance() {
                return;
            }
            let result = preview.handle.with_scene(|scene| state.render(scene));
            match result {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[native] frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}

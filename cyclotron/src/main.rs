//! Cyclotron - Relativistic Orbit Visualization
//!
//! A single particle circles the origin, accelerating toward the speed of
//! light with diminishing returns and capped hard at `c`. Each frame draws
//! the particle plus a stats panel with the live physics readouts (velocity,
//! fraction of light speed, kinetic energy, centripetal force, rest energy).
//!
//! Controls:
//! - Escape or window close: quit

mod physics;
mod renderer;
mod stats_ui;
mod timing;

use common::{Camera2D, GraphicsContext};
use physics::Particle;
use renderer::Renderer;
use stats_ui::draw_stats_panel;
use timing::FrameClock;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const FULLSCREEN: bool = false;
const WINDOW_TITLE: &str = "Cyclotron - Relativistic Orbit";

/// Fixed linear scale from simulation meters to physical pixels
const METERS_TO_PIXELS: f32 = 100.0;

// Particle construction constants
const PARTICLE_MASS: f64 = 1.0;
const PARTICLE_RADIUS: f64 = 0.1;
const ORBIT_RADIUS: f64 = 6.0;
const PARTICLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    camera: Camera2D,
    particle: Particle,
    /// Simulated seconds since startup
    elapsed: f64,
    clock: FrameClock,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let renderer = Renderer::new(&ctx);
        let mut camera = Camera2D::new(ctx.aspect_ratio());
        camera.set_pixel_scale(ctx.size.height as f32, METERS_TO_PIXELS);

        let particle = Particle::new(
            PARTICLE_MASS,
            PARTICLE_RADIUS,
            ORBIT_RADIUS,
            PARTICLE_COLOR,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            camera,
            particle,
            elapsed: 0.0,
            clock: FrameClock::new(),
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.update_aspect_ratio(self.ctx.aspect_ratio());
        // Keep the meter-to-pixel scale fixed across resizes.
        self.camera
            .set_pixel_scale(self.ctx.size.height as f32, METERS_TO_PIXELS);
    }

    fn update(&mut self, dt: f64) {
        self.elapsed += dt;
        self.particle.update(dt);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        self.renderer.update_particle(&self.ctx.queue, &self.particle);

        // Build the stats overlay
        let fps = self.clock.fps();
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            draw_stats_panel(ctx, &self.particle, self.elapsed, fps);
        });

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
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
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui
            .state
            .on_window_event(&self.ctx.window, event)
            .consumed
    }
}

fn main() {
    println!("Cyclotron - Relativistic Orbit Visualization");
    println!();
    println!("A {PARTICLE_MASS} kg particle on a {ORBIT_RADIUS} m track,");
    println!("accelerating asymptotically toward the speed of light.");
    println!();
    println!("Controls:");
    println!("  Escape  - Quit");
    println!();

    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        WINDOW_TITLE,
        WIDTH,
        HEIGHT,
        FULLSCREEN,
    ));

    let mut app = App::new(ctx);

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, .. } => {
                    let consumed = app.handle_window_event(event);

                    if !consumed {
                        match event {
                            WindowEvent::CloseRequested => elwt.exit(),
                            WindowEvent::Resized(size) => app.resize(*size),
                            WindowEvent::KeyboardInput {
                                event:
                                    KeyEvent {
                                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                                        state: ElementState::Pressed,
                                        ..
                                    },
                                ..
                            } => elwt.exit(),
                            WindowEvent::RedrawRequested => {
                                let dt = app.clock.tick();

                                app.update(dt);
                                match app.render() {
                                    Ok(_) => {}
                                    Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                    Err(e) => log::warn!("Render error: {:?}", e),
                                }
                            }
                            _ => {}
                        }
                    }
                }
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}

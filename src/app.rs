//! Fixed-rate frame loop shared by both demos
//!
//! The loop is winit's `ApplicationHandler` driven by continuous redraw
//! requests. Simulation time is decoupled from presentation: a
//! [`FrameClock`] accumulates wall-clock time and hands out whole
//! fixed-rate steps, so the physics advances identically whatever the
//! display refresh does.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use hyperbounce_render::{RenderContext, Vertex};

use crate::config::AppConfig;

/// A self-contained demo: advances in whole frames and describes itself as
/// a triangle list. Keeping drawing out of the simulation is what lets the
/// sim crate run under plain unit tests.
pub trait Demo {
    /// Advance the simulation by `steps` fixed-rate frames.
    fn advance(&mut self, steps: u32);
    /// Produce this frame's geometry in pixel coordinates.
    fn draw(&self) -> Vec<Vertex>;
    /// Short state description for the window title.
    fn status(&self) -> String;
}

/// Upper bound on simulation steps consumed per redraw. After a stall
/// (window drag, suspend) the backlog is dropped rather than fast-forwarded.
const MAX_STEPS_PER_TICK: u32 = 15;

/// Fixed-rate step accumulator.
pub struct FrameClock {
    frame: Duration,
    last: Instant,
    accumulator: Duration,
}

impl FrameClock {
    /// Clock handing out steps at `fps` frames per second.
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
            accumulator: Duration::ZERO,
        }
    }

    /// Number of whole simulation steps elapsed since the previous call.
    pub fn tick(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        self.consume(elapsed)
    }

    fn consume(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.frame && steps < MAX_STEPS_PER_TICK {
            self.accumulator -= self.frame;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_TICK {
            self.accumulator = Duration::ZERO;
        }
        steps
    }
}

/// Application driver wrapping one demo in a window.
pub struct DemoApp<D: Demo> {
    demo: D,
    base_title: String,
    width: u32,
    height: u32,
    background: wgpu::Color,
    clock: FrameClock,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
}

impl<D: Demo> DemoApp<D> {
    pub fn new(demo: D, config: &AppConfig) -> Self {
        let bg = config.rendering.background_color;
        Self {
            demo,
            base_title: config.window.title.clone(),
            width: config.window.width,
            height: config.window.height,
            background: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
            clock: FrameClock::new(config.window.fps),
            window: None,
            render_context: None,
        }
    }
}

impl<D: Demo> ApplicationHandler for DemoApp<D> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes()
                .with_title(&self.base_title)
                .with_inner_size(winit::dpi::LogicalSize::new(self.width, self.height));

            let window = Arc::new(
                event_loop
                    .create_window(attrs)
                    .expect("Failed to create window"),
            );

            let render_context = pollster::block_on(RenderContext::new(window.clone()));

            log::info!("Window created ({}x{})", self.width, self.height);

            window.request_redraw();
            self.window = Some(window);
            self.render_context = Some(render_context);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
            }

            WindowEvent::RedrawRequested => {
                let steps = self.clock.tick();
                self.demo.advance(steps);

                if let Some(window) = &self.window {
                    window.set_title(&format!("{} - {}", self.base_title, self.demo.status()));
                }

                if let Some(ctx) = &mut self.render_context {
                    match ctx.render(&self.demo.draw(), self.background) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let size = ctx.size;
                            ctx.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory, exiting");
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                        }
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

/// Run a demo until the window closes or Escape is pressed.
pub fn run<D: Demo>(demo: D, config: &AppConfig) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new(demo, config);
    event_loop.run_app(&mut app).expect("Event loop error");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_emits_whole_steps() {
        // 50 fps makes the frame an exact 20ms.
        let mut clock = FrameClock::new(50);

        assert_eq!(clock.consume(Duration::from_millis(10)), 0);
        // The half frame stays in the accumulator.
        assert_eq!(clock.consume(Duration::from_millis(10)), 1);
        assert_eq!(clock.consume(Duration::from_millis(60)), 3);
    }

    #[test]
    fn test_clock_caps_backlog_after_stall() {
        let mut clock = FrameClock::new(60);
        let steps = clock.consume(Duration::from_secs(5));
        assert_eq!(steps, MAX_STEPS_PER_TICK);
        // The backlog was dropped, so the next small slice yields nothing.
        assert_eq!(clock.consume(Duration::from_millis(1)), 0);
    }

    #[test]
    fn test_clock_accumulates_across_ticks() {
        let mut clock = FrameClock::new(50);
        let mut total = 0;
        for _ in 0..8 {
            total += clock.consume(Duration::from_millis(5));
        }
        assert_eq!(total, 2);
    }
}

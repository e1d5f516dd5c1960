use anyhow::Context;
use pillars_core::constants::{GROUND_COLOR, SKY_COLOR};
use pillars_core::{
    EnvMap, FrameInput, PointerState, Renderer, Scene, SceneConfig, ShadingParams,
    SurfaceRecovery,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

/// Pixels of trackpad scroll that count as one wheel step.
const PIXELS_PER_SCROLL_STEP: f32 = 50.0;

struct App {
    window: Arc<Window>,
    renderer: Renderer<'static>,
    scene: Scene,
    params: ShadingParams,
    pointer: PointerState,
    start: Instant,
    last_frame: Instant,
}

impl App {
    fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.scene.resize(width, height);
    }

    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        let elapsed = (now - self.start).as_secs_f32();

        let (w, h) = self.renderer.size();
        let (pointer_x, _) = self.pointer.effective(w, h);
        self.scene.update(&FrameInput {
            now: elapsed,
            dt,
            pointer_x,
            wave: self.pointer.wave_input(w, h),
        });
        self.params.for_frame(elapsed, self.scene.camera.eye);
        self.renderer.render(&self.scene, &self.params)
    }
}

/// Scene settings from `PILLARS_SEED`.
fn scene_config() -> anyhow::Result<SceneConfig> {
    let mut config = SceneConfig::default();
    if let Ok(seed) = std::env::var("PILLARS_SEED") {
        config.seed = seed
            .parse()
            .with_context(|| format!("PILLARS_SEED is not an integer: {seed:?}"))?;
    }
    Ok(config)
}

/// First CLI argument, else `PILLARS_ENV_MAP`, else the built-in gradient.
fn env_map() -> anyhow::Result<EnvMap> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("PILLARS_ENV_MAP").map(PathBuf::from));
    match path {
        Some(path) => Ok(EnvMap::load(&path)?),
        None => {
            log::info!("[env] no environment image configured, using gradient");
            Ok(EnvMap::gradient(SKY_COLOR, GROUND_COLOR))
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = scene_config()?;
    let env = env_map()?;
    let mut scene = Scene::new(config)?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Wave Pillars (native)")
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .build(&event_loop)?,
    );
    let size = window.inner_size();
    scene.resize(size.width, size.height);

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window.clone())?;
    let renderer = pollster::block_on(Renderer::new(
        &instance,
        surface,
        size.width,
        size.height,
        scene.vertices().len(),
        &env,
    ))?;

    let start = Instant::now();
    let mut app = App {
        window,
        renderer,
        scene,
        params: ShadingParams::default(),
        pointer: PointerState::default(),
        start,
        last_frame: start,
    };

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => app.resize(size.width, size.height),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                if let Some((dx, dy)) = app.pointer.move_to(position.x as f32, position.y as f32)
                {
                    app.scene.orbit_drag(dx, dy);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => app.pointer.down = state == ElementState::Pressed,
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_SCROLL_STEP,
                };
                app.scene.orbit_scroll(steps);
            }
            _ => {}
        },
        Event::AboutToWait => match app.frame() {
            Ok(()) => app.window.request_redraw(),
            Err(e) => {
                if app.renderer.recover(&e) == SurfaceRecovery::Stop {
                    elwt.exit();
                }
            }
        },
        _ => {}
    })?;
    Ok(())
}

#![cfg(target_arch = "wasm32")]
use instant::Instant;
use pillars_core::constants::{GROUND_COLOR, SKY_COLOR};
use pillars_core::{EnvMap, Renderer, Scene, SceneConfig, ShadingParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pillars-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// `data-env-map` on the canvas names the panorama; without it a gradient is used.
async fn load_env_map(canvas: &web::HtmlCanvasElement) -> anyhow::Result<EnvMap> {
    match canvas.get_attribute("data-env-map") {
        Some(url) if !url.is_empty() => {
            let bytes = dom::fetch_bytes(&url).await?;
            let map = EnvMap::decode(&bytes)?;
            log::info!("[env] loaded {url}");
            Ok(map)
        }
        _ => {
            log::info!("[env] no environment image configured, using gradient");
            Ok(EnvMap::gradient(SKY_COLOR, GROUND_COLOR))
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::wire_canvas_resize(&canvas);

    // The environment image must be ready before the first frame.
    let env = load_env_map(&canvas).await?;
    let mut scene = Scene::new(SceneConfig::default())?;
    let (width, height) = (canvas.width(), canvas.height());
    scene.resize(width, height);

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let renderer = Renderer::new(
        &instance,
        surface,
        width,
        height,
        scene.vertices().len(),
        &env,
    )
    .await?;

    let input = Rc::new(RefCell::new(events::InputQueue::default()));
    events::wire_input_handlers(&canvas, input.clone());

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        input,
        scene,
        params: ShadingParams::default(),
        renderer,
        start: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

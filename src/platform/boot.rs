//! DOM-ready start-up: build every effect the page has markup for

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use super::web_scheduler::WebScheduler;
use super::{dom, listeners, observers};
use crate::config::FxConfig;
use crate::error::FxError;
use crate::input::PointerTracker;
use crate::persistence::LocalStore;
use crate::render_loop::{LoopHandle, RenderLoop};
use crate::renderer::{BubbleLayer, CanvasSurface, SparkleLayer, StarfieldLayer, Surface};
use crate::scheduler::{Scheduler, TimerControl};
use crate::sim::{Bounds, SparkleField};
use crate::theme::ThemeState;

pub const BUBBLE_CANVAS_ID: &str = "bubble-bg";
pub const STARFIELD_CANVAS_ID: &str = "particles-bg";
pub const SPARKLE_CANVAS_ID: &str = "sparkle-canvas";

pub type Shared<T> = Rc<RefCell<T>>;

/// Canvas layers present on this page
#[derive(Clone, Default)]
pub struct Layers {
    pub bubbles: Option<Shared<BubbleLayer<CanvasSurface>>>,
    pub starfield: Option<Shared<StarfieldLayer<CanvasSurface>>>,
    pub sparkles: Option<Shared<SparkleLayer<CanvasSurface>>>,
}

impl Layers {
    pub fn resize(&self, width: u32, height: u32) {
        if let Some(l) = &self.bubbles {
            l.borrow_mut().resize(width, height);
        }
        if let Some(l) = &self.starfield {
            l.borrow_mut().resize(width, height);
        }
        if let Some(l) = &self.sparkles {
            l.borrow_mut().resize(width, height);
        }
    }
}

thread_local! {
    static LOOPS: RefCell<Vec<LoopHandle>> = const { RefCell::new(Vec::new()) };
}

/// Stop every render loop (and the sparkle idle timer). For hosts that
/// unmount the page content without a reload.
#[wasm_bindgen]
pub fn stop_effects() {
    LOOPS.with(|loops| {
        for handle in loops.borrow_mut().drain(..) {
            handle.stop();
        }
    });
    log::info!("Effects stopped");
}

/// Log and drop a feature that could not start
fn feature<T>(name: &str, result: Result<T, FxError>) -> Option<T> {
    match result {
        Ok(value) => {
            log::debug!("{} ready", name);
            Some(value)
        }
        Err(e) if e.is_missing_feature() => {
            log::info!("{} skipped: {}", name, e);
            None
        }
        Err(e) => {
            log::warn!("{} disabled: {}", name, e);
            None
        }
    }
}

fn canvas(document: &Document, id: &str) -> Result<CanvasSurface, FxError> {
    let (w, h) = dom::viewport_size();
    let mut surface = CanvasSurface::from_id(document, id)?;
    surface.resize(w as u32, h as u32);
    Ok(surface)
}

pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("Logger already initialized");
    }
    // Config problems are reported through the logger, so it comes first
    let config = FxConfig::load();
    log::set_max_level(config.level().to_level_filter());

    log::info!("folio-fx starting...");
    log::debug!("Config: {:?}", config);

    let document = match dom::document() {
        Ok(d) => d,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let scheduler: Rc<dyn Scheduler> = Rc::new(WebScheduler);
    let theme: Shared<ThemeState> = Rc::new(RefCell::new(ThemeState::load(
        Rc::new(LocalStore),
        dom::system_prefers_dark(),
    )));
    listeners::attach_theme(&document, &theme);

    let initial_theme = theme.borrow().theme();
    let layers = Layers {
        bubbles: feature(
            "Bubbles",
            canvas(&document, BUBBLE_CANVAS_ID)
                .map(|s| Rc::new(RefCell::new(BubbleLayer::new(s, config.bubble_count, seed)))),
        ),
        starfield: feature(
            "Starfield",
            canvas(&document, STARFIELD_CANVAS_ID).map(|s| {
                Rc::new(RefCell::new(StarfieldLayer::new(
                    s,
                    config.orb_count,
                    config.star_count,
                    initial_theme,
                    seed,
                )))
            }),
        ),
        sparkles: feature(
            "Sparkle trail",
            canvas(&document, SPARKLE_CANVAS_ID).map(|s| {
                let (w, h) = s.size();
                let field = SparkleField::new(Bounds::new(w as f32, h as f32), seed)
                    .with_limits(config.sparkle_cap, config.sparkle_burst, config.idle_limit);
                Rc::new(RefCell::new(SparkleLayer::with_field(s, field)))
            }),
        ),
    };

    start_loops(&scheduler, &layers, &theme, config.idle_interval_ms);

    let tracker = Rc::new(RefCell::new(PointerTracker::new(dom::scroll_y() as f32)));
    listeners::attach_pointer(&tracker, &layers);
    listeners::attach_cards(&document, &tracker, &layers);
    listeners::attach_resize(&layers);
    feature("Sidebar", listeners::attach_sidebar(&document));
    listeners::attach_nav(&document);
    listeners::attach_ripple(&document);

    observers::attach_reveal(&document);
    observers::attach_counters(&document, &scheduler, config.counter_interval_ms);
    feature(
        "Typewriter",
        observers::attach_typewriter(&document, &scheduler, config.typing_interval_ms),
    );

    log::info!("folio-fx running (seed {})", seed);
}

fn start_loops(
    scheduler: &Rc<dyn Scheduler>,
    layers: &Layers,
    theme: &Shared<ThemeState>,
    idle_interval_ms: u32,
) {
    let mut handles = Vec::new();

    if let Some(layer) = &layers.bubbles {
        handles.push(RenderLoop::start(scheduler.clone(), layer.clone()));
    }

    if let Some(layer) = &layers.starfield {
        // Palette switches repaint at once instead of waiting for the next frame
        let repaint = layer.clone();
        theme
            .borrow_mut()
            .on_change(move |t| repaint.borrow_mut().set_theme(t));
        handles.push(RenderLoop::start(scheduler.clone(), layer.clone()));
    }

    if let Some(layer) = &layers.sparkles {
        let handle = RenderLoop::start(scheduler.clone(), layer.clone());
        let idle_layer = layer.clone();
        let idle_handle = handle.clone();
        scheduler.set_interval(
            idle_interval_ms,
            Box::new(move || {
                if !idle_handle.is_running() {
                    return TimerControl::Stop;
                }
                idle_layer.borrow_mut().field.idle_tick();
                TimerControl::Continue
            }),
        );
        handles.push(handle);
    }

    log::info!("{} render loop(s) started", handles.len());
    LOOPS.with(|loops| loops.borrow_mut().extend(handles));
}

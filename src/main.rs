//! folio-fx entry point
//!
//! On the web the effects start from `wasm_main` once the module loads. The
//! native binary runs the canvas layers headless for a few seconds of
//! simulated time and logs what they drew.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    folio_fx::platform::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("folio-fx (native) starting...");
    log::info!("Browser effects need the wasm build - run with `trunk serve`");

    headless::run(folio_fx::FxConfig::load());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::cell::RefCell;
    use std::rc::Rc;

    use folio_fx::input::{InputEvent, PointerTracker};
    use folio_fx::persistence::MemoryStore;
    use folio_fx::render_loop::RenderLoop;
    use folio_fx::renderer::{BubbleLayer, RecordingSurface, SparkleLayer, StarfieldLayer};
    use folio_fx::scheduler::{ManualScheduler, Scheduler, TimerControl};
    use folio_fx::sim::{Bounds, SparkleField};
    use folio_fx::{FxConfig, ThemeState};
    use glam::Vec2;

    const WIDTH: u32 = 1280;
    const HEIGHT: u32 = 720;
    const FRAMES: usize = 180;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    pub fn run(config: FxConfig) {
        let seed = config.seed.unwrap_or(42);
        let manual = Rc::new(ManualScheduler::new());
        let scheduler: Rc<dyn Scheduler> = manual.clone();

        let theme = Rc::new(RefCell::new(ThemeState::load(
            Rc::new(MemoryStore::default()),
            true,
        )));

        let bubbles = Rc::new(RefCell::new(BubbleLayer::new(
            RecordingSurface::new(WIDTH, HEIGHT),
            config.bubble_count,
            seed,
        )));
        let starfield = Rc::new(RefCell::new(StarfieldLayer::new(
            RecordingSurface::new(WIDTH, HEIGHT),
            config.orb_count,
            config.star_count,
            theme.borrow().theme(),
            seed,
        )));
        let field = SparkleField::new(Bounds::new(WIDTH as f32, HEIGHT as f32), seed)
            .with_limits(config.sparkle_cap, config.sparkle_burst, config.idle_limit);
        let sparkles = Rc::new(RefCell::new(SparkleLayer::with_field(
            RecordingSurface::new(WIDTH, HEIGHT),
            field,
        )));

        {
            let repaint = starfield.clone();
            theme
                .borrow_mut()
                .on_change(move |t| repaint.borrow_mut().set_theme(t));
        }

        let loops = [
            RenderLoop::start(scheduler.clone(), bubbles.clone()),
            RenderLoop::start(scheduler.clone(), starfield.clone()),
            RenderLoop::start(scheduler.clone(), sparkles.clone()),
        ];
        {
            let idle = sparkles.clone();
            scheduler.set_interval(
                config.idle_interval_ms,
                Box::new(move || {
                    idle.borrow_mut().field.idle_tick();
                    TimerControl::Continue
                }),
            );
        }

        // A pointer sweeping diagonally across the page
        let mut tracker = PointerTracker::new(0.0);
        for frame in 0..FRAMES {
            let t = frame as f32 / FRAMES as f32;
            let at = Vec2::new(t * WIDTH as f32, t * HEIGHT as f32);
            for event in [InputEvent::MouseMove(at), InputEvent::PointerMove(at)] {
                let effect = tracker.handle(event);
                effect.apply(
                    Some(&mut bubbles.borrow_mut().field),
                    Some(&mut sparkles.borrow_mut().field),
                );
            }
            if frame == FRAMES / 2 {
                theme.borrow_mut().toggle();
            }
            manual.advance(FRAME_MS);
            manual.run_frame();
        }

        log::info!(
            "{} frames, theme {}",
            loops[0].frames(),
            theme.borrow().theme().as_str()
        );
        log::info!(
            "bubbles: {} ({} drawn last frame)",
            bubbles.borrow().field.len(),
            bubbles.borrow().surface().circles_since_clear().len()
        );
        log::info!(
            "starfield: {} sparks, {} circles last frame",
            starfield.borrow().field.spark_count(),
            starfield.borrow().surface().circles_since_clear().len()
        );
        log::info!(
            "sparkles: {} live (cap {})",
            sparkles.borrow().field.len(),
            sparkles.borrow().field.cap()
        );

        for handle in &loops {
            handle.stop();
        }
    }
}

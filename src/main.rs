//! Demo driver: wires a gilrs-backed adapter to a logging subscriber and
//! ticks it at roughly 60 Hz. Run with a controller attached and wiggle the
//! sticks.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use canvas_input::{
    AxisMotion, CanvasInput, CanvasRect, GilrsSource, InputSettings, InputSubscriber,
    SurfaceGeometry,
};
use chrono::Local;
use color_eyre::{eyre::eyre, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Stand-in host geometry: a 800x600 canvas rendered at half size.
struct DemoSurface;

impl SurfaceGeometry for DemoSurface {
    fn bounding_rect(&self) -> CanvasRect {
        CanvasRect {
            left: 0.0,
            top: 0.0,
            width: 400.0,
            height: 300.0,
        }
    }

    fn internal_size(&self) -> (u32, u32) {
        (800, 600)
    }
}

struct ConsoleSubscriber;

impl InputSubscriber for ConsoleSubscriber {
    fn on_gamepad_connected(&mut self) {
        info!(
            "Gamepad connected at {}",
            Local::now().format("%H:%M:%S%.3f")
        );
    }

    fn on_gamepad_button(&mut self, index: usize) {
        info!(
            "Button {} pressed at {}",
            index,
            Local::now().format("%H:%M:%S%.3f")
        );
    }

    fn on_gamepad_axis(&mut self, motion: &AxisMotion) {
        info!(
            "Sticks moved: left ({:.2}, {:.2}) right ({:.2}, {:.2}) dead zone {}",
            motion.left.x, motion.left.y, motion.right.x, motion.right.y, motion.dead_zone
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup()?;

    let settings = InputSettings::load_or_default();
    info!("Input settings: {:?}", settings);

    let source = GilrsSource::create()
        .map_err(|e| eyre!("Failed to start gamepad backend: {}", e))?
        .initialize();

    let mut input =
        CanvasInput::new(Rc::new(DemoSurface), settings).with_gamepad(Box::new(source));
    let _subscription = input.subscribe(Rc::new(RefCell::new(ConsoleSubscriber)));

    info!("Polling gamepad state, Ctrl-C to quit");
    let mut ticker = tokio::time::interval(Duration::from_millis(16));
    loop {
        ticker.tick().await;
        input.update();
    }
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
    Ok(())
}

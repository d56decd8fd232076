use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use flightview::colors;
use flightview::config::ViewportConfig;
use flightview::prelude::*;

/// Initial forward speed of the demo aircraft, in metres per second.
const INITIAL_SPEED: f32 = 60.0;

/// Out-the-window view of a small synthetic airfield.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON configuration file. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render a single frame to this image file and exit, without a window.
    #[arg(long, value_name = "OUT.png")]
    screenshot: Option<PathBuf>,

    /// Aircraft position north of the origin, in metres.
    #[arg(long, default_value_t = -800.0, allow_negative_numbers = true)]
    north: f32,

    /// Aircraft position east of the origin, in metres.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    east: f32,

    /// Aircraft altitude, in metres.
    #[arg(long, default_value_t = 60.0, allow_negative_numbers = true)]
    altitude: f32,

    /// Heading in degrees, 0 is north and 90 is east.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    heading: f32,

    /// Pitch in degrees, positive is nose down.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pitch: f32,

    /// Roll in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    roll: f32,

    /// View angle for the first viewport: a name such as `left90` or degrees.
    #[arg(long, allow_negative_numbers = true)]
    view: Option<ViewAngle>,

    /// Scatter ground dots over the world.
    #[arg(long)]
    grid: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let scene = content::demo_world(&config.palette, args.grid)?;
    let engine = Engine::new(scene, &config)?;

    let pose = AircraftPose::new(
        Point3::new(args.north, args.east, args.altitude),
        Attitude::from_degrees(args.roll, args.pitch, args.heading),
    );

    let mut viewports = config.viewports();
    if let (Some(view), Some(first)) = (args.view, viewports.first_mut()) {
        first.angle = view;
    }

    match &args.screenshot {
        Some(path) => {
            let mut renderer = Renderer::new(config.display.width, config.display.height);
            draw_views(&engine, &mut renderer, &pose, &viewports, &config);
            renderer.save_png(path)?;
            info!("screenshot saved to {}", path.display());
            Ok(())
        }
        None => fly(engine, &config, pose, viewports),
    }
}

/// Scales a viewport laid out for the configured display to the current
/// buffer size.
fn scale_viewport(viewport: &ViewportConfig, config: &Config, width: u32, height: u32) -> ViewRect {
    let sx = width as f32 / config.display.width as f32;
    let sy = height as f32 / config.display.height as f32;
    ViewRect::new(
        (viewport.x as f32 * sx).round() as u32,
        (viewport.y as f32 * sy).round() as u32,
        (viewport.width as f32 * sx).round() as u32,
        (viewport.height as f32 * sy).round() as u32,
    )
}

fn draw_views(
    engine: &Engine,
    renderer: &mut Renderer,
    pose: &AircraftPose,
    viewports: &[ViewportConfig],
    config: &Config,
) {
    renderer.clear(colors::BACKGROUND);
    let dot_color = engine.palette().dot;
    for viewport in viewports {
        let frame = engine.render_view(pose, viewport.angle);
        let rect = scale_viewport(viewport, config, renderer.width(), renderer.height());
        renderer.draw_frame(&frame, rect, dot_color);
    }
}

fn fly(
    mut engine: Engine,
    config: &Config,
    pose: AircraftPose,
    mut viewports: Vec<ViewportConfig>,
) -> Result<()> {
    let mut window = Window::new("flightview", config.display.width, config.display.height)?;
    let mut renderer = Renderer::new(window.width(), window.height());
    let mut frame_limiter = FrameLimiter::new(&window, config.display.fps);
    let controller = FlightController::default();
    let mut aircraft = Aircraft::new(pose, INITIAL_SPEED);

    info!("flying; arrows pitch/roll, A/D yaw, W/S speed, +/- zoom, 1-8 view, Esc quits");

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                renderer.resize(w, h);
            }
            WindowEvent::None => {}
        }

        let input = *window.input();
        if let (Some(view), Some(first)) = (input.view, viewports.first_mut()) {
            first.angle = view;
            info!("view: {view}");
        }

        let delta_time = frame_limiter.wait_and_get_delta(&window) as f32 / 1000.0;
        let zoom = controller.update(&mut aircraft, &input, engine.projection().zoom, delta_time);
        engine.set_zoom(zoom);

        draw_views(&engine, &mut renderer, &aircraft.pose, &viewports, config);
        window.present(renderer.as_bytes())?;
    }

    Ok(())
}

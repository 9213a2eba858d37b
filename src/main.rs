use anyhow::Context;
use clap::Parser;
use screen_api::config::Dimensions;
use screen_api::draw::{HAlign, MapTerrain, VAlign};
use screen_api::{Config, Screen};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "screen-sink")]
#[command(version, about = "Render every drawing primitive to a PNG")]
struct Cli {
    /// Where to write the rendered PNG
    #[arg(long, short = 'o', value_name = "PATH", default_value = "sink.png")]
    output: PathBuf,

    /// Existing PNG to draw onto instead of a new surface
    #[arg(long, short = 't', value_name = "PATH")]
    target: Option<PathBuf>,

    /// Width of a newly created surface
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Height of a newly created surface
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Config file (defaults to ~/.config/screen-api/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut options = config.to_options();
    if cli.width.is_some() || cli.height.is_some() {
        options = options.dimensions(Dimensions::new(
            cli.width.unwrap_or(config.surface.width).max(1),
            cli.height.unwrap_or(config.surface.height).max(1),
        ));
    }

    let mut screen = match &cli.target {
        Some(path) => Screen::open_png(path, options)?,
        None => Screen::new(options)?,
    };

    draw_kitchen_sink(&mut screen);

    screen
        .write_png(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    log::info!("Kitchen sink rendered");
    println!(
        "Wrote {}x{} surface to {}",
        screen.surface().width(),
        screen.surface().height(),
        cli.output.display()
    );

    Ok(())
}

/// Exercises every primitive once, scaled to the reported size.
fn draw_kitchen_sink(screen: &mut Screen) {
    let w = screen.width() as f64;
    let h = screen.height() as f64;

    screen.set_color(100, 100, 200, Some(255));
    screen.draw_line(0.0, 0.0, 200.0, 200.0);

    screen.set_color(220, 60, 60, None);
    screen.draw_rect(w * 0.05, h * 0.05, w * 0.25, h * 0.2);
    screen.draw_rect_f(w * 0.05, h * 0.3, w * 0.25, h * 0.2);

    screen.set_color(60, 200, 90, None);
    for (i, radius) in [6.0, 22.0, 32.0].into_iter().enumerate() {
        screen.draw_circle(w * 0.45 + i as f64 * 70.0, h * 0.2, radius);
    }
    screen.draw_circle_f(w * 0.45, h * 0.55, 18.0);

    screen.set_color(240, 200, 40, Some(200));
    screen.draw_triangle(w * 0.6, h * 0.45, w * 0.75, h * 0.7, w * 0.55, h * 0.7);
    screen.draw_triangle_f(w * 0.8, h * 0.45, w * 0.95, h * 0.7, w * 0.75, h * 0.7);

    screen.set_color(255, 255, 255, None);
    screen.draw_text(2.0, h * 0.78, "Hello!\nscreen-api");
    screen.draw_text_box(
        w * 0.5,
        h * 0.75,
        w * 0.45,
        h * 0.2,
        "Word wrapped text box, centered both ways",
        HAlign::Center,
        VAlign::Center,
    );

    screen.set_map_color(MapTerrain::Ocean, 20, 60, 180, None);
    screen.draw_map(0.0, 0.0, 1.0);
}

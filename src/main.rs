use anyhow::{Context as _, Result};
use clap::Parser;
use colorview::config::AppConfig;
use colorview::{read_pixel, Size, SwatchRenderer};
use log::{error, info, warn};
use std::fs::File;
use std::path::PathBuf;

#[cfg(feature = "gtk")]
const APP_ID: &str = "com.tianscar.colorview";

/// ColorView - render a color swatch over a transparency checkerboard
#[derive(Parser, Debug, Clone)]
#[command(name = "colorview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Configuration file (defaults to the per-user config file)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render the swatch to a PNG file instead of opening a window
    #[arg(short = 'r', long = "render", value_name = "OUT.png")]
    render: Option<PathBuf>,

    /// Output size (e.g., -s=40x40 or --size=40x40)
    #[arg(short = 's', long = "size", value_name = "WxH", value_parser = parse_size)]
    size: Option<(i32, i32)>,

    /// Style attribute, may be repeated (e.g., -a color=#80FF0000 -a cornerRadius=8dp)
    #[arg(short = 'a', long = "attr", value_name = "KEY=VALUE", value_parser = parse_attribute)]
    attrs: Vec<(String, String)>,

    /// Print the color of one rendered pixel (e.g., -p=10,10)
    #[arg(short = 'p', long = "probe", value_name = "X,Y", value_parser = parse_coordinates)]
    probe: Option<(i32, i32)>,

    /// Write the resulting configuration back to the config file
    #[arg(long = "save-config")]
    save_config: bool,
}

/// Parse size string "WxH" into (i32, i32)
fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Expected format: WxH (e.g., 40x40), got: {}", s))?;
    let w = w.trim().parse::<i32>()
        .map_err(|e| format!("Invalid width: {}", e))?;
    let h = h.trim().parse::<i32>()
        .map_err(|e| format!("Invalid height: {}", e))?;
    Ok((w, h))
}

/// Parse coordinate string "X,Y" into (i32, i32)
fn parse_coordinates(s: &str) -> Result<(i32, i32), String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("Expected format: X,Y (e.g., 10,10), got: {}", s));
    }
    let x = parts[0].trim().parse::<i32>()
        .map_err(|e| format!("Invalid X coordinate: {}", e))?;
    let y = parts[1].trim().parse::<i32>()
        .map_err(|e| format!("Invalid Y coordinate: {}", e))?;
    Ok((x, y))
}

/// Parse "key=value" into a pair
fn parse_attribute(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected format: KEY=VALUE, got: {}", s))?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting ColorView v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("colorview: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {:#}", e);
            AppConfig::default()
        }),
    };

    let density = config.window.density;
    config
        .swatch
        .apply_attributes(cli.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())), density)?;
    if let Some((width, height)) = cli.size {
        config.window.width = width;
        config.window.height = height;
    }

    if cli.save_config {
        match &cli.config {
            Some(path) => config.save_to_path(path)?,
            None => config.save()?,
        }
    }

    let size = Size::new(config.window.width, config.window.height);
    if cli.render.is_some() || cli.probe.is_some() {
        return render_to_file(&config, size, cli.render.as_ref(), cli.probe);
    }

    run_gui(config)
}

fn render_to_file(
    config: &AppConfig,
    size: Size,
    output: Option<&PathBuf>,
    probe: Option<(i32, i32)>,
) -> Result<()> {
    let renderer = SwatchRenderer::from_config(&config.swatch);
    let mut surface = renderer.render(size)?;

    if let Some((x, y)) = probe {
        let color = read_pixel(&mut surface, x, y)?;
        println!("{},{} {}", x, y, color);
    }

    if let Some(path) = output {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        surface.write_to_png(&mut file)?;
        info!("Wrote {}x{} swatch to {}", size.width, size.height, path.display());
    }
    Ok(())
}

#[cfg(feature = "gtk")]
fn run_gui(config: AppConfig) -> Result<()> {
    use colorview::ui::ColorViewWidget;
    use gtk4::prelude::*;
    use gtk4::{Application, ApplicationWindow, ColorDialog, ColorDialogButton, Orientation};
    use std::rc::Rc;

    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        let swatch = Rc::new(ColorViewWidget::new(&config.swatch));
        swatch.widget().set_hexpand(true);
        swatch.widget().set_vexpand(true);
        swatch.set_on_click(|color| info!("Swatch clicked: {}", color));

        let chooser = ColorDialogButton::new(Some(ColorDialog::new()));
        chooser.set_rgba(&swatch.color().to_gdk_rgba());
        let swatch_for_chooser = swatch.clone();
        chooser.connect_rgba_notify(move |button| {
            swatch_for_chooser.set_gdk_color(&button.rgba());
        });

        let container = gtk4::Box::new(Orientation::Vertical, 8);
        container.set_margin_start(12);
        container.set_margin_end(12);
        container.set_margin_top(12);
        container.set_margin_bottom(12);
        container.append(swatch.widget());
        container.append(&chooser);

        let window = ApplicationWindow::builder()
            .application(app)
            .title("ColorView")
            .default_width(config.window.width)
            .default_height(config.window.height)
            .child(&container)
            .build();
        window.present();
    });

    // Pass empty args since we already parsed them
    app.run_with_args(&["colorview"]);
    Ok(())
}

#[cfg(not(feature = "gtk"))]
fn run_gui(_config: AppConfig) -> Result<()> {
    anyhow::bail!("built without the `gtk` feature; use --render to write a PNG")
}

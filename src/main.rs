use clap::Parser;
use launcher_icons::{Config, ConvertError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

const EXAMPLES: &str = "Examples:\n  \
                        convert_icon spotify_icon_template.svg\n  \
                        convert_icon my_icon.png\n  \
                        convert_icon logo.jpg\n\n\
                        Supported formats: SVG, PNG, JPG, JPEG, BMP, TIFF, WEBP";

/// Converts an SVG/PNG/JPG image into Android launcher icons and Flutter app
/// images.
#[derive(Debug, Parser)]
#[command(name = "convert_icon", version, after_help = EXAMPLES)]
struct Cli {
    /// Source image to convert.
    #[arg(value_name = "IMAGE_FILE")]
    image: PathBuf,

    /// Root of the Flutter project to update.
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    project_dir: PathBuf,
}

fn setup_logger() {
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt,
        util::SubscriberInitExt, Registry,
    };

    Registry::default()
        .with(LevelFilter::from(Level::INFO))
        .with(layer().with_target(false).without_time())
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            eprintln!("\n{}", EXAMPLES);
            return ExitCode::FAILURE;
        }
        Err(err) => err.exit(),
    };
    setup_logger();

    if !cli.image.exists() {
        error!("❌ {}", ConvertError::NotFound(cli.image));
        return ExitCode::FAILURE;
    }

    info!("🎨 Playtivity Icon & Image Converter");
    info!("{}", "=".repeat(45));

    let config = Config::new(&cli.project_dir);
    match launcher_icons::run(&cli.image, &config) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            error!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

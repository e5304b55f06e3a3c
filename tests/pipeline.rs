use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use launcher_icons::{launcher_icon_path, run, AppImage, Bitmap, Config,
                     ConvertError, Density, PixelFormat, SourceFormat,
                     SvgRenderer};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn raster_png_source() {
    let project = flutter_project();
    let source = project.path().join("logo.png");
    RgbaImage::from_pixel(300, 300, Rgba([29, 185, 84, 180]))
        .save(&source)
        .unwrap();
    full_run_test(&project, &source, SourceFormat::Raster);
}

#[test]
fn raster_jpeg_source() {
    let project = flutter_project();
    let source = project.path().join("logo.jpeg");
    RgbImage::from_pixel(64, 64, Rgb([200, 40, 40]))
        .save_with_format(&source, ImageFormat::Jpeg)
        .unwrap();
    full_run_test(&project, &source, SourceFormat::Raster);
}

#[test]
fn extensionless_png_source() {
    let project = flutter_project();
    let source = project.path().join("logo");
    RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]))
        .save_with_format(&source, ImageFormat::Png)
        .unwrap();
    full_run_test(&project, &source, SourceFormat::Raster);
}

#[test]
fn svg_source() {
    if SvgRenderer::detect().is_none() {
        return;
    }
    let project = flutter_project();
    let source = project.path().join("logo.svg");
    fs::write(&source,
              "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">\
               <circle cx=\"12\" cy=\"12\" r=\"10\" fill=\"#1db954\"/></svg>")
        .unwrap();
    full_run_test(&project, &source, SourceFormat::Svg);
}

#[test]
fn svg_source_without_renderer() {
    let project = flutter_project();
    let source = project.path().join("logo.svg");
    fs::write(&source, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
    let mut config = Config::new(project.path());
    config.svg_renderer = None;
    match run(&source, &config) {
        Err(ConvertError::MissingRenderer) => {}
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
    assert!(!config.layout.temp_dir.exists());
    assert_no_icons_installed(&config);
}

#[test]
fn unknown_format_writes_nothing() {
    let project = flutter_project();
    let source = project.path().join("notes.txt");
    fs::write(&source, "definitely not an image").unwrap();
    let config = Config::new(project.path());
    match run(&source, &config) {
        Err(ConvertError::UnsupportedFormat(path)) => assert_eq!(path, source),
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
    assert!(!config.layout.assets_dir.exists());
    assert!(!config.layout.temp_dir.exists());
    assert_no_icons_installed(&config);
}

#[test]
fn missing_android_root_still_cleans_up() {
    let project = TempDir::new().unwrap();
    let source = project.path().join("logo.png");
    RgbaImage::from_pixel(32, 32, Rgba([1, 2, 3, 4])).save(&source).unwrap();
    let config = Config::new(project.path());

    let report = run(&source, &config).expect("run failed");
    assert!(!report.icons_installed);
    assert!(!report.is_success());
    assert_eq!(report.app_images.len(), AppImage::ALL.len());
    assert!(!config.layout.temp_dir.exists());
    assert!(!config.layout.android_res_dir.exists());
}

#[test]
fn missing_source_file() {
    let project = flutter_project();
    let config = Config::new(project.path());
    match run(&project.path().join("nope.png"), &config) {
        Err(ConvertError::NotFound(_)) => {}
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
}

fn full_run_test(project: &TempDir, source: &Path, format: SourceFormat) {
    let config = Config::new(project.path());
    let report = run(source, &config).expect("run failed");
    assert_eq!(report.format, format);
    assert!(report.is_success());
    assert!(!config.layout.temp_dir.exists());

    assert_eq!(report.icons.keys().copied().collect::<Vec<_>>(),
               Density::ALL.to_vec());
    for density in &Density::ALL {
        let size = density.icon_size();
        let icon = launcher_icon_path(&config.layout.android_res_dir, *density);
        assert_png_matches(&icon, size, size);
    }

    assert_eq!(report.app_images.keys().copied().collect::<Vec<_>>(),
               AppImage::ALL.to_vec());
    let expected = [("playtivity_logo.png", 120, 120),
                    ("playtivity_logo_login_screen.png", 120, 120),
                    ("playtivity_logo_button_icon.png", 24, 24),
                    ("playtivity_logo_large_display.png", 200, 200),
                    ("playtivity_logo_small_icon.png", 48, 48)];
    for &(name, width, height) in &expected {
        assert_png_matches(&config.layout.assets_dir.join(name), width, height);
    }
    assert_eq!(fs::read_dir(&config.layout.assets_dir).unwrap().count(), 5);
}

fn flutter_project() -> TempDir {
    let project = TempDir::new().unwrap();
    let res_dir = project.path().join("android/app/src/main/res");
    fs::create_dir_all(res_dir.join("mipmap-mdpi")).unwrap();
    fs::write(res_dir.join("mipmap-mdpi/ic_launcher.png"), b"stale").unwrap();
    project
}

fn load_png_file(path: &Path) -> io::Result<Bitmap> {
    let file = BufReader::new(File::open(path)?);
    Bitmap::read_png(file)
}

fn assert_png_matches(path: &Path, width: u32, height: u32) {
    let bitmap = load_png_file(path)
        .unwrap_or_else(|err| panic!("{}: {}", path.display(), err));
    assert_eq!((bitmap.width(), bitmap.height()), (width, height),
               "{}", path.display());
    assert_eq!(bitmap.pixel_format(), PixelFormat::RGBA, "{}", path.display());
}

fn assert_no_icons_installed(config: &Config) {
    let res_dir: &PathBuf = &config.layout.android_res_dir;
    for density in &Density::ALL {
        let icon = launcher_icon_path(res_dir, *density);
        if let Ok(contents) = fs::read(&icon) {
            assert_eq!(contents, b"stale", "{}", icon.display());
        }
    }
}

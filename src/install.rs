use crate::density::Density;
use crate::error::{ConvertError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the launcher icon inside each mipmap folder.
pub const LAUNCHER_ICON_NAME: &str = "ic_launcher.png";

/// Returns where the launcher icon for `density` lives under `res_dir`.
pub fn launcher_icon_path(res_dir: &Path, density: Density) -> PathBuf {
    res_dir.join(density.mipmap_dir()).join(LAUNCHER_ICON_NAME)
}

/// Copies each generated icon over the launcher icon of its density,
/// creating missing mipmap folders.  The resource root itself must already
/// exist.  Stops at the first copy that fails.
pub fn install_icons(res_dir: &Path,
                     icons: &BTreeMap<Density, PathBuf>)
                     -> Result<()> {
    if !res_dir.is_dir() {
        return Err(ConvertError::MissingResourceRoot(res_dir.to_path_buf()));
    }
    info!("Replacing Android mipmap icons...");
    for (&density, png) in icons {
        let target = launcher_icon_path(res_dir, density);
        let copied = fs::create_dir_all(res_dir.join(density.mipmap_dir()))
            .and_then(|()| fs::copy(png, &target));
        if let Err(source) = copied {
            return Err(ConvertError::Install { target, source });
        }
        info!("✓ Replaced {}", target.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fake_icons(dir: &Path) -> BTreeMap<Density, PathBuf> {
        Density::ALL
            .iter()
            .map(|&density| {
                let path = dir.join(format!("{}.png", density));
                fs::write(&path, density.name()).expect("write failed");
                (density, path)
            })
            .collect()
    }

    #[test]
    fn missing_resource_root() {
        let dir = TempDir::new().expect("tempdir");
        let icons = fake_icons(dir.path());
        let res_dir = dir.path().join("android/app/src/main/res");
        match install_icons(&res_dir, &icons) {
            Err(ConvertError::MissingResourceRoot(path)) => {
                assert_eq!(path, res_dir)
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!res_dir.exists());
    }

    #[test]
    fn overwrites_existing_icons() {
        let dir = TempDir::new().expect("tempdir");
        let icons = fake_icons(dir.path());
        let res_dir = dir.path().join("res");
        fs::create_dir_all(res_dir.join("mipmap-hdpi")).unwrap();
        fs::write(res_dir.join("mipmap-hdpi").join(LAUNCHER_ICON_NAME), "old")
            .unwrap();

        install_icons(&res_dir, &icons).expect("install failed");
        for density in &Density::ALL {
            let installed = fs::read_to_string(launcher_icon_path(&res_dir,
                                                                  *density))
                .expect("icon missing");
            assert_eq!(installed, density.name());
        }
    }

    #[test]
    fn stops_at_first_failed_copy() {
        let dir = TempDir::new().expect("tempdir");
        let mut icons = fake_icons(dir.path());
        icons.insert(Density::Hdpi, dir.path().join("vanished.png"));
        let res_dir = dir.path().join("res");
        fs::create_dir(&res_dir).unwrap();

        match install_icons(&res_dir, &icons) {
            Err(ConvertError::Install { target, .. }) => {
                assert_eq!(target, launcher_icon_path(&res_dir, Density::Hdpi))
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(launcher_icon_path(&res_dir, Density::Mdpi).exists());
        assert!(!launcher_icon_path(&res_dir, Density::Xhdpi).exists());
    }
}

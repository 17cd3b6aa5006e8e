use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::PathsConfig;
use crate::constants::{android, icon};

/// One file copied into the host app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledFile {
    pub from: PathBuf,
    pub to: PathBuf,
    pub bytes: u64,
}

/// Source and destination pairs, relative to the project root
pub fn plan(paths: &PathsConfig) -> Vec<(PathBuf, PathBuf)> {
    let mut pairs = Vec::new();

    for name in [icon::PNG_FILE_NAME, icon::JPEG_FILE_NAME] {
        pairs.push((paths.app_icons_dir.join(name), paths.assets_images_dir.join(name)));
    }

    for (bucket, _) in android::DENSITY_MAP {
        pairs.push((
            paths.android_icons_dir.join(bucket).join(android::LAUNCHER_FILE_NAME),
            paths.android_res_dir.join(bucket).join(android::LAUNCHER_FILE_NAME),
        ));
    }

    pairs
}

/// Copy the generated icons into the Flutter assets and Android resource folders.
///
/// Every source is checked before the first copy.
pub fn install(root: &Path, paths: &PathsConfig) -> Result<Vec<InstalledFile>> {
    let pairs = plan(paths);

    let missing: Vec<String> = pairs
        .iter()
        .filter(|(from, _)| !root.join(from).is_file())
        .map(|(from, _)| from.display().to_string())
        .collect();
    if !missing.is_empty() {
        bail!(
            "Missing generated icons: {} (run create-app-icon and create-android-icons first)",
            missing.join(", ")
        );
    }

    let mut installed = Vec::with_capacity(pairs.len());
    for (from, to) in pairs {
        let dest = root.join(&to);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let bytes = fs::copy(root.join(&from), &dest)
            .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
        debug!("Copied {} -> {}", from.display(), to.display());

        installed.push(InstalledFile { from, to, bytes });
    }

    Ok(installed)
}

/// Install and print the status report
pub fn run(root: &Path, paths: &PathsConfig) -> Result<Vec<InstalledFile>> {
    println!("Installing icons into the app...");

    let installed = install(root, paths)?;
    for file in &installed {
        println!("✅ {} -> {}", file.from.display(), file.to.display());
    }

    println!("\n🎯 {} files installed", installed.len());
    Ok(installed)
}

use app_icon_kit::Project;
use app_icon_kit::config::{Config, FontConfig};
use std::fs;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A project in a fresh temp dir that only uses the built-in font,
/// so pixels do not depend on the fonts installed on the host
pub fn temp_project() -> (TempDir, Project) {
    let tmp = TempDir::new().expect("create temp dir");
    let mut config = Config::default();
    config.fonts = FontConfig::builtin_only();
    let project = Project::new(tmp.path(), config);
    (tmp, project)
}

/// Same as `temp_project`, with the config also written to icon-kit.yaml for CLI runs
#[allow(dead_code)]
pub fn temp_project_with_config_file() -> (TempDir, Project) {
    let (tmp, project) = temp_project();
    let yaml = project.config.to_yaml().expect("serialize config");
    fs::write(tmp.path().join("icon-kit.yaml"), yaml).expect("write config");
    (tmp, project)
}

#[allow(dead_code)]
pub fn read(path: &Path) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
}

/// A font checked into `tests/fixtures/fonts`
#[allow(dead_code)]
pub fn fixture_font(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/fonts")
        .join(name)
}

/// Pixel bounds `(left, top, right, bottom)` of every non-transparent pixel, right/bottom exclusive
#[allow(dead_code)]
pub fn lit_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    img.enumerate_pixels()
        .filter(|(_, _, p)| p.0[3] > 0)
        .fold(None, |acc, (x, y, _)| match acc {
            None => Some((x, y, x + 1, y + 1)),
            Some((l, t, r, b)) => Some((l.min(x), t.min(y), r.max(x + 1), b.max(y + 1))),
        })
}

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::PathsConfig;
use crate::constants::{android, icon};

/// Expected output paths, relative to the project root
#[derive(Debug, Clone)]
pub struct FileManifest {
    pub base_icons: Vec<PathBuf>,
    pub android_icons: Vec<PathBuf>,
}

impl FileManifest {
    pub fn from_paths(paths: &PathsConfig) -> Self {
        let mut base_icons = Vec::with_capacity(4);
        for dir in [&paths.app_icons_dir, &paths.assets_images_dir] {
            base_icons.push(dir.join(icon::PNG_FILE_NAME));
            base_icons.push(dir.join(icon::JPEG_FILE_NAME));
        }

        let android_icons = android::DENSITY_MAP
            .iter()
            .map(|(bucket, _)| paths.android_res_dir.join(bucket).join(android::LAUNCHER_FILE_NAME))
            .collect();

        FileManifest { base_icons, android_icons }
    }
}

impl Default for FileManifest {
    fn default() -> Self {
        FileManifest::from_paths(&PathsConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present { bytes: u64 },
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    /// Path as listed in the manifest, for display
    pub path: PathBuf,
    pub presence: Presence,
}

impl AuditEntry {
    pub fn is_present(&self) -> bool {
        matches!(self.presence, Presence::Present { .. })
    }

    pub fn line(&self) -> String {
        match self.presence {
            Presence::Present { bytes } => {
                format!("✅ {} ({:.1}KB)", self.path.display(), bytes as f64 / 1024.0)
            }
            Presence::Absent => format!("❌ {} (missing)", self.path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuditSection {
    pub title: &'static str,
    pub entries: Vec<AuditEntry>,
}

#[derive(Debug, Clone)]
pub struct AuditReport {
    pub sections: Vec<AuditSection>,
}

impl AuditReport {
    pub fn entries(&self) -> impl Iterator<Item = &AuditEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    pub fn present_count(&self) -> usize {
        self.entries().filter(|e| e.is_present()).count()
    }

    pub fn total_count(&self) -> usize {
        self.entries().count()
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔍 Icon installation check")?;
        writeln!(f, "{}", "=".repeat(50))?;

        for section in &self.sections {
            writeln!(f, "\n{}", section.title)?;
            for entry in &section.entries {
                writeln!(f, "{}", entry.line())?;
            }
        }

        writeln!(
            f,
            "\n🎯 Summary: {}/{} files present",
            self.present_count(),
            self.total_count()
        )?;
        writeln!(f, "• Play Store: upload the 512x512px PNG/JPEG icon")?;
        writeln!(f, "• Android app: ic_launcher.png in every mipmap density folder")?;

        writeln!(f, "\n📋 Next steps:")?;
        writeln!(f, "1. Use app_icon_512x512.png when uploading to the Play Store")?;
        writeln!(f, "2. Build the app and check the icon on a real device")
    }
}

fn check(root: &Path, path: &Path) -> AuditEntry {
    // Only regular files count; a directory at the path is as good as missing
    let presence = match fs::metadata(root.join(path)) {
        Ok(meta) if meta.is_file() => Presence::Present { bytes: meta.len() },
        _ => Presence::Absent,
    };
    AuditEntry { path: path.to_path_buf(), presence }
}

/// Check every manifest path under `root`. Never fails; only reads metadata.
pub fn audit(root: &Path, manifest: &FileManifest) -> AuditReport {
    let section = |title, paths: &[PathBuf]| AuditSection {
        title,
        entries: paths.iter().map(|p| check(root, p)).collect(),
    };

    AuditReport {
        sections: vec![
            section("📁 Base icon files:", manifest.base_icons.as_slice()),
            section("📱 Android icons:", manifest.android_icons.as_slice()),
        ],
    }
}

/// Audit and print the report
pub fn run(root: &Path, manifest: &FileManifest) -> AuditReport {
    let report = audit(root, manifest);
    print!("{}", report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest_layout() {
        let manifest = FileManifest::default();
        assert_eq!(manifest.base_icons.len(), 4);
        assert_eq!(manifest.android_icons.len(), 5);
        assert_eq!(manifest.base_icons[0], PathBuf::from("app_icons/app_icon_512x512.png"));
        assert_eq!(manifest.base_icons[3], PathBuf::from("assets/images/app_icon_512x512.jpg"));
        assert_eq!(
            manifest.android_icons[4],
            PathBuf::from("android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png")
        );
    }

    #[test]
    fn test_entry_lines() {
        let present = AuditEntry {
            path: PathBuf::from("a.png"),
            presence: Presence::Present { bytes: 1536 },
        };
        assert_eq!(present.line(), "✅ a.png (1.5KB)");

        let absent = AuditEntry { path: PathBuf::from("b.png"), presence: Presence::Absent };
        assert_eq!(absent.line(), "❌ b.png (missing)");
    }

    #[test]
    fn test_directory_counts_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("x.png")).unwrap();
        let entry = check(dir.path(), Path::new("x.png"));
        assert_eq!(entry.presence, Presence::Absent);
    }
}

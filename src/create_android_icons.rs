use anyhow::Result;
use app_icon_kit::{Project, logging};

/// Resize app_icons/app_icon_512x512.png into android_icons/mipmap-*/
fn main() -> Result<()> {
    logging::init(false);
    Project::open(".", None)?.export()?;
    Ok(())
}

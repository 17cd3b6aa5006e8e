use anyhow::Result;
use app_icon_kit::{Project, logging};

/// Draw the base icon into app_icons/ using the project in the working directory
fn main() -> Result<()> {
    logging::init(false);
    Project::open(".", None)?.compose()?;
    Ok(())
}

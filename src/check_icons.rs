use app_icon_kit::{Project, logging};

/// Report which expected icon files exist. Always exits 0, even with a broken config.
fn main() {
    logging::init(false);
    Project::open_or_default(".", None).audit();
}

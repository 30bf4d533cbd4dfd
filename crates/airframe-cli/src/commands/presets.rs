use crate::cli::PresetsArgs;
use crate::error::Result;
use crate::ui;
use airframe::core::presets::catalog::PresetCatalog;
use tracing::info;

pub fn run(args: PresetsArgs) -> Result<()> {
    info!("Loading preset catalog from {:?}", &args.catalog);
    let catalog = PresetCatalog::load(&args.catalog)?;
    print!("{}", ui::render_catalog(&catalog));
    Ok(())
}

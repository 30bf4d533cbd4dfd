use crate::cli::InspectArgs;
use crate::config::PartialAssembly;
use crate::error::{CliError, Result};
use crate::ui;
use airframe::core::models::motor::FlightConfigId;
use airframe::core::presets::catalog::PresetCatalog;
use airframe::workflows::inspect::{self, InspectConfigBuilder};
use tracing::{info, warn};

pub fn run(args: InspectArgs) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => {
            info!("Loading preset catalog from {:?}", path);
            Some(PresetCatalog::load(path)?)
        }
        None => None,
    };

    info!("Loading assembly definition from {:?}", &args.assembly);
    let assembly = PartialAssembly::from_file(&args.assembly)?.into_assembly(catalog.as_ref())?;
    if assembly.is_empty() {
        warn!("Assembly definition contains no components.");
    }

    let config = InspectConfigBuilder::new()
        .flight_config(FlightConfigId::new(args.config_id))
        .require_motors(args.require_motors)
        .build()
        .map_err(|e| CliError::Other(e.into()))?;

    info!("Invoking the core inspection workflow...");
    let report = inspect::run(&assembly, &config)?;
    print!("{}", ui::render_report(&report));
    Ok(())
}

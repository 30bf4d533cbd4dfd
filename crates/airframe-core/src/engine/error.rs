use thiserror::Error;

use crate::core::models::assembly::AssemblyError;
use crate::core::models::component::ComponentKind;
use crate::core::models::ids::ComponentId;
use crate::core::models::mount::MountError;
use crate::core::presets::preset::PresetError;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error("Component not found in assembly: {0:?}")]
    ComponentNotFound(ComponentId),

    #[error("Component {id:?} is a {found}, expected a {expected}")]
    UnexpectedKind {
        id: ComponentId,
        expected: ComponentKind,
        found: ComponentKind,
    },

    #[error("Motor mount error: {source}")]
    Mount {
        #[from]
        source: MountError,
    },

    #[error("Preset could not be applied: {source}")]
    Preset {
        #[from]
        source: PresetError,
    },

    #[error("Assembly edit failed: {source}")]
    Assembly {
        #[from]
        source: AssemblyError,
    },
}

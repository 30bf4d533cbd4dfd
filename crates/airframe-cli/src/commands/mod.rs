pub mod inspect;
pub mod presets;

use serde::Deserialize;

const CARDBOARD_DENSITY: f64 = 680.0;

/// A homogeneous bulk material.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Material {
    pub name: String,
    /// Density in kg/m³.
    pub density: f64,
}

impl Material {
    /// Creates a material, clamping negative densities to zero.
    pub fn new(name: &str, density: f64) -> Self {
        Self {
            name: name.to_string(),
            density: density.max(0.0),
        }
    }

    pub fn cardboard() -> Self {
        Self::new("Cardboard", CARDBOARD_DENSITY)
    }

    /// Mass of the given volume of this material.
    pub fn mass_of(&self, volume: f64) -> f64 {
        volume * self.density
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::cardboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_is_cardboard() {
        let material = Material::default();
        assert_eq!(material.name, "Cardboard");
        assert_eq!(material.density, 680.0);
    }

    #[test]
    fn new_clamps_negative_density() {
        assert_eq!(Material::new("Void", -3.0).density, 0.0);
    }

    #[test]
    fn mass_of_scales_volume_by_density() {
        let material = Material::new("Aluminum", 2700.0);
        assert!((material.mass_of(0.001) - 2.7).abs() < 1e-12);
    }

    #[test]
    fn deserializes_from_inline_toml_table() {
        let material: Material = toml::from_str("name = \"Kraft phenolic\"\ndensity = 950.0").unwrap();
        assert_eq!(material, Material::new("Kraft phenolic", 950.0));
    }
}

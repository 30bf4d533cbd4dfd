use airframe::core::presets::catalog::PresetCatalog;
use airframe::workflows::inspect::{ComponentReport, InspectionReport, MountReport, TubeProperties};
use std::fmt::Write;

const MM_PER_M: f64 = 1000.0;
const G_PER_KG: f64 = 1000.0;

fn auto_marker(automatic: bool) -> &'static str {
    if automatic { " (auto)" } else { "" }
}

pub fn render_report(report: &InspectionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Assembly report for flight configuration '{}'",
        report.flight_config
    );
    for (index, component) in report.components.iter().enumerate() {
        render_component(&mut out, index + 1, component);
    }
    let _ = writeln!(
        out,
        "Total body tube mass: {:.2} g",
        report.total_mass * G_PER_KG
    );
    out
}

fn render_component(out: &mut String, position: usize, component: &ComponentReport) {
    let _ = writeln!(out, "\n{}. {} [{}]", position, component.name, component.kind);
    let _ = writeln!(out, "   length:       {:.1} mm", component.length * MM_PER_M);
    let _ = writeln!(
        out,
        "   fore radius:  {:.2} mm{}",
        component.fore_radius * MM_PER_M,
        auto_marker(component.fore_radius_automatic)
    );
    let _ = writeln!(
        out,
        "   aft radius:   {:.2} mm{}",
        component.aft_radius * MM_PER_M,
        auto_marker(component.aft_radius_automatic)
    );
    if let Some(tube) = &component.tube {
        render_tube(out, tube);
    }
}

fn render_tube(out: &mut String, tube: &TubeProperties) {
    if tube.filled {
        let _ = writeln!(out, "   inner radius: solid");
    } else {
        let _ = writeln!(
            out,
            "   inner radius: {:.2} mm (wall {:.2} mm)",
            tube.inner_radius * MM_PER_M,
            tube.thickness * MM_PER_M
        );
    }
    if let Some(part_number) = &tube.preset {
        let _ = writeln!(out, "   preset:       {}", part_number);
    }
    let _ = writeln!(
        out,
        "   mass:         {:.2} g ({}, {:.3} cm³)",
        tube.mass * G_PER_KG,
        tube.material,
        tube.volume * 1e6
    );
    let _ = writeln!(
        out,
        "   CG:           {:.1} mm",
        tube.center_of_mass.axial_offset() * MM_PER_M
    );
    let _ = writeln!(
        out,
        "   unit inertia: longitudinal {:.3e} m², rotational {:.3e} m²",
        tube.longitudinal_unit_inertia, tube.rotational_unit_inertia
    );
    if let Some(mount) = &tube.mount {
        render_mount(out, mount);
    }
}

fn render_mount(out: &mut String, mount: &MountReport) {
    let _ = writeln!(
        out,
        "   motor mount:  {:.2} mm bore, {} motor, overhang {:.1} mm",
        mount.diameter * MM_PER_M,
        mount.motor_count,
        mount.overhang * MM_PER_M
    );
    let _ = writeln!(
        out,
        "   ignition:     {} + {:.1} s",
        mount.ignition_event, mount.ignition_delay
    );
    match (&mount.motor, mount.motor_position) {
        (Some(motor), Some(position)) => {
            let _ = writeln!(
                out,
                "   motor:        {} at {:.1} mm (ejection delay {:.1} s)",
                motor.designation,
                position.x * MM_PER_M,
                mount.ejection_delay
            );
        }
        _ => {
            let _ = writeln!(out, "   motor:        none");
        }
    }
}

pub fn render_catalog(catalog: &PresetCatalog) -> String {
    let mut out = String::new();
    if catalog.is_empty() {
        let _ = writeln!(out, "Catalog is empty.");
        return out;
    }
    for preset in catalog.iter() {
        let diameters = match (preset.outer_diameter, preset.inner_diameter) {
            (Some(od), Some(id)) => format!(
                "OD {:.2} mm / ID {:.2} mm",
                od * MM_PER_M,
                id * MM_PER_M
            ),
            (Some(od), None) => format!("OD {:.2} mm", od * MM_PER_M),
            _ => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<12} {:<12} {:<14} {}",
            preset.part_number,
            preset.manufacturer,
            preset.kind.to_string(),
            diameters
        );
    }
    out
}

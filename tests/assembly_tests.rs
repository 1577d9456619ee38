//! Library-level tests of assembling full layouts with the plan kernel.

use uhk80_keycaps::kernel::{Axis, CadKernel, PlanKernel, PlannedSolid};
use uhk80_keycaps::models::LegendSpec;
use uhk80_keycaps::services::geometry::{
    grid_position, keycap_spec, legend_anchor, row_depth_and_tilt,
};
use uhk80_keycaps::services::{build_assembly, AssemblyOptions, LayoutService, PartRole};

fn cap_tilt(solid: &PlannedSolid) -> Option<f64> {
    match solid {
        PlannedSolid::Translate { solid, .. } => match solid.as_ref() {
            PlannedSolid::Rotate {
                axis: Axis::X,
                degrees,
                ..
            } => Some(*degrees),
            _ => None,
        },
        _ => None,
    }
}

#[test]
fn test_every_cap_is_tilted_for_its_row() {
    let layout = LayoutService::builtin("right-half").unwrap();
    let assembly = build_assembly(&PlanKernel, &layout, &AssemblyOptions::default()).unwrap();

    for part in assembly.parts.iter().filter(|p| p.role == PartRole::Cap) {
        let key = &layout.keys[part.key_index];
        let (_, tilt) = row_depth_and_tilt(key.row);
        assert_eq!(cap_tilt(&part.solid), Some(tilt), "{}", part.name);
    }
}

#[test]
fn test_legend_matches_standalone_construction() {
    let layout = LayoutService::builtin("right-half").unwrap();
    let options = AssemblyOptions::default();
    let assembly = build_assembly(&PlanKernel, &layout, &options).unwrap();

    let (index, key) = layout.find_by_legend("Enter").unwrap();
    let spec = keycap_spec(key.row, key.width_units, options.stem_cross);
    let legend = LegendSpec {
        text: key.legend.clone(),
        font_size: key.font_size,
        thickness: options.legend_thickness,
        anchor: legend_anchor(&spec, options.legend_embed),
    };
    let (x, y) = grid_position(key.grid_x, key.grid_y);
    let expected = PlanKernel.translate(PlanKernel.legend(&legend).unwrap().unwrap(), [x, y, 0.0]);

    let part = assembly.part(&format!("legend_{index}")).unwrap();
    assert_eq!(part.solid, expected);
}

#[test]
fn test_plan_is_deterministic() {
    let layout = LayoutService::builtin("top-row").unwrap();
    let options = AssemblyOptions::default();

    let a = build_assembly(&PlanKernel, &layout, &options).unwrap();
    let b = build_assembly(&PlanKernel, &layout, &options).unwrap();

    let solids_a: Vec<&PlannedSolid> = a.parts.iter().map(|p| &p.solid).collect();
    let solids_b: Vec<&PlannedSolid> = b.parts.iter().map(|p| &p.solid).collect();
    assert_eq!(solids_a, solids_b);
}

use approx::assert_relative_eq;
use elf_core::input::{FormInput, StoryOrder};
use elf_core::seismic::period::CsGoverning;
use elf_core::seismic::site_coefficients::{fa, fv};
use elf_core::seismic::{calculate, ElfInput, HazardParameters, SiteClass, StructureGeometry};

fn two_story(site_class: SiteClass, loads: Vec<f64>) -> ElfInput {
    ElfInput {
        label: "Two-story shophouse".to_string(),
        hazard: HazardParameters {
            ss: 0.5,
            s1: 0.2,
            site_class,
            importance_factor: 1.0,
            response_modification: 8.0,
        },
        geometry: StructureGeometry {
            span_lengths_m: vec![4.0, 4.0, 4.0],
            story_heights_m: vec![3.5, 3.5],
            level_loads_tpm: loads,
        },
    }
}

fn form(site_class: &str) -> FormInput {
    FormInput {
        label: "Form".to_string(),
        span_lengths: "4, 4, 4".to_string(),
        story_heights: "3.5, 3.5".to_string(),
        level_loads: "1.0, 1.0, 1.0".to_string(),
        ss: "0.5".to_string(),
        s1: "0.2".to_string(),
        site_class: site_class.to_string(),
        importance_factor: "1.0".to_string(),
        response_modification: "8".to_string(),
        story_order: StoryOrder::BaseFirst,
    }
}

#[test]
fn site_d_coefficients_at_breakpoints() {
    assert_relative_eq!(fa(SiteClass::D, 0.5).unwrap(), 1.4, epsilon = 1e-12);
    assert_relative_eq!(fv(SiteClass::D, 0.2).unwrap(), 2.0, epsilon = 1e-12);
}

#[test]
fn two_story_frame_full_pipeline() {
    let result = calculate(&two_story(SiteClass::D, vec![1.0, 1.0, 1.0])).unwrap();
    let p = &result.parameters;

    assert_relative_eq!(p.sms, 0.7, epsilon = 1e-12);
    assert_relative_eq!(p.sm1, 0.4, epsilon = 1e-12);
    assert_relative_eq!(p.sds, 0.7 * 2.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(p.sd1, 0.4 * 2.0 / 3.0, epsilon = 1e-12);

    assert_relative_eq!(p.total_height_m, 7.0);
    // 0.0466 * 7^0.9
    assert_relative_eq!(p.period_s, 0.2685, epsilon = 1e-3);
    assert_eq!(p.k, 1.0);

    assert_eq!(p.cs_governs, CsGoverning::Spectral);
    assert!(p.cs >= 0.01 && p.cs <= p.cs_max);
    assert_relative_eq!(p.cs, 0.7 * 2.0 / 3.0 / 8.0, epsilon = 1e-12);

    assert_relative_eq!(p.w_effective, 24.0, epsilon = 1e-12);
    assert_relative_eq!(p.base_shear, 1.4, epsilon = 1e-12);

    // k = 1: wx*hx is 42 and 84
    let fx: Vec<f64> = result.levels.iter().map(|l| l.fx).collect();
    assert_relative_eq!(fx[0], 0.0);
    assert_relative_eq!(fx[1], 1.4 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(fx[2], 2.8 / 3.0, epsilon = 1e-12);

    let vx: Vec<f64> = result.levels.iter().map(|l| l.vx).collect();
    assert_relative_eq!(vx[2], 2.8 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(vx[1], 1.4, epsilon = 1e-12);
    assert_relative_eq!(vx[0], 1.4, epsilon = 1e-12);

    assert_eq!(result.point_loads_csv(), "0.000,0.467,0.933");
    assert_eq!(result.story_shears_csv(), "1.400,1.400,0.933");
}

#[test]
fn zero_loads_produce_zero_forces_without_nan() {
    let result = calculate(&two_story(SiteClass::D, vec![0.0, 0.0, 0.0])).unwrap();
    let p = &result.parameters;

    assert_eq!(p.w_effective, 0.0);
    assert_eq!(p.base_shear, 0.0);
    for level in &result.levels {
        assert_eq!(level.fx, 0.0);
        assert_eq!(level.vx, 0.0);
        assert!(!level.cvx.is_nan());
    }
}

#[test]
fn unknown_site_class_matches_class_d() {
    let unknown = form("Z").to_elf_input().unwrap().unwrap();
    let class_d = form("D").to_elf_input().unwrap().unwrap();

    let a = calculate(&unknown).unwrap();
    let b = calculate(&class_d).unwrap();
    assert_eq!(a.parameters.fa, b.parameters.fa);
    assert_eq!(a.parameters.fv, b.parameters.fv);
    assert_eq!(a, b);
}

#[test]
fn base_load_does_not_add_weight() {
    let light = calculate(&two_story(SiteClass::D, vec![0.0, 1.0, 1.0])).unwrap();
    let heavy = calculate(&two_story(SiteClass::D, vec![50.0, 1.0, 1.0])).unwrap();

    assert_eq!(light.parameters.w_effective, heavy.parameters.w_effective);
    assert_eq!(light.point_loads_csv(), heavy.point_loads_csv());
}

#[test]
fn tall_frame_is_capped_by_upper_bound() {
    let mut input = two_story(SiteClass::D, vec![1.0; 21]);
    input.geometry.story_heights_m = vec![3.0; 20];

    let result = calculate(&input).unwrap();
    let p = &result.parameters;

    assert_eq!(p.cs_governs, CsGoverning::UpperBound);
    assert_relative_eq!(p.cs, p.cs_max, epsilon = 1e-12);
    assert!(p.period_s > 0.5 && p.period_s < 2.5);
    assert_relative_eq!(p.k, 1.0 + (p.period_s - 0.5) / 2.0, epsilon = 1e-12);
    assert_eq!(result.levels[20].name, "Roof");
    assert_eq!(result.levels[19].name, "FL 20");
}

#[test]
fn weak_hazard_is_raised_to_floor() {
    let mut input = two_story(SiteClass::D, vec![1.0, 1.0, 1.0]);
    input.hazard.ss = 0.05;
    input.hazard.s1 = 0.02;

    let result = calculate(&input).unwrap();
    let p = &result.parameters;

    // Both accelerations sit below the table and clamp to the first column
    assert_eq!(p.fa, 1.6);
    assert_eq!(p.fv, 2.4);
    assert_eq!(p.cs_governs, CsGoverning::LowerBound);
    assert_eq!(p.cs, 0.01);
    assert_relative_eq!(p.base_shear, 0.24, epsilon = 1e-12);
}

#[test]
fn degenerate_geometry_is_reported() {
    let mut input = two_story(SiteClass::D, vec![1.0]);
    input.geometry.story_heights_m.clear();

    let err = calculate(&input).unwrap_err();
    assert_eq!(err.error_code(), "DEGENERATE_GEOMETRY");
}

#[test]
fn roof_first_form_matches_base_first() {
    let mut roof_first = form("D");
    roof_first.story_heights = "3.0, 4.0".to_string();
    roof_first.level_loads = "0.8, 1.2, 0.5".to_string();
    roof_first.story_order = StoryOrder::RoofFirst;

    let mut base_first = form("D");
    base_first.story_heights = "4.0, 3.0".to_string();
    base_first.level_loads = "0.5, 1.2, 0.8".to_string();

    let a = calculate(&roof_first.to_elf_input().unwrap().unwrap()).unwrap();
    let b = calculate(&base_first.to_elf_input().unwrap().unwrap()).unwrap();
    assert_eq!(a, b);
}

// Host-side checks that the WGSL module agrees with the Rust side.

use naga::valid::{Capabilities, ValidationFlags, Validator};
use pillars_core::shading::{wgsl_source, NOISE_SCALE, RIM_SCALE, SPECULAR_GAIN};
use pillars_core::{ShadingUniforms, PILLARS_WGSL};
use std::mem::{offset_of, size_of};

fn parse() -> naga::Module {
    let src = wgsl_source();
    match naga::front::wgsl::parse_str(&src) {
        Ok(module) => module,
        Err(e) => panic!("{}", e.emit_to_string(&src)),
    }
}

#[test]
fn generated_module_parses_and_validates() {
    let module = parse();
    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .expect("shader module should validate");
}

#[test]
fn shading_block_matches_uniform_struct() {
    let module = parse();
    let (members, span) = module
        .types
        .iter()
        .find_map(|(_, ty)| match (&ty.name, &ty.inner) {
            (Some(name), naga::TypeInner::Struct { members, span }) if name == "Shading" => {
                Some((members.clone(), *span))
            }
            _ => None,
        })
        .expect("struct Shading");

    assert_eq!(span as usize, size_of::<ShadingUniforms>());
    let expected = [
        ("time", offset_of!(ShadingUniforms, time)),
        ("u_fresnel_speed", offset_of!(ShadingUniforms, fresnel_speed)),
        ("u_fresnel_tile", offset_of!(ShadingUniforms, fresnel_tile)),
        ("uMetalness", offset_of!(ShadingUniforms, metalness)),
        ("uCamPos", offset_of!(ShadingUniforms, cam_pos)),
        ("uRoughness", offset_of!(ShadingUniforms, roughness)),
        ("uLightDir", offset_of!(ShadingUniforms, light_dir)),
        ("uAmbientStrength", offset_of!(ShadingUniforms, ambient_strength)),
        ("uSunLightDir", offset_of!(ShadingUniforms, sun_light_dir)),
        ("uSunLightColor", offset_of!(ShadingUniforms, sun_light_color)),
        ("uSkyColor", offset_of!(ShadingUniforms, sky_color)),
        ("uGroundColor", offset_of!(ShadingUniforms, ground_color)),
        ("u_color", offset_of!(ShadingUniforms, colors)),
    ];
    for (name, offset) in expected {
        let member = members
            .iter()
            .find(|m| m.name.as_deref() == Some(name))
            .unwrap_or_else(|| panic!("missing member {name}"));
        assert_eq!(member.offset as usize, offset, "{name}");
    }
    assert_eq!(offset_of!(ShadingUniforms, colors), 112);
}

#[test]
fn tuning_constants_come_from_rust() {
    let src = wgsl_source();
    assert!(src.contains(&format!("const NOISE_SCALE: f32 = {:?};", NOISE_SCALE)));
    assert!(src.contains(&format!("const RIM_SCALE: f32 = {:?};", RIM_SCALE)));
    assert!(src.contains(&format!("const SPECULAR_GAIN: f32 = {:?};", SPECULAR_GAIN)));
    assert!(src.contains("const PALETTE_LEN: u32 = 5u;"));

    // The hand-written body only refers to them
    for name in [
        "PALETTE_LEN",
        "NOISE_SCALE",
        "NOISE_DRIFT",
        "PAN_FRESNEL_POWER",
        "PAN_NOISE_WEIGHT",
        "RIM_POWER",
        "RIM_SCALE",
        "SPECULAR_GAIN",
        "TIP_TINT_HEIGHT",
        "ENV_GAIN",
    ] {
        assert!(!PILLARS_WGSL.contains(&format!("const {name}")), "{name}");
        assert!(PILLARS_WGSL.contains(name), "{name} unused");
    }
}

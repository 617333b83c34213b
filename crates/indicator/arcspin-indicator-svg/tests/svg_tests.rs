use arcspin_indicator_core::{presets, FrameSink, IndicatorConfig, RingIndicator};
use arcspin_indicator_svg::SvgRenderer;

fn frame_for(cfg: IndicatorConfig) -> arcspin_indicator_core::Frame {
    let mut indicator = RingIndicator::new(cfg).unwrap();
    indicator.advance(16.0).clone()
}

/// it should produce a complete document with background, layers, and mask
#[test]
fn document_structure() {
    let renderer = SvgRenderer::new();
    let doc = renderer.render_document(&frame_for(IndicatorConfig::default()));

    assert!(doc.starts_with("<svg"));
    assert!(doc.ends_with("</svg>"));
    assert!(doc.contains(r#"viewBox="0 0 100 100""#));
    assert!(doc.contains(r##"stroke="#f3f4f6""##));
    assert_eq!(doc.matches("<path ").count(), 3);
    assert!(doc.contains(r##"fill="#3b82f6""##));
    assert!(doc.contains(r#"fill-opacity="0.7""#));
    // Mask painted last, on top of the layers.
    assert!(doc.rfind(r#"fill="white""#).unwrap() > doc.rfind("</g>").unwrap());
}

/// it should rotate each layer group around the view center
#[test]
fn layer_groups_carry_rotation() {
    let renderer = SvgRenderer::new();
    let doc = renderer.render_document(&frame_for(presets::multi_arc_indicator(false)));

    assert_eq!(doc.matches("<g transform=\"rotate(").count(), 3);
    assert_eq!(doc.matches("<path ").count(), 9);
    assert!(doc.contains("50 50)\""));
}

/// it should use the dark chrome for dark presets
#[test]
fn dark_mode_colors() {
    let renderer = SvgRenderer::new();
    let doc = renderer.render_document(&frame_for(presets::multi_arc_indicator(true)));

    assert!(doc.contains(r##"stroke="#374151""##));
    assert!(doc.contains(r##"fill="#1f2937""##));
    assert!(doc.contains(r#"fill-opacity="0.5""#));
}

/// it should retain the last painted document as a sink
#[test]
fn sink_retains_last_document() {
    let mut renderer = SvgRenderer::new();
    assert!(renderer.last_document().is_empty());

    let frame = frame_for(IndicatorConfig::default());
    renderer.paint(&frame);
    assert!(!renderer.last_document().is_empty());
    assert_eq!(renderer.last_document(), renderer.render_document(&frame));
}

/// it should emit path data in the M/Q/A grammar the originals used
#[test]
fn wedge_paths_use_rounded_arc_grammar() {
    let renderer = SvgRenderer::new();
    let doc = renderer.render_document(&frame_for(IndicatorConfig::default()));

    let d_start = doc.find(r#"d="M "#).expect("path data present");
    let d_end = doc[d_start..].find("\" fill=").unwrap() + d_start;
    let d = &doc[d_start + 3..d_end];
    assert_eq!(d.matches("Q ").count(), 4);
    assert_eq!(d.matches("A ").count(), 2);
    assert_eq!(d.matches("L ").count(), 1);
    assert!(d.ends_with('Z'));
}

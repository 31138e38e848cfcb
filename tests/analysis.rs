//! Validates the full analysis pipeline: palette extraction, region
//! detection, classification, layout inference, and the report contract

use uilens::AnalysisError;
use uilens::analysis::classify::{DetectedElement, ElementKind};
use uilens::analysis::edges::detect_edges;
use uilens::analysis::layout::{
    Alignment, FlexDirection, LayoutAnalysis, LayoutKind, analyze_layout,
};
use uilens::analysis::pipeline::{Analyzer, AnalyzerConfig};
use uilens::io::report::{read_report, to_json, write_report};
use uilens::raster::{PixelBuffer, Rect, Rgb};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const RED: [u8; 4] = [220, 30, 30, 255];

fn canvas(width: u32, height: u32, background: [u8; 4], fills: &[(Rect, [u8; 4])]) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        data.extend_from_slice(&background);
    }

    for (rect, rgba) in fills {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let index = ((y * width + x) * 4) as usize;
                if let Some(pixel) = data.get_mut(index..index + 4) {
                    pixel.copy_from_slice(rgba);
                }
            }
        }
    }

    PixelBuffer::new(width, height, data).unwrap()
}

fn element(kind: ElementKind, x: u32, y: u32, width: u32, height: u32) -> DetectedElement {
    DetectedElement::new(kind, Rect::new(x, y, width, height), Rgb::WHITE, 0.7)
}

#[test]
fn test_uniform_white_buffer_yields_empty_result() {
    let buffer = canvas(100, 100, WHITE, &[]);
    let result = Analyzer::new().analyze(Some(&buffer)).unwrap();

    assert_eq!(result.colors.dominant.hex(), "#ffffff");
    assert_eq!(result.colors.background, Rgb::WHITE);
    assert_eq!(result.colors.text, Rgb::BLACK);
    // No palette entry contrasts with white, so the fixed accent applies
    assert_eq!(result.colors.accent.hex(), "#3b82f6");
    assert_eq!(result.colors.palette, vec![Rgb::WHITE]);

    assert!(result.elements.is_empty());
    assert_eq!(result.layout, LayoutAnalysis::absolute());
    assert_eq!((result.dimensions.width, result.dimensions.height), (100, 100));
}

#[test]
fn test_single_button_on_contrasting_background() {
    let button = Rect::new(160, 120, 80, 40);
    let buffer = canvas(400, 300, WHITE, &[(button, BLUE)]);
    let result = Analyzer::new().analyze(Some(&buffer)).unwrap();

    assert_eq!(result.elements.len(), 1, "expected exactly one element");
    let detected = result.elements.first().unwrap();
    assert_eq!(detected.kind, ElementKind::Button);
    assert!((detected.confidence - 0.8).abs() < f64::EPSILON);
    // Axis-limited growth walks in 2px steps, so the bounds land just
    // inside the painted rectangle
    assert_eq!(detected.bounds, Rect::new(160, 120, 78, 38));
    assert_eq!(detected.colors.background, Some(Rgb::new(0, 0, 255)));
    assert!(detected.content.is_none());

    assert_eq!(result.colors.dominant, Rgb::WHITE);
    assert_eq!(result.colors.background, Rgb::WHITE);
    // The button fill is the first palette entry readable against white
    assert_eq!(result.colors.accent, Rgb::new(0, 0, 255));

    assert_eq!(result.layout.kind, LayoutKind::Absolute);
}

#[test]
fn test_two_by_two_squares_infer_grid() {
    let config = AnalyzerConfig::default();
    let elements = vec![
        element(ElementKind::Card, 40, 40, 60, 60),
        element(ElementKind::Card, 120, 40, 60, 60),
        element(ElementKind::Card, 40, 120, 60, 60),
        element(ElementKind::Card, 120, 120, 60, 60),
    ];

    let layout = analyze_layout(&elements, 220, 220, &config);
    assert_eq!(layout.kind, LayoutKind::Grid);
    assert_eq!(layout.direction, None);
    assert_eq!(layout.gap, Some(20));
    assert_eq!(layout.padding, Some(32));
    assert_eq!(layout.alignment, Some(Alignment::Center));
}

#[test]
fn test_stacked_buttons_infer_flex_column() {
    let config = AnalyzerConfig::default();
    let elements = vec![
        element(ElementKind::Button, 8, 8, 120, 40),
        element(ElementKind::Button, 8, 64, 120, 40),
        element(ElementKind::Button, 8, 120, 120, 40),
        element(ElementKind::Button, 8, 176, 120, 40),
    ];

    let layout = analyze_layout(&elements, 300, 400, &config);
    assert_eq!(layout.kind, LayoutKind::Flex);
    assert_eq!(layout.direction, Some(FlexDirection::Column));
    assert_eq!(layout.alignment, Some(Alignment::Start));
    assert_eq!(layout.gap, Some(16));
    assert_eq!(layout.padding, Some(8));
}

#[test]
fn test_row_spanning_axis_with_large_gaps_is_space_between() {
    let config = AnalyzerConfig::default();
    let elements = vec![
        element(ElementKind::Button, 8, 20, 80, 40),
        element(ElementKind::Button, 160, 20, 80, 40),
        element(ElementKind::Button, 312, 20, 80, 40),
    ];

    let layout = analyze_layout(&elements, 400, 100, &config);
    assert_eq!(layout.kind, LayoutKind::Flex);
    assert_eq!(layout.direction, Some(FlexDirection::Row));
    assert_eq!(layout.alignment, Some(Alignment::SpaceBetween));
    assert_eq!(layout.gap, Some(72));
}

#[test]
fn test_row_spanning_axis_with_small_gaps_is_space_around() {
    let config = AnalyzerConfig::default();
    let elements = vec![
        element(ElementKind::Button, 10, 20, 60, 40),
        element(ElementKind::Button, 110, 20, 60, 40),
        element(ElementKind::Button, 210, 20, 60, 40),
        element(ElementKind::Button, 310, 20, 60, 40),
    ];

    let layout = analyze_layout(&elements, 400, 100, &config);
    assert_eq!(layout.alignment, Some(Alignment::SpaceAround));
}

#[test]
fn test_row_hugging_end_edge() {
    let config = AnalyzerConfig::default();
    let elements = vec![
        element(ElementKind::Button, 260, 20, 60, 40),
        element(ElementKind::Button, 340, 20, 50, 40),
    ];

    let layout = analyze_layout(&elements, 400, 100, &config);
    assert_eq!(layout.kind, LayoutKind::Flex);
    assert_eq!(layout.direction, Some(FlexDirection::Row));
    assert_eq!(layout.alignment, Some(Alignment::End));
}

#[test]
fn test_row_in_center_band() {
    let config = AnalyzerConfig::default();
    let elements = vec![
        element(ElementKind::Button, 140, 20, 60, 40),
        element(ElementKind::Button, 220, 20, 60, 40),
    ];

    let layout = analyze_layout(&elements, 400, 100, &config);
    assert_eq!(layout.alignment, Some(Alignment::Center));
}

#[test]
fn test_scattered_elements_fall_back_to_absolute() {
    let config = AnalyzerConfig::default();
    let elements = vec![
        element(ElementKind::Card, 10, 10, 100, 40),
        element(ElementKind::Card, 60, 80, 120, 50),
        element(ElementKind::Card, 170, 260, 80, 60),
    ];

    let layout = analyze_layout(&elements, 400, 400, &config);
    assert_eq!(layout.kind, LayoutKind::Absolute);
    assert_eq!(layout.direction, None);
    assert_eq!(layout.alignment, None);
    assert_eq!(layout.gap, None);
    assert_eq!(layout.padding, Some(10));
}

#[test]
fn test_fewer_than_two_elements_is_always_absolute() {
    let config = AnalyzerConfig::default();

    assert_eq!(analyze_layout(&[], 100, 100, &config), LayoutAnalysis::absolute());

    let single = vec![element(ElementKind::Card, 10, 10, 50, 50)];
    assert_eq!(
        analyze_layout(&single, 100, 100, &config),
        LayoutAnalysis::absolute()
    );
}

#[test]
fn test_element_invariants_on_busy_canvas() {
    let fills = [
        (Rect::new(160, 120, 80, 40), BLUE),
        (Rect::new(160, 200, 80, 40), RED),
    ];
    let buffer = canvas(400, 300, WHITE, &fills);
    let result = Analyzer::new().analyze(Some(&buffer)).unwrap();

    assert!(!result.elements.is_empty());
    for detected in &result.elements {
        assert!((0.0..=1.0).contains(&detected.confidence));
        assert!(detected.bounds.contained_in(400, 300));
        assert!(detected.bounds.width > 0 && detected.bounds.height > 0);
    }

    assert!(result.colors.palette.len() <= 5);
    assert_eq!((result.dimensions.width, result.dimensions.height), (400, 300));
}

#[test]
fn test_pipeline_is_deterministic() {
    let buffer = canvas(400, 300, WHITE, &[(Rect::new(160, 120, 80, 40), BLUE)]);
    let analyzer = Analyzer::new();

    let first = analyzer.analyze(Some(&buffer)).unwrap();
    let second = analyzer.analyze(Some(&buffer)).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        to_json(&first, false).unwrap(),
        to_json(&second, false).unwrap()
    );
}

#[test]
fn test_missing_buffer_fails_fast() {
    let result = Analyzer::new().analyze(None);
    assert!(matches!(result, Err(AnalysisError::MissingImage)));
}

#[test]
fn test_degenerate_buffers_are_rejected() {
    assert!(PixelBuffer::new(0, 100, vec![]).is_err());
    assert!(PixelBuffer::new(100, 0, vec![]).is_err());
    assert!(PixelBuffer::new(10, 10, vec![0; 100]).is_err());
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let stride_config = AnalyzerConfig {
        seed_stride: 0,
        ..AnalyzerConfig::default()
    };
    assert!(matches!(
        Analyzer::with_config(stride_config),
        Err(AnalysisError::InvalidParameter { .. })
    ));

    let ratio_config = AnalyzerConfig {
        border_hit_ratio: 1.5,
        ..AnalyzerConfig::default()
    };
    assert!(Analyzer::with_config(ratio_config).is_err());
}

#[test]
fn test_edge_map_marks_intensity_boundary() {
    let left = Rect::new(0, 0, 10, 20);
    let buffer = canvas(20, 20, WHITE, &[(left, [0, 0, 0, 255])]);
    let config = AnalyzerConfig::default();

    let edge_map = detect_edges(&buffer, &config);
    assert_eq!(edge_map.width(), 20);
    assert_eq!(edge_map.height(), 20);

    // The black/white boundary at x=10 produces a two-column edge band
    assert!(edge_map.is_edge(9, 10));
    assert!(edge_map.is_edge(10, 10));
    assert!(!edge_map.is_edge(5, 10));
    assert!(!edge_map.is_edge(15, 10));

    // Border pixels are never edges
    assert!(!edge_map.is_edge(0, 0));
    assert!(!edge_map.is_edge(19, 19));
    assert!(!edge_map.is_edge(9, 0));

    // Two columns of 18 interior rows each
    assert_eq!(edge_map.edge_count(), 36);
}

#[test]
fn test_contrast_ratio_is_symmetric_across_palette() {
    let samples = [
        Rgb::WHITE,
        Rgb::BLACK,
        Rgb::new(0, 0, 255),
        Rgb::new(220, 30, 30),
        Rgb::new(0x3b, 0x82, 0xf6),
    ];

    for a in samples {
        for b in samples {
            assert!((a.contrast_ratio(b) - b.contrast_ratio(a)).abs() < 1e-12);
            assert!(a.contrast_ratio(b) >= 1.0);
        }
    }
}

#[test]
fn test_report_shape_matches_contract() {
    let buffer = canvas(400, 300, WHITE, &[(Rect::new(160, 120, 80, 40), BLUE)]);
    let result = Analyzer::new().analyze(Some(&buffer)).unwrap();

    let value: serde_json::Value = serde_json::from_str(&to_json(&result, false).unwrap()).unwrap();

    let at = |pointer: &str| value.pointer(pointer).cloned().unwrap_or_default();

    assert_eq!(at("/colors/dominant"), "#ffffff");
    assert_eq!(at("/colors/accent"), "#0000ff");
    assert!(at("/colors/palette").as_array().unwrap().len() <= 5);

    assert_eq!(at("/elements/0/type"), "button");
    assert_eq!(at("/elements/0/bounds/x"), 160);
    assert_eq!(at("/elements/0/colors/background"), "#0000ff");
    // Optional producer-side fields are omitted, not null
    let first = value.pointer("/elements/0").unwrap();
    assert!(first.get("formProperties").is_none());
    assert!(first.get("styling").is_none());
    assert!(first.get("content").is_none());

    assert_eq!(at("/layout/type"), "absolute");
    assert_eq!(at("/dimensions/width"), 400);
    assert_eq!(at("/dimensions/height"), 300);
}

#[test]
fn test_spacing_alignments_serialize_with_hyphens() {
    let layout = LayoutAnalysis {
        kind: LayoutKind::Flex,
        direction: Some(FlexDirection::Row),
        alignment: Some(Alignment::SpaceBetween),
        gap: Some(72),
        padding: Some(8),
    };

    let value = serde_json::to_value(layout).unwrap();
    assert_eq!(value.get("type").unwrap(), "flex");
    assert_eq!(value.get("direction").unwrap(), "row");
    assert_eq!(value.get("alignment").unwrap(), "space-between");
}

#[test]
fn test_report_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("shot_analysis.json");

    let buffer = canvas(400, 300, WHITE, &[(Rect::new(160, 120, 80, 40), BLUE)]);
    let result = Analyzer::new().analyze(Some(&buffer)).unwrap();

    write_report(&result, report_path.to_str().unwrap(), true).unwrap();
    let restored = read_report(&report_path).unwrap();

    assert_eq!(result, restored);
}

#[test]
fn test_cli_batch_processing_writes_reports() {
    use uilens::io::cli::{Cli, FileProcessor};
    use uilens::io::configuration::{COLOR_TOLERANCE, SEED_STRIDE};

    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("shot.png");

    let image = image::RgbaImage::from_fn(400, 300, |x, y| {
        let inside = (160..240).contains(&x) && (120..160).contains(&y);
        if inside {
            image::Rgba(BLUE)
        } else {
            image::Rgba(WHITE)
        }
    });
    image.save(&input_path).unwrap();

    let cli = Cli {
        target: dir.path().to_path_buf(),
        pretty: true,
        quiet: true,
        no_skip: false,
        edge_map: true,
        seed_stride: SEED_STRIDE,
        color_tolerance: COLOR_TOLERANCE,
    };
    FileProcessor::new(cli).process().unwrap();

    let report_path = dir.path().join("shot_analysis.json");
    assert!(report_path.exists());
    let report = read_report(&report_path).unwrap();
    assert_eq!(report.elements.len(), 1);
    assert_eq!(report.elements.first().unwrap().kind, ElementKind::Button);

    assert!(dir.path().join("shot_edges.png").exists());

    // A second run with skip logic active leaves the report untouched
    let rerun = Cli {
        target: dir.path().to_path_buf(),
        pretty: true,
        quiet: true,
        no_skip: false,
        edge_map: false,
        seed_stride: SEED_STRIDE,
        color_tolerance: COLOR_TOLERANCE,
    };
    FileProcessor::new(rerun).process().unwrap();
}

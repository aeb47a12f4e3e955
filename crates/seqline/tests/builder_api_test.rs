//! Integration tests for the DiagramBuilder API

use seqline::{
    DiagramBuilder, SeqlineError,
    config::AppConfig,
    identifier::Id,
    layout::LayoutError,
    semantic::Sequence,
};

const SOURCE: &str = "\
@actors Bob, Maria
@start Greeting
@step Bob, Maria, Hello
@step Maria, Bob, Hi
@end
";

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_parse_and_render() {
    let builder = DiagramBuilder::default();
    let sequence = builder.parse(SOURCE).expect("Failed to parse sequence");
    let svg = builder.render_svg(&sequence).expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains(">Greeting<"));
}

#[test]
fn test_parse_error_keeps_source() {
    let source = "@step Bob\n";
    let builder = DiagramBuilder::default();

    match builder.parse(source) {
        Err(SeqlineError::Parse { err, src }) => {
            assert_eq!(src, source);
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_config_defaults_are_overridden_by_source() {
    let config: AppConfig = toml::from_str("[layout]\ndistance = 300\n").unwrap();
    let builder = DiagramBuilder::new(config);

    let sequence = builder.parse("@step A, B\n").unwrap();
    assert_eq!(sequence.options().distance(), 300);

    let sequence = builder
        .parse("distance_between_actors = 120\n@step A, B\n")
        .unwrap();
    assert_eq!(sequence.options().distance(), 120);
}

#[test]
fn test_invalid_config_color() {
    let config: AppConfig = toml::from_str("[style]\ndefault_color = \"not-a-color\"\n").unwrap();
    let builder = DiagramBuilder::new(config);

    let result = builder.parse("@step A, B\n");
    assert!(matches!(result, Err(SeqlineError::Config(_))));
}

#[test]
fn test_invalid_background_color_fails_render() {
    let config: AppConfig =
        toml::from_str("[style]\nbackground_color = \"not-a-color\"\n").unwrap();
    let builder = DiagramBuilder::new(config);

    let sequence = builder.parse("@step A, B\n").unwrap();
    let result = builder.render_svg(&sequence);
    assert!(matches!(result, Err(SeqlineError::Export(_))));
}

#[test]
fn test_empty_source_has_nothing_to_render() {
    let builder = DiagramBuilder::default();
    let sequence = builder.parse("# nothing here\n").unwrap();

    let err = builder.render_svg(&sequence).unwrap_err();
    assert!(matches!(err, SeqlineError::Layout(LayoutError::NoActors)));
    assert_eq!(err.to_string(), "Layout error: sequence has no actors");
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let first = builder.parse("@step A, B\n").unwrap();
    let second = builder.parse("@step C, D, E\n").unwrap();

    let svg1 = builder.render_svg(&first).unwrap();
    let svg2 = builder.render_svg(&second).unwrap();
    assert_ne!(svg1, svg2);
}

#[test]
fn test_render_api_built_sequence() {
    let mut sequence = Sequence::new();
    sequence.add_step(Id::new("Client"), Id::new("Server"), "GET /", None);

    let svg = DiagramBuilder::default().render_svg(&sequence).unwrap();
    assert!(svg.contains(">GET /<"));
}

#[test]
fn test_oversized_settings_render_with_defaults() {
    let builder = DiagramBuilder::default();
    let sequence = builder
        .parse("distance_between_actors = 4294967295\nstep_height = 4294967295\n@step A, B, one\\ntwo\n")
        .unwrap();

    let layout = builder.layout(&sequence).unwrap();
    assert_eq!(layout.width(), 400);
    // 18 + 64 + 25 = 107, rounded up to 112
    assert_eq!(layout.height(), 112);
    assert!(builder.render_svg(&sequence).is_ok());
}

use proptest::prelude::*;

use seqline_core::semantic::{SectionState, SequenceOptions};
use seqline_parser::{error::ErrorCode, parse};

const BOB_AND_MARIA: &str = r"
# Greeting
distance_between_actors = 200

@actors Bob, Maria
@start Greeting, teal
@step Bob, Maria, Hello Maria!
@step Maria, Bob, Hi Bob!\nHow are you?, #aa3300
@end
@step Bob, Bob, thinking
";

#[test]
fn test_parse_full_document() {
    let sequence = parse(BOB_AND_MARIA, SequenceOptions::default()).unwrap();

    let actors: Vec<String> = sequence.actors().iter().map(|id| id.to_string()).collect();
    assert_eq!(actors, ["Bob", "Maria"]);
    assert_eq!(sequence.options().distance(), 200);
    assert_eq!(sequence.steps().len(), 3);
    assert_eq!(sequence.steps()[1].description(), ["Hi Bob!", "How are you?"]);
    assert_eq!(
        sequence.sections()[0].state(),
        SectionState::Closed { first: 0, last: 1 }
    );
    assert_eq!(sequence.steps()[2].section(), None);
}

#[test]
fn test_source_settings_override_options() {
    let options = SequenceOptions::default().with_width("1024px").with_distance(100);
    let sequence = parse("width = 50%\n", options).unwrap();

    assert_eq!(sequence.options().width(), "50%");
    assert_eq!(sequence.options().distance(), 100);
}

#[test]
fn test_error_display_mentions_line() {
    let err = parse("@step A, B\n@step C\n", SequenceOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "error[E101]: not enough values for step at line 2"
    );
}

#[test]
fn test_error_reports_line_in_every_diagnostic() {
    let err = parse("@one\n@two\n@three\n", SequenceOptions::default()).unwrap_err();
    for (index, diagnostic) in err.diagnostics().iter().enumerate() {
        assert_eq!(diagnostic.code(), Some(ErrorCode::E100));
        assert!(diagnostic.message().ends_with(&format!("at line {}", index + 1)));
    }
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "# [a-z ]{0,10}",
        "[a-z_]{1,8} = [a-z0-9%]{0,5}",
        "@actors [A-D](, [A-D]){0,3}",
        "@step [A-D], [A-D](, [a-z ]{0,8})?",
        "@start [a-z]{1,6}",
        Just("@end".to_string()),
        "[a-z ]{0,12}",
    ]
}

proptest! {
    #[test]
    fn prop_well_formed_lines_always_parse(lines in prop::collection::vec(line_strategy(), 0..30)) {
        let source = lines.join("\n");
        let result = parse(&source, SequenceOptions::default());
        prop_assert!(result.is_ok(), "failed on {source:?}: {result:?}");
    }

    #[test]
    fn prop_step_count_matches_step_lines(lines in prop::collection::vec(line_strategy(), 0..30)) {
        let source = lines.join("\n");
        let expected = lines.iter().filter(|line| line.starts_with("@step")).count();
        let sequence = parse(&source, SequenceOptions::default()).unwrap();
        prop_assert_eq!(sequence.steps().len(), expected);
    }
}

//! Applies scanned lines to a [`Sequence`].
//!
//! Every line is applied in order, exactly as the equivalent API calls
//! would be. Errors do not stop the walk: the offending line is skipped,
//! its diagnostic recorded, and the whole parse fails at the end.

use std::str::FromStr;

use log::{debug, trace};
use winnow::stream::{LocatingSlice, Location};

use seqline_core::{
    color::Color,
    identifier::Id,
    semantic::{
        Sequence, SequenceOptions,
        constants::{DEFAULT_DISTANCE, DEFAULT_STEP_HEIGHT, MAX_DISTANCE, MAX_STEP_HEIGHT},
    },
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    lexer::{self, Statement},
    span::{Span, Spanned},
};

const DIRECTIVES_HELP: &str = "expected one of `@actors`, `@start`, `@end`, `@step`";

/// Builds a sequence from source text.
pub(crate) struct Builder<'a> {
    source: &'a str,
    sequence: Sequence,
    diagnostics: DiagnosticCollector,
}

impl<'a> Builder<'a> {
    pub fn new(options: SequenceOptions, source: &'a str) -> Self {
        Self {
            source,
            sequence: Sequence::with_options(options),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Walks every line and returns the sequence, or all collected errors.
    pub fn build(mut self) -> Result<Sequence, ParseError> {
        let mut input = LocatingSlice::new(self.source);
        let mut line = 0;

        while !input.is_empty() {
            line += 1;
            let start = input.current_token_start();
            match lexer::statement(&mut input) {
                Ok(statement) => self.apply(statement, line),
                Err(_) => {
                    lexer::skip_line(&mut input);
                    let end = input.current_token_start();
                    self.diagnostics.emit(
                        Diagnostic::error(format!("unreadable line {line}"))
                            .with_code(ErrorCode::E001)
                            .with_label(Span::new(start..end), ErrorCode::E001.description())
                            .with_help("lines must end with `\\n` or `\\r\\n`"),
                    );
                }
            }
        }

        debug!(lines = line; "Input scanned");
        self.diagnostics.finish().map(|()| self.sequence)
    }

    fn apply(&mut self, statement: Statement<'_>, line: usize) {
        match statement {
            Statement::Blank => {}
            Statement::Ignored(text) => {
                debug!(line, text = *text.inner(); "Ignoring line");
            }
            Statement::Setting { key, value } => self.apply_setting(key, value, line),
            Statement::Directive { name, values } => self.apply_directive(name, values, line),
        }
    }

    fn apply_setting(&mut self, key: Spanned<&str>, value: Spanned<&str>, line: usize) {
        trace!(key = *key.inner(), value = *value.inner(); "Setting");
        match *key.inner() {
            "distance_between_actors" => {
                let distance = self.integer_or_default(&key, &value, DEFAULT_DISTANCE, MAX_DISTANCE, line);
                self.sequence.set_distance(distance);
            }
            "step_height" => {
                let step_height = self.integer_or_default(
                    &key,
                    &value,
                    DEFAULT_STEP_HEIGHT,
                    MAX_STEP_HEIGHT,
                    line,
                );
                self.sequence.set_step_height(step_height);
            }
            "width" => self.sequence.set_width(*value.inner()),
            "height" => self.sequence.set_height(*value.inner()),
            "vertical_section_text" => match bool::from_str(value.inner()) {
                Ok(vertical) => self.sequence.set_vertical_section_text(vertical),
                Err(_) => self.diagnostics.emit(
                    Diagnostic::warning(format!(
                        "invalid boolean `{}` for `vertical_section_text` at line {line}",
                        value.inner()
                    ))
                    .with_label(value.span(), "expected `true` or `false`"),
                ),
            },
            other => debug!(line, key = other; "Ignoring unknown setting"),
        }
    }

    /// Parses an integer setting, falling back to `default` with a warning.
    ///
    /// Values above `max` are treated like invalid ones.
    fn integer_or_default(
        &mut self,
        key: &Spanned<&str>,
        value: &Spanned<&str>,
        default: u32,
        max: u32,
        line: usize,
    ) -> u32 {
        match value.inner().parse::<u32>() {
            Ok(number) if number <= max => number,
            Ok(_) => {
                self.diagnostics.emit(
                    Diagnostic::warning(format!(
                        "`{}` for `{}` at line {line} is above {max}, using {default}",
                        value.inner(),
                        key.inner()
                    ))
                    .with_label(value.span(), "value too large"),
                );
                default
            }
            Err(_) => {
                self.diagnostics.emit(
                    Diagnostic::warning(format!(
                        "invalid integer `{}` for `{}` at line {line}, using {default}",
                        value.inner(),
                        key.inner()
                    ))
                    .with_label(value.span(), "not a non-negative integer"),
                );
                default
            }
        }
    }

    fn apply_directive(&mut self, name: Spanned<&str>, values: Vec<Spanned<String>>, line: usize) {
        match *name.inner() {
            "@actors" => {
                self.sequence
                    .set_actor_order(values.iter().map(|value| Id::new(value.inner())));
            }
            "@start" => {
                let Some(section_name) = values.first() else {
                    self.diagnostics.emit(
                        Diagnostic::error(format!("section needs a name at line {line}"))
                            .with_code(ErrorCode::E102)
                            .with_label(name.span(), "`@start` without a name")
                            .with_help("write `@start name[, color]`"),
                    );
                    return;
                };
                let color = self.color(values.get(1), &name, line);
                self.sequence.open_section(section_name.inner(), color);
            }
            "@end" => self.sequence.close_section(),
            "@step" => {
                let [source, target, rest @ ..] = values.as_slice() else {
                    let directive = values
                        .iter()
                        .fold(name.span(), |span, value| span.union(value.span()));
                    self.diagnostics.emit(
                        Diagnostic::error(format!("not enough values for step at line {line}"))
                            .with_code(ErrorCode::E101)
                            .with_label(directive, "`@step` needs a source and a target")
                            .with_help("write `@step source, target[, description[, color]]`"),
                    );
                    return;
                };
                let description = rest.first().map_or("", |value| value.inner().as_str());
                let color = self.color(rest.get(1), &name, line);
                self.sequence.add_step(
                    Id::new(source.inner()),
                    Id::new(target.inner()),
                    description,
                    color,
                );
            }
            unknown => {
                self.diagnostics.emit(
                    Diagnostic::error(format!("unknown directive `{unknown}` at line {line}"))
                        .with_code(ErrorCode::E100)
                        .with_label(name.span(), ErrorCode::E100.description())
                        .with_help(DIRECTIVES_HELP),
                );
            }
        }
    }

    /// Parses an optional color value.
    ///
    /// An invalid color is a warning; the step or section keeps the default
    /// color.
    fn color(
        &mut self,
        value: Option<&Spanned<String>>,
        directive: &Spanned<&str>,
        line: usize,
    ) -> Option<Color> {
        let value = value?;
        match Color::new(value.inner()) {
            Ok(color) => Some(color),
            Err(err) => {
                self.diagnostics.emit(
                    Diagnostic::warning(format!(
                        "invalid color `{}` at line {line}, using the default color",
                        value.inner()
                    ))
                    .with_code(ErrorCode::E103)
                    .with_label(value.span(), err)
                    .with_secondary_label(directive.span(), "in this directive")
                    .with_help("use a CSS color such as `red` or `#ff0000`"),
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use seqline_core::semantic::{SectionState, Step};

    use super::*;

    fn build(source: &str) -> Result<Sequence, ParseError> {
        Builder::new(SequenceOptions::default(), source).build()
    }

    fn actor_names(sequence: &Sequence) -> Vec<String> {
        sequence.actors().iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_empty_source() {
        let sequence = build("").unwrap();
        assert!(sequence.steps().is_empty());
        assert!(sequence.actors().is_empty());
    }

    #[test]
    fn test_settings() {
        let sequence = build(
            "distance_between_actors = 200\nwidth = 640px\nheight=480px\nstep_height = 40\nvertical_section_text = true\n",
        )
        .unwrap();

        let options = sequence.options();
        assert_eq!(options.distance(), 200);
        assert_eq!(options.width(), "640px");
        assert_eq!(options.height(), "480px");
        assert_eq!(options.step_height(), 40);
        assert!(options.vertical_section_text());
    }

    #[test]
    fn test_invalid_integer_falls_back_to_default() {
        let options = SequenceOptions::default().with_distance(90);
        let sequence = Builder::new(options, "distance_between_actors = wide\n")
            .build()
            .unwrap();
        assert_eq!(sequence.options().distance(), 180);
    }

    #[test]
    fn test_oversized_integers_fall_back_to_default() {
        let sequence = build(
            "distance_between_actors = 4294967295\nstep_height = 4294967295\n@step A, B, one\\ntwo\n",
        )
        .unwrap();

        assert_eq!(sequence.options().distance(), 180);
        assert_eq!(sequence.options().step_height(), 50);
        assert_eq!(sequence.steps()[0].y(), 82.0);
    }

    #[test]
    fn test_largest_accepted_distance() {
        let sequence = build("distance_between_actors = 10000\n").unwrap();
        assert_eq!(sequence.options().distance(), 10_000);
    }

    #[test]
    fn test_unknown_setting_is_ignored() {
        assert!(build("colour = red\n").is_ok());
    }

    #[test]
    fn test_actors_and_steps() {
        let sequence = build("@actors Maria, Bob\n@step Bob, Maria, Hi\n@step Maria, Carl\n").unwrap();

        assert_eq!(actor_names(&sequence), ["Maria", "Bob", "Carl"]);
        assert_eq!(sequence.steps().len(), 2);
        assert_eq!(sequence.steps()[0].description(), ["Hi"]);
        assert_eq!(sequence.steps()[1].description(), [""]);
    }

    #[test]
    fn test_step_color_and_multiline_description() {
        let sequence = build(r"@step A, B, one\ntwo, red").unwrap();
        let step = &sequence.steps()[0];
        assert_eq!(step.description(), ["one", "two"]);
        assert_eq!(step.color(), Color::new("red").unwrap());
    }

    #[test]
    fn test_sections() {
        let sequence = build("@start Login, blue\n@step A, B\n@end\n").unwrap();
        let section = &sequence.sections()[0];
        assert_eq!(section.name(), "Login");
        assert_eq!(section.color(), Color::new("blue").unwrap());
        assert_eq!(section.state(), SectionState::Closed { first: 0, last: 0 });
        assert_eq!(sequence.steps()[0].section(), Some(0));
    }

    #[test]
    fn test_missing_end_is_not_a_parse_error() {
        let sequence = build("@start Open\n@step A, B\n").unwrap();
        assert!(sequence.sections()[0].is_active());
    }

    #[test]
    fn test_start_without_name() {
        let err = build("@start\n").unwrap_err();
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E102));
        assert_eq!(diag.message(), "section needs a name at line 1");
    }

    #[test]
    fn test_step_with_one_value() {
        let err = build("# intro\n@step Bob\n").unwrap_err();
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.message(), "not enough values for step at line 2");
        assert_eq!(diag.labels()[0].span(), Span::new(8..17));
    }

    #[test]
    fn test_unknown_directive() {
        let err = build("@actors A\n\n@stpe A, B\n").unwrap_err();
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(diag.message(), "unknown directive `@stpe` at line 3");
    }

    #[test]
    fn test_invalid_color_falls_back_to_default() {
        let sequence = build("@start S, blurple\n@step A, B, hi, blurple\n@end\n").unwrap();

        assert_eq!(sequence.steps()[0].color(), Color::default());
        assert_eq!(sequence.sections()[0].color(), Color::default());
    }

    #[test]
    fn test_invalid_color_is_a_warning() {
        // Warnings only surface next to a real error
        let err = build("@step A, B, hi, blurple\n@bogus\n").unwrap_err();
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E103));
        assert!(diag.severity().is_warning());
        assert_eq!(diag.labels()[0].span(), Span::new(16..23));
        assert!(diag.labels()[1].is_secondary());
        assert_eq!(err.diagnostics()[1].code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_all_errors_are_collected() {
        let err = build("@bogus\n@step A\n@start\n@step A, B\n").unwrap_err();
        let codes: Vec<Option<ErrorCode>> = err.diagnostics().iter().map(Diagnostic::code).collect();
        assert_eq!(
            codes,
            [Some(ErrorCode::E100), Some(ErrorCode::E101), Some(ErrorCode::E102)]
        );
    }

    #[test]
    fn test_steps_sequence_like_api_calls() {
        let sequence = build("@step A, B\n@step B, A, two\\nlines\n").unwrap();
        let ys: Vec<f32> = sequence.steps().iter().map(Step::y).collect();
        assert_eq!(ys, [68.0, 132.0]);
    }
}

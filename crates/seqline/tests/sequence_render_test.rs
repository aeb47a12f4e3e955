//! End-to-end rendering of sequences built through the model API.

use seqline::{
    DiagramBuilder,
    identifier::Id,
    layout::{Layout, LayoutError},
    semantic::{Sequence, SequenceOptions},
};

fn bob_and_maria() -> Sequence {
    let mut sequence = Sequence::new();
    sequence.set_actor_order([Id::new("Bob"), Id::new("Maria")]);
    sequence.add_step(Id::new("Bob"), Id::new("Maria"), "Hi!", None);
    sequence.open_section("response", None);
    sequence.add_step(
        Id::new("Maria"),
        Id::new("Maria"),
        "*Thinks*\nLong time no see...",
        None,
    );
    sequence.add_step(Id::new("Maria"), Id::new("Bob"), "Fine!", None);
    sequence.close_section();
    sequence
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_bob_and_maria_document() {
    let svg = DiagramBuilder::default()
        .render_svg(&bob_and_maria())
        .expect("Failed to render");

    // Two lifelines and two arrows
    assert_eq!(count(&svg, "<line"), 4);
    assert_eq!(count(&svg, "stroke-dasharray=\"8 8\""), 2);
    // One self-call dot next to the dot marker
    assert_eq!(count(&svg, "<circle"), 2);
    // Background and one section box
    assert_eq!(count(&svg, "<rect"), 2);
    assert_eq!(count(&svg, "class=\"seq-desc\""), 4);

    assert!(svg.contains(">response<"));
    assert!(svg.contains(">*Thinks*<"));
    assert!(svg.contains(">Long time no see...<"));

    // The last description line sits nearest to the dot
    let first_line = svg.find(">*Thinks*<").unwrap();
    let second_line = svg.find(">Long time no see...<").unwrap();
    assert!(second_line < first_line);
}

#[test]
fn test_bob_and_maria_geometry() {
    let layout = Layout::resolve(&bob_and_maria()).unwrap();

    // 18 + 50 + 64 + 50 + 25 = 207, rounded up to 208
    assert_eq!(layout.height(), 208);
    assert!(layout.height() > 50 + 50 + 14);

    let ys: Vec<f32> = layout.steps().iter().map(|step| step.y()).collect();
    assert_eq!(ys, [68.0, 132.0, 182.0]);

    let section = &layout.sections()[0];
    let bounds = section.bounds();
    assert_eq!(bounds.min_x(), 20.0);
    assert_eq!(bounds.min_y(), 93.0);
    assert_eq!(bounds.width(), 360.0);
    assert_eq!(bounds.height(), 104.0);
}

#[test]
fn test_rendering_is_deterministic() {
    let builder = DiagramBuilder::default();
    let sequence = bob_and_maria();

    let first = builder.render_svg(&sequence).unwrap();
    let second = builder.render_svg(&sequence).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unbalanced_section() {
    let builder = DiagramBuilder::default();

    let mut sequence = Sequence::new();
    sequence.open_section("outer", None);
    sequence.add_step(Id::new("A"), Id::new("B"), "", None);
    sequence.open_section("inner", None);
    sequence.add_step(Id::new("B"), Id::new("A"), "", None);
    sequence.close_section();

    let err = builder.layout(&sequence).unwrap_err();
    assert_eq!(err.to_string(), "Layout error: found open section: outer");

    sequence.close_all_sections();
    let layout = builder.layout(&sequence).unwrap();
    assert_eq!(layout.sections().len(), 2);
}

#[test]
fn test_section_closed_before_any_step_is_discarded() {
    let mut sequence = Sequence::new();
    sequence.open_section("S", None);
    sequence.close_section();
    sequence.add_step(Id::new("A"), Id::new("B"), "", None);

    let layout = Layout::resolve(&sequence).unwrap();
    assert!(layout.sections().is_empty());
    assert_eq!(sequence.steps()[0].section(), None);
}

#[test]
fn test_empty_actor_step_position() {
    let mut sequence = Sequence::new();
    sequence.add_step(Id::new("A"), Id::new("B"), "", None);
    sequence.add_step(Id::new("B"), Id::new("C"), "", None);
    sequence.add_step(Id::new(""), Id::new("C"), "", None);

    assert_eq!(
        Layout::resolve(&sequence),
        Err(LayoutError::InvalidStep { position: 3 })
    );
}

#[test]
fn test_reordered_actors_render_left_to_right() {
    let mut sequence = Sequence::new();
    sequence.set_actor_order([Id::new("A"), Id::new("B"), Id::new("C")]);
    sequence.add_step(Id::new("A"), Id::new("C"), "", None);
    sequence.set_actor_order([Id::new("C"), Id::new("A")]);

    let svg = DiagramBuilder::default().render_svg(&sequence).unwrap();
    let c = svg.find(">C<").unwrap();
    let a = svg.find(">A<").unwrap();
    let b = svg.find(">B<").unwrap();
    assert!(c < a && a < b);
}

#[test]
fn test_step_height_change_resequences() {
    let mut sequence = Sequence::with_options(SequenceOptions::default());
    sequence.add_step(Id::new("A"), Id::new("B"), "", None);
    sequence.add_step(Id::new("B"), Id::new("A"), "", None);
    sequence.set_step_height(80);

    let layout = Layout::resolve(&sequence).unwrap();
    let ys: Vec<f32> = layout.steps().iter().map(|step| step.y()).collect();
    assert_eq!(ys, [98.0, 178.0]);
    // 18 + 160 + 40 = 218, rounded up to 224
    assert_eq!(layout.height(), 224);
}

#[test]
fn test_step_without_description_has_no_label() {
    let builder = DiagramBuilder::default();
    let sequence = builder.parse("@step A, B\n").unwrap();
    let svg = builder.render_svg(&sequence).unwrap();

    assert_eq!(count(&svg, "class=\"seq-desc\""), 0);
    // Only the two actor names remain as text
    assert_eq!(count(&svg, "<text"), 2);
}

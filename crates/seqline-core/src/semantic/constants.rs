//! Fixed metrics shared by the sequencer, the layout resolver and the
//! renderer.

/// Left and right canvas margin.
pub const MARGIN: u32 = 20;

/// Default horizontal distance between two actor lanes.
pub const DEFAULT_DISTANCE: u32 = 180;

/// Default vertical space taken by a single-line step.
pub const DEFAULT_STEP_HEIGHT: u32 = 50;

/// Largest lane distance accepted from input files and configuration.
pub const MAX_DISTANCE: u32 = 10_000;

/// Largest base step height accepted from input files and configuration.
pub const MAX_STEP_HEIGHT: u32 = 10_000;

/// Font size of actor names.
pub const ACTOR_FONT_SIZE: u32 = 16;

/// Lifeline dash length; also the granularity of the canvas height.
pub const DASH_ARRAY_SIZE: u32 = ACTOR_FONT_SIZE / 2;

/// Distance between a step line and its nearest description line.
pub const DESCRIPTION_OFFSET: u32 = 7;

/// Multiplier applied to [`DESCRIPTION_OFFSET`] for each extra description line.
pub const DESCRIPTION_OFFSET_FACTOR: u32 = 2;

/// Initial height of a section box before any step is folded in.
pub const SECTION_HEIGHT_MARGIN: f32 = -10.0;

/// Y of the actor name baseline, which is also where step sequencing starts.
pub const HEADER_HEIGHT: u32 = ACTOR_FONT_SIZE + 2;

/// Extra height taken by a description of `line_count` lines.
pub fn extra_description_height(line_count: usize) -> u32 {
    let extra_lines = u32::try_from(line_count.saturating_sub(1)).unwrap_or(u32::MAX);
    (DESCRIPTION_OFFSET * DESCRIPTION_OFFSET_FACTOR).saturating_mul(extra_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_array_size() {
        assert_eq!(DASH_ARRAY_SIZE, 8);
    }

    #[test]
    fn test_extra_description_height() {
        assert_eq!(extra_description_height(0), 0);
        assert_eq!(extra_description_height(1), 0);
        assert_eq!(extra_description_height(2), 14);
        assert_eq!(extra_description_height(4), 42);
    }

    #[test]
    fn test_extra_description_height_saturates() {
        assert_eq!(extra_description_height(usize::MAX), u32::MAX);
    }
}

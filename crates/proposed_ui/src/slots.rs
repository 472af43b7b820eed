//! Slot resolution: padding and offsets that keep decorations clear of the text area.
//!
//! `start`/`end` decorations overlay the control's content box, so the control reserves padding
//! for them: either an exact inline size derived from the measured decoration width, or a static
//! per-size class while the width is unknown. `prefix`/`suffix` decorations live in their own
//! layout boxes beside the control and only remove the static padding on their side.

use std::fmt;

use crate::class_list::ClassList;
use crate::variant::ControlSize;

const OFFSET_BASE: &str = "absolute top-1/2 -translate-y-1/2 z-10 pointer-events-none";

type PaddingKey = (ControlSize, bool, bool);

// (size, has_start, has_end) -> (left, right). `Icon` has no row: icon controls stay square.
const STATIC_PADDING_ROWS: &[(PaddingKey, (&str, &str))] = &[
    ((ControlSize::Xs, false, false), ("pl-2", "pr-2")),
    ((ControlSize::Xs, true, false), ("pl-6", "pr-2")),
    ((ControlSize::Xs, false, true), ("pl-2", "pr-6")),
    ((ControlSize::Xs, true, true), ("pl-6", "pr-6")),
    ((ControlSize::Sm, false, false), ("pl-3", "pr-3")),
    ((ControlSize::Sm, true, false), ("pl-7", "pr-3")),
    ((ControlSize::Sm, false, true), ("pl-3", "pr-7")),
    ((ControlSize::Sm, true, true), ("pl-7", "pr-7")),
    ((ControlSize::Default, false, false), ("pl-4", "pr-4")),
    ((ControlSize::Default, true, false), ("pl-8", "pr-4")),
    ((ControlSize::Default, false, true), ("pl-4", "pr-8")),
    ((ControlSize::Default, true, true), ("pl-8", "pr-8")),
    ((ControlSize::Lg, false, false), ("pl-6", "pr-6")),
    ((ControlSize::Lg, true, false), ("pl-9", "pr-6")),
    ((ControlSize::Lg, false, true), ("pl-6", "pr-9")),
    ((ControlSize::Lg, true, true), ("pl-9", "pr-9")),
];

fn static_padding(key: PaddingKey) -> (&'static str, &'static str) {
    STATIC_PADDING_ROWS
        .iter()
        .find(|(row, _)| *row == key)
        .map(|(_, padding)| *padding)
        .unwrap_or(("", ""))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which edge an absolutely positioned decoration hugs.
pub enum SlotSide {
    /// Leading edge (`start`).
    Start,
    /// Trailing edge (`end` and the loading indicator).
    End,
}

impl SlotSide {
    /// Stable token used for `data-slot` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Absolute-position classes for a decoration on `side`; the inset grows with `size`.
pub fn offset_class(size: ControlSize, side: SlotSide) -> ClassList {
    let inset = match (size, side) {
        (ControlSize::Lg, SlotSide::Start) => "left-3",
        (ControlSize::Lg, SlotSide::End) => "right-3",
        (_, SlotSide::Start) => "left-2",
        (_, SlotSide::End) => "right-2",
    };
    let mut class = ClassList::from(OFFSET_BASE);
    class.push(inset);
    class
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which decorations a control carries, plus any measured widths.
pub struct SlotRequest {
    /// A `start` decoration is present.
    pub start: bool,
    /// An `end` decoration is present.
    pub end: bool,
    /// The control is loading; reserves the end side.
    pub loading: bool,
    /// A `prefix` element sits outside the leading edge.
    pub prefix: bool,
    /// A `suffix` element sits outside the trailing edge.
    pub suffix: bool,
    /// Control size after kind normalization.
    pub size: ControlSize,
    /// Measured width of the start decoration.
    pub start_width: Option<u32>,
    /// Measured width of the end decoration.
    pub end_width: Option<u32>,
}

impl SlotRequest {
    /// Empty request for `size`.
    pub fn new(size: ControlSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// `end` or `loading`.
    pub fn effective_end(&self) -> bool {
        self.end || self.loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Exact padding for measured sides, in pixels.
pub struct PaddingStyle {
    /// Leading padding.
    pub left: Option<u32>,
    /// Trailing padding.
    pub right: Option<u32>,
}

impl PaddingStyle {
    /// Returns `true` when neither side carries an exact size.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for PaddingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (property, value) in [("padding-left", self.left), ("padding-right", self.right)] {
            if let Some(value) = value {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{property}: {value}px;")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved padding and decoration offsets for one control.
pub struct SlotLayout {
    /// A start decoration is rendered.
    pub has_start: bool,
    /// An end decoration or loading indicator is rendered.
    pub has_end: bool,
    /// Static padding classes for sides without a measured width.
    pub padding_class: ClassList,
    /// Exact inline padding for measured sides.
    pub padding_style: Option<PaddingStyle>,
    /// Offset classes for the start decoration.
    pub start_offset_class: ClassList,
    /// Offset classes for the end decoration and loading indicator.
    pub end_offset_class: ClassList,
}

fn measured(present: bool, width: Option<u32>, gutter_px: u32) -> Option<u32> {
    width
        .filter(|width| present && *width > 0)
        .map(|width| width + gutter_px)
}

/// Resolves padding and decoration offsets.
///
/// A measured side gets `width + gutter_px` as inline padding and loses its static class; every
/// other side keeps the static row for `(size, has_start, has_end)` unless a prefix (left) or
/// suffix (right) removes it.
pub fn resolve_slots(request: &SlotRequest, gutter_px: u32) -> SlotLayout {
    let has_start = request.start;
    let has_end = request.effective_end();

    let left = measured(has_start, request.start_width, gutter_px);
    let right = measured(has_end, request.end_width, gutter_px);

    let (static_left, static_right) = static_padding((request.size, has_start, has_end));
    let mut padding_class = ClassList::new();
    padding_class
        .push_if(left.is_none() && !request.prefix, static_left)
        .push_if(right.is_none() && !request.suffix, static_right);

    let padding_style = PaddingStyle { left, right };

    SlotLayout {
        has_start,
        has_end,
        padding_class,
        padding_style: (!padding_style.is_empty()).then_some(padding_style),
        start_offset_class: offset_class(request.size, SlotSide::Start),
        end_offset_class: offset_class(request.size, SlotSide::End),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the end slot renders.
pub enum EndSlot {
    /// Nothing.
    Empty,
    /// The caller's `end` decoration.
    Decoration,
    /// The loading indicator; replaces any `end` decoration.
    Loading,
}

impl EndSlot {
    /// Loading always wins over a supplied `end` decoration.
    pub fn resolve(has_end: bool, loading: bool) -> Self {
        match (has_end, loading) {
            (_, true) => Self::Loading,
            (true, false) => Self::Decoration,
            (false, false) => Self::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::DEFAULT_GUTTER_PX;

    fn classes(layout: &SlotLayout) -> String {
        layout.padding_class.to_string()
    }

    #[test]
    fn end_side_reserved_iff_end_or_loading() {
        for start in [false, true] {
            for end in [false, true] {
                for loading in [false, true] {
                    let request = SlotRequest {
                        start,
                        end,
                        loading,
                        ..SlotRequest::new(ControlSize::Default)
                    };
                    let layout = resolve_slots(&request, DEFAULT_GUTTER_PX);
                    assert_eq!(layout.has_end, end || loading);
                    assert_eq!(layout.padding_class.contains("pr-8"), end || loading);
                    assert_eq!(layout.padding_class.contains("pl-8"), start);
                }
            }
        }
    }

    #[test]
    fn static_rows_scale_with_size() {
        let request = |size| SlotRequest {
            start: true,
            ..SlotRequest::new(size)
        };

        assert_eq!(
            classes(&resolve_slots(&request(ControlSize::Xs), 16)),
            "pl-6 pr-2"
        );
        assert_eq!(
            classes(&resolve_slots(&request(ControlSize::Sm), 16)),
            "pl-7 pr-3"
        );
        assert_eq!(
            classes(&resolve_slots(&request(ControlSize::Lg), 16)),
            "pl-9 pr-6"
        );
    }

    #[test]
    fn icon_size_never_reserves_padding() {
        let request = SlotRequest {
            start: true,
            end: true,
            loading: true,
            ..SlotRequest::new(ControlSize::Icon)
        };
        let layout = resolve_slots(&request, 16);
        assert!(layout.padding_class.is_empty());
        assert_eq!(layout.padding_style, None);
    }

    #[test]
    fn measured_width_overrides_only_its_side() {
        let request = SlotRequest {
            start: true,
            end: true,
            end_width: Some(32),
            ..SlotRequest::new(ControlSize::Default)
        };
        let layout = resolve_slots(&request, DEFAULT_GUTTER_PX);

        assert_eq!(classes(&layout), "pl-8");
        assert_eq!(
            layout.padding_style,
            Some(PaddingStyle {
                left: None,
                right: Some(48)
            })
        );
        assert_eq!(
            layout.padding_style.map(|style| style.to_string()),
            Some("padding-right: 48px;".to_string())
        );
    }

    #[test]
    fn measured_padding_exceeds_gutter_by_width() {
        for width in [1, 15, 36, 120] {
            let request = SlotRequest {
                start: true,
                start_width: Some(width),
                ..SlotRequest::new(ControlSize::Sm)
            };
            let left = resolve_slots(&request, DEFAULT_GUTTER_PX)
                .padding_style
                .and_then(|style| style.left)
                .expect("measured left padding");
            assert!(left > DEFAULT_GUTTER_PX);
            assert_eq!(left, width + DEFAULT_GUTTER_PX);
        }
    }

    #[test]
    fn widths_for_absent_or_unlaid_decorations_are_ignored() {
        let request = SlotRequest {
            start: false,
            start_width: Some(40),
            end: true,
            end_width: Some(0),
            ..SlotRequest::new(ControlSize::Default)
        };
        let layout = resolve_slots(&request, 16);
        assert_eq!(classes(&layout), "pl-4 pr-8");
        assert_eq!(layout.padding_style, None);
    }

    #[test]
    fn prefix_and_suffix_remove_static_padding_only() {
        let request = SlotRequest {
            start: true,
            end: true,
            prefix: true,
            suffix: true,
            ..SlotRequest::new(ControlSize::Default)
        };
        assert!(resolve_slots(&request, 16).padding_class.is_empty());

        let measured = SlotRequest {
            start_width: Some(20),
            ..request
        };
        let layout = resolve_slots(&measured, 16);
        assert!(layout.padding_class.is_empty());
        assert_eq!(
            layout.padding_style.map(|style| style.to_string()),
            Some("padding-left: 36px;".to_string())
        );

        let suffix_only = SlotRequest {
            suffix: true,
            ..SlotRequest::new(ControlSize::Lg)
        };
        assert_eq!(classes(&resolve_slots(&suffix_only, 16)), "pl-6");
    }

    #[test]
    fn both_measured_sides_render_in_fixed_order() {
        let request = SlotRequest {
            start: true,
            loading: true,
            start_width: Some(16),
            end_width: Some(15),
            ..SlotRequest::new(ControlSize::Default)
        };
        let layout = resolve_slots(&request, 16);
        assert!(layout.padding_class.is_empty());
        assert_eq!(
            layout.padding_style.map(|style| style.to_string()),
            Some("padding-left: 32px; padding-right: 31px;".to_string())
        );
    }

    #[test]
    fn offsets_widen_for_large_controls() {
        assert_eq!(
            offset_class(ControlSize::Default, SlotSide::Start).to_string(),
            format!("{OFFSET_BASE} left-2")
        );
        assert!(offset_class(ControlSize::Lg, SlotSide::End).contains("right-3"));
        assert!(offset_class(ControlSize::Icon, SlotSide::End).contains("right-2"));
    }

    #[test]
    fn loading_always_wins_the_end_slot() {
        assert_eq!(EndSlot::resolve(true, true), EndSlot::Loading);
        assert_eq!(EndSlot::resolve(false, true), EndSlot::Loading);
        assert_eq!(EndSlot::resolve(true, false), EndSlot::Decoration);
        assert_eq!(EndSlot::resolve(false, false), EndSlot::Empty);
    }
}

//! Merges variant and slot resolution into the final attributes of one control.

use crate::class_list::ClassList;
use crate::config::StyleConfig;
use crate::group::AttachmentPosition;
use crate::slots::{resolve_slots, SlotLayout, SlotRequest};
use crate::variant::{resolve_variant, ControlKind, ControlSize, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Everything that decides how one control is styled on a render pass.
pub struct ControlRequest {
    /// Control family.
    pub kind: ControlKind,
    /// Requested visual variant.
    pub variant: Variant,
    /// Requested size.
    pub size: ControlSize,
    /// Position inherited from an enclosing group.
    pub position: AttachmentPosition,
    /// Decorations and measured widths. `slots.size` is overwritten with the normalized size.
    pub slots: SlotRequest,
    /// Caller class hook, appended last.
    pub layout_class: Option<&'static str>,
}

impl ControlRequest {
    /// Request with default variant/size and no decorations.
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            variant: kind.default_variant(),
            size: ControlSize::Default,
            position: AttachmentPosition::None,
            slots: SlotRequest::default(),
            layout_class: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Final attributes for one control.
pub struct ControlStyle {
    /// Normalized variant actually rendered.
    pub variant: Variant,
    /// Normalized size actually rendered.
    pub size: ControlSize,
    /// Position after merging the control's own prefix/suffix attachments.
    pub position: AttachmentPosition,
    /// `class` attribute of the control element.
    pub class: ClassList,
    /// `style` attribute of the control element, when a side is measured.
    pub style: Option<String>,
    /// Resolved slot layout.
    pub slots: SlotLayout,
}

/// Resolves the attributes of one control. Pure; identical inputs give identical output.
pub fn resolve_control(request: &ControlRequest, config: &StyleConfig) -> ControlStyle {
    let kind = request.kind;
    let variant = kind.normalize_variant(request.variant);
    let size = kind.normalize_size(request.size);
    let position = request
        .position
        .with_neighbors(request.slots.prefix, request.slots.suffix);

    let slots = resolve_slots(
        &SlotRequest {
            size,
            ..request.slots
        },
        config.gutter_px,
    );

    let mut class = resolve_variant(kind, variant, size, position);
    class
        .extend(&slots.padding_class)
        .push_opt(request.layout_class);

    ControlStyle {
        variant,
        size,
        position,
        class,
        style: slots.padding_style.map(|style| style.to_string()),
        slots,
    }
}

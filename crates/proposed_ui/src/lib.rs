//! Proposed component library: buttons, inputs, selects, and attached groups.
//!
//! Styling is decided by three pure resolvers that never touch the DOM:
//! [`resolve_variant`] maps kind, variant, size, and attachment position to utility classes,
//! [`resolve_slots`] reserves padding and positions for `start`/`end` decorations, and
//! [`resolve_group`] tags the members of an attached group. The Leptos components in this crate
//! feed their props and measured decoration widths through those resolvers on every render.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_list;
mod components;
mod compose;
mod config;
mod context;
mod group;
mod measure;
mod slots;
mod variant;

pub use class_list::ClassList;
pub use components::{Button, Group, Input, InputStart, Label, Select, SelectOption, Spinner};
pub use compose::{resolve_control, ControlRequest, ControlStyle};
pub use config::{provide_style_config, use_style_config, ConfigError, StyleConfig, DEFAULT_GUTTER_PX};
pub use context::{try_use_input_slots, use_input_slots, InputSlots, SlotCell};
pub use group::{resolve_group, Attached, AttachmentPosition, GroupLayout};
pub use measure::MeasureState;
pub use slots::{offset_class, resolve_slots, EndSlot, PaddingStyle, SlotLayout, SlotRequest, SlotSide};
pub use variant::{
    resolve_variant, ButtonVariant, ControlKind, ControlSize, FieldVariant, StyleFragment, Variant,
};

/// Convenience imports for applications composing the component set.
pub mod prelude {
    pub use crate::{
        provide_style_config, Attached, AttachmentPosition, Button, ButtonVariant, ControlSize,
        FieldVariant, Group, Input, InputStart, Label, Select, SelectOption, Spinner, StyleConfig,
    };
}

//! Group layout resolution: position tags for attached sibling controls.

use std::rc::Rc;

use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};

use crate::class_list::ClassList;
use crate::config::StyleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Where a control sits inside an attached run of siblings.
pub enum AttachmentPosition {
    /// Not attached; all corners rounded.
    None,
    /// Leading control; its trailing corners are shared with the next sibling.
    First,
    /// Inner control; both sides are shared.
    Middle,
    /// Trailing control; its leading corners are shared with the previous sibling.
    Last,
}

impl Default for AttachmentPosition {
    fn default() -> Self {
        Self::None
    }
}

impl AttachmentPosition {
    /// Stable token used for `data-ui-position` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::First => "first",
            Self::Middle => "middle",
            Self::Last => "last",
        }
    }

    /// Returns `true` when the leading edge touches a neighbor.
    pub const fn leading_attached(self) -> bool {
        matches!(self, Self::Middle | Self::Last)
    }

    /// Returns `true` when the trailing edge touches a neighbor.
    pub const fn trailing_attached(self) -> bool {
        matches!(self, Self::First | Self::Middle)
    }

    /// Builds a position from which edges touch a neighbor.
    pub const fn from_edges(leading: bool, trailing: bool) -> Self {
        match (leading, trailing) {
            (false, false) => Self::None,
            (false, true) => Self::First,
            (true, true) => Self::Middle,
            (true, false) => Self::Last,
        }
    }

    /// Adds a control's own leading/trailing attachments (prefix, suffix) to an inherited position.
    pub const fn with_neighbors(self, leading: bool, trailing: bool) -> Self {
        Self::from_edges(
            self.leading_attached() || leading,
            self.trailing_attached() || trailing,
        )
    }
}

/// Tags each child with its position in the group.
///
/// Unattached groups tag every child [`AttachmentPosition::None`]. Attached groups tag the first
/// child `First`, the last `Last`, and everything between `Middle`; a single attached child has
/// nothing to attach to and stays `None`.
pub fn resolve_group<T>(
    children: impl IntoIterator<Item = T>,
    attached: bool,
) -> Vec<(T, AttachmentPosition)> {
    let children: Vec<T> = children.into_iter().collect();
    let count = children.len();
    children
        .into_iter()
        .enumerate()
        .map(|(index, child)| {
            let position = if !attached || count < 2 {
                AttachmentPosition::None
            } else if index == 0 {
                AttachmentPosition::First
            } else if index == count - 1 {
                AttachmentPosition::Last
            } else {
                AttachmentPosition::Middle
            };
            (child, position)
        })
        .collect()
}

/// Container classes for a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLayout {
    /// Outer row holding the group prefix, the run, and the group suffix.
    pub container_class: ClassList,
    /// Inner row holding the tagged children.
    pub run_class: ClassList,
}

impl GroupLayout {
    /// Resolves container classes; attached runs drop the inter-child gap.
    pub fn new(attached: bool, config: &StyleConfig) -> Self {
        let mut container_class = ClassList::from("flex items-end w-full");
        container_class.push(&config.group_gap_class);

        let mut run_class = ClassList::from("flex items-center w-full");
        run_class.push_if(!attached, &config.group_gap_class);

        Self {
            container_class,
            run_class,
        }
    }
}

/// Render function for a group member; receives the position resolved for it.
#[derive(Clone)]
pub struct Attached(Rc<dyn Fn(AttachmentPosition) -> View>);

impl Attached {
    /// Wraps a render function.
    pub fn new<F, IV>(render: F) -> Self
    where
        F: Fn(AttachmentPosition) -> IV + 'static,
        IV: IntoView,
    {
        Self(Rc::new(move |position| render(position).into_view()))
    }

    /// Renders the member at `position`.
    pub fn render(&self, position: AttachmentPosition) -> View {
        (self.0)(position)
    }
}

impl<F, IV> From<F> for Attached
where
    F: Fn(AttachmentPosition) -> IV + 'static,
    IV: IntoView,
{
    fn from(render: F) -> Self {
        Self::new(render)
    }
}

impl std::fmt::Debug for Attached {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Attached").finish()
    }
}

//! Composition context shared between an `Input` and its decoration anchors.

use leptos::*;
use wasm_bindgen::{closure::Closure, JsCast};

use crate::measure::MeasureState;
use crate::slots::SlotSide;
use crate::variant::ControlSize;

#[derive(Debug, Clone, Copy)]
/// Presence and measured width of one decoration side of an `Input`.
pub struct SlotCell {
    mounted: RwSignal<u32>,
    width: RwSignal<MeasureState>,
}

impl SlotCell {
    /// Creates an empty cell owned by the current reactive scope.
    pub fn new() -> Self {
        Self {
            mounted: create_rw_signal(0),
            width: create_rw_signal(MeasureState::Unmeasured),
        }
    }

    /// Registers a mounted decoration for this side.
    ///
    /// Returns `false`, leaving the cell untouched, when another decoration already holds the
    /// side; the caller must not render.
    pub fn mount(&self) -> bool {
        if self.mounted.get_untracked() > 0 {
            return false;
        }
        self.mounted.set(1);
        true
    }

    /// Unregisters a decoration previously passed to [`SlotCell::mount`].
    pub fn unmount(&self) {
        self.mounted.update(|count| *count = count.saturating_sub(1));
    }

    /// Whether any decoration is mounted on this side. Tracked.
    pub fn is_present(&self) -> bool {
        self.mounted.get() > 0
    }

    /// Measured width, if any. Tracked.
    pub fn width(&self) -> Option<u32> {
        self.width.get().width()
    }

    /// Records a DOM width; notifies subscribers only when the state changed.
    ///
    /// Returns whether subscribers were notified.
    pub fn observe(&self, width: u32) -> bool {
        let mut state = self.width.get_untracked();
        let changed = state.observe(width);
        if changed {
            self.width.set(state);
        }
        changed
    }
}

impl Default for SlotCell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
/// Context an `Input` provides to its decoration anchors.
pub struct InputSlots {
    /// Normalized input size; decides offset insets.
    pub size: ControlSize,
    /// Loading flag of the owning input.
    pub loading: Signal<bool>,
    /// Leading decoration side.
    pub start: SlotCell,
    /// Trailing decoration side.
    pub end: SlotCell,
}

impl InputSlots {
    /// Creates fresh cells for one input instance.
    pub fn new(size: ControlSize, loading: Signal<bool>) -> Self {
        Self {
            size,
            loading,
            start: SlotCell::new(),
            end: SlotCell::new(),
        }
    }

    /// Cell for the decoration on `side`.
    pub fn cell(&self, side: SlotSide) -> SlotCell {
        match side {
            SlotSide::Start => self.start,
            SlotSide::End => self.end,
        }
    }
}

/// Reads the enclosing input's slot context.
///
/// # Panics
///
/// Panics when called outside an `Input`: an anchor without its input cannot reserve padding and
/// would render overlapping the text.
pub fn use_input_slots() -> InputSlots {
    use_context::<InputSlots>().expect("InputSlots not provided: decoration used outside an Input")
}

/// Reads the enclosing input's slot context when there is one.
pub fn try_use_input_slots() -> Option<InputSlots> {
    use_context::<InputSlots>()
}

fn rendered_width(node_ref: NodeRef<html::Span>) -> Option<u32> {
    node_ref.get_untracked().map(|span| {
        let element: &web_sys::HtmlElement = &span;
        u32::try_from(element.offset_width()).unwrap_or(0)
    })
}

/// Reads the width of `node_ref` after the next paint and feeds it to `cell`.
fn measure_after_paint(node_ref: NodeRef<html::Span>, cell: SlotCell) {
    request_animation_frame(move || {
        if let Some(width) = rendered_width(node_ref) {
            cell.observe(width);
        }
    });
}

/// Keeps `cell` in sync with the rendered width of `node_ref` until the owning scope is disposed.
///
/// The first width is read after the next paint; later size changes (late fonts, reactive
/// content, a hidden ancestor becoming visible) arrive through a `ResizeObserver`.
pub(crate) fn track_width(node_ref: NodeRef<html::Span>, cell: SlotCell) {
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if let Some(width) = rendered_width(node_ref) {
            cell.observe(width);
        }
    });
    let observer = match web_sys::ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
        Ok(observer) => Some(observer),
        Err(_) => {
            logging::debug_warn!("ResizeObserver unavailable; decoration width is read once");
            None
        }
    };

    let attach = observer.clone();
    node_ref.on_load(move |span| {
        measure_after_paint(node_ref, cell);
        if let Some(observer) = attach.as_ref() {
            let element: &web_sys::Element = &span;
            observer.observe(element);
        }
    });

    on_cleanup(move || {
        if let Some(observer) = observer {
            observer.disconnect();
        }
        drop(on_resize);
    });
}

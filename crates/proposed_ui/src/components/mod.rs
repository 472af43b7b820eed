//! Leptos widgets: buttons, inputs, selects, and attached groups.

use leptos::ev::{Event, MouseEvent};
use leptos::*;

use crate::class_list::ClassList;
use crate::compose::{resolve_control, ControlRequest, ControlStyle};
use crate::config::use_style_config;
use crate::context::{track_width, use_input_slots, InputSlots};
use crate::group::{resolve_group, Attached, AttachmentPosition, GroupLayout};
use crate::slots::{offset_class, EndSlot, SlotRequest, SlotSide};
use crate::variant::{ButtonVariant, ControlKind, ControlSize, FieldVariant};

mod button;
mod feedback;
mod group;
mod input;
mod select;

pub use button::Button;
pub use feedback::{Label, Spinner};
pub use group::Group;
pub use input::{Input, InputStart};
pub use select::{Select, SelectOption};

/// Renders the caller's loading content, or the default spinner.
fn loading_view(render: Option<Callback<bool, View>>) -> View {
    match render {
        Some(render) => render.call(true),
        None => view! { <Spinner /> }.into_view(),
    }
}

/// Content of a control's end slot. While loading, `end` is never rendered.
pub(crate) fn end_slot_view(
    end: Option<&ViewFn>,
    loading: bool,
    render_loading: Option<Callback<bool, View>>,
) -> View {
    match EndSlot::resolve(end.is_some(), loading) {
        EndSlot::Empty => ().into_view(),
        EndSlot::Decoration => end.map(ViewFn::run).unwrap_or_else(|| ().into_view()),
        EndSlot::Loading => loading_view(render_loading),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    struct Recorded {
        end_runs: Rc<Cell<u32>>,
        loading_calls: Rc<Cell<Option<bool>>>,
    }

    fn counted_end(recorded: &Recorded) -> ViewFn {
        let runs = recorded.end_runs.clone();
        ViewFn::from(move || runs.set(runs.get() + 1))
    }

    fn counted_loading(recorded: &Recorded) -> Callback<bool, View> {
        let calls = recorded.loading_calls.clone();
        Callback::new(move |loading: bool| {
            calls.set(Some(loading));
            ().into_view()
        })
    }

    fn recorded() -> Recorded {
        Recorded {
            end_runs: Rc::new(Cell::new(0)),
            loading_calls: Rc::new(Cell::new(None)),
        }
    }

    #[test]
    fn loading_replaces_the_end_decoration() {
        let _ = create_runtime();
        let recorded = recorded();
        let end = counted_end(&recorded);

        end_slot_view(Some(&end), true, Some(counted_loading(&recorded)));

        assert_eq!(recorded.end_runs.get(), 0);
        assert_eq!(recorded.loading_calls.get(), Some(true));
    }

    #[test]
    fn idle_control_renders_its_end_decoration() {
        let _ = create_runtime();
        let recorded = recorded();
        let end = counted_end(&recorded);

        end_slot_view(Some(&end), false, Some(counted_loading(&recorded)));

        assert_eq!(recorded.end_runs.get(), 1);
        assert_eq!(recorded.loading_calls.get(), None);
    }

    #[test]
    fn loading_without_end_still_renders_the_indicator() {
        let _ = create_runtime();
        let recorded = recorded();

        end_slot_view(None, true, Some(counted_loading(&recorded)));
        assert_eq!(recorded.loading_calls.get(), Some(true));

        let idle = self::recorded();
        end_slot_view(None, false, Some(counted_loading(&idle)));
        assert_eq!(idle.loading_calls.get(), None);
    }
}

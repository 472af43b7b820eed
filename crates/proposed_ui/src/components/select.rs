use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One entry of a [`Select`].
pub struct SelectOption {
    /// Visible text.
    pub label: String,
    /// Submitted value; unique within one option list.
    pub value: String,
}

impl SelectOption {
    /// Creates an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Drops options whose value already appeared earlier in the list.
    pub fn dedup_by_value(options: Vec<Self>) -> Vec<Self> {
        let mut unique: Vec<Self> = Vec::with_capacity(options.len());
        for option in options {
            if unique.iter().any(|kept| kept.value == option.value) {
                logging::warn!("select option value `{}` is duplicated; keeping the first", option.value);
                continue;
            }
            unique.push(option);
        }
        unique
    }
}

#[component]
/// Native select with variant styling and a chevron in the end slot.
///
/// Duplicate option values keep their first entry. An empty option list renders only the
/// placeholder.
pub fn Select(
    #[prop(optional, into)] options: Vec<SelectOption>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = FieldVariant::Default)] variant: FieldVariant,
    #[prop(default = ControlSize::Default)] size: ControlSize,
    /// Position inside an attached group; supplied by the group's render function.
    #[prop(default = AttachmentPosition::None)]
    attachment: AttachmentPosition,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<Event>>,
) -> impl IntoView {
    let config = use_style_config();
    let style = resolve_control(
        &ControlRequest {
            variant: variant.into(),
            size,
            position: attachment,
            slots: SlotRequest {
                end: true,
                ..SlotRequest::default()
            },
            layout_class,
            ..ControlRequest::new(ControlKind::Select)
        },
        &config,
    );
    let end_class = style.slots.end_offset_class.to_string();
    let value = Signal::derive(move || value.get());

    let options = SelectOption::dedup_by_value(options)
        .into_iter()
        .map(|option| {
            let selected_value = option.value.clone();
            view! {
                <option value=option.value selected=move || value.get() == selected_value>
                    {option.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="relative flex items-center w-full" data-ui-kind="select-root">
            <select
                class=style.class.to_string()
                id=id
                name=name
                aria-label=aria_label
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-slot="select"
                data-ui-kind=ControlKind::Select.token()
                data-ui-variant=style.variant.token()
                data-ui-size=style.size.token()
                data-ui-position=style.position.token()
                on:change=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(ev);
                    }
                }
            >
                {placeholder.map(|placeholder| {
                    view! {
                        <option value="" disabled=true hidden=true selected=move || value.get().is_empty()>
                            {placeholder}
                        </option>
                    }
                })}
                {options}
            </select>
            <span class=end_class data-slot="end" aria-hidden="true">
                <svg
                    width="15"
                    height="15"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <path d="m6 9 6 6 6-6"></path>
                </svg>
            </span>
        </div>
    }
}

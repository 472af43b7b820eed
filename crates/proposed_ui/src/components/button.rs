use super::*;

#[component]
/// Button with variant styling, `start`/`end` decorations, and a loading state.
///
/// `start` and `end` overlay the padding box at fixed insets; padding is reserved for them from
/// the static per-size table. While `loading` is set the end slot shows the loading indicator
/// instead of `end`.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ControlSize::Default)] size: ControlSize,
    /// Position inside an attached group; supplied by the group's render function.
    #[prop(default = AttachmentPosition::None)]
    attachment: AttachmentPosition,
    #[prop(optional, into)] start: Option<ViewFn>,
    #[prop(optional, into)] end: Option<ViewFn>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    /// Replaces the default spinner while loading.
    #[prop(optional)]
    render_loading: Option<Callback<bool, View>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let config = use_style_config();
    let has_start = start.is_some();
    let has_end = end.is_some();

    let style = create_memo(move |_| {
        resolve_control(
            &ControlRequest {
                variant: variant.into(),
                size,
                position: attachment,
                slots: SlotRequest {
                    start: has_start,
                    end: has_end,
                    loading: loading.get(),
                    ..SlotRequest::default()
                },
                layout_class,
                ..ControlRequest::new(ControlKind::Button)
            },
            &config,
        )
    });
    let slot_class = move |side: SlotSide| {
        let style: ControlStyle = style.get();
        match side {
            SlotSide::Start => style.slots.start_offset_class.to_string(),
            SlotSide::End => style.slots.end_offset_class.to_string(),
        }
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=move || style.with(|style| style.class.to_string())
            aria-label=aria_label
            title=title
            disabled=move || disabled.get()
            aria-busy=move || bool_token(loading.get())
            data-slot="button"
            data-ui-kind=ControlKind::Button.token()
            data-ui-variant=variant.token()
            data-ui-size=move || style.with(|style| style.size.token())
            data-ui-position=attachment.token()
            data-ui-loading=move || bool_token(loading.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {start.map(|start| {
                view! {
                    <span class=move || slot_class(SlotSide::Start) data-slot=SlotSide::Start.token()>
                        {start.run()}
                    </span>
                }
            })}
            {children()}
            {move || {
                let loading = loading.get();
                (has_end || loading).then(|| {
                    view! {
                        <span class=move || slot_class(SlotSide::End) data-slot=SlotSide::End.token()>
                            {end_slot_view(end.as_ref(), loading, render_loading)}
                        </span>
                    }
                })
            }}
        </button>
    }
}

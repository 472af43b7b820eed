use super::*;

#[component]
/// Text input with overlaid `start`/`end` decorations and attached `prefix`/`suffix` elements.
///
/// Decorations are rendered twice in effect: the first paint reserves padding from the static
/// table, then each decoration reports its rendered width and the input re-resolves its padding
/// as `width + gutter`. `prefix` and `suffix` render outside the input and share its border; they
/// receive `First` and `Last` so attached buttons square the shared corners.
pub fn Input(
    #[prop(default = FieldVariant::Default)] variant: FieldVariant,
    #[prop(default = ControlSize::Default)] size: ControlSize,
    /// Position inside an attached group; supplied by the group's render function.
    #[prop(default = AttachmentPosition::None)]
    attachment: AttachmentPosition,
    #[prop(optional, into)] start: Option<ViewFn>,
    #[prop(optional, into)] end: Option<ViewFn>,
    #[prop(optional, into)] prefix: Option<Attached>,
    #[prop(optional, into)] suffix: Option<Attached>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    /// Replaces the default spinner while loading.
    #[prop(optional)]
    render_loading: Option<Callback<bool, View>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Native `type`; reactive so a reveal toggle keeps the typed value and focus.
    #[prop(into, default = MaybeSignal::Static("text"))]
    input_type: MaybeSignal<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_input: Option<Callback<Event>>,
    /// Compound decorations such as [`InputStart`].
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let config = use_style_config();
    let slots = InputSlots::new(
        ControlKind::Input.normalize_size(size),
        Signal::derive(move || loading.get()),
    );
    provide_context(slots);

    let has_prefix = prefix.is_some();
    let has_suffix = suffix.is_some();
    let has_end = end.is_some();

    let style = create_memo(move |_| {
        resolve_control(
            &ControlRequest {
                variant: variant.into(),
                size,
                position: attachment,
                slots: SlotRequest {
                    start: slots.start.is_present(),
                    end: slots.end.is_present(),
                    loading: slots.loading.get(),
                    prefix: has_prefix,
                    suffix: has_suffix,
                    start_width: slots.start.width(),
                    end_width: slots.end.width(),
                    ..SlotRequest::default()
                },
                layout_class,
                ..ControlRequest::new(ControlKind::Input)
            },
            &config,
        )
    });

    let field = view! {
        <div class="relative flex items-center w-full" data-ui-kind="input-root">
            {prefix.map(|prefix| prefix.render(AttachmentPosition::First))}
            <div class="relative flex flex-1 items-center">
                <input
                    type=move || input_type.get()
                    id=id.clone()
                    name=name
                    placeholder=placeholder
                    class=move || style.with(|style| style.class.to_string())
                    style=move || style.with(|style| style.style.clone())
                    prop:value=move || value.get()
                    disabled=move || disabled.get()
                    aria-busy=move || bool_token(slots.loading.get())
                    data-slot="input"
                    data-ui-kind=ControlKind::Input.token()
                    data-ui-variant=variant.token()
                    data-ui-size=slots.size.token()
                    data-ui-position=move || style.with(|style| style.position.token())
                    on:input=move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(ev);
                        }
                    }
                />
                {start.map(|start| view! { <InputStart>{start.run()}</InputStart> })}
                {children.map(|children| children())}
                {move || {
                    (has_end || slots.loading.get()).then(|| {
                        view! { <EndAnchor end=end.clone() render_loading=render_loading /> }
                    })
                }}
            </div>
            {suffix.map(|suffix| suffix.render(AttachmentPosition::Last))}
        </div>
    };

    match label {
        Some(label) => view! {
            <div class="flex flex-col gap-1.5" data-ui-kind="input-field">
                <Label html_for=id.unwrap_or_default()>{label}</Label>
                {field}
            </div>
        }
        .into_view(),
        None => field.into_view(),
    }
}

#[component]
/// Leading decoration of the enclosing [`Input`].
///
/// Must be rendered inside an `Input`; the input reserves padding for it from its measured width.
/// One start decoration per input: the `start` prop mounts first and wins, and a later
/// `InputStart` renders nothing.
pub fn InputStart(children: Children) -> impl IntoView {
    slot_anchor(use_input_slots(), SlotSide::Start, children().into_view())
}

#[component]
fn EndAnchor(end: Option<ViewFn>, render_loading: Option<Callback<bool, View>>) -> impl IntoView {
    let slots = use_input_slots();
    let content = end_slot_view(end.as_ref(), slots.loading.get_untracked(), render_loading);
    slot_anchor(slots, SlotSide::End, content)
}

fn slot_anchor(slots: InputSlots, side: SlotSide, content: View) -> View {
    let cell = slots.cell(side);
    if !cell.mount() {
        logging::debug_warn!(
            "input already has a {} decoration; ignoring the later one",
            side.token()
        );
        return ().into_view();
    }
    on_cleanup(move || cell.unmount());

    let node_ref = create_node_ref::<html::Span>();
    track_width(node_ref, cell);

    view! {
        <span
            class=offset_class(slots.size, side).to_string()
            data-slot=side.token()
            node_ref=node_ref
        >
            {content}
        </span>
    }
    .into_view()
}

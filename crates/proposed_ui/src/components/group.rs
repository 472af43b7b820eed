use super::*;

#[component]
/// Row of sibling controls, optionally attached into one continuous control.
///
/// Each item is a render function that receives the position resolved for it and passes it on
/// as the control's `attachment`. `prefix` and `suffix` render outside the run with the group gap
/// and never take part in attachment.
pub fn Group(
    #[prop(optional, into)] items: Vec<Attached>,
    #[prop(optional)] attached: bool,
    #[prop(optional, into)] prefix: Option<ViewFn>,
    #[prop(optional, into)] suffix: Option<ViewFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let config = use_style_config();
    let layout = GroupLayout::new(attached, &config);
    let mut container_class = layout.container_class;
    container_class.push_opt(layout_class);

    let run = resolve_group(items, attached)
        .into_iter()
        .map(|(item, position)| item.render(position))
        .collect_view();

    view! {
        <div
            class=container_class.to_string()
            data-slot="group"
            data-ui-kind="group"
            data-ui-attached=bool_token(attached)
        >
            {prefix.map(|prefix| prefix.run())}
            <div class=layout.run_class.to_string() data-slot="group-run">
                {run}
            </div>
            {suffix.map(|suffix| suffix.run())}
        </div>
    }
}

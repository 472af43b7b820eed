use super::*;

#[component]
/// Field label rendered above a control.
pub fn Label(
    #[prop(optional, into)] html_for: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let mut class = ClassList::from(
        "flex items-center gap-2 text-sm leading-none font-medium select-none peer-disabled:cursor-not-allowed peer-disabled:opacity-50",
    );
    class.push_opt(layout_class);

    view! {
        <label class=class.to_string() for=html_for data-slot="label" data-ui-kind="label">
            {children()}
        </label>
    }
}

#[component]
/// Default loading indicator shown in a control's end slot.
pub fn Spinner(
    /// Edge length in pixels; defaults to the configured spinner size.
    #[prop(optional)]
    size: Option<u32>,
) -> impl IntoView {
    let size = size.unwrap_or_else(|| use_style_config().spinner_size_px);

    view! {
        <svg
            class="animate-spin"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            role="status"
            aria-label="Loading"
            data-slot="spinner"
        >
            <path d="M12 2v4"></path>
            <path d="m16.2 7.8 2.9-2.9"></path>
            <path d="M18 12h4"></path>
            <path d="m16.2 16.2 2.9 2.9"></path>
            <path d="M12 18v4"></path>
            <path d="m4.9 19.1 2.9-2.9"></path>
            <path d="M2 12h4"></path>
            <path d="m4.9 4.9 2.9 2.9"></path>
        </svg>
    }
}

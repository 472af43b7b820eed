use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use proposed_ui::prelude::*;

use crate::icons::{Icon, IconName};

const PLAYGROUND_CONFIG: &str = r#"{ "gutter_px": 16, "group_gap_class": "gap-1.5" }"#;

const REGION_OPTIONS: &str = r#"[
    { "label": "us-east-1", "value": "use1" },
    { "label": "eu-west-2", "value": "euw2" },
    { "label": "ap-south-1", "value": "aps1" }
]"#;

fn playground_config() -> StyleConfig {
    StyleConfig::from_json(PLAYGROUND_CONFIG).unwrap_or_else(|err| {
        logging::warn!("playground config ignored: {err}");
        StyleConfig::default()
    })
}

fn region_options() -> Vec<SelectOption> {
    serde_json::from_str(REGION_OPTIONS).unwrap_or_else(|err| {
        logging::warn!("region options ignored: {err}");
        Vec::new()
    })
}

#[component]
pub fn PlaygroundApp() -> impl IntoView {
    provide_meta_context();
    provide_style_config(playground_config());

    view! {
        <Title text="Proposed UI playground" />
        <Meta name="description" content="Buttons, inputs, selects, and attached groups." />

        <Router>
            <nav class="flex gap-4 p-4 text-sm">
                <A href="/">"Buttons"</A>
                <A href="/inputs">"Inputs"</A>
                <A href="/groups">"Groups"</A>
            </nav>
            <main class="flex flex-col gap-8 p-10">
                <Routes>
                    <Route path="" view=ButtonsPage />
                    <Route path="/inputs" view=InputsPage />
                    <Route path="/groups" view=GroupsPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn DemoSection(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="flex flex-col gap-3">
            <p class="text-sm text-gray-400 uppercase">{title}</p>
            {children()}
        </section>
    }
}

#[component]
fn ButtonsPage() -> impl IntoView {
    let saving = create_rw_signal(false);
    let variants = [
        (ButtonVariant::Default, "Default"),
        (ButtonVariant::Destructive, "Destructive"),
        (ButtonVariant::Outline, "Outline"),
        (ButtonVariant::Secondary, "Secondary"),
        (ButtonVariant::Ghost, "Ghost"),
        (ButtonVariant::Link, "Link"),
    ];

    view! {
        <DemoSection title="Variants">
            <div class="flex gap-3">
                {variants
                    .into_iter()
                    .map(|(variant, text)| view! { <Button variant=variant>{text}</Button> })
                    .collect_view()}
            </div>
        </DemoSection>
        <DemoSection title="Sizes">
            <div class="flex items-center gap-3">
                <Button size=ControlSize::Xs>"Extra small"</Button>
                <Button size=ControlSize::Sm>"Small"</Button>
                <Button>"Default"</Button>
                <Button size=ControlSize::Lg>"Large"</Button>
                <Button size=ControlSize::Icon aria_label="Favourite">
                    <Icon icon=IconName::Star />
                </Button>
            </div>
        </DemoSection>
        <DemoSection title="Decorations and loading">
            <div class="flex gap-3">
                <Button variant=ButtonVariant::Outline start=|| view! { <Icon icon=IconName::Search /> }>
                    "Search"
                </Button>
                <Button
                    end=|| view! { <Icon icon=IconName::Copy /> }
                    loading=saving.read_only()
                    on_click=Callback::new(move |_| saving.update(|saving| *saving = !*saving))
                >
                    {move || if saving.get() { "Saving" } else { "Save" }}
                </Button>
            </div>
        </DemoSection>
    }
}

#[component]
fn InputsPage() -> impl IntoView {
    let region = create_rw_signal(String::new());

    view! {
        <DemoSection title="Input with compound start and attached suffix">
            <Input
                label="User"
                id="user"
                placeholder="John Doe"
                suffix=Attached::new(|position: AttachmentPosition| {
                    view! { <Button attachment=position>"Submit"</Button> }
                })
            >
                <InputStart>
                    <Icon icon=IconName::Search />
                </InputStart>
            </Input>
        </DemoSection>
        <DemoSection title="Variants">
            <div class="flex flex-col gap-3">
                <Input placeholder="Outline" variant=FieldVariant::Outline />
                <Input placeholder="Filled" variant=FieldVariant::Filled />
                <Input placeholder="Flushed" variant=FieldVariant::Flushed />
                <Input placeholder="Large" size=ControlSize::Lg start=|| view! { <Icon icon=IconName::Search /> } />
            </div>
        </DemoSection>
        <DemoSection title="Loading">
            <Input placeholder="Checking availability" loading=true />
        </DemoSection>
        <DemoSection title="Select">
            <Select
                options=region_options()
                placeholder="Pick a region"
                aria_label="Region"
                value=region.read_only()
                on_change=Callback::new(move |ev| region.set(event_target_value(&ev)))
            />
        </DemoSection>
    }
}

#[component]
fn GroupsPage() -> impl IntoView {
    let revealed = create_rw_signal(false);

    let search_row = vec![
        Attached::new(|position: AttachmentPosition| {
            view! {
                <Input
                    attachment=position
                    placeholder="John Doe"
                    start=|| view! { <Icon icon=IconName::Search /> }
                />
            }
        }),
        Attached::new(|position: AttachmentPosition| {
            view! { <Button attachment=position>"Submit"</Button> }
        }),
    ];

    let key_value_row = vec![
        Attached::new(|position: AttachmentPosition| {
            view! { <Input attachment=position label="Key" id="key" /> }
        }),
        Attached::new(move |position: AttachmentPosition| {
            let input_type =
                Signal::derive(move || if revealed.get() { "text" } else { "password" });
            view! {
                <Input
                    attachment=position
                    label="Value"
                    id="value"
                    input_type=input_type
                    value="fdfsdfds"
                    end=move || {
                        view! {
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ControlSize::Icon
                                aria_label="Toggle value visibility"
                                layout_class="cursor-pointer pointer-events-auto"
                                on_click=Callback::new(move |_| {
                                    revealed.update(|revealed| *revealed = !*revealed)
                                })
                            >
                                {move || {
                                    let icon = if revealed.get() { IconName::EyeOff } else { IconName::Eye };
                                    view! { <Icon icon=icon /> }
                                }}
                            </Button>
                        }
                    }
                    suffix=Attached::new(|position: AttachmentPosition| {
                        view! {
                            <Button
                                attachment=position
                                variant=ButtonVariant::Secondary
                                size=ControlSize::Icon
                                aria_label="Copy value"
                            >
                                <Icon icon=IconName::Copy />
                            </Button>
                        }
                    })
                />
            }
        }),
    ];

    let unattached_row = vec![
        Attached::new(|position: AttachmentPosition| {
            view! { <Button attachment=position variant=ButtonVariant::Outline>"Cancel"</Button> }
        }),
        Attached::new(|position: AttachmentPosition| {
            view! { <Button attachment=position>"Confirm"</Button> }
        }),
    ];

    view! {
        <DemoSection title="Input with button in group">
            <Group attached=true items=search_row />
        </DemoSection>
        <DemoSection title="Input in a group with a button">
            <Group
                attached=true
                items=key_value_row
                suffix=|| {
                    view! {
                        <Button size=ControlSize::Icon aria_label="Delete row">
                            <Icon icon=IconName::Trash />
                        </Button>
                    }
                }
            />
        </DemoSection>
        <DemoSection title="Unattached group">
            <Group items=unattached_row />
        </DemoSection>
    }
}

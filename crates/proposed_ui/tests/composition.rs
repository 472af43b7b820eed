use pretty_assertions::assert_eq;
use proposed_ui::{
    resolve_control, resolve_group, AttachmentPosition, ButtonVariant, ControlKind, ControlRequest,
    ControlSize, EndSlot, FieldVariant, MeasureState, SlotRequest, StyleConfig, Variant,
    DEFAULT_GUTTER_PX,
};

struct Field {
    label: &'static str,
    end: Option<MeasureState>,
}

fn input_request(field: &Field, position: AttachmentPosition) -> ControlRequest {
    ControlRequest {
        position,
        slots: SlotRequest {
            end: field.end.is_some(),
            end_width: field.end.and_then(MeasureState::width),
            ..SlotRequest::default()
        },
        ..ControlRequest::new(ControlKind::Input)
    }
}

#[test]
fn key_value_group_attaches_and_pads_measured_toggle() {
    let mut eye_toggle = MeasureState::Unmeasured;
    let fields = vec![
        Field {
            label: "Key",
            end: None,
        },
        Field {
            label: "Value",
            end: Some(eye_toggle),
        },
    ];
    let config = StyleConfig::default();

    let first_paint: Vec<_> = resolve_group(&fields, true)
        .into_iter()
        .map(|(field, position)| (field.label, resolve_control(&input_request(field, position), &config)))
        .collect();

    let (key_label, key) = &first_paint[0];
    let (value_label, value) = &first_paint[1];
    assert_eq!(*key_label, "Key");
    assert_eq!(key.position, AttachmentPosition::First);
    assert!(key.class.contains("rounded-r-none"));
    assert_eq!(*value_label, "Value");
    assert_eq!(value.position, AttachmentPosition::Last);
    assert!(value.class.contains("rounded-l-none"));
    assert!(value.class.contains("pr-8"));
    assert_eq!(value.style, None);

    assert!(eye_toggle.observe(36));
    let fields = vec![
        Field {
            label: "Key",
            end: None,
        },
        Field {
            label: "Value",
            end: Some(eye_toggle),
        },
    ];
    let second_paint: Vec<_> = resolve_group(&fields, true)
        .into_iter()
        .map(|(field, position)| resolve_control(&input_request(field, position), &config))
        .collect();

    let value = &second_paint[1];
    assert_eq!(value.position, AttachmentPosition::Last);
    assert!(!value.class.contains("pr-8"));
    assert_eq!(value.slots.padding_style.and_then(|style| style.right), Some(36 + DEFAULT_GUTTER_PX));
    assert_eq!(value.style.as_deref(), Some("padding-right: 52px;"));
}

#[test]
fn loading_button_shows_indicator_instead_of_end_icon() {
    let request = ControlRequest {
        variant: ButtonVariant::Outline.into(),
        slots: SlotRequest {
            end: true,
            loading: true,
            ..SlotRequest::default()
        },
        ..ControlRequest::new(ControlKind::Button)
    };
    let style = resolve_control(&request, &StyleConfig::default());

    assert!(style.slots.has_end);
    assert_eq!(EndSlot::resolve(true, true), EndSlot::Loading);
    assert!(style.class.contains("pr-8"));
}

#[test]
fn identical_inputs_render_identical_fragments() {
    let request = ControlRequest {
        variant: Variant::Field(FieldVariant::Filled),
        size: ControlSize::Lg,
        position: AttachmentPosition::Middle,
        slots: SlotRequest {
            start: true,
            end: true,
            start_width: Some(18),
            ..SlotRequest::default()
        },
        layout_class: Some("font-mono"),
        ..ControlRequest::new(ControlKind::Input)
    };
    let config = StyleConfig::default();

    let first = resolve_control(&request, &config);
    let second = resolve_control(&request, &config);
    assert_eq!(first, second);
    assert_eq!(first.class.to_string(), second.class.to_string());
}

#[test]
fn single_attached_child_keeps_full_rounding() {
    let resolved = resolve_group(["only"], true);
    assert_eq!(resolved, vec![("only", AttachmentPosition::None)]);

    let style = resolve_control(
        &ControlRequest {
            position: resolved[0].1,
            ..ControlRequest::new(ControlKind::Select)
        },
        &StyleConfig::default(),
    );
    assert!(style.class.contains("rounded-md"));
    assert!(!style.class.contains("rounded-none"));
}

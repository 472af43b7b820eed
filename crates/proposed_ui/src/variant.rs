//! Variant resolution: control kind, visual variant, size, and attachment position to classes.
//!
//! Every discriminant owns one explicit row table. The first row of each table is the documented
//! default and is returned whenever a key has no row for the requested control kind, so callers
//! that send newer or foreign tokens still render a styled control.

use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::class_list::ClassList;
use crate::group::AttachmentPosition;

/// Ordered style-class tokens produced by [`resolve_variant`].
pub type StyleFragment = ClassList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Control families with their own variant and size vocabulary.
pub enum ControlKind {
    /// Push button.
    Button,
    /// Single-line text input.
    Input,
    /// Native select.
    Select,
}

impl ControlKind {
    /// Stable token used for `data-ui-kind` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Select => "select",
        }
    }

    fn size_rows(self) -> &'static [(ControlSize, &'static str)] {
        match self {
            Self::Button => BUTTON_SIZE_ROWS,
            Self::Input | Self::Select => FIELD_SIZE_ROWS,
        }
    }

    /// Default visual variant for this kind.
    pub const fn default_variant(self) -> Variant {
        match self {
            Self::Button => Variant::Button(ButtonVariant::Default),
            Self::Input | Self::Select => Variant::Field(FieldVariant::Default),
        }
    }

    /// Returns `size` when this kind supports it, otherwise the default size.
    pub fn normalize_size(self, size: ControlSize) -> ControlSize {
        if self.size_rows().iter().any(|(row, _)| *row == size) {
            size
        } else {
            ControlSize::Default
        }
    }

    /// Returns `variant` when it belongs to this kind's family, otherwise the default variant.
    pub fn normalize_variant(self, variant: Variant) -> Variant {
        match (self, variant) {
            (Self::Button, Variant::Button(_)) => variant,
            (Self::Input | Self::Select, Variant::Field(_)) => variant,
            _ => self.default_variant(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button visual variants.
pub enum ButtonVariant {
    /// Filled primary action.
    Default,
    /// Destructive action.
    Destructive,
    /// Bordered button on the page background.
    Outline,
    /// Muted filled button.
    Secondary,
    /// Borderless button that only paints on hover.
    Ghost,
    /// Inline text link.
    Link,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonVariant {
    /// Every button variant in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    /// Stable token used for `data-ui-variant` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    /// Parses a variant token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.token() == token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Input and select visual variants.
pub enum FieldVariant {
    /// Thin bordered field.
    Default,
    /// Heavier bordered field.
    Outline,
    /// Borderless field on a muted fill.
    Filled,
    /// Bottom border only.
    Flushed,
    /// No chrome at all.
    Unstyled,
}

impl Default for FieldVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl FieldVariant {
    /// Every field variant in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Outline,
        Self::Filled,
        Self::Flushed,
        Self::Unstyled,
    ];

    /// Stable token used for `data-ui-variant` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Filled => "filled",
            Self::Flushed => "flushed",
            Self::Unstyled => "unstyled",
        }
    }

    /// Parses a variant token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.token() == token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// A visual variant tagged with the family it belongs to.
pub enum Variant {
    /// Button family.
    Button(ButtonVariant),
    /// Input/select family.
    Field(FieldVariant),
}

impl Variant {
    /// Stable token used for `data-ui-variant` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Button(variant) => variant.token(),
            Self::Field(variant) => variant.token(),
        }
    }

    /// Parses `token` in the vocabulary of `kind`, falling back to the kind's default.
    pub fn parse_or_default(kind: ControlKind, token: &str) -> Self {
        let parsed = match kind {
            ControlKind::Button => ButtonVariant::from_token(token).map(Self::Button),
            ControlKind::Input | ControlKind::Select => {
                FieldVariant::from_token(token).map(Self::Field)
            }
        };
        parsed.unwrap_or_else(|| {
            logging::debug_warn!(
                "unknown {} variant `{token}`, using default",
                kind.token()
            );
            kind.default_variant()
        })
    }
}

impl From<ButtonVariant> for Variant {
    fn from(variant: ButtonVariant) -> Self {
        Self::Button(variant)
    }
}

impl From<FieldVariant> for Variant {
    fn from(variant: FieldVariant) -> Self {
        Self::Field(variant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Control sizing tokens.
pub enum ControlSize {
    /// Extra dense (buttons only).
    Xs,
    /// Dense.
    Sm,
    /// Default.
    Default,
    /// Large.
    Lg,
    /// Square icon-only control (buttons only).
    Icon,
}

impl Default for ControlSize {
    fn default() -> Self {
        Self::Default
    }
}

impl ControlSize {
    /// Every size in declaration order.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Default, Self::Lg, Self::Icon];

    /// Stable token used for `data-ui-size` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Default => "default",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }

    /// Parses a size token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.token() == token)
    }

    /// Parses `token` for `kind`, falling back to the default size when unknown or unsupported.
    pub fn parse_or_default(kind: ControlKind, token: &str) -> Self {
        match Self::from_token(token) {
            Some(size) => kind.normalize_size(size),
            None => {
                logging::debug_warn!("unknown {} size `{token}`, using default", kind.token());
                Self::Default
            }
        }
    }
}

const BUTTON_BASE: &str = "relative flex items-center justify-center text-center gap-2 whitespace-nowrap text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:border-rp-ring focus-visible:ring-rp-ring/50 focus-visible:ring-[3px] aria-invalid:ring-rp-destructive/20 dark:aria-invalid:ring-rp-destructive/40 aria-invalid:border-rp-destructive";

const INPUT_BASE: &str = "file:text-foreground placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground flex w-full min-w-0 py-1 text-base transition-[color,box-shadow] outline-none file:inline-flex file:h-7 file:border-0 file:bg-transparent file:text-sm file:font-medium disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive";

const SELECT_BASE: &str = "flex w-full min-w-0 appearance-none items-center text-base outline-none cursor-pointer transition-[color,box-shadow] disabled:cursor-not-allowed disabled:opacity-50 md:text-sm focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px]";

const BUTTON_VARIANT_ROWS: &[(ButtonVariant, &str)] = &[
    (
        ButtonVariant::Default,
        "bg-rp-primary text-rp-primary-foreground shadow-xs hover:bg-rp-primary/90",
    ),
    (
        ButtonVariant::Destructive,
        "bg-rp-destructive text-white shadow-xs hover:bg-rp-destructive/90 focus-visible:ring-rp-destructive/20 dark:focus-visible:ring-rp-destructive/40 dark:bg-rp-destructive/60",
    ),
    (
        ButtonVariant::Outline,
        "border bg-rp-background shadow-xs hover:bg-rp-accent hover:text-rp-accent-foreground dark:bg-rp-input/30 dark:border-rp-input dark:hover:bg-rp-input/50",
    ),
    (
        ButtonVariant::Secondary,
        "bg-rp-secondary text-rp-secondary-foreground shadow-xs hover:bg-rp-secondary/80",
    ),
    (
        ButtonVariant::Ghost,
        "hover:bg-rp-accent hover:text-rp-accent-foreground dark:hover:bg-rp-accent/50",
    ),
    (
        ButtonVariant::Link,
        "text-rp-primary underline-offset-4 hover:underline",
    ),
];

const FIELD_VARIANT_ROWS: &[(FieldVariant, &str)] = &[
    (
        FieldVariant::Default,
        "border border-input bg-transparent shadow-xs dark:bg-input/30",
    ),
    (FieldVariant::Outline, "border-2 border-input bg-transparent"),
    (
        FieldVariant::Filled,
        "border border-transparent bg-muted hover:bg-muted/80",
    ),
    (
        FieldVariant::Flushed,
        "border-0 border-b border-input bg-transparent shadow-none",
    ),
    (FieldVariant::Unstyled, "border-0 bg-transparent shadow-none"),
];

// Horizontal padding is owned by the slot resolver, so size rows never emit `px-*`.
const BUTTON_SIZE_ROWS: &[(ControlSize, &str)] = &[
    (ControlSize::Default, "h-9 py-2"),
    (ControlSize::Xs, "h-7 gap-1 text-xs"),
    (ControlSize::Sm, "h-8 gap-1.5"),
    (ControlSize::Lg, "h-10"),
    (ControlSize::Icon, "size-9"),
];

const FIELD_SIZE_ROWS: &[(ControlSize, &str)] = &[
    (ControlSize::Default, "h-9"),
    (ControlSize::Sm, "h-8 text-sm"),
    (ControlSize::Lg, "h-10"),
];

const RADIUS_ROWS: &[(AttachmentPosition, &str)] = &[
    (AttachmentPosition::None, "rounded-md"),
    (AttachmentPosition::First, "rounded-l-md rounded-r-none"),
    (AttachmentPosition::Middle, "rounded-none"),
    (AttachmentPosition::Last, "rounded-r-md rounded-l-none"),
];

fn lookup<K: Copy + PartialEq>(rows: &'static [(K, &'static str)], key: K) -> &'static str {
    rows.iter()
        .find(|(row, _)| *row == key)
        .or_else(|| rows.first())
        .map(|(_, classes)| *classes)
        .unwrap_or_default()
}

/// Resolves the color, size, and radius classes for one control.
///
/// Variants from another family and sizes the kind does not support resolve exactly like the
/// kind's default variant and size. Output order is base, variant, size, radius.
pub fn resolve_variant(
    kind: ControlKind,
    variant: Variant,
    size: ControlSize,
    position: AttachmentPosition,
) -> StyleFragment {
    let mut fragment = StyleFragment::new();
    fragment.push(match kind {
        ControlKind::Button => BUTTON_BASE,
        ControlKind::Input => INPUT_BASE,
        ControlKind::Select => SELECT_BASE,
    });
    fragment.push(match kind.normalize_variant(variant) {
        Variant::Button(variant) => lookup(BUTTON_VARIANT_ROWS, variant),
        Variant::Field(variant) => lookup(FIELD_VARIANT_ROWS, variant),
    });
    fragment.push(lookup(kind.size_rows(), size));
    fragment.push(lookup(RADIUS_ROWS, position));
    fragment
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const POSITIONS: [AttachmentPosition; 4] = [
        AttachmentPosition::None,
        AttachmentPosition::First,
        AttachmentPosition::Middle,
        AttachmentPosition::Last,
    ];

    #[test]
    fn foreign_variants_resolve_to_the_kind_default() {
        for position in POSITIONS {
            for field in FieldVariant::ALL {
                assert_eq!(
                    resolve_variant(ControlKind::Button, field.into(), ControlSize::Default, position),
                    resolve_variant(
                        ControlKind::Button,
                        ButtonVariant::Default.into(),
                        ControlSize::Default,
                        position
                    )
                );
            }
            for kind in [ControlKind::Input, ControlKind::Select] {
                assert_eq!(
                    resolve_variant(kind, ButtonVariant::Outline.into(), ControlSize::Sm, position),
                    resolve_variant(kind, FieldVariant::Default.into(), ControlSize::Sm, position)
                );
            }
        }
    }

    #[test]
    fn unsupported_sizes_resolve_to_the_default_size() {
        for kind in [ControlKind::Input, ControlKind::Select] {
            for size in [ControlSize::Xs, ControlSize::Icon] {
                assert_eq!(kind.normalize_size(size), ControlSize::Default);
                assert_eq!(
                    resolve_variant(kind, FieldVariant::Filled.into(), size, AttachmentPosition::None),
                    resolve_variant(
                        kind,
                        FieldVariant::Filled.into(),
                        ControlSize::Default,
                        AttachmentPosition::None
                    )
                );
            }
        }
        for size in ControlSize::ALL {
            assert_eq!(ControlKind::Button.normalize_size(size), size);
        }
    }

    #[test]
    fn unknown_tokens_parse_to_defaults() {
        assert_eq!(
            Variant::parse_or_default(ControlKind::Button, "sparkly"),
            Variant::Button(ButtonVariant::Default)
        );
        assert_eq!(
            Variant::parse_or_default(ControlKind::Button, "filled"),
            Variant::Button(ButtonVariant::Default)
        );
        assert_eq!(
            Variant::parse_or_default(ControlKind::Select, "flushed"),
            Variant::Field(FieldVariant::Flushed)
        );
        assert_eq!(
            ControlSize::parse_or_default(ControlKind::Input, "icon"),
            ControlSize::Default
        );
        assert_eq!(
            ControlSize::parse_or_default(ControlKind::Button, "huge"),
            ControlSize::Default
        );
        assert_eq!(
            ControlSize::parse_or_default(ControlKind::Button, "xs"),
            ControlSize::Xs
        );
    }

    #[test]
    fn attachment_position_controls_radius_suppression() {
        let radius = |position| {
            resolve_variant(
                ControlKind::Input,
                FieldVariant::Default.into(),
                ControlSize::Default,
                position,
            )
            .iter()
            .filter(|token| token.starts_with("rounded"))
            .map(str::to_string)
            .collect::<Vec<_>>()
        };

        assert_eq!(radius(AttachmentPosition::None), vec!["rounded-md"]);
        assert_eq!(
            radius(AttachmentPosition::First),
            vec!["rounded-l-md", "rounded-r-none"]
        );
        assert_eq!(
            radius(AttachmentPosition::Last),
            vec!["rounded-r-md", "rounded-l-none"]
        );
        assert_eq!(radius(AttachmentPosition::Middle), vec!["rounded-none"]);
    }

    #[test]
    fn button_fragment_orders_base_variant_size_radius() {
        let fragment = resolve_variant(
            ControlKind::Button,
            ButtonVariant::Ghost.into(),
            ControlSize::Icon,
            AttachmentPosition::None,
        )
        .to_string();

        let variant_at = fragment.find("hover:bg-rp-accent").expect("variant tokens");
        let size_at = fragment.find("size-9").expect("size tokens");
        let radius_at = fragment.find("rounded-md").expect("radius tokens");
        assert!(fragment.starts_with("relative flex"));
        assert!(variant_at < size_at && size_at < radius_at);
    }

    #[test]
    fn variant_tokens_round_trip_through_serde() {
        let json = serde_json::to_string(&ButtonVariant::Destructive).expect("serialize");
        assert_eq!(json, "\"destructive\"");
        let size: ControlSize = serde_json::from_str("\"lg\"").expect("deserialize");
        assert_eq!(size, ControlSize::Lg);
    }
}

//! Typed toolkit configuration.
//!
//! DESIGN
//! ======
//! Three layers, applied in this order (later wins):
//! 1. [`ToolkitConfig::default`] built-in defaults.
//! 2. Host overrides ([`ConfigOverrides`], deserialized from the page's JSON).
//! 3. Theme adaptation for `selectors` and `classes` ([`ThemeAdaptation`]).
//!
//! Re-applying overrides always re-runs step 3 so a theme's markup contract
//! holds no matter what the host supplied.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::module::ToolKind;
use crate::theme::Theme;

/// Whether the theme is detected from the page or fixed by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ThemeSetting {
    #[default]
    AutoDetect,
    Fixed(Theme),
}

impl ThemeSetting {
    /// Parse the host's `theme` string; `"auto-detect"` or a theme name.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "auto-detect" | "auto" | "" => Self::AutoDetect,
            other => other.parse::<Theme>().map_or(Self::AutoDetect, Self::Fixed),
        }
    }
}

/// CSS selectors used to find host elements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selectors {
    pub container: String,
    pub button: String,
    pub input: String,
    pub select: String,
    pub card: String,
    pub modal: String,
    pub notification: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            container: ".ebike-tools-container, .page-width, .container".to_owned(),
            button: ".btn, .button, .form__button".to_owned(),
            input: ".field__input, .form__input, input[type=\"text\"], input[type=\"number\"]".to_owned(),
            select: ".field__input, .form__select, select".to_owned(),
            card: ".card, .product-card, .grid__item".to_owned(),
            modal: ".modal, .drawer, .popup".to_owned(),
            notification: ".notification, .alert, .message".to_owned(),
        }
    }
}

/// Theme-specific class names for generated markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeClasses {
    pub button_primary: String,
    pub button_secondary: String,
    pub field: String,
    pub grid: String,
}

impl Default for ThemeClasses {
    fn default() -> Self {
        Self {
            button_primary: "btn btn-primary".to_owned(),
            button_secondary: "btn btn-secondary".to_owned(),
            field: "form-field".to_owned(),
            grid: "grid".to_owned(),
        }
    }
}

impl ThemeClasses {
    fn lookup(&self, token: &str) -> Option<&str> {
        match token {
            "buttonPrimary" => Some(&self.button_primary),
            "buttonSecondary" => Some(&self.button_secondary),
            "field" => Some(&self.field),
            "grid" => Some(&self.grid),
            _ => None,
        }
    }
}

/// One switch per tool module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub comparison: bool,
    pub sizing: bool,
    pub financing: bool,
    pub wishlist: bool,
    pub range_calculator: bool,
    pub test_ride_booking: bool,
    pub service_booking: bool,
    pub dashboard_management: bool,
    pub blog_generator: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            comparison: true,
            sizing: true,
            financing: true,
            wishlist: true,
            range_calculator: true,
            test_ride_booking: true,
            service_booking: true,
            dashboard_management: true,
            blog_generator: true,
        }
    }
}

impl FeatureFlags {
    #[must_use]
    pub fn is_enabled(&self, kind: ToolKind) -> bool {
        match kind {
            ToolKind::Comparison => self.comparison,
            ToolKind::Sizing => self.sizing,
            ToolKind::Financing => self.financing,
            ToolKind::Wishlist => self.wishlist,
            ToolKind::RangeCalculator => self.range_calculator,
            ToolKind::TestRideBooking => self.test_ride_booking,
            ToolKind::ServiceBooking => self.service_booking,
            ToolKind::DashboardManagement => self.dashboard_management,
            ToolKind::BlogGenerator => self.blog_generator,
        }
    }

    pub fn set(&mut self, kind: ToolKind, enabled: bool) {
        let slot = match kind {
            ToolKind::Comparison => &mut self.comparison,
            ToolKind::Sizing => &mut self.sizing,
            ToolKind::Financing => &mut self.financing,
            ToolKind::Wishlist => &mut self.wishlist,
            ToolKind::RangeCalculator => &mut self.range_calculator,
            ToolKind::TestRideBooking => &mut self.test_ride_booking,
            ToolKind::ServiceBooking => &mut self.service_booking,
            ToolKind::DashboardManagement => &mut self.dashboard_management,
            ToolKind::BlogGenerator => &mut self.blog_generator,
        };
        *slot = enabled;
    }
}

/// Brand colors exported as CSS custom properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Branding {
    pub primary: String,
    pub accent: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            primary: "#2c2c2c".to_owned(),
            accent: "#ff6b9d".to_owned(),
            success: "#22c55e".to_owned(),
            warning: "#f59e0b".to_owned(),
            error: "#ef4444".to_owned(),
        }
    }
}

impl Branding {
    /// `(key, color)` pairs in a stable order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("primary", self.primary.as_str()),
            ("accent", self.accent.as_str()),
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("error", self.error.as_str()),
        ]
    }
}

/// Optional backend endpoints; `None` means built-in demo data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    pub comparison: Option<String>,
    pub sizing: Option<String>,
    pub financing: Option<String>,
}

/// Effective toolkit configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolkitConfig {
    #[serde(skip)]
    pub theme: ThemeSetting,
    pub css_framework: String,
    pub selectors: Selectors,
    pub classes: ThemeClasses,
    pub features: FeatureFlags,
    pub branding: Branding,
    pub endpoints: Endpoints,
}

impl ToolkitConfig {
    /// Build config from defaults plus host overrides, adapted to `theme`.
    #[must_use]
    pub fn resolve(overrides: &ConfigOverrides, theme: Theme) -> Self {
        let mut config = Self { css_framework: "auto".to_owned(), ..Self::default() };
        config.apply_overrides(overrides);
        config.adapt_to_theme(theme);
        config
    }

    /// Layer host overrides onto the current values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(theme) = &overrides.theme {
            self.theme = ThemeSetting::parse(theme);
        }
        if let Some(framework) = &overrides.css_framework {
            self.css_framework.clone_from(framework);
        }
        if let Some(selectors) = &overrides.selectors {
            selectors.apply(&mut self.selectors);
        }
        if let Some(classes) = &overrides.classes {
            classes.apply(&mut self.classes);
        }
        if let Some(features) = &overrides.features {
            features.apply(&mut self.features);
        }
        if let Some(branding) = &overrides.branding {
            branding.apply(&mut self.branding);
        }
        if let Some(endpoints) = &overrides.endpoints {
            endpoints.apply(&mut self.endpoints);
        }
    }

    /// Merge the theme's selector and class adaptation over the current values.
    pub fn adapt_to_theme(&mut self, theme: Theme) {
        let adaptation = ThemeAdaptation::for_theme(theme);
        adaptation.selectors.apply(&mut self.selectors);
        adaptation.classes.apply(&mut self.classes);
    }

    /// Map generic class tokens (`buttonPrimary`, `field`, ...) to theme classes.
    /// Unknown tokens pass through unchanged.
    #[must_use]
    pub fn map_classes(&self, classes: &str) -> String {
        classes
            .split_whitespace()
            .map(|token| self.classes.lookup(token).unwrap_or(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// =============================================================================
// HOST OVERRIDES
// =============================================================================

/// Partial configuration supplied by the host page as JSON.
///
/// Every field is optional; absent fields keep the lower layer's value.
/// Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_framework: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectors: Option<SelectorOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<ClassOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<BrandingOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<EndpointOverrides>,
}

impl ConfigOverrides {
    /// Parse overrides from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Combine two override sets; fields present in `newer` win.
    #[must_use]
    pub fn merged(&self, newer: &Self) -> Self {
        Self {
            theme: newer.theme.clone().or_else(|| self.theme.clone()),
            css_framework: newer.css_framework.clone().or_else(|| self.css_framework.clone()),
            selectors: merge_section(self.selectors.as_ref(), newer.selectors.as_ref(), SelectorOverrides::merged),
            classes: merge_section(self.classes.as_ref(), newer.classes.as_ref(), ClassOverrides::merged),
            features: merge_section(self.features.as_ref(), newer.features.as_ref(), FeatureOverrides::merged),
            branding: merge_section(self.branding.as_ref(), newer.branding.as_ref(), BrandingOverrides::merged),
            endpoints: merge_section(self.endpoints.as_ref(), newer.endpoints.as_ref(), EndpointOverrides::merged),
        }
    }
}

fn merge_section<T: Clone>(older: Option<&T>, newer: Option<&T>, merge: fn(&T, &T) -> T) -> Option<T> {
    match (older, newer) {
        (Some(a), Some(b)) => Some(merge(a, b)),
        (None, Some(b)) => Some(b.clone()),
        (Some(a), None) => Some(a.clone()),
        (None, None) => None,
    }
}

fn set_if(slot: &mut String, value: Option<&String>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorOverrides {
    pub container: Option<String>,
    pub button: Option<String>,
    pub input: Option<String>,
    pub select: Option<String>,
    pub card: Option<String>,
    pub modal: Option<String>,
    pub notification: Option<String>,
}

impl SelectorOverrides {
    fn apply(&self, target: &mut Selectors) {
        set_if(&mut target.container, self.container.as_ref());
        set_if(&mut target.button, self.button.as_ref());
        set_if(&mut target.input, self.input.as_ref());
        set_if(&mut target.select, self.select.as_ref());
        set_if(&mut target.card, self.card.as_ref());
        set_if(&mut target.modal, self.modal.as_ref());
        set_if(&mut target.notification, self.notification.as_ref());
    }

    fn merged(&self, newer: &Self) -> Self {
        Self {
            container: newer.container.clone().or_else(|| self.container.clone()),
            button: newer.button.clone().or_else(|| self.button.clone()),
            input: newer.input.clone().or_else(|| self.input.clone()),
            select: newer.select.clone().or_else(|| self.select.clone()),
            card: newer.card.clone().or_else(|| self.card.clone()),
            modal: newer.modal.clone().or_else(|| self.modal.clone()),
            notification: newer.notification.clone().or_else(|| self.notification.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassOverrides {
    pub button_primary: Option<String>,
    pub button_secondary: Option<String>,
    pub field: Option<String>,
    pub grid: Option<String>,
}

impl ClassOverrides {
    fn apply(&self, target: &mut ThemeClasses) {
        set_if(&mut target.button_primary, self.button_primary.as_ref());
        set_if(&mut target.button_secondary, self.button_secondary.as_ref());
        set_if(&mut target.field, self.field.as_ref());
        set_if(&mut target.grid, self.grid.as_ref());
    }

    fn merged(&self, newer: &Self) -> Self {
        Self {
            button_primary: newer.button_primary.clone().or_else(|| self.button_primary.clone()),
            button_secondary: newer.button_secondary.clone().or_else(|| self.button_secondary.clone()),
            field: newer.field.clone().or_else(|| self.field.clone()),
            grid: newer.grid.clone().or_else(|| self.grid.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureOverrides {
    pub comparison: Option<bool>,
    pub sizing: Option<bool>,
    pub financing: Option<bool>,
    pub wishlist: Option<bool>,
    pub range_calculator: Option<bool>,
    pub test_ride_booking: Option<bool>,
    pub service_booking: Option<bool>,
    pub dashboard_management: Option<bool>,
    pub blog_generator: Option<bool>,
}

impl FeatureOverrides {
    fn entries(&self) -> [(ToolKind, Option<bool>); 9] {
        [
            (ToolKind::Comparison, self.comparison),
            (ToolKind::Sizing, self.sizing),
            (ToolKind::Financing, self.financing),
            (ToolKind::Wishlist, self.wishlist),
            (ToolKind::RangeCalculator, self.range_calculator),
            (ToolKind::TestRideBooking, self.test_ride_booking),
            (ToolKind::ServiceBooking, self.service_booking),
            (ToolKind::DashboardManagement, self.dashboard_management),
            (ToolKind::BlogGenerator, self.blog_generator),
        ]
    }

    fn apply(&self, target: &mut FeatureFlags) {
        for (kind, value) in self.entries() {
            if let Some(enabled) = value {
                target.set(kind, enabled);
            }
        }
    }

    fn merged(&self, newer: &Self) -> Self {
        Self {
            comparison: newer.comparison.or(self.comparison),
            sizing: newer.sizing.or(self.sizing),
            financing: newer.financing.or(self.financing),
            wishlist: newer.wishlist.or(self.wishlist),
            range_calculator: newer.range_calculator.or(self.range_calculator),
            test_ride_booking: newer.test_ride_booking.or(self.test_ride_booking),
            service_booking: newer.service_booking.or(self.service_booking),
            dashboard_management: newer.dashboard_management.or(self.dashboard_management),
            blog_generator: newer.blog_generator.or(self.blog_generator),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingOverrides {
    pub primary: Option<String>,
    pub accent: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

impl BrandingOverrides {
    fn apply(&self, target: &mut Branding) {
        set_if(&mut target.primary, self.primary.as_ref());
        set_if(&mut target.accent, self.accent.as_ref());
        set_if(&mut target.success, self.success.as_ref());
        set_if(&mut target.warning, self.warning.as_ref());
        set_if(&mut target.error, self.error.as_ref());
    }

    fn merged(&self, newer: &Self) -> Self {
        Self {
            primary: newer.primary.clone().or_else(|| self.primary.clone()),
            accent: newer.accent.clone().or_else(|| self.accent.clone()),
            success: newer.success.clone().or_else(|| self.success.clone()),
            warning: newer.warning.clone().or_else(|| self.warning.clone()),
            error: newer.error.clone().or_else(|| self.error.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointOverrides {
    pub comparison: Option<String>,
    pub sizing: Option<String>,
    pub financing: Option<String>,
}

impl EndpointOverrides {
    fn apply(&self, target: &mut Endpoints) {
        if self.comparison.is_some() {
            target.comparison.clone_from(&self.comparison);
        }
        if self.sizing.is_some() {
            target.sizing.clone_from(&self.sizing);
        }
        if self.financing.is_some() {
            target.financing.clone_from(&self.financing);
        }
    }

    fn merged(&self, newer: &Self) -> Self {
        Self {
            comparison: newer.comparison.clone().or_else(|| self.comparison.clone()),
            sizing: newer.sizing.clone().or_else(|| self.sizing.clone()),
            financing: newer.financing.clone().or_else(|| self.financing.clone()),
        }
    }
}

// =============================================================================
// THEME ADAPTATIONS
// =============================================================================

/// Selector and class overrides that make generated markup match a theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeAdaptation {
    pub selectors: SelectorOverrides,
    pub classes: ClassOverrides,
}

fn some(value: &str) -> Option<String> {
    Some(value.to_owned())
}

impl ThemeAdaptation {
    /// Adaptation for `theme`; themes without one use the generic Shopify set.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Godspeed => Self {
                selectors: SelectorOverrides {
                    button: some(".button"),
                    input: some(".field__input"),
                    select: some(".field__input"),
                    container: some(".page-width"),
                    card: some(".card"),
                    modal: some(".modal"),
                    notification: None,
                },
                classes: ClassOverrides {
                    button_primary: some("button button--primary"),
                    button_secondary: some("button button--secondary"),
                    field: some("field"),
                    grid: some("grid"),
                },
            },
            Theme::Custom => Self {
                selectors: SelectorOverrides {
                    button: some(".btn"),
                    input: some("input"),
                    select: some("select"),
                    container: some(".wrapper"),
                    card: some(".grid__item"),
                    modal: some(".modal"),
                    notification: None,
                },
                classes: ClassOverrides {
                    button_primary: some("btn btn-primary"),
                    button_secondary: some("btn btn-secondary"),
                    field: some("form-group"),
                    grid: some("grid"),
                },
            },
            Theme::Impulse => Self {
                selectors: SelectorOverrides {
                    button: some(".btn"),
                    input: some(".form-field"),
                    select: some(".form-field"),
                    container: some(".page-width"),
                    card: some(".grid__item"),
                    modal: None,
                    notification: None,
                },
                classes: ClassOverrides {
                    button_primary: some("btn product-form__cart-submit"),
                    button_secondary: some("btn btn--secondary"),
                    field: some("form-field"),
                    grid: some("grid grid--uniform"),
                },
            },
            Theme::GenericShopify | Theme::Brooklyn | Theme::Debut | Theme::Unknown => Self {
                selectors: SelectorOverrides {
                    button: some(".btn, .button, input[type=\"submit\"]"),
                    input: some("input[type=\"text\"], input[type=\"number\"], input[type=\"email\"]"),
                    select: some("select"),
                    container: some(".main-content, .page-width, .container"),
                    card: some(".product-item, .grid__item, .product"),
                    modal: None,
                    notification: None,
                },
                classes: ClassOverrides {
                    button_primary: some("btn btn-primary"),
                    button_secondary: some("btn btn-secondary"),
                    field: some("form-field"),
                    grid: some("grid"),
                },
            },
        }
    }
}

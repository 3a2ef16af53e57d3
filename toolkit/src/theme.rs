//! Storefront theme detection and theming helpers.
//!
//! Detection runs against a [`PageMarkers`], a snapshot of the body classes and
//! which of [`MARKER_SELECTORS`] matched in the live document. The widgets crate
//! builds the markers; everything here is pure.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Branding;

/// Element id of the injected toolkit stylesheet link.
pub const STYLESHEET_ID: &str = "godspeed-bike-toolkit-css";

/// Selectors the host must test for presence when building a [`PageMarkers`].
pub const MARKER_SELECTORS: [&str; 10] = [
    ".header__wrapper",
    ".shopify-section-group-header-group",
    ".theme-collection-container",
    "[class*=\"homepage--\"]",
    ".site-header__logo",
    ".site-header",
    ".main-content",
    ".template-index",
    ".shopify-section",
    "[class*=\"template-\"]",
];

/// Known storefront themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Godspeed,
    Custom,
    Impulse,
    Brooklyn,
    Debut,
    GenericShopify,
    #[default]
    Unknown,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Godspeed => "godspeed",
            Self::Custom => "custom",
            Self::Impulse => "impulse",
            Self::Brooklyn => "brooklyn",
            Self::Debut => "debut",
            Self::GenericShopify => "generic-shopify",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "godspeed" => Ok(Self::Godspeed),
            "custom" => Ok(Self::Custom),
            "impulse" => Ok(Self::Impulse),
            "brooklyn" => Ok(Self::Brooklyn),
            "debut" => Ok(Self::Debut),
            "generic-shopify" => Ok(Self::GenericShopify),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Snapshot of the page used for theme detection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMarkers {
    /// Classes on `<body>`.
    pub body_classes: BTreeSet<String>,
    /// Entries of [`MARKER_SELECTORS`] that matched at least one element.
    pub present: BTreeSet<String>,
}

impl PageMarkers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_body_class(mut self, class: &str) -> Self {
        self.body_classes.insert(class.to_owned());
        self
    }

    #[must_use]
    pub fn with_selector(mut self, selector: &str) -> Self {
        self.present.insert(selector.to_owned());
        self
    }

    fn body(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    fn has(&self, selector: &str) -> bool {
        self.present.contains(selector)
    }
}

/// Detect the active theme. First matching rule wins.
#[must_use]
pub fn detect(markers: &PageMarkers) -> Theme {
    if markers.body("gradient") || markers.has(".header__wrapper") || markers.has(".shopify-section-group-header-group") {
        return Theme::Godspeed;
    }
    if markers.body("homepage--white")
        || markers.has(".theme-collection-container")
        || markers.has("[class*=\"homepage--\"]")
    {
        return Theme::Custom;
    }
    if markers.body("template-index") && markers.has(".site-header__logo") {
        return Theme::Impulse;
    }
    if markers.has(".site-header") && markers.has(".main-content") {
        return Theme::Brooklyn;
    }
    if markers.has(".site-header") && markers.has(".template-index") {
        return Theme::Debut;
    }
    if markers.has(".shopify-section") || markers.has("[class*=\"template-\"]") {
        return Theme::GenericShopify;
    }
    Theme::Unknown
}

/// Convention-based stylesheet URL under the shop's asset root.
#[must_use]
pub fn stylesheet_href(shop_root: &str, version: &str) -> String {
    format!("{}/assets/godspeed-bike-toolkit.css?v={version}", shop_root.trim_end_matches('/'))
}

/// CSS custom properties to set on `<html>` for the given branding and theme.
#[must_use]
pub fn css_variables(branding: &Branding, theme: Theme) -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = branding
        .entries()
        .into_iter()
        .map(|(key, value)| (format!("--ebike-{key}"), value.to_owned()))
        .collect();
    vars.push(("--ebike-theme".to_owned(), theme.as_str().to_owned()));
    vars
}

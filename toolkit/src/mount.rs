//! Container descriptors and instance ids.
//!
//! A [`Mount`] is what the DOM scanner hands the core for every element
//! carrying `data-ebike-tool`: the tool name plus the element's `data-*`
//! attributes. The core never sees DOM nodes.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::collections::BTreeMap;

use rand::Rng;

use crate::input;
use crate::module::ToolKind;
use crate::range::Units;

/// Attribute naming the tool a container hosts.
pub const TOOL_ATTRIBUTE: &str = "data-ebike-tool";

/// Default number of comparison slots.
pub const DEFAULT_MAX_BIKES: usize = 4;

/// Upper bound on comparison slots a container may request.
pub const MAX_BIKES_LIMIT: usize = 8;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One tool container found in the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mount {
    /// Value of `data-ebike-tool`.
    pub tool: String,
    /// All `data-*` attributes of the container, keyed by full attribute name.
    pub attributes: BTreeMap<String, String>,
}

impl Mount {
    #[must_use]
    pub fn new(tool: &str) -> Self {
        Self { tool: tool.to_owned(), attributes: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Pre-existing instance id for `kind`, ignoring blank values.
    #[must_use]
    pub fn existing_id(&self, kind: ToolKind) -> Option<&str> {
        self.attribute(kind.id_attribute()).map(str::trim).filter(|id| !id.is_empty())
    }
}

/// Per-instance options read from the container's `data-*` attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceSettings {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub units: Units,
    pub max_bikes: usize,
    pub show_tips: bool,
}

impl Default for InstanceSettings {
    fn default() -> Self {
        Self { title: None, subtitle: None, units: Units::Metric, max_bikes: DEFAULT_MAX_BIKES, show_tips: true }
    }
}

impl InstanceSettings {
    #[must_use]
    pub fn from_mount(mount: &Mount) -> Self {
        let non_blank = |name: &str| mount.attribute(name).filter(|v| !v.trim().is_empty()).map(str::to_owned);
        let max_bikes = mount
            .attribute("data-max-bikes")
            .and_then(input::parse_count)
            .map_or(DEFAULT_MAX_BIKES, |count| count.min(MAX_BIKES_LIMIT));
        Self {
            title: non_blank("data-title"),
            subtitle: non_blank("data-subtitle"),
            units: Units::parse(mount.attribute("data-units").unwrap_or("metric")),
            max_bikes,
            show_tips: mount.attribute("data-show-tips") != Some("false"),
        }
    }

    /// Heading for the instance, falling back to the tool's default.
    #[must_use]
    pub fn title_for(&self, kind: ToolKind) -> String {
        self.title.clone().unwrap_or_else(|| kind.default_title().to_owned())
    }

    /// Subheading for the instance, falling back to the tool's default.
    #[must_use]
    pub fn subtitle_for(&self, kind: ToolKind) -> String {
        if let Some(subtitle) = &self.subtitle {
            return subtitle.clone();
        }
        match kind {
            ToolKind::Comparison => format!("Compare up to {} bikes with detailed analysis", self.max_bikes),
            other => other.default_subtitle().to_owned(),
        }
    }
}

/// Generate an instance id: `<prefix>_<millis>_<9 base-36 chars>`.
pub fn generate_instance_id<R: Rng + ?Sized>(prefix: &str, now_millis: u64, rng: &mut R) -> String {
    let suffix: String = (0..9)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect();
    format!("{prefix}_{now_millis}_{suffix}")
}

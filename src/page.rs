//! Demo storefront page.
//!
//! One container per tool, the toolkit overrides as an inline JSON block and
//! the module script that boots the `widgets` package from `/pkg`.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use toolkit::config::ConfigOverrides;
use toolkit::module::ToolKind;

use crate::config::HostError;

/// `(data-title, data-subtitle, extra attributes)` for a tool's demo container.
fn container_attributes(kind: ToolKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        ToolKind::Sizing => ("Find Your Frame Size", "Height and inseam in centimetres", ""),
        ToolKind::Financing => ("Monthly Financing", "0% interest over 6 to 36 months", ""),
        ToolKind::Wishlist => ("Your Wishlist", "", ""),
        ToolKind::RangeCalculator => ("Range Calculator", "How far will a charge take you?", r#" data-units="metric" data-show-tips="true""#),
        ToolKind::TestRideBooking => ("Book a Test Ride", "", ""),
        ToolKind::ServiceBooking => ("Book a Service", "", ""),
        ToolKind::Comparison => ("Compare E-Bikes", "Pick up to four bikes", r#" data-max-bikes="4""#),
        ToolKind::DashboardManagement => ("Vendor Dashboard", "", ""),
        ToolKind::BlogGenerator => ("Blog Generator", "", ""),
    }
}

/// JSON safe to embed in a `<script>` element.
pub fn script_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Render the full storefront page.
///
/// # Errors
///
/// Returns an error if the overrides or shop root cannot be serialized.
pub fn render(overrides: &ConfigOverrides, shop_root: &str) -> Result<String, HostError> {
    let config_json = script_json(overrides)?;
    let root_json = script_json(&shop_root)?;

    let mut containers = String::new();
    for kind in ToolKind::ALL {
        let (title, subtitle, extra) = container_attributes(kind);
        containers.push_str(&format!(
            r#"      <section class="storefront-section"><div data-ebike-tool="{}" data-title="{title}" data-subtitle="{subtitle}"{extra}></div></section>
"#,
            kind.tool_name(),
        ));
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Godspeed E-Bikes</title>
    <script>window.Shopify = {{ routes: {{ root: {root_json} }} }};</script>
    <script type="application/json" id="ebike-toolkit-config">{config_json}</script>
  </head>
  <body>
    <main class="storefront">
      <h1>Godspeed E-Bikes</h1>
{containers}    </main>
    <script type="module">
      import init from "/pkg/widgets.js";
      init();
    </script>
  </body>
</html>
"#
    ))
}

//! Side-by-side bike comparison.
//!
//! The catalog is read once at mount. Results, insights and usage
//! recommendations appear once two slots hold a bike.

#[cfg(test)]
#[path = "comparison_test.rs"]
mod comparison_test;

use leptos::prelude::*;
use toolkit::ToolkitError;
use toolkit::catalog::BikeRecord;
use toolkit::comparison::{self, ComparisonSelection, EXPORT_SUCCESS, Insight, Insights};

use super::NoticeBar;
use crate::registry;
use crate::util::notify::{self, Notice};

/// Insight cards in display order with their headings.
pub fn insight_cards(insights: Insights) -> [(&'static str, &'static str, Insight); 4] {
    [
        ("Best Overall", "overall", insights.best_overall),
        ("Best Value", "value", insights.best_value),
        ("Performance Leader", "performance", insights.performance_leader),
        ("Comfort Champion", "comfort", insights.comfort_champion),
    ]
}

#[component]
pub fn ComparisonTool(selection: ComparisonSelection) -> impl IntoView {
    let slots = selection.max_bikes();
    let selection = RwSignal::new(selection);
    let notice = RwSignal::new(None::<Notice>);
    let catalog = StoredValue::new(registry::with_toolkit(|toolkit| toolkit.context().data.bikes()).unwrap_or_default());
    let primary = StoredValue::new(registry::classes("buttonPrimary"));
    let secondary = StoredValue::new(registry::classes("buttonSecondary"));

    let on_share = move |_| {
        let text = catalog.with_value(|catalog| selection.with(|s| comparison::share_text(&s.active_bikes(catalog))));
        match text {
            Ok(text) => notify::info(notice, text),
            Err(e) => notify::error(notice, &e),
        }
    };

    let on_export = move |_| {
        let now = registry::now();
        let exported = catalog.with_value(|catalog| selection.with(|s| comparison::export(&s.active_bikes(catalog), now)));
        match exported.and_then(|export| serde_json::to_string(&export).map_err(ToolkitError::from)) {
            Ok(json) => {
                tracing::info!(bytes = json.len(), "comparison exported");
                notify::success(notice, EXPORT_SUCCESS);
            }
            Err(e) => notify::error(notice, &e),
        }
    };

    let selectors = (0..slots)
        .map(|slot| {
            view! {
                <div class="ebike-bike-selector">
                    <label>{format!("Bike {}", slot + 1)}</label>
                    <select
                        prop:value=move || selection.with(|s| s.slot(slot).unwrap_or_default().to_owned())
                        on:change=move |ev| selection.update(|s| s.select(slot, &event_target_value(&ev)))
                    >
                        <option value="">"Select a bike..."</option>
                        {catalog
                            .get_value()
                            .iter()
                            .map(|bike| view! { <option value=bike.key.clone()>{comparison::option_label(bike)}</option> })
                            .collect_view()}
                    </select>
                    <Show when=move || selection.with(|s| s.slot(slot).is_some())>
                        <button type="button" class="ebike-bike-selector__clear" on:click=move |_| selection.update(|s| s.clear(slot))>
                            "×"
                        </button>
                    </Show>
                </div>
            }
        })
        .collect_view();

    let results = move || {
        catalog.with_value(|catalog| {
            selection.with(|s| {
                let bikes: Vec<&BikeRecord> = s.active_bikes(catalog);
                view! {
                    <ComparisonTable headers=s.headers(catalog) sections=s.table(catalog) />
                    <div class="ebike-insights">
                        <h4>"🤖 AI Analysis"</h4>
                        <div class="ebike-insights__grid">
                            {comparison::insights(&bikes)
                                .map(|insights| {
                                    insight_cards(insights)
                                        .into_iter()
                                        .map(|(title, modifier, insight)| {
                                            view! {
                                                <div class=format!("ebike-insight ebike-insight--{modifier}")>
                                                    <h5>{title}</h5>
                                                    <strong>{insight.name}</strong>
                                                    <p>{insight.text}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                })}
                        </div>
                        <h5>"Usage Recommendations"</h5>
                        <div class="ebike-usage">
                            {comparison::usage_recommendations(&bikes)
                                .into_iter()
                                .map(|usage| {
                                    view! {
                                        <div class="ebike-usage__item">
                                            <strong>{usage.title}</strong>
                                            <span>{usage.bike_name}</span>
                                            <p>{usage.experience}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
            })
        })
    };

    view! {
        <div class="ebike-comparison">
            <NoticeBar notice=notice />
            <h4>"Select Bikes to Compare"</h4>
            <div class="ebike-bike-selectors">{selectors}</div>
            <Show
                when=move || selection.with(ComparisonSelection::has_results)
                fallback=|| view! { <p class="ebike-comparison__hint">"Select at least two bikes to compare."</p> }
            >
                {results}
                <div class="ebike-comparison__actions">
                    <button class=move || secondary.get_value() on:click=move |_| selection.update(ComparisonSelection::reset)>
                        "Reset Comparison"
                    </button>
                    <button class=move || primary.get_value() on:click=on_export>
                        "Export to PDF"
                    </button>
                    <button class=move || primary.get_value() on:click=on_share>
                        "Share Comparison"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ComparisonTable(
    headers: Vec<Option<comparison::BikeHeader>>,
    sections: Vec<comparison::TableSection>,
) -> impl IntoView {
    let columns = headers.len() + 1;
    view! {
        <table class="ebike-comparison-table">
            <thead>
                <tr>
                    <th>"Specification"</th>
                    {headers
                        .into_iter()
                        .enumerate()
                        .map(|(i, header)| match header {
                            Some(header) => view! {
                                <th class="ebike-comparison-table__bike">
                                    <div class="ebike-comparison-table__name">{header.name}</div>
                                    <div class="ebike-comparison-table__price">{header.price}</div>
                                    <div class="ebike-comparison-table__rating">{header.rating}</div>
                                </th>
                            }
                            .into_any(),
                            None => view! { <th class="ebike-comparison-table__bike">{format!("Bike {}", i + 1)}</th> }.into_any(),
                        })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {sections
                    .into_iter()
                    .map(|section| {
                        view! {
                            <tr class="ebike-comparison-table__section">
                                <td colspan=columns>{section.title}</td>
                            </tr>
                            {section
                                .rows
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr data-path=row.path>
                                            <td class="ebike-comparison-table__label">{row.label}</td>
                                            {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

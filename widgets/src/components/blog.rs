//! Blog draft generator.
//!
//! Tabs over [`BlogView`]. Generation and feed scans are simulated: the
//! model in [`BlogState`] flips its flags, the widget runs the delays.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;
use time::Weekday;
use toolkit::blog::{
    BlogState, BlogView, GENERATE_DELAY_MS, GENERATED, Generation, LANGUAGES, PROGRESS_STEP_MS, PROGRESS_STEPS,
    SCAN_DELAY_MS,
};

use super::NoticeBar;
use crate::registry;
use crate::util::notify::{self, Notice};
use crate::util::timer;

const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

pub fn tab_class(view: BlogView, active: BlogView) -> &'static str {
    if view == active { "ebike-tab ebike-tab--active" } else { "ebike-tab" }
}

/// Class of progress step `index` while `generation` runs.
pub fn progress_class(index: usize, generation: Generation) -> &'static str {
    match generation {
        Generation::Running { step } if index < step => "ebike-progress__step ebike-progress__step--done",
        Generation::Running { step } if index == step => "ebike-progress__step ebike-progress__step--active",
        _ => "ebike-progress__step",
    }
}

/// Display name for a language code; unknown codes are shown uppercased.
pub fn language_name(code: &str) -> String {
    LANGUAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map_or_else(|| code.to_uppercase(), |(_, name)| (*name).to_owned())
}

#[component]
pub fn BlogGenerator(state: BlogState) -> impl IntoView {
    let state = RwSignal::new(state);
    let notice = RwSignal::new(None::<Notice>);
    let language_filter = RwSignal::new(None::<String>);
    let primary = StoredValue::new(registry::classes("buttonPrimary"));
    let secondary = StoredValue::new(registry::classes("buttonSecondary"));
    let field = StoredValue::new(registry::classes("field"));

    let generate = move || {
        if state.try_update(BlogState::start_generation) != Some(true) {
            return;
        }
        let progress = timer::every(PROGRESS_STEP_MS, move || {
            state.try_update(BlogState::advance_progress);
        });
        timer::after(GENERATE_DELAY_MS, move || {
            progress.cancel();
            let now = registry::now();
            if state.try_update(|s| s.finish_generation(now).is_some()) == Some(true) {
                notify::success(notice, GENERATED);
            }
        });
    };

    let scan = move || {
        let Some(started) = state.try_update(BlogState::start_scan).flatten() else {
            return;
        };
        notify::info(notice, started);
        timer::after(SCAN_DELAY_MS, move || {
            if let Some(finished) = state.try_update(BlogState::finish_scan).flatten() {
                notify::success(notice, finished);
            }
        });
    };

    let tabs = BlogView::ALL
        .into_iter()
        .map(|view| {
            view! {
                <button
                    type="button"
                    class=move || tab_class(view, state.with(BlogState::view))
                    on:click=move |_| state.update(|s| s.show(view))
                >
                    {view.label()}
                </button>
            }
        })
        .collect_view();

    let generate_button = move || {
        view! {
            <button class=primary.get_value() disabled=move || state.with(BlogState::is_generating) on:click=move |_| generate()>
                {move || if state.with(BlogState::is_generating) { "Generating..." } else { "✨ Generate Article" }}
            </button>
        }
    };

    let scan_button = move || {
        view! {
            <button class=secondary.get_value() disabled=move || state.with(BlogState::is_scanning) on:click=move |_| scan()>
                {move || if state.with(BlogState::is_scanning) { "Scanning..." } else { "🔄 Scan Feeds" }}
            </button>
        }
    };

    let dashboard_view = move || {
        let generation = state.with(BlogState::generation);
        state.with(|s| {
            view! {
                <div class="ebike-blog__stats">
                    <div class="ebike-stat">
                        <span class="ebike-stat__value">{s.feeds().len()}</span>
                        <span class="ebike-stat__label">"Active Feeds"</span>
                    </div>
                    <div class="ebike-stat">
                        <span class="ebike-stat__value">{s.drafts().len()}</span>
                        <span class="ebike-stat__label">"Drafts"</span>
                    </div>
                    <div class="ebike-stat">
                        <span class="ebike-stat__value">{s.schedule().len()}</span>
                        <span class="ebike-stat__label">"Scheduled Weekly"</span>
                    </div>
                </div>
                <div class="ebike-blog__actions">{generate_button()} {scan_button()}</div>
                {(generation != Generation::Idle)
                    .then(|| {
                        view! {
                            <ol class="ebike-progress">
                                {PROGRESS_STEPS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, label)| view! { <li class=progress_class(i, generation)>{*label}</li> })
                                    .collect_view()}
                            </ol>
                        }
                    })}
                <h5>"Content Templates"</h5>
                <div class="ebike-blog__templates">
                    {s.templates()
                        .iter()
                        .map(|template| {
                            view! {
                                <div class="ebike-template">
                                    <strong>{template.key.clone()}</strong>
                                    <span>{format!("{} · {} words", template.tone, template.length)}</span>
                                    <p>{template.structure.join(" → ")}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    };

    let feeds_view = move || {
        state.with(|s| {
            view! {
                <div class="ebike-blog__actions">{scan_button()}</div>
                <ul class="ebike-feeds">
                    {s.feeds()
                        .iter()
                        .map(|feed| {
                            view! {
                                <li class="ebike-feed">
                                    <strong>{feed.name.clone()}</strong>
                                    <span class="ebike-feed__category">{feed.category.clone()}</span>
                                    <a href=feed.url.clone() target="_blank" rel="noopener">{feed.url.clone()}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
        })
    };

    let drafts_view = move || {
        let filter = language_filter.get();
        let drafts = state.with(|s| {
            s.drafts_in(filter.as_deref())
                .map(|draft| {
                    let id = draft.id;
                    view! {
                        <div class="ebike-draft">
                            <h5>{draft.title.clone()}</h5>
                            <p class="ebike-draft__excerpt">{draft.excerpt.clone()}</p>
                            <p class="ebike-draft__meta">{format!("{} · {}", language_name(&draft.language), draft.meta())}</p>
                            <p class="ebike-draft__seo">{s.settings.meta_description(draft)}</p>
                            <button
                                type="button"
                                class=secondary.get_value()
                                on:click=move |_| {
                                    if state.try_update(|s| s.delete_draft(id)) == Some(true) {
                                        tracing::debug!(%id, "draft deleted");
                                    }
                                }
                            >
                                "Delete"
                            </button>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
        });
        let empty = drafts.is_empty();
        view! {
            <div class=field.get_value()>
                <label>"Language"</label>
                <select
                    prop:value=move || language_filter.get().unwrap_or_default()
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        language_filter.set((!code.is_empty()).then_some(code));
                    }
                >
                    <option value="">"All languages"</option>
                    {LANGUAGES.iter().map(|(code, name)| view! { <option value=*code>{*name}</option> }).collect_view()}
                </select>
            </div>
            <div class="ebike-drafts">
                {drafts}
                {empty.then(|| view! { <p class="ebike-drafts__empty">"No drafts yet."</p> })}
            </div>
        }
    };

    let schedule_view = move || {
        state.with(|s| {
            WEEK.into_iter()
                .map(|day| {
                    view! {
                        <div class="ebike-schedule__day">
                            <h5>{day.to_string()}</h5>
                            {s.scheduled_on(day)
                                .map(|post| {
                                    view! {
                                        <div class="ebike-schedule__post">
                                            <span>{post.time}</span>
                                            <strong>{post.title}</strong>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let settings_view = move || {
        let select = move |label: &'static str,
                           options: &'static [(&'static str, &'static str)],
                           read: fn(&BlogState) -> String,
                           write: fn(&mut BlogState, String)| {
            view! {
                <div class=field.get_value()>
                    <label>{label}</label>
                    <select
                        prop:value=move || state.with(read)
                        on:change=move |ev| state.update(|s| write(s, event_target_value(&ev)))
                    >
                        {options.iter().map(|(value, name)| view! { <option value=*value>{*name}</option> }).collect_view()}
                    </select>
                </div>
            }
        };
        view! {
            {select(
                "Tone",
                &[("professional", "Professional"), ("casual", "Casual"), ("technical", "Technical")],
                |s| s.settings.tone.clone(),
                |s, v| s.settings.tone = v,
            )}
            {select(
                "Audience",
                &[("general", "General"), ("enthusiasts", "Enthusiasts"), ("commuters", "Commuters")],
                |s| s.settings.audience.clone(),
                |s, v| s.settings.audience = v,
            )}
            {select("Primary Language", &LANGUAGES, |s| s.settings.primary_language.clone(), |s, v| {
                s.settings.primary_language = v;
            })}
            <label class="ebike-checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| s.settings.auto_translate)
                    on:change=move |ev| state.update(|s| s.settings.auto_translate = event_target_checked(&ev))
                />
                "Translate drafts automatically"
            </label>
            <div class="ebike-checkbox-group">
                {LANGUAGES
                    .iter()
                    .map(|(code, name)| {
                        let code = *code;
                        view! {
                            <label class="ebike-checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.with(|s| s.settings.translation_languages.iter().any(|l| l == code))
                                    on:change=move |ev| {
                                        let on = event_target_checked(&ev);
                                        state.update(|s| {
                                            let languages = &mut s.settings.translation_languages;
                                            languages.retain(|l| l != code);
                                            if on {
                                                languages.push(code.to_owned());
                                            }
                                        });
                                    }
                                />
                                {*name}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div class=field.get_value()>
                <label>"Focus Keywords"</label>
                <textarea
                    prop:value=move || state.with(|s| s.settings.focus_keywords.join(", "))
                    on:change=move |ev| state.update(|s| s.settings.set_keywords(&event_target_value(&ev)))
                ></textarea>
            </div>
            <div class=field.get_value()>
                <label>"Meta Description Template"</label>
                <textarea
                    prop:value=move || state.with(|s| s.settings.meta_template.clone())
                    on:input=move |ev| state.update(|s| s.settings.meta_template = event_target_value(&ev))
                ></textarea>
            </div>
        }
    };

    let body = move || match state.with(BlogState::view) {
        BlogView::Dashboard => dashboard_view().into_any(),
        BlogView::Feeds => feeds_view().into_any(),
        BlogView::Drafts => drafts_view().into_any(),
        BlogView::Schedule => view! { <div class="ebike-schedule">{schedule_view}</div> }.into_any(),
        BlogView::Settings => settings_view().into_any(),
    };

    view! {
        <div class="ebike-blog">
            <NoticeBar notice=notice />
            <nav class="ebike-tabs">{tabs}</nav>
            <div class="ebike-blog__view">{body}</div>
        </div>
    }
}

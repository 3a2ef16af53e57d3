//! Wishlist panel.
//!
//! Every panel on the page renders the toolkit's single wishlist and
//! re-reads it whenever a wishlist-changed event reaches `window`, so an add
//! from page script or a remove in another panel shows up everywhere.

use leptos::prelude::*;
use toolkit::ToolkitError;
use toolkit::module::ToolKind;
use toolkit::wishlist::{EMPTY_MESSAGE, Wishlist, WishlistView};

use super::NoticeBar;
use crate::registry;
use crate::util::notify::{self, Notice};

/// Current rows, or `None` when the toolkit is busy or has no wishlist.
fn read_view() -> Option<WishlistView> {
    registry::with_toolkit(|toolkit| toolkit.wishlist().map(Wishlist::view)).flatten()
}

#[component]
pub fn WishlistPanel() -> impl IntoView {
    let list = RwSignal::new(read_view());
    let notice = RwSignal::new(None::<Notice>);
    let button_class = registry::classes("buttonSecondary");

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener_untyped(crate::util::event_sink::WISHLIST_CHANGED, move |_| {
            list.try_set(read_view());
        });
        on_cleanup(move || handle.remove());
    }

    let remove = move |id: String| {
        let removed = registry::with_toolkit(|toolkit| toolkit.remove_from_wishlist(&id))
            .unwrap_or(Err(ToolkitError::ModuleNotLoaded(ToolKind::Wishlist)));
        match removed {
            Ok(_) => list.set(read_view()),
            Err(e) => notify::error(notice, &e),
        }
    };

    view! {
        <div class="ebike-wishlist">
            <NoticeBar notice=notice />
            {move || {
                let Some(view) = list.get() else {
                    return view! { <p class="ebike-wishlist__empty">{EMPTY_MESSAGE}</p> }.into_any();
                };
                let count_label = view.count_label.clone();
                let body = if view.is_empty() {
                    view! { <p class="ebike-wishlist__empty">{EMPTY_MESSAGE}</p> }.into_any()
                } else {
                    view
                        .rows
                        .into_iter()
                        .map(|row| {
                            let id = row.id.clone();
                            let button_class = button_class.clone();
                            view! {
                                <div class="ebike-wishlist__item" data-product-id=row.id>
                                    <span class="ebike-wishlist__name">{row.name}</span>
                                    <span class="ebike-wishlist__price">{row.price}</span>
                                    <button class=button_class on:click=move |_| remove(id.clone())>
                                        "Remove"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                };
                view! {
                    <div class="ebike-wishlist__header">
                        <span class="ebike-wishlist__count">{count_label}</span>
                    </div>
                    <div class="ebike-wishlist__items">{body}</div>
                }
                    .into_any()
            }}
        </div>
    }
}

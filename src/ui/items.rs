//! Item data hook.
//!
//! Wraps the item-list fetch in a single app-wide cache slot: a fetched
//! result stays fresh for five minutes, remounts inside that window reuse it
//! without a request, and `refetch` always goes back to the server. Callers
//! invoke `refetch` after every successful mutation so the displayed list is
//! whatever the backend last confirmed.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

use crate::core::cache::ItemsCache;
use crate::core::models::Item;

/// App-wide cache slot for the item list, provided at the root so it
/// outlives individual list mounts.
#[derive(Clone, Copy)]
pub struct ItemsCacheSlot(RwSignal<Option<ItemsCache>>);

pub fn provide_items_cache() {
    provide_context(ItemsCacheSlot(RwSignal::new(None)));
}

/// Reactive fetch state exposed to the list view.
#[derive(Clone, Copy)]
pub struct ItemsQuery {
    /// Server-ordered item list, `None` until the first result lands.
    pub data: RwSignal<Option<Vec<Item>>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    cache: ItemsCacheSlot,
}

impl ItemsQuery {
    /// Force a fresh request regardless of cache freshness.
    pub fn refetch(&self) {
        self.load(true);
    }

    #[cfg(not(feature = "ssr"))]
    fn load(&self, force: bool) {
        let query = *self;

        if !force {
            if let Some(cache) = query.cache.0.get_untracked() {
                if cache.is_fresh(js_sys::Date::now()) {
                    query.data.set(Some(cache.items));
                    query.loading.set(false);
                    return;
                }
            }
        }

        query.loading.set(true);
        query.error.set(None);

        spawn_local(async move {
            match crate::ui::api::fetch_items().await {
                Ok(items) => {
                    query
                        .cache
                        .0
                        .set(Some(ItemsCache::new(items.clone(), js_sys::Date::now())));
                    query.data.set(Some(items));
                }
                Err(err) => {
                    query.error.set(Some(err.to_string()));
                }
            }
            query.loading.set(false);
        });
    }

    #[cfg(feature = "ssr")]
    fn load(&self, _force: bool) {}
}

/// Mount-time hook for the item list. Reuses the cached result when it is
/// still fresh, otherwise issues a request.
pub fn use_items() -> ItemsQuery {
    let cache = expect_context::<ItemsCacheSlot>();

    let query = ItemsQuery {
        data: RwSignal::new(None),
        loading: RwSignal::new(true),
        error: RwSignal::new(None),
        cache,
    };

    // Effect so the initial load runs client-side, after hydration.
    Effect::new(move |_| {
        query.load(false);
    });

    query
}

//! Villages Page
//!
//! Searchable, filterable and sortable list of village cards.

use indeks_desa::dataset::{Dataset, Dimension};
use indeks_desa::views::{ListQuery, Route, SortKey, VillageListView, VillageRow};
use leptos::*;
use leptos_router::*;

use crate::components::{use_route_ready, Card, CardSkeleton};
use crate::state::use_global_state;

/// Dimensions highlighted on each card
const HIGHLIGHTS: [Dimension; 4] = [
    Dimension::BasicServices,
    Dimension::Economic,
    Dimension::Accessibility,
    Dimension::Governance,
];

#[component]
pub fn Villages() -> impl IntoView {
    let state = use_global_state();
    let ready = use_route_ready(&Route::Villages);
    let dataset = Dataset::builtin();

    // `?cari=` and `?urut=` seed the filters (spotlight links use them)
    let params = use_query_map();
    let initial = params.with_untracked(|p| ListQuery {
        search: p.get("cari").cloned().unwrap_or_default(),
        province: None,
        sort: p.get("urut").and_then(|s| SortKey::parse(s)).unwrap_or_default(),
    });
    let query = create_rw_signal(initial);

    // Follow later navigations to this page with different parameters
    create_effect(move |_| {
        let search = params.with(|p| p.get("cari").cloned());
        let sort = params.with(|p| p.get("urut").and_then(|s| SortKey::parse(s)));
        query.update(|q| {
            if let Some(search) = search {
                q.search = search;
            }
            if let Some(sort) = sort {
                q.sort = sort;
            }
        });
    });

    let export = move |_| {
        let format = state
            .preferences
            .try_with_value(|store| store.current().export_format)
            .unwrap_or_default();
        state.show_success(&format!("Ekspor {} belum tersedia di versi web", format.key().to_uppercase()));
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Daftar Desa"</h1>
                <p class="text-lg text-gray-600 dark:text-gray-400 mt-1">
                    "Daftar lengkap desa dengan data Indeks Desa"
                </p>
            </div>

            <Card title="Filter & Pencarian" icon="🔎">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                    <input
                        type="text"
                        placeholder="Cari desa atau wilayah..."
                        prop:value=move || query.with(|q| q.search.clone())
                        on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                        class=FIELD_CLASS
                    />

                    <select
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            query.update(|q| q.province = (!value.is_empty()).then_some(value));
                        }
                        class=FIELD_CLASS
                    >
                        <option value="">"Semua Provinsi"</option>
                        {dataset.provinces().into_iter().map(|province| view! {
                            <option value=province>{province}</option>
                        }).collect_view()}
                    </select>

                    <select
                        on:change=move |ev| {
                            if let Some(sort) = SortKey::parse(&event_target_value(&ev)) {
                                query.update(|q| q.sort = sort);
                            }
                        }
                        class=FIELD_CLASS
                    >
                        {SortKey::ALL.into_iter().map(|sort| view! {
                            <option
                                value=sort.key()
                                prop:selected=move || query.with(|q| q.sort == sort)
                            >
                                {sort.label()}
                            </option>
                        }).collect_view()}
                    </select>

                    <button
                        on:click=export
                        class="px-4 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                    >
                        "⬇ Ekspor Data"
                    </button>
                </div>
            </Card>

            {move || {
                if !ready.get() {
                    return view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {(0..6).map(|_| view! { <CardSkeleton /> }).collect_view()}
                        </div>
                    }.into_view();
                }

                let list = query.with(|q| VillageListView::build(dataset.list(), q));
                view! {
                    <p class="text-sm text-gray-600 dark:text-gray-400">{list.showing_label()}</p>
                    {if list.is_empty() {
                        view! {
                            <div class="py-12 text-center text-gray-500 dark:text-gray-400">
                                <div class="text-4xl mb-2">"🏚️"</div>
                                "Tidak ada desa yang cocok dengan filter"
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {list.rows.into_iter().map(|row| view! { <VillageCard row=row /> }).collect_view()}
                            </div>
                        }.into_view()
                    }}
                }.into_view()
            }}
        </div>
    }
}

const FIELD_CLASS: &str = "p-3 border border-gray-300 rounded-lg bg-white focus:ring-2 focus:ring-blue-500 \
                           focus:outline-none dark:bg-gray-800 dark:border-gray-600";

#[component]
fn VillageCard(row: VillageRow<'static>) -> impl IntoView {
    let record = row.record;

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 p-6
                    hover:shadow-lg transition-shadow space-y-4">
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="text-lg font-semibold">{record.name.clone()}</h3>
                    <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">
                        {format!("📍 {}, {}", record.location.sub_district, record.location.district)}
                    </p>
                </div>
                <span class=format!("px-2 py-1 rounded-full text-xs font-medium {}", row.status.badge_class())>
                    {row.status.label()}
                </span>
            </div>

            <div class="flex items-center justify-between">
                <span class="text-sm font-medium text-gray-600 dark:text-gray-400">"Indeks Total"</span>
                <div class="flex items-center gap-2">
                    <span class="text-2xl font-bold">{format!("{:.1}", record.index)}</span>
                    {if row.trending_up {
                        view! { <span class="text-green-600">"↗"</span> }
                    } else {
                        view! { <span class="text-red-600">"↘"</span> }
                    }}
                </div>
            </div>

            <div class="grid grid-cols-2 gap-2 text-xs">
                {HIGHLIGHTS.into_iter().map(|dimension| view! {
                    <div class="flex justify-between">
                        <span class="text-gray-600 dark:text-gray-400">{dimension.label()}</span>
                        <span class="font-medium">{format!("{:.1}", record.dimension_total(dimension))}</span>
                    </div>
                }).collect_view()}
            </div>

            <A
                href=Route::VillageDetail(record.id.clone()).path()
                class="block text-center px-3 py-2 text-sm font-medium text-blue-600 bg-blue-50 rounded-lg
                       hover:bg-blue-100 dark:bg-blue-900/20 dark:text-blue-400"
            >
                "👁 Detail"
            </A>
        </div>
    }
}

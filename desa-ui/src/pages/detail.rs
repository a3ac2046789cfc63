//! Village Detail Page

use indeks_desa::dataset::{Dataset, Dimension};
use indeks_desa::views::detail::{BACK_LABEL, NOT_FOUND_MESSAGE, NOT_FOUND_TITLE};
use indeks_desa::views::{DetailView, DimensionBreakdown, Route, VillageDetail};
use leptos::*;
use leptos_router::*;

use crate::components::{use_route_ready, Card, Chart, PageSkeleton};
use crate::state::use_global_state;

#[component]
pub fn VillageDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    let ready = use_route_ready(&Route::VillageDetail(
        params.with_untracked(|p| p.get("id").cloned().unwrap_or_default()),
    ));

    view! {
        <div class="space-y-6">
            <A href=Route::Villages.path() class="text-sm text-blue-600 dark:text-blue-400 hover:underline">
                {format!("← {}", BACK_LABEL)}
            </A>

            {move || {
                if !ready.get() {
                    return view! { <PageSkeleton cards=3 /> }.into_view();
                }
                match DetailView::build(Dataset::builtin(), &id()) {
                    DetailView::Found(detail) => view! { <DetailContent detail=detail /> }.into_view(),
                    DetailView::NotFound { .. } => view! { <NotFound /> }.into_view(),
                }
            }}
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center">
            <div class="text-6xl mb-4">"🏚️"</div>
            <h1 class="text-2xl font-bold mb-2">{NOT_FOUND_TITLE}</h1>
            <p class="text-gray-500 dark:text-gray-400 mb-6">{NOT_FOUND_MESSAGE}</p>
            <A
                href=Route::Villages.path()
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                {BACK_LABEL}
            </A>
        </div>
    }
}

#[component]
fn DetailContent(detail: VillageDetail<'static>) -> impl IntoView {
    let state = use_global_state();
    let record = detail.record;
    let status = detail.status;
    let (best, best_score) = detail.best;
    let breakdown = detail.breakdown.clone();
    let strengths = detail.strengths.clone();
    let development_areas = detail.development_areas.clone();
    let detail = store_value(detail);
    let chart = Signal::derive(move || detail.with_value(|d| d.chart(state.chart_theme())));

    view! {
        <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold">{record.name.clone()}</h1>
                <p class="text-gray-600 dark:text-gray-400 mt-1">
                    {format!(
                        "📍 {}, {}, {}",
                        record.location.sub_district, record.location.district, record.location.province
                    )}
                </p>
            </div>
            <div class="text-right">
                <div class="text-4xl font-bold">{format!("{:.1}", record.index)}</div>
                <span class=format!(
                    "inline-block mt-1 px-2 py-1 rounded-full text-xs font-medium {}",
                    status.badge_class()
                )>
                    {status.label()}
                </span>
            </div>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <SummaryTile title="Tahun Data" value=record.year.to_string() caption="Periode penilaian" />
            <SummaryTile
                title="Dimensi Terbaik"
                value=format!("{:.1}", best_score)
                caption=best.label()
            />
            <SummaryTile
                title="Status"
                value=status.label()
                caption="Berdasarkan indeks total"
            />
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Card title="Profil Dimensi" icon="📊" description="Skor total keenam dimensi">
                <Chart config=chart />
            </Card>
            <Card title="Kekuatan & Pengembangan" icon="🎯">
                <DimensionTags title="Kekuatan" dimensions=strengths class="bg-green-50 text-green-700 dark:bg-green-900/20 dark:text-green-300" />
                <div class="h-4" />
                <DimensionTags title="Area Pengembangan" dimensions=development_areas class="bg-yellow-50 text-yellow-700 dark:bg-yellow-900/20 dark:text-yellow-300" />
            </Card>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {breakdown.into_iter().map(|b| view! { <BreakdownCard breakdown=b /> }).collect_view()}
        </div>
    }
}

#[component]
fn SummaryTile(
    title: &'static str,
    #[prop(into)]
    value: String,
    caption: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg p-4 border border-gray-200 dark:border-gray-700">
            <div class="text-sm text-gray-500 dark:text-gray-400">{title}</div>
            <div class="text-2xl font-bold mt-1">{value}</div>
            <div class="text-sm text-gray-500 dark:text-gray-400">{caption}</div>
        </div>
    }
}

#[component]
fn DimensionTags(title: &'static str, dimensions: Vec<Dimension>, class: &'static str) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-sm font-medium text-gray-600 dark:text-gray-400 mb-2">{title}</h3>
            <div class="flex flex-wrap gap-2">
                {dimensions.into_iter().map(|d| view! {
                    <span class=format!("px-3 py-1 rounded-full text-sm {}", class)>{d.label()}</span>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn BreakdownCard(breakdown: DimensionBreakdown) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 p-5">
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-semibold">{breakdown.dimension.label()}</h3>
                <span class="text-xl font-bold">{format!("{:.1}", breakdown.total)}</span>
            </div>
            <div class="space-y-2">
                {breakdown.sub_scores.into_iter().map(|sub| view! {
                    <div>
                        <div class="flex justify-between text-sm">
                            <span class="text-gray-600 dark:text-gray-400">{sub.label}</span>
                            <span class="font-medium">{format!("{:.1}", sub.value)}</span>
                        </div>
                        <div class="h-2 bg-gray-100 dark:bg-gray-700 rounded mt-1">
                            <div
                                class="h-2 bg-blue-500 rounded"
                                style=format!("width: {:.0}%", sub.value.clamp(0.0, 100.0))
                            />
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

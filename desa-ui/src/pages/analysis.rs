//! Analysis Page
//!
//! Year-over-year change, best/worst dimension, threshold lists and the
//! written insights.

use indeks_desa::analytics::{TieBreak, NEEDS_ATTENTION_THRESHOLD, TOP_PERFORMER_THRESHOLD};
use indeks_desa::dataset::{Dataset, VillageRecord};
use indeks_desa::views::{AnalysisReport, Insight, InsightKind, Route};
use leptos::*;
use leptos_router::*;

use crate::components::{use_route_ready, Card, Chart, PageSkeleton};
use crate::pages::ErrorState;
use crate::state::use_global_state;

#[component]
pub fn Analysis() -> impl IntoView {
    let ready = use_route_ready(&Route::Analysis);

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Analisis Indeks Desa"</h1>
                <p class="text-lg text-gray-600 dark:text-gray-400 mt-1">
                    "Analisis mendalam perkembangan dan performa desa"
                </p>
            </div>

            {move || if ready.get() {
                match AnalysisReport::build(Dataset::builtin(), TieBreak::default()) {
                    Ok(report) => view! { <AnalysisContent report=report /> }.into_view(),
                    Err(e) => view! { <ErrorState message=e.to_string() /> }.into_view(),
                }
            } else {
                view! { <PageSkeleton /> }.into_view()
            }}
        </div>
    }
}

#[component]
fn AnalysisContent(report: AnalysisReport<'static>) -> impl IntoView {
    let state = use_global_state();
    let change_label = report.change_label();
    let change_positive = report.year_over_year.map_or(true, |c| c >= 0.0);
    let (best, best_score) = report.best;
    let (worst, worst_score) = report.worst;
    let top = report.top_performers.clone();
    let attention = report.needs_attention.clone();
    let insights = report.insights.clone();
    let report = store_value(report);

    let trend = Signal::derive(move || report.with_value(|r| r.trend_chart(state.chart_theme())));
    let dimensions = Signal::derive(move || report.with_value(|r| r.dimension_chart(state.chart_theme())));
    let comparison = Signal::derive(move || report.with_value(|r| r.comparison_chart(state.chart_theme())));

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            <Headline
                title="Perubahan Tahunan"
                value=change_label
                caption="Dibanding tahun sebelumnya"
                color=if change_positive { "text-green-600" } else { "text-red-600" }
            />
            <Headline
                title="Dimensi Terbaik"
                value=format!("{:.1}", best_score)
                caption=best.label()
                color="text-blue-600"
            />
            <Headline
                title="Perlu Perhatian"
                value=format!("{:.1}", worst_score)
                caption=worst.label()
                color="text-yellow-600"
            />
            <Headline
                title="Top Performers"
                value=top.len().to_string()
                caption="Desa dengan indeks > 85"
                color="text-purple-600"
            />
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Card title="Tren Indeks" icon="📈">
                <Chart config=trend />
            </Card>
            <Card title="Rata-rata Dimensi" icon="📊">
                <Chart config=dimensions />
            </Card>
        </div>

        <Card title="Perbandingan Desa" icon="📍">
            <Chart config=comparison />
        </Card>

        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Card
                title="Top Performers"
                icon="🏆"
                description=format!("Indeks di atas {:.0}", TOP_PERFORMER_THRESHOLD)
            >
                <VillageList records=top empty="Belum ada desa di atas ambang" />
            </Card>
            <Card
                title="Perlu Perhatian"
                icon="⚠️"
                description=format!("Indeks di bawah {:.0}", NEEDS_ATTENTION_THRESHOLD)
            >
                <VillageList records=attention empty="Tidak ada desa di bawah ambang" />
            </Card>
        </div>

        <Card title="Insight & Rekomendasi" icon="💡">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {insights.into_iter().map(|insight| view! { <InsightCard insight=insight /> }).collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn Headline(
    title: &'static str,
    #[prop(into)]
    value: String,
    caption: &'static str,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg p-4 border border-gray-200 dark:border-gray-700">
            <div class="text-sm text-gray-500 dark:text-gray-400">{title}</div>
            <div class=format!("text-3xl font-bold mt-2 {}", color)>{value}</div>
            <div class="text-sm text-gray-500 dark:text-gray-400 mt-1">{caption}</div>
        </div>
    }
}

#[component]
fn VillageList(records: Vec<&'static VillageRecord>, empty: &'static str) -> impl IntoView {
    if records.is_empty() {
        return view! {
            <p class="text-sm text-gray-500 dark:text-gray-400">{empty}</p>
        }.into_view();
    }

    view! {
        <ul class="divide-y divide-gray-100 dark:divide-gray-700">
            {records.into_iter().enumerate().map(|(rank, record)| view! {
                <li class="flex items-center justify-between py-2">
                    <A href=Route::VillageDetail(record.id.clone()).path() class="hover:underline">
                        {format!("{}. {}", rank + 1, record.name)}
                    </A>
                    <span class="font-semibold">{format!("{:.1}", record.index)}</span>
                </li>
            }).collect_view()}
        </ul>
    }.into_view()
}

#[component]
fn InsightCard(insight: Insight) -> impl IntoView {
    let class = match insight.kind {
        InsightKind::Trend => "bg-blue-50 dark:bg-blue-900/20",
        InsightKind::Strength => "bg-green-50 dark:bg-green-900/20",
        InsightKind::Weakness => "bg-yellow-50 dark:bg-yellow-900/20",
        InsightKind::Recommendation => "bg-purple-50 dark:bg-purple-900/20",
    };

    view! {
        <div class=format!("rounded-lg p-4 {}", class)>
            <h3 class="font-semibold mb-1">{insight.title}</h3>
            <p class="text-sm text-gray-700 dark:text-gray-300">{insight.body}</p>
        </div>
    }
}

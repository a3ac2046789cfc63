//! Home Page
//!
//! Summary cards, trend and dimension charts, the village comparison and the
//! strongest/weakest dimensions.

use indeks_desa::dataset::{Dataset, Dimension};
use indeks_desa::views::{HomeView, Route};
use leptos::*;

use crate::components::{use_route_ready, Card, Chart, PageSkeleton, StatCard};
use crate::pages::ErrorState;
use crate::state::use_global_state;

const CARD_ICONS: [&str; 4] = ["📍", "📊", "📈", "👥"];

#[component]
pub fn Home() -> impl IntoView {
    let ready = use_route_ready(&Route::Home);

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard Monitoring Indeks Desa"</h1>
                <p class="text-lg text-gray-600 dark:text-gray-400 mt-1">
                    "Memantau perkembangan dan kesejahteraan desa di seluruh Indonesia"
                </p>
            </div>

            {move || if ready.get() {
                match HomeView::build(Dataset::builtin()) {
                    Ok(home) => view! { <HomeContent home=home /> }.into_view(),
                    Err(e) => view! { <ErrorState message=e.to_string() /> }.into_view(),
                }
            } else {
                view! { <PageSkeleton /> }.into_view()
            }}
        </div>
    }
}

#[component]
fn HomeContent(home: HomeView<'static>) -> impl IntoView {
    let state = use_global_state();
    let cards = home.stat_cards();
    let strongest = home.strongest.clone();
    let weakest = home.weakest.clone();
    let data_year = home.data_year;
    let home = store_value(home);

    let trend = Signal::derive(move || home.with_value(|h| h.trend_chart(state.chart_theme())));
    let dimensions = Signal::derive(move || home.with_value(|h| h.dimension_chart(state.chart_theme())));
    let comparison = Signal::derive(move || home.with_value(|h| h.comparison_chart(state.chart_theme())));
    let today = chrono::Local::now().format("%d/%m/%Y").to_string();

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            {cards.into_iter().zip(CARD_ICONS).map(|(card, icon)| view! {
                <StatCard card=card icon=icon />
            }).collect_view()}
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Card title="Tren Perkembangan" icon="📈"
                  description="Perkembangan rata-rata Indeks Desa dalam 5 tahun terakhir">
                <Chart config=trend />
            </Card>
            <Card title="Analisis Dimensi" icon="📊"
                  description="Rata-rata skor untuk setiap dimensi Indeks Desa">
                <Chart config=dimensions />
            </Card>
        </div>

        <Card title="Perbandingan Antar Desa" icon="📍"
              description="Perbandingan indeks total untuk semua desa yang terpantau">
            <Chart config=comparison />
        </Card>

        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <Card title="Dimensi Terbaik">
                <DimensionScoreList scores=strongest color="text-green-600" />
            </Card>
            <Card title="Perlu Peningkatan">
                <DimensionScoreList scores=weakest color="text-yellow-600" />
            </Card>
            <Card title="Update Terakhir">
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    "Data terakhir diperbarui pada "
                    <span class="font-semibold text-gray-900 dark:text-gray-100">{today}</span>
                </p>
                <p class="text-xs text-gray-500 mt-1">{format!("Tahun data: {}", data_year)}</p>
            </Card>
        </div>
    }
}

#[component]
fn DimensionScoreList(scores: Vec<(Dimension, f64)>, color: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {scores.into_iter().map(|(dimension, score)| view! {
                <div class="flex justify-between items-center">
                    <span class="text-sm text-gray-600 dark:text-gray-400">{dimension.label()}</span>
                    <span class=format!("font-semibold {}", color)>{format!("{:.1}", score)}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

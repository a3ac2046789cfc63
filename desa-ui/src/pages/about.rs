//! About Page

use indeks_desa::views::{AboutView, DimensionInfo, Topic};
use leptos::*;

use crate::components::Card;

#[component]
pub fn About() -> impl IntoView {
    let about = AboutView::new();

    view! {
        <div class="space-y-8">
            <div class="text-center max-w-3xl mx-auto">
                <h1 class="text-3xl font-bold mb-2">{about.title}</h1>
                <p class="text-lg text-gray-600 dark:text-gray-400">{about.intro}</p>
            </div>

            <Card title="Apa itu Indeks Desa?" icon="ℹ️">
                <p class="text-gray-700 dark:text-gray-300 mb-4">{about.definition}</p>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {about.pillars.into_iter().map(|topic| view! { <TopicTile topic=topic /> }).collect_view()}
                </div>
            </Card>

            <Card title="6 Dimensi Indeks Desa" icon="🧭">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    {about.dimensions.into_iter().map(|info| view! { <DimensionTile info=info /> }).collect_view()}
                </div>
            </Card>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Card title="Fitur Dashboard" icon="✨">
                    <div class="space-y-3">
                        {about.features.into_iter().map(|topic| view! { <TopicTile topic=topic /> }).collect_view()}
                    </div>
                </Card>
                <Card title="Manfaat" icon="🎯">
                    <ul class="space-y-2">
                        {about.benefits.into_iter().map(|benefit| view! {
                            <li class="flex items-center gap-2">
                                <span class="text-green-600">"✓"</span>
                                <span>{benefit}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </Card>
            </div>
        </div>
    }
}

#[component]
fn TopicTile(topic: Topic) -> impl IntoView {
    view! {
        <div class="rounded-lg p-4 bg-gray-50 dark:bg-gray-700/50">
            <h3 class="font-semibold mb-1">{topic.title}</h3>
            <p class="text-sm text-gray-600 dark:text-gray-400">{topic.description}</p>
        </div>
    }
}

#[component]
fn DimensionTile(info: DimensionInfo) -> impl IntoView {
    view! {
        <div class="rounded-lg p-4 border border-gray-200 dark:border-gray-700">
            <h3 class="font-semibold mb-1">{info.title}</h3>
            <p class="text-sm text-gray-600 dark:text-gray-400 mb-2">{info.description}</p>
            <div class="flex flex-wrap gap-1">
                {info.sub_dimensions.iter().map(|sub| view! {
                    <span class="text-xs px-2 py-0.5 rounded bg-blue-50 text-blue-700 dark:bg-blue-900/20 dark:text-blue-300">
                        {*sub}
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}

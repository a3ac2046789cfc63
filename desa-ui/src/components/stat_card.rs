//! Stat Card Component
//!
//! One headline number with a caption.

use indeks_desa::views::StatCard as StatCardModel;
use leptos::*;

#[component]
pub fn StatCard(
    card: StatCardModel,
    #[prop(default = "📊")]
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg p-4 border border-gray-200 dark:border-gray-700
                    hover:border-blue-300 dark:hover:border-gray-600 transition">
            <div class="flex items-center justify-between">
                <span class="text-gray-500 dark:text-gray-400 text-sm">{card.title}</span>
                <span class="text-xl">{icon}</span>
            </div>
            <div class="text-3xl font-bold mt-2">{card.value}</div>
            <div class="text-sm text-gray-500 dark:text-gray-400 mt-1 truncate">{card.caption}</div>
        </div>
    }
}

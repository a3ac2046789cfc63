//! Navigation Component
//!
//! Header bar with brand, page links, the search trigger and theme toggle.

use indeks_desa::preferences::Theme;
use indeks_desa::views::{NavItem, NAV_ITEMS};
use leptos::*;
use leptos_router::*;

use crate::state::use_global_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_global_state();
    let open_search = move |_| state.spotlight.update(|s| s.open());

    view! {
        <nav class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏘️"</span>
                        <span class="text-xl font-bold">"Indeks Desa"</span>
                    </A>

                    <div class="hidden md:flex items-center space-x-1">
                        {NAV_ITEMS.into_iter().map(|item| view! { <NavLink item=item /> }).collect_view()}
                    </div>

                    <div class="flex items-center space-x-2">
                        <button
                            on:click=open_search
                            class="flex items-center space-x-2 px-3 py-2 rounded-lg text-sm
                                   text-gray-500 dark:text-gray-400 bg-gray-100 dark:bg-gray-700
                                   hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors"
                        >
                            <span>"🔍"</span>
                            <span>"Cari"</span>
                            <kbd class="hidden md:inline text-xs px-1 rounded border border-gray-300 dark:border-gray-500">
                                "Ctrl K"
                            </kbd>
                        </button>
                        <ThemeToggle />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link, highlighted for its own path and sub-paths
#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let location = use_location();
    let class = move || {
        let base = "px-4 py-2 rounded-lg transition-colors";
        if item.is_active(&location.pathname.get()) {
            format!("{} bg-blue-50 text-blue-700 dark:bg-gray-700 dark:text-white", base)
        } else {
            format!(
                "{} text-gray-600 hover:text-gray-900 hover:bg-gray-100 \
                 dark:text-gray-300 dark:hover:text-white dark:hover:bg-gray-700",
                base
            )
        }
    };

    view! {
        // The router intercepts plain anchors for client-side navigation
        <a href=item.path class=class>
            {item.label}
        </a>
    }
}

/// Light/dark switch; the choice is persisted on its own key
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_global_state();

    view! {
        <button
            on:click=move |_| state.toggle_theme()
            title=move || match state.theme() {
                Theme::Light => "Mode gelap",
                Theme::Dark => "Mode terang",
            }
            class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"
        >
            {move || match state.theme() {
                Theme::Light => "🌙",
                Theme::Dark => "☀️",
            }}
        </button>
    }
}

//! Loading Component
//!
//! Skeleton states shown while a page's simulated load is pending.

use indeks_desa::views::Route;
use leptos::*;

/// `true` once `route`'s simulated delay has elapsed. The timer is cleared if
/// the page unmounts first, so nothing fires on a gone view.
pub fn use_route_ready(route: &Route) -> ReadSignal<bool> {
    let Some(delay) = route.load_delay() else {
        return create_signal(true).0;
    };

    let (ready, set_ready) = create_signal(false);
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    let timeout = gloo_timers::callback::Timeout::new(millis, move || set_ready.set(true));
    on_cleanup(move || drop(timeout));
    ready
}

/// Skeleton loader for cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg p-4 animate-pulse">
            <div class="h-4 bg-gray-200 dark:bg-gray-700 rounded w-1/3 mb-4" />
            <div class="h-8 bg-gray-200 dark:bg-gray-700 rounded w-1/2 mb-2" />
            <div class="h-4 bg-gray-200 dark:bg-gray-700 rounded w-2/3" />
        </div>
    }
}

/// Skeleton loader for chart
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg p-6 animate-pulse">
            <div class="h-6 bg-gray-200 dark:bg-gray-700 rounded w-1/4 mb-4" />
            <div class="h-64 bg-gray-200 dark:bg-gray-700 rounded" />
        </div>
    }
}

/// Page-level skeleton: a row of cards and two chart placeholders
#[component]
pub fn PageSkeleton(
    #[prop(default = 4)]
    cards: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                {(0..cards).map(|_| view! { <CardSkeleton /> }).collect_view()}
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ChartSkeleton />
                <ChartSkeleton />
            </div>
        </div>
    }
}

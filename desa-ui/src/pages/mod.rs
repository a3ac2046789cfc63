//! Pages
//!
//! Top-level page components for each route.

pub mod about;
pub mod analysis;
pub mod detail;
pub mod home;
pub mod settings;
pub mod villages;

pub use about::About;
pub use analysis::Analysis;
pub use detail::VillageDetailPage;
pub use home::Home;
pub use settings::Settings;
pub use villages::Villages;

use leptos::*;

/// Shown when a page's view model cannot be built (e.g. an empty dataset)
#[component]
pub fn ErrorState(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="py-12 text-center">
            <div class="text-4xl mb-2">"⚠️"</div>
            <p class="font-medium">"Data tidak dapat dimuat"</p>
            <p class="text-sm text-gray-500 dark:text-gray-400">{message}</p>
        </div>
    }
}

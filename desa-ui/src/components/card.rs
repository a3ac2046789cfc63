//! Card Component
//!
//! Titled panel used by every page.

use leptos::*;

#[component]
pub fn Card(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    description: Option<String>,
    #[prop(default = "")]
    icon: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 p-6">
            <div class="mb-4">
                <h2 class="text-lg font-semibold flex items-center gap-2">
                    {(!icon.is_empty()).then(|| view! { <span>{icon}</span> })}
                    {title}
                </h2>
                {description.map(|d| view! {
                    <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">{d}</p>
                })}
            </div>
            {children()}
        </section>
    }
}

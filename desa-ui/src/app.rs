//! App Root Component
//!
//! Main application component with routing and global providers.

use indeks_desa::spotlight::is_open_shortcut;
use leptos::*;
use leptos_router::*;

use crate::components::{Nav, SpotlightOverlay, Toast};
use crate::pages::{About, Analysis, Home, Settings, VillageDetailPage, Villages};
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let state = use_global_state();

    // Ctrl/Cmd+K opens the overlay from anywhere
    let shortcut = window_event_listener(ev::keydown, move |ev| {
        if is_open_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            ev.prevent_default();
            state.spotlight.update(|s| s.open());
        }
    });
    on_cleanup(move || shortcut.remove());

    // Presentation lives on the root element instead of the document
    let root_class = move || {
        format!(
            "min-h-screen flex flex-col bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-white {}",
            state.presentation.with(|p| p.root_class())
        )
    };

    view! {
        <Router>
            <div class=root_class>
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/desa" view=Villages />
                        <Route path="/desa/:id" view=VillageDetailPage />
                        <Route path="/analisis" view=Analysis />
                        <Route path="/pengaturan" view=Settings />
                        <Route path="/tentang" view=About />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
                <SpotlightOverlay />
                <Toast />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    use chrono::Datelike;
    let year = chrono::Local::now().year();

    view! {
        <footer class="border-t border-gray-200 dark:border-gray-700 py-4 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-500 dark:text-gray-400">
                <span>{format!("© {} Dashboard Indeks Desa", year)}</span>
                <span>"Tekan Ctrl K untuk mencari"</span>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Halaman tidak ditemukan"</h1>
            <p class="text-gray-500 dark:text-gray-400 mb-6">"Halaman yang Anda cari tidak ada."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Kembali ke Beranda"
            </A>
        </div>
    }
}

//! Spotlight Component
//!
//! Search overlay opened with Ctrl/Cmd+K or the nav button. The panel, its
//! keydown listener and any pending voice timer exist only while the overlay
//! is open.

use gloo_timers::callback::Timeout;
use indeks_desa::spotlight::{
    CannedTranscriber, ResultCategory, SearchResult, SpotlightKey, SpotlightOutcome, SpotlightPhase,
    VoiceTranscriber, QUICK_ACTIONS,
};
use indeks_desa::views::Route;
use leptos::*;
use leptos_router::*;

use crate::state::use_global_state;

/// Where choosing `result` takes the user
pub fn destination(result: &SearchResult) -> String {
    match result.category {
        ResultCategory::Village => search_path(&result.title),
        ResultCategory::Analysis => Route::Analysis.path(),
        ResultCategory::Filter => format!("{}?urut=indeks", Route::Villages.path()),
        ResultCategory::Export => Route::Settings.path(),
    }
}

/// Village list filtered by a free-text query
pub fn search_path(query: &str) -> String {
    let encoded = String::from(js_sys::encode_uri_component(query.trim()));
    format!("{}?cari={}", Route::Villages.path(), encoded)
}

/// Overlay root; mounts the panel while open
#[component]
pub fn SpotlightOverlay() -> impl IntoView {
    let state = use_global_state();
    let is_open = create_memo(move |_| state.spotlight.with(|s| s.is_open()));

    view! {
        <Show when=move || is_open.get()>
            <SpotlightPanel />
        </Show>
    }
}

#[component]
fn SpotlightPanel() -> impl IntoView {
    let state = use_global_state();
    let spotlight = state.spotlight;
    let voice_timer = store_value(None::<Timeout>);
    let input_ref = create_node_ref::<html::Input>();

    let navigate = use_navigate();
    let follow = move |outcome: SpotlightOutcome| match outcome {
        SpotlightOutcome::Selected(result) => navigate(&destination(&result), Default::default()),
        SpotlightOutcome::Submitted(query) => navigate(&search_path(&query), Default::default()),
        _ => {}
    };

    create_effect(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_key = {
        let follow = follow.clone();
        move |ev: web_sys::KeyboardEvent| {
            let Some(key) = SpotlightKey::from_key_name(&ev.key()) else { return };
            ev.prevent_default();
            if let Some(outcome) = spotlight.try_update(|s| s.handle_key(key)) {
                follow(outcome);
            }
        }
    };
    let key_listener = window_event_listener(ev::keydown, on_key);

    on_cleanup(move || {
        key_listener.remove();
        voice_timer.try_update_value(|timer| timer.take());
    });

    let start_voice = move |_| {
        let Some(ticket) = spotlight.try_update(|s| s.start_listening()) else { return };
        let transcriber = CannedTranscriber::default();
        let millis = u32::try_from(transcriber.latency().as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            wasm_bindgen_futures::spawn_local(async move {
                let text = transcriber.transcribe().await;
                spotlight.try_update(|s| s.finish_listening(ticket, &text));
            });
        });
        // Replacing a pending timer drops (and clears) it
        voice_timer.set_value(Some(timeout));
    };

    let stop_voice = move |_| {
        voice_timer.set_value(None);
        spotlight.update(|s| s.stop_listening());
    };

    let listening = move || spotlight.with(|s| s.is_listening());

    view! {
        <div class="fixed inset-0 z-40 flex items-start justify-center pt-24 px-4">
            <div
                class="absolute inset-0 bg-black/40"
                on:click=move |_| spotlight.update(|s| s.close())
            />

            <div class="relative w-full max-w-xl bg-white dark:bg-gray-800 rounded-xl shadow-2xl overflow-hidden">
                <div class="flex items-center px-4 border-b border-gray-200 dark:border-gray-700">
                    <span class="text-gray-400">"🔍"</span>
                    <input
                        node_ref=input_ref
                        type="text"
                        placeholder="Cari desa, analisis, atau perintah..."
                        prop:value=move || spotlight.with(|s| s.query().to_string())
                        on:input=move |ev| spotlight.update(|s| s.set_query(event_target_value(&ev)))
                        class="flex-1 bg-transparent px-3 py-4 focus:outline-none"
                    />
                    {move || if listening() {
                        view! {
                            <button
                                on:click=stop_voice
                                class="px-3 py-1 rounded-lg text-sm bg-red-100 text-red-700 dark:bg-red-900/30 dark:text-red-300"
                            >
                                "⏹ Mendengarkan..."
                            </button>
                        }.into_view()
                    } else {
                        view! {
                            <button
                                on:click=start_voice
                                title="Pencarian suara"
                                class="px-3 py-1 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700"
                            >
                                "🎤"
                            </button>
                        }.into_view()
                    }}
                </div>

                <div class="max-h-96 overflow-y-auto py-2">
                    {move || spotlight.with(|s| match s.phase() {
                        SpotlightPhase::OpenEmpty => view! { <QuickActions /> }.into_view(),
                        SpotlightPhase::OpenNoResults => view! {
                            <div class="px-4 py-8 text-center text-gray-500 dark:text-gray-400">
                                <div class="text-3xl mb-2">"🤷"</div>
                                {format!("Tidak ada hasil untuk \"{}\"", s.query())}
                            </div>
                        }.into_view(),
                        SpotlightPhase::OpenResults => s
                            .results()
                            .iter()
                            .enumerate()
                            .map(|(index, result)| {
                                let follow = follow.clone();
                                view! {
                                    <ResultRow
                                        result=result.clone()
                                        selected=s.selected_index() == Some(index)
                                        on_hover=move || spotlight.update(|s| s.hover(index))
                                        on_choose=move || {
                                            if let Some(result) = spotlight.try_update(|s| s.choose(index)).flatten() {
                                                follow(SpotlightOutcome::Selected(result));
                                            }
                                        }
                                    />
                                }
                            })
                            .collect_view(),
                        SpotlightPhase::Closed => ().into_view(),
                    })}
                </div>

                <div class="flex justify-between px-4 py-2 text-xs text-gray-400 border-t border-gray-200 dark:border-gray-700">
                    <span>"↑↓ navigasi • Enter pilih • Esc tutup"</span>
                    <span>"Ctrl K"</span>
                </div>
            </div>
        </div>
    }
}

/// Preset queries shown while the query is empty
#[component]
fn QuickActions() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="px-4 py-2">
            <div class="text-xs uppercase text-gray-400 mb-2">"Aksi Cepat"</div>
            <div class="grid grid-cols-2 gap-2">
                {QUICK_ACTIONS.into_iter().map(|action| view! {
                    <button
                        on:click=move |_| state.spotlight.update(|s| s.apply_quick_action(&action))
                        class="flex items-center space-x-2 px-3 py-2 rounded-lg text-left
                               bg-gray-50 hover:bg-gray-100 dark:bg-gray-700 dark:hover:bg-gray-600"
                    >
                        <span>{action.icon}</span>
                        <span class="text-sm">{action.label}</span>
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ResultRow<H, C>(
    result: SearchResult,
    selected: bool,
    on_hover: H,
    on_choose: C,
) -> impl IntoView
where
    H: Fn() + 'static,
    C: Fn() + 'static,
{
    let class = if selected {
        "flex items-center space-x-3 px-4 py-3 cursor-pointer bg-blue-50 dark:bg-gray-700"
    } else {
        "flex items-center space-x-3 px-4 py-3 cursor-pointer"
    };

    view! {
        <div class=class on:mouseenter=move |_| on_hover() on:click=move |_| on_choose()>
            <span class="text-xl">{result.icon}</span>
            <div class="flex-1 min-w-0">
                <div class="font-medium truncate">{result.title}</div>
                <div class="text-sm text-gray-500 dark:text-gray-400 truncate">{result.subtitle}</div>
            </div>
            <span class="text-xs px-2 py-1 rounded bg-gray-100 dark:bg-gray-600 text-gray-500 dark:text-gray-300">
                {result.category.as_str()}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indeks_desa::spotlight::MockResultProvider;

    #[test]
    fn test_destination_by_category() {
        let provider = MockResultProvider::default();
        let entries = provider.entries();

        assert_eq!(destination(&entries[2]), "/analisis");
        assert_eq!(destination(&entries[3]), "/desa?urut=indeks");
        assert_eq!(destination(&entries[4]), "/pengaturan");
    }
}

//! Settings Page
//!
//! Theme, typography, export format and general flags. Font changes apply
//! to the page immediately; everything is persisted only on save.

use indeks_desa::analytics::IndexStatus;
use indeks_desa::dataset::Dataset;
use indeks_desa::preferences::{ExportFormat, FontFamily, FontSize, PreferenceSet};
use leptos::*;

use crate::components::{Card, ThemeToggle};
use crate::state::{use_global_state, GlobalState};

#[component]
pub fn Settings() -> impl IntoView {
    let state = use_global_state();

    // Re-read storage on every visit so edits made elsewhere show up
    let loaded = state
        .with_preferences(|store| store.load().clone())
        .unwrap_or_default();
    let draft = create_rw_signal(loaded);

    let save = move |_| match state.with_preferences(|store| store.save(&draft.get_untracked())) {
        Some(Ok(())) => state.show_success("Pengaturan berhasil disimpan!"),
        Some(Err(e)) => state.show_error(&format!("Gagal menyimpan pengaturan: {}", e)),
        None => {}
    };

    let reset = move |_| match state.with_preferences(|store| store.reset().map(|set| set.clone())) {
        Some(Ok(defaults)) => {
            draft.set(defaults);
            state.show_success("Pengaturan berhasil direset!");
        }
        Some(Err(e)) => state.show_error(&format!("Gagal mereset pengaturan: {}", e)),
        None => {}
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Pengaturan Dashboard"</h1>
                <p class="text-lg text-gray-600 dark:text-gray-400 mt-1">
                    "Sesuaikan tampilan dan preferensi dashboard sesuai kebutuhan Anda"
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-6">
                    <Card title="Tampilan" icon="🎨" description="Atur tema dan mode tampilan dashboard">
                        <label class="block text-sm font-medium mb-2">"Mode Tema"</label>
                        <div class="flex items-center space-x-3">
                            <ThemeToggle />
                            <span class="text-sm text-gray-600 dark:text-gray-400">
                                "Toggle antara mode terang dan gelap"
                            </span>
                        </div>
                    </Card>

                    <Card title="Tipografi" icon="🔤" description="Sesuaikan ukuran dan jenis font untuk kenyamanan membaca">
                        <TypographySettings state=state draft=draft />
                    </Card>

                    <Card title="Pengaturan Ekspor" icon="⬇" description="Atur format default untuk ekspor data dan laporan">
                        <label class="block text-sm font-medium mb-2">"Format Ekspor Default"</label>
                        <select
                            on:change=move |ev| {
                                if let Some(format) = ExportFormat::parse(&event_target_value(&ev)) {
                                    edit(state, draft, |set| set.export_format = format);
                                }
                            }
                            class="p-3 w-full max-w-sm border border-gray-300 rounded-lg bg-white
                                   dark:bg-gray-800 dark:border-gray-600"
                        >
                            {ExportFormat::ALL.into_iter().map(|format| view! {
                                <option
                                    value=format.key()
                                    prop:selected=move || draft.with(|d| d.export_format == format)
                                >
                                    {format.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </Card>

                    <Card title="Pengaturan Umum" icon="⚙️" description="Pengaturan fungsionalitas dashboard">
                        <div class="space-y-4">
                            <Toggle
                                label="Auto Save Pengaturan"
                                description="Simpan pengaturan secara otomatis"
                                checked=Signal::derive(move || draft.with(|d| d.auto_save))
                                on_change=move |on| edit(state, draft, |set| set.auto_save = on)
                            />
                            <Toggle
                                label="Notifikasi Update"
                                description="Tampilkan notifikasi saat ada update data"
                                checked=Signal::derive(move || draft.with(|d| d.notifications))
                                on_change=move |on| edit(state, draft, |set| set.notifications = on)
                            />
                        </div>
                    </Card>

                    <div class="flex flex-wrap gap-3">
                        <button
                            on:click=save
                            class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                        >
                            "💾 Simpan Pengaturan"
                        </button>
                        <button
                            on:click=reset
                            class="px-6 py-3 bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            "↺ Reset ke Default"
                        </button>
                    </div>
                </div>

                <Preview draft=draft />
            </div>
        </div>
    }
}

/// Apply `f` to the draft and hand the result to the store without saving
fn edit(state: GlobalState, draft: RwSignal<PreferenceSet>, f: impl FnOnce(&mut PreferenceSet)) {
    draft.update(f);
    let set = draft.get_untracked();
    state.with_preferences(|store| store.edit(set));
}

#[component]
fn TypographySettings(state: GlobalState, draft: RwSignal<PreferenceSet>) -> impl IntoView {
    let set_size = move |size: FontSize| {
        draft.update(|d| d.font_size = size);
        state.with_preferences(|store| store.set_font_size(size));
    };
    let set_family = move |family: FontFamily| {
        draft.update(|d| d.font_family = family);
        state.with_preferences(|store| store.set_font_family(family));
    };

    view! {
        <label class="block text-sm font-medium mb-3">"Ukuran Font"</label>
        <div class="grid grid-cols-1 md:grid-cols-3 gap-3 mb-6">
            {FontSize::ALL.into_iter().map(|size| view! {
                <OptionTile
                    name="fontSize"
                    label=size.label()
                    description=size.description()
                    sample_class=size.class()
                    checked=Signal::derive(move || draft.with(|d| d.font_size == size))
                    on_select=move || set_size(size)
                />
            }).collect_view()}
        </div>

        <label class="block text-sm font-medium mb-3">"Jenis Font"</label>
        <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
            {FontFamily::ALL.into_iter().map(|family| view! {
                <OptionTile
                    name="fontFamily"
                    label=family.label()
                    description=family.description()
                    sample_class=family.class()
                    checked=Signal::derive(move || draft.with(|d| d.font_family == family))
                    on_select=move || set_family(family)
                />
            }).collect_view()}
        </div>
    }
}

#[component]
fn OptionTile<F>(
    name: &'static str,
    label: &'static str,
    description: &'static str,
    sample_class: &'static str,
    checked: Signal<bool>,
    on_select: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <label class=move || {
            let base = "flex items-start gap-3 p-3 border-2 rounded-lg cursor-pointer transition-colors";
            if checked.get() {
                format!("{} border-blue-600 bg-blue-50 dark:bg-blue-900/20", base)
            } else {
                format!("{} border-gray-300 dark:border-gray-600", base)
            }
        }>
            <input type="radio" name=name prop:checked=move || checked.get() on:change=move |_| on_select() />
            <div>
                <div class=format!("font-medium {}", sample_class)>{label}</div>
                <div class="text-xs text-gray-500 dark:text-gray-400">{description}</div>
            </div>
        </label>
    }
}

#[component]
fn Toggle<F>(
    label: &'static str,
    description: &'static str,
    checked: Signal<bool>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(bool) + 'static,
{
    view! {
        <div class="flex items-center justify-between">
            <div>
                <div class="text-sm font-medium">{label}</div>
                <p class="text-sm text-gray-600 dark:text-gray-400">{description}</p>
            </div>
            <input
                type="checkbox"
                class="w-5 h-5"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change(event_target_checked(&ev))
            />
        </div>
    }
}

/// Sample card rendered with the draft typography
#[component]
fn Preview(draft: RwSignal<PreferenceSet>) -> impl IntoView {
    let sample = Dataset::builtin().list().first().map(|r| r.index).unwrap_or_default();
    let status = IndexStatus::from_index(sample);

    view! {
        <div class="lg:sticky lg:top-4 self-start">
            <Card title="Preview" icon="👁">
                <div class=move || draft.with(|d| {
                    format!("rounded-lg border border-gray-200 dark:border-gray-700 p-4 {} {}",
                        d.font_size.class(), d.font_family.class())
                })>
                    <h3 class="font-bold mb-2">"Dashboard Indeks Desa"</h3>
                    <p class="text-gray-600 dark:text-gray-400">
                        "Indeks Total: "
                        <span class="font-semibold">{format!("{:.1}", sample)}</span>
                    </p>
                    <p class="text-gray-600 dark:text-gray-400">
                        "Status: "
                        <span class=format!("px-2 rounded {}", status.badge_class())>{status.label()}</span>
                    </p>
                </div>
            </Card>
        </div>
    }
}

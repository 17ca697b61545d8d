use chipbox::config::Settings;
use chipbox::domain::CandidateList;
use leptos::prelude::*;

mod components;

use components::multi_select::MultiSelect;

/// Demo catalog shared with the command line tool
const DEMO_CATALOG: &str = include_str!("../../chipbox.toml");

fn load_demo() -> anyhow::Result<(String, CandidateList)> {
    let settings = Settings::from_toml_str(DEMO_CATALOG)?;
    let catalog = settings.catalog()?;
    Ok((settings.widget.placeholder, catalog))
}

#[component]
pub fn App() -> impl IntoView {
    match load_demo() {
        Ok((placeholder, catalog)) => {
            let (selected, set_selected) = signal(Vec::<String>::new());
            view! {
                <div class="min-h-screen bg-gray-100 flex flex-col items-center pt-24 gap-6">
                    <h1 class="text-2xl font-bold text-gray-800">"Pick people"</h1>
                    <MultiSelect
                        candidates=catalog
                        placeholder=placeholder
                        on_change=Callback::new(move |ids: Vec<String>| set_selected.set(ids))
                    />
                    <p class="text-sm text-gray-500">
                        "Selected ids: "
                        {move || {
                            let ids = selected.get();
                            if ids.is_empty() { "none".to_string() } else { ids.join(", ") }
                        }}
                    </p>
                </div>
            }
            .into_any()
        }
        Err(err) => {
            log::error!("Failed to load demo catalog: {:#}", err);
            view! {
                <div class="p-4 text-red-600">{format!("Failed to load candidates: {:#}", err)}</div>
            }
            .into_any()
        }
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // A second init only fails because a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}

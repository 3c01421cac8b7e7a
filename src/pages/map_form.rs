use std::time::Duration;

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::data::candidate::Candidate;
use crate::data::map_config::MapConfig;
use crate::data::preview::couple_slug;
use crate::data::search_sequence::SearchSequence;
use crate::pages::love_map::LoveMap;
use crate::pages::typeahead::TypeaheadSelect;
use crate::utils::capture::capture_element;
use crate::utils::debounce::use_debounced;
use crate::utils::geocoding::GeocodingClient;

const MAP_ELEMENT_ID: &str = "love-map";

#[component]
pub fn LoveMapForm(config: MapConfig) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (options, set_options) = create_signal(Vec::<Candidate>::new());
    let (position, set_position) = create_signal(config.default_position);

    let (couple_names, set_couple_names) = create_signal(String::new());
    let (preview_src, set_preview_src) = create_signal::<Option<String>>(None);
    let custom_url = Memo::new(move |_| couple_slug(&couple_names.get()));

    let client = GeocodingClient::from_config(&config);
    let sequence = SearchSequence::new();
    let debounced_query =
        use_debounced::<String>(query.into(), Duration::from_millis(config.debounce_ms));

    Effect::new(move |_| {
        let text = debounced_query.get();
        let Some(ticket) = sequence.begin(&text) else {
            set_options.set(Vec::new());
            return;
        };

        let client = client.clone();
        let sequence = sequence.clone();

        leptos::task::spawn_local(async move {
            let candidates = client.search(&text).await;
            if !sequence.publish(ticket, candidates, |found| set_options.set(found)) {
                log!("Dropping stale results for {:?}", text);
            }
        });
    });

    let on_input_change = Callback::new(move |value: String| set_query.set(value));

    let on_change = Callback::new(move |candidate: Candidate| match candidate.position() {
        Ok(selected) => set_position.set(selected),
        Err(err) => warn!("Ignoring candidate {:?}: {}", candidate.label, err),
    });

    let handle_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        leptos::task::spawn_local(async move {
            let selector = format!("#{}", MAP_ELEMENT_ID);
            if let Some(image) = capture_element(&selector).await {
                set_preview_src.set(Some(image));
            }
        });
    };

    view! {
        <div class="form-map-container flex flex-col md:flex-row justify-around gap-8 px-8">
            <div class="form-container w-full max-w-lg">
                <form on:submit=handle_generate class="space-y-4">
                    <div>
                        <label for="coupleNames" class="block text-lg font-medium">
                            "Nome do casal"
                        </label>
                        <input
                            id="coupleNames"
                            type="text"
                            class="mt-1 block w-full border border-gray-300 rounded-md shadow-sm p-2 text-gray-900"
                            placeholder="Ex: João e Maria"
                            prop:value=couple_names
                            on:input=move |ev| set_couple_names.set(event_target_value(&ev))
                        />
                    </div>

                    <div>
                        <label for="locationInput" class="block text-lg font-medium">
                            "Digite a localização"
                        </label>
                        <TypeaheadSelect
                            options=options
                            on_input_change=on_input_change
                            on_change=on_change
                            input_id="locationInput"
                        />
                    </div>

                    <div id=MAP_ELEMENT_ID class="w-full bg-gray-200 text-gray-900">
                        <LoveMap position=position config=config.clone() />
                    </div>

                    <p class="text-xs text-gray-400 italic">
                        "A busca de endereços é feita diretamente no seu navegador via nominatim.org."
                    </p>

                    <button
                        type="submit"
                        class="mt-4 bg-red-500 text-white font-bold py-2 px-4 rounded-lg hover:bg-red-600 transition"
                    >
                        "Gerar mapa personalizado"
                    </button>
                </form>
            </div>

            <div class="map-preview-container w-full max-w-lg">
                <h3 class="text-xl font-bold">"Pré-visualização do mapa"</h3>
                {move || match preview_src.get() {
                    Some(src) => view! {
                        <img
                            src=src
                            class="w-full mt-4 border border-gray-300 rounded-lg"
                            alt="Mapa Gerado"
                        />
                    }.into_any(),
                    None => view! {
                        <div class="w-full h-64 mt-4 border border-dashed border-gray-500 rounded-lg flex items-center justify-center text-gray-400">
                            "Clique em \"Gerar mapa personalizado\" para ver a prévia"
                        </div>
                    }.into_any(),
                }}
                <p class="mt-2">
                    "URL personalizada: " <span id="customURL">{custom_url}</span>
                </p>
            </div>
        </div>
    }
}

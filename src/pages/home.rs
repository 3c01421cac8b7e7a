use leptos::logging::warn;
use leptos::prelude::*;

use crate::data::map_config::MapConfig;
use crate::pages::map_form::LoveMapForm;
use crate::pages::sections::{Faq, Features, Footer, Header, Hero};

#[server(GetMapConfig)]
pub async fn get_map_config() -> Result<MapConfig, ServerFnError> {
    use crate::settings::Settings;

    Ok(Settings::current().map.clone())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let map_config = OnceResource::new(get_map_config());

    view! {
        <div class="bg-white text-gray-900">
            <Header />
            <Hero />
            <Features />

            <section class="relative bg-gray-900 text-white py-24" id="forms">
                <Suspense fallback=move || view! {
                    <div class="flex justify-center items-center py-4">
                        <div class="animate-spin rounded-full h-8 w-8 border-t-2 border-b-2 border-red-500"></div>
                    </div>
                }>
                    {move || map_config.get().map(|result| {
                        let config = result.unwrap_or_else(|err| {
                            warn!("Error fetching map config, using defaults: {:?}", err);
                            MapConfig::default()
                        });
                        view! { <LoveMapForm config=config /> }
                    })}
                </Suspense>
            </section>

            <Faq />
            <Footer />
        </div>
    }
}

#![recursion_limit = "512"]

#[cfg(feature = "ssr")]
const SETTINGS_PATH: &str = "settings.yaml";

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use love_maps_lib::app::{shell, App};
    use love_maps_lib::settings::Settings;

    env_logger::init();

    let settings = Settings::load_or_default(SETTINGS_PATH)?;
    log::info!(
        "Geocoding with {}, tiles from {}",
        settings.map.geocoder_url,
        settings.map.tile_url.split('?').next().unwrap_or_default()
    );
    settings.install();

    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

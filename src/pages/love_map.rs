use leptos::prelude::*;
use leptos_leaflet::leaflet::Map;
use leptos_leaflet::prelude::{
    JsRwSignal, MapContainer, Marker, Popup, Position as LatLng, TileLayer,
};

use crate::data::map_config::MapConfig;
use crate::data::position::Position;

pub const MARKER_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/10740/10740584.png";
pub const MARKER_SHADOW_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-shadow.png";

#[component]
pub fn LoveMap(#[prop(into)] position: Signal<Position>, config: MapConfig) -> impl IntoView {
    let center: Memo<LatLng> = Memo::new(move |_| {
        let Position {
            latitude,
            longitude,
        } = position.get();
        LatLng::new(latitude, longitude)
    });

    // MapContainer only reads `center` on mount; later moves go through the map.
    let map = JsRwSignal::new_local(None::<Map>);
    Effect::new(move |_| {
        let new_pos = center.get();
        if let Some(map) = map.get_untracked() {
            map.set_view(&new_pos.as_lat_lng(), map.get_zoom());
        }
    });

    let popup_text = config.popup_text.clone();

    view! {
        <MapContainer
            style="height: 333px; width: 100%; outline-style: auto"
            center=center.get_untracked()
            zoom=config.default_zoom
            set_view=true
            map=map.write_only()
        >
            <TileLayer url=config.tile_url.clone() attribution=config.tile_attribution.clone() />
            {move || {
                let popup_text = popup_text.clone();
                view! {
                    <Marker position=center.get() draggable=false>
                        <Popup>
                            <strong>"Localização encontrada!"</strong>
                            <br />
                            {popup_text}
                        </Popup>
                    </Marker>
                }
            }}
        </MapContainer>
    }
}

/// Points Leaflet's default marker at our hosted icon and shadow instead of
/// the images it would resolve next to its stylesheet. Must run before the
/// first marker is created.
#[cfg(not(feature = "ssr"))]
pub fn install_marker_icons() {
    use js_sys::{Object, Reflect};
    use leptos::logging::warn;
    use wasm_bindgen::{JsCast, JsValue};

    let get = |target: &JsValue, key: &str| {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    };

    let prototype = get(&JsValue::from(js_sys::global()), "L")
        .and_then(|leaflet| get(&leaflet, "Icon"))
        .and_then(|icon| get(&icon, "Default"))
        .and_then(|default| get(&default, "prototype"));

    let Some(prototype) = prototype else {
        warn!("Leaflet not loaded, keeping default marker icons");
        return;
    };

    if let Some(prototype) = prototype.dyn_ref::<Object>() {
        let _ = Reflect::delete_property(prototype, &JsValue::from_str("_getIconUrl"));
    }

    let Some(options) = get(&prototype, "options") else {
        return;
    };

    for (key, url) in [
        ("iconUrl", MARKER_ICON_URL),
        ("iconRetinaUrl", MARKER_ICON_URL),
        ("shadowUrl", MARKER_SHADOW_URL),
    ] {
        let _ = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(url));
    }
}

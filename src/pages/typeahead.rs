use leptos::html::Div;
use leptos::prelude::*;

use crate::data::candidate::Candidate;
use crate::data::selector::{option_rows, Dropdown, SelectorState};

pub const NO_RESULTS_TEXT: &str = "Nenhum resultado encontrado";

/// Text input with a suggestion dropdown fed by `options`.
///
/// Every keystroke goes to `on_input_change`; the parent decides when and how
/// to refresh `options`. Picking a row hands the candidate to `on_change`.
#[component]
pub fn TypeaheadSelect(
    #[prop(into)] options: Signal<Vec<Candidate>>,
    on_input_change: Callback<String>,
    on_change: Callback<Candidate>,
    #[prop(optional, default = "Digite uma cidade ou local")] placeholder: &'static str,
    #[prop(optional)] input_id: Option<&'static str>,
) -> impl IntoView {
    let state = RwSignal::new(SelectorState::default());
    let container = NodeRef::<Div>::new();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            let inside = pointer_inside(&container, &ev);
            state.update(|s| s.pointer_down(inside));
        });

        on_cleanup(move || handle.remove());
    });

    let reopen = move || {
        let has_options = options.with(|options| !options.is_empty());
        state.update(|s| s.input_focused(has_options));
    };

    let select = move |index: usize| {
        let picked = options.with_untracked(|options| state.try_update(|s| s.pick(options, index)));
        if let Some(candidate) = picked.flatten() {
            on_change.run(candidate);
        }
    };

    view! {
        <div class="relative" node_ref=container>
            <input
                id=input_id
                type="text"
                class="mt-1 block w-full px-4 py-2 text-gray-900 border border-gray-300 rounded-lg focus:ring-blue-500 focus:border-blue-500"
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || state.with(|s| s.input_value().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.input_changed(value.clone()));
                    on_input_change.run(value);
                }
                on:click=move |_| reopen()
                on:focus=move |_| reopen()
            />

            {move || match state.with(|s| s.dropdown(options.with(Vec::len))) {
                Dropdown::Options => view! {
                    <ul class="absolute w-full mt-2 bg-white text-gray-900 border border-gray-300 rounded-lg max-h-60 overflow-y-auto z-[1000]">
                        <For
                            each=move || options.with(|options| option_rows(options))
                            key=|(index, candidate)| (*index, candidate.value.clone())
                            children=move |(index, candidate): (usize, Candidate)| {
                                let label = candidate.label;
                                view! {
                                    <li
                                        class="cursor-pointer px-4 py-2 hover:bg-blue-500 hover:text-white"
                                        on:click=move |_| select(index)
                                    >
                                        {label}
                                    </li>
                                }
                            }
                        />
                    </ul>
                }.into_any(),
                Dropdown::NoResults => view! {
                    <div class="absolute w-full mt-2 bg-white border border-gray-300 rounded-lg py-2 text-gray-500 text-center z-[1000]">
                        {NO_RESULTS_TEXT}
                    </div>
                }.into_any(),
                Dropdown::Closed => ().into_any(),
            }}
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
fn pointer_inside(container: &NodeRef<Div>, ev: &web_sys::MouseEvent) -> Option<bool> {
    use wasm_bindgen::JsCast;

    let element = container.get_untracked()?;
    let inside = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| element.contains(Some(&node)));
    Some(inside)
}

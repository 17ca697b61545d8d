//! Multi-select combobox component.
//!
//! Renders chips for the selected candidates, a search input and a dropdown
//! of matching candidates. All state lives in a [`Combobox`]; the component
//! only translates DOM events into [`WidgetEvent`]s and renders the
//! resulting [`chipbox::domain::ComboboxView`].

use chipbox::config::DEFAULT_PLACEHOLDER;
use chipbox::domain::{
    dispatch, CandidateList, ChipView, Combobox, DropdownRow, DropdownView, EventOutcome, HighlightedLabel, Key,
    WidgetEvent, WidgetRoot,
};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Widget root backed by a DOM node
struct DomRoot<'a>(&'a web_sys::Node);

impl WidgetRoot for DomRoot<'_> {
    type Target = web_sys::Node;

    fn contains(&self, target: &web_sys::Node) -> bool {
        self.0.contains(Some(target))
    }
}

fn send(combo: RwSignal<Combobox>, event: WidgetEvent) -> EventOutcome {
    log::debug!("MultiSelect: {:?}", event);
    let mut outcome = EventOutcome::default();
    combo.update(|c| outcome = dispatch(c, &event));
    outcome
}

fn apply(event: &web_sys::Event, outcome: EventOutcome) {
    if outcome.prevent_default {
        event.prevent_default();
    }
    if outcome.stop_propagation {
        event.stop_propagation();
    }
}

/// Searchable multi-select with chips
#[component]
pub fn MultiSelect(
    /// Candidates offered in the dropdown
    candidates: CandidateList,
    /// Placeholder for the search input
    #[prop(into, default = DEFAULT_PLACEHOLDER.to_string())]
    placeholder: String,
    /// Called with the selected ids whenever the selection changes
    #[prop(optional)]
    on_change: Option<Callback<Vec<String>>>,
) -> impl IntoView {
    let combo = RwSignal::new(Combobox::new(candidates));
    let model = Memo::new(move |_| combo.with(|c| c.view()));
    let chips = Memo::new(move |_| model.with(|m| m.chips.clone()));
    let dropdown = Memo::new(move |_| model.with(|m| m.dropdown.clone()));
    let selected_ids = Memo::new(move |_| combo.with(|c| c.selected_ids()));
    let root_ref = NodeRef::<Div>::new();

    Effect::new(move |_| {
        let ids = selected_ids.get();
        if let Some(on_change) = on_change {
            on_change.run(ids);
        }
    });

    // Pointer-down runs before any click handler can change the DOM
    let listener = window_event_listener(ev::mousedown, move |event| {
        let Some(root) = root_ref.get_untracked() else {
            return;
        };
        let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let root: &web_sys::Node = &root;
        let mut next = combo.get_untracked();
        if next.handle_pointer_down(&DomRoot(root), &target) {
            combo.set(next);
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <div
            node_ref=root_ref
            class="relative w-full max-w-xl"
            on:click=move |event| {
                let outcome = send(combo, WidgetEvent::RootClick);
                apply(&event, outcome);
            }
        >
            <div class="flex flex-wrap items-center gap-2 px-3 py-2 bg-white border border-gray-300 rounded-md shadow-sm cursor-text">
                <For
                    each=move || chips.get()
                    key=|chip| (chip.index, chip.id.clone())
                    children=move |chip: ChipView| view! { <Chip combo=combo chips=chips chip=chip /> }
                />
                <input
                    type="text"
                    class="flex-1 min-w-[8rem] py-1 text-sm bg-transparent border-none outline-none placeholder-gray-500"
                    placeholder=placeholder
                    prop:value=move || model.with(|m| m.search_text.clone())
                    on:input=move |event| {
                        send(combo, WidgetEvent::Input { text: event_target_value(&event) });
                    }
                    on:keydown=move |event| {
                        let key = Key::from(event.code());
                        let outcome = send(combo, WidgetEvent::KeyDown { key });
                        apply(&event, outcome);
                    }
                />
                <span class="ml-auto text-gray-500 select-none">
                    {move || model.with(|m| m.indicator.glyph())}
                </span>
            </div>
            {move || dropdown.get().map(|dropdown| dropdown_view(combo, dropdown))}
        </div>
    }
}

#[component]
fn Chip(combo: RwSignal<Combobox>, chips: Memo<Vec<ChipView>>, chip: ChipView) -> impl IntoView {
    let ChipView { index, id, label, image, .. } = chip;
    let focused = move || chips.with(|all| all.get(index).is_some_and(|c| c.focused));
    let tab_index = move || chips.with(|all| all.get(index).map_or(-1, ChipView::tab_index));

    view! {
        <div
            tabindex=tab_index
            class=move || {
                let base = "inline-flex items-center gap-1 px-2 py-0.5 rounded-full text-sm font-medium outline-none";
                if focused() {
                    format!("{} bg-green-200 text-green-900 ring-2 ring-green-500", base)
                } else {
                    format!("{} bg-green-100 text-green-800", base)
                }
            }
            on:click=move |event| {
                let outcome = send(combo, WidgetEvent::ChipClick { index });
                apply(&event, outcome);
            }
            on:focus=move |_| {
                send(combo, WidgetEvent::ChipFocus { index });
            }
            on:blur=move |_| {
                send(combo, WidgetEvent::ChipBlur);
            }
        >
            {image.map(|image| view! { <img class="w-5 h-5 rounded-full object-cover" src=image.to_string() alt="" /> })}
            <span>{label}</span>
            <span
                role="button"
                class="ml-1 text-green-500 hover:text-green-700 cursor-pointer"
                on:click=move |event| {
                    let outcome = send(combo, WidgetEvent::ChipDeleteClick { id: id.clone() });
                    apply(&event, outcome);
                }
            >
                "✕"
            </span>
        </div>
    }
}

fn dropdown_view(combo: RwSignal<Combobox>, dropdown: DropdownView) -> impl IntoView {
    let class = if dropdown.visible {
        "absolute z-10 mt-1 w-full bg-white rounded-md shadow-lg ring-1 ring-black ring-opacity-5"
    } else {
        "hidden"
    };

    view! {
        <ul class=class>
            {dropdown.rows.into_iter().map(|row| row_view(combo, row)).collect_view()}
        </ul>
    }
}

fn row_view(combo: RwSignal<Combobox>, row: DropdownRow) -> impl IntoView {
    let DropdownRow { id, label, image, sub_text, hovered } = row;
    let hover_id = id.clone();
    let class = if hovered {
        "flex items-center gap-3 px-4 py-2 text-sm cursor-pointer bg-gray-100"
    } else {
        "flex items-center gap-3 px-4 py-2 text-sm cursor-pointer"
    };

    view! {
        <li
            class=class
            on:click=move |event| {
                let outcome = send(combo, WidgetEvent::CandidateClick { id: id.clone() });
                apply(&event, outcome);
            }
            on:mouseenter=move |_| {
                send(combo, WidgetEvent::CandidateHover { id: hover_id.clone() });
            }
            on:mouseleave=move |_| {
                send(combo, WidgetEvent::CandidateLeave);
            }
        >
            {image.map(|image| view! { <img class="w-8 h-8 rounded-full object-cover" src=image.to_string() alt="" /> })}
            <span class="text-gray-800">{label_view(label)}</span>
            {sub_text.map(|sub_text| view! { <span class="ml-auto text-xs text-gray-400">{sub_text}</span> })}
        </li>
    }
}

fn label_view(label: HighlightedLabel) -> AnyView {
    match label {
        HighlightedLabel::Plain { text } => view! { <span>{text}</span> }.into_any(),
        HighlightedLabel::Emphasized { before, matched, after } => view! {
            <span>{before}<strong class="font-semibold">{matched}</strong>{after}</span>
        }
        .into_any(),
    }
}

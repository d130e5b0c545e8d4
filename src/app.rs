use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::catalog::ItemPreset;
use crate::components::{CatalogPanel, RangeControl, RoomView, SummaryPanel};
use crate::config;
use crate::estimate::{format_area, format_price, Estimate};
use crate::layout::{LayoutAction, LayoutState};
use crate::scene::SceneFrame;
use crate::types::{ActiveTab, ItemCategory};

#[function_component(App)]
pub fn app() -> Html {
    let layout = use_reducer(LayoutState::seeded);
    let active_tab = use_state(ActiveTab::default);

    let dispatch = {
        let dispatcher = layout.dispatcher();
        Callback::from(move |action: LayoutAction| dispatcher.dispatch(action))
    };

    // Delete/Backspace removes the selected item, Escape drops the selection
    {
        let dispatcher = layout.dispatcher();
        use_effect_with((), move |_| {
            let window = window().expect("no global `window` exists");
            let document = window.document().expect("should have a document");

            let listener = EventListener::new(&document, "keydown", move |event| {
                let Some(keyboard_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                    return;
                };
                // Sliders keep their own keyboard handling
                let from_input = keyboard_event
                    .target()
                    .is_some_and(|target| target.dyn_ref::<HtmlInputElement>().is_some());
                if from_input {
                    return;
                }
                match keyboard_event.key().as_str() {
                    "Delete" | "Backspace" => {
                        keyboard_event.prevent_default();
                        dispatcher.dispatch(LayoutAction::RemoveSelected);
                    }
                    "Escape" => dispatcher.dispatch(LayoutAction::Select(None)),
                    _ => {}
                }
            });

            move || drop(listener)
        });
    }

    let on_select = dispatch.reform(LayoutAction::Select);
    let on_delete = dispatch.reform(|_: ()| LayoutAction::RemoveSelected);
    let on_add = dispatch
        .reform(|(category, preset): (ItemCategory, ItemPreset)| LayoutAction::AddItem { category, preset });
    let on_recolor = dispatch.reform(LayoutAction::RecolorSelected);
    let on_room_width = dispatch.reform(LayoutAction::SetRoomWidth);
    let on_room_depth = dispatch.reform(LayoutAction::SetRoomDepth);
    let on_view_angle = dispatch.reform(LayoutAction::SetViewAngle);

    let on_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: ActiveTab| active_tab.set(tab))
    };

    let on_export = Callback::from(|_: ()| {
        log::info!("project export is not available yet");
    });

    // Projection and totals are derived fresh from the current state
    let frame = SceneFrame::build(&layout);
    let estimate = Estimate::of(&layout);
    let selected = layout.selected_item();
    let selected_name = selected.map(|item| AttrValue::from(item.name.clone()));
    let room = layout.room();

    html! {
        <div class="min-h-screen bg-gray-100">
            <header class="bg-white border-b border-gray-200 sticky top-0 z-50">
                <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                    <div>
                        <h1 class="text-xl font-bold">{"Kitchen 3D"}</h1>
                        <p class="text-xs text-gray-500">{"Kitchen planner"}</p>
                    </div>
                    <div class="flex items-center gap-2">
                        <span class="px-2 py-1 rounded bg-gray-100 text-sm">{format_area(estimate.total_area)}</span>
                        <span class="px-2 py-1 rounded bg-sky-500 text-white text-sm font-semibold">{format_price(estimate.total_cost)}</span>
                    </div>
                </div>
            </header>

            <div class="container mx-auto px-4 py-6 grid grid-cols-1 lg:grid-cols-4 gap-6">
                <div class="lg:col-span-3">
                    <div class="p-6 bg-white rounded-lg shadow-lg">
                        <div class="mb-4 flex items-center justify-between">
                            <h2 class="text-lg font-semibold">{"3D View"}</h2>
                            <RangeControl
                                label="View angle"
                                spec={config::VIEW_ANGLE}
                                value={layout.view_angle()}
                                unit="°"
                                on_change={on_view_angle}
                                inline=true
                            />
                        </div>

                        <RoomView
                            {frame}
                            view_angle={layout.view_angle()}
                            {selected_name}
                            {on_select}
                            {on_delete}
                        />

                        <div class="mt-4 grid grid-cols-2 gap-4">
                            <RangeControl
                                label="Room width (cm)"
                                spec={config::ROOM_WIDTH}
                                value={room.width}
                                unit=" cm"
                                on_change={on_room_width}
                            />
                            <RangeControl
                                label="Room depth (cm)"
                                spec={config::ROOM_DEPTH}
                                value={room.depth}
                                unit=" cm"
                                on_change={on_room_depth}
                            />
                        </div>
                    </div>
                </div>

                <div class="space-y-4">
                    <CatalogPanel
                        active_tab={*active_tab}
                        {on_tab}
                        has_selection={selected.is_some()}
                        {on_add}
                        {on_recolor}
                    />
                    <SummaryPanel {estimate} {on_export} />
                </div>
            </div>
        </div>
    }
}

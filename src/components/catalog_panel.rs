use yew::prelude::*;

use crate::catalog::{ItemPreset, APPLIANCES, CABINETS, MATERIALS, TEMPLATES};
use crate::estimate::format_price;
use crate::scene::Color;
use crate::types::{ActiveTab, ItemCategory};

#[derive(Properties, PartialEq)]
pub struct CatalogPanelProps {
    pub active_tab: ActiveTab,
    pub on_tab: Callback<ActiveTab>,
    /// Material swatches are disabled until something is selected
    pub has_selection: bool,
    pub on_add: Callback<(ItemCategory, ItemPreset)>,
    pub on_recolor: Callback<Color>,
}

fn preset_buttons(
    title: &'static str,
    category: ItemCategory,
    presets: &'static [ItemPreset],
    on_add: &Callback<(ItemCategory, ItemPreset)>,
) -> Html {
    html! {
        <div>
            <h3 class="text-sm font-semibold mb-2">{title}</h3>
            {
                presets.iter().map(|preset| {
                    let onclick = {
                        let on_add = on_add.clone();
                        let preset = *preset;
                        Callback::from(move |_: MouseEvent| on_add.emit((category, preset)))
                    };
                    html! {
                        <button
                            key={preset.id}
                            {onclick}
                            class="w-full mb-2 flex items-center gap-2 p-2 rounded border border-gray-200 bg-white hover:bg-gray-100 hover:border-gray-300 text-left"
                        >
                            <div
                                class="w-6 h-6 rounded border border-gray-300"
                                style={format!("background-color: {}", preset.color)}
                            />
                            <div class="flex-1">
                                <div class="text-sm">{preset.name}</div>
                                <div class="text-xs text-gray-500">{format_price(preset.price)}</div>
                            </div>
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component(CatalogPanel)]
pub fn catalog_panel(props: &CatalogPanelProps) -> Html {
    let tabs = ActiveTab::ALL
        .iter()
        .map(|&tab| {
            let on_tab = props.on_tab.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_tab.emit(tab));
            let is_active = tab == props.active_tab;
            html! {
                <button
                    {onclick}
                    class={classes!(
                        "flex-1",
                        "px-2",
                        "py-1",
                        "rounded",
                        "text-sm",
                        if is_active { "bg-white shadow font-medium" } else { "text-gray-500" }
                    )}
                >
                    {tab.title()}
                </button>
            }
        })
        .collect::<Html>();

    let content = match props.active_tab {
        ActiveTab::Furniture => html! {
            <div class="space-y-3 mt-4">
                {preset_buttons("Cabinets", ItemCategory::Cabinet, &CABINETS, &props.on_add)}
                {preset_buttons("Appliances", ItemCategory::Appliance, &APPLIANCES, &props.on_add)}
            </div>
        },
        ActiveTab::Templates => html! {
            <div class="space-y-2 mt-4">
                {
                    TEMPLATES.iter().map(|template| html! {
                        <div key={template.id} class="p-3 rounded border border-gray-200 hover:bg-gray-100">
                            <h4 class="font-semibold text-sm">{template.name}</h4>
                            <p class="text-xs text-gray-500">{template.description}</p>
                            <div class="text-sm font-medium text-sky-600 mt-1">{format_price(template.cost)}</div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        },
        ActiveTab::Materials => html! {
            <div class="space-y-2 mt-4">
                <p class="text-xs text-gray-500 mb-2">{"Select an item to change its color"}</p>
                {
                    MATERIALS.iter().map(|material| {
                        let onclick = {
                            let on_recolor = props.on_recolor.clone();
                            let color = material.color;
                            Callback::from(move |_: MouseEvent| on_recolor.emit(color))
                        };
                        html! {
                            <button
                                key={material.id}
                                data-material={material.id}
                                {onclick}
                                disabled={!props.has_selection}
                                class="w-full flex items-center gap-2 p-2 rounded border border-gray-200 bg-white hover:bg-gray-100 disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                <div
                                    class="w-6 h-6 rounded border-2 border-gray-300"
                                    style={format!("background-color: {}", material.color)}
                                />
                                <span class="text-sm">{material.name}</span>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
        },
    };

    html! {
        <div class="p-4 bg-white rounded-lg shadow-lg">
            <div class="flex gap-1 p-1 bg-gray-100 rounded">
                {tabs}
            </div>
            {content}
        </div>
    }
}

use yew::prelude::*;

use crate::estimate::{format_area, format_price, Estimate};

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub estimate: Estimate,
    pub on_export: Callback<()>,
}

#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let estimate = props.estimate;
    let onclick = {
        let on_export = props.on_export.clone();
        Callback::from(move |_: MouseEvent| on_export.emit(()))
    };

    html! {
        <div class="p-4 bg-white rounded-lg shadow-lg" data-testid="estimate">
            <h3 class="text-sm font-semibold mb-3">{"Estimate"}</h3>
            <div class="space-y-2 text-sm">
                <div class="flex justify-between">
                    <span class="text-gray-500">{"Area:"}</span>
                    <span class="font-medium">{format_area(estimate.total_area)}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-500">{"Items:"}</span>
                    <span class="font-medium">{estimate.item_count}</span>
                </div>
                <div class="border-t pt-2 mt-2 flex justify-between">
                    <span class="font-semibold">{"Total:"}</span>
                    <span class="font-bold text-sky-600">{format_price(estimate.total_cost)}</span>
                </div>
            </div>
            <button
                {onclick}
                class="w-full mt-4 px-4 py-2 bg-sky-500 text-white rounded-lg text-sm font-medium hover:bg-sky-600 transition-colors"
            >
                {"Export project"}
            </button>
        </div>
    }
}

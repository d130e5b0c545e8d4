use crate::config::RangeSpec;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RangeControlProps {
    pub label: AttrValue,
    pub spec: RangeSpec,
    pub value: f64,
    /// Appended to the displayed value (" cm", "°")
    pub unit: &'static str,
    pub on_change: Callback<f64>,
    #[prop_or_default]
    pub inline: bool,
}

#[function_component(RangeControl)]
pub fn range_control(props: &RangeControlProps) -> Html {
    let oninput = {
        let spec = props.spec;
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                match spec.parse_input(&input.value()) {
                    Ok(value) => on_change.emit(value),
                    Err(err) => log::warn!("ignoring slider input: {}", err),
                }
            }
        })
    };

    let slider = html! {
        <input
            type="range"
            min={props.spec.min.to_string()}
            max={props.spec.max.to_string()}
            step={props.spec.step.to_string()}
            value={props.value.to_string()}
            aria-label={props.label.clone()}
            {oninput}
            class={classes!("accent-sky-500", if props.inline { "w-32" } else { "w-full" })}
        />
    };
    let readout = format!("{}{}", props.value, props.unit);

    if props.inline {
        html! {
            <div class="flex items-center gap-2">
                <span class="text-sm text-gray-500">{props.label.to_string()}</span>
                {slider}
                <span class="text-sm font-medium">{readout}</span>
            </div>
        }
    } else {
        html! {
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-2">{props.label.to_string()}</label>
                {slider}
                <span class="block text-sm text-gray-500 mt-1">{readout}</span>
            </div>
        }
    }
}

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use kitchen_configurator::catalog::{APPLIANCES, MATERIALS};
use kitchen_configurator::components::{CatalogPanel, CatalogPanelProps, RoomView, RoomViewProps};
use kitchen_configurator::estimate::{format_price, Estimate};
use kitchen_configurator::layout::{LayoutAction, LayoutState};
use kitchen_configurator::scene::SceneFrame;
use kitchen_configurator::types::{ActiveTab, ItemCategory, ItemId};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement};
use yew::platform::time::sleep;
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> Element {
    let document = gloo::utils::document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

// Renders are scheduled, give the scheduler a turn
async fn settle() {
    sleep(Duration::ZERO).await;
}

fn click(target: &Element) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn room_view_props(state: &LayoutState, selections: Rc<RefCell<Vec<Option<ItemId>>>>) -> RoomViewProps {
    RoomViewProps {
        frame: SceneFrame::build(state),
        view_angle: state.view_angle(),
        selected_name: None,
        on_select: Callback::from(move |id| selections.borrow_mut().push(id)),
        on_delete: Callback::noop(),
    }
}

#[wasm_bindgen_test]
fn seeded_scene_builds_in_browser() {
    let state = LayoutState::seeded();
    let frame = SceneFrame::build(&state);
    assert_eq!(frame.sprites.len(), 3);
    assert_eq!(format_price(Estimate::of(&state).total_cost), "68,000 ₽");
}

#[wasm_bindgen_test]
fn added_item_is_drawn_at_default_point() {
    let state = LayoutState::seeded().reduce(LayoutAction::AddItem {
        category: ItemCategory::Appliance,
        preset: APPLIANCES[2],
    });
    let frame = SceneFrame::build(&state);
    let sprite = frame.sprites.last().unwrap();
    let front = sprite.faces[0].geometry.bounds();
    assert_eq!(front.min.x, 100.0);
    assert_eq!(front.height(), 85.0);
}

#[wasm_bindgen_test]
async fn background_click_clears_selection() {
    let state = LayoutState::seeded();
    let selections = Rc::new(RefCell::new(Vec::new()));
    let root = mount_point();
    yew::Renderer::<RoomView>::with_root_and_props(
        root.clone(),
        room_view_props(&state, selections.clone()),
    )
    .render();
    settle().await;

    let scene = root.query_selector("[data-testid=kitchen-scene]").unwrap().unwrap();
    assert_eq!(scene.get_attribute("data-item-count").as_deref(), Some("3"));

    click(&scene);
    assert_eq!(*selections.borrow(), vec![None]);
}

#[wasm_bindgen_test]
async fn item_click_selects_only_that_item() {
    let state = LayoutState::seeded();
    let fridge = state.items()[2].id;
    let selections = Rc::new(RefCell::new(Vec::new()));
    let root = mount_point();
    yew::Renderer::<RoomView>::with_root_and_props(
        root.clone(),
        room_view_props(&state, selections.clone()),
    )
    .render();
    settle().await;

    let front = root
        .query_selector(&format!("[data-item-id='{}'] rect", fridge))
        .unwrap()
        .unwrap();
    click(&front);
    assert_eq!(*selections.borrow(), vec![Some(fridge)]);
}

#[wasm_bindgen_test]
async fn popover_delete_emits() {
    let state = LayoutState::seeded();
    let deletes = Rc::new(RefCell::new(0));
    let props = RoomViewProps {
        selected_name: Some("Fridge".into()),
        on_delete: {
            let deletes = deletes.clone();
            Callback::from(move |_| *deletes.borrow_mut() += 1)
        },
        ..room_view_props(&state, Rc::default())
    };
    let root = mount_point();
    yew::Renderer::<RoomView>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let button: HtmlElement = root.query_selector("button").unwrap().unwrap().unchecked_into();
    assert_eq!(button.text_content().as_deref(), Some("Delete"));
    button.click();
    assert_eq!(*deletes.borrow(), 1);
}

async fn render_materials(has_selection: bool) -> Element {
    let root = mount_point();
    let props = CatalogPanelProps {
        active_tab: ActiveTab::Materials,
        on_tab: Callback::noop(),
        has_selection,
        on_add: Callback::noop(),
        on_recolor: Callback::noop(),
    };
    yew::Renderer::<CatalogPanel>::with_root_and_props(root.clone(), props).render();
    settle().await;
    root
}

#[wasm_bindgen_test]
async fn material_swatches_disabled_without_selection() {
    let root = render_materials(false).await;
    for material in MATERIALS.iter() {
        let button = root
            .query_selector(&format!("[data-material='{}']", material.id))
            .unwrap()
            .unwrap();
        assert!(button.has_attribute("disabled"), "{} should be disabled", material.id);
    }

    let root = render_materials(true).await;
    for material in MATERIALS.iter() {
        let button = root
            .query_selector(&format!("[data-material='{}']", material.id))
            .unwrap()
            .unwrap();
        assert!(!button.has_attribute("disabled"), "{} should be enabled", material.id);
    }
}

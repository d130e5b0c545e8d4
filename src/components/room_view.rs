use yew::prelude::*;

use crate::config::{self, GRID_CELL, VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use crate::scene::{format_coord, Face, FaceGeometry, ItemSprite, SceneFrame};
use crate::types::ItemId;

#[derive(Properties, PartialEq)]
pub struct RoomViewProps {
    pub frame: SceneFrame,
    pub view_angle: f64,
    /// Name of the selected item, shown in the corner popover
    #[prop_or_default]
    pub selected_name: Option<AttrValue>,
    pub on_select: Callback<Option<ItemId>>,
    pub on_delete: Callback<()>,
}

fn render_geometry(
    geometry: &FaceGeometry,
    fill: String,
    opacity: f64,
    stroke: &'static str,
    stroke_width: f64,
) -> Html {
    let opacity = opacity.to_string();
    let stroke_width = stroke_width.to_string();

    match geometry {
        FaceGeometry::Rectangle {
            origin,
            width,
            height,
            corner_radius,
        } => html! {
            <rect
                x={format_coord(origin.x)}
                y={format_coord(origin.y)}
                width={format_coord(*width)}
                height={format_coord(*height)}
                rx={format_coord(*corner_radius)}
                {fill}
                {opacity}
                {stroke}
                stroke-width={stroke_width}
            />
        },
        FaceGeometry::Polygon { .. } => html! {
            <polygon
                points={geometry.svg_points()}
                {fill}
                {opacity}
                {stroke}
                stroke-width={stroke_width}
            />
        },
    }
}

fn render_face(face: &Face) -> Html {
    render_geometry(
        &face.geometry,
        face.style.fill.to_hex(),
        face.style.opacity,
        face.style.stroke.color,
        face.style.stroke.width,
    )
}

fn render_sprite(sprite: &ItemSprite, on_select: &Callback<Option<ItemId>>) -> Html {
    let onclick = {
        let on_select = on_select.clone();
        let id = sprite.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_select.emit(Some(id));
        })
    };

    html! {
        <g
            key={sprite.id.to_string()}
            data-item-id={sprite.id.to_string()}
            {onclick}
            style={if sprite.selected { "cursor: pointer; filter: url(#shadow);" } else { "cursor: pointer;" }}
        >
            { for sprite.faces.iter().map(render_face) }
            if let Some(label) = &sprite.label {
                <text
                    x={format_coord(label.anchor.x)}
                    y={format_coord(label.anchor.y)}
                    text-anchor="middle"
                    font-size={config::LABEL_FONT_SIZE.to_string()}
                    font-weight="bold"
                    fill={config::ACCENT_COLOR}
                >
                    {label.text.clone()}
                </text>
            }
        </g>
    }
}

/// Pseudo-3D drawing of the room and every placed item
#[function_component(RoomView)]
pub fn room_view(props: &RoomViewProps) -> Html {
    let room = &props.frame.room;

    // Clicking empty floor clears the selection
    let on_background_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(None))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(()))
    };

    let grid_path = format!("M {cell} 0 L 0 0 0 {cell}", cell = GRID_CELL);

    html! {
        <div class="relative bg-gray-50 rounded-lg border-2 border-gray-200 overflow-hidden" style="height: 500px;">
            <svg
                width="100%"
                height="100%"
                viewBox={format!("0 0 {} {}", VIEWBOX_WIDTH, VIEWBOX_HEIGHT)}
                data-testid="kitchen-scene"
                data-view-angle={props.view_angle.to_string()}
                data-item-count={props.frame.sprites.len().to_string()}
                onclick={on_background_click}
            >
                <defs>
                    <pattern id="grid" width={GRID_CELL.to_string()} height={GRID_CELL.to_string()} patternUnits="userSpaceOnUse">
                        <path d={grid_path} fill="none" stroke={config::GRID_STROKE} stroke-width="0.5" />
                    </pattern>
                    <filter id="shadow">
                        <feDropShadow dx="2" dy="4" stdDeviation="3" flood-opacity="0.3" />
                    </filter>
                </defs>

                <rect width={VIEWBOX_WIDTH.to_string()} height={VIEWBOX_HEIGHT.to_string()} fill="url(#grid)" />

                // Room floor strip and back wall
                {render_geometry(&room.floor, config::FLOOR_FILL.to_string(), 1.0, config::ROOM_STROKE, config::ROOM_STROKE_WIDTH)}
                {render_geometry(&room.back_wall, config::WALL_FILL.to_string(), 1.0, config::ROOM_STROKE, config::ROOM_STROKE_WIDTH)}

                { for props.frame.sprites.iter().map(|sprite| render_sprite(sprite, &props.on_select)) }
            </svg>

            if let Some(name) = &props.selected_name {
                <div class="absolute top-4 right-4 bg-white rounded-lg shadow-lg p-3 border border-gray-200">
                    <div class="text-sm font-semibold mb-2">{name.to_string()}</div>
                    <button
                        onclick={on_delete}
                        class="w-full px-3 py-1 bg-red-500 text-white rounded text-sm hover:bg-red-600"
                    >
                        {"Delete"}
                    </button>
                </div>
            }
        </div>
    }
}

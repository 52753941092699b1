//! Slippy-map position picker.
//!
//! Renders a fixed-zoom grid of raster tiles centered on the record's
//! stored coordinates and converts clicks back to latitude/longitude with
//! Web Mercator math. No panning or zooming; the form only needs a single
//! picked point.

use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::form::GeoPosition;

const ZOOM: u32 = 15;
const TILE_SIZE: f64 = 256.0;
/// Matches the map height the form has always used.
const MAP_HEIGHT_PX: i32 = 280;

/// Tile columns/rows rendered on each side of the center tile. Three
/// columns cover viewports up to ~1790px wide at 256px tiles.
const TILE_SPAN_X: i64 = 3;
const TILE_SPAN_Y: i64 = 1;

/// Tile endpoint: Mapbox when an access token was injected at build time,
/// otherwise the public OpenStreetMap server.
fn tile_url(x: i64, y: i64) -> String {
    match option_env!("MAPBOX_TOKEN") {
        Some(token) => format!(
            "https://api.mapbox.com/styles/v1/mapbox/light-v10/tiles/256/{ZOOM}/{x}/{y}@2x?access_token={token}"
        ),
        None => format!("https://a.tile.openstreetmap.org/{ZOOM}/{x}/{y}.png"),
    }
}

/// Longitude/latitude to Web Mercator world coordinates, in tile units at
/// `zoom`.
fn project(latitude: f64, longitude: f64, zoom: u32) -> (f64, f64) {
    let n = f64::from(1u32 << zoom);
    let x = (longitude + 180.0) / 360.0 * n;
    let lat_rad = latitude.to_radians();
    let y = (1.0
        - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI)
        / 2.0
        * n;
    (x, y)
}

/// Inverse of [`project`]: world tile coordinates back to (latitude,
/// longitude) degrees.
fn unproject(x: f64, y: f64, zoom: u32) -> (f64, f64) {
    let n = f64::from(1u32 << zoom);
    let longitude = x / n * 360.0 - 180.0;
    let latitude = (std::f64::consts::PI * (1.0 - 2.0 * y / n))
        .sinh()
        .atan()
        .to_degrees();
    (latitude, longitude)
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Map center; the record's stored coordinates.
    pub center: GeoPosition,
    /// Picked position, rendered as a pin when set.
    pub marker: Option<GeoPosition>,
    /// Emits the clicked latitude/longitude.
    pub on_click: Callback<GeoPosition>,
}

#[function_component]
pub fn MapPicker(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let (center_x, center_y) =
        project(props.center.latitude, props.center.longitude, ZOOM);

    let onclick = {
        let container_ref = container_ref.clone();
        let on_click = props.on_click.clone();

        Callback::from(move |e: MouseEvent| {
            let Some(container) = container_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            let dx = f64::from(e.client_x())
                - (rect.left() + rect.width() / 2.0);
            let dy =
                f64::from(e.client_y()) - (rect.top() + rect.height() / 2.0);

            let (latitude, longitude) = unproject(
                center_x + dx / TILE_SIZE,
                center_y + dy / TILE_SIZE,
                ZOOM,
            );
            on_click.emit(GeoPosition {
                latitude,
                longitude,
            });
        })
    };

    let n = 1i64 << ZOOM;
    let center_tile_x = center_x.floor() as i64;
    let center_tile_y = center_y.floor() as i64;

    let tiles = (-TILE_SPAN_X..=TILE_SPAN_X)
        .flat_map(|col| {
            (-TILE_SPAN_Y..=TILE_SPAN_Y).map(move |row| (col, row))
        })
        .filter_map(|(col, row)| {
            let tile_x = center_tile_x + col;
            let tile_y = center_tile_y + row;
            if tile_y < 0 || tile_y >= n {
                return None;
            }
            // Pixel offset of the tile's top-left corner from the map
            // center.
            let left = tile_x as f64 * TILE_SIZE - center_x * TILE_SIZE;
            let top = tile_y as f64 * TILE_SIZE - center_y * TILE_SIZE;
            let style = format!(
                "position: absolute; \
                 left: calc(50% + {left}px); top: calc(50% + {top}px); \
                 width: {TILE_SIZE}px; height: {TILE_SIZE}px; max-width: none;"
            );
            Some(html! {
                <img
                    key={format!("{tile_x}/{tile_y}")}
                    src={tile_url(tile_x.rem_euclid(n), tile_y)}
                    alt=""
                    draggable="false"
                    {style}
                />
            })
        })
        .collect::<Html>();

    let marker = props.marker.map(|marker| {
        let (marker_x, marker_y) =
            project(marker.latitude, marker.longitude, ZOOM);
        let left = (marker_x - center_x) * TILE_SIZE;
        let top = (marker_y - center_y) * TILE_SIZE;
        let style = format!(
            "position: absolute; \
             left: calc(50% + {left}px); top: calc(50% + {top}px); \
             transform: translate(-50%, -100%);"
        );
        html! {
            <div {style} class="pointer-events-none text-3xl drop-shadow">
                {"📍"}
            </div>
        }
    });

    let container_style =
        format!("position: relative; height: {MAP_HEIGHT_PX}px;");

    html! {
        <div
            ref={container_ref}
            {onclick}
            style={container_style}
            class="w-full overflow-hidden rounded-lg border border-neutral-200
                   dark:border-neutral-700 cursor-crosshair select-none"
        >
            {tiles}
            {marker}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn origin_maps_to_world_center() {
        let (x, y) = project(0.0, 0.0, 0);
        assert_close(x, 0.5);
        assert_close(y, 0.5);
    }

    #[test]
    fn date_line_maps_to_world_edges() {
        let (x, _) = project(0.0, -180.0, 0);
        assert_close(x, 0.0);
        let (x, _) = project(0.0, 180.0, 0);
        assert_close(x, 1.0);
    }

    #[test]
    fn projection_round_trips() {
        for &(latitude, longitude) in &[
            (-27.2092052, -49.6401092),
            (51.5074, -0.1278),
            (0.0, 0.0),
            (-33.8688, 151.2093),
        ] {
            let (x, y) = project(latitude, longitude, ZOOM);
            let (lat2, lon2) = unproject(x, y, ZOOM);
            assert!((latitude - lat2).abs() < 1e-6);
            assert!((longitude - lon2).abs() < 1e-6);
        }
    }

    #[test]
    fn zoom_scales_world_coordinates_linearly() {
        let (x0, y0) = project(-27.2, -49.6, 0);
        let (x15, y15) = project(-27.2, -49.6, 15);
        let scale = f64::from(1u32 << 15);
        assert_close(x15, x0 * scale);
        assert_close(y15, y0 * scale);
    }
}

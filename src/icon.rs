// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterised at startup from the embedded brand SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

const BRAND_SVG: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/branding/iced_vqa.svg"));
const ICON_EDGE: u32 = 128;

/// Renders the brand mark to a square RGBA icon.
/// Returns `None` when parsing or rendering fails; the window then uses the
/// platform default.
pub fn load_window_icon() -> Option<Icon> {
    let tree = match usvg::Tree::from_data(BRAND_SVG, &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            log::warn!("window icon could not be parsed: {err}");
            return None;
        }
    };

    let source = tree.size();
    #[allow(clippy::cast_precision_loss)]
    let edge = ICON_EDGE as f32;
    let transform =
        tiny_skia::Transform::from_scale(edge / source.width(), edge / source.height());

    let mut pixmap = tiny_skia::Pixmap::new(ICON_EDGE, ICON_EDGE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_EDGE, ICON_EDGE)
        .map_err(|err| log::warn!("window icon rejected: {err}"))
        .ok()
}

use crate::core::artwork::{cover_crop, image_media};
use crate::core::constants::{ART_TEXTURE_HEIGHT, ART_TEXTURE_WIDTH};
use crate::core::ArtPiece;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Decode `url` and crop/scale it to exactly one artwork layer.
async fn load_bitmap(url: &str) -> anyhow::Result<web::ImageBitmap> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!(format!("decode failed: {:?}", e)))?;

    let [sx, sy, sw, sh] = cover_crop(
        [img.natural_width(), img.natural_height()],
        [ART_TEXTURE_WIDTH, ART_TEXTURE_HEIGHT],
    )
    .ok_or_else(|| anyhow::anyhow!("image has no intrinsic size"))?;
    let opts = web::ImageBitmapOptions::new();
    opts.set_resize_width(ART_TEXTURE_WIDTH);
    opts.set_resize_height(ART_TEXTURE_HEIGHT);
    opts.set_resize_quality(web::ResizeQuality::High);
    let promise = window
        .create_image_bitmap_with_html_image_element_and_a_sx_and_a_sy_and_a_sw_and_a_sh_and_a_options(
            &img, sx as i32, sy as i32, sw as i32, sh as i32, &opts,
        )
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!(format!("createImageBitmap failed: {:?}", e)))?
        .dyn_into::<web::ImageBitmap>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Fetch every image piece in the background and hang it when it arrives.
/// Frames whose image fails keep their accent wash.
pub fn hang_collection(collection: &'static [ArtPiece], frame_ctx: &Rc<RefCell<FrameContext<'static>>>) {
    for (wall, url) in image_media(collection) {
        let ctx = frame_ctx.clone();
        spawn_local(async move {
            match load_bitmap(url).await {
                Ok(bitmap) => {
                    if let Some(gpu) = ctx.borrow_mut().gpu.as_mut() {
                        gpu.hang_artwork(wall, &bitmap);
                    }
                }
                Err(e) => log::warn!("[art] {} not shown, keeping accent: {:#}", url, e),
            }
        });
    }
}

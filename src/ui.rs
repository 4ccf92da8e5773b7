use crate::constants::{NEXT_BUTTON_ID, PREV_BUTTON_ID};
use crate::core::{ArtPiece, MediaKind, NavEvent, Wall};
use crate::dom;
use web_sys as web;

/// Info panel for the piece on the current wall.
pub fn update_info(document: &web::Document, piece: Option<&ArtPiece>) {
    match piece {
        Some(p) => {
            dom::set_text(document, "art-title", p.title);
            dom::set_text(document, "art-description", p.description);
            if let Some(el) = document.get_element_by_id("art-source") {
                _ = el.set_attribute("href", p.source);
                el.set_text_content(Some(p.source));
            }
            dom::set_hidden(document, "art-info", false);
        }
        None => dom::set_hidden(document, "art-info", true),
    }
}

/// Nav dots, compass label and arrow button state.
pub fn update_wall_nav(document: &web::Document, current: Wall, transitioning: bool) {
    for wall in Wall::ALL {
        if let Some(dot) = document.get_element_by_id(&format!("wall-dot-{}", wall.index())) {
            let cl = dot.class_list();
            _ = if wall == current {
                cl.add_1("active")
            } else {
                cl.remove_1("active")
            };
        }
    }
    dom::set_text(document, "wall-label", current.label());
    for id in [PREV_BUTTON_ID, NEXT_BUTTON_ID] {
        if let Some(btn) = document.get_element_by_id(id) {
            _ = if transitioning {
                btn.set_attribute("disabled", "")
            } else {
                btn.remove_attribute("disabled")
            };
        }
    }
}

fn media_html(piece: &ArtPiece) -> String {
    let url = piece.media.url;
    match piece.media.kind {
        MediaKind::Image => format!("<img src='{}' alt='{}' draggable='false'>", url, piece.title),
        MediaKind::Video => format!("<video src='{}' autoplay muted loop playsinline></video>", url),
        MediaKind::Embed => format!("<iframe src='{}' title='{}' loading='lazy'></iframe>", url, piece.title),
    }
}

pub fn show_modal(document: &web::Document, piece: &ArtPiece) {
    dom::set_text(document, "modal-title", piece.title);
    dom::set_text(document, "modal-description", piece.description);
    if let Some(el) = document.get_element_by_id("modal-source") {
        _ = el.set_attribute("href", piece.source);
    }
    if let Some(el) = document.get_element_by_id("modal-media") {
        el.set_inner_html(&media_html(piece));
    }
    dom::set_hidden(document, "piece-modal", false);
}

pub fn hide_modal(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("modal-media") {
        el.set_inner_html("");
    }
    dom::set_hidden(document, "piece-modal", true);
}

/// Reflect a navigation event in the page chrome.
pub fn apply(document: &web::Document, ev: &NavEvent, transitioning: bool) {
    match ev {
        NavEvent::WallChanged { wall, piece } => {
            update_wall_nav(document, *wall, transitioning);
            update_info(document, *piece);
        }
        NavEvent::PieceSelected(Some(piece)) => show_modal(document, piece),
        NavEvent::PieceSelected(None) => hide_modal(document),
    }
}

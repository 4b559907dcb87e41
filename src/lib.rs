#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod contact;
pub mod core;
mod counter;
mod dom;
mod events;
mod frame;
mod overlay;
mod text;

use constants::*;
use contact::ContactForm;
use counter::CountUpText;
use events::{HeaderTracker, MagneticButton, ScrollProgressBar, TiltCard};
use text::{ScrambleText, TypewriterText};

/// Every mounted unit on the page. Dropping it unmounts them all.
#[derive(Default)]
struct Page {
    progress: Option<ScrollProgressBar>,
    header: Option<HeaderTracker>,
    tilts: Vec<TiltCard>,
    magnets: Vec<MagneticButton>,
    typewriters: Vec<TypewriterText>,
    scrambles: Vec<ScrambleText>,
    counters: Vec<CountUpText>,
    contact: Option<ContactForm>,
}

impl Page {
    fn mount(document: &web::Document) -> Self {
        let page = Page {
            progress: ScrollProgressBar::start(document),
            header: HeaderTracker::start(document),
            tilts: dom::query_all(document, TILT_SELECTOR)
                .iter()
                .map(TiltCard::start)
                .collect(),
            magnets: dom::query_all(document, MAGNETIC_SELECTOR)
                .iter()
                .map(MagneticButton::start)
                .collect(),
            typewriters: dom::query_all(document, TYPEWRITER_SELECTOR)
                .iter()
                .filter_map(|el| TypewriterText::start(document, el))
                .collect(),
            scrambles: dom::query_all(document, SCRAMBLE_SELECTOR)
                .iter()
                .filter_map(|el| ScrambleText::start(document, el))
                .collect(),
            counters: dom::query_all(document, COUNT_UP_SELECTOR)
                .iter()
                .filter_map(|el| CountUpText::start(document, el))
                .collect(),
            contact: ContactForm::start(document),
        };
        log::info!(
            "[page] progress={} header={} tilt={} magnetic={} typewriter={} scramble={} \
             count-up={} contact={}",
            page.progress.is_some(),
            page.header.is_some(),
            page.tilts.len(),
            page.magnets.len(),
            page.typewriters.len(),
            page.scrambles.len(),
            page.counters.len(),
            page.contact.is_some()
        );
        page
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if PAGE.with(|p| p.borrow().is_some()) {
        anyhow::bail!("page already mounted");
    }
    events::pointer::init(&document);
    let page = Page::mount(&document);
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}

/// Unmount every unit: listeners, timers, frame requests and observers.
#[wasm_bindgen]
pub fn teardown() {
    events::pointer::teardown();
    let page = PAGE.with(|p| p.borrow_mut().take());
    drop(page);
    log::info!("[page] torn down");
}

/// Re-mount after a previous [`teardown`].
#[wasm_bindgen]
pub fn remount() -> Result<(), JsValue> {
    init().map_err(|e| JsValue::from_str(&e.to_string()))
}

//! Contact form client: JSON POST to a form relay with a hard timeout.

use crate::constants::*;
use crate::core::constants::{CONTACT_SENT_BANNER_MS, CONTACT_TIMEOUT_MS};
use crate::core::{classify_status, ContactError, ContactMessage, SubmitState};
use crate::dom::{Listener, Timer};
use crate::overlay::{self, Tone};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const FIELDS: [&str; 3] = ["name", "email", "message"];

fn js_err(e: JsValue) -> ContactError {
    ContactError::Transport(format!("{:?}", e))
}

fn field(form: &web::HtmlFormElement, name: &str) -> Option<web::Element> {
    form.query_selector(&format!("[name=\"{}\"]", name))
        .ok()
        .flatten()
}

fn field_value(form: &web::HtmlFormElement, name: &str) -> String {
    match field(form, name) {
        Some(el) => {
            if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
                input.value()
            } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
                area.value()
            } else {
                String::new()
            }
        }
        None => String::new(),
    }
}

fn clear_fields(form: &web::HtmlFormElement) {
    for name in FIELDS {
        if let Some(el) = field(form, name) {
            if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
                input.set_value("");
            } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
                area.set_value("");
            }
        }
    }
}

/// The form's submit button, else its first button.
fn submit_button(form: &web::HtmlFormElement) -> Option<web::HtmlButtonElement> {
    SUBMIT_BUTTON_SELECTORS
        .into_iter()
        .find_map(|sel| form.query_selector(sel).ok().flatten())
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
}

fn set_submit_disabled(form: &web::HtmlFormElement, disabled: bool) {
    if let Some(button) = submit_button(form) {
        button.set_disabled(disabled);
    }
}

/// POST `body` as JSON. Aborts after the contact timeout; 2xx is success.
pub async fn post_json(
    endpoint: &str,
    body: &str,
    controller: &web::AbortController,
) -> Result<(), ContactError> {
    let window = web::window().ok_or_else(|| ContactError::Transport("no window".to_string()))?;

    let headers = web::Headers::new().map_err(js_err)?;
    headers.set("Content-Type", "application/json").map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    init.set_signal(Some(&controller.signal()));
    let request = web::Request::new_with_str_and_init(endpoint, &init).map_err(js_err)?;

    let timeout = {
        let controller = controller.clone();
        Timer::new(move || {
            log::warn!("[contact] request timed out");
            controller.abort();
            None
        })
    };
    timeout.arm(Duration::from_millis(CONTACT_TIMEOUT_MS));
    let fetched = JsFuture::from(window.fetch_with_request(&request)).await;
    timeout.cancel();

    match fetched {
        Ok(v) => {
            let response: web::Response = v.dyn_into().map_err(js_err)?;
            classify_status(response.status())
        }
        Err(_) if controller.signal().aborted() => Err(ContactError::Timeout),
        Err(e) => Err(js_err(e)),
    }
}

pub struct ContactForm {
    listener: Option<Listener>,
    in_flight: Rc<RefCell<Option<web::AbortController>>>,
    banner: Rc<Timer>,
    state: Rc<RefCell<SubmitState>>,
}

impl ContactForm {
    pub fn start(document: &web::Document) -> Option<Self> {
        let form = document
            .get_element_by_id(CONTACT_FORM_ID)?
            .dyn_into::<web::HtmlFormElement>()
            .ok()?;
        let endpoint = form
            .get_attribute(CONTACT_ENDPOINT_ATTR)
            .or_else(|| form.get_attribute("action"))
            .filter(|e| !e.trim().is_empty());
        let Some(endpoint) = endpoint else {
            log::error!("[contact] #{} has no relay endpoint", CONTACT_FORM_ID);
            return None;
        };

        let state = Rc::new(RefCell::new(SubmitState::default()));
        let in_flight: Rc<RefCell<Option<web::AbortController>>> = Rc::new(RefCell::new(None));
        let banner = {
            let state = state.clone();
            let document = document.clone();
            Rc::new(Timer::new(move || {
                if !overlay::is_hidden(&document) {
                    overlay::hide_status(&document);
                }
                state.borrow_mut().reset();
                None
            }))
        };

        let listener = {
            let document = document.clone();
            let form_el = form.clone();
            let in_flight = in_flight.clone();
            let banner = banner.clone();
            let state = state.clone();
            Listener::new(form.as_ref(), "submit", move |ev| {
                ev.prevent_default();
                if !state.borrow_mut().begin() {
                    return;
                }
                banner.cancel();
                let message = ContactMessage::new(
                    &field_value(&form_el, "name"),
                    &field_value(&form_el, "email"),
                    &field_value(&form_el, "message"),
                );
                let body = match message.validate().and_then(|_| message.to_json()) {
                    Ok(b) => b,
                    Err(e) => {
                        state.borrow_mut().finish(Err(e.clone()));
                        overlay::show_status(&document, &e.user_message(), Tone::Error);
                        return;
                    }
                };
                let controller = match web::AbortController::new() {
                    Ok(c) => c,
                    Err(e) => {
                        let err = js_err(e);
                        state.borrow_mut().finish(Err(err.clone()));
                        overlay::show_status(&document, &err.user_message(), Tone::Error);
                        return;
                    }
                };
                *in_flight.borrow_mut() = Some(controller.clone());
                set_submit_disabled(&form_el, true);
                if let Some(text) = state.borrow().banner_text() {
                    overlay::show_status(&document, &text, Tone::Info);
                }

                let state = state.clone();
                let document = document.clone();
                let form_el = form_el.clone();
                let endpoint = endpoint.clone();
                let in_flight = in_flight.clone();
                let banner = banner.clone();
                spawn_local(async move {
                    let result = post_json(&endpoint, &body, &controller).await;
                    in_flight.borrow_mut().take();
                    let failure = result.as_ref().err().map(ToString::to_string);
                    if !state.borrow_mut().finish(result) {
                        log::debug!("[contact] form unmounted, dropping result");
                        return;
                    }
                    let ok = failure.is_none();
                    match failure {
                        None => log::info!("[contact] message sent"),
                        Some(e) => log::error!("[contact] send failed: {}", e),
                    }
                    set_submit_disabled(&form_el, false);
                    if ok {
                        clear_fields(&form_el);
                    }
                    let text = state.borrow().banner_text().unwrap_or_default();
                    overlay::show_status(
                        &document,
                        &text,
                        if ok { Tone::Success } else { Tone::Error },
                    );
                    if ok {
                        banner.arm(Duration::from_millis(CONTACT_SENT_BANNER_MS));
                    }
                });
            })
        };

        Some(Self {
            listener: Some(listener),
            in_flight,
            banner,
            state,
        })
    }

    pub fn stop(&mut self) {
        self.state.borrow_mut().close();
        self.listener.take();
        if let Some(c) = self.in_flight.borrow_mut().take() {
            c.abort();
        }
        self.banner.cancel();
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        self.stop();
    }
}

use crate::constants::CONTACT_STATUS_ID;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Info => "status-info",
            Tone::Success => "status-success",
            Tone::Error => "status-error",
        }
    }
}

/// Show the contact status banner with `text`.
pub fn show_status(document: &web::Document, text: &str, tone: Tone) {
    if let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) {
        el.set_text_content(Some(text));
        let cl = el.class_list();
        for t in [Tone::Info, Tone::Success, Tone::Error] {
            _ = cl.remove_1(t.class());
        }
        _ = cl.add_1(tone.class());
        _ = cl.remove_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "");
        _ = el.set_attribute("role", if tone == Tone::Error { "alert" } else { "status" });
    }
}

#[inline]
pub fn hide_status(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    true
}

//! Browser binding: wires the article page's buttons to a [`ReactionController`].
//!
//! Page contract: `#btn-like` and `#btn-dislike` carry `data-slug`;
//! `#article-likes` and `#article-dislikes` receive the counts.

use crate::adapters::http::HttpTransport;
use crate::core::{
    ActivationEvent, CountDisplay, ReactionBindings, ReactionControl, ReactionController,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

pub const LIKE_BUTTON_ID: &str = "btn-like";
pub const DISLIKE_BUTTON_ID: &str = "btn-dislike";
pub const LIKE_COUNT_ID: &str = "article-likes";
pub const DISLIKE_COUNT_ID: &str = "article-dislikes";

struct DomControl(Element);

impl ReactionControl for DomControl {
    fn slug(&self) -> String {
        self.0.get_attribute("data-slug").unwrap_or_default()
    }
}

struct DomDisplay(Element);

impl CountDisplay for DomDisplay {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }
}

struct DomEvent<'a>(&'a Event);

impl ActivationEvent for DomEvent<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{} not found", id)))
}

/// Bind the like/dislike buttons of the current page. Call once, after the
/// elements exist.
#[wasm_bindgen(js_name = initReactions)]
pub fn init() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let origin = window.location().origin()?;

    let transport =
        HttpTransport::new(&origin).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let like_button = element(&document, LIKE_BUTTON_ID)?;
    let dislike_button = element(&document, DISLIKE_BUTTON_ID)?;

    let controller = Rc::new(ReactionController::init(
        transport,
        ReactionBindings {
            like_control: Rc::new(DomControl(like_button.clone())),
            dislike_control: Rc::new(DomControl(dislike_button.clone())),
            like_display: Rc::new(DomDisplay(element(&document, LIKE_COUNT_ID)?)),
            dislike_display: Rc::new(DomDisplay(element(&document, DISLIKE_COUNT_ID)?)),
        },
    ));

    let on_like = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            controller.on_like_activated(&DomEvent(&event));
        })
    };
    like_button.add_event_listener_with_callback("click", on_like.as_ref().unchecked_ref())?;

    let on_dislike = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            controller.on_dislike_activated(&DomEvent(&event));
        })
    };
    dislike_button
        .add_event_listener_with_callback("click", on_dislike.as_ref().unchecked_ref())?;

    // 監聽器與頁面同生命週期
    on_like.forget();
    on_dislike.forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::EventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Mounts the four contract elements in a fresh container.
    fn mount_article(slug: &str) -> Element {
        let document = document();
        let container = document.create_element("div").unwrap();
        for (tag, id) in [
            ("a", LIKE_BUTTON_ID),
            ("a", DISLIKE_BUTTON_ID),
            ("span", LIKE_COUNT_ID),
            ("span", DISLIKE_COUNT_ID),
        ] {
            let el = document.create_element(tag).unwrap();
            el.set_id(id);
            if tag == "a" {
                el.set_attribute("data-slug", slug).unwrap();
                el.set_attribute("href", "#navigated").unwrap();
            } else {
                el.set_text_content(Some("0"));
            }
            container.append_child(&el).unwrap();
        }
        document.body().unwrap().append_child(&container).unwrap();
        container
    }

    fn cancelable_click() -> Event {
        let init = EventInit::new();
        init.set_cancelable(true);
        Event::new_with_event_init_dict("click", &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_dom_control_reads_data_slug() {
        let el = document().create_element("a").unwrap();
        assert_eq!(DomControl(el.clone()).slug(), "");

        el.set_attribute("data-slug", "hello-world").unwrap();
        assert_eq!(DomControl(el).slug(), "hello-world");
    }

    #[wasm_bindgen_test]
    fn test_dom_display_overwrites_text() {
        let el = document().create_element("span").unwrap();
        el.set_text_content(Some("0"));

        let display = DomDisplay(el.clone());
        display.set_text("5");

        assert_eq!(display.text(), "5");
        assert_eq!(el.text_content().unwrap(), "5");
    }

    #[wasm_bindgen_test]
    fn test_init_fails_without_elements() {
        assert!(document().get_element_by_id(LIKE_BUTTON_ID).is_none());
        assert!(init().is_err());
    }

    #[wasm_bindgen_test]
    fn test_click_default_is_prevented() {
        let container = mount_article("abc");
        init().unwrap();

        let like_button = document().get_element_by_id(LIKE_BUTTON_ID).unwrap();
        let dislike_button = document().get_element_by_id(DISLIKE_BUTTON_ID).unwrap();

        // dispatch_event 回傳 false 表示預設動作已被取消
        assert!(!like_button.dispatch_event(&cancelable_click()).unwrap());
        assert!(!dislike_button.dispatch_event(&cancelable_click()).unwrap());

        container.remove();
    }
}

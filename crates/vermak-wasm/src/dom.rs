// crates/vermak-wasm/src/dom.rs
//! Page anchors and the info-panel markup.
use vermak_core::details::InfoContent;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, HtmlImageElement};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Looks up `#id` and casts it to `T`.
pub fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has an unexpected type")))
}

pub fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("<{tag}> has an unexpected type")))
}

pub fn clear_children(el: &Element) -> Result<(), JsValue> {
    while let Some(child) = el.first_child() {
        el.remove_child(&child)?;
    }
    Ok(())
}

pub fn set_visible(el: &HtmlElement, visible: bool) -> Result<(), JsValue> {
    el.style()
        .set_property("display", if visible { "" } else { "none" })
}

/// The `iw-*` elements inside `#info-content`.
pub struct InfoPanel {
    document: Document,
    pub root: HtmlElement,
    icon: HtmlElement,
    url: HtmlElement,
    address: HtmlElement,
    phone_row: HtmlElement,
    phone: HtmlElement,
    rating_row: HtmlElement,
    rating: HtmlElement,
    website_row: HtmlElement,
    website: HtmlElement,
}

impl InfoPanel {
    pub fn locate(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            root: element(document, "info-content")?,
            icon: element(document, "iw-icon")?,
            url: element(document, "iw-url")?,
            address: element(document, "iw-address")?,
            phone_row: element(document, "iw-phone-row")?,
            phone: element(document, "iw-phone")?,
            rating_row: element(document, "iw-rating-row")?,
            rating: element(document, "iw-rating")?,
            website_row: element(document, "iw-website-row")?,
            website: element(document, "iw-website")?,
        })
    }

    pub fn render(&self, content: &InfoContent) -> Result<(), JsValue> {
        clear_children(&self.icon)?;
        if let Some(src) = &content.icon {
            let img: HtmlImageElement = create(&self.document, "img")?;
            img.set_class_name("placeIcon");
            img.set_src(src);
            self.icon.append_child(&img)?;
        }

        clear_children(&self.url)?;
        let bold = self.document.create_element("b")?;
        let link: HtmlAnchorElement = create(&self.document, "a")?;
        if let Some(href) = &content.link {
            link.set_href(href);
        }
        link.set_text_content(Some(&content.name));
        bold.append_child(&link)?;
        self.url.append_child(&bold)?;

        self.address.set_text_content(Some(&content.address));

        set_visible(&self.phone_row, content.phone.is_some())?;
        self.phone.set_text_content(content.phone.as_deref());

        set_visible(&self.rating_row, content.rating.is_some())?;
        let stars = content.rating.map(|r| r.to_string());
        self.rating.set_text_content(stars.as_deref());

        set_visible(&self.website_row, content.website.is_some())?;
        clear_children(&self.website)?;
        if let Some(site) = &content.website {
            let link: HtmlAnchorElement = create(&self.document, "a")?;
            link.set_href(&site.href);
            link.set_text_content(Some(&site.display));
            self.website.append_child(&link)?;
        }
        Ok(())
    }
}

// Web-specific implementations
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use crate::components::format_card::form_dom_id;

/// Submit the hidden download form rendered for a format.
///
/// Navigation and the resulting file transfer are handled entirely by the
/// browser; `HtmlFormElement::submit` bypasses submit handlers, so nothing
/// in the app can intercept it.
pub fn submit_download_form(format_id: &str) -> Result<(), String> {
    let dom_id = form_dom_id(format_id);

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let document = window.document().ok_or_else(|| "no document".to_string())?;
    let element = document
        .get_element_by_id(&dom_id)
        .ok_or_else(|| format!("no form with id {dom_id}"))?;

    let form: HtmlFormElement = element
        .dyn_into()
        .map_err(|_| "element is not a form".to_string())?;

    form.submit().map_err(|err| format!("{err:?}"))
}

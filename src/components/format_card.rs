use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaDownload, Icon};

use crate::api::VideoFormat;
use crate::config;

/// DOM id of the hidden download form rendered for a format.
pub fn form_dom_id(format_id: &str) -> String {
    format!("download-form-{format_id}")
}

/// A single format entry with its download trigger.
///
/// Each card renders its own hidden form so the POST carries the right
/// `formatId` without any value swapping at submit time.
#[component]
pub fn FormatCard(
    format: VideoFormat,
    link: String,
    downloading: bool,
    on_download: EventHandler<String>,
) -> Element {
    let format_id = format.format_id.clone();
    let dom_id = form_dom_id(&format.format_id);
    let action = config::download_endpoint();

    rsx! {
        div { class: "flex items-center justify-between bg-background-medium p-4 rounded-lg border border-border shadow-sm",
            // The browser owns this POST end to end; the app never sees the
            // response.
            form {
                id: "{dom_id}",
                method: "post",
                action: "{action}",
                class: "hidden",
                input { r#type: "hidden", name: "link", value: "{link}" }
                input {
                    r#type: "hidden",
                    name: "formatId",
                    value: "{format.format_id}",
                }
            }

            span { class: "font-semibold text-text-primary", "{format.label()}" }

            button {
                class: "inline-flex items-center px-5 py-2 bg-accent-teal hover:bg-opacity-80 text-text-invert font-medium rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                r#type: "button",
                disabled: downloading,
                onclick: move |_| on_download.call(format_id.clone()),
                if downloading {
                    div { class: "animate-spin rounded-full h-4 w-4 border-t-2 border-white mr-2" }
                    "Downloading..."
                } else {
                    Icon {
                        icon: FaDownload,
                        width: 14,
                        height: 14,
                        class: "mr-2",
                    }
                    "Download"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_dom_id_embeds_format_id() {
        assert_eq!(form_dom_id("137"), "download-form-137");
    }
}

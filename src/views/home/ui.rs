use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{bs_icons::BsExclamationTriangleFill, fa_solid_icons::FaVideo},
    Icon,
};

use crate::api::VideoFormat;
use crate::components::FormatCard;
use crate::views::home::handlers::{run_discovery, start_download, validate_link};

#[component]
pub fn Home() -> Element {
    // Form state
    let mut video_link = use_signal(String::new);

    // Discovery state
    let mut formats = use_signal(Vec::<VideoFormat>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut preview_url = use_signal(|| None::<String>);

    // Download state
    let downloading_format = use_signal(|| None::<String>);

    let mut submit = move || {
        // One discovery request at a time.
        if loading() {
            return;
        }

        if let Err(message) = validate_link(&video_link()) {
            error.set(Some(message.to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        // Drop the previous preview and formats before the request resolves.
        preview_url.set(None);
        formats.set(Vec::new());

        run_discovery(video_link(), &formats, &preview_url, &error, &loading);
    };

    let button_text = if loading() { "Fetching..." } else { "Get Video" };

    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center py-12 px-4",
            div { class: "bg-background-card shadow-lg rounded-2xl p-10 max-w-lg w-full border border-border",
                header { class: "text-center mb-8",
                    h1 { class: "text-4xl font-bold text-text-primary flex items-center justify-center",
                        Icon {
                            icon: FaVideo,
                            width: 28,
                            height: 28,
                            class: "mr-3 text-accent-teal",
                        }
                        "VidGrab"
                    }
                    p { class: "text-lg text-text-secondary mt-4", "Download videos from YouTube" }
                }

                // Link form
                div { class: "space-y-6",
                    input {
                        class: "block w-full px-6 py-4 text-lg text-text-primary bg-background-medium border border-border rounded-full focus:outline-none focus:border-accent-teal",
                        r#type: "text",
                        placeholder: "https://www.youtube.com/watch?v=example",
                        value: "{video_link}",
                        oninput: move |event| video_link.set(event.value().clone()),
                        onkeydown: move |event: Event<KeyboardData>| {
                            if event.key().to_string() == "Enter" {
                                submit();
                            }
                        },
                    }
                    button {
                        class: "w-full px-6 py-4 text-xl font-bold bg-accent-teal text-text-invert rounded-full shadow-lg hover:bg-opacity-80 transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: loading(),
                        onclick: move |_| submit(),
                        "{button_text}"
                    }
                }

                // Loader
                if loading() {
                    div { class: "flex justify-center my-6",
                        div { class: "animate-spin rounded-full h-12 w-12 border-t-4 border-b-4 border-accent-teal" }
                    }
                }

                // Error message
                if let Some(message) = error() {
                    p { class: "text-accent-rose mt-6 text-center font-semibold flex items-center justify-center",
                        Icon {
                            icon: BsExclamationTriangleFill,
                            width: 16,
                            height: 16,
                            class: "mr-2",
                        }
                        "{message}"
                    }
                }

                // Video preview
                if !loading() {
                    if let Some(preview) = preview_url() {
                        div { class: "mt-10",
                            iframe {
                                class: "w-full rounded-xl shadow-lg",
                                width: "100%",
                                height: "360",
                                src: "{preview}",
                                title: "Video preview",
                            }
                        }
                    }
                }

                // Available formats
                if !formats().is_empty() && !loading() {
                    div { class: "mt-10",
                        h2 { class: "text-2xl font-bold text-text-primary text-center mb-6",
                            "Available Formats"
                        }
                        div { class: "grid grid-cols-1 sm:grid-cols-2 gap-6",
                            for format in formats() {
                                FormatCard {
                                    key: "{format.format_id}",
                                    format: format.clone(),
                                    link: video_link(),
                                    downloading: downloading_format().as_deref() == Some(format.format_id.as_str()),
                                    on_download: move |format_id: String| {
                                        start_download(format_id, &downloading_format);
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

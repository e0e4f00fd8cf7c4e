//! Palm Photo Upload
//!
//! Dashed drop-zone style slot for one hand. Clicking opens the native file
//! picker restricted to image types; the chosen file becomes a preview shown
//! in place of the placeholder.

use dioxus::prelude::*;
use palmist_core::{FieldError, Hand, PalmImage, IMAGE_EXTENSIONS};
use palmist_ui::{field_class, FieldLabel, FieldMessage};
use rfd::FileDialog;

/// Upload slot for one palm photo
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     PalmUpload {
///         hand: Hand::Left,
///         image: form.read().draft().left_palm.clone(),
///         error: form.read().errors().left_palm,
///         on_select: move |img| form.write().select_palm(Hand::Left, img),
///     }
/// }
/// ```
#[component]
pub fn PalmUpload(
    hand: Hand,
    /// Currently selected photo, if any
    image: Option<PalmImage>,
    /// Validation error for this hand
    error: Option<FieldError>,
    /// Called with the newly picked photo
    on_select: EventHandler<PalmImage>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut picking = use_signal(|| false);
    let mut pick_error = use_signal(|| Option::<String>::None);

    let handle_pick = move |_| {
        if picking() {
            return;
        }
        picking.set(true);
        pick_error.set(None);

        spawn(async move {
            // Dialog and file read both block; keep them off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", IMAGE_EXTENSIONS)
                    .set_title(hand.label())
                    .pick_file()
                    .map(PalmImage::from_path)
            })
            .await;

            match picked {
                Ok(Some(Ok(image))) => on_select.call(image),
                Ok(Some(Err(e))) => {
                    tracing::warn!(hand = hand.as_str(), error = %e, "Could not use picked file");
                    pick_error.set(Some(format!("Couldn't use that file: {}", e)));
                }
                Ok(None) => {
                    // User cancelled; keep whatever was there
                }
                Err(e) => {
                    tracing::error!(error = %e, "File picker task failed");
                    pick_error.set(Some("The file picker closed unexpectedly".to_string()));
                }
            }
            picking.set(false);
        });
    };

    let id = format!("{}Palm", hand.as_str());
    let zone_class = field_class("palm-drop", error);

    rsx! {
        div { class: "form-field",
            FieldLabel { target: id.clone(), text: hand.label().to_string() }
            button {
                id: "{id}",
                class: "{zone_class}",
                r#type: "button",
                disabled: disabled || picking(),
                onclick: handle_pick,
                if let Some(photo) = image.as_ref() {
                    img {
                        class: "palm-drop__preview",
                        src: "{photo.preview()}",
                        alt: "{hand.as_str()} palm preview",
                    }
                    span { class: "palm-drop__name", "{photo.file_name()}" }
                } else if picking() {
                    div { class: "palm-drop__placeholder",
                        div { class: "palm-drop__glyph", "\u{23F3}" }
                        p { "Opening..." }
                    }
                } else {
                    div { class: "palm-drop__placeholder",
                        div { class: "palm-drop__glyph", "{hand.glyph()}" }
                        p { "Click to upload" }
                    }
                }
            }
            FieldMessage { error: error }
            if let Some(msg) = pick_error() {
                p { class: "field-error", "{msg}" }
            }
        }
    }
}

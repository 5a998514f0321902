use crate::client::state::{ImageSlot, Phase, ResizerState, Toast};
use crate::resize::requests::{IMAGE_FIELD, PERCENTAGE_FIELD};
use crate::resize::responses::OUTPUT_CONTENT_TYPE;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const TITLE: &str = "Pic Perfecter 3000";
const TAGLINE: &str = "Turn your chonky pics into sleek, share-worthy masterpieces!";

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }
main { max-width: 64rem; margin: 0 auto; padding: 2rem 1rem; }
h1 { font-size: 2.25rem; text-align: center; margin-bottom: 1rem;
     background: linear-gradient(90deg, #6366f1, #ec4899); -webkit-background-clip: text; color: transparent; }
.tagline { text-align: center; font-size: 1.125rem; margin-bottom: 2rem; }
.field { margin-bottom: 1.5rem; display: flex; flex-direction: column; gap: .25rem; }
button, .button { cursor: pointer; border: 0; border-radius: .375rem; padding: .5rem 1rem;
                  background: #0f172a; color: white; text-decoration: none; font-size: .875rem; }
button:disabled { opacity: .5; cursor: not-allowed; }
.button.secondary, button.secondary { background: #e2e8f0; color: #0f172a; }
.error { color: #ef4444; margin-top: .5rem; }
.previews { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 2rem; margin-top: 2rem; }
.preview { position: relative; }
.preview img.thumb { width: 100%; height: 12rem; object-fit: cover; border-radius: .5rem; cursor: pointer; }
.preview .actions { position: absolute; bottom: .5rem; right: .5rem; display: flex; gap: .5rem; }
dialog { max-width: 48rem; border: 0; border-radius: .5rem; padding: 1rem; }
dialog img { width: 100%; height: auto; }
.toasts { position: fixed; bottom: 1rem; right: 1rem; display: flex; flex-direction: column; gap: .5rem; }
.toast { background: white; border: 1px solid #e2e8f0; border-radius: .5rem; padding: .75rem 1rem; min-width: 16rem; }
.toast.destructive { background: #ef4444; color: white; border-color: #ef4444; }
.toast .title { font-weight: 600; }
"#;

pub fn page(state: &ResizerState) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (TITLE) }
                style { (PreEscaped(STYLES)) }
                script src="/static/ui.js" defer {}
            }
            body {
                main {
                    h1 { (TITLE) }
                    p.tagline { (TAGLINE) }
                    (resizer(state))
                }
                (toasts(&state.toasts))
            }
        }
    }
}

fn resizer(state: &ResizerState) -> Markup {
    let resizing = state.phase() == Phase::Resizing;
    html! {
        form id="resize-form" method="post" action="/" enctype="multipart/form-data" {
            div.field {
                label for="image-upload" { "Upload Image" }
                input id="image-upload" type="file" name=(IMAGE_FIELD) accept="image/*";
            }
            div.field {
                label for="resize-percentage" { "Resize Percentage" }
                input id="resize-percentage" type="number" name=(PERCENTAGE_FIELD)
                    min="1" max="100" value=(state.percentage);
            }
            button id="resize-button" type="submit" disabled[!state.can_resize()] {
                @if resizing { "Resizing..." } @else { "Resize Image" }
            }
        }
        @if let Some(error) = &state.error {
            div.error { "Error: " (error) }
        }
        div.previews {
            (preview(state, ImageSlot::Original))
            (preview(state, ImageSlot::Resized))
        }
    }
}

fn preview(state: &ResizerState, slot: ImageSlot) -> Markup {
    let Some((filename, bytes)) = state.image(slot) else {
        return html! {};
    };
    let (heading, alt, key) = match slot {
        ImageSlot::Original => ("Original Image", "Original", "original"),
        ImageSlot::Resized => ("Resized Image", "Resized", "resized"),
    };
    let content_type = match (slot, &state.source) {
        (ImageSlot::Original, Some(source)) => source.content_type.as_str(),
        _ => OUTPUT_CONTENT_TYPE,
    };
    let url = data_url(content_type, bytes);
    let dialog_id = format!("{}-dialog", key);

    html! {
        div.preview {
            h3 { (heading) }
            img.thumb src=(url) alt=(alt) data-opens=(dialog_id);
            dialog id=(dialog_id) open[state.preview == Some(slot)] {
                img src=(url) alt={ (alt) " (Full Size)" };
                form method="dialog" { button.secondary { "Close" } }
            }
            div.actions {
                button.secondary type="button" title="Copy image URL" data-copy=(url) { "Copy" }
                a.button.secondary href=(url) download=(filename) title="Download" { "Download" }
            }
        }
    }
}

fn toasts(toasts: &[Toast]) -> Markup {
    html! {
        div.toasts id="toasts" {
            @for toast in toasts {
                div class=(if toast.destructive { "toast destructive" } else { "toast" }) {
                    div.title { (toast.title) }
                    div { (toast.description) }
                }
            }
        }
    }
}

pub fn data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}

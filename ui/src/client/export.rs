//! Insight PDF export
//!
//! Builds a standalone printable HTML document for an insight card, opens
//! it in a new window via a Blob object URL, and triggers the browser's
//! print dialog (print-to-PDF produces the file).

use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

use learnloop_shared::ProgressUpdate;

/// Open the print dialog for a standalone rendering of the insight card
pub fn export_insight_pdf(
    update: &ProgressUpdate,
    insight_html: &str,
    reflection_html: &str,
) -> Result<(), String> {
    let date = update
        .date
        .map(|d| d.format("%B %e, %Y").to_string())
        .unwrap_or_default();

    let document = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Skill Insight - {title}</title>
<style>
  body {{ font-family: sans-serif; max-width: 720px; margin: 2rem auto; color: #1f2937; }}
  h1 {{ font-size: 1.5rem; }}
  h2 {{ font-size: 1rem; color: #4b5563; margin-top: 1.5rem; }}
  .meta {{ color: #6b7280; font-size: 0.875rem; }}
  footer {{ margin-top: 2rem; border-top: 1px solid #e5e7eb; padding-top: 0.5rem;
            color: #9ca3af; font-size: 0.75rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p class="meta">{kind} &middot; {date}</p>
<p>{description}</p>
<h2>AI Insight</h2>
<div>{insight}</div>
<h2>My Notes</h2>
<div>{reflection}</div>
<footer>&copy; 2025 LearnLoop</footer>
<script>window.onload = function() {{ window.print(); }};</script>
</body>
</html>"#,
        title = update.title,
        kind = update.kind.label(),
        date = date,
        description = update.description,
        insight = insight_html,
        reflection = reflection_html,
    );

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&document));
    let options = BlobPropertyBag::new();
    options.set_type("text/html");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let window = web_sys::window().ok_or("no window")?;
    window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("{:?}", e))?
        .ok_or_else(|| "popup blocked".to_string())?;

    Ok(())
}

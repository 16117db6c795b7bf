use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils;

const STYLE_ID: &str = "attention-styles";

const CSS: &str = "
.attention-container{position:fixed;inset:0;display:flex;align-items:center;justify-content:center;padding:16px;z-index:1060;font-family:Arial,Helvetica,sans-serif}
.attention-container.attention-backdrop-show{background:rgba(0,0,0,.4)}
.attention-container.attention-no-backdrop{pointer-events:none}
.attention-no-backdrop .attention-popup{pointer-events:auto}
.attention-container.hidden{display:none}
.attention-popup{position:relative;width:32em;max-width:100%;padding:1.25em;border-radius:5px;background:#fff;box-shadow:0 2px 12px rgba(0,0,0,.2);text-align:center}
.attention-close{position:absolute;top:4px;right:8px;border:0;background:none;font-size:1.6em;color:#ccc;cursor:pointer}
.attention-close:hover{color:#dc2626}
.attention-title{margin:.4em 0;font-size:1.6em;color:#595959}
.attention-html-container{margin:.6em 0;color:#545454}
.attention-actions{display:flex;justify-content:center;gap:.6em;margin-top:1em}
.attention-actions button{padding:.6em 1.2em;border:0;border-radius:4px;color:#fff;cursor:pointer}
.attention-confirm{background:#2563eb}
.attention-cancel{background:#6e7881}
.attention-footer{margin-top:1em;padding-top:.8em;border-top:1px solid #eee;font-size:.9em;color:#545454}
.attention-icon{display:inline-flex;align-items:center;justify-content:center;width:2.4em;height:2.4em;border:3px solid;border-radius:50%;font-size:1.4em;font-weight:bold}
.attention-icon--success{color:#16a34a}
.attention-icon--error{color:#dc2626}
.attention-icon--warning{color:#f59e0b}
.attention-icon--info{color:#2563eb}
.attention-icon--question{color:#6b7280}
.attention-toast-root{position:fixed;display:flex;flex-direction:column;gap:8px;z-index:1070;font-family:Arial,Helvetica,sans-serif}
.attention-toast-root--top{top:16px;left:50%;transform:translateX(-50%)}
.attention-toast-root--top-start{top:16px;left:16px}
.attention-toast-root--top-end{top:16px;right:16px}
.attention-toast-root--center{top:50%;left:50%;transform:translate(-50%,-50%)}
.attention-toast-root--bottom{bottom:16px;left:50%;transform:translateX(-50%)}
.attention-toast-root--bottom-start{bottom:16px;left:16px}
.attention-toast-root--bottom-end{bottom:16px;right:16px}
.attention-toast{position:relative;display:flex;align-items:center;gap:.6em;min-width:16em;padding:10px 16px;overflow:hidden;border-radius:4px;background:#fff;box-shadow:0 2px 6px rgba(0,0,0,.15);animation:attention-toast-in .2s forwards}
.attention-toast .attention-icon{width:1.6em;height:1.6em;font-size:1em}
.attention-toast-progress{position:absolute;left:0;bottom:0;height:3px;width:100%;background:rgba(0,0,0,.3);transform-origin:left;animation-name:attention-toast-progress;animation-timing-function:linear;animation-fill-mode:forwards}
.attention-toast.is-paused .attention-toast-progress{animation-play-state:paused}
@keyframes attention-toast-in{from{opacity:0}to{opacity:1}}
@keyframes attention-toast-progress{from{transform:scaleX(1)}to{transform:scaleX(0)}}
";

/// Inject the dialog and toast stylesheet once per document.
pub(crate) fn ensure(document: &Document) -> Result<(), JsValue> {
    dom_utils::ensure_style(document, STYLE_ID, CSS)
}

//! WASM bindings for hebrew-translit
//!
//! Mounts the symbol board into a web page: one DOM tile per transliteration,
//! clicks wired to [`SymbolBoard::activate`], clipboard writes through the
//! async Clipboard API.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Object, Promise, Reflect};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Blob, BlobPropertyBag, Document, Element, HtmlElement, MouseEvent, Window};

use crate::core::board::{CapabilityNotice, FeedbackState, Host, SymbolBoard};
use crate::core::options::BoardOptions;
use crate::core::tile::{
    build_tiles, Activation, ClipboardCapability, ClipboardPayload, Tile, TileId,
};
use crate::utils::error::ClipboardError;

// `ClipboardItem` and `Clipboard.write` are not reliably exposed by web-sys,
// so bind the pieces used here directly.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = ClipboardItem)]
    type JsClipboardItem;

    #[wasm_bindgen(constructor, js_class = "ClipboardItem", catch)]
    fn new(items: &Object) -> Result<JsClipboardItem, JsValue>;

    #[wasm_bindgen(js_name = Clipboard)]
    type AsyncClipboard;

    #[wasm_bindgen(method, catch)]
    fn write(this: &AsyncClipboard, items: &Array) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, js_name = writeText, catch)]
    fn write_text(this: &AsyncClipboard, text: &str) -> Result<Promise, JsValue>;
}

/// Board options (exposed to WASM)
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountOptions {
    /// Id of the element tiles are appended to
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// Id of the element that receives the capability banner
    #[serde(default = "default_header_id")]
    pub header_id: String,
    /// Feedback duration in milliseconds
    #[serde(default = "default_feedback_delay_ms")]
    pub feedback_delay_ms: u32,
    /// Copy plain text even if rich clipboard writes work
    #[serde(default)]
    pub force_plain_text: bool,
}

fn default_container_id() -> String {
    BoardOptions::default().container_id
}

fn default_header_id() -> String {
    BoardOptions::default().header_id
}

fn default_feedback_delay_ms() -> u32 {
    1000
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            header_id: default_header_id(),
            feedback_delay_ms: default_feedback_delay_ms(),
            force_plain_text: false,
        }
    }
}

impl From<MountOptions> for BoardOptions {
    fn from(opts: MountOptions) -> Self {
        BoardOptions {
            feedback_delay: Duration::from_millis(u64::from(opts.feedback_delay_ms)),
            container_id: opts.container_id,
            header_id: opts.header_id,
            force_plain_text: opts.force_plain_text,
        }
    }
}

struct TileNode {
    root: HtmlElement,
    feedback: Element,
}

/// Browser host: DOM, async clipboard, timers and `window.alert`
pub struct WebHost {
    window: Window,
    document: Document,
    container: Element,
    header: Option<Element>,
    nodes: RefCell<HashMap<TileId, TileNode>>,
}

impl WebHost {
    pub fn new(container_id: &str, header_id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document.get_element_by_id(container_id).ok_or_else(|| {
            JsValue::from_str(&format!("no element with id '{}'", container_id))
        })?;
        let header = document.get_element_by_id(header_id);
        Ok(Self {
            window,
            document,
            container,
            header,
            nodes: RefCell::new(HashMap::new()),
        })
    }

    fn div(&self, class: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element("div")?;
        el.set_class_name(class);
        Ok(el)
    }

    fn build_tile(&self, tile: &Tile) -> Result<TileNode, JsValue> {
        let hebrew = self.div("hebrew inline-block")?;
        hebrew.set_text_content(Some(tile.symbol));

        let transliteration = self.document.create_element("span")?;
        transliteration.set_class_name("transliteration");
        transliteration.set_inner_html(tile.transliteration);

        let text_inner = self.document.create_element("div")?;
        text_inner.append_child(&hebrew)?;
        text_inner.append_child(&transliteration)?;

        let text = self.div("symbol-text")?;
        text.append_child(&text_inner)?;

        let content = self.div("symbol-content")?;
        content.append_child(&text)?;

        let root: HtmlElement = self.div("symbol")?.dyn_into()?;
        root.class_list().add_1(tile.kind.class())?;
        root.append_child(&content)?;

        let feedback = self.div("feedback")?;
        root.append_child(&feedback)?;

        self.container.append_child(&root)?;
        Ok(TileNode { root, feedback })
    }

    fn start_write(&self, payload: &ClipboardPayload) -> Result<Promise, JsValue> {
        let clipboard = Reflect::get(&self.window.navigator(), &JsValue::from_str("clipboard"))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(JsValue::from_str("clipboard API unavailable"));
        }
        let clipboard: AsyncClipboard = clipboard.unchecked_into();

        match payload {
            ClipboardPayload::Html(html) => {
                let bag = BlobPropertyBag::new();
                bag.set_type(ClipboardPayload::HTML_MIME);
                let blob = Blob::new_with_str_sequence_and_options(
                    &Array::of1(&JsValue::from_str(html)),
                    &bag,
                )?;
                let record = Object::new();
                Reflect::set(&record, &JsValue::from_str(ClipboardPayload::HTML_MIME), &blob)?;
                let item = JsClipboardItem::new(&record)?;
                clipboard.write(&Array::of1(&item))
            }
            ClipboardPayload::Text(text) => clipboard.write_text(text),
        }
    }

    /// Wire a tile's click handler to the board.
    fn bind_click(&self, tile: TileId, board: Rc<SymbolBoard<WebHost>>) {
        let nodes = self.nodes.borrow();
        let Some(node) = nodes.get(&tile) else {
            return;
        };
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let activation = Activation::from_click_count(event.detail());
            let board = Rc::clone(&board);
            spawn_local(async move {
                if let Err(err) = board.activate(tile, activation).await {
                    debug!("tile {}: {}", tile, err);
                }
            });
        });
        node.root.set_onclick(Some(on_click.as_ref().unchecked_ref()));
        // Tiles live as long as the page
        on_click.forget();
    }
}

fn js_error(value: JsValue) -> ClipboardError {
    ClipboardError::new(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl Host for WebHost {
    fn clipboard_capability(&self) -> ClipboardCapability {
        let item = Reflect::get(&js_sys::global(), &JsValue::from_str("ClipboardItem"));
        match item {
            Ok(ctor) if !ctor.is_undefined() => ClipboardCapability::Rich,
            _ => ClipboardCapability::PlainOnly,
        }
    }

    fn show_capability_notice(&self, notice: &CapabilityNotice) {
        if let Some(header) = &self.header {
            header.set_class_name(notice.class);
            header.set_inner_html(notice.html);
        }
    }

    fn mount_tile(&self, tile: &Tile) {
        match self.build_tile(tile) {
            Ok(node) => {
                self.nodes.borrow_mut().insert(tile.id, node);
            }
            Err(err) => error!("could not mount tile {}: {:?}", tile.id, err),
        }
    }

    async fn write_clipboard(&self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        let promise = self.start_write(payload).map_err(js_error)?;
        JsFuture::from(promise).await.map(|_| ()).map_err(js_error)
    }

    fn render_feedback(&self, tile: TileId, state: FeedbackState) {
        let nodes = self.nodes.borrow();
        let Some(node) = nodes.get(&tile) else {
            return;
        };
        node.feedback.set_text_content(Some(state.label()));
        let classes = node.feedback.class_list();
        let [success, failure] = FeedbackState::CLASSES;
        if let Err(err) = classes.remove_2(success, failure) {
            error!("tile {}: {:?}", tile, err);
        }
        if let Some(class) = state.class() {
            if let Err(err) = classes.add_1(class) {
                error!("tile {}: {:?}", tile, err);
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            error!("alert failed: {:?}", err);
        }
    }

    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

/// Tile description returned to JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SymbolInfo {
    id: TileId,
    kind: &'static str,
    symbol: &'static str,
    transliteration: &'static str,
    plain: String,
    uppercase: Option<&'static str>,
}

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Build the board inside the page
///
/// # Arguments
/// * `options` - optional `{ containerId, headerId, feedbackDelayMs, forcePlainText }`
#[wasm_bindgen(js_name = "mountSymbolBoard")]
pub fn mount_symbol_board(options: JsValue) -> Result<(), JsValue> {
    let opts: MountOptions = if options.is_undefined() || options.is_null() {
        MountOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    let options: BoardOptions = opts.into();

    let host = WebHost::new(&options.container_id, &options.header_id)?;
    let board = Rc::new(SymbolBoard::new(host, options));
    for tile in board.tiles() {
        board.host().bind_click(tile.id, Rc::clone(&board));
    }
    debug!("symbol board mounted");
    Ok(())
}

/// List every tile of the built-in tables
#[wasm_bindgen(js_name = "listSymbols")]
pub fn list_symbols() -> Result<JsValue, JsValue> {
    let symbols: Vec<SymbolInfo> = build_tiles()
        .into_iter()
        .map(|tile| SymbolInfo {
            id: tile.id,
            kind: tile.kind.class(),
            symbol: tile.symbol,
            transliteration: tile.transliteration,
            plain: tile.plain_transliteration(),
            uppercase: tile.uppercase,
        })
        .collect();
    Ok(serde_wasm_bindgen::to_value(&symbols)?)
}

/// Get version information
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

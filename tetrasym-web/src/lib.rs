/// TetraSym Web - WASM viewer for the tetrahedron symmetry showcase
///
/// Draws a wireframe tetrahedron and its current rotation axis on a 2D
/// canvas, and keeps a trigger button, a rotation counter and a rotation
/// matrix readout in the page. The host page either calls `frame` from its
/// own animation loop or lets `start` schedule one.
use nalgebra::Matrix4;
use std::cell::RefCell;
use std::rc::Rc;
use tetrasym_core::{Camera, Config, CycleEvent, Mesh, RotationReadout, Showcase, Transform};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement};

pub mod readout_html;

const BACKGROUND: &str = "#101018";
const MESH_COLOR: &str = "#0077ff";
const AXIS_COLOR: &str = "#ff3399";

/// Longest frame step fed to the cycler; a background tab resumes smoothly
const MAX_FRAME_SECS: f32 = 0.25;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Everything one frame touches
struct ViewerState {
    showcase: Showcase,
    camera: Camera,
    edges: Vec<(nalgebra::Point3<f32>, nalgebra::Point3<f32>)>,
    scale: f32,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    counter: HtmlElement,
    matrix: HtmlElement,
    label: HtmlElement,
    last_timestamp: Option<f64>,
}

impl ViewerState {
    fn trigger(&mut self) {
        if let Some(event) = self.showcase.trigger() {
            self.reflect(&event);
        }
    }

    fn frame(&mut self, timestamp_ms: f64) {
        let dt = match self.last_timestamp {
            Some(last) => (((timestamp_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_SECS),
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);

        for event in self.showcase.update(dt) {
            self.reflect(&event);
        }
        self.draw();
    }

    /// Push cycler events into the DOM
    fn reflect(&self, event: &CycleEvent) {
        match event {
            CycleEvent::Started { index, symmetry } => {
                tracing::debug!(index, %symmetry, "showing symmetry");
                let readout = RotationReadout::from_orientation(&symmetry.rotation);
                self.matrix
                    .set_inner_html(&readout_html::render(&readout));
                self.label
                    .set_text_content(Some(&format!("Symmetry #{index}: {symmetry}")));
            }
            CycleEvent::Completed { .. } => {}
        }
        self.counter.set_text_content(Some(&format!(
            "Rotation {}",
            self.showcase.counter_text()
        )));
    }

    fn draw(&mut self) {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        self.camera.set_viewport(width, height);

        let ctx = &self.context;
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

        let model = Transform::model_matrix(&self.showcase.orientation(), self.scale);
        ctx.set_line_width(2.0);
        ctx.set_stroke_style_str(MESH_COLOR);
        self.stroke_segments(self.edges.iter().copied(), &model, width, height);

        if let Some(segment) = self.showcase.axis_segment() {
            ctx.set_stroke_style_str(AXIS_COLOR);
            self.stroke_segments(std::iter::once(segment), &Matrix4::identity(), width, height);
        }
    }

    fn stroke_segments(
        &self,
        segments: impl Iterator<Item = (nalgebra::Point3<f32>, nalgebra::Point3<f32>)>,
        model: &Matrix4<f32>,
        width: u32,
        height: u32,
    ) {
        let ctx = &self.context;
        ctx.begin_path();
        for (a, b) in segments {
            let projected = (
                self.camera.project_to_screen(&a, model, width, height),
                self.camera.project_to_screen(&b, model, width, height),
            );
            if let (Some(a), Some(b)) = projected {
                ctx.move_to(a.0 as f64, a.1 as f64);
                ctx.line_to(b.0 as f64, b.1 as f64);
            }
        }
        ctx.stroke();
    }
}

/// Browser viewer bound to one canvas
#[wasm_bindgen]
pub struct SymmetryViewer {
    state: Rc<RefCell<ViewerState>>,
}

#[wasm_bindgen]
impl SymmetryViewer {
    /// Attach to the canvas with id `canvas_id`.
    ///
    /// `options` is an optional configuration object with the same shape as
    /// the TOML configuration (`{ timer: { interval_secs: 1.5 } }`).
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, options: JsValue) -> Result<SymmetryViewer, JsValue> {
        let config: Config = if options.is_undefined() || options.is_null() {
            Config::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        let showcase =
            Showcase::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let document = document()?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{canvas_id}'")))?
            .dyn_into::<HtmlCanvasElement>()?;
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let panel = styled(&document, "div", PANEL_STYLE)?;
        let button = styled(&document, "button", BUTTON_STYLE)?.dyn_into::<HtmlButtonElement>()?;
        button.set_text_content(Some("Next symmetry"));
        let counter = styled(&document, "div", "")?;
        counter.set_text_content(Some(&format!("Rotation {}", showcase.counter_text())));
        let label = styled(&document, "div", LABEL_STYLE)?;
        let matrix = styled(&document, "div", "")?;
        panel.append_child(&button)?;
        panel.append_child(&counter)?;
        panel.append_child(&label)?;
        panel.append_child(&matrix)?;
        document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&panel)?;

        let camera = Camera::from_view(&config.view, canvas.width(), canvas.height());
        let state = Rc::new(RefCell::new(ViewerState {
            showcase,
            camera,
            edges: Mesh::tetrahedron(1.0).edges(),
            scale: config.view.scale,
            canvas,
            context,
            counter,
            matrix,
            label,
            last_timestamp: None,
        }));

        let click_state = state.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || click_state.borrow_mut().trigger());
        button.set_onclick(Some(on_click.as_ref().unchecked_ref()));
        // The button lives as long as the page
        on_click.forget();

        tracing::info!(canvas_id, "symmetry viewer attached");
        Ok(SymmetryViewer { state })
    }

    /// Show the next symmetry (no-op while a transition is running)
    pub fn trigger(&self) {
        self.state.borrow_mut().trigger();
    }

    /// Advance and draw one frame; `timestamp_ms` as given to requestAnimationFrame
    pub fn frame(&self, timestamp_ms: f64) {
        self.state.borrow_mut().frame(timestamp_ms);
    }

    /// Drive `frame` from requestAnimationFrame until the page unloads
    pub fn start(&self) -> Result<(), JsValue> {
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next = callback.clone();
        let state = self.state.clone();

        *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            state.borrow_mut().frame(timestamp);
            if let Some(cb) = next.borrow().as_ref() {
                if let Err(err) = request_animation_frame(cb) {
                    tracing::error!(?err, "failed to schedule frame");
                }
            }
        }));

        let first = callback.borrow();
        match first.as_ref() {
            Some(cb) => request_animation_frame(cb),
            None => Err(JsValue::from_str("animation callback missing")),
        }
    }

    #[wasm_bindgen(js_name = setAutoCycle)]
    pub fn set_auto_cycle(&self, enabled: bool) {
        self.state.borrow_mut().showcase.set_auto_cycle(enabled);
    }

    #[wasm_bindgen(js_name = rotationCount)]
    pub fn rotation_count(&self) -> usize {
        self.state.borrow().showcase.cycler().rotation_count()
    }

    #[wasm_bindgen(js_name = isTransitioning)]
    pub fn is_transitioning(&self) -> bool {
        self.state.borrow().showcase.cycler().is_transitioning()
    }
}

const PANEL_STYLE: &str = "position:absolute;top:12px;left:12px;padding:10px 14px;\
    background:rgba(0,0,0,0.6);color:#eee;font-family:monospace;border-radius:6px;";
const BUTTON_STYLE: &str = "display:block;margin-bottom:8px;padding:4px 10px;cursor:pointer;";
const LABEL_STYLE: &str = "margin:6px 0;color:#ff99cc;";

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn styled(document: &Document, tag: &str, style: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    if !style.is_empty() {
        element.set_attribute("style", style)?;
    }
    Ok(element)
}

fn request_animation_frame(callback: &Closure<dyn FnMut(f64)>) -> Result<(), JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window available"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

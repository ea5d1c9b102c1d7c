use fish_core::{Bounds, Fish, PathPreview, PointerState, School, SchoolConfig};
use fish_shared::{FrameSnapshot, SchoolSettings};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent, TouchEvent};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

const SHILL_COLOR: &str = "rgba(220, 50, 50, 0.9)";
const FISH_COLOR: &str = "rgba(40, 100, 200, 0.8)";
const PREVIEW_COLOR: &str = "rgba(220, 50, 50, 0.6)";

#[wasm_bindgen]
pub struct FishSimulation {
    school: School,
    pointer: PointerState,
    frame: u64,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl FishSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        width: f64,
        height: f64,
        fish_count: usize,
    ) -> Result<FishSimulation, JsValue> {
        let config = SchoolConfig {
            fish_count,
            ..SchoolConfig::default()
        };
        Self::create(canvas_id, width, height, config)
    }

    /// Builds a simulation from a JSON settings object; missing fields take defaults.
    pub fn with_settings(
        canvas_id: &str,
        width: f64,
        height: f64,
        settings_json: &str,
    ) -> Result<FishSimulation, JsValue> {
        let settings = SchoolSettings::from_json(settings_json)
            .map_err(|e| JsValue::from_str(&format!("invalid settings: {}", e)))?;
        settings
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::create(canvas_id, width, height, settings.to_config())
    }

    fn create(
        canvas_id: &str,
        width: f64,
        height: f64,
        config: SchoolConfig,
    ) -> Result<FishSimulation, JsValue> {
        console_log!("Initializing fish school with {} fish", config.fish_count);

        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(JsValue::from_str(&format!(
                "canvas size must be positive, got {}x{}",
                width, height
            )));
        }

        let window = web_sys::window().ok_or("no global window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let school = School::new(Bounds::new(width as f32, height as f32), config);

        Ok(FishSimulation {
            school,
            pointer: PointerState::inactive(),
            frame: 0,
            canvas,
            context,
        })
    }

    /// Advances every fish by one tick without drawing.
    pub fn tick(&mut self) {
        self.school.tick(&self.pointer);
        self.frame += 1;
    }

    /// Draws the current state without advancing it.
    pub fn render(&self) -> Result<(), JsValue> {
        self.clear();
        if let Some(preview) = self.school.preview(&self.pointer) {
            self.draw_preview(&preview)?;
        }
        self.draw_school()
    }

    /// One animation frame: the preview is drawn from the frame-start state,
    /// then the school moves and is drawn.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.clear();
        if let Some(preview) = self.school.preview(&self.pointer) {
            self.draw_preview(&preview)?;
        }
        self.tick();
        self.draw_school()
    }

    fn clear(&self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn draw_school(&self) -> Result<(), JsValue> {
        for fish in &self.school.fish {
            self.draw_fish(fish)?;
        }
        Ok(())
    }

    fn draw_fish(&self, fish: &Fish) -> Result<(), JsValue> {
        self.context.save();
        self.context
            .translate(fish.position.x as f64, fish.position.y as f64)?;
        self.context.rotate(fish.heading() as f64)?;

        // Triangle pointing along the heading
        self.context.begin_path();
        self.context.move_to(10.0, 0.0);
        self.context.line_to(-5.0, -5.0);
        self.context.line_to(-5.0, 5.0);
        self.context.close_path();

        let color = if fish.is_shill() { SHILL_COLOR } else { FISH_COLOR };
        self.context.set_fill_style_str(color);
        self.context.fill();

        self.context.restore();

        Ok(())
    }

    fn draw_preview(&self, preview: &PathPreview) -> Result<(), JsValue> {
        let dash = js_sys::Array::of2(&JsValue::from_f64(2.0), &JsValue::from_f64(5.0));

        self.context.save();
        self.context.begin_path();
        self.context.set_stroke_style_str(PREVIEW_COLOR);
        self.context.set_line_width(2.0);
        self.context.set_line_dash(&dash)?;

        let start = preview.start();
        self.context.move_to(start.x as f64, start.y as f64);
        for point in preview {
            self.context.line_to(point.x as f64, point.y as f64);
        }

        self.context.stroke();
        self.context.restore();

        Ok(())
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x as f32, y as f32);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }

    pub fn pointer_active(&self) -> bool {
        self.pointer.active
    }

    pub fn handle_mouse_move(&mut self, event: MouseEvent) {
        let (x, y) = self.to_canvas(event.client_x() as f64, event.client_y() as f64);
        self.pointer_move(x, y);
    }

    pub fn handle_mouse_leave(&mut self) {
        self.pointer_leave();
    }

    /// The first touch steers the shill like a mouse would.
    pub fn handle_touch_move(&mut self, event: TouchEvent) {
        if let Some(touch) = event.touches().item(0) {
            let (x, y) = self.to_canvas(touch.client_x() as f64, touch.client_y() as f64);
            self.pointer_move(x, y);
        }
    }

    fn to_canvas(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        let canvas_element: &Element = self.canvas.as_ref();
        let rect = canvas_element.get_bounding_client_rect();
        (client_x - rect.left(), client_y - rect.top())
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.school.resize(width as f32, height as f32);
        console_log!("Resized to {}x{}", width, height);
    }

    pub fn fish_count(&self) -> usize {
        self.school.len()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Current fish and preview as JSON, for overlays drawn outside the canvas.
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        let preview = self.school.preview(&self.pointer);
        FrameSnapshot::capture(self.frame, &self.school.fish, preview.as_ref())
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

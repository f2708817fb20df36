mod app;
mod draw;

use std::{cell::RefCell, rc::Rc};

use app::App;
use wasm_bindgen::{prelude::*, JsCast};

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .expect("should register `requestAnimationFrame` OK");
}

fn document() -> web_sys::Document {
    window()
        .document()
        .expect("should have a document on window")
}

fn now_ms() -> f64 {
    window()
        .performance()
        .map(|performance| performance.now())
        .unwrap_or_default()
}

fn viewport_size() -> (f64, f64) {
    let window = window();

    let width = window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default();
    let height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or_default();

    (width, height)
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let canvas = document()
        .create_element("canvas")?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let container: web_sys::Element = match document().query_selector("main")? {
        Some(element) => element,
        None => document()
            .body()
            .expect("document should have a body")
            .into(),
    };
    container.append_child(&canvas)?;

    let (width, height) = viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let context = canvas
        .get_context("2d")?
        .unwrap()
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

    web_sys::console::log_1(&format!("fireworks: canvas {}x{}", width, height).into());

    let app = App::new(width, height, now_ms().to_bits());
    let app = Rc::new(RefCell::new(app));

    let canvas = Rc::new(canvas);
    let bound: Rc<RefCell<Option<web_sys::DomRect>>> =
        Rc::new(RefCell::new(Some(canvas.get_bounding_client_rect())));

    let f = Rc::new(RefCell::new(None));
    let g = f.clone();

    {
        let app = app.clone();
        let canvas = canvas.clone();

        *g.borrow_mut() = Some(Closure::new(move || {
            let mut app = app.borrow_mut();

            app.draw(
                &context,
                canvas.width() as f64,
                canvas.height() as f64,
                now_ms(),
            )
            .unwrap();

            request_animation_frame(f.borrow().as_ref().unwrap());
        }));

        request_animation_frame(g.borrow().as_ref().unwrap());
    }

    {
        let app = app.clone();
        let bound = bound.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            let bound = bound.borrow();

            if let Some(bound) = bound.as_ref() {
                app.borrow_mut().on_mouse_down(bound, event);
            }
        });
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            app.borrow_mut().on_mouse_up(event);
        });
        document().add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let bound = bound.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
            let bound = bound.borrow();

            if let Some(bound) = bound.as_ref() {
                app.borrow_mut().on_touch_start(bound, event);
            }
        });
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
            app.borrow_mut().on_touch_end(event);
        });
        document().add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let canvas = canvas.clone();
        let bound = bound.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: JsValue| {
            let (width, height) = viewport_size();

            canvas.set_width(width as u32);
            canvas.set_height(height as u32);

            app.borrow_mut().resize(width, height);
            bound.replace(Some(canvas.get_bounding_client_rect()));
        });
        window().add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            app.borrow_mut().on_key_down(event);
        });
        document().add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // The control panel's volume slider, when the page carries one.
    if let Some(slider) = document().get_element_by_id("volumeSlider") {
        let slider = slider.dyn_into::<web_sys::HtmlInputElement>()?;

        let app = app.clone();
        let reader = slider.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: JsValue| {
            if let Ok(value) = reader.value().parse::<f64>() {
                app.borrow_mut().on_volume_input(value);
            }
        });
        slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            event.prevent_default();
        });
        document()
            .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

use crate::app::App;
use crate::hud::{self, AudioStatus};
use crate::view::SceneView;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: Rc<RefCell<App>>,
    pub view: Option<SceneView>,
    pub document: web::Document,
    pub started: Instant,
    pub last_status: Option<AudioStatus>,
}

impl FrameContext {
    pub fn new(app: Rc<RefCell<App>>, view: Option<SceneView>, document: web::Document) -> Self {
        Self {
            app,
            view,
            document,
            started: Instant::now(),
            last_status: None,
        }
    }

    pub fn frame(&mut self) {
        let (snapshot, status) = {
            let mut app = self.app.borrow_mut();
            (app.tick(), app.status())
        };

        if let Some(view) = &self.view {
            view.draw(&snapshot, self.started.elapsed().as_secs_f64());
        }
        hud::update(&self.document, &snapshot);

        if self.last_status != Some(status) {
            hud::set_status(&self.document, status);
            self.last_status = Some(status);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    let tick = tick.borrow();
    if let Some(cb) = tick.as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

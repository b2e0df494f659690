use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{NetworkParams, WaveParams};
use crate::error::PortfolioError;
use crate::network::{NeuralNetwork, NODE_COLOR};
use crate::random::MathRandom;
use crate::waves::BrainWaves;

/// Cancels a running `requestAnimationFrame` loop.
#[derive(Clone)]
pub struct AnimationHandle {
    frame_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl AnimationHandle {
    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.frame_id.take(), window()) {
            if let Err(err) = w.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Calls `frame` once per animation frame until it returns `false` or the
/// returned handle is stopped.
pub fn run_loop(mut frame: impl FnMut() -> bool + 'static) -> Result<AnimationHandle, PortfolioError> {
    let win = window().ok_or_else(|| PortfolioError::MissingElement("window".into()))?;
    let handle = AnimationHandle {
        frame_id: Rc::new(Cell::new(None)),
        running: Rc::new(Cell::new(true)),
    };

    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself. The Rc cycle keeps it alive for
    // the life of the page.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let state = handle.clone();
    let scheduler = win.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        state.frame_id.set(None);
        if !state.running.get() {
            return;
        }
        if !frame() {
            state.running.set(false);
            return;
        }
        if let Some(cb) = f.borrow().as_ref() {
            match scheduler.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => state.frame_id.set(Some(id)),
                Err(err) => {
                    log::error!("requestAnimationFrame failed: {err:?}");
                    state.running.set(false);
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        let id = win.request_animation_frame(cb.as_ref().unchecked_ref())?;
        handle.frame_id.set(Some(id));
    }
    Ok(handle)
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, PortfolioError> {
    canvas
        .get_context("2d")?
        .ok_or(PortfolioError::NoCanvasContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| PortfolioError::NoCanvasContext)
}

/// Matches the drawing buffer to the canvas' laid-out size.
fn fit_to_layout(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let w = canvas.offset_width().max(0) as u32;
    let h = canvas.offset_height().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    (w as f64, h as f64)
}

/// Refits the canvas on every window resize and reports the new size.
fn on_resize(
    canvas: &HtmlCanvasElement,
    mut resized: impl FnMut(f64, f64) + 'static,
) -> Result<(), PortfolioError> {
    let win = window().ok_or_else(|| PortfolioError::MissingElement("window".into()))?;
    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            let (w, h) = fit_to_layout(&canvas);
            resized(w, h);
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();
    Ok(())
}

pub fn start_network(
    canvas: HtmlCanvasElement,
    params: &NetworkParams,
) -> Result<AnimationHandle, PortfolioError> {
    let ctx = context_2d(&canvas)?;
    let (w, h) = fit_to_layout(&canvas);
    let net = Rc::new(RefCell::new(NeuralNetwork::new(w, h, params, &mut MathRandom)));
    log::debug!(
        "network canvas {w}x{h}: {} nodes, {} links",
        net.borrow().nodes().len(),
        net.borrow().connections().len()
    );

    on_resize(&canvas, {
        let net = net.clone();
        move |w, h| net.borrow_mut().resize(w, h)
    })?;

    let radius = params.node_radius.max(0.0);
    run_loop(move || {
        draw_network(&ctx, &mut net.borrow_mut(), radius);
        true
    })
}

fn draw_network(ctx: &CanvasRenderingContext2d, net: &mut NeuralNetwork, radius: f64) {
    let (w, h) = net.size();
    ctx.clear_rect(0.0, 0.0, w, h);

    net.step();
    ctx.set_fill_style_str(NODE_COLOR);
    for node in net.nodes() {
        ctx.begin_path();
        // arc only throws for a negative radius, clamped away above
        let _ = ctx.arc(node.x, node.y, radius, 0.0, TAU);
        ctx.fill();
    }

    ctx.set_line_width(1.0);
    for conn in net.connections() {
        let ((x1, y1), (x2, y2)) = net.segment(conn);
        ctx.begin_path();
        ctx.move_to(x1, y1);
        ctx.line_to(x2, y2);
        ctx.set_stroke_style_str(&conn.stroke_style());
        ctx.stroke();
    }
}

pub fn start_waves(
    canvas: HtmlCanvasElement,
    params: &WaveParams,
) -> Result<AnimationHandle, PortfolioError> {
    let ctx = context_2d(&canvas)?;
    let (w, h) = fit_to_layout(&canvas);
    let waves = Rc::new(RefCell::new(BrainWaves::new(w, h, params, &mut MathRandom)));

    on_resize(&canvas, {
        let waves = waves.clone();
        move |w, h| waves.borrow_mut().resize(w, h)
    })?;

    run_loop(move || {
        draw_waves(&ctx, &mut waves.borrow_mut());
        true
    })
}

fn draw_waves(ctx: &CanvasRenderingContext2d, waves: &mut BrainWaves) {
    let (w, h) = waves.size();
    ctx.clear_rect(0.0, 0.0, w, h);

    ctx.set_line_width(waves.line_width());
    for index in 0..waves.waves().len() {
        ctx.begin_path();
        for (i, (x, y)) in waves.polyline(index).enumerate() {
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.set_stroke_style_str(&waves.stroke_style(index));
        ctx.stroke();
    }
    waves.advance();
}

//! Browser front end: a canvas, mouse listeners and a requestAnimationFrame
//! loop that steps the core at a fixed 60 Hz and draws each snapshot with
//! plain canvas primitives. Audio is left to the page, which polls
//! `drain_cues()` for the names of cues raised since the last call.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, window};

use crate::board::layout::{self, DECK_LABEL_POS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::config::GameConfig;
use crate::cue::Cue;
use crate::input::{InputFrame, Rect};
use crate::screen::{Game, Screen};
use crate::snapshot::{Outline, Snapshot};

const CANVAS_ID: &str = "elevens-canvas";
const MAX_STEPS_PER_FRAME: u32 = 8;

struct WebState {
    ctx: CanvasRenderingContext2d,
    game: Game,
    step_ms: f64,
    last_ms: Option<f64>,
    accumulator_ms: f64,
    pending_cues: Vec<Cue>,
}

thread_local! {
    static WEB_STATE: RefCell<Option<WebState>> = const { RefCell::new(None) };
    static MOUSE: RefCell<InputFrame> = RefCell::new(InputFrame::default());
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Creates (or reuses) the canvas and starts the game loop.
pub fn start(config: GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(CANVAS_ID);
        c.set_width(SCREEN_WIDTH as u32);
        c.set_height(SCREEN_HEIGHT as u32);
        c.set_attribute("style", "display:block; margin:0 auto; cursor:pointer;")?;
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    attach_mouse_listeners(&canvas)?;

    let step_ms = 1000.0 / f64::from(config.frame_rate);
    let game = Game::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    WEB_STATE.with(|s| {
        s.replace(Some(WebState {
            ctx,
            game,
            step_ms,
            last_ms: None,
            accumulator_ms: 0.0,
            pending_cues: Vec::new(),
        }))
    });
    start_loop();
    tracing::info!("elevens started");
    Ok(())
}

/// Comma-separated names of cues raised since the previous call.
pub fn drain_cues() -> String {
    WEB_STATE.with(|s| {
        s.borrow_mut()
            .as_mut()
            .map(|state| {
                std::mem::take(&mut state.pending_cues)
                    .into_iter()
                    .map(Cue::name)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default()
    })
}

fn attach_mouse_listeners(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let handlers: [(&str, Option<bool>); 3] =
        [("mousemove", None), ("mousedown", Some(true)), ("mouseup", Some(false))];
    for (event, button_state) in handlers {
        let on_event = Closure::wrap(Box::new(move |e: MouseEvent| {
            MOUSE.with(|m| {
                let mut m = m.borrow_mut();
                m.cursor.x = e.offset_x() as f32;
                m.cursor.y = e.offset_y() as f32;
                // only the primary button drives the game
                if let Some(down) = button_state.filter(|_| e.button() == 0) {
                    m.left_down = down;
                }
            });
        }) as Box<dyn FnMut(MouseEvent)>);
        canvas.add_event_listener_with_callback(event, on_event.as_ref().unchecked_ref())?;
        on_event.forget();
    }
    Ok(())
}

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        WEB_STATE.with(|state_cell| {
            if let Some(state) = state_cell.borrow_mut().as_mut() {
                frame(state, ts);
            }
        });
        if let Some(w) = window() {
            if let Some(cb) = f.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        if let Some(cb) = g.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

fn frame(state: &mut WebState, now: f64) {
    let elapsed = state.last_ms.map_or(state.step_ms, |last| now - last);
    state.last_ms = Some(now);
    state.accumulator_ms += elapsed.max(0.0);

    let input = MOUSE.with(|m| *m.borrow());
    let mut steps = 0;
    while state.accumulator_ms >= state.step_ms && steps < MAX_STEPS_PER_FRAME {
        state.pending_cues.extend(state.game.tick(input));
        state.accumulator_ms -= state.step_ms;
        steps += 1;
    }
    // a backgrounded tab should not replay minutes of ticks
    if steps == MAX_STEPS_PER_FRAME {
        state.accumulator_ms = 0.0;
    }
    render(&state.ctx, &state.game.snapshot());
}

// --- Rendering ---------------------------------------------------------------

fn render(ctx: &CanvasRenderingContext2d, snap: &Snapshot) {
    let (w, h) = (f64::from(SCREEN_WIDTH), f64::from(SCREEN_HEIGHT));
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str("#000");
    ctx.fill_rect(0.0, 0.0, w, h);

    match snap.screen {
        Screen::Intro => title(ctx, "ELEVENS", "#ffcc00"),
        Screen::Menu => title(ctx, "ELEVENS", "#ffffff"),
        Screen::Gameplay => render_gameplay(ctx, snap),
        Screen::Win => title(ctx, "YOU WIN!", "#7cfc00"),
        Screen::Loss => title(ctx, "NO MOVES LEFT", "#ff4d4d"),
        Screen::Help => {
            let text = format!("HELP {}/{}", snap.help_page + 1, snap.help_pages);
            title(ctx, &text, "#ffffff");
        }
    }

    for b in &snap.buttons {
        if b.hovered {
            fill(ctx, b.rect.outline(layout::OUTLINE_THICKNESS), "#ffff00");
        }
        fill(ctx, b.rect, "#c8102e");
        ctx.set_fill_style_str("#fff");
        ctx.set_font("24px sans-serif");
        ctx.set_text_align("center");
        let cx = f64::from(b.rect.x) + f64::from(b.rect.w) / 2.0;
        let cy = f64::from(b.rect.y) + f64::from(b.rect.h) / 2.0 + 8.0;
        ctx.fill_text(b.label, cx, cy).ok();
    }

    if snap.fade_active {
        ctx.set_global_alpha(f64::from(snap.fade_opacity));
        ctx.set_fill_style_str("#000");
        ctx.fill_rect(0.0, 0.0, w, h);
        ctx.set_global_alpha(1.0);
    }
}

fn render_gameplay(ctx: &CanvasRenderingContext2d, snap: &Snapshot) {
    const BACKDROPS: [&str; 5] = ["#8b0000", "#b8860b", "#2f4f4f", "#4b0082", "#006400"];
    ctx.set_global_alpha(f64::from(snap.background.opacity));
    ctx.set_fill_style_str(BACKDROPS[snap.background.index % BACKDROPS.len()]);
    ctx.fill_rect(0.0, 0.0, f64::from(SCREEN_WIDTH), f64::from(SCREEN_HEIGHT));
    ctx.set_global_alpha(1.0);

    if snap.animation.playing {
        let r = layout::ANIMATION_RECT;
        ctx.set_fill_style_str("#ffcc00");
        ctx.set_font("20px sans-serif");
        ctx.set_text_align("center");
        let text = format!("animation {} · frame {}", snap.animation.index + 1, snap.animation.frame);
        ctx.fill_text(&text, f64::from(r.x + r.w / 2), f64::from(r.y + r.h / 2)).ok();
    }

    for slot in &snap.slots {
        match slot.outline {
            Some(Outline::Selected) => fill(ctx, slot.rect.outline(layout::OUTLINE_THICKNESS), "#00c000"),
            Some(Outline::Highlighted) => fill(ctx, slot.rect.outline(layout::OUTLINE_THICKNESS), "#ffff00"),
            _ => {}
        }
        if slot.is_blocked_face {
            fill(ctx, slot.rect.outline(layout::OUTLINE_THICKNESS / 2), "#ff0000");
        }
        if slot.is_hidden {
            fill(ctx, slot.rect, "#dddddd");
            continue;
        }
        fill(ctx, slot.rect, "#ffffff");
        let colour = if slot.card.suit().is_red() { "#c8102e" } else { "#111111" };
        ctx.set_fill_style_str(colour);
        ctx.set_font("36px serif");
        ctx.set_text_align("center");
        let cx = f64::from(slot.rect.x) + f64::from(slot.rect.w) / 2.0;
        let cy = f64::from(slot.rect.y) + f64::from(slot.rect.h) / 2.0 + 12.0;
        ctx.fill_text(&slot.card.label(), cx, cy).ok();
    }

    let text = format!("DECK: {}", snap.deck_remaining);
    ctx.set_font("40px sans-serif");
    ctx.set_text_align("left");
    ctx.set_fill_style_str("#000");
    ctx.fill_text(&text, f64::from(DECK_LABEL_POS.x) + 4.0, f64::from(DECK_LABEL_POS.y) + 4.0 + 36.0).ok();
    ctx.set_fill_style_str("#fff");
    ctx.fill_text(&text, f64::from(DECK_LABEL_POS.x), f64::from(DECK_LABEL_POS.y) + 36.0).ok();
}

fn title(ctx: &CanvasRenderingContext2d, text: &str, colour: &str) {
    ctx.set_fill_style_str(colour);
    ctx.set_font("64px serif");
    ctx.set_text_align("center");
    ctx.fill_text(text, f64::from(SCREEN_WIDTH) / 2.0, 220.0).ok();
}

fn fill(ctx: &CanvasRenderingContext2d, r: Rect, colour: &str) {
    ctx.set_fill_style_str(colour);
    ctx.fill_rect(f64::from(r.x), f64::from(r.y), f64::from(r.w), f64::from(r.h));
}

//! Browser shell. Builds the DOM skeleton once, forwards UI events into the
//! board, runs the board's timer effects and re-renders after every event.
//!
//! Everything lives in a thread-local slot, same as the board loop state; the
//! listeners are leaked closures that only ever touch that slot.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, window};

use crate::board::{BoardEffect, BoardEvent, CloseTicket, PlanetId, PuzzleBoard, journey};
use crate::config::BoardConfig;
use crate::error::SceneError;
use crate::starfield::{StarRng, scatter};
use crate::view::{self, DialogView, PlanetMarkerView, SceneView};

const ROOT_ID: &str = "sc-root";

const STYLE_SHEET: &str = "
@keyframes sc-twinkle { 0%,100% { opacity:0.2 } 50% { opacity:1 } }
@keyframes sc-float { 0%,100% { margin-top:0 } 50% { margin-top:-10px } }
@keyframes sc-pulse-glow { 0%,100% { box-shadow:0 0 12px 2px rgba(255,255,255,0.25) } 50% { box-shadow:0 0 28px 8px rgba(255,255,255,0.45) } }
@keyframes sc-bounce-in { 0% { transform:scale(0.3); opacity:0 } 60% { transform:scale(1.08); opacity:1 } 100% { transform:scale(1) } }
";

struct App {
    doc: Document,
    board: PuzzleBoard,
    config: BoardConfig,
    // setTimeout handles of scheduled auto-closes
    timers: HashMap<CloseTicket, i32>,
    // Planet whose dialog was on screen at the last render (for autofocus)
    shown_dialog: Option<PlanetId>,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

pub fn mount(config: BoardConfig) -> Result<(), SceneError> {
    let win = window().ok_or(SceneError::NoWindow)?;
    let doc = win.document().ok_or(SceneError::NoDocument)?;
    let body = doc.body().ok_or(SceneError::NoBody)?;

    if doc.get_element_by_id(ROOT_ID).is_some() {
        log::warn!("scene already mounted");
        return Ok(());
    }

    let board = PuzzleBoard::new(journey(), config.auto_close_ms)?;

    let style = doc.create_element("style")?;
    style.set_text_content(Some(STYLE_SHEET));
    body.append_child(&style)?;

    let root = doc.create_element("div")?;
    root.set_id(ROOT_ID);
    root.set_attribute("style", "position:fixed; inset:0; overflow:hidden; background:#0b0b23; color:#f5f3ff; font-family:'Nunito', sans-serif;")?;
    body.append_child(&root)?;

    build_starfield(&doc, &root, config.star_count)?;
    build_header(&doc, &root)?;
    build_stage(&doc, &root, &board)?;
    build_dialog(&doc, &root)?;

    APP.with(|cell| {
        cell.replace(Some(App {
            doc: doc.clone(),
            board,
            config,
            timers: HashMap::new(),
            shown_dialog: None,
        }))
    });

    // Escape anywhere dismisses the dialog
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if evt.key() == "Escape" {
                dispatch(BoardEvent::DialogDismissed);
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    with_app(App::render)?;
    log::info!("space cat mounted");
    Ok(())
}

/// Feed one event through the board, run its effect, redraw.
fn dispatch(event: BoardEvent) {
    APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(app) = slot.as_mut() else {
            return;
        };
        if let BoardEvent::AutoCloseElapsed(ticket) = &event {
            app.timers.remove(ticket);
        }
        if let Some(effect) = app.board.dispatch(event) {
            if let Err(err) = app.apply(effect) {
                log::error!("timer effect failed: {err}");
            }
        }
        if let Err(err) = app.render() {
            log::error!("render failed: {err}");
        }
    });
}

fn with_app(f: impl FnOnce(&mut App) -> Result<(), SceneError>) -> Result<(), SceneError> {
    APP.with(|cell| match cell.borrow_mut().as_mut() {
        Some(app) => f(app),
        None => Ok(()),
    })
}

// --- Skeleton ----------------------------------------------------------------

fn child(
    doc: &Document,
    parent: &Element,
    tag: &str,
    id: Option<&str>,
    style: &str,
) -> Result<Element, SceneError> {
    let el = doc.create_element(tag)?;
    if let Some(id) = id {
        el.set_id(id);
    }
    if !style.is_empty() {
        el.set_attribute("style", style)?;
    }
    parent.append_child(&el)?;
    Ok(el)
}

fn star_seed() -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u64::from_le_bytes(buf);
        }
    }
    window()
        .and_then(|w| w.performance())
        .map(|p| (p.now() * 1000.0) as u64)
        .unwrap_or(0)
}

fn build_starfield(doc: &Document, root: &Element, count: usize) -> Result<(), SceneError> {
    let sky = child(doc, root, "div", Some("sc-stars"), "position:absolute; inset:0; overflow:hidden;")?;
    let mut rng = StarRng::new(star_seed());
    for star in scatter(count, &mut rng) {
        let style = format!(
            "position:absolute; border-radius:50%; background:#fde68a; width:{s}px; height:{s}px; left:{l}%; top:{t}%; animation:sc-twinkle 2s ease-in-out infinite; animation-delay:{d}s;",
            s = star.size_px,
            l = star.left_pct,
            t = star.top_pct,
            d = star.delay_s
        );
        child(doc, &sky, "div", None, &style)?;
    }
    Ok(())
}

fn build_header(doc: &Document, root: &Element) -> Result<(), SceneError> {
    let header = child(doc, root, "div", None, "position:relative; z-index:10; display:flex; justify-content:space-between; align-items:center; padding:24px 32px 0;")?;

    let titles = child(doc, &header, "div", None, "")?;
    let h1 = child(doc, &titles, "h1", None, "margin:0 0 8px; font-size:36px; display:flex; gap:12px; align-items:center;")?;
    child(doc, &h1, "span", None, "font-size:48px;")?.set_text_content(Some(view::TITLE_GLYPH));
    child(doc, &h1, "span", None, "")?.set_text_content(Some(view::TITLE));
    child(doc, &titles, "p", None, "margin:0; font-size:20px; color:#a5a3c9;")?
        .set_text_content(Some(view::SUBTITLE));

    let card = child(doc, &header, "div", None, "display:flex; gap:8px; align-items:center; padding:16px; border-radius:12px; background:rgba(30,27,75,0.8);")?;
    child(doc, &card, "span", None, "font-size:24px; color:#facc15;")?.set_text_content(Some("★"));
    let counter = child(doc, &card, "div", None, "")?;
    child(doc, &counter, "p", None, "margin:0; font-size:14px; color:#a5a3c9;")?
        .set_text_content(Some(view::PROGRESS_CAPTION));
    child(doc, &counter, "p", Some("sc-progress"), "margin:0; font-size:24px; font-weight:bold;")?;

    let banner = child(doc, root, "div", Some("sc-banner"), "")?;
    child(doc, &banner, "span", None, "font-size:60px;")?.set_text_content(Some(view::BANNER_GLYPH));
    let text = child(doc, &banner, "div", None, "")?;
    child(doc, &text, "h2", None, "margin:0 0 4px; font-size:24px;")?
        .set_text_content(Some(view::BANNER_TITLE));
    child(doc, &text, "p", None, "margin:0; font-size:18px;")?
        .set_text_content(Some(view::BANNER_TEXT));
    Ok(())
}

fn build_stage(doc: &Document, root: &Element, board: &PuzzleBoard) -> Result<(), SceneError> {
    let stage = child(doc, root, "div", Some("sc-stage"), "position:absolute; left:32px; right:32px; top:140px; bottom:24px; z-index:10;")?;
    child(doc, &stage, "div", Some("sc-character"), "")?
        .set_text_content(Some(view::CHARACTER_GLYPH));

    for planet in board.planets() {
        let id = planet.id;
        let button = child(doc, &stage, "button", Some(planet_dom_id(id).as_str()), "")?;
        let disc = child(doc, &button, "div", None, "")?;
        disc.set_id(&format!("sc-planet-{id}-disc"));
        disc.set_text_content(Some(planet.emoji));
        child(doc, &button, "span", Some(format!("sc-planet-{id}-check").as_str()), "")?
            .set_text_content(Some(view::SOLVED_MARK));
        child(doc, &button, "p", None, "margin:8px 0 0; font-size:12px; max-width:100px; text-align:center;")?
            .set_text_content(Some(planet.name));

        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch(BoardEvent::PlanetClicked(id));
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn build_dialog(doc: &Document, root: &Element) -> Result<(), SceneError> {
    let overlay = child(doc, root, "div", Some("sc-dialog"), "display:none;")?;
    let card = child(doc, &overlay, "div", None, "position:relative; width:min(420px, 90vw); padding:24px; border-radius:16px; background:#1e1b4b; box-shadow:0 20px 60px rgba(0,0,0,0.5);")?;

    let close = child(doc, &card, "button", Some("sc-dialog-close"), "position:absolute; top:12px; right:12px; background:none; border:none; color:#a5a3c9; font-size:20px; cursor:pointer;")?;
    close.set_text_content(Some("×"));

    let title = child(doc, &card, "h2", None, "margin:0; font-size:24px; display:flex; gap:12px; align-items:center;")?;
    child(doc, &title, "span", Some("sc-dialog-emoji"), "font-size:36px;")?;
    child(doc, &title, "span", Some("sc-dialog-name"), "")?;
    child(doc, &card, "p", None, "margin:16px 0 8px; font-size:18px;")?
        .set_text_content(Some(view::DIALOG_PROMPT));
    child(doc, &card, "p", Some("sc-dialog-riddle"), "margin:0 0 16px; padding:16px; border-radius:12px; background:#312e81; font-size:18px; font-weight:500;")?;

    let input = child(doc, &card, "input", Some("sc-answer"), "box-sizing:border-box; width:100%; padding:12px 16px; border-radius:8px; border:2px solid #4338ca; background:#0b0b23; color:#f5f3ff; font-size:16px;")?;
    input.set_attribute("type", "text")?;
    input.set_attribute("placeholder", view::ANSWER_PLACEHOLDER)?;
    child(doc, &card, "div", Some("sc-feedback"), "display:none;")?;
    let submit = child(doc, &card, "button", Some("sc-submit"), "width:100%; margin-top:12px; padding:16px; border:none; border-radius:10px; background:#8b5cf6; color:white; font-size:18px; cursor:pointer;")?;
    submit.set_text_content(Some(view::SUBMIT_LABEL));

    // Backdrop click dismisses; clicks inside the card must not reach it.
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch(BoardEvent::DialogDismissed);
        }) as Box<dyn FnMut(_)>);
        overlay.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        close.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            evt.stop_propagation();
        }) as Box<dyn FnMut(_)>);
        card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch(BoardEvent::Submit);
        }) as Box<dyn FnMut(_)>);
        submit.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            let value = evt
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .map(|i| i.value())
                .unwrap_or_default();
            dispatch(BoardEvent::DraftChanged(value));
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if evt.key() == "Enter" {
                dispatch(BoardEvent::Submit);
            }
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn planet_dom_id(id: PlanetId) -> String {
    format!("sc-planet-{id}")
}

// --- Effects & rendering -----------------------------------------------------

impl App {
    fn apply(&mut self, effect: BoardEffect) -> Result<(), SceneError> {
        let win = window().ok_or(SceneError::NoWindow)?;
        match effect {
            BoardEffect::ScheduleAutoClose { ticket, delay_ms } => {
                let callback = Closure::once_into_js(move || {
                    dispatch(BoardEvent::AutoCloseElapsed(ticket));
                });
                let handle = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    i32::try_from(delay_ms).unwrap_or(i32::MAX),
                )?;
                self.timers.insert(ticket, handle);
            }
            BoardEffect::CancelAutoClose { ticket } => {
                if let Some(handle) = self.timers.remove(&ticket) {
                    win.clear_timeout_with_handle(handle);
                }
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), SceneError> {
        let view = view::scene(&self.board, &self.config);
        self.render_hud(&view)?;
        for marker in &view.planets {
            self.render_planet(marker)?;
        }
        self.render_dialog(view.dialog.as_ref())?;
        self.shown_dialog = view.dialog.as_ref().map(|d| d.planet);
        Ok(())
    }

    fn by_id(&self, id: &str) -> Result<Element, SceneError> {
        self.doc
            .get_element_by_id(id)
            .ok_or_else(|| SceneError::Js(format!("missing element #{id}")))
    }

    fn render_hud(&self, view: &SceneView) -> Result<(), SceneError> {
        self.by_id("sc-progress")?
            .set_text_content(Some(view.progress.label().as_str()));

        let banner_style = if view.show_banner {
            "position:relative; z-index:10; display:flex; gap:16px; align-items:center; margin:24px 32px 0; padding:24px; border-radius:16px; border:2px solid #8b5cf6; background:rgba(139,92,246,0.2); animation:sc-bounce-in 0.6s ease-out;"
        } else {
            "display:none;"
        };
        self.by_id("sc-banner")?.set_attribute("style", banner_style)?;

        let character = format!(
            "position:absolute; left:{x}%; top:{y}%; transform:translate(-50%,-50%); transition:left 1s ease-in-out, top 1s ease-in-out; animation:sc-float 3s ease-in-out infinite; font-size:60px; z-index:20; pointer-events:none; filter:drop-shadow(0 4px 8px rgba(0,0,0,0.5));",
            x = view.character.x,
            y = view.character.y
        );
        self.by_id("sc-character")?.set_attribute("style", &character)?;
        Ok(())
    }

    fn render_planet(&self, marker: &PlanetMarkerView) -> Result<(), SceneError> {
        let id = marker.id;
        let button = self.by_id(&planet_dom_id(id))?;
        let (opacity, cursor) = if marker.clickable() {
            (1.0, "pointer")
        } else {
            (0.5, "default")
        };
        button.set_attribute(
            "style",
            &format!(
                "position:absolute; left:{x}%; top:{y}%; transform:translate(-50%,-50%); background:none; border:none; color:inherit; padding:0; opacity:{opacity}; cursor:{cursor}; transition:opacity 0.3s;",
                x = marker.position.x,
                y = marker.position.y
            ),
        )?;
        if marker.clickable() {
            button.remove_attribute("disabled")?;
        } else {
            button.set_attribute("disabled", "")?;
        }

        let glow = if marker.clickable() {
            "animation:sc-pulse-glow 2s ease-in-out infinite;"
        } else {
            ""
        };
        self.by_id(&format!("sc-planet-{id}-disc"))?.set_attribute(
            "style",
            &format!(
                "width:80px; height:80px; margin:0 auto; border-radius:50%; display:flex; align-items:center; justify-content:center; font-size:30px; background:{color}; {glow}",
                color = marker.color.css()
            ),
        )?;

        let check_style = if marker.solved {
            "position:absolute; top:-8px; right:-8px; width:24px; height:24px; border-radius:50%; background:#052e16; color:#4ade80; font-size:16px; line-height:24px; animation:sc-bounce-in 0.6s ease-out;"
        } else {
            "display:none;"
        };
        self.by_id(&format!("sc-planet-{id}-check"))?
            .set_attribute("style", check_style)?;
        Ok(())
    }

    fn render_dialog(&self, dialog: Option<&DialogView>) -> Result<(), SceneError> {
        let overlay = self.by_id("sc-dialog")?;
        let Some(dialog) = dialog else {
            overlay.set_attribute("style", "display:none;")?;
            return Ok(());
        };
        overlay.set_attribute("style", "position:fixed; inset:0; z-index:50; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.6);")?;

        self.by_id("sc-dialog-emoji")?.set_text_content(Some(dialog.emoji));
        self.by_id("sc-dialog-name")?.set_text_content(Some(dialog.name));
        self.by_id("sc-dialog-riddle")?.set_text_content(Some(dialog.riddle));

        let input: HtmlInputElement = self
            .by_id("sc-answer")?
            .dyn_into()
            .map_err(|_| SceneError::Js("#sc-answer is not an input".to_string()))?;
        if input.value() != dialog.draft {
            input.set_value(&dialog.draft);
        }
        if self.shown_dialog != Some(dialog.planet) {
            let field: &HtmlElement = input.as_ref();
            field.focus()?;
        }

        let feedback = self.by_id("sc-feedback")?;
        match &dialog.feedback {
            Some(fb) => {
                let (bg, fg) = if fb.success {
                    ("#8b5cf6", "#ffffff")
                } else {
                    ("#312e81", "#e0e7ff")
                };
                feedback.set_text_content(Some(fb.text.as_str()));
                feedback.set_attribute(
                    "style",
                    &format!("margin-top:12px; padding:8px; border-radius:999px; text-align:center; font-size:16px; background:{bg}; color:{fg};"),
                )?;
            }
            None => {
                feedback.set_text_content(None);
                feedback.set_attribute("style", "display:none;")?;
            }
        }
        Ok(())
    }
}

//! Page bootstrap: wires the enabled effects to the document.
//!
//! Every listener, interval and timeout created here is owned by the returned [`Site`];
//! dropping it detaches them and stops the rain. A failing effect is logged and
//! skipped, the rest still install.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
    Window,
};

use crate::canvas::{MatrixRain, viewport_size};
use crate::config::{MenuSelectors, SiteConfig};
use crate::diag;
use crate::effects::{self, Counter, CounterSpec, MenuState, PortScan, ScrollTracker, SectionBox, Typewriter};
use crate::effects::{binary_stream, grid, hexdump, portscan, scroll, typewriter};
use crate::error::{EffectError, Result};
use crate::frame::{BrowserScheduler, FrameHandle, FrameScheduler};
use crate::random::{self, RandomSource};

// --- DOM helpers ---------------------------------------------------------------

fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Existing element matching `selector`, or a new `<div class=..>` appended to body.
fn find_or_create(doc: &Document, selector: &str, class: &str) -> Result<Element> {
    if let Some(el) = query(doc, selector) {
        return Ok(el);
    }
    let el = doc.create_element("div")?;
    el.set_class_name(class);
    doc.body().ok_or(EffectError::MissingElement("body".into()))?.append_child(&el)?;
    Ok(el)
}

fn replace_div(doc: &Document, class: &str) -> Result<Element> {
    if let Some(old) = query(doc, &format!(".{class}")) {
        old.remove();
    }
    find_or_create(doc, &format!(".{class}"), class)
}

fn scroll_to(window: &Window, top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Scroll the section into view, with its top just below the fixed header when
/// `below_header` is set.
fn scroll_to_section(window: &Window, doc: &Document, section_id: &str, below_header: bool) {
    let Some(target) = doc.get_element_by_id(section_id) else {
        return;
    };
    if !below_header {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
        return;
    }
    let header_offset = query(doc, "header")
        .and_then(|h| h.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |h| h.offset_height() as f64);
    let y = target.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0) - header_offset;
    scroll_to(window, y);
}

// --- Ownership of callbacks ----------------------------------------------------

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

struct Interval {
    id: Rc<Cell<Option<i32>>>,
    _callback: Closure<dyn FnMut()>,
}

/// `setTimeout` / `clearTimeout` as seen by [`Timers`].
trait TimeoutHost {
    type Callback;

    fn wrap(&self, f: Box<dyn FnOnce()>) -> Self::Callback;
    fn set(&self, callback: &Self::Callback, ms: i32) -> Result<i32>;
    fn clear(&self, id: i32);
}

impl TimeoutHost for Window {
    type Callback = Closure<dyn FnMut()>;

    fn wrap(&self, f: Box<dyn FnOnce()>) -> Self::Callback {
        Closure::once(f)
    }

    fn set(&self, callback: &Self::Callback, ms: i32) -> Result<i32> {
        Ok(self.set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), ms)?)
    }

    fn clear(&self, id: i32) {
        self.clear_timeout_with_handle(id);
    }
}

struct Timeout<C> {
    id: i32,
    fired: Rc<Cell<bool>>,
    _callback: C,
}

/// One-shot timeouts. Once released, pending ones are cleared and new ones are
/// never armed.
struct Timers<H: TimeoutHost> {
    host: H,
    pending: RefCell<Vec<Timeout<H::Callback>>>,
    released: Cell<bool>,
}

impl<H: TimeoutHost + 'static> Timers<H> {
    fn new(host: H) -> Self {
        Self { host, pending: RefCell::new(Vec::new()), released: Cell::new(false) }
    }

    fn after(self: &Rc<Self>, ms: i32, f: impl FnOnce() + 'static) -> Result<()> {
        if self.released.get() {
            return Ok(());
        }
        self.pending.borrow_mut().retain(|t| !t.fired.get());
        let fired = Rc::new(Cell::new(false));
        let done = fired.clone();
        let timers: Weak<Self> = Rc::downgrade(self);
        let callback = self.host.wrap(Box::new(move || {
            if timers.upgrade().is_some_and(|t| !t.released.get()) {
                f();
            }
            done.set(true);
        }));
        let id = self.host.set(&callback, ms)?;
        self.pending.borrow_mut().push(Timeout { id, fired, _callback: callback });
        Ok(())
    }

    fn release(&self) {
        self.released.set(true);
        for t in self.pending.borrow_mut().drain(..) {
            if !t.fired.get() {
                self.host.clear(t.id);
            }
        }
    }
}

struct Bindings {
    listeners: Vec<Listener>,
    intervals: Vec<Interval>,
    timers: Rc<Timers<Window>>,
    on_release: Vec<Box<dyn FnOnce()>>,
}

impl Bindings {
    fn new(window: &Window) -> Self {
        Self {
            listeners: Vec::new(),
            intervals: Vec::new(),
            timers: Rc::new(Timers::new(window.clone())),
            on_release: Vec::new(),
        }
    }

    fn listen(&mut self, target: EventTarget, kind: &'static str, f: impl FnMut(Event) + 'static) -> Result<()> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener { target, kind, callback });
        Ok(())
    }

    /// Run `tick` every `ms` until it returns `false`.
    fn every(&mut self, window: &Window, ms: i32, mut tick: impl FnMut() -> bool + 'static) -> Result<()> {
        let id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let own_id = id.clone();
        let win = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            if !tick() {
                if let Some(h) = own_id.take() {
                    win.clear_interval_with_handle(h);
                }
            }
        }) as Box<dyn FnMut()>);
        let handle =
            window.set_interval_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), ms)?;
        id.set(Some(handle));
        self.intervals.push(Interval { id, _callback: callback });
        Ok(())
    }

    fn release(&mut self, window: &Window) {
        for cleanup in self.on_release.drain(..) {
            cleanup();
        }
        self.timers.release();
        for l in self.listeners.drain(..) {
            let _ = l.target.remove_event_listener_with_callback(l.kind, l.callback.as_ref().unchecked_ref());
        }
        for i in self.intervals.drain(..) {
            if let Some(h) = i.id.take() {
                window.clear_interval_with_handle(h);
            }
        }
    }
}

// --- Site ------------------------------------------------------------------------

/// All effects installed on the page.
#[wasm_bindgen]
pub struct Site {
    window: Window,
    document: Document,
    rain: Option<MatrixRain>,
    bindings: Bindings,
}

#[wasm_bindgen]
impl Site {
    #[wasm_bindgen(js_name = rainActive)]
    pub fn rain_active(&self) -> bool {
        self.rain.as_ref().is_some_and(|r| r.is_active())
    }

    /// Stop the rain and detach every listener, interval and timeout.
    pub fn shutdown(&mut self) {
        if let Some(rain) = self.rain.take() {
            rain.stop();
        }
        self.bindings.release(&self.window);
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        self.shutdown();
    }
}

type Installer = fn(&mut Site, &SiteConfig) -> Result<()>;

/// Install every effect enabled in `config`.
pub fn boot(config: &SiteConfig) -> Result<Site> {
    let window = web_sys::window().ok_or(EffectError::NoWindow)?;
    let document = window.document().ok_or(EffectError::NoDocument)?;
    let bindings = Bindings::new(&window);
    let mut site = Site { window, document, rain: None, bindings };

    let steps: [(&str, bool, Installer); 13] = [
        ("console banner", config.console_banner, install_console_banner),
        ("matrix rain", config.matrix_rain, install_matrix_rain),
        ("binary streams", config.binary_streams, install_binary_streams),
        ("hex display", config.hex_display, install_hex_display),
        ("port scan", config.port_scan, install_port_scan),
        ("intrusion warning", config.intrusion_warning, install_intrusion_warning),
        ("counters", config.counters, install_counters),
        ("typewriter", config.typewriter, install_typewriter),
        ("cyber grid", config.cyber_grid, install_cyber_grid),
        ("mobile menu", config.mobile_menu, install_mobile_menu),
        ("smooth scroll", config.smooth_scroll, install_smooth_scroll),
        ("back to top", config.back_to_top, install_back_to_top),
        ("scroll tracking", config.scroll_tracking, install_scroll_tracking),
    ];
    for (name, enabled, install) in steps {
        if !enabled {
            continue;
        }
        if let Err(err) = install(&mut site, config) {
            diag::error(&format!("{name} effect disabled: {err}"));
        }
    }
    Ok(site)
}

// --- Installers --------------------------------------------------------------------

fn install_console_banner(_site: &mut Site, _config: &SiteConfig) -> Result<()> {
    diag::styled(
        "⚠️ 安全警告！",
        "color: #ff3333; font-size: 48px; font-weight: bold; text-shadow: 0 0 10px #ff3333;",
    );
    diag::styled("此为受限区域，未经授权的访问将被跟踪并记录。", "color: #41ff8a; font-size: 16px; font-weight: bold;");
    diag::styled("江西财经大学网安协会 - 学习 · 创新 · 安全", "color: #41ff8a; font-size: 14px;");
    Ok(())
}

fn install_matrix_rain(site: &mut Site, config: &SiteConfig) -> Result<()> {
    if let Some(el) = site.document.get_element_by_id(&config.rain_canvas_id) {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            html.style().set_property("display", "block")?;
        }
    }
    let rain = MatrixRain::attach(&config.rain_canvas_id, config.rain_mode, config.rain_style.clone())?;
    rain.start();
    site.rain = Some(rain);
    Ok(())
}

fn render_binary_streams(window: &Window, doc: &Document, rng: &mut dyn RandomSource) -> Result<()> {
    let Some(container) = query(doc, ".binary-stream") else {
        return Ok(());
    };
    container.set_inner_html("");
    let width = viewport_size(window).map_or(0.0, |(w, _)| w);
    for col in binary_stream::generate_streams(width, rng) {
        let column = doc.create_element("div")?;
        column.set_class_name("binary-column");
        column.set_attribute(
            "style",
            &format!(
                "left:{}%; animation-duration:{}s; animation-delay:{}s;",
                col.left_percent, col.duration_s, col.delay_s
            ),
        )?;
        for (bit, opacity) in col.bits {
            let b = doc.create_element("div")?;
            b.set_class_name("binary-bit");
            b.set_text_content(Some(&bit.to_string()));
            b.set_attribute("style", &format!("opacity:{opacity};"))?;
            column.append_child(&b)?;
        }
        container.append_child(&column)?;
    }
    Ok(())
}

fn install_binary_streams(site: &mut Site, _config: &SiteConfig) -> Result<()> {
    let mut rng = random::default_source();
    render_binary_streams(&site.window, &site.document, rng.as_mut())?;
    let (win, doc) = (site.window.clone(), site.document.clone());
    site.bindings.every(&site.window, binary_stream::STREAM_REGEN_MS, move || {
        if let Err(err) = render_binary_streams(&win, &doc, rng.as_mut()) {
            diag::warn(&format!("binary stream refresh failed: {err}"));
        }
        true
    })
}

fn install_hex_display(site: &mut Site, _config: &SiteConfig) -> Result<()> {
    let container = find_or_create(&site.document, ".hex-display", "hex-display")?;
    let mut rng = random::default_source();
    site.bindings.every(&site.window, hexdump::HEX_REFRESH_MS, move || {
        container.set_text_content(Some(&effects::hex_line(rng.as_mut())));
        true
    })
}

fn install_port_scan(site: &mut Site, _config: &SiteConfig) -> Result<()> {
    let container = find_or_create(&site.document, ".port-scan", "port-scan")?;
    let mut scan = PortScan::new();
    container.set_text_content(Some(scan.text()));
    let mut rng = random::default_source();
    site.bindings.every(&site.window, portscan::SCAN_INTERVAL_MS, move || {
        scan.tick(rng.as_mut());
        container.set_text_content(Some(scan.text()));
        !scan.is_finished()
    })
}

fn install_intrusion_warning(site: &mut Site, _config: &SiteConfig) -> Result<()> {
    if !effects::roll_intrusion_warning(random::default_source().as_mut()) {
        return Ok(());
    }
    let doc = site.document.clone();
    site.bindings.timers.after(effects::INTRUSION_DELAY_MS, move || {
        if query(&doc, ".intrusion-warning").is_some() {
            return;
        }
        match find_or_create(&doc, ".intrusion-warning", "intrusion-warning") {
            Ok(el) => el.set_text_content(Some(effects::INTRUSION_WARNING_TEXT)),
            Err(err) => diag::warn(&format!("intrusion warning not shown: {err}")),
        }
    })
}

fn install_counter(site: &mut Site, spec: &CounterSpec) -> Result<()> {
    let Some(el) = site.document.get_element_by_id(&spec.element_id) else {
        return Ok(());
    };
    let mut counter = Counter::new(spec.clone());
    site.bindings.every(&site.window, spec.interval_ms, move || match counter.tick() {
        Some(text) => {
            el.set_text_content(Some(&text));
            !counter.is_done()
        }
        None => false,
    })
}

fn install_counters(site: &mut Site, config: &SiteConfig) -> Result<()> {
    for spec in &config.counter_specs {
        install_counter(site, spec)?;
    }
    Ok(())
}

struct TypewriterRun {
    timers: Weak<Timers<Window>>,
    container: Element,
    lines: Vec<Node>,
    state: RefCell<Typewriter>,
    rng: RefCell<Box<dyn RandomSource>>,
}

fn type_next(run: Rc<TypewriterRun>) {
    let Some(idx) = run.state.borrow_mut().next_line() else {
        return;
    };
    if let Some(line) = run.lines.get(idx) {
        if let Err(err) = run.container.append_child(line) {
            diag::warn(&format!("typewriter append failed: {err:?}"));
        }
        run.container.set_scroll_top(run.container.scroll_height());
    }
    if run.state.borrow().is_done() {
        return;
    }
    // Gone or released timers mean the site shut down.
    let Some(timers) = run.timers.upgrade() else {
        return;
    };
    let delay = Typewriter::step_delay(run.rng.borrow_mut().as_mut());
    if let Err(err) = timers.after(delay, move || type_next(run)) {
        diag::warn(&format!("typewriter stopped: {err}"));
    }
}

fn install_typewriter(site: &mut Site, _config: &SiteConfig) -> Result<()> {
    let Some(container) = query(&site.document, ".terminal-content") else {
        return Ok(());
    };
    let mut lines = Vec::new();
    for p in query_all(&site.document, ".terminal-content p") {
        lines.push(p.clone_node_with_deep(true)?);
    }
    container.set_inner_html("");
    if let Some(first) = lines.first() {
        container.append_child(first)?;
    }
    let run = Rc::new(TypewriterRun {
        timers: Rc::downgrade(&site.bindings.timers),
        container,
        state: RefCell::new(Typewriter::new(lines.len())),
        lines,
        rng: RefCell::new(random::default_source()),
    });
    site.bindings.timers.after(typewriter::START_DELAY_MS, move || type_next(run))
}

fn draw_cyber_grid(window: &Window, doc: &Document) -> Result<()> {
    let grid_el = replace_div(doc, "cyber-grid")?;
    let (vw, vh) = viewport_size(window).unwrap_or((0.0, 0.0));
    let (horizontal, vertical) = grid::grid_lines(vw, vh, grid::GRID_GAP);
    for top in horizontal {
        let line = doc.create_element("div")?;
        line.set_class_name("grid-line horizontal");
        line.set_attribute("style", &format!("top:{top}px;"))?;
        grid_el.append_child(&line)?;
    }
    for left in vertical {
        let line = doc.create_element("div")?;
        line.set_class_name("grid-line vertical");
        line.set_attribute("style", &format!("left:{left}px;"))?;
        grid_el.append_child(&line)?;
    }
    Ok(())
}

fn install_cyber_grid(site: &mut Site, _config: &SiteConfig) -> Result<()> {
    draw_cyber_grid(&site.window, &site.document)?;
    replace_div(&site.document, "scan-line")?;
    replace_div(&site.document, "data-stream")?;
    for el in query_all(&site.document, ".glitch-text") {
        if el.get_attribute("data-text").is_none() {
            let text = el.text_content().unwrap_or_default();
            el.set_attribute("data-text", &text)?;
        }
    }
    let (win, doc) = (site.window.clone(), site.document.clone());
    site.bindings.listen(site.window.clone().into(), "resize", move |_| {
        if let Err(err) = draw_cyber_grid(&win, &doc) {
            diag::warn(&format!("cyber grid redraw failed: {err}"));
        }
    })
}

fn apply_menu(state: MenuState, nav: Option<&Element>, toggle: &Element) {
    if let Some(nav) = nav {
        set_class(nav, "show", state.is_open());
    }
    set_class(toggle, "active", state.is_open());
}

fn install_mobile_menu(site: &mut Site, config: &SiteConfig) -> Result<()> {
    let MenuSelectors { toggle, nav, links, close_on_link, .. } = &config.menu;
    let policy = *close_on_link;
    let Some(toggle_el) = query(&site.document, toggle) else {
        return Ok(());
    };
    let nav_el = query(&site.document, nav);
    let state = Rc::new(Cell::new(MenuState::default()));

    {
        let (state, nav_el, t) = (state.clone(), nav_el.clone(), toggle_el.clone());
        site.bindings.listen(toggle_el.clone().into(), "click", move |_| {
            let mut s = state.get();
            s.toggle();
            state.set(s);
            apply_menu(s, nav_el.as_ref(), &t);
        })?;
    }
    for link in query_all(&site.document, links) {
        let (state, nav_el, t, win) = (state.clone(), nav_el.clone(), toggle_el.clone(), site.window.clone());
        site.bindings.listen(link.into(), "click", move |_| {
            let mut s = state.get();
            let width = viewport_size(&win).map_or(0.0, |(w, _)| w);
            if s.on_link_click(width, policy) {
                state.set(s);
                apply_menu(s, nav_el.as_ref(), &t);
            }
        })?;
    }
    let win = site.window.clone();
    site.bindings.listen(site.window.clone().into(), "resize", move |_| {
        let mut s = state.get();
        let width = viewport_size(&win).map_or(0.0, |(w, _)| w);
        if s.on_resize(width) {
            state.set(s);
            apply_menu(s, nav_el.as_ref(), &toggle_el);
        }
    })
}

fn install_smooth_scroll(site: &mut Site, config: &SiteConfig) -> Result<()> {
    let below_header = config.header_offset;
    for link in query_all(&site.document, &config.menu.scroll_links) {
        let (win, doc, l) = (site.window.clone(), site.document.clone(), link.clone());
        site.bindings.listen(link.into(), "click", move |evt: Event| {
            evt.prevent_default();
            if let Some(id) = l.get_attribute("href").as_deref().and_then(|h| h.strip_prefix('#')) {
                scroll_to_section(&win, &doc, id, below_header);
            }
        })?;
    }
    for (button_id, section) in [("aboutButton", "about"), ("servicesButton", "services")] {
        let Some(button) = site.document.get_element_by_id(button_id) else {
            continue;
        };
        let (win, doc) = (site.window.clone(), site.document.clone());
        site.bindings.listen(button.into(), "click", move |_| {
            scroll_to_section(&win, &doc, section, below_header);
        })?;
    }
    Ok(())
}

fn install_back_to_top(site: &mut Site, _config: &SiteConfig) -> Result<()> {
    let Some(button) = site.document.get_element_by_id("backToTop") else {
        return Ok(());
    };
    let win = site.window.clone();
    site.bindings.listen(button.into(), "click", move |_| scroll_to(&win, 0.0))
}

/// Elements the scroll handler updates, looked up once at install time.
struct ScrollTargets {
    window: Window,
    header: Option<Element>,
    rain_layers: Vec<Element>,
    back_to_top: Option<Element>,
    sections: Vec<Element>,
    nav_links: Vec<Element>,
}

impl ScrollTargets {
    fn apply(&self, tracker: &mut ScrollTracker) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let vh = viewport_size(&self.window).map_or(0.0, |(_, h)| h);
        let view = tracker.update(scroll_y, vh);

        if let Some(header) = &self.header {
            let (add, remove) = view.header.classes();
            set_class(header, remove, false);
            set_class(header, add, true);
        }
        for layer in &self.rain_layers {
            set_class(layer, "hidden", view.matrix_hidden);
        }
        if let Some(btn) = &self.back_to_top {
            set_class(btn, "visible", view.back_to_top_visible);
        }

        let boxes: Vec<SectionBox> = self
            .sections
            .iter()
            .map(|section| {
                let rect = section.get_bounding_client_rect();
                SectionBox { id: section.id(), top: rect.top(), bottom: rect.bottom() }
            })
            .collect();
        for (section, b) in self.sections.iter().zip(&boxes) {
            if scroll::in_view(b.top, b.bottom, vh) {
                set_class(section, "section-visible", true);
            }
        }
        if let Some(active) = scroll::active_section(&boxes, vh) {
            let href = format!("#{active}");
            for link in &self.nav_links {
                set_class(link, "active", link.get_attribute("href").as_deref() == Some(href.as_str()));
            }
        }
    }
}

fn install_scroll_tracking(site: &mut Site, config: &SiteConfig) -> Result<()> {
    let doc = &site.document;
    let targets = Rc::new(ScrollTargets {
        window: site.window.clone(),
        header: if config.header_autohide { query(doc, "header") } else { None },
        rain_layers: [".matrix-rain", ".binary-stream"].iter().filter_map(|s| query(doc, s)).collect(),
        back_to_top: if config.back_to_top { doc.get_element_by_id("backToTop") } else { None },
        sections: query_all(doc, ".section"),
        nav_links: query_all(doc, &config.menu.scroll_links),
    });
    let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
    let scheduler = Rc::new(BrowserScheduler::new()?);
    let pending: Rc<Cell<Option<FrameHandle>>> = Rc::new(Cell::new(None));

    let frame = {
        let (targets, tracker, pending) = (targets.clone(), tracker.clone(), pending.clone());
        Rc::new(scheduler.register(Box::new(move |_ts: f64| {
            pending.set(None);
            targets.apply(&mut tracker.borrow_mut());
        })))
    };

    // Coalesce bursts of scroll events into one update per animation frame.
    let on_scroll = {
        let (scheduler, frame, pending) = (scheduler.clone(), frame.clone(), pending.clone());
        move |_: Event| {
            if pending.get().is_some() {
                return;
            }
            match scheduler.request(&*frame) {
                Ok(handle) => pending.set(Some(handle)),
                Err(err) => diag::warn(&format!("scroll update not scheduled: {err}")),
            }
        }
    };
    let on_resize = on_scroll.clone();
    site.bindings.listen(site.window.clone().into(), "scroll", on_scroll)?;
    site.bindings.listen(site.window.clone().into(), "resize", on_resize)?;
    site.bindings.on_release.push(Box::new(move || {
        if let Some(handle) = pending.take() {
            scheduler.cancel(handle);
        }
        drop(frame);
    }));

    if let Some(intro) = site.document.get_element_by_id("intro") {
        set_class(&intro, "section-visible", true);
    }
    targets.apply(&mut tracker.borrow_mut());
    Ok(())
}

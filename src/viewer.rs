use crate::admission::SharedAdmission;
use crate::core::constants::FULLSCREEN_SETTLE_DELAY_MS;
use crate::core::fullscreen::PlatformSync;
use crate::core::{
    Capabilities, Panorama, PointerKind, RendererKind, TextureUpload, ViewerConfig, ViewerError,
    ViewerId, ViewerState,
};
use crate::dom::{self, Subscriptions, Timeout};
use crate::events::{self, viewport::VisibilityCallback, with_viewer};
use crate::frame::{FrameTarget, RenderLoop};
use crate::fullscreen::FullscreenSession;
use crate::overlay::{self, Controls};
use crate::detect;
use crate::render::{texture, Renderer};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type ViewerHandle = Rc<RefCell<Viewer>>;

/// One mounted panorama: owns its canvas, buttons, listeners, observer and timers.
pub struct Viewer {
    state: ViewerState,
    caps: Capabilities,
    document: web::Document,
    container: web::HtmlElement,
    image_url: String,
    renderer: Option<Renderer>,
    context_lost: bool,
    controls: Option<Controls>,
    notice: Option<web::HtmlElement>,
    fullscreen: Option<FullscreenSession>,
    render_loop: RenderLoop,
    observer: Option<(web::IntersectionObserver, VisibilityCallback)>,
    subs: Subscriptions,
    canvas_subs: Subscriptions,
    resume_timer: Option<Timeout>,
    admission: SharedAdmission,
    this: Weak<RefCell<Viewer>>,
}

impl Viewer {
    /// Build the instance synchronously, then finish renderer setup and the
    /// image load in the background. Never fails after the handle exists:
    /// problems end up as an inline notice.
    pub fn mount(
        document: &web::Document,
        container: web::HtmlElement,
        image_url: String,
        admission: SharedAdmission,
    ) -> ViewerHandle {
        let caps = detect::capabilities();
        let config = ViewerConfig::from_attributes(|name| container.get_attribute(name));
        let handle = Rc::new_cyclic(|this: &Weak<RefCell<Viewer>>| {
            let id = admission.borrow_mut().register(this.clone());
            RefCell::new(Viewer {
                state: ViewerState::new(id, config.clone()),
                caps,
                document: document.clone(),
                container,
                image_url,
                renderer: None,
                context_lost: false,
                controls: None,
                notice: None,
                fullscreen: None,
                render_loop: RenderLoop::default(),
                observer: None,
                subs: Subscriptions::default(),
                canvas_subs: Subscriptions::default(),
                resume_timer: None,
                admission: admission.clone(),
                this: this.clone(),
            })
        });
        let epoch = {
            let mut v = handle.borrow_mut();
            log::info!(
                "[viewer {}] mounting {} ({:?}, touch={})",
                v.id(),
                v.image_url,
                caps.renderer_kind(),
                caps.is_touch_device
            );
            match v.setup() {
                Ok(()) => v.state.begin_renderer_build(),
                Err(e) => {
                    v.fail(ViewerError::Init(e.to_string()));
                    None
                }
            }
        };
        if let Some(epoch) = epoch {
            spawn_local(Self::initialize(
                Rc::downgrade(&handle),
                document.clone(),
                caps,
                config,
                epoch,
            ));
        }
        handle
    }

    fn setup(&mut self) -> anyhow::Result<()> {
        dom::set_style(&self.container, "cursor", self.state.cursor());
        self.controls = Some(Controls::build(
            &self.document,
            &self.container,
            !self.caps.is_touch_device,
            self.this.clone(),
        )?);
        events::wire_pointer_handlers(&mut self.subs, &self.container, self.this.clone());
        if let Some(window) = web::window() {
            events::wire_resize(&mut self.subs, &window, self.this.clone());
        }
        if !self.caps.is_touch_device {
            events::wire_fullscreen_change(&mut self.subs, &self.document, self.this.clone());
            events::wire_escape_key(&mut self.subs, &self.document, self.this.clone());
        }
        self.observer = Some(events::wire_visibility(
            &self.container,
            self.state.config().visibility_threshold,
            self.this.clone(),
        )?);
        Ok(())
    }

    /// One renderer build: create the strategy, then load and upload the image.
    /// Everything lands only if `epoch` is still current when it arrives.
    async fn initialize(
        this: Weak<RefCell<Viewer>>,
        document: web::Document,
        caps: Capabilities,
        config: ViewerConfig,
        epoch: u64,
    ) {
        let created = Renderer::create(&document, &caps, &config).await;
        let Some((url, max_dim)) = Self::with_live(&this, |v| {
            v.install_renderer(epoch, created)
                .map(|max_dim| (v.image_url.clone(), max_dim))
        })
        .flatten() else {
            return;
        };

        let loaded = match texture::load_image(&url).await {
            Ok(img) => texture::decode_panorama(&document, &img, max_dim),
            Err(e) => Err(e),
        };
        // Disposal may have happened while the image was in flight.
        with_viewer(&this, |v| match loaded {
            Ok(pano) => v.set_panorama(epoch, pano),
            Err(e) if v.state.accepts_renderer(epoch) => v.fail(e),
            Err(e) => log::debug!("[viewer {}] stale image result: {}", v.id(), e),
        });
    }

    /// Like `with_viewer`, but hands back a value. `None` if the instance is gone.
    fn with_live<R>(
        this: &Weak<RefCell<Viewer>>,
        f: impl FnOnce(&mut Viewer) -> R,
    ) -> Option<R> {
        let rc = this.upgrade()?;
        let mut v = rc.try_borrow_mut().ok()?;
        if v.is_disposed() {
            return None;
        }
        Some(f(&mut v))
    }

    pub fn id(&self) -> ViewerId {
        self.state.id()
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    pub fn is_disposed(&self) -> bool {
        self.state.is_disposed()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.state.is_fullscreen()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.orientation().is_dragging()
    }

    /// Returns the renderer's texture limit when it was attached.
    fn install_renderer(
        &mut self,
        epoch: u64,
        created: Result<Renderer, ViewerError>,
    ) -> Option<u32> {
        if !self.state.accepts_renderer(epoch) {
            if let Ok(mut stale) = created {
                stale.dispose();
            }
            return None;
        }
        match created {
            Ok(r) => {
                let max_dim = r.max_texture_dim();
                self.attach_renderer(r);
                Some(max_dim)
            }
            Err(e) => {
                self.fail(e);
                None
            }
        }
    }

    fn attach_renderer(&mut self, renderer: Renderer) {
        if let Err(e) = self.container.prepend_with_node_1(renderer.canvas()) {
            log::warn!("[viewer {}] could not attach canvas: {:?}", self.id(), e);
        }
        if renderer.kind() == RendererKind::Accelerated {
            events::wire_context_loss(&mut self.canvas_subs, renderer.canvas(), self.this.clone());
        }
        self.renderer = Some(renderer);
        self.context_lost = false;
        self.resize();
        // A rebuild after context loss finds the loop stopped.
        if self.state.is_active() && !self.render_loop.is_running() {
            self.state.reset_clock();
            self.render_loop.start(self.this.clone());
        }
    }

    fn set_panorama(&mut self, epoch: u64, panorama: Panorama) {
        let Some(max_dim) = self.renderer.as_ref().map(Renderer::max_texture_dim) else {
            return;
        };
        let size = (panorama.width(), panorama.height());
        match self.state.plan_texture_upload(epoch, size, max_dim) {
            TextureUpload::Discard => {
                log::debug!("[viewer {}] dropping stale panorama", self.id());
            }
            TextureUpload::TooLarge => self.fail(ViewerError::InvalidImage(format!(
                "{}x{} exceeds texture limit {}",
                size.0, size.1, max_dim
            ))),
            TextureUpload::Upload => {
                if let Some(r) = &mut self.renderer {
                    r.set_panorama(panorama);
                }
                self.state.mark_texture_ready();
                log::info!("[viewer {}] panorama ready {}x{}", self.id(), size.0, size.1);
            }
        }
    }

    fn fail(&mut self, error: ViewerError) {
        log::error!("[viewer {}] {}", self.id(), error);
        let notice = error.notice();
        if self.state.fail(error) {
            self.notice = overlay::show_notice(&self.document, &self.container, notice);
        }
    }

    fn update_cursor(&self) {
        dom::set_style(&self.container, "cursor", self.state.cursor());
    }

    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    pub fn activate(&mut self) {
        if self.is_disposed() {
            return;
        }
        let id = self.id();
        let evicted = self.admission.borrow_mut().activate(id);
        let running = self.admission.borrow().active_count();
        if let Some(old) = evicted {
            if let Ok(mut o) = old.try_borrow_mut() {
                o.deactivate();
            }
        }
        if self.state.set_active(true) {
            self.render_loop.start(self.this.clone());
            log::debug!("[viewer {}] active ({} running)", id, running);
        }
    }

    pub fn deactivate(&mut self) {
        if self.is_disposed() {
            return;
        }
        self.admission.borrow_mut().deactivate(self.id());
        if self.state.set_active(false) {
            self.render_loop.stop();
            log::debug!("[viewer {}] inactive", self.id());
        }
    }

    pub fn begin_drag(&mut self, kind: PointerKind, x: f64, y: f64) {
        if self.state.begin_drag(kind, x, y, false) {
            self.resume_timer = None;
            self.update_cursor();
        }
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        self.state.drag_to(x, y);
    }

    pub fn end_drag(&mut self) {
        if !self.state.end_drag() {
            return;
        }
        let this = self.this.clone();
        self.resume_timer = Timeout::new(self.state.config().resume_delay_ms, move || {
            with_viewer(&this, |v| v.resume_auto_rotate());
        });
        self.update_cursor();
    }

    fn resume_auto_rotate(&mut self) {
        if self.state.resume_auto_rotate() {
            log::debug!("[viewer {}] auto-rotate resumed", self.id());
        }
    }

    pub fn zoom(&mut self, zoom_in: bool) {
        let fov = if zoom_in {
            self.state.zoom_in()
        } else {
            self.state.zoom_out()
        };
        if let Some(fov) = fov {
            log::debug!("[viewer {}] fov {}", self.id(), fov);
        }
    }

    pub fn resize(&mut self) {
        let (w, h) = dom::client_size(&self.container);
        if self.state.resize(w, h) {
            if let Some(r) = &mut self.renderer {
                r.resize(w, h);
            }
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        if self.is_fullscreen() {
            self.exit_fullscreen();
        } else {
            self.enter_fullscreen();
        }
    }

    pub fn enter_fullscreen(&mut self) {
        if self.caps.is_touch_device || self.is_disposed() || self.fullscreen.is_some() {
            return;
        }
        match FullscreenSession::enter(
            &self.document,
            &self.container,
            self.caps.is_mac_like,
            self.this.clone(),
        ) {
            Ok(session) => {
                self.fullscreen = Some(session);
                self.state.set_fullscreen(true);
                if let Some(c) = &self.controls {
                    c.set_fullscreen(true);
                }
                self.resize();
                log::info!("[viewer {}] fullscreen on", self.id());
            }
            Err(e) => log::warn!("[viewer {}] fullscreen failed: {:?}", self.id(), e),
        }
    }

    pub fn exit_fullscreen(&mut self) {
        let Some(session) = self.fullscreen.take() else {
            return;
        };
        session.exit();
        self.state.set_fullscreen(false);
        if let Some(c) = &self.controls {
            c.set_fullscreen(false);
        }
        self.resize();
        // The browser finishes its own layout transition asynchronously.
        let this = self.this.clone();
        dom::defer(FULLSCREEN_SETTLE_DELAY_MS, move || {
            with_viewer(&this, |v| v.resize());
        });
        log::info!("[viewer {}] fullscreen off", self.id());
    }

    pub fn apply_pseudo_fullscreen(&mut self) {
        if let Some(session) = &mut self.fullscreen {
            session.apply_pseudo();
        }
    }

    pub fn on_platform_fullscreen(&mut self, platform_fullscreen: bool) {
        let sync = match &mut self.fullscreen {
            Some(session) => session.sync(platform_fullscreen),
            None => return,
        };
        match sync {
            PlatformSync::ExitSession => self.exit_fullscreen(),
            PlatformSync::Engaged => self.resize(),
            PlatformSync::Ignore => {}
        }
    }

    pub fn on_context_lost(&mut self) {
        log::warn!("[viewer {}] graphics context lost", self.id());
        self.context_lost = true;
        self.render_loop.stop();
    }

    /// GPU objects made on the lost context stay dead after a restore, so the
    /// whole strategy is rebuilt. This runs inside a listener owned by
    /// `canvas_subs`; the rebuild clears that list, so it is deferred.
    pub fn on_context_restored(&mut self) {
        log::info!("[viewer {}] graphics context restored, rebuilding", self.id());
        let this = self.this.clone();
        dom::defer(0, move || with_viewer(&this, |v| v.rebuild_renderer()));
    }

    fn rebuild_renderer(&mut self) {
        let Some(epoch) = self.state.begin_renderer_build() else {
            return;
        };
        self.canvas_subs.clear();
        if let Some(mut old) = self.renderer.take() {
            old.dispose();
        }
        spawn_local(Self::initialize(
            self.this.clone(),
            self.document.clone(),
            self.caps,
            self.state.config().clone(),
            epoch,
        ));
    }

    /// Idempotent teardown: releases everything this instance created or attached.
    pub fn dispose(&mut self) {
        if !self.state.dispose() {
            return;
        }
        let id = self.id();
        if let Some(session) = self.fullscreen.take() {
            session.exit();
        }
        self.admission.borrow_mut().unregister(id);
        self.render_loop.dispose();
        self.resume_timer = None;
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
        self.subs.clear();
        self.canvas_subs.clear();
        if let Some(controls) = self.controls.take() {
            controls.remove();
        }
        if let Some(mut renderer) = self.renderer.take() {
            renderer.dispose();
        }
        if let Some(notice) = self.notice.take() {
            notice.remove();
        }
        _ = self.container.style().remove_property("cursor");
        log::info!("[viewer {}] disposed", id);
    }
}

impl FrameTarget for Viewer {
    fn render_loop(&mut self) -> &mut RenderLoop {
        &mut self.render_loop
    }

    fn frame(&mut self, now_ms: f64) -> bool {
        let Some(params) = self.state.tick(now_ms) else {
            return false;
        };
        if !self.context_lost {
            if let Some(r) = &mut self.renderer {
                r.render(&params);
            }
        }
        true
    }
}

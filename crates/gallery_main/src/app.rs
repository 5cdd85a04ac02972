//! Application main loop

use anyhow::Result;
use gallery_core::{
    is_supported_image, load_display_list, CommandId, Gallery, GalleryConfig, GalleryEvent,
    GalleryManifest, ImageDescriptor, ImageId,
};
use gallery_ui::{
    components::{tap_follow_up, CarouselView, LightboxView, Slide, SlideTextures, StatusBar, StatusInfo},
    InputHandler, Renderer, Theme,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Longest edge slides are decoded at
const MAX_SLIDE_EDGE: u32 = 2048;

/// Main application state for the event loop
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    egui_ctx: egui::Context,
    egui_state: Option<egui_winit::State>,

    gallery: Gallery,
    manifest: GalleryManifest,
    /// Directory manifest URLs are resolved against
    base_dir: PathBuf,
    /// Image dropped onto the window, shown first
    preferred: Option<ImageDescriptor>,
    slides: SlideTextures,

    input_handler: InputHandler,
    theme: Theme,
    status: StatusInfo,
}

impl App {
    fn new(config: GalleryConfig, manifest: GalleryManifest, base_dir: PathBuf) -> Self {
        let input_handler = InputHandler::new(config.effective_keybindings());
        let theme = Theme::by_name(&config.view.theme).with_accent(config.view.accent_color.as_deref());
        let gallery = Gallery::with_images(config, manifest.preferred.as_ref(), &manifest.images);
        let preferred = manifest.preferred.clone();

        Self {
            window: None,
            renderer: None,
            egui_ctx: egui::Context::default(),
            egui_state: None,

            gallery,
            manifest,
            base_dir,
            preferred,
            slides: SlideTextures::default(),

            input_handler,
            theme,
            status: StatusInfo::default(),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title("Gallery Viewer")
            .with_inner_size(winit::dpi::LogicalSize::new(1024, 900));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let renderer = pollster::block_on(Renderer::new(window.clone()))?;

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        self.theme.apply(&self.egui_ctx);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.egui_state = Some(egui_state);

        self.load_slides();
        Ok(())
    }

    /// Decode every slide of the current display list into textures
    fn load_slides(&mut self) {
        let images = self.gallery.images();
        let decoded = load_display_list(images, &self.base_dir, Some(MAX_SLIDE_EDGE));

        let slides = images
            .iter()
            .zip(decoded)
            .enumerate()
            .map(|(i, (descriptor, result))| {
                let texture = match result {
                    Ok(loaded) => {
                        let color_image = egui::ColorImage::from_rgba_unmultiplied(
                            [loaded.width as usize, loaded.height as usize],
                            &loaded.data,
                        );
                        Some(self.egui_ctx.load_texture(
                            descriptor.key(i),
                            color_image,
                            egui::TextureOptions::LINEAR,
                        ))
                    }
                    Err(e) => {
                        tracing::warn!("Slide {} ({}) unavailable: {}", i, descriptor.url, e);
                        None
                    }
                };
                Slide {
                    texture,
                    alt: descriptor.alt_or("Product Image").to_string(),
                    aspect: descriptor.aspect_ratio(),
                }
            })
            .collect();

        self.slides = SlideTextures::new(slides);
        tracing::info!("Loaded {} slides", self.slides.len());
        self.refresh_status();
    }

    /// Replace the image set and reload textures, keeping `follow` on screen when it survives
    fn set_images(&mut self, follow: Option<ImageId>) {
        if !self
            .gallery
            .set_images(self.preferred.as_ref(), &self.manifest.images)
        {
            return;
        }
        if let Some(id) = follow {
            self.gallery.show_image(&id);
        }
        self.load_slides();
    }

    /// Id of the image the inline carousel shows
    fn current_id(&self) -> Option<ImageId> {
        let index = self.gallery.carousel().index()?;
        self.gallery.images().get(index)?.id.clone()
    }

    fn on_dropped_file(&mut self, path: &Path) {
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
            match GalleryManifest::load(path) {
                Ok(manifest) => {
                    self.preferred = manifest.preferred.clone();
                    self.manifest = manifest;
                    self.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
                    let follow = self.current_id();
                    self.set_images(follow);
                }
                Err(e) => {
                    tracing::error!("Failed to load manifest {:?}: {}", path, e);
                    self.status.message = e.user_message();
                }
            }
        } else if is_supported_image(path) {
            // A dropped image becomes the preferred first slide
            let url = path.to_string_lossy();
            self.preferred = Some(ImageDescriptor::new(&url).with_id(&url));
            self.set_images(Some(ImageId::new(&url)));
        } else {
            tracing::debug!("Ignoring dropped file {:?}", path);
        }
    }

    fn dispatch(&mut self, event: GalleryEvent) {
        let mut response = self.gallery.handle(event);
        if let Some(outcome) = response.outcome {
            tracing::trace!("Gesture ended: {:?}", outcome);
        }
        if let Some(follow_up) = tap_follow_up(&event, &response) {
            response.changed |= self.gallery.handle(follow_up).changed;
        }
        if response.changed {
            self.refresh_status();
        }
    }

    fn refresh_status(&mut self) {
        let snapshot = self.gallery.snapshot();
        let current = snapshot.index;

        self.status.position = StatusInfo::position_of(&snapshot);
        self.status.caption = current
            .and_then(|i| self.slides.get(i))
            .map(|slide| slide.alt.clone())
            .unwrap_or_default();
        self.status.dimensions = current
            .and_then(|i| self.slides.texture(i))
            .map(|texture| {
                let [w, h] = texture.size();
                format!("{}×{}", w, h)
            })
            .unwrap_or_default();
        self.status.message = if snapshot.is_placeholder() {
            "No images".to_string()
        } else {
            String::new()
        };
    }

    fn render(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(egui_state) = self.egui_state.as_mut() else {
            return;
        };

        let raw_input = egui_state.take_egui_input(&window);

        let gallery = &self.gallery;
        let slides = &self.slides;
        let theme = &self.theme;
        let status = &self.status;
        let mut events = Vec::new();

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                StatusBar::ui(ui, status);
            });

            egui::CentralPanel::default().show(ctx, |ui| {
                events.extend(CarouselView::ui(ui, gallery, slides, theme));
            });

            events.extend(LightboxView::show(ctx, gallery, slides, theme));
        });

        for event in events {
            self.dispatch(event);
        }

        if let Some(egui_state) = self.egui_state.as_mut() {
            egui_state.handle_platform_output(&window, full_output.platform_output);
        }

        let primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match renderer.render(
            &primitives,
            &full_output.textures_delta,
            full_output.pixels_per_point,
            self.theme.background,
        ) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(e) => tracing::error!("Surface error: {:?}", e),
        }

        // Keep painting while egui animates slides or the placeholder pulses
        let animating = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero());
        if animating {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to initialize window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Pointer loss ends any drag, whoever consumes the event
        match &event {
            WindowEvent::Focused(false) | WindowEvent::CursorLeft { .. } => {
                self.dispatch(GalleryEvent::PointerCancel);
            }
            WindowEvent::Touch(touch) if touch.phase == TouchPhase::Cancelled => {
                self.dispatch(GalleryEvent::PointerCancel);
            }
            _ => {}
        }

        // Let egui handle the event first
        if let (Some(egui_state), Some(window)) = (&mut self.egui_state, &self.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.consumed {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((size.width, size.height));
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(cmd) = self.input_handler.handle_key(&event) {
                    if cmd.is(CommandId::APP_EXIT) {
                        event_loop.exit();
                        return;
                    }
                    if self.gallery.execute(&cmd) {
                        self.refresh_status();
                    }
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.input_handler.update_modifiers(modifiers.state());
            }

            WindowEvent::DroppedFile(path) => {
                self.on_dropped_file(&path);
            }

            WindowEvent::RedrawRequested => {
                self.render();
                return;
            }

            _ => {}
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run the application
pub fn run(config: GalleryConfig, manifest: GalleryManifest, base_dir: PathBuf) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, manifest, base_dir);
    event_loop.run_app(&mut app)?;

    Ok(())
}

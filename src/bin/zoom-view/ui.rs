//! UI rendering and input mapping for the zoom viewer.

use crate::ZoomViewApp;
use crate::colors;
use crate::constants::{STATUS_BAR_HEIGHT, ZOOM_SPEED};
use eframe::egui;
use std::time::Duration;
use zoom_view::{Size, Vec2};

fn to_vec2(v: egui::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

impl ZoomViewApp {
    /// Handles keyboard shortcuts for zooming and resetting.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let step = self.controller.config().zoom_step;
        let (zoom_in, zoom_out, reset) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Num0),
            )
        });

        if zoom_in {
            self.controller.zoom_in(step);
        }
        if zoom_out {
            self.controller.zoom_out(step);
        }
        if reset {
            self.controller.reset();
        }
    }

    /// Renders the bottom status bar with controls hint and current zoom.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Scroll/Pinch: Zoom | Drag: Pan | Double-click: Toggle zoom | +/-: Zoom | 0: Fit");

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let view = self.controller.view();
                        ui.label(format!(
                            "{:.0}% of image | user zoom {:.2}x",
                            view.effective_scale * 100.0,
                            view.scale
                        ));
                    });
                });
            });
    }

    /// Renders the central panel containing the image view.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(texture_id) = self.texture.as_ref().map(|t| t.id()) else {
                ui.centered_and_justified(|ui| {
                    ui.label("No image.\nRun with a valid --width and --height.");
                });
                return;
            };

            let panel_rect = ui.max_rect();
            self.show_image(ui, texture_id);
            self.show_zoom_controls(ctx, panel_rect);
        });
    }

    /// Renders the floating zoom controls panel.
    fn show_zoom_controls(&mut self, ctx: &egui::Context, panel_rect: egui::Rect) {
        let margin = 12.0;
        let panel_width = 150.0;
        let panel_height = 36.0;

        let anchor_pos = egui::pos2(
            panel_rect.right() - panel_width - margin,
            panel_rect.bottom() - panel_height - margin,
        );

        let step = self.controller.config().zoom_step;
        egui::Area::new(egui::Id::new("zoom_controls"))
            .fixed_pos(anchor_pos)
            .interactable(true)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(ui.style().visuals.window_fill.gamma_multiply(0.95))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            if ui.button("−").on_hover_text("Zoom out (-)").clicked() {
                                self.controller.zoom_out(step);
                            }
                            if ui.button("+").on_hover_text("Zoom in (+)").clicked() {
                                self.controller.zoom_in(step);
                            }
                            if ui.button("Fit").on_hover_text("Reset view (0)").clicked() {
                                self.controller.reset();
                            }
                        });
                    });
            });
    }

    /// Feeds input to the controller, advances animations and draws the image.
    fn show_image(&mut self, ui: &mut egui::Ui, texture_id: egui::TextureId) {
        let (viewport_rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        let viewport_size = viewport_rect.size();
        self.controller
            .set_container_size(Size::new(viewport_size.x, viewport_size.y));

        self.handle_gestures(ui, viewport_rect, &response);

        let dt = ui.input(|i| i.stable_dt);
        if self
            .controller
            .tick(Duration::try_from_secs_f32(dt).unwrap_or_default())
        {
            ui.ctx().request_repaint();
        }

        let view = self.controller.view();
        let displayed = view.displayed_size();
        let image_center = viewport_rect.center() + egui::vec2(view.offset.x, view.offset.y);
        let image_rect = egui::Rect::from_center_size(
            image_center,
            egui::vec2(displayed.width, displayed.height),
        );

        ui.set_clip_rect(viewport_rect);

        ui.painter().image(
            texture_id,
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
        ui.painter().rect_stroke(
            image_rect,
            0.0,
            egui::Stroke::new(1.0, colors::IMAGE_BORDER),
            egui::StrokeKind::Outside,
        );
    }

    /// Maps pointer and touch input onto controller gestures.
    ///
    /// Positions are converted to container-local coordinates first.
    fn handle_gestures(
        &mut self,
        ui: &egui::Ui,
        viewport_rect: egui::Rect,
        response: &egui::Response,
    ) {
        let to_local = |pos: egui::Pos2| to_vec2(pos - viewport_rect.min);

        if response.double_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.controller.on_double_tap(to_local(pos));
            }
            return;
        }

        // Two or more fingers: pinch and pan together
        if let Some(touch) = ui.ctx().multi_touch() {
            self.controller.on_transform(
                to_local(touch.center_pos),
                to_vec2(touch.translation_delta),
                touch.zoom_delta,
            );
            return;
        }

        let hover_pos = ui
            .input(|i| i.pointer.hover_pos())
            .filter(|p| viewport_rect.contains(*p));
        if let Some(hover) = hover_pos {
            let (scroll_delta, pinch_delta) = ui.input(|i| (i.raw_scroll_delta.y, i.zoom_delta()));
            let zoom_ratio = if pinch_delta != 1.0 {
                pinch_delta
            } else if scroll_delta > 0.0 {
                ZOOM_SPEED
            } else if scroll_delta < 0.0 {
                1.0 / ZOOM_SPEED
            } else {
                1.0
            };
            if zoom_ratio != 1.0 {
                self.controller
                    .on_transform(to_local(hover), Vec2::ZERO, zoom_ratio);
            }
        }

        if response.dragged() {
            let pivot = response
                .interact_pointer_pos()
                .map(to_local)
                .unwrap_or_else(|| self.controller.container_center());
            self.controller
                .on_transform(pivot, to_vec2(response.drag_delta()), 1.0);
        }
    }
}

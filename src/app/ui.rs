use super::{Notice, NullPaste, Tab};
use crate::upload::{copy_payload, HistoryViewCache, Uploader};
use eframe::egui::{self, Align2, Color32, RichText};

impl NullPaste {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.state.tab, Tab::Upload, "📤 upload");
                let history_label = format!("🕘 history ({})", self.uploader.history_len());
                ui.selectable_value(&mut self.state.tab, Tab::History, history_label);
                ui.selectable_value(&mut self.state.tab, Tab::Settings, "⚙ settings");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Upload => self.render_upload(ui),
            Tab::History => {
                Self::render_history(ui, &self.uploader, &mut self.state.history_view)
            }
            Tab::Settings => self.render_settings(ui),
        });

        self.render_notice(ctx);
    }

    fn render_upload(&mut self, ui: &mut egui::Ui) {
        let button_height = 40.0;
        let text_height = (ui.available_height() - button_height - 30.0).max(100.0);

        ui.label("paste text to upload here");
        egui::ScrollArea::vertical()
            .max_height(text_height)
            .show(ui, |ui| {
                ui.add_sized(
                    [ui.available_width(), text_height],
                    egui::TextEdit::multiline(&mut self.state.upload_text)
                        .font(egui::TextStyle::Monospace),
                );
            });

        ui.horizontal(|ui| {
            let button = egui::Button::new("upload")
                .min_size(egui::vec2(ui.available_width() - 30.0, button_height));
            if ui.add(button).clicked() {
                self.start_upload();
            }
            if self.uploader.in_flight() > 0 {
                ui.spinner();
            }
        });
    }

    fn render_history(ui: &mut egui::Ui, uploader: &Uploader, cache: &mut HistoryViewCache) {
        let rows = uploader.refresh_history(cache);
        if rows.is_empty() {
            ui.label(
                RichText::new("nothing uploaded yet")
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
            return;
        }

        let mut copied = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, row) in rows.iter().enumerate() {
                ui.push_id(index, |ui| {
                    ui.horizontal(|ui| {
                        ui.monospace(&row.url);
                        if ui.button("copy").clicked() {
                            copied = Some(row.copy_action_id.clone());
                        }
                        if ui.button("open").clicked() {
                            if let Err(e) = open::that(&row.url) {
                                log::warn!("could not open {}: {}", row.url, e);
                            }
                        }
                    });
                });
            }
        });

        if let Some(text) = copied.as_deref().and_then(copy_payload) {
            ui.ctx().output_mut(|o| o.copied_text = text.to_string());
        }
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("settings")
            .num_columns(2)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                ui.label("instance url to upload to:");
                ui.text_edit_singleline(&mut self.state.settings.instance);
                ui.end_row();

                ui.label("expires in");
                ui.horizontal(|ui| {
                    let field = egui::TextEdit::singleline(&mut self.state.expires_text)
                        .desired_width(80.0);
                    if ui.add(field).changed() {
                        self.state.apply_expires_text();
                    }
                    ui.label("hours");
                });
                ui.end_row();

                ui.label("request a hard to guess url:");
                ui.checkbox(&mut self.state.settings.secret, "");
                ui.end_row();
            });
    }

    fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.state.notice else {
            return;
        };
        let title = notice.title();
        let text = notice.text().to_string();
        let color = match notice {
            Notice::Failed(_) => Color32::from_rgb(220, 50, 50),
            Notice::Succeeded(_) => Color32::from_rgb(0, 180, 0),
        };

        let mut close = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.colored_label(color, &text);
                ui.horizontal(|ui| {
                    if ui.button("copy").clicked() {
                        ui.ctx().output_mut(|o| o.copied_text = text.clone());
                        close = true;
                    }
                    if ui.button("close").clicked() {
                        close = true;
                    }
                });
            });

        if close {
            self.dismiss_notice();
        }
    }
}

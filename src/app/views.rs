//! View rendering: control sidebar, banner, device table and log pane
//!
//! Views only read [`UiState`](super::UiState) and return the messages the
//! user produced this frame; the reducer does the rest.

use super::App;
use super::Message;
use crate::constants::APP_NAME;
use crate::theme;
use crate::types::{DisplayState, Mode};
use crate::ui::components::{notice_label, section_header, styled_checkbox, type_badge};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular as icons;

impl App {
    pub(crate) fn render(&mut self, ctx: &egui::Context) -> Vec<Message> {
        let mut out = Vec::new();

        // Left sidebar (must be added BEFORE CentralPanel)
        egui::SidePanel::left("control_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin { left: 16, right: 8, top: 16, bottom: 16 }),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
                    .show(ui, |ui| self.render_sidebar(ui, &mut out));
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| self.render_main(ui, &mut out));

        out
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui, out: &mut Vec<Message>) {
        let state = &self.state;
        let full = egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT);

        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{}  {}", icons::DEVICE_MOBILE, APP_NAME.to_uppercase()))
                    .size(theme::FONT_TITLE)
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_LG);

        // MODE
        theme::section_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                section_header(ui, "MODE");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut wireless = state.mode == Mode::Wireless;
                    if theme::segmented_toggle(ui, "Wireless", "USB", &mut wireless) {
                        out.push(Message::SwitchMode(if wireless {
                            Mode::Wireless
                        } else {
                            Mode::Usb
                        }));
                    }
                });
            });
        });
        ui.add_space(theme::SPACING_MD);

        // DEVICES
        theme::section_frame().show(ui, |ui| {
            section_header(ui, "DEVICES");
            ui.add_space(theme::SPACING_SM);

            let label = if state.pending.listing {
                format!("{}  Listing...", icons::HOURGLASS)
            } else {
                format!("{}  List Devices", icons::ARROWS_CLOCKWISE)
            };
            if ui
                .add_enabled(!state.pending.listing, theme::button_accent(label).min_size(full))
                .clicked()
            {
                out.push(Message::ListDevices);
            }

            ui.columns(2, |cols| {
                let w = egui::vec2(cols[0].available_width(), theme::BUTTON_HEIGHT);
                if cols[0]
                    .add(theme::button(format!("{}  Select All", icons::CHECK_SQUARE)).min_size(w))
                    .clicked()
                {
                    out.push(Message::SelectAll);
                }
                if cols[1]
                    .add(theme::button(format!("{}  Deselect", icons::SQUARE)).min_size(w))
                    .clicked()
                {
                    out.push(Message::DeselectAll);
                }
            });
        });
        ui.add_space(theme::SPACING_MD);

        // WIRELESS / TCP-IP
        let mode = state.mode;
        match mode {
            Mode::Wireless => {
                theme::section_frame().show(ui, |ui| {
                    section_header(ui, "WIRELESS CONNECTION");
                    ui.add_space(theme::SPACING_SM);

                    let input = ui.add(
                        egui::TextEdit::singleline(&mut self.state.ip_input)
                            .hint_text("Device IP (e.g. 192.168.1.100)")
                            .desired_width(f32::INFINITY),
                    );
                    let submitted =
                        input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    let state = &self.state;
                    let connect = ui.add_enabled(
                        !state.pending.connecting,
                        theme::button_accent(format!("{}  Connect", icons::PLUGS_CONNECTED))
                            .min_size(full),
                    );
                    if connect.clicked() || (submitted && !state.pending.connecting) {
                        out.push(Message::ConnectWireless);
                    }
                    if ui
                        .add_enabled(
                            !state.pending.disconnecting,
                            theme::button(format!("{}  Disconnect Selected", icons::PLUGS))
                                .min_size(full),
                        )
                        .clicked()
                    {
                        out.push(Message::DisconnectWireless);
                    }

                    if let Some(notice) = &state.wireless_status {
                        ui.add_space(theme::SPACING_SM);
                        notice_label(ui, notice, false);
                    }
                });
            }
            Mode::Usb => {
                theme::section_frame().show(ui, |ui| {
                    section_header(ui, "TCP/IP");
                    ui.add_space(theme::SPACING_SM);

                    let enabled = state.tcpip_eligible() && !state.pending.enabling_tcpip;
                    if ui
                        .add_enabled(
                            enabled,
                            theme::button_accent(format!("{}  Enable TCP/IP", icons::WIFI_HIGH))
                                .min_size(full),
                        )
                        .on_disabled_hover_text("Select exactly one USB device")
                        .clicked()
                    {
                        out.push(Message::EnableTcpip);
                    }

                    if let Some(notice) = &state.wireless_status {
                        ui.add_space(theme::SPACING_SM);
                        notice_label(ui, notice, false);
                    }
                });
            }
        }
        ui.add_space(theme::SPACING_MD);

        // DISPLAY
        let state = &self.state;
        theme::section_frame().show(ui, |ui| {
            section_header(ui, "DISPLAY");
            ui.add_space(theme::SPACING_SM);
            ui.add_enabled_ui(!state.pending.toggling, |ui| {
                ui.columns(2, |cols| {
                    let w = egui::vec2(cols[0].available_width(), theme::BUTTON_HEIGHT);
                    if cols[0]
                        .add(theme::button_danger(format!("{}  Off", icons::EYE_SLASH)).min_size(w))
                        .clicked()
                    {
                        out.push(Message::ToggleDisplay(DisplayState::Off));
                    }
                    if cols[1]
                        .add(theme::button_accent(format!("{}  On", icons::EYE)).min_size(w))
                        .clicked()
                    {
                        out.push(Message::ToggleDisplay(DisplayState::On));
                    }
                });
            });
        });
    }

    fn render_main(&self, ui: &mut egui::Ui, out: &mut Vec<Message>) {
        let state = &self.state;

        if let Some(banner) = &state.banner {
            notice_label(ui, banner, true);
            ui.add_space(theme::SPACING_SM);
        }
        if let Some(adb_status) = &state.adb_status {
            notice_label(ui, adb_status, false);
        }
        ui.add_space(theme::SPACING_MD);

        // Log pane pinned to the bottom, table takes the rest
        egui::TopBottomPanel::bottom("log_pane")
            .resizable(true)
            .default_height(theme::LOG_PANE_HEIGHT)
            .show_separator_line(false)
            .frame(egui::Frame::new().inner_margin(egui::Margin { left: 0, right: 0, top: 8, bottom: 0 }))
            .show_inside(ui, |ui| self.render_log(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show_inside(ui, |ui| self.render_device_table(ui, out));
    }

    fn render_device_table(&self, ui: &mut egui::Ui, out: &mut Vec<Message>) {
        let rows = &self.state.rows;
        if rows.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new(format!("No {} devices listed", self.state.mode))
                        .color(theme::TEXT_DIM)
                        .size(theme::FONT_BODY),
                );
            });
            return;
        }

        let header = |ui: &mut egui::Ui, text: &str| {
            ui.label(
                egui::RichText::new(text)
                    .color(theme::TEXT_DIM)
                    .size(theme::FONT_SECTION),
            );
        };

        TableBuilder::new(ui)
            .striped(false)
            .resizable(false)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(36.0))
            .column(Column::initial(240.0).at_least(140.0))
            .column(Column::exact(theme::BADGE_WIDTH + 16.0))
            .column(Column::exact(56.0))
            .column(Column::remainder())
            .auto_shrink([false, true])
            .header(24.0, |mut h| {
                h.col(|_| {});
                h.col(|ui| header(ui, "IDENTIFIER"));
                h.col(|ui| header(ui, "TYPE"));
                h.col(|ui| header(ui, "DEX"));
                h.col(|ui| header(ui, "PROPERTIES"));
            })
            .body(|body| {
                body.rows(theme::ROW_HEIGHT, rows.len(), |mut row| {
                    let device_row = &rows[row.index()];
                    let device = &device_row.device;
                    row.set_selected(device_row.checked);

                    let mut toggled = false;
                    row.col(|ui| {
                        if styled_checkbox(ui, device_row.checked, theme::CHECKBOX_SIZE).clicked() {
                            toggled = true;
                        }
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(&device.identifier)
                                .monospace()
                                .color(theme::TEXT_PRIMARY),
                        );
                    });
                    row.col(|ui| type_badge(ui, device.device_type));
                    row.col(|ui| {
                        let (icon, color) = if device.dex_pushed {
                            (icons::CHECK, theme::STATUS_SUCCESS)
                        } else {
                            (icons::MINUS, theme::TEXT_DIM)
                        };
                        ui.label(egui::RichText::new(icon).color(color));
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(&device.properties)
                                .color(theme::TEXT_MUTED)
                                .size(theme::FONT_LABEL),
                        );
                    });

                    if toggled || row.response().clicked() {
                        out.push(Message::ToggleDevice {
                            identifier: device.identifier.clone(),
                            checked: !device_row.checked,
                        });
                    }
                });
            });
    }

    fn render_log(&self, ui: &mut egui::Ui) {
        section_header(ui, "LOG");
        ui.add_space(theme::SPACING_SM);
        theme::log_frame().show(ui, |ui| {
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for line in &self.state.log {
                        let color = if line.is_error {
                            theme::STATUS_ERROR
                        } else {
                            theme::TEXT_SECONDARY
                        };
                        ui.label(
                            egui::RichText::new(line.render())
                                .monospace()
                                .size(theme::FONT_MONO)
                                .color(color),
                        );
                    }
                });
        });
    }
}

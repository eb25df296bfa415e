use std::{sync::Arc, time::Duration};

use eframe::egui;
use refresh_core::{ContinuousClock, RefreshableFeature, RefreshableState, Settings, Store};
use tokio::runtime::Handle;

use crate::controller::{events::UiIntent, orchestration::ScreenController};
use crate::ui::{
    pull::PullGesture,
    rows::{visible_rows, Row},
};

const ACTIVE_REPAINT_INTERVAL: Duration = Duration::from_millis(16);
const IDLE_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct RefreshableApp {
    controller: ScreenController,
    pull: PullGesture,
}

impl RefreshableApp {
    pub fn new(cc: &eframe::CreationContext<'_>, runtime: Handle, settings: &Settings) -> Self {
        let repaint_ctx = cc.egui_ctx.clone();
        let feature =
            RefreshableFeature::new(Arc::new(ContinuousClock), settings.refresh_duration());
        let store = Store::new(
            RefreshableState::with_items(settings.items.clone()),
            feature,
            runtime,
        )
        .with_notifier(move || repaint_ctx.request_repaint());

        Self {
            controller: ScreenController::new(store),
            pull: PullGesture::new(settings.pull_threshold_px),
        }
    }

    fn show_refresh_indicator(&self, ui: &mut egui::Ui) {
        if self.controller.is_refresh_pending() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Refreshing...");
            });
        } else if self.pull.is_active() {
            let label = if self.pull.is_armed() {
                "Release to refresh"
            } else {
                "Pull to refresh"
            };
            ui.add(egui::ProgressBar::new(self.pull.progress()).text(label));
        }
    }

    fn show_list(&mut self, ui: &mut egui::Ui, intents: &mut Vec<UiIntent>) {
        let output = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in visible_rows(self.controller.state()) {
                    match row {
                        Row::CancelButton => {
                            if ui.button("Cancel").clicked() {
                                intents.push(UiIntent::CancelTapped);
                            }
                        }
                        Row::Item(text) => {
                            ui.label(text);
                        }
                    }
                    ui.separator();
                }
            });

        let at_top = output.state.offset.y <= 0.0;
        let list_rect = output.inner_rect;
        let (held, delta_y, over_list) = ui.input(|input| {
            (
                input.pointer.primary_down(),
                input.pointer.delta().y,
                input
                    .pointer
                    .interact_pos()
                    .is_some_and(|pos| list_rect.contains(pos)),
            )
        });

        if held && (over_list || self.pull.is_active()) {
            self.pull.drag(delta_y, at_top);
        } else if !held && self.pull.release() {
            intents.push(UiIntent::PullReleased);
        }
    }
}

impl eframe::App for RefreshableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.sync();

        let mut intents = Vec::new();
        if ctx.input(|input| input.key_pressed(egui::Key::F5)) {
            intents.push(UiIntent::RefreshShortcut);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Refreshable");
            self.show_refresh_indicator(ui);
            self.show_list(ui, &mut intents);
        });

        for intent in intents {
            self.controller.apply(intent);
        }

        if self.controller.is_refresh_pending() || self.pull.is_active() {
            ctx.request_repaint_after(ACTIVE_REPAINT_INTERVAL);
        } else {
            ctx.request_repaint_after(IDLE_REPAINT_INTERVAL);
        }
    }
}

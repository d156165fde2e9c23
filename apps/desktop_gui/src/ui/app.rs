//! App shell: central workspace panel plus the run-history side panel.

use chrono::{Local, TimeZone};
use eframe::egui;
use swarm_core::{Role, SwarmSession};

use crate::clipboard;
use crate::ui::theme;

/// Desktop shell owning the session state and rendering it each frame.
#[derive(Default)]
pub struct ShowcaseApp {
    session: SwarmSession,
}

impl ShowcaseApp {
    pub fn new() -> Self {
        Self::default()
    }

    fn workspace_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Genius Swarm Showcase");
        ui.small(
            egui::RichText::new(
                "Micro-agent playground. Paste an idea. Run a role. Hit Genius Remix.",
            )
            .weak(),
        );
        ui.add_space(theme::SECTION_GAP);

        ui.add(
            egui::TextEdit::multiline(self.session.input_mut())
                .id_salt("idea_input")
                .hint_text(
                    "Type a short idea, e.g. 'email that schedules meetings without back-and-forth'",
                )
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(theme::SECTION_GAP);
        self.action_row(ui);
        ui.add_space(theme::SECTION_GAP);
        self.output_block(ui);
    }

    fn action_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for role in Role::SIMPLE {
                if ui
                    .add(theme::action_button(role.label(), theme::ROLE_FILL))
                    .clicked()
                {
                    self.session.run(role);
                }
            }
            if ui
                .add(theme::action_button("Assessor", theme::ASSESSOR_FILL))
                .clicked()
            {
                self.session.run(Role::Assessor);
            }
            if ui
                .add(theme::action_button("Genius Remix", theme::REMIX_FILL))
                .clicked()
            {
                self.session.run(Role::GeniusRemix);
            }
        });
    }

    fn output_block(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Output").small().weak());
        egui::Frame::NONE
            .fill(theme::OUTPUT_BG)
            .corner_radius(6.0)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                egui::ScrollArea::vertical()
                    .id_salt("output_scroll")
                    .max_height(theme::OUTPUT_MAX_HEIGHT)
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(self.session.output())
                                .monospace()
                                .color(theme::OUTPUT_TEXT),
                        );
                    });
            });

        ui.add_space(theme::SECTION_GAP);
        ui.horizontal(|ui| {
            if ui
                .add(theme::action_button("Copy", theme::COPY_FILL))
                .clicked()
            {
                // Best-effort offer; the result is ignorable by contract.
                if let Err(err) = clipboard::copy_text(self.session.output()) {
                    tracing::debug!(error = %err, "clipboard copy failed");
                }
            }
            if ui
                .add(theme::action_button("Clear", theme::CLEAR_FILL))
                .clicked()
            {
                self.session.clear();
            }
        });
    }

    fn history_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("History");
        ui.add_space(theme::SECTION_GAP);

        let tip_reserve = 48.0;
        if self.session.history().is_empty() {
            ui.label(egui::RichText::new("No runs yet.").weak());
            ui.add_space((ui.available_height() - tip_reserve).max(0.0));
        } else {
            egui::ScrollArea::vertical()
                .id_salt("history_scroll")
                .max_height((ui.available_height() - tip_reserve).max(0.0))
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for entry in self.session.history().entries() {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(
                                egui::RichText::new(entry.role.label()).strong().small(),
                            );
                            ui.label(
                                egui::RichText::new(format_run_time(entry.run_at_ms))
                                    .weak()
                                    .small(),
                            );
                            ui.add_space(2.0);
                            ui.label(egui::RichText::new(&entry.result).small());
                        });
                        ui.add_space(4.0);
                    }
                });
        }

        ui.separator();
        ui.small(
            egui::RichText::new(
                "Tip: Use \"Genius Remix\" to generate the short blurb and a ready-to-use commit message.",
            )
            .weak(),
        );
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("history_panel")
            .default_width(theme::HISTORY_PANEL_WIDTH)
            .show(ctx, |ui| self.history_panel(ui));
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.small(
                egui::RichText::new(
                    "Small, local, deterministic. Replace the canned roles with real calls to scale.",
                )
                .weak(),
            );
        });
        egui::CentralPanel::default().show(ctx, |ui| self.workspace_panel(ui));
    }
}

/// Wall-clock rendering for history entries; empty when the stamp does not
/// map to a local time.
fn format_run_time(run_at_ms: i64) -> String {
    Local
        .timestamp_millis_opt(run_at_ms)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::format_run_time;

    #[test]
    fn run_time_renders_wall_clock_fields() {
        let rendered = format_run_time(1_700_000_000_000);
        assert_eq!(rendered.len(), 19);
        assert!(rendered.contains(':'));
    }

    #[test]
    fn run_time_is_empty_for_unrepresentable_stamps() {
        assert_eq!(format_run_time(i64::MAX), "");
    }
}

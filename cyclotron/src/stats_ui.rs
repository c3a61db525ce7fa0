//! Stats overlay
//!
//! A fixed, opaque panel listing the particle's physics readouts. The panel
//! is stateless: every value is read fresh from the simulation each frame.

use egui::{Color32, Context, RichText};

use crate::physics::{Particle, C};

/// Draw the stats panel along the left edge of the window
pub fn draw_stats_panel(ctx: &Context, particle: &Particle, elapsed: f64, fps: f64) {
    egui::SidePanel::left("stats_panel")
        .resizable(false)
        .exact_width(300.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("STATS").color(Color32::WHITE).strong());
            });
            ui.separator();

            egui::Grid::new("stats_grid")
                .num_columns(2)
                .spacing([10.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    stat_row(ui, "FPS", format!("{:.2}", fps));
                    stat_row(ui, "C", format!("{:.2e} m/s", C));
                    stat_row(ui, "Mass", format!("{} kg", particle.mass));
                    stat_row(ui, "Velocity", format!("{:.2e} m/s", particle.velocity));
                    stat_row(
                        ui,
                        "Speed of light",
                        format!("{:.5}%", particle.light_speed_fraction() * 100.0),
                    );
                    stat_row(
                        ui,
                        "Meters travelled",
                        format!("{:.0e} m", particle.meters_travelled(elapsed)),
                    );
                    stat_row(ui, "Time elapsed", format!("{:.3} s", elapsed));
                    stat_row(
                        ui,
                        "Collision energy",
                        format!("{:.2e} J", particle.kinetic_energy()),
                    );
                    stat_row(
                        ui,
                        "Collision force",
                        format!("{:.2e} N", particle.centripetal_force()),
                    );
                    stat_row(
                        ui,
                        "Object energy",
                        format!("{:.2e} J", particle.rest_energy()),
                    );
                });

            ui.add_space(6.0);
            ui.label(
                RichText::new("100% = very close to 100%")
                    .small()
                    .italics()
                    .color(Color32::GRAY),
            );
        });
}

fn stat_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(RichText::new(label).color(Color32::LIGHT_GREEN));
    ui.label(RichText::new(value).monospace().color(Color32::WHITE));
    ui.end_row();
}

use std::time::Instant;

use eframe::egui;

use crate::sim::{ElapsedTime, World, compute_elapsed_time};

pub struct InfoPanel {
    pub last_update: Instant,
    pub frame_rates: [f64; 30],
    pub frame_rate_index: usize,

    pub last_time: ElapsedTime,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_rates: [0.0; 30],
            frame_rate_index: 0,

            last_time: ElapsedTime::default(),
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, world: &World, ui_tick: u32) {
        let upd_time = Instant::now();
        let elapsed = upd_time.duration_since(self.last_update);
        self.last_update = upd_time;

        if elapsed.as_secs_f64() > 0.0 {
            self.frame_rates[self.frame_rate_index] = 1.0 / elapsed.as_secs_f64();
            self.frame_rate_index = (self.frame_rate_index + 1) % self.frame_rates.len();
        }
        let avg_frame_rate = self.frame_rates.iter().sum::<f64>() / self.frame_rates.len() as f64;

        if ui_tick % 10 == 0 {
            self.last_time = compute_elapsed_time(world.time(), world.ticks());
        }

        ui.label(format!("Bodies: {}", world.len()));
        ui.label(format!("Simulated time: {}", self.last_time));
        ui.label(format!("Frame rate: {avg_frame_rate:.0} fps"));

        let momentum = world.total_momentum();
        ui.label(format!(
            "Total momentum: ({:.1}, {:.1}, {:.1})",
            momentum.x, momentum.y, momentum.z
        ));
    }
}

use eframe::egui::{self, Color32, Key, MouseWheelUnit, Pos2, Sense, Slider, Stroke};
use log::info;

use crate::{
    camera::{CAMERA_PRESETS, Camera},
    parameters::{
        GRAVITY_RANGE, NEW_PLANET_ANGLE_RANGE, NEW_PLANET_DISTANCE_RANGE, NEW_PLANET_RADIUS_RANGE,
        Parameters, TIME_SCALE_RANGE,
    },
    sim::World,
};

mod info;

/// Zoom per scrolled point; line and page scrolls zoom one unit per step.
const SCROLL_SENSITIVITY: f32 = 0.02;
const BACKGROUND: Color32 = Color32::from_rgb(0, 0, 13);
const SUN_COLOR: Color32 = Color32::from_rgb(255, 190, 60);
const MIN_CIRCLE_SIZE: f32 = 1.5;

/// Fires once per press, not while held.
#[derive(Debug, Default, Clone)]
pub struct KeyTrigger {
    pressed: bool,
    trigger: bool,
}

impl KeyTrigger {
    pub fn event(&mut self, is_pressed: bool) {
        match (self.pressed, is_pressed) {
            (true, true) => (),
            (true, false) => self.pressed = false,
            (false, true) => {
                self.pressed = true;
                self.trigger = true;
            }
            (false, false) => (),
        }
    }

    pub fn get_trigger(&mut self) -> bool {
        let t = self.trigger;
        self.trigger = false;
        t
    }
}

#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    pub space: KeyTrigger,
    pub r: KeyTrigger,
    pub p: KeyTrigger,
}

pub struct OrreryApp {
    world: World,
    params: Parameters,
    camera: Camera,
    keyboard_state: KeyboardState,
    tick: u32,
    info_panel: info::InfoPanel,
}

impl OrreryApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_world(World::new())
    }

    pub fn with_world(world: World) -> Self {
        Self {
            world,
            params: Parameters::default(),
            camera: Camera::new(1280.0, 720.0),
            keyboard_state: KeyboardState::default(),
            tick: 0,
            info_panel: info::InfoPanel::new(),
        }
    }

    fn read_keys(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            for evt in &i.events {
                if let egui::Event::Key { key, pressed, .. } = evt {
                    match key {
                        Key::Space => self.keyboard_state.space.event(*pressed),
                        Key::R => self.keyboard_state.r.event(*pressed),
                        Key::P => self.keyboard_state.p.event(*pressed),
                        _ => (),
                    }
                }
            }
        });

        if self.keyboard_state.space.get_trigger() {
            self.reset();
        }
        if self.keyboard_state.r.get_trigger() {
            self.world.add_random_body();
        }
        if self.keyboard_state.p.get_trigger() {
            self.params.paused = !self.params.paused;
        }
    }

    fn reset(&mut self) {
        info!("Resetting simulation");
        self.world.reset();
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Simulation");
        ui.add(Slider::new(&mut self.params.gravity_strength, GRAVITY_RANGE).text("Gravity"));
        ui.add(Slider::new(&mut self.params.time_scale, TIME_SCALE_RANGE).text("Time scale"));
        ui.checkbox(&mut self.params.paused, "Paused");

        ui.horizontal(|ui| {
            if ui.button("Add random planet").clicked() {
                self.world.add_random_body();
            }
            if ui.button("Reset").clicked() {
                self.reset();
            }
        });

        ui.separator();
        ui.heading("Custom planet");
        let planet = &mut self.params.new_planet;
        ui.add(Slider::new(&mut planet.distance, NEW_PLANET_DISTANCE_RANGE).text("Distance"));
        ui.add(Slider::new(&mut planet.angle, NEW_PLANET_ANGLE_RANGE).text("Angle"));
        ui.add(Slider::new(&mut planet.radius, NEW_PLANET_RADIUS_RANGE).text("Radius"));
        ui.horizontal(|ui| {
            ui.label("Color");
            ui.color_edit_button_rgba_unmultiplied(&mut planet.color);
        });
        if ui.button("Add custom planet").clicked() {
            self.world.add_body_with_params(self.params.new_planet);
        }

        ui.separator();
        ui.heading("Camera");
        ui.horizontal_wrapped(|ui| {
            for preset in &CAMERA_PRESETS {
                if ui.button(preset.name).clicked() {
                    self.camera.apply_preset(preset);
                }
            }
        });

        ui.separator();
        self.info_panel.render(ui, &self.world, self.tick);
    }

    fn scene(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let rect = response.rect;

        if response.dragged() {
            let delta = response.drag_delta();
            self.camera.drag(delta.x, delta.y);
        }
        if response.hovered() {
            let scroll: f32 = ui.input(|i| {
                i.events
                    .iter()
                    .filter_map(|evt| match evt {
                        egui::Event::MouseWheel { unit, delta, .. } => Some(match unit {
                            MouseWheelUnit::Point => delta.y * SCROLL_SENSITIVITY,
                            MouseWheelUnit::Line | MouseWheelUnit::Page => delta.y,
                        }),
                        _ => None,
                    })
                    .sum()
            });
            self.camera.zoom(scroll);
        }
        self.camera.resize(rect.width(), rect.height());

        painter.rect_filled(rect, 0.0, BACKGROUND);

        let mut projected: Vec<_> = self
            .world
            .instances()
            .into_iter()
            .filter_map(|inst| self.camera.project(&inst).map(|p| (inst, p)))
            .collect();
        // Far bodies first so near ones paint over them
        projected.sort_by(|a, b| b.1.depth.total_cmp(&a.1.depth));

        let half_h = rect.height() / 2.0;
        for (inst, p) in projected {
            let center = Pos2::new(
                rect.center().x + p.ndc.x * rect.width() / 2.0,
                rect.center().y - p.ndc.y * half_h,
            );
            let radius = (p.radius * half_h).max(MIN_CIRCLE_SIZE);
            if inst.is_dominant() {
                painter.circle_filled(center, radius, SUN_COLOR);
            } else {
                let [r, g, b, a] = inst.color.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8);
                painter.circle(
                    center,
                    radius,
                    Color32::from_rgba_unmultiplied(r, g, b, a),
                    Stroke::NONE,
                );
            }
        }
    }
}

impl eframe::App for OrreryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick = self.tick.wrapping_add(1);
        self.read_keys(ctx);

        let frame_delta = ctx.input(|i| i.stable_dt);
        self.params.clamp();
        let delta = self.params.scaled_delta(frame_delta);
        // Runs even with a zero delta so new overlaps are separated while paused.
        self.world.step(delta, self.params.gravity_strength);

        egui::SidePanel::right("controls")
            .default_width(280.0)
            .show(ctx, |ui| self.controls(ui));
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.scene(ui));

        ctx.request_repaint();
    }
}

use eframe::egui;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use n_queens_visualizer::config;
use n_queens_visualizer::theme::Theme;
use n_queens_visualizer::{Phase, Playback};

const QUEEN: &str = "♛";

struct Particle {
    pos: egui::Pos2,
    vel: egui::Vec2,
    color: egui::Color32,
    life: f32, // 1.0 down to 0.0
    size: f32,
}

pub struct NQueensApp {
    playback: Playback,
    last_update: Instant,
    theme: Theme,
    show_threats: bool,
    particles: Vec<Particle>,
}

impl Default for NQueensApp {
    fn default() -> Self {
        Self {
            playback: Playback::default(),
            last_update: Instant::now(),
            theme: Theme::default(),
            show_threats: false,
            particles: Vec::new(),
        }
    }
}

impl NQueensApp {
    fn spawn_particles(&mut self, pos: egui::Pos2, color: egui::Color32) {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..30 {
            let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed: f32 = rng.gen_range(100.0..500.0);
            self.particles.push(Particle {
                pos,
                vel: egui::vec2(angle.cos() * speed, angle.sin() * speed - 200.0),
                color,
                life: 1.0,
                size: rng.gen_range(3.0..7.0),
            });
        }
    }

    fn size_controls(&mut self, ui: &mut egui::Ui) {
        let idle = self.playback.phase() == Phase::Idle || self.playback.phase().is_finished();
        ui.horizontal(|ui| {
            ui.label(format!("Board Size ({}-{}):", config::MIN_N, config::MAX_N));
            let n = self.playback.n();
            if ui
                .add_enabled(idle && n > config::MIN_N, egui::Button::new("-"))
                .clicked()
            {
                self.playback.set_n(n - 1);
            }
            ui.label(
                egui::RichText::new(n.to_string())
                    .strong()
                    .color(self.theme.accent_color),
            );
            if ui
                .add_enabled(idle && n < config::MAX_N, egui::Button::new("+"))
                .clicked()
            {
                self.playback.set_n(n + 1);
            }
        });
    }

    fn playback_controls(&mut self, ui: &mut egui::Ui, btn_size: egui::Vec2) {
        let phase = self.playback.phase();
        ui.horizontal_wrapped(|ui| {
            if ui.add_sized(btn_size, egui::Button::new("Start")).clicked() {
                self.playback.start();
                self.last_update = Instant::now();
            }
            if ui.add_sized(btn_size, egui::Button::new("Reset")).clicked() {
                self.playback.reset();
            }
            let pause_label = if phase == Phase::Paused { "Play" } else { "Pause" };
            let can_pause = matches!(phase, Phase::Running | Phase::Paused);
            if ui
                .add_enabled_ui(can_pause, |ui| {
                    ui.add_sized(btn_size, egui::Button::new(pause_label))
                })
                .inner
                .clicked()
            {
                self.playback.toggle_pause();
                self.last_update = Instant::now();
            }
            if ui
                .add_enabled_ui(phase == Phase::Paused, |ui| {
                    ui.add_sized(btn_size, egui::Button::new("Step"))
                })
                .inner
                .clicked()
            {
                self.playback.step_forward();
            }
        });

        let mut delay = self.playback.delay();
        if ui
            .add(egui::Slider::new(&mut delay, config::MIN_DELAY..=config::MAX_DELAY).text("Delay (s)"))
            .changed()
        {
            self.playback.set_delay(delay);
        }
    }

    fn status(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Status")
                .strong()
                .color(self.theme.text_color),
        );
        ui.separator();
        ui.label(egui::RichText::new(self.playback.status()).monospace());
        ui.label(format!("Steps: {}", self.playback.steps_taken()));
    }

    fn draw_board(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, is_mobile: bool) {
        let available_rect = ui.available_rect_before_wrap();
        let margin = if is_mobile { 10.0 } else { 60.0 };
        let size = (available_rect.height() - margin)
            .min(available_rect.width() - margin)
            .max(0.0);
        let board_rect = egui::Rect::from_center_size(available_rect.center(), egui::vec2(size, size));
        let response = ui.allocate_rect(board_rect, egui::Sense::click());

        let n = self.playback.n();
        let cell_size = size / n as f32;
        let cell_center = |row: usize, col: usize| {
            egui::pos2(
                board_rect.min.x + (col as f32 + 0.5) * cell_size,
                board_rect.min.y + (row as f32 + 0.5) * cell_size,
            )
        };

        // Only the first row can be locked, and only before a search starts.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let row = ((pos.y - board_rect.min.y) / cell_size) as usize;
                let col = ((pos.x - board_rect.min.x) / cell_size) as usize;
                if row == 0 {
                    self.playback.toggle_lock(col);
                }
            }
        }

        let board = self.playback.board();
        let highlights = self.playback.highlights();
        let lock = self.playback.first_row_lock();
        let painter = ui.painter();

        // Draw background shadow/border
        painter.rect_filled(
            board_rect.expand(5.0),
            5.0,
            self.theme.text_color.linear_multiply(0.2),
        );

        for row in 0..n {
            for col in 0..n {
                let cell_rect = egui::Rect::from_center_size(
                    cell_center(row, col),
                    egui::vec2(cell_size, cell_size),
                );

                let color = if let Some(mark) = highlights.get(row, col) {
                    self.theme.mark_color(mark)
                } else if row == 0 && lock == Some(col) {
                    self.theme.locked
                } else if (row + col) % 2 == 0 {
                    self.theme.board_light
                } else {
                    self.theme.board_dark
                };
                painter.rect_filled(cell_rect, 0.0, color);

                if self.show_threats && board.threatened(row, col) {
                    painter.rect_filled(
                        cell_rect.shrink(2.0),
                        2.0,
                        egui::Color32::from_rgba_unmultiplied(255, 0, 0, 40),
                    );
                }

                let placed = board.get(row) == Some(col);
                // Ghost queen on the locked square until row 0 is placed.
                let ghost = row == 0 && lock == Some(col) && board.get(0).is_none();
                if placed || ghost {
                    let alpha = if ghost {
                        0.5
                    } else {
                        ctx.animate_bool(egui::Id::new((row, col)), true)
                    };
                    painter.text(
                        cell_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        QUEEN,
                        egui::FontId::proportional(cell_size * 0.7),
                        self.theme.queen_color.linear_multiply(alpha),
                    );
                }
            }
        }

        // Draw conflict line on top
        if let Some((from, to)) = highlights.conflict_line {
            painter.line_segment(
                [cell_center(from.row, from.col), cell_center(to.row, to.col)],
                egui::Stroke::new(4.0, self.theme.conflict_line),
            );
        }

        // Draw Particles
        for p in &self.particles {
            painter.circle_filled(p.pos, p.size, p.color.linear_multiply(p.life));
        }

        // Draw Coordinates
        for i in 0..n {
            let font_id = egui::FontId::proportional(cell_size * 0.15);

            // Columns (bottom)
            painter.text(
                egui::pos2(cell_center(0, i).x, board_rect.max.y + 10.0),
                egui::Align2::CENTER_TOP,
                i.to_string(),
                font_id.clone(),
                self.theme.text_color,
            );

            // Rows (left)
            painter.text(
                egui::pos2(board_rect.min.x - 10.0, cell_center(i, 0).y),
                egui::Align2::RIGHT_CENTER,
                i.to_string(),
                font_id,
                self.theme.text_color,
            );
        }
    }
}

impl eframe::App for NQueensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- Animation Update ---
        let dt = ctx.input(|i| i.stable_dt);
        self.particles.retain_mut(|p| {
            p.pos += p.vel * dt;
            p.vel.y += 800.0 * dt; // Gravity
            p.life -= dt * 1.5;
            p.life > 0.0
        });

        // --- Playback ---
        let before = self.playback.phase();
        if self.playback.tick(self.last_update.elapsed()) {
            self.last_update = Instant::now();
        }
        if before != Phase::Solved && self.playback.phase() == Phase::Solved {
            let center = ctx.screen_rect().center();
            self.spawn_particles(center, self.theme.accent_color);
        }
        if self.playback.phase() == Phase::Running || !self.particles.is_empty() {
            ctx.request_repaint();
        }

        // Define a custom frame for panels
        let panel_frame = egui::Frame::none()
            .fill(self.theme.panel_background)
            .inner_margin(12.0)
            .rounding(10.0)
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(20)));

        // --- Responsive Layout Detection ---
        let is_mobile = ctx.screen_rect().width() < config::MOBILE_BREAKPOINT;

        if is_mobile {
            egui::TopBottomPanel::top("mobile_top")
                .frame(panel_frame.inner_margin(egui::Margin::symmetric(10.0, 5.0)))
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{QUEEN} N-Queens"))
                                .strong()
                                .color(self.theme.accent_color),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(self.playback.status()).small());
                        });
                    });
                });

            egui::TopBottomPanel::bottom("mobile_bottom")
                .frame(panel_frame.inner_margin(egui::Margin::symmetric(15.0, 10.0)))
                .show(ctx, |ui| {
                    ui.vertical(|ui| {
                        self.size_controls(ui);
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            ui.checkbox(&mut self.show_threats, "Threats");
                            if ui.button("Theme").clicked() {
                                self.theme = self.theme.next();
                            }
                        });
                        ui.add_space(8.0);
                        let b_size = egui::vec2(ui.available_width() / 4.0 - 8.0, 45.0);
                        self.playback_controls(ui, b_size);
                    });
                });
        } else {
            egui::SidePanel::right("controls")
                .frame(panel_frame)
                .min_width(320.0)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(8.0);
                            ui.label(
                                egui::RichText::new(format!("{QUEEN} N-Queens"))
                                    .size(24.0)
                                    .strong()
                                    .color(self.theme.text_color),
                            );
                        });
                        ui.add_space(20.0);
                        ui.label(
                            egui::RichText::new("Configuration")
                                .strong()
                                .color(self.theme.text_color),
                        );
                        ui.separator();
                        self.size_controls(ui);
                        ui.label("Click a square in row 0 to lock the starting column.");

                        ui.add_space(15.0);
                        ui.label(
                            egui::RichText::new("Controls")
                                .strong()
                                .color(self.theme.text_color),
                        );
                        ui.separator();
                        self.playback_controls(ui, egui::vec2(64.0, 36.0));

                        ui.add_space(10.0);
                        ui.checkbox(&mut self.show_threats, "Show Threatened Squares");

                        ui.add_space(10.0);
                        ui.label("Theme:");
                        egui::ComboBox::from_id_salt("theme_picker")
                            .selected_text(self.theme.name)
                            .show_ui(ui, |ui| {
                                for preset in Theme::presets() {
                                    ui.selectable_value(&mut self.theme, preset.clone(), preset.name);
                                }
                            });

                        ui.add_space(20.0);
                        self.status(ui);
                    });
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.background))
            .show(ctx, |ui| self.draw_board(ui, ctx, is_mobile));
    }
}

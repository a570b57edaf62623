use common::games::tictactoe::Difficulty;

use crate::colors;

pub struct DifficultyMenu;

impl DifficultyMenu {
    const ENTRY_HEIGHT: f32 = 50.0;
    const RULE_MARGIN: f32 = 50.0;

    pub fn render(ui: &mut egui::Ui, last_difficulty: Option<Difficulty>) -> Option<Difficulty> {
        let mut selected = None;

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(egui::RichText::new("Tic Tac Toe AI").color(colors::FOREGROUND));
            ui.label(egui::RichText::new("Choose difficulty level").color(colors::FOREGROUND));
            ui.add_space(20.0);

            Self::rule(ui);
            for (difficulty, color) in [
                (Difficulty::Easy, colors::EASY),
                (Difficulty::Hard, colors::HARD),
            ] {
                let mut text = egui::RichText::new(difficulty.to_string()).color(color).size(24.0);
                if last_difficulty == Some(difficulty) {
                    text = text.underline();
                }
                let button = egui::Button::new(text)
                    .frame(false)
                    .min_size(egui::vec2(ui.available_width(), Self::ENTRY_HEIGHT));
                if ui.add(button).clicked() {
                    selected = Some(difficulty);
                }
                Self::rule(ui);
            }

            ui.add_space(10.0);
            ui.label(egui::RichText::new("Press R at any time to restart").color(colors::FOREGROUND).small());
        });

        selected
    }

    fn rule(ui: &mut egui::Ui) {
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 2.0), egui::Sense::hover());
        ui.painter().line_segment(
            [
                egui::pos2(rect.left() + Self::RULE_MARGIN, rect.center().y),
                egui::pos2(rect.right() - Self::RULE_MARGIN, rect.center().y),
            ],
            egui::Stroke::new(2.0, colors::FOREGROUND),
        );
    }
}

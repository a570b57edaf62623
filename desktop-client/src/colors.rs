use common::games::tictactoe::Outcome;

pub const BACKGROUND: egui::Color32 = egui::Color32::BLACK;
pub const FOREGROUND: egui::Color32 = egui::Color32::WHITE;
pub const EASY: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);
pub const HARD: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);

pub fn outcome_color(outcome: Outcome) -> egui::Color32 {
    match outcome {
        Outcome::HumanWin => egui::Color32::from_rgb(0, 255, 0),
        Outcome::AiWin => egui::Color32::from_rgb(255, 0, 0),
        Outcome::Draw => egui::Color32::from_rgb(128, 128, 128),
    }
}

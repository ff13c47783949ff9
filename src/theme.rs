use eframe::egui;

use crate::playback::Mark;

#[derive(Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: egui::Color32,
    pub panel_background: egui::Color32,
    pub text_color: egui::Color32,
    pub accent_color: egui::Color32,
    pub board_light: egui::Color32,
    pub board_dark: egui::Color32,
    pub queen_color: egui::Color32,

    // Step highlights
    pub current: egui::Color32,
    pub safe: egui::Color32,
    pub conflict: egui::Color32,
    pub backtrack: egui::Color32,
    pub locked: egui::Color32,
    pub conflict_line: egui::Color32,
}

impl Theme {
    pub fn presets() -> Vec<Self> {
        vec![
            Self {
                name: "Slate",
                background: egui::Color32::from_rgb(51, 51, 51),
                panel_background: egui::Color32::from_rgb(240, 240, 240),
                text_color: egui::Color32::from_rgb(44, 62, 80),
                accent_color: egui::Color32::from_rgb(102, 187, 106),
                board_light: egui::Color32::from_rgb(234, 238, 242),
                board_dark: egui::Color32::from_rgb(176, 190, 197),
                queen_color: egui::Color32::from_rgb(44, 62, 80),
                current: egui::Color32::from_rgb(79, 195, 247),
                safe: egui::Color32::from_rgb(165, 214, 167),
                conflict: egui::Color32::from_rgb(239, 154, 154),
                backtrack: egui::Color32::from_rgb(206, 147, 216),
                locked: egui::Color32::from_rgb(255, 183, 77),
                conflict_line: egui::Color32::from_rgb(211, 47, 47),
            },
            Self {
                name: "Sleek Dark",
                background: egui::Color32::from_rgb(15, 23, 42),
                panel_background: egui::Color32::from_rgb(30, 41, 59),
                text_color: egui::Color32::from_rgb(226, 232, 240),
                accent_color: egui::Color32::from_rgb(99, 102, 241),
                board_light: egui::Color32::from_rgb(241, 245, 249),
                board_dark: egui::Color32::from_rgb(100, 116, 139),
                queen_color: egui::Color32::from_rgb(15, 23, 42),
                current: egui::Color32::from_rgb(56, 189, 248),
                safe: egui::Color32::from_rgb(74, 222, 128),
                conflict: egui::Color32::from_rgb(248, 113, 113),
                backtrack: egui::Color32::from_rgb(192, 132, 252),
                locked: egui::Color32::from_rgb(251, 191, 36),
                conflict_line: egui::Color32::from_rgb(220, 38, 38),
            },
            Self {
                name: "Classic Wood",
                background: egui::Color32::from_rgb(45, 25, 10),
                panel_background: egui::Color32::from_rgb(70, 40, 20),
                text_color: egui::Color32::from_rgb(245, 230, 200),
                accent_color: egui::Color32::from_rgb(180, 100, 40),
                board_light: egui::Color32::from_rgb(210, 180, 140),
                board_dark: egui::Color32::from_rgb(139, 69, 19),
                queen_color: egui::Color32::from_rgb(45, 25, 10),
                current: egui::Color32::from_rgb(135, 206, 235),
                safe: egui::Color32::from_rgb(143, 188, 143),
                conflict: egui::Color32::from_rgb(205, 92, 92),
                backtrack: egui::Color32::from_rgb(186, 85, 211),
                locked: egui::Color32::from_rgb(255, 165, 0),
                conflict_line: egui::Color32::from_rgb(139, 0, 0),
            },
            Self {
                name: "Neon Night",
                background: egui::Color32::from_rgb(10, 10, 20),
                panel_background: egui::Color32::from_rgb(20, 20, 40),
                text_color: egui::Color32::from_rgb(0, 255, 255),
                accent_color: egui::Color32::from_rgb(255, 0, 255),
                board_light: egui::Color32::from_rgb(30, 30, 60),
                board_dark: egui::Color32::from_rgb(15, 15, 30),
                queen_color: egui::Color32::from_rgb(255, 255, 0),
                current: egui::Color32::from_rgb(0, 128, 255),
                safe: egui::Color32::from_rgb(0, 200, 100),
                conflict: egui::Color32::from_rgb(255, 40, 80),
                backtrack: egui::Color32::from_rgb(160, 0, 255),
                locked: egui::Color32::from_rgb(255, 140, 0),
                conflict_line: egui::Color32::from_rgb(255, 0, 0),
            },
        ]
    }

    pub fn mark_color(&self, mark: Mark) -> egui::Color32 {
        match mark {
            Mark::Current => self.current,
            Mark::Safe => self.safe,
            Mark::Conflict => self.conflict,
            Mark::Backtrack => self.backtrack,
        }
    }

    /// The preset after this one, wrapping around.
    pub fn next(&self) -> Self {
        let presets = Self::presets();
        let idx = presets
            .iter()
            .position(|t| t.name == self.name)
            .map_or(0, |idx| (idx + 1) % presets.len());
        presets[idx].clone()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::presets()[0].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_around() {
        let presets = Theme::presets();
        let mut theme = Theme::default();
        for _ in 0..presets.len() {
            theme = theme.next();
        }
        assert_eq!(theme.name, Theme::default().name);
    }

    #[test]
    fn marks_map_to_distinct_colors() {
        let theme = Theme::default();
        let colors = [
            theme.mark_color(Mark::Current),
            theme.mark_color(Mark::Safe),
            theme.mark_color(Mark::Conflict),
            theme.mark_color(Mark::Backtrack),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

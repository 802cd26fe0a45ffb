//! Per-player column colours.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerColor {
    pub name: &'static str,
    pub header: &'static str,
    pub cell: &'static str,
    pub text: &'static str,
}

pub const PLAYER_COLORS: [PlayerColor; 10] = [
    PlayerColor { name: "Blue", header: "#4A90E2", cell: "#E3F2FD", text: "#1565C0" },
    PlayerColor { name: "Green", header: "#50C878", cell: "#E8F5E9", text: "#2E7D32" },
    PlayerColor { name: "Orange", header: "#FF9800", cell: "#FFF3E0", text: "#E65100" },
    PlayerColor { name: "Purple", header: "#9C27B0", cell: "#F3E5F5", text: "#6A1B9A" },
    PlayerColor { name: "Red", header: "#E91E63", cell: "#FCE4EC", text: "#C2185B" },
    PlayerColor { name: "Teal", header: "#009688", cell: "#E0F2F1", text: "#00695C" },
    PlayerColor { name: "Amber", header: "#FFC107", cell: "#FFF8E1", text: "#F57C00" },
    PlayerColor { name: "Indigo", header: "#3F51B5", cell: "#E8EAF6", text: "#283593" },
    PlayerColor { name: "Pink", header: "#EC407A", cell: "#FCE4EC", text: "#C2185B" },
    PlayerColor { name: "Cyan", header: "#00BCD4", cell: "#E0F7FA", text: "#00838F" },
];

/// Colour scheme for the player at `index`, cycling past the palette end.
#[must_use]
pub const fn player_color(index: usize) -> PlayerColor {
    PLAYER_COLORS[index % PLAYER_COLORS.len()]
}

impl PlayerColor {
    /// Inline style for the player's name header.
    #[must_use]
    pub fn header_style(&self) -> String {
        format!("background-color:{};color:#fff", self.header)
    }

    #[must_use]
    pub fn cell_style(&self) -> String {
        format!("background-color:{};color:{}", self.cell, self.text)
    }
}

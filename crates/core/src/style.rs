//! Colours and text styles shared by every renderer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                f32::from(self.a) / 255.0
            )
        }
    }
}

pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
pub const PANEL: Color = Color::rgb(0x1a, 0x1a, 0x1a);
pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const MUTED_TEXT: Color = Color::rgb(0xcc, 0xcc, 0xcc);
/// 80% black, used behind captions.
pub const SCRIM: Color = Color::rgba(0x00, 0x00, 0x00, 204);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font_size: f32,
    pub font_weight: u16,
    pub line_height: Option<f32>,
    pub margin_bottom: f32,
}

impl TextStyle {
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "color: {}; font-size: {}px; font-weight: {}; margin: 0 0 {}px 0;",
            self.color.to_css(),
            self.font_size,
            self.font_weight,
            self.margin_bottom
        );
        if let Some(lh) = self.line_height {
            css.push_str(&format!(" line-height: {lh}px;"));
        }
        css
    }
}

pub const PANEL_TITLE: TextStyle = TextStyle {
    color: WHITE,
    font_size: 24.0,
    font_weight: 700,
    line_height: None,
    margin_bottom: 8.0,
};

pub const PANEL_BODY: TextStyle = TextStyle {
    color: MUTED_TEXT,
    font_size: 16.0,
    font_weight: 400,
    line_height: Some(24.0),
    margin_bottom: 0.0,
};

pub const CAPTION_TITLE: TextStyle = TextStyle {
    color: WHITE,
    font_size: 18.0,
    font_weight: 600,
    line_height: None,
    margin_bottom: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_colours() {
        assert_eq!(PANEL.to_css(), "#1a1a1a");
        assert_eq!(SCRIM.to_css(), "rgba(0, 0, 0, 0.8)");
    }

    #[test]
    fn text_css_includes_line_height_only_when_set() {
        assert!(PANEL_BODY.to_css().contains("line-height: 24px;"));
        assert!(!PANEL_TITLE.to_css().contains("line-height"));
    }
}

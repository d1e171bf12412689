//! Class-based styling.
//!
//! Components describe themselves with class names (`table__cell`,
//! `app-drawer__button--del`, ...) and the theme decides what those look
//! like. Classes cascade in order: later classes override earlier ones.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

/// Declarations for a single class. Unset fields inherit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassStyle {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: Option<bool>,
}

impl ClassStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }
}

/// A style after cascading, ready to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedStyle {
    pub fg: Rgb,
    /// `None` keeps whatever is already painted underneath.
    pub bg: Option<Rgb>,
    pub bold: bool,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    classes: HashMap<String, ClassStyle>,
}

impl Theme {
    /// A theme with no class rules.
    pub fn new(background: Color, foreground: Color) -> Self {
        Self {
            background,
            foreground,
            classes: HashMap::new(),
        }
    }

    /// Add or replace the rule for a class.
    pub fn class(mut self, name: impl Into<String>, style: ClassStyle) -> Self {
        self.classes.insert(name.into(), style);
        self
    }

    /// Cascade the rules for `classes` in order.
    pub fn compute(&self, classes: &[&str]) -> ComputedStyle {
        let mut fg = self.foreground;
        let mut bg = None;
        let mut bold = false;

        for rule in classes.iter().filter_map(|name| self.classes.get(*name)) {
            if let Some(color) = rule.foreground {
                fg = color;
            }
            if let Some(color) = rule.background {
                bg = Some(color);
            }
            if let Some(flag) = rule.bold {
                bold = flag;
            }
        }

        ComputedStyle {
            fg: fg.to_rgb(),
            bg: bg.map(|c| c.to_rgb()),
            bold,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new(Color::oklch(0.18, 0.01, 250.0), Color::oklch(0.95, 0.0, 0.0))
            .class(
                "table-container__table",
                ClassStyle::new().background(Color::oklch(0.3, 0.02, 250.0)),
            )
            .class(
                "table__cell",
                ClassStyle::new()
                    .background(Color::oklch(0.45, 0.03, 250.0))
                    .foreground(Color::oklch(0.98, 0.0, 0.0)),
            )
            .class(
                "table__cell--hover",
                ClassStyle::new().background(Color::oklch(0.55, 0.06, 250.0)),
            )
            .class("app-drawer__button", ClassStyle::new().bold())
            .class(
                "app-drawer__button--add",
                ClassStyle::new()
                    .background(Color::oklch(0.62, 0.14, 145.0))
                    .foreground(Color::oklch(0.15, 0.0, 0.0)),
            )
            .class(
                "app-drawer__button--del",
                ClassStyle::new()
                    .background(Color::oklch(0.58, 0.17, 25.0))
                    .foreground(Color::oklch(0.98, 0.0, 0.0)),
            )
    }
}

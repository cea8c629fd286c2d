use std::ops::{Add, Mul};

use bytemuck::{Pod, Zeroable};

pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

/// A linear RGBA color.
///
/// Multiplication is component-wise, which is how light colors modulate surface colors.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color::new(r, g, b, 1.0)
    }

    /// A gray with all three channels set to `value`, as used for ambient light.
    pub fn gray(value: f32) -> Color {
        Color::rgb(value, value, value)
    }

    pub fn approx_eq(&self, other: &Color, epsilon: f32) -> bool {
        (self.r - other.r).abs() <= epsilon
            && (self.g - other.g).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
            && (self.a - other.a).abs() <= epsilon
    }

    /// The color as a flat `[r, g, b, a]` buffer.
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    /// The `[r, g, b]` part, for `uniform3f`-style light colors.
    pub fn rgb_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Color {
        WHITE
    }
}

impl From<[f32; 3]> for Color {
    fn from(from: [f32; 3]) -> Color {
        Color::rgb(from[0], from[1], from[2])
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    /// Scales the color channels, leaving alpha alone.
    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a)
    }
}

impl Add for Color {
    type Output = Color;

    /// Adds the color channels and keeps the left-hand alpha.
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a)
    }
}

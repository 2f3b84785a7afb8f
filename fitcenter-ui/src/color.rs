use iced::Color;

pub const WHITE: Color = iced::Color::WHITE;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x66 as f32 / 255.0,
    0x66 as f32 / 255.0,
    0x66 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x99 as f32 / 255.0,
    0x99 as f32 / 255.0,
    0x99 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xF2 as f32 / 255.0,
    0xF2 as f32 / 255.0,
    0xF2 as f32 / 255.0,
);
pub const TEAL: Color = Color::from_rgb(
    0x00 as f32 / 255.0,
    0x80 as f32 / 255.0,
    0x80 as f32 / 255.0,
);
pub const DARK_TEAL: Color = Color::from_rgb(
    0x00 as f32 / 255.0,
    0x5F as f32 / 255.0,
    0x5F as f32 / 255.0,
);
pub const TRANSPARENT_TEAL: Color = Color::from_rgba(
    0x00 as f32 / 255.0,
    0x80 as f32 / 255.0,
    0x80 as f32 / 255.0,
    0.1,
);
pub const GREEN: Color = Color::from_rgb(
    0x28 as f32 / 255.0,
    0xA7 as f32 / 255.0,
    0x45 as f32 / 255.0,
);
pub const TRANSPARENT_GREEN: Color = Color::from_rgba(
    0x28 as f32 / 255.0,
    0xA7 as f32 / 255.0,
    0x45 as f32 / 255.0,
    0.15,
);
pub const RED: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0x35 as f32 / 255.0,
    0x45 as f32 / 255.0,
);
pub const TRANSPARENT_RED: Color = Color::from_rgba(
    0xDC as f32 / 255.0,
    0x35 as f32 / 255.0,
    0x45 as f32 / 255.0,
    0.15,
);
pub const ORANGE: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0xA7 as f32 / 255.0,
    0x00 as f32 / 255.0,
);

use iced::{
    font::{Family, Stretch, Style, Weight},
    Font,
};

pub const BOLD: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Bold,
    style: Style::Normal,
    stretch: Stretch::Normal,
};

pub const MEDIUM: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Medium,
    style: Style::Normal,
    stretch: Stretch::Normal,
};

pub const REGULAR: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Normal,
    style: Style::Normal,
    stretch: Stretch::Normal,
};

use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SECTION_TITLE: Color = Color::Rgb(0x7d, 0xd3, 0xfc);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_BUSY: Color = Color::Rgb(0xfb, 0xbf, 0x24);

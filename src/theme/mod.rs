pub mod palette;
pub mod template;
pub mod transform;


pub use palette::{ColorPalette, DARK_PALETTE, LIGHT_PALETTE};
pub use template::{template_layout, templates};
pub use transform::{apply_theme, theme_figure};

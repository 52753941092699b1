pub mod image_gallery;
pub mod map_picker;
pub mod sidebar;

pub use image_gallery::ImageGallery;
pub use map_picker::MapPicker;
pub use sidebar::Sidebar;

mod file_mover;
mod image_scanner;
mod path_validator;

pub use file_mover::{move_file, resolve_destination_path};
pub use image_scanner::{IMAGE_EXTENSIONS, clamp_amount, is_hidden_file, is_image_file, list_images, parse_amount};
pub use path_validator::{is_same_directory, normalize_path, validate_directory_exists};

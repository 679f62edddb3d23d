pub mod environment;
pub mod logging;
pub mod paths;
pub mod sanitize;

pub use environment::{SITE_ROOT_VAR, get_site_root};
pub use logging::init_logging;
pub use paths::{
    filename_date, humanize_filename, is_post_filename, manifest_path, posts_dir,
    validate_file_size,
};
pub use sanitize::{escape_html, strip_control_sequences};

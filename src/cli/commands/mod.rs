mod breeds;
mod daemon;
mod fav;
mod images;

pub use breeds::cmd_breeds;
pub use daemon::cmd_daemon;
pub use fav::{cmd_fav_add, cmd_fav_list, cmd_fav_remove};
pub use images::cmd_images;

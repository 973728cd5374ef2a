use std::path::Path;

use crate::core::data::display_list::DisplayList;

pub trait FilePresenterPort {
    fn present(&self, drawing: &DisplayList, filepath: impl AsRef<Path>) -> std::io::Result<()>;

    /// File extension, without the dot, of what `present` writes.
    fn extension(&self) -> &str;
}

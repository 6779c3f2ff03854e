mod walkdir_locator;

pub use walkdir_locator::WalkDirLocator;

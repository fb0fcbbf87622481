mod category;
mod rounded;

pub use category::Category;
pub use rounded::Rounded;

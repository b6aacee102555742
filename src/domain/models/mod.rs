mod chat;
mod export_file;
mod mode;
mod notice;

pub use chat::*;
pub use export_file::*;
pub use mode::*;
pub use notice::*;

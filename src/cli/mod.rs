mod browse;
mod pages;
mod root;

pub use browse::BrowseCommand;
pub use pages::PagesCommand;
pub use root::Cli;

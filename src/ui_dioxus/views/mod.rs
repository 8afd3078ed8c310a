pub mod root_view;

#[cfg(test)]
mod root_view_test;

pub use root_view::RootView;

mod guide;
mod intro;
mod pattern_note;
mod question;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use guide::GuideView;
pub use state::ViewError;

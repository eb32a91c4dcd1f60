//! Presentation hooks.
//!
//! The widget never draws anything itself. A [`Presenter`] receives a fresh [`WidgetView`]
//! after every change while the modal is open, so the dialog technology can vary freely.

use std::sync::Arc;

use crate::view::WidgetView;

/// Renders the widget's dialog.
pub trait Presenter {
    /// Draws (or redraws) the open dialog.
    fn present(&self, view: &WidgetView);

    /// Hides the dialog.
    fn dismiss(&self) {}
}

/// A presenter that draws nothing, for headless use and for UIs that only subscribe to state.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessPresenter;

impl Presenter for HeadlessPresenter {
    fn present(&self, _view: &WidgetView) {}
}

impl<P: Presenter> Presenter for &P {
    fn present(&self, view: &WidgetView) {
        (**self).present(view)
    }

    fn dismiss(&self) {
        (**self).dismiss()
    }
}

impl<P: Presenter> Presenter for Arc<P> {
    fn present(&self, view: &WidgetView) {
        (**self).present(view)
    }

    fn dismiss(&self) {
        (**self).dismiss()
    }
}

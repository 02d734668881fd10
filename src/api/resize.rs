use crate::core::Dimensions;

/// Anything that can report the current pixel size of the host surface.
///
/// `None` means the surface is no longer attached to a document.
pub trait SizeSource {
    fn current_size(&self) -> Option<Dimensions>;
}

impl<F> SizeSource for F
where
    F: Fn() -> Option<Dimensions>,
{
    fn current_size(&self) -> Option<Dimensions> {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeChange {
    /// First size ever observed.
    Initial(Dimensions),
    Unchanged,
    Changed { from: Dimensions, to: Dimensions },
}

impl ResizeChange {
    #[must_use]
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Remembers the last observed surface size and reports real changes only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeWatcher {
    last: Option<Dimensions>,
}

impl ResizeWatcher {
    #[must_use]
    pub fn last(self) -> Option<Dimensions> {
        self.last
    }

    pub fn observe(&mut self, size: Dimensions) -> ResizeChange {
        match self.last.replace(size) {
            None => ResizeChange::Initial(size),
            Some(previous) if previous == size => ResizeChange::Unchanged,
            Some(previous) => ResizeChange::Changed {
                from: previous,
                to: size,
            },
        }
    }
}

use crate::core::models::change::ChangeKind;
use crate::core::models::ids::ComponentId;

/// A single observable change of one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentChange {
    pub component: ComponentId,
    pub kind: ChangeKind,
}

pub type ChangeCallback<'a> = Box<dyn Fn(ComponentChange) + Send + Sync + 'a>;

/// Delivers component changes to an optional listener.
#[derive(Default)]
pub struct ChangeNotifier<'a> {
    callback: Option<ChangeCallback<'a>>,
}

impl<'a> ChangeNotifier<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ChangeCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn notify(&self, change: ComponentChange) {
        if let Some(cb) = &self.callback {
            cb(change);
        }
    }

    /// Forwards the outcome of a setter, emitting nothing when the setter changed nothing.
    #[inline]
    pub fn emit(&self, component: ComponentId, change: Option<ChangeKind>) -> Option<ChangeKind> {
        if let Some(kind) = change {
            self.notify(ComponentChange { component, kind });
        }
        change
    }
}

//! Leptos DragDrop Utilities
//!
//! Board-agnostic drag-and-drop vocabulary for sortable containers and their cards.
//! A drag session is reported as a stream of [`DragEvent`]s; the
//! [`PointerSensor`] decides when a press becomes a drag, and [`ActiveDrag`]
//! holds the dragged payload for overlay rendering.

use leptos::prelude::*;

/// Movement (in pixels) required before a press turns into a drag
pub const ACTIVATION_DISTANCE_PX: i32 = 3;

/// Anything that can be dragged exposes a stable identity
pub trait DragId {
    type Id: PartialEq;

    fn drag_id(&self) -> Self::Id;
}

/// Tagged drag payload: either a container (column) or a card (task)
#[derive(Clone, Debug, PartialEq)]
pub enum DragItem<C, T> {
    Column(C),
    Task(T),
}

impl<C: DragId, T: DragId> DragItem<C, T> {
    /// Same kind and same id. A column never equals a task, even when the raw ids collide.
    pub fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (DragItem::Column(a), DragItem::Column(b)) => a.drag_id() == b.drag_id(),
            (DragItem::Task(a), DragItem::Task(b)) => a.drag_id() == b.drag_id(),
            _ => false,
        }
    }
}

/// Gesture lifecycle event
#[derive(Clone, Debug, PartialEq)]
pub enum DragEvent<C, T> {
    Start {
        active: DragItem<C, T>,
    },
    /// May fire many times per gesture. `over` is `None` outside every drop target.
    Over {
        active: DragItem<C, T>,
        over: Option<DragItem<C, T>>,
    },
    End {
        active: DragItem<C, T>,
        over: Option<DragItem<C, T>>,
    },
}

// ========================
// Pointer Sensor
// ========================

/// Distinguishes a click from a drag using a movement threshold
#[derive(Clone, Copy, Debug)]
pub struct PointerSensor {
    activation_distance: i32,
    pressed_at: Option<(i32, i32)>,
    dragging: bool,
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new(ACTIVATION_DISTANCE_PX)
    }
}

impl PointerSensor {
    pub fn new(activation_distance: i32) -> Self {
        Self {
            activation_distance: activation_distance.max(0),
            pressed_at: None,
            dragging: false,
        }
    }

    /// Record a primary-button press at the given client position
    pub fn press(&mut self, x: i32, y: i32) {
        self.pressed_at = Some((x, y));
        self.dragging = false;
    }

    /// Returns `true` exactly once: on the move that activates the drag
    pub fn movement(&mut self, x: i32, y: i32) -> bool {
        if self.dragging {
            return false;
        }
        let Some((start_x, start_y)) = self.pressed_at else {
            return false;
        };
        let dx = i64::from(x - start_x);
        let dy = i64::from(y - start_y);
        let threshold = i64::from(self.activation_distance);
        if dx * dx + dy * dy >= threshold * threshold {
            self.dragging = true;
            return true;
        }
        false
    }

    /// End the press. Returns whether a drag was in progress (otherwise it was a click).
    pub fn release(&mut self) -> bool {
        let was_dragging = self.dragging;
        self.pressed_at = None;
        self.dragging = false;
        was_dragging
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

// ========================
// Active-Drag Presentation State
// ========================

/// The entity currently under the pointer's drag, for overlay rendering only
pub struct ActiveDrag<C, T>
where
    C: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    item: RwSignal<Option<DragItem<C, T>>>,
}

impl<C, T> Clone for ActiveDrag<C, T>
where
    C: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, T> Copy for ActiveDrag<C, T>
where
    C: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
}

impl<C, T> ActiveDrag<C, T>
where
    C: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            item: RwSignal::new(None),
        }
    }

    pub fn start(&self, item: DragItem<C, T>) {
        self.item.set(Some(item));
    }

    pub fn clear(&self) {
        self.item.set(None);
    }

    /// Reactive read, for use inside views
    pub fn item(&self) -> Option<DragItem<C, T>> {
        self.item.get()
    }

    pub fn item_untracked(&self) -> Option<DragItem<C, T>> {
        self.item.get_untracked()
    }

    pub fn is_active(&self) -> bool {
        self.item.with_untracked(Option::is_some)
    }
}

impl<C, T> Default for ActiveDrag<C, T>
where
    C: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Card(u32);

    impl DragId for Card {
        type Id = u32;

        fn drag_id(&self) -> u32 {
            self.0
        }
    }

    type Item = DragItem<Card, Card>;

    #[test]
    fn test_same_kind_same_id_is_same() {
        assert!(Item::Task(Card(1)).is_same(&Item::Task(Card(1))));
        assert!(!Item::Task(Card(1)).is_same(&Item::Task(Card(2))));
    }

    #[test]
    fn test_column_never_same_as_task() {
        assert!(!Item::Column(Card(7)).is_same(&Item::Task(Card(7))));
    }

    #[test]
    fn test_sensor_click_does_not_activate() {
        let mut sensor = PointerSensor::default();
        sensor.press(10, 10);
        assert!(!sensor.movement(11, 11));
        assert!(!sensor.release());
    }

    #[test]
    fn test_sensor_activates_once_past_threshold() {
        let mut sensor = PointerSensor::default();
        sensor.press(0, 0);
        assert!(sensor.movement(3, 0));
        assert!(sensor.is_dragging());
        assert!(!sensor.movement(30, 0));
        assert!(sensor.release());
        assert!(!sensor.is_dragging());
    }

    #[test]
    fn test_sensor_ignores_movement_without_press() {
        let mut sensor = PointerSensor::default();
        assert!(!sensor.movement(100, 100));
    }

    #[test]
    fn test_active_drag_start_and_clear() {
        let overlay: ActiveDrag<Card, Card> = ActiveDrag::new();
        assert!(!overlay.is_active());

        overlay.start(DragItem::Task(Card(4)));
        assert!(overlay.is_active());
        assert_eq!(overlay.item_untracked(), Some(DragItem::Task(Card(4))));
        assert_eq!(overlay.item(), Some(DragItem::Task(Card(4))));

        overlay.clear();
        assert_eq!(overlay.item_untracked(), None);
    }
}

//! 焦点环
//!
//! Forms cycle focus over their text fields and buttons. The ring has
//! `count + 1` slots: every index in `0..=count` is reachable, and moving past
//! either end wraps around.

use super::field::Field;

/// Direction of a focus move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Move `index` one step in `direction` on a ring of `count + 1` slots
pub fn advance(index: usize, direction: Direction, count: usize) -> usize {
    let slots = count + 1;
    let index = index % slots;
    match direction {
        Direction::Forward => (index + 1) % slots,
        Direction::Backward => (index + slots - 1) % slots,
    }
}

/// Focus position within a form of `fields` text inputs followed by `buttons`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusRing {
    index: usize,
    fields: usize,
    buttons: usize,
}

impl FocusRing {
    pub fn new(fields: usize, buttons: usize) -> Self {
        Self {
            index: 0,
            fields,
            buttons,
        }
    }

    /// Start at a specific slot
    #[must_use]
    pub fn at(mut self, index: usize) -> Self {
        self.index = index.min(self.last());
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = advance(self.index, Direction::Forward, self.last());
    }

    pub fn prev(&mut self) {
        self.index = advance(self.index, Direction::Backward, self.last());
    }

    /// Index of the focused text field, if focus is on a field
    pub fn field(&self) -> Option<usize> {
        (self.index < self.fields).then_some(self.index)
    }

    /// Index of the focused button, if focus is on a button
    pub fn button(&self) -> Option<usize> {
        self.index
            .checked_sub(self.fields)
            .filter(|&b| b < self.buttons)
    }

    /// Focus the field under the ring and blur all the others
    pub fn sync<'a>(&self, fields: impl IntoIterator<Item = &'a mut Field>) {
        for (i, field) in fields.into_iter().enumerate() {
            if self.field() == Some(i) {
                field.focus();
            } else {
                field.blur();
            }
        }
    }

    fn last(&self) -> usize {
        (self.fields + self.buttons).saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_wraps_to_zero() {
        assert_eq!(advance(4, Direction::Forward, 4), 0);
        assert_eq!(advance(2, Direction::Forward, 4), 3);
    }

    #[test]
    fn backward_wraps_to_count() {
        assert_eq!(advance(0, Direction::Backward, 4), 4);
        assert_eq!(advance(3, Direction::Backward, 4), 2);
    }

    #[test]
    fn every_slot_is_reachable_and_cycle_returns_home() {
        for count in 0..6 {
            for start in 0..=count {
                let mut seen = vec![false; count + 1];
                let mut i = start;
                for _ in 0..=count {
                    seen[i] = true;
                    i = advance(i, Direction::Forward, count);
                }
                assert_eq!(i, start);
                assert!(seen.iter().all(|s| *s));

                for _ in 0..=count {
                    i = advance(i, Direction::Backward, count);
                }
                assert_eq!(i, start);
            }
        }
    }

    #[test]
    fn ring_reports_field_or_button() {
        let mut ring = FocusRing::new(2, 2);
        assert_eq!(ring.field(), Some(0));
        ring.next();
        ring.next();
        assert_eq!(ring.field(), None);
        assert_eq!(ring.button(), Some(0));
        ring.next();
        assert_eq!(ring.button(), Some(1));
        ring.next();
        assert_eq!(ring.field(), Some(0));
        ring.prev();
        assert_eq!(ring.button(), Some(1));
    }

    #[test]
    fn sync_focuses_exactly_one_field() {
        let mut a = Field::new("A", "");
        let mut b = Field::new("B", "");
        let ring = FocusRing::new(2, 1).at(1);
        ring.sync([&mut a, &mut b]);
        assert!(!a.is_focused());
        assert!(b.is_focused());

        let ring = ring.at(2);
        ring.sync([&mut a, &mut b]);
        assert!(!a.is_focused() && !b.is_focused());
    }
}

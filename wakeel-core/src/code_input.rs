//! Segmented one-digit-per-cell code entry.

/// N ordered cells, each empty or holding one ASCII digit, plus the index of
/// the focused cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedCode {
    cells: Vec<Option<char>>,
    focus: usize,
}

impl SegmentedCode {
    /// `length` cells, all empty, focus on the first. A zero length yields a
    /// control that ignores every event.
    pub fn new(length: usize) -> Self {
        Self {
            cells: vec![None; length],
            focus: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// True when every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(Option::is_some)
    }

    /// Concatenated digits of the filled cells, in order.
    pub fn value(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Raw text arrives at cell `index`. Non-digits are stripped and the first
    /// remaining digit (or nothing) replaces the cell. An accepted digit moves
    /// focus forward unless `index` is the last cell.
    pub fn input(&mut self, index: usize, raw: &str) {
        let Some(slot) = self.cells.get_mut(index) else {
            return;
        };
        let accepted = raw.chars().find(char::is_ascii_digit);
        *slot = accepted;
        if accepted.is_some() && index + 1 < self.cells.len() {
            self.focus = index + 1;
        }
    }

    /// A single key typed into cell `index`. The cell's text after the edit
    /// is its current digit followed by `typed`, so a stray non-digit leaves
    /// an existing digit in place.
    pub fn keystroke(&mut self, index: usize, typed: char) {
        let Some(current) = self.cells.get(index) else {
            return;
        };
        let raw: String = current.iter().copied().chain(std::iter::once(typed)).collect();
        self.input(index, &raw);
    }

    /// Deletion at cell `index`. A filled cell is cleared in place; an empty
    /// cell hands focus to its predecessor without touching its content.
    pub fn delete(&mut self, index: usize) {
        let Some(slot) = self.cells.get_mut(index) else {
            return;
        };
        if slot.take().is_none() && index > 0 {
            self.focus = index - 1;
        }
    }

    /// Clear every cell and return focus to the first.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.focus = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_strips_non_digits() {
        let mut code = SegmentedCode::new(4);
        code.input(0, "a7b");
        assert_eq!(code.cell(0), Some('7'));
        assert_eq!(code.focus(), 1);
    }

    #[test]
    fn test_input_without_digit_leaves_empty_cell_and_keeps_focus() {
        let mut code = SegmentedCode::new(4);
        code.input(0, "5");
        code.input(1, "x");
        assert_eq!(code.cell(1), None);
        assert_eq!(code.focus(), 1);
    }

    #[test]
    fn test_keystroke_non_digit_keeps_filled_cell() {
        let mut code = SegmentedCode::new(2);
        code.keystroke(0, '1');
        code.keystroke(1, '2');
        code.keystroke(1, 'x');
        assert_eq!(code.value(), "12");
        assert_eq!(code.focus(), 1);
    }

    #[test]
    fn test_keystroke_on_filled_cell_keeps_first_digit() {
        let mut code = SegmentedCode::new(3);
        code.keystroke(0, '5');
        code.keystroke(0, '7');
        assert_eq!(code.cell(0), Some('5'));
        code.delete(0);
        code.keystroke(0, '7');
        assert_eq!(code.cell(0), Some('7'));
    }

    #[test]
    fn test_keystroke_non_digit_on_empty_cell_ignored() {
        let mut code = SegmentedCode::new(3);
        code.keystroke(0, 'a');
        assert_eq!(code.cell(0), None);
        assert_eq!(code.focus(), 0);
        code.keystroke(7, '1');
        assert_eq!(code.value(), "");
    }

    #[test]
    fn test_multi_digit_paste_is_not_distributed() {
        let mut code = SegmentedCode::new(4);
        code.input(0, "1234");
        assert_eq!(code.cells(), &[Some('1'), None, None, None]);
        assert_eq!(code.focus(), 1);
    }

    #[test]
    fn test_last_cell_input_keeps_focus() {
        let mut code = SegmentedCode::new(2);
        code.input(0, "1");
        code.input(1, "2");
        assert_eq!(code.focus(), 1);
        assert!(code.is_complete());
        assert_eq!(code.value(), "12");
    }

    #[test]
    fn test_delete_filled_cell_clears_in_place() {
        let mut code = SegmentedCode::new(3);
        code.input(0, "1");
        code.input(1, "2");
        code.delete(1);
        assert_eq!(code.cell(1), None);
        assert_eq!(code.cell(0), Some('1'));
        assert_eq!(code.focus(), 2);
    }

    #[test]
    fn test_delete_empty_cell_moves_back_without_cascade() {
        let mut code = SegmentedCode::new(3);
        code.input(0, "1");
        code.delete(1);
        assert_eq!(code.focus(), 0);
        assert_eq!(code.cell(0), Some('1'));
    }

    #[test]
    fn test_delete_at_first_cell_keeps_focus() {
        let mut code = SegmentedCode::new(3);
        code.delete(0);
        assert_eq!(code.focus(), 0);
    }

    #[test]
    fn test_out_of_range_events_ignored() {
        let mut code = SegmentedCode::new(2);
        code.input(9, "1");
        code.delete(9);
        assert_eq!(code, SegmentedCode::new(2));
    }

    #[test]
    fn test_zero_length_never_complete() {
        let mut code = SegmentedCode::new(0);
        code.input(0, "1");
        assert!(!code.is_complete());
        assert_eq!(code.value(), "");
    }

    #[test]
    fn test_reset_clears_cells() {
        let mut code = SegmentedCode::new(2);
        code.input(0, "4");
        code.reset();
        assert_eq!(code, SegmentedCode::new(2));
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Typing k digits left-to-right leaves focus on min(k, N-1).
        #[test]
        fn prop_typing_digits_advances_focus(len in 1usize..9, digits in "[0-9]{0,12}") {
            let mut code = SegmentedCode::new(len);
            let mut typed = 0;
            for ch in digits.chars().take(len) {
                code.input(code.focus(), &ch.to_string());
                typed += 1;
            }
            prop_assert_eq!(code.focus(), typed.min(len - 1));
            prop_assert_eq!(code.value().len(), typed);
        }

        /// Arbitrary text never leaves a non-digit in any cell.
        #[test]
        fn prop_cells_only_hold_digits(len in 1usize..9, inputs in prop::collection::vec(".{0,6}", 0..20)) {
            let mut code = SegmentedCode::new(len);
            for raw in &inputs {
                code.input(code.focus(), raw);
            }
            prop_assert!(code.cells().iter().flatten().all(char::is_ascii_digit));
        }

        /// A keystroke never removes a digit already in the cell.
        #[test]
        fn prop_keystroke_preserves_filled_cell(len in 1usize..9, digit in 0u8..10, typed in any::<char>()) {
            let mut code = SegmentedCode::new(len);
            let digit = char::from(b'0' + digit);
            code.keystroke(0, digit);
            code.keystroke(0, typed);
            prop_assert_eq!(code.cell(0), Some(digit));
        }

        /// Deleting from an empty cell i > 0 moves focus to i - 1.
        #[test]
        fn prop_delete_from_empty_moves_back(len in 2usize..9, pick in any::<usize>()) {
            let index = 1 + pick % (len - 1);
            let mut code = SegmentedCode::new(len);
            code.delete(index);
            prop_assert_eq!(code.focus(), index - 1);
        }
    }
}

/// Open/closed bookkeeping for the FAQ list. Only the open index is stored,
/// so two items can never be open at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking a question closes every other item and flips its own.
    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn answer_display(&self, index: usize) -> &'static str {
        if self.is_open(index) { "display: block;" } else { "display: none;" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let acc = Accordion::default().toggle(0);
        assert!(acc.is_open(0));
        let acc = acc.toggle(2);
        assert!(!acc.is_open(0));
        assert!(acc.is_open(2));
        assert_eq!(acc.answer_display(0), "display: none;");
        assert_eq!(acc.answer_display(2), "display: block;");
    }

    #[test]
    fn clicking_open_item_closes_it() {
        let acc = Accordion::default().toggle(1).toggle(1);
        assert_eq!(acc, Accordion::default());
        assert!((0..5).all(|i| !acc.is_open(i)));
    }

    #[test]
    fn never_more_than_one_open() {
        let clicks = [3, 1, 1, 4, 0, 0, 0, 2, 4, 4, 1, 3];
        let mut acc = Accordion::default();
        for click in clicks {
            acc = acc.toggle(click);
            let open = (0..5).filter(|i| acc.is_open(*i)).count();
            assert!(open <= 1);
        }
    }
}

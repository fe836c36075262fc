// faq accordion
//
// at most one answer is open at a time; toggling the open one closes it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Faq {
    len: usize,
    active: Option<usize>,
}

impl Faq {
    pub fn new(len: usize) -> Self {
        Faq { len, active: None }
    }

    pub fn toggle(&mut self, item: usize) -> Option<usize> {
        if item >= self.len {
            return self.active;
        }

        self.active = if self.active == Some(item) {
            None
        } else {
            Some(item)
        };

        self.active
    }

    pub fn is_open(&self, item: usize) -> bool {
        self.active == Some(item)
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

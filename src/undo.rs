use crate::action::CellAction;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActionStack {
    e: Vec<CellAction>,
}

impl ActionStack {
    pub fn new() -> ActionStack {
        ActionStack { e: Vec::new() }
    }

    pub fn pop(&mut self) -> Option<CellAction> {
        self.e.pop()
    }

    pub fn push(&mut self, action: CellAction) {
        self.e.push(action);
    }

    pub fn is_empty(&self) -> bool {
        self.e.is_empty()
    }

    pub fn clear(&mut self) {
        self.e.clear();
    }

    pub fn len(&self) -> usize {
        self.e.len()
    }

    pub fn peek(&self) -> Option<&CellAction> {
        self.e.last()
    }

    /// Walks the stack from the top (most recent) down.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &CellAction> {
        self.e.iter().rev()
    }
}

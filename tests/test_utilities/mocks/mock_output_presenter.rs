use container_suseconnect::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock OutputPresenter capturing everything presented
#[derive(Clone, Default)]
pub struct MockOutputPresenter {
    output: Rc<RefCell<String>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> String {
        self.output.borrow().clone()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.output.borrow_mut().push_str(content);
        Ok(())
    }
}

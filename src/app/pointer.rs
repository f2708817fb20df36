#[derive(Clone, Default)]
pub struct Pointer {
    previous: Option<Box<Pointer>>,
    pub location: (f64, f64),
    pub button: bool,
}

impl Pointer {
    pub fn new() -> Pointer {
        Pointer::default()
    }

    /// True on the first frame the button is seen held down.
    pub fn clicked(&self) -> bool {
        match &self.previous {
            Some(pointer) => self.button && !pointer.button,
            None => self.button,
        }
    }

    pub fn swap(&mut self) {
        self.previous.take(); // Must explicitly drop old Pointer from heap
        self.previous = Some(Box::new(self.clone()));
    }
}

use std::ops::Deref;

mod create;

pub use create::CreateBookingInput;

#[derive(Clone)]
pub struct Command(pub hutbook_shared::State);

impl Deref for Command {
    type Target = hutbook_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: hutbook_shared::State) -> Self {
        Self(state)
    }
}

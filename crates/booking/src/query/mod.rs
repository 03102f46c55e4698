use std::ops::Deref;

mod list;

#[derive(Clone)]
pub struct Query(pub hutbook_shared::State);

impl Deref for Query {
    type Target = hutbook_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Query {
    pub fn new(state: hutbook_shared::State) -> Self {
        Self(state)
    }
}

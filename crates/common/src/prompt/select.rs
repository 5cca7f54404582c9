use std::fmt::Display;

use cliclack::Select;

pub struct PromptSelect<T: Clone + Eq> {
    inner: Select<T>,
}

impl<T> PromptSelect<T>
where
    T: Clone + Eq,
{
    pub fn new<I>(question: &str, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        Self {
            inner: Select::new(question).items(
                &items
                    .into_iter()
                    .map(|item| (item.clone(), item.to_string(), ""))
                    .collect::<Vec<_>>(),
            ),
        }
    }

    pub fn ask(mut self) -> T {
        self.inner.interact().unwrap()
    }
}

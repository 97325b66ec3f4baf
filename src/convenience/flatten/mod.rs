/// Returns a lazy iterator over the leaves of `root` in depth-first,
/// left-to-right order.
///
/// `classify` decides what counts as a collection: it either hands back an
/// iterator over a value's children (descend) or the value itself (yield as a
/// leaf). Supplying a custom `classify` lets callers keep chosen composites
/// intact, e.g. treat pairs as atomic while still descending into lists.
///
/// Terminates on acyclic inputs; cyclic structures are not supported.
pub fn flatten<T, I, F>(root: T, classify: F) -> Flatten<T, I, F>
where
    I: Iterator<Item = T>,
    F: FnMut(T) -> Result<I, T>,
{
    Flatten {
        root: Some(root),
        stack: Vec::new(),
        classify,
    }
}

pub struct Flatten<T, I, F> {
    root: Option<T>,
    stack: Vec<I>,
    classify: F,
}

impl<T, I, F> Iterator for Flatten<T, I, F>
where
    I: Iterator<Item = T>,
    F: FnMut(T) -> Result<I, T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let value = match self.root.take() {
                Some(root) => root,
                None => loop {
                    match self.stack.last_mut()?.next() {
                        Some(value) => break value,
                        None => {
                            self.stack.pop();
                        }
                    }
                },
            };

            match (self.classify)(value) {
                Ok(children) => self.stack.push(children),
                Err(leaf) => return Some(leaf),
            }
        }
    }
}

pub trait Compose<X> {
    fn compose(self) -> impl Fn(X) -> X;
}

impl<T, F, X> Compose<X> for T
where
    T: IntoIterator<Item = F>,
    F: Fn(X) -> X,
{
    /// Composes a series of operations `f0, f1, ..., fn` into a single
    /// operation equivalent to applying them left to right, i.e.
    /// `f(x) = fn( ... f1( f0(x) ) ... )`.
    ///
    /// The stages are collected up front, so the returned closure can be
    /// called any number of times.
    fn compose(self) -> impl Fn(X) -> X {
        let stages: Vec<F> = self.into_iter().collect();
        move |x| stages.iter().fold(x, |x, f| f(x))
    }
}

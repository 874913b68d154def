use crate::stream::Stream;
use std::rc::Rc;

/// One recorded contribution to a builder.
enum Part<T> {
    Element(T),
    Stream(Stream<T>),
    LazyElement(Rc<dyn Fn() -> T>),
    LazyStream(Rc<dyn Fn() -> Stream<T>>),
}

impl<T: Clone> Clone for Part<T> {
    fn clone(&self) -> Self {
        match self {
            Part::Element(elem) => Part::Element(elem.clone()),
            Part::Stream(stream) => Part::Stream(stream.clone()),
            Part::LazyElement(f) => Part::LazyElement(Rc::clone(f)),
            Part::LazyStream(f) => Part::LazyStream(Rc::clone(f)),
        }
    }
}

/// Mutable accumulator of elements and sub-streams, each possibly lazy,
/// that flattens into a single stream on demand.
///
/// Producing a stream snapshots the recorded parts, so later pushes or a
/// `clear` never affect a stream that was already produced.
pub struct StreamBuilder<T> {
    parts: Vec<Part<T>>,
}

impl<T: Clone + 'static> StreamBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Records a single element.
    pub fn push(&mut self, elem: T) -> &mut Self {
        self.parts.push(Part::Element(elem));
        self
    }

    /// Records an element computed when traversal reaches it.
    pub fn push_lazy<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> T + 'static,
    {
        self.parts.push(Part::LazyElement(Rc::new(f)));
        self
    }

    /// Records a stream; its elements are not forced here.
    pub fn append_stream(&mut self, stream: Stream<T>) -> &mut Self {
        self.parts.push(Part::Stream(stream));
        self
    }

    /// Records a stream produced when traversal reaches it.
    pub fn append_lazy<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> Stream<T> + 'static,
    {
        self.parts.push(Part::LazyStream(Rc::new(f)));
        self
    }

    /// Number of recorded parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Forgets every recorded part. Streams already produced are unaffected.
    pub fn clear(&mut self) {
        self.parts.clear();
    }

    /// Flattens the recorded parts, in order, into one stream.
    ///
    /// Parts are evaluated only until the first element is found; the rest
    /// are evaluated as traversal reaches them.
    pub fn to_stream(&self) -> Stream<T> {
        let parts: Rc<[Part<T>]> = self.parts.iter().cloned().collect();
        log::debug!("flattening {} builder parts", parts.len());
        flatten(parts, 0)
    }
}

fn flatten<T: Clone + 'static>(parts: Rc<[Part<T>]>, mut index: usize) -> Stream<T> {
    // Empty parts are skipped here rather than through `concat_with`, which
    // would evaluate the rest on the same stack.
    loop {
        let part = match parts.get(index) {
            None => return Stream::empty(),
            Some(Part::Element(elem)) => Stream::single(elem.clone()),
            Some(Part::LazyElement(f)) => Stream::single(f()),
            Some(Part::Stream(stream)) => stream.clone(),
            Some(Part::LazyStream(f)) => f(),
        };
        index += 1;
        if !part.is_empty() {
            return part.concat_with(move || flatten(parts, index));
        }
    }
}

impl<T: Clone + 'static> Default for StreamBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Extend<T> for StreamBuilder<T> {
    /// Records every element of `iter` as its own part.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// Returns an empty [`StreamBuilder`].
    pub fn builder() -> StreamBuilder<T> {
        StreamBuilder::new()
    }
}

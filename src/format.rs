use crate::stream::{Frontier, Stream};
use std::fmt::{self, Write};

impl<T> Stream<T> {
    /// Writes `Stream(a, b, ?)`: the forced prefix, then `?` for an unforced
    /// remainder or `...` for a forced cycle. Never forces.
    fn write_forced_prefix(
        &self,
        f: &mut fmt::Formatter<'_>,
        mut write_elem: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
    ) -> fmt::Result {
        f.write_str("Stream(")?;
        let mut result = Ok(());
        let mut first = true;
        let frontier = self.walk_forced(|elem| {
            if result.is_err() {
                return;
            }
            if !first {
                result = f.write_str(", ");
            }
            first = false;
            if result.is_ok() {
                result = write_elem(f, elem);
            }
        });
        result?;
        match frontier {
            Frontier::Empty => {}
            Frontier::Unforced => f.write_str(", ?")?,
            Frontier::Cycle => f.write_str(", ...")?,
        }
        f.write_str(")")
    }
}

impl<T: fmt::Display> Stream<T> {
    /// Concatenates every element's `Display` form, separated by `sep`.
    ///
    /// Forces the whole stream and never returns on an infinite one.
    pub fn join(&self, sep: &str) -> String {
        self.mk_string("", sep, "")
    }

    /// Like [`Stream::join`] with a leading and trailing string.
    pub fn mk_string(&self, start: &str, sep: &str, end: &str) -> String {
        let mut out = String::from(start);
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{}", elem);
        }
        out.push_str(end);
        out
    }
}

impl<T: fmt::Display> fmt::Display for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_forced_prefix(f, |f, elem| write!(f, "{}", elem))
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_forced_prefix(f, |f, elem| write!(f, "{:?}", elem))
    }
}
